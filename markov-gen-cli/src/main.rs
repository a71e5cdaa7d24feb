use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::{debug, warn};

use markov_gen_core::model::markov_model::MarkovModel;

/// Session banner, also used as the default sample text.
const WELCOME_TEXT: &str = "\
Welcome to the Markov model random text generator.
It builds new text from a sample you provide. You will be asked for:

1. The sample text, typed in directly or read from a .txt file.

2. The length in characters of the text to generate.

3. A number called order k that controls how closely the output
follows the sample. A small order produces very random text and a
large one ends up reproducing the sample verbatim. Try an order k
of 5 or 6 to start with.

Type exit at any prompt to quit.
";

/// Where the sample text of a round comes from.
#[derive(Debug, PartialEq, Eq)]
enum TextSource {
	/// The built-in welcome text
	Default,
	/// The contents of a file
	File(PathBuf),
	/// The reply itself
	Literal(String),
}

impl TextSource {
	/// Classifies a reply to the sample text prompt.
	///
	/// An empty reply selects the welcome text, a reply ending in `.txt`
	/// names a file to read, anything else is the sample text verbatim.
	fn classify(reply: &str) -> Self {
		if reply.is_empty() {
			Self::Default
		} else if reply.ends_with(".txt") {
			Self::File(PathBuf::from(reply))
		} else {
			Self::Literal(reply.to_owned())
		}
	}
}

/// Parses a reply as a strictly positive integer.
fn parse_positive(reply: &str) -> Result<usize, String> {
	match reply.trim().parse::<usize>() {
		Ok(0) => Err("The value must be at least 1".to_owned()),
		Ok(value) => Ok(value),
		Err(_) => Err(format!("\"{reply}\" is not a number")),
	}
}

/// Prints `question` and reads one trimmed line from standard input.
///
/// Returns `None` when the input is exhausted, which ends the session the
/// same way an explicit `exit` does.
fn prompt(question: &str) -> io::Result<Option<String>> {
	print!("{question}");
	io::stdout().flush()?;

	let mut reply = String::new();
	if io::stdin().lock().read_line(&mut reply)? == 0 {
		return Ok(None);
	}
	Ok(Some(reply.trim().to_owned()))
}

/// Asks `question` until the reply parses as a positive integer.
fn prompt_positive(question: &str) -> io::Result<Option<usize>> {
	loop {
		let reply = match prompt(question)? {
			Some(reply) => reply,
			None => return Ok(None),
		};
		if reply == "exit" {
			return Ok(None);
		}
		match parse_positive(&reply) {
			Ok(value) => return Ok(Some(value)),
			Err(e) => println!("{e}"),
		}
	}
}

/// Asks for the sample text and resolves it to the actual text.
fn prompt_text() -> io::Result<Option<String>> {
	let reply = match prompt("1. Enter the sample text, a .txt filename, or nothing for the default text: ")? {
		Some(reply) => reply,
		None => return Ok(None),
	};
	if reply == "exit" {
		return Ok(None);
	}
	match TextSource::classify(&reply) {
		TextSource::Default => Ok(Some(WELCOME_TEXT.to_owned())),
		TextSource::Literal(text) => Ok(Some(text)),
		TextSource::File(path) => read_text_file(path),
	}
}

/// Reads the sample text from `path`, asking for another filename until a
/// file can be read.
fn read_text_file(mut path: PathBuf) -> io::Result<Option<String>> {
	loop {
		match fs::read_to_string(&path) {
			Ok(text) => return Ok(Some(text)),
			Err(e) => {
				warn!("could not read {}: {e}", path.display());
				println!("Could not read \"{}\": {e}", path.display());
			}
		}
		path = match prompt("Enter the filename: ")? {
			Some(reply) if reply != "exit" => PathBuf::from(reply),
			_ => return Ok(None),
		};
	}
}

/// Builds a model of order `order` from `text` and prints one generated
/// string of `length` characters, seeded with the first `order` characters
/// of the text.
///
/// Errors end the round with a message instead of the session.
fn generate(text: &str, order: usize, length: usize) {
	let model = match MarkovModel::new(text, order) {
		Ok(model) => model,
		Err(e) => {
			println!("Could not build the model: {e}");
			return;
		}
	};
	debug!(
		"model of order {} built, {} distinct kgrams",
		model.order(),
		model.kgram_count()
	);

	let seed: String = text.chars().take(order).collect();
	match model.generate_string(&seed, length) {
		Ok(out) => {
			println!("\nHere is your randomly generated text:\n");
			println!("{out}\n");
		}
		Err(e) => println!("Could not generate: {e}"),
	}
}

/// Runs prompt rounds until the user types `exit` or the input ends.
fn run() -> io::Result<()> {
	println!("{WELCOME_TEXT}");

	loop {
		let text = match prompt_text()? {
			Some(text) => text,
			None => break,
		};
		let length = match prompt_positive("2. Enter the length in characters of the text to generate: ")? {
			Some(length) => length,
			None => break,
		};
		let order = match prompt_positive("3. Enter a number for order k (try 5 or 6): ")? {
			Some(order) => order,
			None => break,
		};

		generate(&text, order, length);

		match prompt("Press enter to go again, or type exit to quit: ")? {
			Some(reply) if reply != "exit" => (),
			_ => break,
		}
	}

	println!("Goodbye.");
	Ok(())
}

/// Main entry point for the interactive generator.
///
/// Reads a sample text, an output length and a model order from standard
/// input in a loop and prints one generated string per round.
fn main() -> io::Result<()> {
	env_logger::init();
	run()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_reply_selects_the_default_text() {
		assert_eq!(TextSource::classify(""), TextSource::Default);
	}

	#[test]
	fn txt_suffix_selects_a_file() {
		assert_eq!(
			TextSource::classify("corpus.txt"),
			TextSource::File(PathBuf::from("corpus.txt"))
		);
	}

	#[test]
	fn anything_else_is_the_text_itself() {
		assert_eq!(
			TextSource::classify("once upon a time"),
			TextSource::Literal("once upon a time".to_owned())
		);
	}

	#[test]
	fn positive_integers_parse() {
		assert_eq!(parse_positive("42"), Ok(42));
		assert_eq!(parse_positive(" 7 "), Ok(7));
	}

	#[test]
	fn zero_and_garbage_are_rejected() {
		assert!(parse_positive("0").is_err());
		assert!(parse_positive("five").is_err());
		assert!(parse_positive("").is_err());
		assert!(parse_positive("-3").is_err());
	}

	#[test]
	fn default_text_is_long_enough_to_model() {
		assert!(MarkovModel::new(WELCOME_TEXT, 6).is_ok());
	}
}
