use std::collections::HashMap;

use rand::prelude::IteratorRandom;

use super::successors::Successors;
use crate::error::{ModelError, Result};

/// A Markov model of order k over the characters of a training text.
///
/// The model stores a frequency table mapping every kgram (a prefix of
/// exactly k characters) observed in the circularized training text to the
/// distribution of characters that followed it. The table is built once at
/// construction and is read-only afterwards.
///
/// # Responsibilities
/// - Build the frequency table from a training text and order k
/// - Report the model order and kgram occurrence counts
/// - Draw a random successor for a given kgram
/// - Generate a sequence of requested length by simulating the chain
///
/// # Invariants
/// - `order` is always >= 1
/// - Every key in `table` has exactly `order` characters
/// - Every recorded successor count is >= 1
/// - Every kgram in the table has at least one recorded successor
#[derive(Debug, Clone)]
pub struct MarkovModel {
	/// The order of the model (number of characters in a kgram)
	order: usize, // must be >= 1

	/// Mapping from a kgram to its successor distribution
	table: HashMap<String, Successors>,
}

impl MarkovModel {
	/// Builds a Markov model of order `order` from `text`.
	///
	/// The text is circularized first: its own first `order` characters are
	/// appended to its end, so every kgram occurring in the text has at
	/// least one recorded successor, including the kgram formed by the
	/// text's final `order` characters.
	///
	/// # Errors
	/// Returns `ModelError::InvalidOrder` if `order` is zero or the text
	/// has fewer than `order` characters.
	pub fn new(text: &str, order: usize) -> Result<Self> {
		let chars: Vec<char> = text.chars().collect();
		if order == 0 || chars.len() < order {
			return Err(ModelError::InvalidOrder {
				order,
				text_len: chars.len(),
			});
		}

		// Append the first `order` characters so the text reads circularly.
		let mut circular = chars.clone();
		circular.extend_from_slice(&chars[..order]);

		// Every window of `order + 1` characters of the circular text
		// contributes one (kgram -> next character) observation.
		let mut table: HashMap<String, Successors> = HashMap::new();
		for window in circular.windows(order + 1) {
			let kgram: String = window[..order].iter().collect();
			let next_char = window[order];
			table.entry(kgram).or_default().record(next_char);
		}

		Ok(Self { order, table })
	}

	/// Returns the order k of the model.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Returns the number of distinct kgrams in the frequency table.
	pub fn kgram_count(&self) -> usize {
		self.table.len()
	}

	/// Returns a uniformly random kgram from the frequency table.
	///
	/// Useful for starting a generation somewhere other than the beginning
	/// of the training text. Returns `None` only for an empty table, which
	/// a constructed model never has.
	pub fn random_kgram(&self) -> Option<&str> {
		self.table.keys().choose(&mut rand::rng()).map(String::as_str)
	}

	/// Returns the number of times `kgram` occurs in the circular training
	/// text or, with `c`, the number of times `c` follows `kgram`.
	///
	/// # Errors
	/// - `ModelError::InvalidArgument` if `kgram` is not exactly k
	///   characters long.
	/// - `ModelError::UnknownKgram` if `kgram` never occurs in the text.
	/// - `ModelError::UnknownSuccessor` if `c` was never observed after
	///   `kgram`. A count of zero is never silently returned.
	pub fn freq(&self, kgram: &str, c: Option<char>) -> Result<u64> {
		let successors = self.lookup(kgram)?;
		match c {
			None => Ok(successors.total()),
			Some(successor) => successors.count_of(successor).ok_or_else(|| {
				ModelError::UnknownSuccessor {
					kgram: kgram.to_owned(),
					successor,
				}
			}),
		}
	}

	/// Draws a random character following `kgram`.
	///
	/// The draw is weighted by the observed counts: a character that
	/// followed `kgram` n times is n times as likely as one that followed
	/// it once. The returned character is always a recorded successor.
	///
	/// # Errors
	/// Same kgram preconditions as [`MarkovModel::freq`].
	pub fn rand(&self, kgram: &str) -> Result<char> {
		let successors = self.lookup(kgram)?;
		// A kgram enters the table together with its first successor
		// observation, so the distribution cannot be empty here.
		successors.sample().ok_or_else(|| ModelError::UnknownKgram {
			kgram: kgram.to_owned(),
		})
	}

	/// Generates a sequence of exactly `length` characters by simulating a
	/// trajectory through the corresponding Markov chain.
	///
	/// The output starts with `kgram`. Every further character is drawn
	/// with [`MarkovModel::rand`] from the trailing k characters of the
	/// output built so far, so the chain state is the k-character window,
	/// not a single character.
	///
	/// # Errors
	/// - `ModelError::InvalidArgument` if `kgram` is not exactly k
	///   characters long.
	/// - `ModelError::InvalidLength` if `length` is less than k. With
	///   `length == k` the seed is returned verbatim and nothing is drawn.
	/// - `ModelError::UnknownKgram`, propagated from the sampling, if an
	///   intermediate kgram never occurs in the text. Starting from a
	///   kgram of the text this cannot happen: circularization guarantees
	///   a recorded successor for every window the chain can reach.
	pub fn generate_string(&self, kgram: &str, length: usize) -> Result<String> {
		let seed: Vec<char> = kgram.chars().collect();
		if seed.len() != self.order {
			return Err(ModelError::InvalidArgument {
				kgram: kgram.to_owned(),
				expected: self.order,
				actual: seed.len(),
			});
		}
		if length < self.order {
			return Err(ModelError::InvalidLength {
				length,
				order: self.order,
			});
		}

		let mut out = seed;
		for _ in 0..length - self.order {
			// The current chain state is the trailing k characters.
			let prefix: String = out[out.len() - self.order..].iter().collect();
			out.push(self.rand(&prefix)?);
		}

		Ok(out.into_iter().collect())
	}

	/// Looks up the successor distribution of `kgram`, validating the
	/// argument on the way.
	fn lookup(&self, kgram: &str) -> Result<&Successors> {
		let len = kgram.chars().count();
		if len != self.order {
			return Err(ModelError::InvalidArgument {
				kgram: kgram.to_owned(),
				expected: self.order,
				actual: len,
			});
		}
		self.table.get(kgram).ok_or_else(|| ModelError::UnknownKgram {
			kgram: kgram.to_owned(),
		})
	}
}
