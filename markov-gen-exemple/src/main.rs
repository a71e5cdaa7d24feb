use markov_gen_core::model::markov_model::MarkovModel;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a model of order 2 from a short training text
    // The text is read circularly, so its last kgram also has a successor
    let model = MarkovModel::new("banana bandana", 2)?;

    println!("order: {}", model.order());
    println!("distinct kgrams: {}", model.kgram_count());

    // Number of times "an" occurs in the circular text
    println!("freq(\"an\"): {}", model.freq("an", None)?);

    // Number of times 'a' follows "an"
    println!("freq(\"an\", 'a'): {}", model.freq("an", Some('a'))?);

    // A kgram must have exactly `order` characters
    match model.freq("ban", None) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("\"ban\" is rejected: {e}"),
    }

    // A kgram absent from the training text is an error, not a zero
    match model.freq("zz", None) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("\"zz\" is rejected: {e}"),
    }

    // So is asking for a character that never follows the kgram
    match model.freq("an", Some('z')) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("'z' after \"an\" is rejected: {e}"),
    }

    // Draw one successor of "an", weighted by the observed counts
    println!("rand(\"an\"): {}", model.rand("an")?);

    // The requested length covers the seed, so it cannot be shorter
    match model.generate_string("ba", 1) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("length 1 is rejected: {e}"),
    }

    // Generate a few strings of 32 characters starting from "ba"
    for i in 0..5 {
        println!("generated {}: {}", i + 1, model.generate_string("ba", 32)?);
    }

    // Start from a random kgram of the table instead of a chosen one
    if let Some(kgram) = model.random_kgram() {
        println!("from random kgram \"{kgram}\": {}", model.generate_string(kgram, 32)?);
    }

    Ok(())
}
