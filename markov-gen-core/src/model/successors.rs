use std::collections::HashMap;

use rand::Rng;

/// Successor distribution of a single kgram.
///
/// A `Successors` records every character observed immediately after one
/// fixed kgram of the training text, along with the number of times it was
/// observed. Conceptually, this is a node in the simulated Markov chain
/// where outgoing edges are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate successor observations during table construction
/// - Report total and per-character observation counts
/// - Draw the next character using weighted random sampling
///
/// ## Invariants
/// - Every stored count is strictly positive
/// - The distribution is non-empty for every kgram stored in the table
#[derive(Debug, Clone, Default)]
pub(crate) struct Successors {
	/// Observed successors indexed by character.
	/// The value is how many times the character followed the kgram.
	/// Example: { 'e' => 42, 'a' => 3 }
	counts: HashMap<char, u64>,
}

impl Successors {
	/// Records one observation of `next_char` following the kgram.
	///
	/// - If the successor was already observed, its count is increased.
	/// - Otherwise, a new entry is created with an initial count of 1.
	pub(crate) fn record(&mut self, next_char: char) {
		*self.counts.entry(next_char).or_insert(0) += 1;
	}

	/// Returns the total number of recorded observations, which equals the
	/// number of times the kgram occurs in the circular training text.
	pub(crate) fn total(&self) -> u64 {
		self.counts.values().sum()
	}

	/// Returns how many times `c` followed the kgram, or `None` if it
	/// never did. A count of zero is never stored, so `Some(0)` cannot
	/// be returned.
	pub(crate) fn count_of(&self, c: char) -> Option<u64> {
		self.counts.get(&c).copied()
	}

	/// Draws the next character using weighted random sampling.
	///
	/// The probability of selecting a character is proportional to its
	/// observation count. The draw walks the distribution, subtracting
	/// counts from a uniform integer in `[0, total)`, instead of expanding
	/// the counts into a multiset of characters.
	///
	/// Returns `None` if the distribution is empty.
	pub(crate) fn sample(&self) -> Option<char> {
		let total = self.total();
		if total == 0 {
			return None;
		}

		// Randomly select a character
		let mut draw = rand::rng().random_range(0..total);

		let mut fallback: Option<char> = None;
		for (next_char, count) in &self.counts {
			if draw < *count {
				return Some(*next_char);
			}
			draw -= count;
			fallback = Some(*next_char);
		}

		// Unreachable while the counts sum to `total`.
		fallback
	}
}
