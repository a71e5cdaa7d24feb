use thiserror::Error;

/// Failures surfaced by the Markov model operations.
///
/// All failures are local and synchronous: they are returned at the point of
/// violation and never retried inside the model. Retry loops on operator
/// input (bad filenames, malformed numbers) belong to the calling driver and
/// use its own error types, never these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
	/// The order is zero, or the training text has fewer characters than
	/// the requested order.
	#[error("invalid order {order} for a training text of {text_len} characters")]
	InvalidOrder { order: usize, text_len: usize },

	/// A kgram argument does not have exactly `order` characters.
	#[error("kgram \"{kgram}\" has {actual} characters, expected {expected}")]
	InvalidArgument {
		kgram: String,
		expected: usize,
		actual: usize,
	},

	/// A correctly sized kgram that never occurs in the training text.
	#[error("kgram \"{kgram}\" does not occur in the training text")]
	UnknownKgram { kgram: String },

	/// A character that never follows the given kgram in the training text.
	#[error("'{successor}' never follows \"{kgram}\" in the training text")]
	UnknownSuccessor { kgram: String, successor: char },

	/// A generation length shorter than the model order.
	#[error("generation length {length} is shorter than the model order {order}")]
	InvalidLength { length: usize, order: usize },
}

/// Result alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_carry_the_offending_values() {
		let e = ModelError::InvalidOrder { order: 4, text_len: 2 };
		assert_eq!(
			e.to_string(),
			"invalid order 4 for a training text of 2 characters"
		);

		let e = ModelError::InvalidArgument {
			kgram: "abc".to_owned(),
			expected: 2,
			actual: 3,
		};
		assert_eq!(e.to_string(), "kgram \"abc\" has 3 characters, expected 2");

		let e = ModelError::UnknownSuccessor {
			kgram: "ab".to_owned(),
			successor: 'z',
		};
		assert_eq!(e.to_string(), "'z' never follows \"ab\" in the training text");

		let e = ModelError::InvalidLength { length: 1, order: 3 };
		assert_eq!(
			e.to_string(),
			"generation length 1 is shorter than the model order 3"
		);
	}
}
