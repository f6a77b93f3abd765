use std::fmt;

/// An ordered pair of two consecutive tokens `(first, second)`.
///
/// Equality and hashing are by exact string pair, so
/// `("a", "b")` and `("b", "a")` are distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContextKey {
	first: String,
	second: String,
}

impl ContextKey {
	pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
		Self { first: first.into(), second: second.into() }
	}

	/// Builds a key from the last two tokens of a sequence.
	///
	/// Returns `None` if the sequence holds fewer than two tokens.
	pub fn from_tail<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
		match tokens {
			[.., first, second] => Some(Self::new(first.as_ref(), second.as_ref())),
			_ => None,
		}
	}

	pub fn first(&self) -> &str {
		&self.first
	}

	pub fn second(&self) -> &str {
		&self.second
	}
}

impl fmt::Display for ContextKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.first, self.second)
	}
}
