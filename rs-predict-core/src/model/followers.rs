use std::collections::HashMap;

/// Every token observed immediately after one context key.
///
/// Conceptually, this is the list of outgoing edges of a Markov chain
/// state, kept as raw observations rather than normalized weights.
///
/// ## Responsibilities:
/// - Record follower occurrences during learning, in training order
/// - Pick the most frequent follower with a deterministic tie-break
/// - Append another sequence observed later in the corpus (chunked learning)
///
/// ## Invariants
/// - `words` keeps insertion order and duplicates
/// - `words.len()` equals the number of times the owning key was seen
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Followers {
	/// Observed followers, oldest first.
	/// Example: ["sat", "ran", "sat"]
	words: Vec<String>,
}

impl Followers {
	/// Creates an empty follower sequence.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `word` after the owning key.
	pub fn push(&mut self, word: &str) {
		self.words.push(word.to_owned());
	}

	/// Returns the recorded followers in training order.
	pub fn as_slice(&self) -> &[String] {
		&self.words
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Number of times `word` was recorded.
	pub fn count(&self, word: &str) -> usize {
		self.words.iter().filter(|w| *w == word).count()
	}

	/// Returns the most frequent follower.
	///
	/// Counts are kept in order of first occurrence, and the first entry
	/// whose count equals the maximum wins. With `["a", "b", "a", "b"]`
	/// both tokens are seen twice and `"a"` is returned because it was
	/// observed first.
	///
	/// This performs a single O(n) pass over the followers.
	///
	/// Returns `None` if the sequence is empty.
	pub fn most_common(&self) -> Option<&str> {
		let mut counts: Vec<(&str, usize)> = Vec::new();
		let mut slots: HashMap<&str, usize> = HashMap::new();

		for word in &self.words {
			match slots.get(word.as_str()) {
				Some(&slot) => counts[slot].1 += 1,
				None => {
					slots.insert(word.as_str(), counts.len());
					counts.push((word.as_str(), 1));
				}
			}
		}

		let max = counts.iter().map(|&(_, count)| count).max()?;
		counts.into_iter().find(|&(_, count)| count == max).map(|(word, _)| word)
	}

	/// Appends the followers of `other` after this sequence.
	///
	/// `other` must come from a later part of the corpus for
	/// training order to be preserved.
	pub fn merge(&mut self, other: &Self) {
		self.words.extend(other.words.iter().cloned());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn followers(words: &[&str]) -> Followers {
		let mut f = Followers::new();
		for w in words {
			f.push(w);
		}
		f
	}

	#[test]
	fn test_empty_has_no_prediction() {
		assert_eq!(Followers::new().most_common(), None);
		assert!(Followers::new().is_empty());
	}

	#[test]
	fn test_most_frequent_wins() {
		assert_eq!(followers(&["a", "b", "b", "c"]).most_common(), Some("b"));
		assert_eq!(followers(&["x"]).most_common(), Some("x"));
	}

	#[test]
	fn test_tie_goes_to_first_seen() {
		assert_eq!(followers(&["a", "b", "a", "b"]).most_common(), Some("a"));
		assert_eq!(followers(&["sat", "ran"]).most_common(), Some("sat"));
		// "b" reaches two first, but "a" appeared first.
		assert_eq!(followers(&["a", "b", "b", "a"]).most_common(), Some("a"));
		assert_eq!(followers(&["c", "a", "b", "b", "a"]).most_common(), Some("a"));
	}

	#[test]
	fn test_keeps_duplicates_in_order() {
		let f = followers(&["sat", "ran", "sat"]);
		assert_eq!(f.as_slice(), ["sat", "ran", "sat"]);
		assert_eq!(f.len(), 3);
		assert_eq!(f.count("sat"), 2);
		assert_eq!(f.count("dog"), 0);
	}

	#[test]
	fn test_merge_appends() {
		let mut f = followers(&["a", "b"]);
		f.merge(&followers(&["b", "c"]));
		assert_eq!(f, followers(&["a", "b", "b", "c"]));
		assert_eq!(f.most_common(), Some("b"));
	}
}
