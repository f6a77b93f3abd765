/// Normalizes raw text into a sequence of lowercase alphabetic tokens.
///
/// - Lowercases the whole input
/// - Deletes every character that is neither `a..=z` nor whitespace
///   (digits, punctuation and non-ASCII letters disappear, so `don't` becomes `dont`)
/// - Splits on whitespace runs, discarding empty fragments
///
/// Returns an empty vector when the input has no alphabetic content.
pub fn tokenize(text: &str) -> Vec<String> {
	let normalized: String = text
		.to_lowercase()
		.chars()
		.filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
		.collect();

	normalized.split_whitespace().map(str::to_owned).collect()
}

/// Joins tokens back into text with single spaces.
pub fn detokenize<S: AsRef<str>>(tokens: &[S]) -> String {
	tokens.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	#[test]
	fn test_lowercase_and_split() {
		assert_eq!(tokenize("The  Quick\tBROWN\nfox"), vec!["the", "quick", "brown", "fox"]);
	}

	#[test]
	fn test_punctuation_is_deleted_not_split() {
		assert_eq!(tokenize("don't stop-me, now!"), vec!["dont", "stopme", "now"]);
	}

	#[test]
	fn test_digits_and_non_ascii_letters_are_dropped() {
		assert_eq!(tokenize("café 42 naïve"), vec!["caf", "nave"]);
		assert!(tokenize("123 456").is_empty());
		assert!(tokenize("").is_empty());
		assert!(tokenize("  \n\t ").is_empty());
	}

	#[test]
	fn test_detokenize() {
		assert_eq!(detokenize(&["the", "cat"]), "the cat");
		assert_eq!(detokenize::<&str>(&[]), "");
	}

	#[test]
	fn test_tokens_are_alphabetic_and_stable() {
		const POOL: &[char] = &['a', 'Z', 'q', 'É', 'ß', '7', '\'', '-', ' ', ' ', '\n', '\t', '.', 'x', 'M'];
		let mut rng = StdRng::seed_from_u64(0x5eed);

		for _ in 0..500 {
			let len = rng.random_range(0..60);
			let text: String = (0..len).map(|_| POOL[rng.random_range(0..POOL.len())]).collect();

			let tokens = tokenize(&text);
			for token in &tokens {
				assert!(!token.is_empty());
				assert!(token.chars().all(|c| c.is_ascii_lowercase()), "bad token {:?}", token);
			}
			assert_eq!(tokenize(&detokenize(&tokens)), tokens);
		}
	}
}
