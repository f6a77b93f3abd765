use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use log::{debug, info};

use super::context_key::ContextKey;
use super::followers::Followers;

/// Below this many tokens `build_parallel` does not bother spawning threads.
const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Number of chunks handed out per logical CPU.
const CHUNKS_PER_CPU: usize = 8;

/// Represents a word-level trigram model.
///
/// The `TrigramModel` maps every pair of consecutive tokens seen in the
/// training corpus to the tokens that immediately followed it, and predicts
/// the next word of a pair from raw follower frequencies.
///
/// # Responsibilities
/// - Build the model from a complete token sequence, in one pass
/// - Build the same model from chunks on worker threads
/// - Predict the most frequent follower of a context key
/// - Merge with a model learned from a later part of the corpus
///
/// # Invariants
/// - Every stored `Followers` is non-empty
/// - For each key, the follower count equals the number of times the pair
///   occurred in training, and followers are kept in training order
/// - The model is never mutated once handed to a query loop
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrigramModel {
	/// Mapping from a word pair to everything that followed it
	contexts: HashMap<ContextKey, Followers>,
}

impl TrigramModel {
	/// Builds a model from a token sequence.
	///
	/// For every index `i >= 2`, the token `tokens[i]` is appended to the
	/// followers of `(tokens[i - 2], tokens[i - 1])`.
	///
	/// # Notes
	/// - Sequences shorter than 3 tokens yield an empty model.
	/// - Deterministic: the same tokens always give the same model.
	pub fn build<S: AsRef<str>>(tokens: &[S]) -> Self {
		let mut model = Self::default();
		for window in tokens.windows(3) {
			model.add_trigram(window[0].as_ref(), window[1].as_ref(), window[2].as_ref());
		}
		debug!("Built {} context keys from {} tokens", model.len(), tokens.len());
		model
	}

	/// Builds a model from a token sequence using all available CPUs.
	///
	/// The result is identical to `build`, follower order included.
	///
	/// # Behavior
	/// - Splits the trigram windows into chunks (based on CPU cores * factor).
	/// - Each chunk overlaps the next one by two tokens, so every trigram
	///   is learned exactly once.
	/// - Builds partial models on scoped threads and merges them in chunk order.
	///
	/// # Notes
	/// - Falls back to `build` for small inputs.
	pub fn build_parallel<S: AsRef<str> + Sync>(tokens: &[S]) -> Self {
		let model = if tokens.len() < PARALLEL_THRESHOLD {
			Self::build(tokens)
		} else {
			let chunks = num_cpus::get() * CHUNKS_PER_CPU;
			let windows = tokens.len() - 2;
			Self::build_chunked(tokens, windows.div_ceil(chunks))
		};
		info!("Model built successfully! {} context keys", model.len());
		model
	}

	/// Learns `chunk_windows` trigrams per worker and merges the partial models.
	fn build_chunked<S: AsRef<str> + Sync>(tokens: &[S], chunk_windows: usize) -> Self {
		if tokens.len() < 3 {
			return Self::default();
		}
		let windows = tokens.len() - 2;
		let chunk_windows = chunk_windows.max(1);

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for (index, start) in (0..windows).step_by(chunk_windows).enumerate() {
				let end = (start + chunk_windows).min(windows);
				// Windows `start..end` need the two tokens after `end - 1`
				let chunk = &tokens[start..end + 2];
				let tx = tx.clone();

				scope.spawn(move || {
					let partial = Self::build(chunk);
					// The receiver lives until the scope has joined every worker
					let _ = tx.send((index, partial));
				});
			}
		});
		drop(tx);

		let mut partials: Vec<(usize, Self)> = rx.iter().collect();
		partials.sort_by_key(|(index, _)| *index);
		debug!("Merging {} partial models", partials.len());

		let mut model = Self::default();
		for (_, partial) in &partials {
			model.merge(partial);
		}
		model
	}

	fn add_trigram(&mut self, first: &str, second: &str, next: &str) {
		self.contexts
			.entry(ContextKey::new(first, second))
			.or_default()
			.push(next);
	}

	/// Predicts the word following `key`.
	///
	/// Returns `None` if the pair was never observed during training.
	/// Otherwise returns the most frequent follower; on ties, the follower
	/// observed first wins (see `Followers::most_common`).
	pub fn predict(&self, key: &ContextKey) -> Option<&str> {
		self.contexts.get(key)?.most_common()
	}

	/// Returns every follower recorded for `key`, in training order.
	pub fn followers(&self, key: &ContextKey) -> Option<&Followers> {
		self.contexts.get(key)
	}

	/// Iterates over all `(key, followers)` entries, in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&ContextKey, &Followers)> {
		self.contexts.iter()
	}

	/// Number of distinct context keys.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Merges a model learned from a later part of the corpus into this one.
	///
	/// # Notes
	/// - Followers of shared keys are appended after the existing ones.
	/// - Keys unknown to `self` are cloned in.
	/// - Merging in corpus order reproduces the model of the whole corpus,
	///   provided consecutive parts overlap by two tokens.
	pub fn merge(&mut self, other: &Self) {
		for (key, followers) in &other.contexts {
			if let Some(existing) = self.contexts.get_mut(key) {
				existing.merge(followers);
			} else {
				self.contexts.insert(key.clone(), followers.clone());
			}
		}
	}
}
