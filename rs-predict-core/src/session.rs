use std::fmt;
use std::io::{self, BufRead, Write};

use log::debug;

use crate::model::context_key::ContextKey;
use crate::model::trigram_model::TrigramModel;
use crate::tokenizer::tokenize;

/// Input that ends the session (case-insensitive).
pub const QUIT_SENTINEL: &str = "quit";

/// Classification of one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Query {
	/// Blank line or the quit sentinel.
	Quit,
	/// Fewer than two tokens after normalization.
	TooShort,
	/// Predict the word following the last two tokens of the line.
	Predict(ContextKey),
}

impl Query {
	/// Classifies a raw input line.
	///
	/// The line goes through the same normalization as the training corpus,
	/// and only its last two tokens are kept.
	pub fn parse(line: &str) -> Self {
		let line = line.trim();
		if line.is_empty() || line.eq_ignore_ascii_case(QUIT_SENTINEL) {
			return Query::Quit;
		}

		match ContextKey::from_tail(&tokenize(line)) {
			Some(key) => Query::Predict(key),
			None => Query::TooShort,
		}
	}
}

/// What the session answers to a query.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply<'a> {
	Prediction(&'a str),
	NoPrediction,
	NeedMoreWords,
}

impl<'a> Reply<'a> {
	/// Answers `query` from `model`.
	///
	/// Returns `None` for `Query::Quit`, which has no answer.
	pub fn answer(model: &'a TrigramModel, query: &Query) -> Option<Self> {
		match query {
			Query::Quit => None,
			Query::TooShort => Some(Reply::NeedMoreWords),
			Query::Predict(key) => {
				let reply = match model.predict(key) {
					Some(word) => Reply::Prediction(word),
					None => Reply::NoPrediction,
				};
				debug!("{} -> {:?}", key, reply);
				Some(reply)
			}
		}
	}
}

impl fmt::Display for Reply<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Reply::Prediction(word) => write!(f, "   ... {}", word),
			Reply::NoPrediction => f.write_str("   (No prediction found for this pair.)"),
			Reply::NeedMoreWords => f.write_str("Please enter at least two words."),
		}
	}
}

/// Runs the interactive prediction loop.
///
/// # Behavior
/// - Writes a short banner, then a `> ` prompt before each line.
/// - Stops at end of input, on a blank line, or on `quit`.
/// - Answers every other line with a prediction, a "no prediction"
///   notice, or a request for more words.
///
/// # Errors
/// Returns any I/O error raised while reading `input` or writing `output`.
pub fn run<R: BufRead, W: Write>(model: &TrigramModel, input: R, mut output: W) -> io::Result<()> {
	writeln!(output, "\n--- Predictive Text Generator ---")?;
	writeln!(output, "Enter two words to get a prediction.")?;
	writeln!(output, "Type '{}' to exit.", QUIT_SENTINEL)?;

	let mut lines = input.lines();
	loop {
		write!(output, "> ")?;
		output.flush()?;

		let line = match lines.next() {
			Some(line) => line?,
			None => break,
		};

		match Reply::answer(model, &Query::parse(&line)) {
			Some(reply) => writeln!(output, "{}", reply)?,
			None => break,
		}
	}

	output.flush()
}
