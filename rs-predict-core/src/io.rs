use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::tokenizer::tokenize;

/// Failure to obtain the training corpus.
///
/// A missing file is kept apart from every other I/O failure so that
/// front-ends can report it as a user mistake rather than a crash.
#[derive(Debug, Error)]
pub enum CorpusError {
	#[error("corpus file '{}' not found", .path.display())]
	NotFound { path: PathBuf },

	#[error("failed to read corpus file '{}': {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl CorpusError {
	fn from_io(path: &Path, source: io::Error) -> Self {
		match source.kind() {
			io::ErrorKind::NotFound => Self::NotFound { path: path.to_path_buf() },
			_ => Self::Read { path: path.to_path_buf(), source },
		}
	}
}

/// Reads a whole UTF-8 text file into memory.
///
/// # Errors
/// - `CorpusError::NotFound` if the file does not exist.
/// - `CorpusError::Read` for any other failure, invalid UTF-8 included.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<String, CorpusError> {
	let path = filename.as_ref();
	info!("Reading file: {}", path.display());

	let mut contents = String::new();
	File::open(path)
		.map_err(|e| CorpusError::from_io(path, e))?
		.read_to_string(&mut contents)
		.map_err(|e| CorpusError::from_io(path, e))?;
	Ok(contents)
}

/// Reads a corpus file and returns its tokens.
///
/// Equivalent to `tokenize(&read_corpus(filename)?)`, with the token
/// count logged once the file is processed.
pub fn read_corpus_tokens<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, CorpusError> {
	let tokens = tokenize(&read_corpus(filename)?);
	info!("File processed. Total words: {}", tokens.len());
	Ok(tokens)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	fn temp_path(name: &str) -> PathBuf {
		std::env::temp_dir().join(format!("rs-predict-io-{}-{}", std::process::id(), name))
	}

	#[test]
	fn test_missing_corpus_is_not_found() {
		let path = temp_path("does-not-exist.txt");
		match read_corpus(&path) {
			Err(CorpusError::NotFound { path: reported }) => assert_eq!(reported, path),
			other => panic!("expected NotFound, got {:?}", other),
		}
	}

	#[test]
	fn test_read_corpus_tokens() {
		let path = temp_path("corpus.txt");
		fs::write(&path, "The cat sat. The cat ran!\n").unwrap();
		let tokens = read_corpus_tokens(&path).unwrap();
		fs::remove_file(&path).unwrap();
		assert_eq!(tokens, vec!["the", "cat", "sat", "the", "cat", "ran"]);
	}

	#[test]
	fn test_invalid_utf8_is_read_error() {
		let path = temp_path("binary.txt");
		fs::write(&path, [0x66u8, 0x6f, 0xff, 0xfe]).unwrap();
		let result = read_corpus(&path);
		fs::remove_file(&path).unwrap();
		assert!(matches!(result, Err(CorpusError::Read { .. })));
	}

	#[test]
	fn test_not_found_message_names_the_file() {
		let err = CorpusError::NotFound { path: PathBuf::from("data.txt") };
		assert_eq!(err.to_string(), "corpus file 'data.txt' not found");
	}
}
