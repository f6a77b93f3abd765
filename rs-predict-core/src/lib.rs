//! Trigram-based next-word prediction library.
//!
//! This crate provides a small word-level language model including:
//! - Text normalization into lowercase alphabetic tokens
//! - A trigram model mapping word pairs to the words that followed them
//! - Frequency-based prediction with a deterministic tie-break
//! - An interactive query loop over any line-oriented input
//!
//! The model is built once from a complete corpus and is read-only afterwards.

/// Text normalization (lowercasing, filtering, splitting).
pub mod tokenizer;

/// Trigram model, its context keys and follower sequences.
///
/// Handles model construction (sequential or chunked across threads),
/// merging of partial models and next-word prediction.
pub mod model;

/// Interactive prediction loop.
///
/// Classifies each input line, queries the model and writes the reply.
pub mod session;

/// Corpus loading and its error type.
pub mod io;
