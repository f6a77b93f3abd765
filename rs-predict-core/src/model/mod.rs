//! Top-level module for the trigram model.
//!
//! This module provides:
//! - Ordered word pairs used as lookup keys (`ContextKey`)
//! - Insertion-ordered follower sequences (`Followers`)
//! - The model itself, its builders and prediction (`TrigramModel`)

/// Ordered pair of consecutive tokens indexing the model.
pub mod context_key;

/// Every token observed after one context key, in training order.
///
/// Owns the frequency count and the tie-break used for prediction.
pub mod followers;

/// Mapping from context keys to followers.
///
/// Handles sequential and chunked construction, merging,
/// and next-word prediction.
pub mod trigram_model;
