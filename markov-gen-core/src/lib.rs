//! Markov-model-based text generation library.
//!
//! This crate provides a character-level Markov model of fixed order k,
//! including:
//! - Frequency table construction from a training text
//! - Kgram occurrence and successor frequency lookup
//! - Weighted random successor sampling
//! - Full-sequence generation by simulating the Markov chain
//!
//! Only the model API is exposed publicly. The successor distribution
//! representation is kept internal to ensure consistency and prevent misuse.

/// Typed failures surfaced by the model operations.
pub mod error;

/// Core Markov model and generation logic.
///
/// This module exposes the model interface while keeping the internal
/// successor distribution representation private.
pub mod model;
