//! Top-level module for the Markov generation system.
//!
//! This module provides a fixed-order character Markov model:
//! - Frequency table construction from a training text (`MarkovModel::new`)
//! - Order introspection and kgram frequency lookup
//! - Weighted random successor sampling
//! - Sequence generation by chain simulation (`MarkovModel::generate_string`)

/// Fixed-order character Markov model (`order >= 1`).
///
/// Handles frequency table construction, kgram frequency lookup,
/// random successor sampling, and sequence generation.
pub mod markov_model;

/// Internal representation of a single kgram's successor distribution.
///
/// Tracks observed successor counts and supports weighted random sampling.
/// This module is not exposed publicly.
mod successors;
