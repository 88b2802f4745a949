//! Mirror core: transport-agnostic protocol types, generators, and error surface.
//!
//! This crate defines the wire-level payloads the mirror API speaks and the
//! routines that produce them. It carries no HTTP or runtime dependencies so
//! the same generators can back the server and client-side test fixtures.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed queries surface as `MirrorError`/`Result` instead of crashing
//! the worker that handles them.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod generate;
pub mod protocol;
pub mod sampler;

/// Shared result type.
pub use error::{MirrorError, Result};
pub use sampler::{Sampler, SeededSampler};
