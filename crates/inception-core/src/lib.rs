//! inception core: upstream wire types and the shared error surface.
//!
//! This crate carries no transport or runtime dependencies so the decoder
//! and error taxonomy can be tested without an HTTP stack.
//!
//! Panics, `unwrap`, and `expect` are compile-denied outside of tests
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{FetchError, InceptionError, Result};
