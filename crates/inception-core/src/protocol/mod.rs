//! Upstream wire formats.
//!
//! Decoders here are panic-free: a malformed body surfaces as
//! `FetchError::Decode` so a misbehaving upstream can never take the
//! exporter down.

pub mod targets;
