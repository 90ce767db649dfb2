//! Prometheus inception exporter library entry.
//!
//! Polls an upstream Prometheus server's `/api/v1/targets` on every scrape
//! and re-exports each target's health as `<namespace>_target_state`, plus
//! `<namespace>_target_count`. Consumed by the binary (`main.rs`) and by
//! integration tests.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod targets;
