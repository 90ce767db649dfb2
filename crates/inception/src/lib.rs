//! Top-level facade crate for the inception exporter.
//!
//! Re-exports core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use inception_core::*;
}

pub mod exporter {
    pub use inception_exporter::*;
}
