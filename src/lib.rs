//! streetmap-rs
//! ============
//!
//! Umbrella crate for the workspace. Re-exports [`streetmap_core`] so the
//! demos under `demos/` can be run from the repository root:
//!
//! ```text
//! cargo run --example basic_usage
//! cargo run --example error_handling
//! ```
pub use streetmap_core::*;
