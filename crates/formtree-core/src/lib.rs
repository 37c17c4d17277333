//! # formtree-core
//!
//! Core types for the formtree library. This crate has no dependency on the
//! forms layer and provides the foundation shared by the other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`text`] - Label-to-slug derivation
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod text;

// Re-export the most commonly used types at the crate root.
pub use error::{FormtreeError, FormtreeResult};
pub use text::slugify;
