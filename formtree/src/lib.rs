//! # formtree
//!
//! Composable form trees that derive frontend display specifications and
//! JSON Schema documents.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `formtree` for the whole library, or on individual
//! crates for finer-grained control.

/// Core error types, text helpers, and logging setup.
pub use formtree_core as core;

/// Form trees: fields, constraints, widgets, display specs, schemas.
pub use formtree_forms as forms;

// Flat re-exports of the everyday types.
pub use formtree_core::{FormtreeError, FormtreeResult};
pub use formtree_forms::{
    constraints, Constraint, DataType, Field, Form, FormBuilder, Node, ValidationReport,
    Violation, ViolationKind, Widget,
};
