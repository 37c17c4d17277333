//! Core error types for formtree.
//!
//! Construction-time errors are fatal to the tree being built: a form that
//! fails to build never exists, so path and schema derivation can assume a
//! valid tree. Validation failures are *not* errors in this sense — they are
//! collected into a report and returned to the caller (see the `validation`
//! module in `formtree-forms`).

use thiserror::Error;

/// The primary error type for formtree.
///
/// All variants are construction-time failures. Display rendering, schema
/// generation, and validation are total for a tree that was built
/// successfully.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormtreeError {
    /// Two children of the same form resolve to the same path segment.
    #[error("duplicate path segment {segment:?} under form {parent:?}")]
    DuplicatePath {
        /// Label of the form whose children collide.
        parent: String,
        /// The colliding slug.
        segment: String,
    },

    /// A label cannot be slugged into a non-empty path segment.
    #[error("label {label:?} does not produce a usable path segment")]
    InvalidLabel {
        /// The offending label.
        label: String,
    },

    /// A user-supplied pattern for a `matches` constraint failed to compile.
    #[error("invalid constraint pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// The regex engine's explanation.
        reason: String,
    },
}

/// A convenience type alias for `Result<T, FormtreeError>`.
pub type FormtreeResult<T> = Result<T, FormtreeError>;
