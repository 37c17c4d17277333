//! Validation constraints.
//!
//! A [`Constraint`] is a small value type: a predicate over a JSON value, a
//! human-readable description shown to end users when the predicate fails,
//! and a JSON Schema fragment contributed verbatim into the enclosing
//! field's schema entry. Constraints are pure — evaluating one never mutates
//! the field or the constraint — and a field's constraints are checked in
//! declaration order with their fragments merged last-write-wins.
//!
//! The built-in constructors cover the common numeric, length, enumeration,
//! pattern, and date rules; [`Constraint::new`] is the escape hatch for
//! everything else.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::{json, Map, Number, Value};

use formtree_core::{FormtreeError, FormtreeResult};

/// A single validation rule attached to a field.
#[derive(Clone)]
pub struct Constraint {
    description: String,
    schema: Map<String, Value>,
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Constraint {
    /// Creates a constraint from a description, a JSON Schema fragment, and
    /// a predicate.
    ///
    /// `fragment` must be a JSON object (e.g. `json!({"minimum": 0})`);
    /// anything else contributes nothing to the generated schema.
    pub fn new(
        description: impl Into<String>,
        fragment: Value,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        let schema = match fragment {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            description: description.into(),
            schema,
            predicate: Arc::new(predicate),
        }
    }

    /// Returns `true` iff the value satisfies this constraint.
    pub fn satisfied_by(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    /// The human-readable rule, phrased as a requirement
    /// (e.g. "Must be greater than or equal to 0.").
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The JSON Schema fragment this constraint contributes to its field.
    pub const fn schema_fragment(&self) -> &Map<String, Value> {
        &self.schema
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("description", &self.description)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

/// Compares a numeric value against a bound, treating non-numbers as failing.
fn compare(value: &Value, bound: Option<f64>, op: impl Fn(f64, f64) -> bool) -> bool {
    match (value.as_f64(), bound) {
        (Some(v), Some(b)) => op(v, b),
        _ => false,
    }
}

/// Greater than or equal to. Contributes `{"minimum": limit}`.
pub fn ge(limit: impl Into<Number>) -> Constraint {
    let limit = limit.into();
    let bound = limit.as_f64();
    Constraint::new(
        format!("Must be greater than or equal to {limit}."),
        json!({ "minimum": limit }),
        move |value| compare(value, bound, |v, b| v >= b),
    )
}

/// Strictly greater than. Contributes `{"exclusiveMinimum": limit}`.
pub fn gt(limit: impl Into<Number>) -> Constraint {
    let limit = limit.into();
    let bound = limit.as_f64();
    Constraint::new(
        format!("Must be greater than {limit}."),
        json!({ "exclusiveMinimum": limit }),
        move |value| compare(value, bound, |v, b| v > b),
    )
}

/// Less than or equal to. Contributes `{"maximum": limit}`.
pub fn le(limit: impl Into<Number>) -> Constraint {
    let limit = limit.into();
    let bound = limit.as_f64();
    Constraint::new(
        format!("Must be less than or equal to {limit}."),
        json!({ "maximum": limit }),
        move |value| compare(value, bound, |v, b| v <= b),
    )
}

/// Strictly less than. Contributes `{"exclusiveMaximum": limit}`.
pub fn lt(limit: impl Into<Number>) -> Constraint {
    let limit = limit.into();
    let bound = limit.as_f64();
    Constraint::new(
        format!("Must be less than {limit}."),
        json!({ "exclusiveMaximum": limit }),
        move |value| compare(value, bound, |v, b| v < b),
    )
}

/// Minimum string length in characters. Contributes `{"minLength": n}`.
pub fn min_length(n: usize) -> Constraint {
    Constraint::new(
        format!("Must be at least {n} characters."),
        json!({ "minLength": n }),
        move |value| value.as_str().is_some_and(|s| s.chars().count() >= n),
    )
}

/// Maximum string length in characters. Contributes `{"maxLength": n}`.
pub fn max_length(n: usize) -> Constraint {
    Constraint::new(
        format!("Must be {n} characters or less."),
        json!({ "maxLength": n }),
        move |value| value.as_str().is_some_and(|s| s.chars().count() <= n),
    )
}

/// Membership in a fixed set of values. Contributes `{"enum": [...]}`.
pub fn one_of(choices: Vec<Value>) -> Constraint {
    Constraint::new(
        "Must be a valid choice.",
        json!({ "enum": choices.clone() }),
        move |value| choices.contains(value),
    )
}

/// Match against a regular expression. Contributes `{"pattern": ...}`.
///
/// Fails at construction time if the pattern does not compile, so a form
/// carrying this constraint can never produce an unusable schema.
pub fn matches(pattern: &str) -> FormtreeResult<Constraint> {
    let regex = Regex::new(pattern).map_err(|e| FormtreeError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Constraint::new(
        format!("Must match pattern {pattern}."),
        json!({ "pattern": pattern }),
        move |value| value.as_str().is_some_and(|s| regex.is_match(s)),
    ))
}

/// An ISO-8601 calendar date (`YYYY-MM-DD`). Contributes `{"format": "date"}`.
pub fn iso_date() -> Constraint {
    Constraint::new(
        "Must be a valid date of YYYY-MM-DD.",
        json!({ "format": "date" }),
        |value| {
            value
                .as_str()
                .is_some_and(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok())
        },
    )
}
