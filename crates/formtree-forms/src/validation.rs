//! Validation of submitted documents against a form tree.
//!
//! Validation never short-circuits and never aborts: every constraint of
//! every present field is checked, and every violation is collected into a
//! [`ValidationReport`] keyed by object path, so the caller sees the
//! complete failure set in one pass. Missing keys for required children are
//! recorded as [`ViolationKind::MissingRequiredField`], distinct from
//! constraint violations on present values.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::fields::Field;
use crate::form::{Form, Node};
use crate::paths::child_path;

/// Distinguishes why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A constraint on a present value failed.
    Constraint,
    /// A required child's key was absent from the sub-document.
    MissingRequiredField,
}

/// One recorded validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Why the value was rejected.
    pub kind: ViolationKind,
    /// The human-readable description surfaced to the end user.
    pub message: String,
}

impl Violation {
    fn constraint(message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::Constraint,
            message: message.into(),
        }
    }

    fn missing_required() -> Self {
        Self {
            kind: ViolationKind::MissingRequiredField,
            message: "This field is required.".to_string(),
        }
    }
}

/// The outcome of validating a document: violations grouped by object path.
///
/// An empty report means the document is valid. Serializes to a mapping from
/// object path to the list of violations, for API layers that surface
/// per-field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    violations: BTreeMap<String, Vec<Violation>>,
}

impl ValidationReport {
    /// Returns `true` iff no violations were recorded.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations, grouped by object path.
    pub const fn violations(&self) -> &BTreeMap<String, Vec<Violation>> {
        &self.violations
    }

    /// The violations flattened to human-readable descriptions per path.
    pub fn messages(&self) -> BTreeMap<String, Vec<String>> {
        self.violations
            .iter()
            .map(|(path, violations)| {
                let messages = violations.iter().map(|v| v.message.clone()).collect();
                (path.clone(), messages)
            })
            .collect()
    }

    fn push(&mut self, path: &str, violation: Violation) {
        self.violations
            .entry(path.to_string())
            .or_default()
            .push(violation);
    }
}

/// Evaluates a field's constraints against an optionally-present value.
///
/// All constraints are checked — no short-circuiting — so the returned list
/// holds every violated constraint's description. An absent value yields a
/// single missing-required violation for a required field and nothing for an
/// optional one; constraints only apply when a value is present.
pub fn validate_field(field: &Field, value: Option<&Value>) -> Vec<Violation> {
    let Some(value) = value else {
        if field.is_required() {
            return vec![Violation::missing_required()];
        }
        return Vec::new();
    };
    field
        .constraints()
        .iter()
        .filter(|constraint| !constraint.satisfied_by(value))
        .map(|constraint| Violation::constraint(constraint.description()))
        .collect()
}

/// Validates a submitted document against the tree rooted at `root`.
///
/// The walk is read-only and total: it recurses into each sub-document keyed
/// by child slug and accumulates every violation it finds.
pub fn validate(root: &Form, data: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_form(root, data, "", &mut report);
    tracing::trace!(
        label = %root.label(),
        paths = report.violations().len(),
        "validated document"
    );
    report
}

fn validate_form(form: &Form, data: &Value, path: &str, report: &mut ValidationReport) {
    let Some(object) = data.as_object() else {
        report.push(path, Violation::constraint("Must be an object."));
        return;
    };
    for child in form.children() {
        let sub_path = child_path(path, &child.slug());
        let value = object.get(&child.slug());
        match child {
            Node::Field(field) => {
                for violation in validate_field(field, value) {
                    report.push(&sub_path, violation);
                }
            }
            Node::Form(sub_form) => match value {
                Some(sub_data) => validate_form(sub_form, sub_data, &sub_path, report),
                None => {
                    if sub_form.is_required() {
                        report.push(&sub_path, Violation::missing_required());
                    }
                }
            },
        }
    }
}
