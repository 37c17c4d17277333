//! The form tree: composite [`Form`] nodes and the [`Node`] union.
//!
//! A form owns an ordered sequence of children, each either a leaf
//! [`Field`] or a nested [`Form`]. Ownership is a strict tree — children are
//! moved into their parent at build time and never shared — and a built tree
//! is immutable, which is what makes display rendering, schema generation,
//! and validation pure read-only walks that are safe to run concurrently.
//!
//! Construction goes through [`FormBuilder`], which is where the path
//! invariants are enforced: every child label must slug to a non-empty
//! segment, and no two siblings may slug to the same segment. A tree that
//! fails these checks is rejected wholesale.

use std::collections::HashSet;

use formtree_core::text::slugify;
use formtree_core::{FormtreeError, FormtreeResult};
use serde_json::Value;

use crate::fields::Field;
use crate::validation::ValidationReport;
use crate::{display, schema, validation};

/// A node of the form tree: either a leaf field or a nested form.
#[derive(Debug, Clone)]
pub enum Node {
    /// A single scalar input.
    Field(Field),
    /// A nested form.
    Form(Form),
}

impl Node {
    /// The human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Self::Field(field) => field.label(),
            Self::Form(form) => form.label(),
        }
    }

    /// The optional description.
    pub fn get_description(&self) -> Option<&str> {
        match self {
            Self::Field(field) => field.get_description(),
            Self::Form(form) => form.get_description(),
        }
    }

    /// Whether omission of this node's data is an error.
    pub const fn is_required(&self) -> bool {
        match self {
            Self::Field(field) => field.is_required(),
            Self::Form(form) => form.is_required(),
        }
    }

    /// The path segment derived from this node's label.
    pub fn slug(&self) -> String {
        slugify(self.label())
    }
}

impl From<Field> for Node {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Form> for Node {
    fn from(form: Form) -> Self {
        Self::Form(form)
    }
}

/// A composite node: an ordered sequence of fields and nested forms, plus
/// layout hints for the frontend.
///
/// A `Form` used as the root of a tree has the object path `""`; the same
/// `Form` nested inside another contributes its slug as a path segment.
///
/// # Examples
///
/// ```
/// use formtree_forms::fields::Field;
/// use formtree_forms::form::Form;
///
/// let name = Form::builder("Name")
///     .child(Field::text("First Name"))
///     .child(Field::text("Last Name"))
///     .build()
///     .unwrap();
/// let person = Form::builder("Person").child(name).build().unwrap();
/// assert_eq!(person.children().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Form {
    label: String,
    description: Option<String>,
    required: bool,
    collapsable: bool,
    collapsed: bool,
    children: Vec<Node>,
}

impl Form {
    /// Starts building a form with the given label.
    pub fn builder(label: impl Into<String>) -> FormBuilder {
        FormBuilder {
            label: label.into(),
            description: None,
            required: true,
            collapsable: false,
            collapsed: false,
            children: Vec::new(),
        }
    }

    /// The human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The optional description.
    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether omission of this form's sub-document is an error.
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the frontend may collapse this form.
    pub const fn is_collapsable(&self) -> bool {
        self.collapsable
    }

    /// Whether the frontend should render this form collapsed initially.
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// The children, in declaration order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The path segment derived from this form's label.
    pub fn slug(&self) -> String {
        slugify(&self.label)
    }

    /// Renders the display specification for this form as the tree root.
    ///
    /// See [`display::display`].
    pub fn display(&self) -> Value {
        display::display(self)
    }

    /// Generates the draft-07 data schema for this form as the tree root.
    ///
    /// See [`schema::data_schema`].
    pub fn data_schema(&self) -> Value {
        schema::data_schema(self)
    }

    /// Validates a submitted document against this form as the tree root.
    ///
    /// See [`validation::validate`].
    pub fn validate(&self, data: &Value) -> ValidationReport {
        validation::validate(self, data)
    }
}

/// Builder for [`Form`].
///
/// [`FormBuilder::build`] is the single place construction-time errors can
/// surface; a successfully built form upholds the path invariants for its
/// whole subtree, because nested forms were themselves built this way.
#[derive(Debug)]
pub struct FormBuilder {
    label: String,
    description: Option<String>,
    required: bool,
    collapsable: bool,
    collapsed: bool,
    children: Vec<Node>,
}

impl FormBuilder {
    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets whether this form's sub-document is required.
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets whether the frontend may collapse this form.
    pub const fn collapsable(mut self, collapsable: bool) -> Self {
        self.collapsable = collapsable;
        self
    }

    /// Sets whether the form starts collapsed.
    pub const fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Appends a child node. Order is significant and preserved in both the
    /// display specification and the data schema.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends several child nodes.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Finishes the form, enforcing the path invariants.
    ///
    /// # Errors
    ///
    /// - [`FormtreeError::InvalidLabel`] if any child's label slugs to an
    ///   empty segment.
    /// - [`FormtreeError::DuplicatePath`] if two children slug to the same
    ///   segment.
    pub fn build(self) -> FormtreeResult<Form> {
        let mut seen = HashSet::new();
        for child in &self.children {
            let segment = child.slug();
            if segment.is_empty() {
                return Err(FormtreeError::InvalidLabel {
                    label: child.label().to_string(),
                });
            }
            if !seen.insert(segment.clone()) {
                return Err(FormtreeError::DuplicatePath {
                    parent: self.label.clone(),
                    segment,
                });
            }
        }
        tracing::debug!(
            label = %self.label,
            children = self.children.len(),
            "built form"
        );
        Ok(Form {
            label: self.label,
            description: self.description,
            required: self.required,
            collapsable: self.collapsable,
            collapsed: self.collapsed,
            children: self.children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_simple_form() {
        let form = Form::builder("Person")
            .child(Field::text("First Name"))
            .child(Field::text("Last Name"))
            .build()
            .unwrap();
        assert_eq!(form.label(), "Person");
        assert_eq!(form.children().len(), 2);
        assert!(form.is_required());
        assert!(!form.is_collapsable());
        assert!(!form.is_collapsed());
    }

    #[test]
    fn test_duplicate_sibling_slug_rejected() {
        let err = Form::builder("Person")
            .child(Field::integer("Age"))
            .child(Field::integer("Age"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FormtreeError::DuplicatePath {
                parent: "Person".into(),
                segment: "age".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_after_slugging_rejected() {
        // Different labels can still collide once slugged.
        let err = Form::builder("Person")
            .child(Field::text("First Name"))
            .child(Field::text("first--name"))
            .build()
            .unwrap_err();
        assert!(matches!(err, FormtreeError::DuplicatePath { .. }));
    }

    #[test]
    fn test_unsluggable_child_label_rejected() {
        let err = Form::builder("Person")
            .child(Field::text("!!!"))
            .build()
            .unwrap_err();
        assert_eq!(err, FormtreeError::InvalidLabel { label: "!!!".into() });
    }

    #[test]
    fn test_root_label_never_needs_a_segment() {
        // The root's own path is "", so its label is not slugged.
        let form = Form::builder("???")
            .child(Field::text("Title"))
            .build()
            .unwrap();
        assert_eq!(form.slug(), "");
        assert_eq!(form.children()[0].slug(), "title");
    }

    #[test]
    fn test_nested_form_as_child() {
        let name = Form::builder("Name")
            .child(Field::text("First Name"))
            .build()
            .unwrap();
        let person = Form::builder("Person")
            .child(name)
            .child(Field::integer("Age").required(false))
            .build()
            .unwrap();
        assert_eq!(person.children().len(), 2);
        assert!(matches!(person.children()[0], Node::Form(_)));
        assert!(matches!(person.children()[1], Node::Field(_)));
    }

    #[test]
    fn test_field_and_form_collision_rejected() {
        let name = Form::builder("Name")
            .child(Field::text("First Name"))
            .build()
            .unwrap();
        let err = Form::builder("Person")
            .child(name)
            .child(Field::text("name"))
            .build()
            .unwrap_err();
        assert!(matches!(err, FormtreeError::DuplicatePath { .. }));
    }

    #[test]
    fn test_layout_hints() {
        let form = Form::builder("Details")
            .collapsable(true)
            .collapsed(true)
            .build()
            .unwrap();
        assert!(form.is_collapsable());
        assert!(form.is_collapsed());
    }

    #[test]
    fn test_children_helper_preserves_order() {
        let form = Form::builder("F")
            .children(vec![
                Field::text("A").into(),
                Field::text("B").into(),
                Field::text("C").into(),
            ])
            .build()
            .unwrap();
        let labels: Vec<&str> = form.children().iter().map(Node::label).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_node_accessors() {
        let node: Node = Field::integer("Age")
            .description("Age in years.")
            .required(false)
            .into();
        assert_eq!(node.label(), "Age");
        assert_eq!(node.get_description(), Some("Age in years."));
        assert!(!node.is_required());
        assert_eq!(node.slug(), "age");
    }
}
