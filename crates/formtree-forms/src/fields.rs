//! Field definitions.
//!
//! A [`Field`] is a leaf of the form tree: one scalar input with a label, an
//! optional description, a required flag, a widget hint, and an ordered list
//! of [`Constraint`]s. The [`DataType`] names the semantic primitive the
//! field collects and drives the base entry of its generated schema.

use formtree_core::text::slugify;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::constraints::{self, Constraint};
use crate::widgets::{default_widget_for_data_type, Widget};

/// The semantic primitive a field collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// A UTF-8 string.
    String,
    /// A whole number.
    Integer,
    /// A floating-point number.
    Number,
    /// True or false.
    Boolean,
    /// A calendar date, transported as an ISO-8601 string.
    Date,
}

impl DataType {
    /// The base JSON Schema entry for this type, before any constraint
    /// fragments are merged in.
    ///
    /// Dates are strings on the wire; their `format: date` marker comes from
    /// the [`constraints::iso_date`] constraint that [`Field::date`] attaches.
    pub fn base_schema(self) -> Map<String, Value> {
        let type_name = match self {
            Self::String | Self::Date => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
        };
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(type_name.to_string()));
        map
    }
}

/// A leaf node of a form tree: a single scalar input.
///
/// Fields are built with the typed constructors and configured with the
/// builder methods, then handed to a
/// [`FormBuilder`](crate::form::FormBuilder). Once the owning form is built
/// the tree is immutable.
///
/// # Examples
///
/// ```
/// use formtree_forms::constraints;
/// use formtree_forms::fields::Field;
///
/// let age = Field::integer("Age")
///     .required(false)
///     .constraint(constraints::ge(0));
/// ```
#[derive(Debug, Clone)]
pub struct Field {
    label: String,
    description: Option<String>,
    required: bool,
    data_type: DataType,
    widget: Widget,
    constraints: Vec<Constraint>,
}

impl Field {
    /// Creates a field with the default widget for its data type.
    ///
    /// The field is required by default and carries no constraints beyond
    /// those its typed constructor adds.
    pub fn new(label: impl Into<String>, data_type: DataType) -> Self {
        Self {
            label: label.into(),
            description: None,
            required: true,
            data_type,
            widget: default_widget_for_data_type(data_type),
            constraints: Vec::new(),
        }
    }

    /// A string field rendered as a single-line text input.
    pub fn text(label: impl Into<String>) -> Self {
        Self::new(label, DataType::String)
    }

    /// A string field rendered as a multi-line text area.
    pub fn text_area(label: impl Into<String>) -> Self {
        Self::new(label, DataType::String).widget(Widget::TextArea)
    }

    /// An integer field.
    pub fn integer(label: impl Into<String>) -> Self {
        Self::new(label, DataType::Integer)
    }

    /// A floating-point field.
    pub fn number(label: impl Into<String>) -> Self {
        Self::new(label, DataType::Number)
    }

    /// A boolean field rendered as a checkbox.
    pub fn boolean(label: impl Into<String>) -> Self {
        Self::new(label, DataType::Boolean)
    }

    /// A date field rendered as a date picker.
    ///
    /// Carries the [`constraints::iso_date`] constraint, so submitted values
    /// must be `YYYY-MM-DD` strings and the schema entry gains
    /// `format: date`.
    pub fn date(label: impl Into<String>) -> Self {
        Self::new(label, DataType::Date).constraint(constraints::iso_date())
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets whether this field is required.
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Overrides the widget hint.
    pub const fn widget(mut self, widget: Widget) -> Self {
        self.widget = widget;
        self
    }

    /// Appends a constraint. Constraints apply in the order added.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// The human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The optional description.
    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether omission of this field's value is an error.
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// The semantic primitive this field collects.
    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    /// The widget hint.
    pub const fn get_widget(&self) -> Widget {
        self.widget
    }

    /// The constraints, in declaration order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The path segment derived from this field's label.
    pub fn slug(&self) -> String {
        slugify(&self.label)
    }
}
