//! Widget hints for the display specification.
//!
//! A widget names the kind of input control a frontend should render for a
//! field. It is purely descriptive: formtree never renders markup, and the
//! widget has no influence on the data schema or on validation.

use std::fmt;

use serde::Serialize;

use crate::fields::DataType;

/// Enumerates the built-in widget types.
///
/// Serializes to the snake_case name used by the display specification,
/// where a field's widget appears as `{"type": "text"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    /// A single-line text input.
    Text,
    /// A multi-line text input.
    TextArea,
    /// A numeric input.
    Number,
    /// A checkbox.
    Checkbox,
    /// A date picker.
    DatePicker,
    /// A dropdown of choices.
    Select,
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::TextArea => "text_area",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::DatePicker => "date_picker",
            Self::Select => "select",
        };
        write!(f, "{name}")
    }
}

/// Returns the default widget for a data type.
///
/// Defaults are deliberately conservative: string, integer, and number
/// fields all default to a plain text input, and only boolean and date
/// fields get a specialized control. Callers that want `Widget::Number`
/// for numeric fields set it explicitly on the field.
pub const fn default_widget_for_data_type(data_type: DataType) -> Widget {
    match data_type {
        DataType::String | DataType::Integer | DataType::Number => Widget::Text,
        DataType::Boolean => Widget::Checkbox,
        DataType::Date => Widget::DatePicker,
    }
}
