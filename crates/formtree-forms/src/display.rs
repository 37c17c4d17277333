//! Display specification rendering.
//!
//! Walks a form tree and emits the nested dictionary a frontend renderer
//! consumes: `type`, `label`, optional `description`, `objectPath`, plus
//! `widget` for fields and `collapsable`/`collapsed`/`contents` for forms.
//! The walk is a total, read-only function of the tree — no I/O, no clock,
//! no randomness — so rendering the same tree twice yields identical output.

use serde_json::{json, Map, Value};

use crate::fields::Field;
use crate::form::{Form, Node};
use crate::paths::child_path;

/// Renders the display specification with `root` at object path `""`.
pub fn display(root: &Form) -> Value {
    form_display(root, "")
}

fn node_display(node: &Node, path: &str) -> Value {
    match node {
        Node::Field(field) => field_display(field, path),
        Node::Form(form) => form_display(form, path),
    }
}

fn field_display(field: &Field, path: &str) -> Value {
    let mut map = Map::new();
    map.insert("type".to_string(), json!("field"));
    map.insert("label".to_string(), json!(field.label()));
    if let Some(description) = field.get_description() {
        map.insert("description".to_string(), json!(description));
    }
    map.insert("objectPath".to_string(), json!(path));
    map.insert("widget".to_string(), json!({ "type": field.get_widget() }));
    Value::Object(map)
}

fn form_display(form: &Form, path: &str) -> Value {
    let mut map = Map::new();
    map.insert("type".to_string(), json!("form"));
    map.insert("label".to_string(), json!(form.label()));
    if let Some(description) = form.get_description() {
        map.insert("description".to_string(), json!(description));
    }
    map.insert("objectPath".to_string(), json!(path));
    map.insert("collapsable".to_string(), json!(form.is_collapsable()));
    map.insert("collapsed".to_string(), json!(form.is_collapsed()));
    let contents: Vec<Value> = form
        .children()
        .iter()
        .map(|child| node_display(child, &child_path(path, &child.slug())))
        .collect();
    map.insert("contents".to_string(), Value::Array(contents));
    Value::Object(map)
}
