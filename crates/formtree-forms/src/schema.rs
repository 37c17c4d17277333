//! Data schema generation.
//!
//! Walks a form tree and emits a JSON-Schema-draft-07-compatible document
//! describing the shape of a valid submission. Fields start from the base
//! entry of their data type and merge each constraint's fragment in
//! declaration order (later constraints overwrite colliding keys; fragments
//! are expected non-overlapping by convention). Forms emit an `object` with
//! per-slug `properties`, a declaration-ordered `required` list, and
//! `unevaluatedProperties: false`. The generated document rejects unknown
//! keys and missing required keys the same way [`validate`] does.
//!
//! [`validate`]: crate::validation::validate

use serde_json::{json, Map, Value};

use crate::fields::Field;
use crate::form::{Form, Node};

/// The dialect marker injected at the document root.
pub const SCHEMA_DIALECT: &str = "http://json-schema.org/draft-07/schema#";

/// Generates the data schema with `root` as the document root.
///
/// Only the root carries the `$schema` marker; nested forms contribute plain
/// sub-schemas.
pub fn data_schema(root: &Form) -> Value {
    let mut map = Map::new();
    map.insert("$schema".to_string(), json!(SCHEMA_DIALECT));
    map.extend(form_schema(root));
    Value::Object(map)
}

fn node_schema(node: &Node) -> Map<String, Value> {
    match node {
        Node::Field(field) => field_schema(field),
        Node::Form(form) => form_schema(form),
    }
}

fn field_schema(field: &Field) -> Map<String, Value> {
    let mut map = field.data_type().base_schema();
    for constraint in field.constraints() {
        for (key, value) in constraint.schema_fragment() {
            map.insert(key.clone(), value.clone());
        }
    }
    map
}

fn form_schema(form: &Form) -> Map<String, Value> {
    let mut properties = Map::new();
    for child in form.children() {
        properties.insert(child.slug(), Value::Object(node_schema(child)));
    }
    let required: Vec<Value> = form
        .children()
        .iter()
        .filter(|child| child.is_required())
        .map(|child| Value::String(child.slug()))
        .collect();

    let mut map = Map::new();
    map.insert("type".to_string(), json!("object"));
    map.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        map.insert("required".to_string(), Value::Array(required));
    }
    map.insert("unevaluatedProperties".to_string(), json!(false));
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::fields::Field;

    fn person() -> Form {
        let name = Form::builder("Name")
            .child(Field::text("First Name"))
            .child(Field::text("Last Name"))
            .build()
            .unwrap();
        Form::builder("Person")
            .child(name)
            .child(
                Field::integer("Age")
                    .required(false)
                    .constraint(constraints::ge(0)),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_person_schema() {
        let expected = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "name": {
                    "type": "object",
                    "properties": {
                        "first_name": {"type": "string"},
                        "last_name": {"type": "string"},
                    },
                    "required": ["first_name", "last_name"],
                    "unevaluatedProperties": false,
                },
                "age": {"type": "integer", "minimum": 0},
            },
            "required": ["name"],
            "unevaluatedProperties": false,
        });
        assert_eq!(data_schema(&person()), expected);
    }

    #[test]
    fn test_only_root_carries_dialect() {
        let schema = data_schema(&person());
        assert_eq!(schema["$schema"], json!(SCHEMA_DIALECT));
        assert!(schema["properties"]["name"].get("$schema").is_none());
    }

    #[test]
    fn test_constraint_fragments_merge_in_order() {
        // Later fragments overwrite colliding keys.
        let field = Field::integer("N")
            .constraint(constraints::ge(0))
            .constraint(constraints::ge(10));
        let schema = field_schema(&field);
        assert_eq!(schema.get("minimum"), Some(&json!(10)));
    }

    #[test]
    fn test_integer_ge_round_trip() {
        let form = Form::builder("F")
            .child(Field::integer("Count").constraint(constraints::ge(0)))
            .build()
            .unwrap();
        assert_eq!(
            data_schema(&form)["properties"]["count"],
            json!({"type": "integer", "minimum": 0})
        );
    }

    #[test]
    fn test_date_field_schema() {
        let form = Form::builder("F")
            .child(Field::date("Released"))
            .build()
            .unwrap();
        assert_eq!(
            data_schema(&form)["properties"]["released"],
            json!({"type": "string", "format": "date"})
        );
    }

    #[test]
    fn test_required_preserves_declaration_order() {
        let form = Form::builder("F")
            .child(Field::text("Zebra"))
            .child(Field::text("Middle").required(false))
            .child(Field::text("Apple"))
            .build()
            .unwrap();
        assert_eq!(
            data_schema(&form)["required"],
            json!(["zebra", "apple"])
        );
    }

    #[test]
    fn test_empty_required_omitted() {
        let form = Form::builder("F")
            .child(Field::text("A").required(false))
            .child(Field::text("B").required(false))
            .build()
            .unwrap();
        assert!(data_schema(&form).get("required").is_none());
    }

    #[test]
    fn test_properties_preserve_child_order() {
        let form = Form::builder("F")
            .child(Field::text("Zebra"))
            .child(Field::text("Apple"))
            .build()
            .unwrap();
        let schema = data_schema(&form);
        let keys: Vec<&String> = schema["properties"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zebra", "apple"]);
    }

    #[test]
    fn test_schema_is_idempotent() {
        let tree = person();
        assert_eq!(data_schema(&tree), data_schema(&tree));
    }
}
