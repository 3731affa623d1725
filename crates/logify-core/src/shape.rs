//! Rendering and type description of captured values
//!
//! Arguments and results are captured as [`serde_json::Value`]. Every value
//! falls into one [`ValueClass`], and each class has exactly one rendering
//! rule:
//!
//! | class     | render                 | shallow tag                  |
//! |-----------|------------------------|------------------------------|
//! | Scalar    | literal (`5`, `true`)  | `number`, `boolean`, `null`  |
//! | Text      | quoted (`"x"`)         | `string`                     |
//! | Composite | pretty-printed JSON    | `object`                     |
//!
//! Detailed descriptions recurse into composites: `{ a: number, b: string }`,
//! `number[]`, `(number | string)[]`.
//!
//! JSON has no NaN or infinities, so a non-finite float is captured as
//! [`Captured::NonFinite`]: a scalar that renders as `NaN`, `Infinity` or
//! `-Infinity` and is tagged `number` at every depth.

use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    /// Numbers, booleans and null
    Scalar,
    Text,
    /// Objects and arrays
    Composite,
}

pub fn classify(value: &Value) -> ValueClass {
    match value {
        Value::String(_) => ValueClass::Text,
        Value::Object(_) | Value::Array(_) => ValueClass::Composite,
        Value::Null | Value::Bool(_) | Value::Number(_) => ValueClass::Scalar,
    }
}

/// One-word tag for a value, without looking inside composites.
pub fn type_tag(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Object(_) | Value::Array(_) => "object",
    }
}

/// A captured argument or result
#[derive(Debug, Clone, PartialEq)]
pub enum Captured {
    Json(Value),
    /// NaN or an infinity
    NonFinite(f64),
}

impl Captured {
    /// JSON form handed to method members. Non-finite numbers become `null`.
    pub fn to_value(&self) -> Value {
        match self {
            Captured::Json(value) => value.clone(),
            Captured::NonFinite(_) => Value::Null,
        }
    }

    pub fn class(&self) -> ValueClass {
        match self {
            Captured::Json(value) => classify(value),
            Captured::NonFinite(_) => ValueClass::Scalar,
        }
    }
}

fn non_finite_literal(n: f64) -> &'static str {
    if n.is_nan() {
        "NaN"
    } else if n.is_sign_negative() {
        "-Infinity"
    } else {
        "Infinity"
    }
}

/// How far type descriptions look into a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    /// `type_tag` only
    #[default]
    Shallow,
    /// Recursive structural description of composites
    Detailed,
}

/// Renders values and describes their types for trace lines.
pub trait TypeFormatter: Send + Sync + Debug {
    /// Human-readable rendering
    fn render(&self, value: &Value) -> String;

    /// Structural type description, recursive for composites
    fn describe_type(&self, value: &Value) -> String;

    /// Description at the requested depth. Shallow descriptions always use
    /// [`type_tag`].
    fn describe(&self, value: &Value, depth: Depth) -> String {
        match depth {
            Depth::Shallow => type_tag(value).to_string(),
            Depth::Detailed => self.describe_type(value),
        }
    }

    fn render_captured(&self, captured: &Captured) -> String {
        match captured {
            Captured::Json(value) => self.render(value),
            Captured::NonFinite(n) => non_finite_literal(*n).to_string(),
        }
    }

    fn describe_captured(&self, captured: &Captured, depth: Depth) -> String {
        match captured {
            Captured::Json(value) => self.describe(value, depth),
            Captured::NonFinite(_) => "number".to_string(),
        }
    }
}

/// Default formatter over JSON values
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonShapeFormatter;

impl TypeFormatter for JsonShapeFormatter {
    fn render(&self, value: &Value) -> String {
        match (classify(value), value) {
            (ValueClass::Text, Value::String(s)) => format!("\"{s}\""),
            (ValueClass::Composite, _) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            _ => value.to_string(),
        }
    }

    fn describe_type(&self, value: &Value) -> String {
        match value {
            Value::Object(map) if map.is_empty() => "{}".to_string(),
            Value::Object(map) => {
                let fields: Vec<String> = map
                    .iter()
                    .map(|(key, field)| format!("{key}: {}", self.describe_type(field)))
                    .collect();
                format!("{{ {} }}", fields.join(", "))
            }
            Value::Array(items) => {
                // BTreeSet keeps the union order stable regardless of element order.
                let element_types: BTreeSet<String> =
                    items.iter().map(|item| self.describe_type(item)).collect();
                let mut union: Vec<String> = element_types.into_iter().collect();
                match union.len() {
                    0 => "unknown[]".to_string(),
                    1 => format!("{}[]", union.remove(0)),
                    _ => format!("({})[]", union.join(" | ")),
                }
            }
            scalar => type_tag(scalar).to_string(),
        }
    }
}
