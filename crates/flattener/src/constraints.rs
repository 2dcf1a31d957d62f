//! Compact constraint strings for the "Expected Value(s)" column
//!
//! A schema's validation keywords collapse into one space-joined string:
//! `string(uuid)`, `integer min=1 max=10`, `array<string> minItems=1 unique`,
//! `string minLen=2 maxLen=5 pattern=^[A-Z]+$ enum=A,B`. Numbers print
//! without a trailing `.0` when they are whole.

use apitab_parser::{AdditionalProperties, Schema, SchemaOrRef};
use serde_json::Value;

const NUMERIC_TYPES: [&str; 2] = ["integer", "number"];

/// Render a schema's constraints as one compact string.
///
/// An empty string means the schema carries nothing worth showing (no type
/// and no enum).
pub fn extract_constraints(schema: &Schema) -> String {
    let mut pieces: Vec<String> = Vec::new();

    // Enum without a declared type stands alone.
    let Some(schema_type) = schema.schema_type.as_deref() else {
        if let Some(values) = &schema.enum_values {
            pieces.push(format!("enum={}", join_values(values)));
        }
        return pieces.join(" ");
    };

    if schema_type == "array" {
        pieces.push(format!("array<{}>", item_descriptor(schema.items.as_deref())));
        if let Some(min) = schema.min_items {
            pieces.push(format!("minItems={min}"));
        }
        if let Some(max) = schema.max_items {
            pieces.push(format!("maxItems={max}"));
        }
        if schema.unique_items == Some(true) {
            pieces.push("unique".to_string());
        }
    } else {
        match &schema.format {
            Some(format) => pieces.push(format!("{schema_type}({format})")),
            None => pieces.push(schema_type.to_string()),
        }
        if NUMERIC_TYPES.contains(&schema_type) {
            if let Some(v) = &schema.minimum {
                pieces.push(format!("min={}", fmt_num(v)));
            }
            if let Some(v) = &schema.maximum {
                pieces.push(format!("max={}", fmt_num(v)));
            }
            if let Some(v) = &schema.exclusive_minimum {
                pieces.push(format!("exclusiveMin={}", fmt_num(v)));
            }
            if let Some(v) = &schema.exclusive_maximum {
                pieces.push(format!("exclusiveMax={}", fmt_num(v)));
            }
            if let Some(v) = &schema.multiple_of {
                pieces.push(format!("multipleOf={}", fmt_num(v)));
            }
        }
        if schema_type == "string" {
            if let Some(min) = schema.min_length {
                pieces.push(format!("minLen={min}"));
            }
            if let Some(max) = schema.max_length {
                pieces.push(format!("maxLen={max}"));
            }
            if let Some(pattern) = &schema.pattern {
                pieces.push(format!("pattern={pattern}"));
            }
        }
        if schema_type == "object" {
            if let Some(additional) = &schema.additional_properties {
                pieces.push(format!(
                    "additionalProperties={}",
                    describe_additional_properties(additional)
                ));
            }
        }
        if let Some(values) = &schema.enum_values {
            pieces.push(format!("enum={}", join_values(values)));
        }
    }

    pieces.join(" ")
}

/// Short type name for the items of an array schema.
///
/// Inline typed items use their type; untyped enum items become
/// `enum{...}`; references and everything else flatten to `object`.
fn item_descriptor(items: Option<&SchemaOrRef>) -> String {
    if let Some(SchemaOrRef::Schema(items)) = items {
        if let Some(item_type) = &items.schema_type {
            return item_type.clone();
        }
        if let Some(values) = &items.enum_values {
            return format!("enum{{{}}}", join_values(values));
        }
    }
    "object".to_string()
}

fn describe_additional_properties(additional: &AdditionalProperties) -> String {
    match additional {
        AdditionalProperties::Flag(flag) => flag.to_string(),
        AdditionalProperties::Schema(node) => match node.as_ref() {
            SchemaOrRef::Reference { ref_path } => ref_path
                .rsplit('/')
                .next()
                .filter(|name| !name.is_empty())
                .unwrap_or(ref_path)
                .to_string(),
            SchemaOrRef::Schema(value_schema) => {
                if let Some(value_type) = &value_schema.schema_type {
                    value_type.clone()
                } else if let Some(values) = &value_schema.enum_values {
                    format!("enum{{{}}}", join_values(values))
                } else {
                    "object".to_string()
                }
            }
            SchemaOrRef::Other(_) => "object".to_string(),
        },
    }
}

fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(display_value)
        .collect::<Vec<_>>()
        .join(",")
}

/// Render a JSON value for table cells: strings without quotes, everything
/// else in its JSON form.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a numeric bound without a trailing `.0` for whole floats
fn fmt_num(value: &Value) -> String {
    if let Some(n) = value.as_f64() {
        if value.as_i64().is_none() && value.as_u64().is_none() && n.fract() == 0.0 {
            return format!("{}", n as i64);
        }
    }
    display_value(value)
}
