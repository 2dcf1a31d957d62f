//! Depth-first schema flattening into body-table rows
//!
//! Objects contribute one row per primitive property and never a row for
//! the container itself. Arrays append an `[0]` index segment to the path;
//! arrays of objects descend through that segment, and arrays of
//! primitives optionally emit an explicit item row whose mandatory flag
//! reflects whether the array is guaranteed non-empty (`minItems > 0`).
//! Property rows take their mandatory flag from the owning item schema's
//! `required` list alone. Recursion is capped so pathological documents
//! cannot blow the stack.

use crate::constraints::{display_value, extract_constraints};
use crate::registry::SchemaRegistry;
use crate::resolver::{resolve_ref, RefCache};
use apitab_common::BodyRow;
use apitab_parser::{Schema, SchemaOrRef};
use serde_json::Value;

/// Default recursion cap for the flattening walk
pub const DEFAULT_MAX_DEPTH: usize = 24;

const PRIMITIVE_TYPES: [&str; 5] = ["string", "integer", "number", "boolean", "null"];

/// Knobs for one flattening walk
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    /// Prefix for every emitted path
    pub base_path: String,

    /// Emit explicit `<path>[0]` rows for arrays of primitives
    pub emit_array_item_rows: bool,

    /// Maximum recursion depth
    pub max_depth: usize,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            emit_array_item_rows: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Flatten a schema into body-table rows.
///
/// Unresolvable nodes contribute no rows; reference cycles terminate at a
/// stub object that likewise contributes nothing below the cycle point.
pub fn flatten(
    node: &SchemaOrRef,
    registry: &SchemaRegistry<'_>,
    options: &FlattenOptions,
) -> Vec<BodyRow> {
    let mut walker = Walker {
        registry,
        options,
        cache: RefCache::new(),
        rows: Vec::new(),
    };
    if let Some(schema) = resolve_ref(node, registry, &mut Vec::new(), &mut walker.cache) {
        walker.walk(&schema, &options.base_path, 0, false);
    }
    walker.rows
}

struct Walker<'a, 'r> {
    registry: &'a SchemaRegistry<'r>,
    options: &'a FlattenOptions,
    cache: RefCache,
    rows: Vec<BodyRow>,
}

impl Walker<'_, '_> {
    fn walk(&mut self, schema: &Schema, path: &str, depth: usize, inherited_mandatory: bool) {
        if depth > self.options.max_depth {
            return;
        }

        let merged = self.merge_composed(schema);
        let schema = merged.as_ref().unwrap_or(schema);

        if is_object_like(schema) {
            self.walk_object(schema, path, depth, inherited_mandatory);
        } else if schema.schema_type.as_deref() == Some("array") {
            let item_path = if path.is_empty() {
                "/[0]".to_string()
            } else {
                format!("{path}[0]")
            };
            let array_mandatory =
                inherited_mandatory || schema.min_items.unwrap_or(0) > 0;
            let description = schema.description.clone().unwrap_or_default();
            self.walk_array(schema, &item_path, depth, array_mandatory, &description);
        } else {
            // Primitive at the root collapses to a single row.
            self.rows.push(BodyRow {
                path: path.to_string(),
                property: String::new(),
                mandatory: false,
                expected: extract_constraints(schema),
                description: schema.description.clone().unwrap_or_default(),
                examples: examples_from(schema),
            });
        }
    }

    fn walk_object(
        &mut self,
        schema: &Schema,
        path: &str,
        depth: usize,
        inherited_mandatory: bool,
    ) {
        for (name, node) in &schema.properties {
            // Descriptions come from the inline node; a bare `$ref` has none.
            let description = match node {
                SchemaOrRef::Schema(sub) => sub.description.clone().unwrap_or_default(),
                _ => String::new(),
            };

            let Some(resolved) =
                resolve_ref(node, self.registry, &mut Vec::new(), &mut self.cache)
            else {
                continue;
            };
            let sub = resolved.as_ref();

            // An enclosing non-empty array guarantees the object exists,
            // not that its optional fields are set; only the item schema's
            // own required list makes a property row mandatory.
            let mandatory = schema.required.iter().any(|r| r == name);

            if is_primitive(sub) {
                self.rows.push(BodyRow {
                    path: path.to_string(),
                    property: name.clone(),
                    mandatory,
                    expected: extract_constraints(sub),
                    description,
                    examples: examples_from(sub),
                });
            } else if sub.schema_type.as_deref() == Some("array") {
                let item_path = join_path(path, &format!("{name}[0]"));
                let array_mandatory =
                    mandatory || inherited_mandatory || sub.min_items.unwrap_or(0) > 0;
                self.walk_array(sub, &item_path, depth, array_mandatory, &description);
            } else {
                let next_path = join_path(path, name);
                self.walk(sub, &next_path, depth + 1, inherited_mandatory);
            }
        }
    }

    /// Shared array handling for property arrays and root arrays.
    ///
    /// `item_path` already carries the `[0]` segment.
    fn walk_array(
        &mut self,
        schema: &Schema,
        item_path: &str,
        depth: usize,
        array_mandatory: bool,
        description: &str,
    ) {
        let Some(items) = schema.items.as_deref() else {
            return;
        };

        if self.options.emit_array_item_rows {
            if let SchemaOrRef::Schema(items) = items {
                if is_item_primitive(items) {
                    let examples = non_empty_or(examples_from(items), || examples_from(schema));
                    self.rows.push(BodyRow {
                        path: item_path.to_string(),
                        property: String::new(),
                        mandatory: array_mandatory,
                        expected: extract_constraints(items),
                        description: description.to_string(),
                        examples,
                    });
                }
            }
        }

        let Some(resolved) = resolve_ref(items, self.registry, &mut Vec::new(), &mut self.cache)
        else {
            return;
        };
        let items = resolved.as_ref();
        if is_object_like(items) || items.schema_type.as_deref() == Some("array") {
            self.walk(items, item_path, depth + 1, array_mandatory);
        }
    }

    /// Collapse allOf/oneOf/anyOf into a single schema.
    ///
    /// The first non-empty combinator wins. Branch properties are unioned
    /// (later branches override), required lists concatenate without
    /// duplicates, and the outer node's own constraints carry over.
    fn merge_composed(&mut self, schema: &Schema) -> Option<Schema> {
        let branches = [&schema.all_of, &schema.one_of, &schema.any_of]
            .into_iter()
            .find(|candidates| !candidates.is_empty())?;

        let mut merged = Schema {
            schema_type: schema.schema_type.clone(),
            ..Schema::default()
        };
        for branch in branches {
            let Some(resolved) =
                resolve_ref(branch, self.registry, &mut Vec::new(), &mut self.cache)
            else {
                continue;
            };
            for (name, node) in &resolved.properties {
                merged.properties.insert(name.clone(), node.clone());
            }
            for required in &resolved.required {
                if !merged.required.contains(required) {
                    merged.required.push(required.clone());
                }
            }
        }

        merged.items = schema.items.clone();
        merged.min_items = schema.min_items;
        merged.max_items = schema.max_items;
        merged.enum_values = schema.enum_values.clone();
        merged.format = schema.format.clone();
        merged.minimum = schema.minimum.clone();
        merged.maximum = schema.maximum.clone();
        merged.min_length = schema.min_length;
        merged.max_length = schema.max_length;
        merged.pattern = schema.pattern.clone();

        Some(merged)
    }
}

fn join_path(path: &str, segment: &str) -> String {
    if path.is_empty() {
        format!("/{segment}")
    } else {
        format!("{path}/{segment}")
    }
}

/// Object-shaped: declared type, declared properties, or an
/// additionalProperties constraint
fn is_object_like(schema: &Schema) -> bool {
    schema.schema_type.as_deref() == Some("object")
        || !schema.properties.is_empty()
        || schema.additional_properties.is_some()
}

/// Row-worthy leaf: a primitive type, or an enum that is not an array
fn is_primitive(schema: &Schema) -> bool {
    matches!(schema.schema_type.as_deref(), Some(t) if PRIMITIVE_TYPES.contains(&t))
        || (schema.enum_values.is_some() && schema.schema_type.as_deref() != Some("array"))
}

/// Primitive check for array items; a bare enum counts
fn is_item_primitive(schema: &Schema) -> bool {
    matches!(schema.schema_type.as_deref(), Some(t) if PRIMITIVE_TYPES.contains(&t))
        || schema.enum_values.is_some()
}

fn non_empty_or(value: String, fallback: impl FnOnce() -> String) -> String {
    if value.is_empty() {
        fallback()
    } else {
        value
    }
}

/// Render example values for the "Examples" column.
///
/// `example` wins outright. The `examples` keyword shows at most three
/// entries: list form takes them in order, keyed-map form takes each
/// entry's `value` field (the media-type examples shape).
fn examples_from(schema: &Schema) -> String {
    if let Some(example) = &schema.example {
        return display_value(example);
    }
    match &schema.examples {
        Some(Value::Array(entries)) if !entries.is_empty() => entries
            .iter()
            .take(3)
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::Object(entries)) if !entries.is_empty() => entries
            .values()
            .take(3)
            .map(|entry| match entry {
                Value::Object(keyed) => keyed.get("value").map(display_value).unwrap_or_default(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}
