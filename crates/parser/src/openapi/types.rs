//! OpenAPI 3.x type definitions
//!
//! Typed but deliberately permissive: schema nodes carry the validation
//! keywords the flattener understands as real fields, and everything else
//! falls into a flattened extensions map. Property and path order is
//! preserved with `IndexMap` so table rows come out in declaration order.

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// OpenAPI document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiSpec {
    /// OpenAPI version (e.g., "3.0.3")
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// API paths (endpoints), in declaration order
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    /// Reusable components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    /// Servers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    /// Any other top-level fields (tags, security, x-* extensions)
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// API information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    /// API title
    #[serde(default)]
    pub title: String,

    /// API version
    #[serde(default)]
    pub version: String,

    /// API description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Server URL
    pub url: String,

    /// Server description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Path item: the operations available under one URL path
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,

    /// Path-level parameters shared by every operation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterOrRef>,

    /// Non-method siblings (summary, description, servers, x-* extensions)
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// HTTP methods recognized on a path item, in iteration order
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

impl PathItem {
    /// Iterate the declared operations as `(method, operation)` pairs
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        [
            ("get", &self.get),
            ("put", &self.put),
            ("post", &self.post),
            ("delete", &self.delete),
            ("options", &self.options),
            ("head", &self.head),
            ("patch", &self.patch),
            ("trace", &self.trace),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }

    /// Names of the methods declared on this path item
    pub fn method_names(&self) -> Vec<&'static str> {
        self.operations().map(|(method, _)| method).collect()
    }

    /// Number of operations declared on this path item
    pub fn method_count(&self) -> usize {
        self.operations().count()
    }

    /// Drop every operation except the given method (case-insensitive),
    /// keeping non-method siblings such as path-level parameters
    pub fn retain_method(&mut self, method: &str) {
        let keep = method.to_ascii_lowercase();
        if keep != "get" {
            self.get = None;
        }
        if keep != "put" {
            self.put = None;
        }
        if keep != "post" {
            self.post = None;
        }
        if keep != "delete" {
            self.delete = None;
        }
        if keep != "options" {
            self.options = None;
        }
        if keep != "head" {
            self.head = None;
        }
        if keep != "patch" {
            self.patch = None;
        }
        if keep != "trace" {
            self.trace = None;
        }
    }
}

/// HTTP operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    /// Operation ID
    #[serde(rename = "operationId", default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// Summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterOrRef>,

    /// Request body
    #[serde(rename = "requestBody", default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status. YAML specs routinely write `200:` as an
    /// integer scalar, so the keys are coerced to strings on the way in.
    #[serde(default, deserialize_with = "deserialize_status_map")]
    pub responses: IndexMap<String, Response>,

    /// Tags (for grouping)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Unrecognized operation fields
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// Parameter definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Location: query, header, path, cookie
    #[serde(rename = "in")]
    pub location: String,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Required flag
    #[serde(default)]
    pub required: bool,

    /// Schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,

    /// Example value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// Parameter or a reference to a reusable one under `components.parameters`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    /// Reference to `#/components/parameters/<Name>`
    Reference {
        #[serde(rename = "$ref")]
        ref_path: String,
    },

    /// Inline parameter
    Item(Parameter),
}

/// Request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Content types, in declaration order
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,

    /// Required flag
    #[serde(default)]
    pub required: bool,
}

/// Response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response {
    /// Description
    #[serde(default)]
    pub description: String,

    /// Content types, in declaration order
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// Media type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}

/// Schema, a reference, or something that is neither
///
/// The `Other` arm absorbs malformed nodes (a string or list where a schema
/// was expected); the flattener treats those as inert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    /// Reference to another schema
    Reference {
        #[serde(rename = "$ref")]
        ref_path: String,
    },

    /// Direct schema
    Schema(Box<Schema>),

    /// Non-mapping node; contributes nothing to the tables
    Other(Value),
}

/// `additionalProperties` is either a boolean toggle or a value schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `additionalProperties: true | false`
    Flag(bool),

    /// Schema constraining the map values
    Schema(Box<SchemaOrRef>),
}

/// Schema definition
///
/// One JSON-Schema-like fragment. Keywords the flattener does not model
/// are retained in `extensions` rather than dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Type: string, number, integer, boolean, array, object, null
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// Format (e.g., int32, int64, date-time)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Properties (for object type), in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaOrRef>,

    /// Required property names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Items schema (for array type)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaOrRef>>,

    /// Additional properties
    #[serde(
        rename = "additionalProperties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<AdditionalProperties>,

    /// Enum values; `Some` even when empty, so presence is observable
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    /// Numeric lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Value>,

    /// Numeric upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Value>,

    /// Exclusive numeric lower bound
    #[serde(
        rename = "exclusiveMinimum",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub exclusive_minimum: Option<Value>,

    /// Exclusive numeric upper bound
    #[serde(
        rename = "exclusiveMaximum",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub exclusive_maximum: Option<Value>,

    /// Numeric step constraint
    #[serde(rename = "multipleOf", default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Value>,

    /// Minimum string length
    #[serde(rename = "minLength", default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    /// Maximum string length
    #[serde(rename = "maxLength", default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    /// String pattern, emitted verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Minimum array length
    #[serde(rename = "minItems", default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,

    /// Maximum array length
    #[serde(rename = "maxItems", default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,

    /// Array uniqueness constraint
    #[serde(rename = "uniqueItems", default, skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,

    /// Composition: all branches apply
    #[serde(rename = "allOf", default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<SchemaOrRef>,

    /// Composition: exactly one branch applies
    #[serde(rename = "oneOf", default, skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<SchemaOrRef>,

    /// Composition: at least one branch applies
    #[serde(rename = "anyOf", default, skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<SchemaOrRef>,

    /// Single example value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    /// Examples, list or keyed-map form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Value>,

    /// Marker set on synthetic stub nodes that break reference cycles;
    /// carries the reference string that closed the cycle
    #[serde(rename = "x-circular", default, skip_serializing_if = "Option::is_none")]
    pub circular: Option<String>,

    /// Unrecognized keywords (x-* extensions, unsupported drafts)
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// Reusable components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Components {
    /// Schemas, in declaration order
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaOrRef>,

    /// Reusable parameters
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,

    /// Anything else under components (responses, requestBodies, ...)
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// Status-code key that tolerates YAML integer scalars (`200:` without
/// quotes parses as a number, not a string)
struct StatusKey(String);

impl<'de> Deserialize<'de> for StatusKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = StatusKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a status code string or integer")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<StatusKey, E> {
                Ok(StatusKey(v.to_owned()))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<StatusKey, E> {
                Ok(StatusKey(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<StatusKey, E> {
                Ok(StatusKey(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<StatusKey, E> {
                Ok(StatusKey(v.to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

fn deserialize_status_map<'de, D>(deserializer: D) -> Result<IndexMap<String, Response>, D::Error>
where
    D: Deserializer<'de>,
{
    struct MapVisitor;

    impl<'de> Visitor<'de> for MapVisitor {
        type Value = IndexMap<String, Response>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of status codes to responses")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut out = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<StatusKey, Response>()? {
                out.insert(key.0, value);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_map(MapVisitor)
}
