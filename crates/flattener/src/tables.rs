//! Table builders: parameters, request body, response body
//!
//! Each builder walks every operation in the (usually already filtered)
//! document and produces rows in declaration order. Body tables pick one
//! media type per payload, preferring JSON.

use crate::constraints::{display_value, extract_constraints};
use crate::flatten::{flatten, FlattenOptions};
use crate::registry::SchemaRegistry;
use crate::resolver::resolve_schema;
use apitab_common::{BodyRow, ParamRow, ResponseRow};
use apitab_parser::{
    MediaType, OpenApiSpec, Operation, Parameter, ParameterOrRef, SchemaOrRef,
};
use indexmap::IndexMap;

/// Media types tried first when a payload offers several
pub const PREFERRED_MEDIA_TYPES: [&str; 2] = ["application/json", "application/problem+json"];

fn operations(spec: &OpenApiSpec) -> impl Iterator<Item = &Operation> {
    spec.paths.values().flat_map(|item| item.operations().map(|(_, op)| op))
}

/// Pick the schema of the most JSON-like media type, if any
fn first_json_schema(content: &IndexMap<String, MediaType>) -> Option<&SchemaOrRef> {
    for preferred in PREFERRED_MEDIA_TYPES {
        if let Some(schema) = content.get(preferred).and_then(|media| media.schema.as_ref()) {
            return Some(schema);
        }
    }
    content.values().find_map(|media| media.schema.as_ref())
}

/// Resolve a parameter node against `components.parameters`
fn resolve_parameter<'a>(node: &'a ParameterOrRef, spec: &'a OpenApiSpec) -> Option<&'a Parameter> {
    match node {
        ParameterOrRef::Item(parameter) => Some(parameter),
        ParameterOrRef::Reference { ref_path } => {
            let name = ref_path.strip_prefix("#/components/parameters/")?;
            spec.components.as_ref()?.parameters.get(name)
        }
    }
}

/// One row per declared parameter across every operation.
///
/// Parameter references resolve through `components.parameters`;
/// unresolvable ones are skipped.
pub fn build_request_params_table(spec: &OpenApiSpec) -> Vec<ParamRow> {
    let registry = SchemaRegistry::from_spec(spec);
    let mut rows = Vec::new();

    for operation in operations(spec) {
        for node in &operation.parameters {
            let Some(parameter) = resolve_parameter(node, spec) else {
                continue;
            };
            let expected = parameter
                .schema
                .as_ref()
                .and_then(|schema| resolve_schema(schema, &registry))
                .map(|schema| extract_constraints(&schema))
                .unwrap_or_default();
            rows.push(ParamRow {
                name: parameter.name.clone(),
                mandatory: parameter.required,
                expected,
                location: parameter.location.clone(),
                description: parameter.description.clone().unwrap_or_default(),
                examples: parameter.example.as_ref().map(display_value).unwrap_or_default(),
            });
        }
    }
    rows
}

/// Flattened request body rows across every operation.
///
/// Primitive array items get no dedicated rows here; the array property
/// itself documents them.
pub fn build_request_body_table(spec: &OpenApiSpec) -> Vec<BodyRow> {
    let registry = SchemaRegistry::from_spec(spec);
    let options = FlattenOptions::default();
    let mut rows = Vec::new();

    for operation in operations(spec) {
        let Some(body) = &operation.request_body else {
            continue;
        };
        let Some(schema) = first_json_schema(&body.content) else {
            continue;
        };
        rows.extend(flatten(schema, &registry, &options));
    }
    rows
}

/// Flattened response body rows for every declared status.
///
/// Responses do emit explicit item rows for arrays of primitives, and
/// every row carries its status code.
pub fn build_response_body_table(spec: &OpenApiSpec) -> Vec<ResponseRow> {
    let registry = SchemaRegistry::from_spec(spec);
    let options = FlattenOptions {
        emit_array_item_rows: true,
        ..FlattenOptions::default()
    };
    let mut rows = Vec::new();

    for operation in operations(spec) {
        for (status, response) in &operation.responses {
            let Some(schema) = first_json_schema(&response.content) else {
                continue;
            };
            rows.extend(flatten(schema, &registry, &options).into_iter().map(|body| {
                ResponseRow {
                    status: status.clone(),
                    body,
                }
            }));
        }
    }
    rows
}
