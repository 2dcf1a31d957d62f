//! OpenAPI 3.x document handling for apitab
//!
//! This crate loads OpenAPI 3.x documents (YAML or JSON) into a typed
//! document model, runs lightweight structural validation, and prunes a
//! multi-endpoint spec down to a single path/method pair via the
//! `[filtering]` config rules.
//!
//! The document model deliberately keeps schema nodes "open": unknown
//! keywords land in a flattened extensions map instead of being rejected,
//! because the flattener's job is best-effort documentation, not strict
//! JSON-Schema enforcement.

pub mod filter;
pub mod openapi;

pub use filter::{apply_filters, FilterRules};
pub use openapi::validation::validate_spec;
pub use openapi::DocumentParser;
pub use openapi::{
    AdditionalProperties, Components, Info, MediaType, OpenApiSpec, Operation, Parameter,
    ParameterOrRef, PathItem, RequestBody, Response, Schema, SchemaOrRef, Server,
};
