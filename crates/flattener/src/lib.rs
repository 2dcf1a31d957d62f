//! Schema flattening engine
//!
//! Turns the schemas of one OpenAPI endpoint into flat table rows:
//! reference resolution with cycle guards, compact constraint strings, a
//! depth-first flattening walk, and the three table builders (parameters,
//! request body, response body).
//!
//! ## Usage
//! ```rust,ignore
//! use apitab_flattener::{build_request_body_table, build_response_body_table};
//!
//! let request_rows = build_request_body_table(&spec);
//! let response_rows = build_response_body_table(&spec);
//! ```

pub mod constraints;
pub mod flatten;
pub mod registry;
pub mod resolver;
pub mod tables;

pub use constraints::extract_constraints;
pub use flatten::{flatten, FlattenOptions, DEFAULT_MAX_DEPTH};
pub use registry::{schema_ref_name, SchemaRegistry};
pub use resolver::{resolve_ref, resolve_schema, RefCache};
pub use tables::{
    build_request_body_table, build_request_params_table, build_response_body_table,
    PREFERRED_MEDIA_TYPES,
};
