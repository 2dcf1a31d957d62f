//! Common types and utilities for apitab
//!
//! This crate contains the shared error type and the table row records
//! used across the parser, flattener, writer, and CLI components.

use thiserror::Error;

mod rows;

pub use rows::{
    BodyRow, ParamRow, ResponseRow, PARAMS_HEADERS, REQUEST_HEADERS, RESPONSE_HEADERS,
};

/// Errors that can occur while turning an OpenAPI document into tables
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("OpenAPI validation failed: {0}")]
    Validation(String),

    #[error("Filtering error: {0}")]
    Filter(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for table generation operations
pub type Result<T> = std::result::Result<T, TableError>;
