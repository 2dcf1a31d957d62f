//! OpenAPI 3.x specification parsing
//!
//! Loads OpenAPI 3.x documents from YAML or JSON into a typed document
//! model. YAML is a superset of JSON for our purposes, so both formats go
//! through the same loader.
//!
//! ## Usage
//! ```rust,ignore
//! use apitab_parser::DocumentParser;
//!
//! let parser = DocumentParser::from_file("petstore.yaml")?;
//! let spec = parser.spec();
//! ```

mod parser;
pub mod types;
pub mod validation;

pub use parser::DocumentParser;
pub use types::*;
