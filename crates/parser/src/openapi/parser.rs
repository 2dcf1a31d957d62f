//! OpenAPI spec file loader

use super::types::OpenApiSpec;
use apitab_common::{Result, TableError};
use std::fs;
use std::path::Path;

/// OpenAPI document loader
///
/// Reads OpenAPI 3.x documents from disk. YAML and JSON sources both go
/// through the YAML deserializer, since every JSON document is also valid
/// YAML.
#[derive(Debug)]
pub struct DocumentParser {
    /// Loaded document
    spec: OpenApiSpec,
}

impl DocumentParser {
    /// Load an OpenAPI document from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = DocumentParser::from_file("petstore.yaml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TableError::Parse(format!(
                "spec file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Self::from_source(&content)
    }

    /// Parse an OpenAPI document from a YAML or JSON string
    pub fn from_source(content: &str) -> Result<Self> {
        let spec: OpenApiSpec = serde_yaml::from_str(content).map_err(|e| {
            TableError::Parse(format!("failed to parse OpenAPI document: {}", e))
        })?;
        Ok(Self { spec })
    }

    /// Get a reference to the loaded document
    pub fn spec(&self) -> &OpenApiSpec {
        &self.spec
    }

    /// Consume the parser and take ownership of the document
    pub fn into_spec(self) -> OpenApiSpec {
        self.spec
    }
}
