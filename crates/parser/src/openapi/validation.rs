//! Lightweight structural validation for OpenAPI 3.x documents
//!
//! This is not a full schema validator. It catches the structural problems
//! that make table output misleading (wrong major version, pathless specs,
//! bogus parameter locations) and leaves fine-grained JSON-Schema
//! enforcement to dedicated tooling.

use super::types::{OpenApiSpec, ParameterOrRef};
use apitab_common::{Result, TableError};

const PARAMETER_LOCATIONS: [&str; 4] = ["query", "header", "path", "cookie"];

/// Validate the structural shape of an OpenAPI 3.x document.
///
/// Collects every problem found and reports them in one
/// `TableError::Validation`.
pub fn validate_spec(spec: &OpenApiSpec) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if !spec.openapi.starts_with("3.") {
        errors.push(format!(
            "unsupported OpenAPI version '{}', expected 3.x",
            spec.openapi
        ));
    }
    if spec.info.title.trim().is_empty() {
        errors.push("info.title must not be empty".to_string());
    }
    if spec.info.version.trim().is_empty() {
        errors.push("info.version must not be empty".to_string());
    }

    for (path, item) in &spec.paths {
        if !path.starts_with('/') {
            errors.push(format!("path '{}' must start with '/'", path));
        }
        for (method, operation) in item.operations() {
            if operation.responses.is_empty() {
                errors.push(format!(
                    "{} {}: operation declares no responses",
                    method.to_uppercase(),
                    path
                ));
            }
            for parameter in &operation.parameters {
                if let ParameterOrRef::Item(parameter) = parameter {
                    if !PARAMETER_LOCATIONS.contains(&parameter.location.as_str()) {
                        errors.push(format!(
                            "{} {}: parameter '{}' has invalid location '{}'",
                            method.to_uppercase(),
                            path,
                            parameter.name,
                            parameter.location
                        ));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TableError::Validation(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::DocumentParser;

    fn parse(source: &str) -> OpenApiSpec {
        DocumentParser::from_source(source).unwrap().into_spec()
    }

    #[test]
    fn test_valid_spec_passes() {
        let spec = parse(
            r#"
openapi: 3.0.3
info:
  title: Pets
  version: "1.0"
paths:
  /pets:
    get:
      parameters:
        - name: limit
          in: query
          schema:
            type: integer
      responses:
        "200":
          description: OK
"#,
        );
        assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn test_wrong_major_version_rejected() {
        let spec = parse(
            r#"
openapi: 2.0.0
info:
  title: Old
  version: "1.0"
paths: {}
"#,
        );
        let err = validate_spec(&spec).unwrap_err();
        assert!(err.to_string().contains("expected 3.x"));
    }

    #[test]
    fn test_collects_multiple_problems() {
        let spec = parse(
            r#"
openapi: 3.1.0
info:
  title: ""
  version: "1.0"
paths:
  pets:
    get:
      parameters:
        - name: limit
          in: body
          schema:
            type: integer
      responses: {}
"#,
        );
        let err = validate_spec(&spec).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("info.title"));
        assert!(message.contains("must start with '/'"));
        assert!(message.contains("no responses"));
        assert!(message.contains("invalid location 'body'"));
    }
}
