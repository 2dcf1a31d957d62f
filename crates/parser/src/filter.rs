//! Endpoint filtering
//!
//! Prunes an OpenAPI document down to a single path/method pair according
//! to the `[filtering]` section of the config file. A spec that already
//! contains exactly one endpoint passes through untouched; anything more
//! ambiguous without explicit rules is an error, because the table output
//! documents one endpoint at a time.
//!
//! The input spec is never mutated; filtering returns a pruned copy.

use crate::openapi::{OpenApiSpec, PathItem};
use apitab_common::{Result, TableError};
use indexmap::IndexMap;

/// Filtering rules read from the `[filtering]` config section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterRules {
    /// Exact path to keep (e.g. `/pets/{petId}`)
    pub path: Option<String>,

    /// HTTP method to keep, case-insensitive
    pub method: Option<String>,
}

impl FilterRules {
    /// True when no rule is set
    pub fn is_empty(&self) -> bool {
        self.path.is_none() && self.method.is_none()
    }
}

/// Apply filtering rules, returning a pruned copy of the spec.
///
/// Without rules the spec must already contain exactly one path with one
/// method. With a path rule, the path must exist; the method rule is
/// required whenever the selected path declares more than one method.
/// Non-method path-item siblings (path-level parameters, summaries) and
/// every other top-level field are preserved.
pub fn apply_filters(spec: &OpenApiSpec, rules: &FilterRules) -> Result<OpenApiSpec> {
    if rules.is_empty() {
        return passthrough_single_endpoint(spec);
    }

    let Some(path) = rules.path.as_deref() else {
        return Err(TableError::Filter(
            "The method cannot be specified alone. Please specify both path and method."
                .to_string(),
        ));
    };

    let Some(item) = spec.paths.get(path) else {
        return Err(TableError::Filter(
            "Your spec does not contain the required path. \
             Specify the correct path in the [filtering] section with path="
                .to_string(),
        ));
    };

    let available = item.method_names();
    let method = match rules.method.as_deref() {
        Some(method) => {
            let wanted = method.to_ascii_lowercase();
            if !available.iter().any(|m| *m == wanted) {
                return Err(TableError::Filter(
                    "Your spec does not contain either the required path or method. \
                     Specify the correct path and method in the [filtering] section"
                        .to_string(),
                ));
            }
            wanted
        }
        None => {
            if available.len() == 1 {
                available[0].to_string()
            } else {
                return Err(TableError::Filter(
                    "Multiple methods under the selected path; add method= in [filtering]"
                        .to_string(),
                ));
            }
        }
    };

    let mut pruned_item = item.clone();
    pruned_item.retain_method(&method);

    let mut pruned = spec.clone();
    let mut paths: IndexMap<String, PathItem> = IndexMap::with_capacity(1);
    paths.insert(path.to_string(), pruned_item);
    pruned.paths = paths;
    Ok(pruned)
}

fn passthrough_single_endpoint(spec: &OpenApiSpec) -> Result<OpenApiSpec> {
    let total_paths = spec.paths.len();
    let total_methods: usize = spec.paths.values().map(PathItem::method_count).sum();
    if total_paths == 1 && total_methods == 1 {
        return Ok(spec.clone());
    }
    Err(TableError::Filter(
        "Your spec contains multiple endpoints but no filtering rules. \
         Add [filtering] with path= and method= to the config file."
            .to_string(),
    ))
}
