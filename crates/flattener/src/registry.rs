//! Schema lookup over a document's reusable components

use apitab_parser::{OpenApiSpec, SchemaOrRef};
use indexmap::IndexMap;

/// Borrowed view of the schemas under `components.schemas`.
///
/// Documents without a components section get an empty registry; every
/// lookup then misses, which downstream code treats as an unresolvable
/// reference.
#[derive(Debug, Clone, Copy)]
pub struct SchemaRegistry<'a> {
    schemas: Option<&'a IndexMap<String, SchemaOrRef>>,
}

impl<'a> SchemaRegistry<'a> {
    /// Build a registry over a parsed document
    pub fn from_spec(spec: &'a OpenApiSpec) -> Self {
        Self {
            schemas: spec.components.as_ref().map(|c| &c.schemas),
        }
    }

    /// Registry with no schemas; every lookup misses
    pub fn empty() -> Self {
        Self { schemas: None }
    }

    /// Look up a schema by its component name
    pub fn get(&self, name: &str) -> Option<&'a SchemaOrRef> {
        self.schemas?.get(name)
    }
}

/// Extract the component name from a local schema reference.
///
/// Only `#/components/schemas/<Name>` is supported; anything else (remote
/// references, nested pointers, other component sections) yields `None`.
pub fn schema_ref_name(ref_path: &str) -> Option<&str> {
    ref_path
        .strip_prefix("#/components/schemas/")
        .filter(|name| !name.is_empty() && !name.contains('/'))
}
