//! Cycle-safe `$ref` resolution
//!
//! References are resolved against the document's schema registry. A stack
//! of in-flight references breaks cycles: when a reference re-enters the
//! stack, resolution returns a synthetic object stub whose `x-circular`
//! field carries the offending reference string instead of recursing
//! forever. A per-walk cache makes repeated resolution of the same
//! reference cheap and idempotent.
//!
//! Unresolvable references (unsupported shapes, missing registry entries)
//! resolve to `None`; callers degrade by emitting nothing for that node.

use crate::registry::{schema_ref_name, SchemaRegistry};
use apitab_parser::{Schema, SchemaOrRef};
use std::borrow::Cow;
use std::collections::HashMap;

/// Cache of fully-resolved references, keyed by reference string.
///
/// Shared across one flattening walk so a schema referenced from many
/// places resolves once and always to the same result.
pub type RefCache = HashMap<String, Schema>;

/// Resolve a schema node, collapsing reference chains.
///
/// Inline schemas come back borrowed. References resolve through the
/// registry, following chains like `A -> B -> C` down to the final target;
/// cycles produce a stub marked with `x-circular`. `None` means the node
/// contributes no schema: a malformed node, an unsupported reference
/// shape, or a reference to a name the registry does not know.
pub fn resolve_ref<'n>(
    node: &'n SchemaOrRef,
    registry: &SchemaRegistry<'_>,
    stack: &mut Vec<String>,
    cache: &mut RefCache,
) -> Option<Cow<'n, Schema>> {
    match node {
        SchemaOrRef::Schema(schema) => Some(Cow::Borrowed(schema)),
        SchemaOrRef::Other(_) => None,
        SchemaOrRef::Reference { ref_path } => {
            if let Some(cached) = cache.get(ref_path) {
                return Some(Cow::Owned(cached.clone()));
            }

            if stack.iter().any(|entry| entry == ref_path) {
                let stub = Schema {
                    schema_type: Some("object".to_string()),
                    circular: Some(ref_path.clone()),
                    ..Schema::default()
                };
                cache.insert(ref_path.clone(), stub.clone());
                return Some(Cow::Owned(stub));
            }

            let name = schema_ref_name(ref_path)?;
            let target = registry.get(name)?;

            stack.push(ref_path.clone());
            let resolved = resolve_ref(target, registry, stack, cache);
            stack.pop();

            let resolved = resolved?.into_owned();
            cache.insert(ref_path.clone(), resolved.clone());
            Some(Cow::Owned(resolved))
        }
    }
}

/// One-shot resolution with a fresh stack and cache
pub fn resolve_schema<'n>(
    node: &'n SchemaOrRef,
    registry: &SchemaRegistry<'_>,
) -> Option<Cow<'n, Schema>> {
    resolve_ref(node, registry, &mut Vec::new(), &mut RefCache::new())
}
