//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use typeprune_core::{NamedType, SchemaGraph};

pub(crate) fn ensure_type<'g, G: SchemaGraph>(graph: &'g G, name: &str) -> &'g NamedType {
    graph.get_type(name).unwrap_or_else(|| {
        panic!(
            "type `{name}` is referenced but not defined \
             (graphs must be checked for dangling references before pruning)"
        )
    })
}

pub(crate) fn ensure_shrunk<G: SchemaGraph>(before: &G, after: &G, removed: usize) {
    let (before, after) = (before.types().len(), after.types().len());
    if after + removed != before {
        panic!(
            "rebuild_excluding removed {} types, expected {removed} \
             (SchemaGraph implementations must drop exactly the requested types)",
            before.saturating_sub(after)
        );
    }
}
