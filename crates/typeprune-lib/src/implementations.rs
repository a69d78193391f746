//! Interface implementation index.
//!
//! Built once per pass by scanning every type's declared interfaces. Lookups
//! distinguish an interface that was never declared by anything (`None`) from
//! one whose entry exists but holds no implementers (`Some` of an empty set).

use indexmap::{IndexMap, IndexSet};
use typeprune_core::SchemaGraph;

/// Map from interface name to the names of the types declaring it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImplementationIndex {
    entries: IndexMap<String, IndexSet<String>>,
}

impl ImplementationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `graph` for every `implements` declaration.
    ///
    /// The entry for an interface is created as soon as any type declares it.
    /// Reserved (introspection) types create the entry but are not recorded as
    /// implementers.
    ///
    /// Every entry starts from a declaration, so an entry is only ever empty
    /// when all of the interface's implementers are reserved types. That is
    /// the one case in which [`is_unimplemented`](Self::is_unimplemented)
    /// holds for a built index; interfaces nothing declares have no entry.
    pub fn build<G: SchemaGraph>(graph: &G) -> Self {
        let mut index = Self::new();
        for ty in graph.types().values() {
            for interface in ty.interfaces() {
                if ty.is_reserved() {
                    index.observe(interface);
                } else {
                    index.record(interface, ty.name.clone());
                }
            }
        }
        index
    }

    /// Ensure an entry exists for `interface` and return its implementer set.
    pub fn observe(&mut self, interface: &str) -> &mut IndexSet<String> {
        self.entries.entry(interface.to_string()).or_default()
    }

    pub fn record(&mut self, interface: &str, implementer: impl Into<String>) {
        self.observe(interface).insert(implementer.into());
    }

    /// Implementers of `interface`, or `None` when it was never declared.
    pub fn implementers(&self, interface: &str) -> Option<&IndexSet<String>> {
        self.entries.get(interface)
    }

    /// Observed as an interface, but with zero implementers.
    pub fn is_unimplemented(&self, interface: &str) -> bool {
        self.implementers(interface)
            .is_some_and(|implementers| implementers.is_empty())
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
