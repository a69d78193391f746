//! Configuration for pruning.

use std::fmt;

use typeprune_core::NamedType;

type SkipPredicate = Box<dyn Fn(&NamedType) -> bool>;

/// Which removal rules apply. Everything eligible is pruned by default.
#[derive(Default)]
pub struct PruneOptions {
    /// Exempts individual types from every rule
    pub(crate) skip_pruning: Option<SkipPredicate>,
    /// Keep objects, interfaces and input objects without fields
    pub(crate) skip_empty_composite_types: bool,
    /// Keep types not reachable from roots or directives
    pub(crate) skip_unused_types: bool,
    /// Keep unions without members
    pub(crate) skip_empty_unions: bool,
    /// Keep interfaces that are declared but have no implementers
    pub(crate) skip_unimplemented_interfaces: bool,
}

impl PruneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never remove types for which `predicate` returns `true`.
    pub fn skip_pruning(mut self, predicate: impl Fn(&NamedType) -> bool + 'static) -> Self {
        self.skip_pruning = Some(Box::new(predicate));
        self
    }

    pub fn skip_empty_composite_types(mut self, value: bool) -> Self {
        self.skip_empty_composite_types = value;
        self
    }

    pub fn skip_unused_types(mut self, value: bool) -> Self {
        self.skip_unused_types = value;
        self
    }

    pub fn skip_empty_unions(mut self, value: bool) -> Self {
        self.skip_empty_unions = value;
        self
    }

    pub fn skip_unimplemented_interfaces(mut self, value: bool) -> Self {
        self.skip_unimplemented_interfaces = value;
        self
    }

    pub(crate) fn is_exempt(&self, ty: &NamedType) -> bool {
        self.skip_pruning
            .as_ref()
            .is_some_and(|predicate| predicate(ty))
    }
}

impl fmt::Debug for PruneOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PruneOptions")
            .field("skip_pruning", &self.skip_pruning.as_ref().map(|_| ".."))
            .field("skip_empty_composite_types", &self.skip_empty_composite_types)
            .field("skip_unused_types", &self.skip_unused_types)
            .field("skip_empty_unions", &self.skip_empty_unions)
            .field(
                "skip_unimplemented_interfaces",
                &self.skip_unimplemented_interfaces,
            )
            .finish()
    }
}
