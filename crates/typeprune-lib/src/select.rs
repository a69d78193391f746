//! Per-pass removal selection.
//!
//! | Category                 | Removed when                    | Skipped by                      |
//! |--------------------------|---------------------------------|---------------------------------|
//! | Object, input object     | no fields                       | `skip_empty_composite_types`    |
//! | Union                    | no members                      | `skip_empty_unions`             |
//! | Interface                | no fields                       | `skip_empty_composite_types`    |
//! | Interface                | declared, but no implementers   | `skip_unimplemented_interfaces` |
//! | Any                      | unused                          | `skip_unused_types`             |
//!
//! Reserved names are never selected; `skip_pruning` exempts a type from every rule.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use typeprune_core::{NamedType, SchemaGraph, TypeKind};

use crate::{ImplementationIndex, PruneOptions, UsedSet};

/// Why a type was selected. When several rules match, the first in table order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalReason {
    EmptyComposite,
    EmptyUnion,
    UnimplementedInterface,
    Unused,
}

impl RemovalReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyComposite => "empty composite",
            Self::EmptyUnion => "empty union",
            Self::UnimplementedInterface => "unimplemented interface",
            Self::Unused => "unused",
        }
    }
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Types selected for removal by one pass, in graph order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalSet {
    reasons: IndexMap<String, RemovalReason>,
}

impl RemovalSet {
    pub fn contains(&self, name: &str) -> bool {
        self.reasons.contains_key(name)
    }

    pub fn reason(&self, name: &str) -> Option<RemovalReason> {
        self.reasons.get(name).copied()
    }

    pub fn names(&self) -> IndexSet<String> {
        self.reasons.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RemovalReason)> + '_ {
        self.reasons
            .iter()
            .map(|(name, reason)| (name.as_str(), *reason))
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Select the types to remove from `graph` in this pass.
pub fn select_removals<G: SchemaGraph>(
    graph: &G,
    used: &UsedSet,
    index: &ImplementationIndex,
    options: &PruneOptions,
) -> RemovalSet {
    let reasons = graph
        .types()
        .values()
        .filter(|ty| !ty.is_reserved() && !options.is_exempt(ty))
        .filter_map(|ty| {
            removal_reason(ty, used, index, options).map(|reason| (ty.name.clone(), reason))
        })
        .collect();
    RemovalSet { reasons }
}

fn removal_reason(
    ty: &NamedType,
    used: &UsedSet,
    index: &ImplementationIndex,
    options: &PruneOptions,
) -> Option<RemovalReason> {
    let empty_composite = (
        !options.skip_empty_composite_types && ty.field_count() == 0,
        RemovalReason::EmptyComposite,
    );
    let unused = (
        !options.skip_unused_types && used.is_unused(&ty.name),
        RemovalReason::Unused,
    );

    match ty.kind() {
        TypeKind::Object | TypeKind::InputObject => first_match(&[empty_composite, unused]),
        TypeKind::Union => {
            let empty_union = (
                !options.skip_empty_unions && ty.members().is_empty(),
                RemovalReason::EmptyUnion,
            );
            first_match(&[empty_union, unused])
        }
        TypeKind::Interface => {
            let unimplemented = (
                !options.skip_unimplemented_interfaces && index.is_unimplemented(&ty.name),
                RemovalReason::UnimplementedInterface,
            );
            first_match(&[empty_composite, unimplemented, unused])
        }
        TypeKind::Scalar | TypeKind::Enum => first_match(&[unused]),
    }
}

fn first_match(rules: &[(bool, RemovalReason)]) -> Option<RemovalReason> {
    rules
        .iter()
        .find(|(matched, _)| *matched)
        .map(|(_, reason)| *reason)
}
