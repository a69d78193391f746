//! Reachability marking.
//!
//! Depth-first walk from the root types, from every directive argument and
//! from every type exempted by `skip_pruning`. Reserved types are never
//! marked themselves, but everything they reference is, since they are kept
//! as-is and must not lose members to a rebuild.
//!
//! Output positions (objects, interfaces, unions) follow fields, arguments,
//! implementers and implemented interfaces; input positions (input objects)
//! follow input fields. Enums and scalars are leaves in both positions.
//!
//! The walk uses an explicit stack and a visited set, so reference cycles
//! and deep graphs cost neither recursion nor repeated work.

use std::collections::HashSet;

use indexmap::IndexMap;
use typeprune_core::{NamedType, SchemaGraph, TypeKind, TypeShape, is_reserved_name};

use crate::{ImplementationIndex, PruneOptions};
use crate::invariants::ensure_type;

/// Per-pass "unused" flags for every non-reserved type.
///
/// Flags only ever go from unused to used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedSet {
    unused: IndexMap<String, bool>,
}

impl UsedSet {
    /// Every non-reserved type of `graph`, all marked unused.
    pub fn new<G: SchemaGraph>(graph: &G) -> Self {
        let unused = graph
            .types()
            .keys()
            .filter(|name| !is_reserved_name(name))
            .map(|name| (name.clone(), true))
            .collect();
        Self { unused }
    }

    /// Mark `name` as used. Returns `true` if it was unused before.
    pub fn mark_used(&mut self, name: &str) -> bool {
        match self.unused.get_mut(name) {
            Some(flag) => std::mem::replace(flag, false),
            None => false,
        }
    }

    /// Reserved and unknown names are never reported unused.
    pub fn is_unused(&self, name: &str) -> bool {
        self.unused.get(name).copied().unwrap_or(false)
    }

    pub fn unused(&self) -> impl Iterator<Item = &str> + '_ {
        self.unused
            .iter()
            .filter(|(_, unused)| **unused)
            .map(|(name, _)| name.as_str())
    }

    pub fn used(&self) -> impl Iterator<Item = &str> + '_ {
        self.unused
            .iter()
            .filter(|(_, unused)| !**unused)
            .map(|(name, _)| name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Output,
    Input,
}

impl Position {
    /// Position a type is walked in when it seeds the marker itself.
    fn of(ty: &NamedType) -> Self {
        match ty.kind() {
            TypeKind::InputObject => Self::Input,
            _ => Self::Output,
        }
    }
}

/// Mark every type reachable from the roots and directive arguments of `graph`,
/// from the members of reserved types, and from types `options` exempts.
pub fn mark_reachable<G: SchemaGraph>(
    graph: &G,
    index: &ImplementationIndex,
    options: &PruneOptions,
) -> UsedSet {
    let mut marker = Marker {
        graph,
        index,
        visited: HashSet::new(),
        used: UsedSet::new(graph),
        stack: Vec::new(),
    };

    for root in graph.root_types() {
        marker.stack.push((root.name.as_str(), Position::Output));
    }
    for directive in graph.directives() {
        for arg in &directive.arguments {
            marker.stack.push((arg.ty.named_type(), Position::Input));
        }
    }
    for ty in graph.types().values() {
        if ty.is_reserved() {
            marker.expand(ty, Position::of(ty));
        } else if options.is_exempt(ty) {
            marker.stack.push((ty.name.as_str(), Position::of(ty)));
        }
    }

    marker.run();
    marker.used
}

struct Marker<'a, G> {
    graph: &'a G,
    index: &'a ImplementationIndex,
    visited: HashSet<&'a str>,
    used: UsedSet,
    stack: Vec<(&'a str, Position)>,
}

impl<'a, G: SchemaGraph> Marker<'a, G> {
    fn run(&mut self) {
        while let Some((name, position)) = self.stack.pop() {
            if is_reserved_name(name) || !self.visited.insert(name) {
                continue;
            }
            self.used.mark_used(name);

            let ty = ensure_type(self.graph, name);
            self.expand(ty, position);
        }
    }

    fn expand(&mut self, ty: &'a NamedType, position: Position) {
        match position {
            Position::Output => self.expand_output(ty),
            Position::Input => self.expand_input(ty),
        }
    }

    fn expand_output(&mut self, ty: &'a NamedType) {
        match &ty.shape {
            TypeShape::Object { fields, interfaces } | TypeShape::Interface { fields, interfaces } => {
                for field in fields {
                    self.stack.push((field.ty.named_type(), Position::Output));
                    for arg in &field.arguments {
                        self.stack.push((arg.ty.named_type(), Position::Input));
                    }
                }
                if matches!(ty.shape, TypeShape::Interface { .. })
                    && let Some(implementers) = self.index.implementers(&ty.name)
                {
                    for implementer in implementers {
                        self.stack.push((implementer.as_str(), Position::Output));
                    }
                }
                for interface in interfaces {
                    self.stack.push((interface.as_str(), Position::Output));
                }
            }
            TypeShape::Union { members } => {
                for member in members {
                    self.stack.push((member.as_str(), Position::Output));
                }
            }
            TypeShape::Scalar | TypeShape::Enum { .. } | TypeShape::InputObject { .. } => {}
        }
    }

    fn expand_input(&mut self, ty: &'a NamedType) {
        for field in ty.input_fields() {
            self.stack.push((field.ty.named_type(), Position::Input));
        }
    }
}
