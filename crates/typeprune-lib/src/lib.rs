#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Pruning of schema type graphs.
//!
//! A pass runs three steps over an immutable graph snapshot:
//! - `implementations` - which types implement each interface
//! - `reachability` - which types are reachable from roots, directives,
//!   reserved types and exempt types
//! - `select` - which types to remove, per category rules and `PruneOptions`
//!
//! The `prune` driver rebuilds the graph without the selected types and
//! repeats until a pass selects nothing.

mod implementations;
mod invariants;
mod options;
mod prune;
mod reachability;
mod select;

#[cfg(test)]
mod prune_tests;
#[cfg(test)]
pub mod test_utils;

pub use implementations::ImplementationIndex;
pub use options::PruneOptions;
pub use prune::{PruneReport, prune_graph, prune_graph_with_report, run_pass};
pub use reachability::{UsedSet, mark_reachable};
pub use select::{RemovalReason, RemovalSet, select_removals};

pub use typeprune_core::{NamedType, SchemaGraph, TypeGraph};
