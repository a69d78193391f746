//! Fixed-point pruning driver.
//!
//! Removing a type can leave another one empty (its only fields pointed at
//! the removed type) or orphaned, so passes repeat on the rebuilt graph until
//! one selects nothing. Every non-final pass removes at least one type, which
//! bounds the number of passes by the number of types.

use std::fmt;

use tracing::{debug, trace};
use typeprune_core::SchemaGraph;

use crate::invariants::ensure_shrunk;
use crate::{ImplementationIndex, PruneOptions, RemovalReason, RemovalSet};
use crate::{mark_reachable, select_removals};

/// Removals of every pass that removed something, in pass order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    passes: Vec<RemovalSet>,
}

impl PruneReport {
    pub fn passes(&self) -> &[RemovalSet] {
        &self.passes
    }

    /// Every removed type with the reason it was removed.
    pub fn removed(&self) -> impl Iterator<Item = (&str, RemovalReason)> + '_ {
        self.passes.iter().flat_map(RemovalSet::iter)
    }

    pub fn removed_count(&self) -> usize {
        self.passes.iter().map(RemovalSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl fmt::Display for PruneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passes.is_empty() {
            return writeln!(f, "no types removed");
        }
        for (i, pass) in self.passes.iter().enumerate() {
            let noun = if pass.len() == 1 { "type" } else { "types" };
            writeln!(f, "pass {}: {} {noun}", i + 1, pass.len())?;
            for (name, reason) in pass.iter() {
                writeln!(f, "  {name} ({reason})")?;
            }
        }
        Ok(())
    }
}

/// Run a single pass over `graph`: index, mark, select.
pub fn run_pass<G: SchemaGraph>(graph: &G, options: &PruneOptions) -> RemovalSet {
    let index = ImplementationIndex::build(graph);
    let used = mark_reachable(graph, &index, options);
    trace!(
        interfaces = index.len(),
        used = used.used().count(),
        "reachability marked"
    );
    select_removals(graph, &used, &index, options)
}

/// Prune `graph` until no pass removes anything.
pub fn prune_graph<G: SchemaGraph>(graph: G, options: &PruneOptions) -> G {
    prune_graph_with_report(graph, options).0
}

/// Like [`prune_graph`], also returning what each pass removed.
pub fn prune_graph_with_report<G: SchemaGraph>(
    mut graph: G,
    options: &PruneOptions,
) -> (G, PruneReport) {
    let mut report = PruneReport::default();
    loop {
        let removals = run_pass(&graph, options);
        if removals.is_empty() {
            debug!(
                passes = report.passes.len() + 1,
                removed = report.removed_count(),
                "type graph pruned"
            );
            return (graph, report);
        }

        debug!(
            pass = report.passes.len() + 1,
            removed = removals.len(),
            "pruning pass"
        );
        for (name, reason) in removals.iter() {
            trace!(name, %reason, "removing type");
        }

        let rebuilt = graph.rebuild_excluding(&removals.names());
        ensure_shrunk(&graph, &rebuilt, removals.len());
        graph = rebuilt;
        report.passes.push(removals);
    }
}
