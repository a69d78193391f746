//! Shared logic for prune and report commands.

use std::collections::HashSet;
use std::path::Path;

use tracing::warn;
use typeprune_core::TypeGraph;
use typeprune_lib::PruneOptions;

use super::schema_loader::load_schema;

/// Pruning rule flags as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneFlags {
    pub skip_unused_types: bool,
    pub skip_empty_composite_types: bool,
    pub skip_empty_unions: bool,
    pub skip_unimplemented_interfaces: bool,
    pub keep: Vec<String>,
}

impl PruneFlags {
    /// Build the pruning options. `--keep` names become the `skip_pruning` predicate.
    pub fn to_options(&self) -> PruneOptions {
        let options = PruneOptions::new()
            .skip_unused_types(self.skip_unused_types)
            .skip_empty_composite_types(self.skip_empty_composite_types)
            .skip_empty_unions(self.skip_empty_unions)
            .skip_unimplemented_interfaces(self.skip_unimplemented_interfaces);

        if self.keep.is_empty() {
            return options;
        }
        let keep: HashSet<String> = self.keep.iter().cloned().collect();
        options.skip_pruning(move |ty| keep.contains(&ty.name))
    }

    /// Warn about `--keep` names the schema does not define.
    pub fn check_keep(&self, graph: &TypeGraph) {
        for name in self.keep.iter().filter(|name| !graph.contains(name)) {
            warn!(name = name.as_str(), "--keep names a type the schema does not define");
        }
    }
}

/// Load a schema, exiting with a message on failure.
pub fn load_schema_or_exit(path: &Path) -> TypeGraph {
    load_schema(path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}
