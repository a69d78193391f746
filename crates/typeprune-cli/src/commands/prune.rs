use std::fs;
use std::path::PathBuf;

use tracing::info;
use typeprune_lib::prune_graph;

use super::run_common::{PruneFlags, load_schema_or_exit};

pub struct PruneArgs {
    pub schema_path: PathBuf,
    pub flags: PruneFlags,
    pub output: Option<PathBuf>,
    pub compact: bool,
}

pub fn run(args: PruneArgs) {
    let graph = load_schema_or_exit(&args.schema_path);
    args.flags.check_keep(&graph);

    let before = graph.len();
    let pruned = prune_graph(graph, &args.flags.to_options());
    info!(before, after = pruned.len(), "schema pruned");

    let json = pruned.to_json(!args.compact).unwrap_or_else(|e| {
        eprintln!("error: failed to serialize schema: {e}");
        std::process::exit(1);
    });

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, format!("{json}\n")) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{json}"),
    }
}
