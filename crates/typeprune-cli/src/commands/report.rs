use std::path::PathBuf;

use typeprune_lib::prune_graph_with_report;

use super::run_common::{PruneFlags, load_schema_or_exit};

pub struct ReportArgs {
    pub schema_path: PathBuf,
    pub flags: PruneFlags,
}

pub fn run(args: ReportArgs) {
    let graph = load_schema_or_exit(&args.schema_path);
    args.flags.check_keep(&graph);

    let before = graph.len();
    let (pruned, report) = prune_graph_with_report(graph, &args.flags.to_options());

    print!("{report}");
    if !report.is_empty() {
        println!("{before} types -> {} types", pruned.len());
    }
}
