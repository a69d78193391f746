mod cli;
mod commands;
mod util;

use cli::{PruneParams, ReportParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("prune", m)) => {
            let params = PruneParams::from_matches(m);
            util::init_tracing(params.verbose);
            commands::prune::run(params.into());
        }
        Some(("report", m)) => {
            let params = ReportParams::from_matches(m);
            util::init_tracing(params.verbose);
            commands::report::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
