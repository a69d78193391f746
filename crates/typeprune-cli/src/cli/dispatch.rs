//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::prune::PruneArgs;
use crate::commands::report::ReportArgs;
use crate::commands::run_common::PruneFlags;

pub struct PruneParams {
    pub schema_path: PathBuf,
    pub flags: PruneFlags,
    pub output: Option<PathBuf>,
    pub compact: bool,
    pub verbose: u8,
}

impl PruneParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: parse_schema_path(m),
            flags: parse_prune_flags(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            compact: m.get_flag("compact"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<PruneParams> for PruneArgs {
    fn from(p: PruneParams) -> Self {
        Self {
            schema_path: p.schema_path,
            flags: p.flags,
            output: p.output,
            compact: p.compact,
        }
    }
}

pub struct ReportParams {
    pub schema_path: PathBuf,
    pub flags: PruneFlags,
    pub verbose: u8,
}

impl ReportParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: parse_schema_path(m),
            flags: parse_prune_flags(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ReportParams> for ReportArgs {
    fn from(p: ReportParams) -> Self {
        Self {
            schema_path: p.schema_path,
            flags: p.flags,
        }
    }
}

fn parse_schema_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("schema_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_prune_flags(m: &ArgMatches) -> PruneFlags {
    PruneFlags {
        skip_unused_types: m.get_flag("skip_unused_types"),
        skip_empty_composite_types: m.get_flag("skip_empty_composite_types"),
        skip_empty_unions: m.get_flag("skip_empty_unions"),
        skip_unimplemented_interfaces: m.get_flag("skip_unimplemented_interfaces"),
        keep: m
            .get_many::<String>("keep")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    }
}
