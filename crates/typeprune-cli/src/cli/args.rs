//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so `prune` and `report` accept the
//! exact same pruning flags.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Schema document (positional, "-" for stdin).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Schema JSON document (use \"-\" for stdin)")
}

/// Keep unreachable types (--skip-unused-types).
pub fn skip_unused_types_arg() -> Arg {
    Arg::new("skip_unused_types")
        .long("skip-unused-types")
        .action(ArgAction::SetTrue)
        .help("Keep types that are not reachable from roots or directives")
}

/// Keep field-less composites (--skip-empty-composite-types).
pub fn skip_empty_composite_types_arg() -> Arg {
    Arg::new("skip_empty_composite_types")
        .long("skip-empty-composite-types")
        .action(ArgAction::SetTrue)
        .help("Keep objects, interfaces and input objects without fields")
}

/// Keep member-less unions (--skip-empty-unions).
pub fn skip_empty_unions_arg() -> Arg {
    Arg::new("skip_empty_unions")
        .long("skip-empty-unions")
        .action(ArgAction::SetTrue)
        .help("Keep unions without members")
}

/// Keep interfaces nobody implements (--skip-unimplemented-interfaces).
pub fn skip_unimplemented_interfaces_arg() -> Arg {
    Arg::new("skip_unimplemented_interfaces")
        .long("skip-unimplemented-interfaces")
        .action(ArgAction::SetTrue)
        .help("Keep interfaces that are declared but have no implementers")
}

/// Types exempt from pruning (--keep, repeatable or comma-separated).
pub fn keep_arg() -> Arg {
    Arg::new("keep")
        .long("keep")
        .value_name("TYPE")
        .action(ArgAction::Append)
        .value_delimiter(',')
        .help("Never remove this type (repeatable, comma-separated)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for pass summaries, -vv for every removed type)")
}
