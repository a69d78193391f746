//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Add the pruning rule flags shared by every command.
fn with_prune_flags(cmd: Command) -> Command {
    cmd.arg(skip_unused_types_arg())
        .arg(skip_empty_composite_types_arg())
        .arg(skip_empty_unions_arg())
        .arg(skip_unimplemented_interfaces_arg())
        .arg(keep_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typeprune")
        .about("Remove unreachable and empty types from a schema type graph")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(prune_command())
        .subcommand(report_command())
}

/// Prune a schema and print the result.
pub fn prune_command() -> Command {
    let cmd = Command::new("prune")
        .about("Prune a schema and print the pruned document")
        .after_help(
            r#"EXAMPLES:
  typeprune prune schema.json                       # pretty JSON to stdout
  typeprune prune schema.json -o pruned.json        # write to file
  typeprune prune - --compact < schema.json         # from stdin
  typeprune prune schema.json --keep Upload,Cursor  # exempt types
  typeprune prune schema.json --skip-unused-types   # only structural rules"#,
        )
        .arg(schema_path_arg())
        .arg(output_file_arg())
        .arg(compact_arg());

    with_prune_flags(cmd)
}

/// Show what pruning would remove, pass by pass.
pub fn report_command() -> Command {
    let cmd = Command::new("report")
        .about("Show which types pruning would remove, and why")
        .after_help(
            r#"EXAMPLES:
  typeprune report schema.json
  typeprune report schema.json --skip-empty-unions -vv"#,
        )
        .arg(schema_path_arg());

    with_prune_flags(cmd)
}
