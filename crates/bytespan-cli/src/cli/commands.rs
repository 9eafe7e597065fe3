//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("bytespan")
        .about("Compile integer intervals into byte-range automata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(match_command())
        .subcommand(reduce_command())
}

/// Show the automaton compiled for an interval.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the automaton for an interval")
        .override_usage("  bytespan dump <LOW> <HIGH> [--encoding <ENCODING>] [--format <FORMAT>]")
        .after_help(
            r#"EXAMPLES:
  bytespan dump 0 0x1ff                     # indented edge list
  bytespan dump 1 0xdeadbeef --memoize      # shared subtrees
  bytespan dump 0 0x100 -e padded           # fixed-width encoding
  bytespan dump 0 0xffff --format dot | dot -Tsvg > automaton.svg"#,
        )
        .arg(low_arg())
        .arg(high_arg())
        .arg(encoding_arg())
        .arg(memoize_arg())
        .arg(dump_format_arg())
        .arg(color_arg())
}

/// Test values against an interval's automaton.
pub fn match_command() -> Command {
    Command::new("match")
        .about("Test values against the automaton for an interval")
        .override_usage("  bytespan match <LOW> <HIGH> <VALUE>... [--encoding <ENCODING>] [--trace]")
        .after_help(
            r#"EXAMPLES:
  bytespan match 1 0xdeadbeef 0 1 0xdeadbeef  # one verdict per value
  bytespan match 0 0x1ff 0x100 --trace        # show compile and walk"#,
        )
        .arg(low_arg())
        .arg(high_arg())
        .arg(values_arg())
        .arg(encoding_arg())
        .arg(memoize_arg())
        .arg(trace_arg())
        .arg(color_arg())
}

/// Subtract exclusion intervals from a base set.
pub fn reduce_command() -> Command {
    Command::new("reduce")
        .about("Subtract exclusion intervals from a base set")
        .override_usage(
            "\
  bytespan reduce --base <INTERVAL>... [--exclude <INTERVAL>...]
  bytespan reduce --preset <NAME> [--exclude <INTERVAL>...]",
        )
        .after_help(
            r#"EXAMPLES:
  bytespan reduce -b 0x20-0xd7ff -x 0x7f-0x84       # two fragments
  bytespan reduce --preset xml-char --format rust   # lexer table"#,
        )
        .arg(base_arg())
        .arg(exclude_arg())
        .arg(preset_arg())
        .arg(reduce_format_arg())
}
