//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! Integer and interval arguments are parsed by clap through `util`, so a
//! malformed number is reported before any command runs.

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction};

use crate::presets;
use crate::util::{parse_interval, parse_u64};

/// Lower bound of the interval (positional).
pub fn low_arg() -> Arg {
    Arg::new("low")
        .value_name("LOW")
        .required(true)
        .value_parser(parse_u64)
        .help("Lower bound, inclusive (decimal or 0x hex)")
}

/// Upper bound of the interval (positional).
pub fn high_arg() -> Arg {
    Arg::new("high")
        .value_name("HIGH")
        .required(true)
        .value_parser(parse_u64)
        .help("Upper bound, inclusive (decimal or 0x hex)")
}

/// Values to match (positional, repeated).
pub fn values_arg() -> Arg {
    Arg::new("values")
        .value_name("VALUE")
        .required(true)
        .num_args(1..)
        .value_parser(parse_u64)
        .help("Values to test against the interval")
}

/// Byte encoding (-e/--encoding).
pub fn encoding_arg() -> Arg {
    Arg::new("encoding")
        .short('e')
        .long("encoding")
        .value_name("ENCODING")
        .default_value("minimal")
        .value_parser(["minimal", "padded"])
        .help("Value encoding: minimal little-endian or zero-padded to the width of HIGH")
}

/// Share identical subtrees (--memoize).
pub fn memoize_arg() -> Arg {
    Arg::new("memoize")
        .long("memoize")
        .action(ArgAction::SetTrue)
        .help("Share identical subtrees between edges")
}

/// Dump format (--format).
pub fn dump_format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "dot"])
        .help("Output format")
}

/// Reduce output format (--format).
pub fn reduce_format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("hex")
        .value_parser(["hex", "rust", "json"])
        .help("Output format")
}

/// Print compile and match traces (--trace).
pub fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Print compile and match traces to stderr")
}

/// Base intervals (-b/--base, repeated).
pub fn base_arg() -> Arg {
    Arg::new("base")
        .short('b')
        .long("base")
        .value_name("INTERVAL")
        .action(ArgAction::Append)
        .value_parser(parse_interval)
        .help("Interval to include (LOW-HIGH, LOW..=HIGH or VALUE)")
}

/// Excluded intervals (-x/--exclude, repeated).
pub fn exclude_arg() -> Arg {
    Arg::new("exclude")
        .short('x')
        .long("exclude")
        .value_name("INTERVAL")
        .action(ArgAction::Append)
        .value_parser(parse_interval)
        .help("Interval to subtract (LOW-HIGH, LOW..=HIGH or VALUE)")
}

/// Built-in base and exclusion sets (--preset).
pub fn preset_arg() -> Arg {
    Arg::new("preset")
        .long("preset")
        .value_name("NAME")
        .value_parser(PossibleValuesParser::new(presets::names()))
        .help("Start from a built-in base and exclusion set")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

