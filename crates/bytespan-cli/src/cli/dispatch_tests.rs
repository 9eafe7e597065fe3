//! Tests for CLI dispatch logic.

use bytespan_core::{Encoding, Interval};

use super::*;
use crate::cli::commands::{dump_command, match_command, reduce_command};
use crate::commands::dump::DumpFormat;
use crate::commands::reduce::ReduceFormat;

#[test]
fn dump_defaults() {
    let m = dump_command()
        .try_get_matches_from(["dump", "0", "0x1ff"])
        .unwrap();
    let params = DumpParams::from_matches(&m);
    assert_eq!((params.low, params.high), (0, 0x1FF));
    assert_eq!(params.encoding, Encoding::Minimal);
    assert!(!params.memoize);
    assert_eq!(params.format, DumpFormat::Text);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn dump_flags() {
    let m = dump_command()
        .try_get_matches_from([
            "dump",
            "1",
            "0xDEAD_BEEF",
            "-e",
            "padded",
            "--memoize",
            "--format",
            "dot",
            "--color",
            "never",
        ])
        .unwrap();
    let params = DumpParams::from_matches(&m);
    assert_eq!((params.low, params.high), (1, 0xDEADBEEF));
    assert_eq!(params.encoding, Encoding::Padded);
    assert!(params.memoize);
    assert_eq!(params.format, DumpFormat::Dot);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn dump_rejects_malformed_numbers() {
    let result = dump_command().try_get_matches_from(["dump", "0", "0xZZ"]);
    assert!(result.is_err());
}

#[test]
fn dump_requires_both_bounds() {
    let result = dump_command().try_get_matches_from(["dump", "0"]);
    assert!(result.is_err());
}

#[test]
fn match_collects_values() {
    let m = match_command()
        .try_get_matches_from(["match", "1", "0xdeadbeef", "0", "1", "0xdeadbeef", "--trace"])
        .unwrap();
    let params = MatchParams::from_matches(&m);
    assert_eq!((params.low, params.high), (1, 0xDEADBEEF));
    assert_eq!(params.values, vec![0, 1, 0xDEADBEEF]);
    assert!(params.trace);
}

#[test]
fn match_requires_a_value() {
    let result = match_command().try_get_matches_from(["match", "1", "2"]);
    assert!(result.is_err());
}

#[test]
fn reduce_collects_repeated_intervals() {
    let m = reduce_command()
        .try_get_matches_from([
            "reduce",
            "-b",
            "0x20-0xd7ff",
            "--base",
            "9",
            "-x",
            "0x7f..=0x84",
            "--format",
            "rust",
        ])
        .unwrap();
    let params = ReduceParams::from_matches(&m);
    assert_eq!(
        params.base,
        vec![Interval::new(0x20, 0xD7FF).unwrap(), Interval::single(9)]
    );
    assert_eq!(params.exclude, vec![Interval::new(0x7F, 0x84).unwrap()]);
    assert_eq!(params.preset, None);
    assert_eq!(params.format, ReduceFormat::Rust);
}

#[test]
fn reduce_preset() {
    let m = reduce_command()
        .try_get_matches_from(["reduce", "--preset", "xml-char"])
        .unwrap();
    let params = ReduceParams::from_matches(&m);
    assert_eq!(params.preset.as_deref(), Some("xml-char"));
    assert!(params.base.is_empty());
    assert_eq!(params.format, ReduceFormat::Hex);
}

#[test]
fn reduce_rejects_unknown_preset() {
    let result = reduce_command().try_get_matches_from(["reduce", "--preset", "latin-1"]);
    assert!(result.is_err());
}

#[test]
fn reduce_rejects_inverted_interval() {
    let result = reduce_command().try_get_matches_from(["reduce", "-b", "0x10-0x1"]);
    assert!(result.is_err());
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    assert!(help.contains("dump"));
    assert!(help.contains("match"));
    assert!(help.contains("reduce"));
}
