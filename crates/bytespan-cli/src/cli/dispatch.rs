//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep the raw color
//! choice; `Into<*Args>` resolves it against the terminal.

use bytespan_core::{Encoding, Interval};
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::dump::{DumpArgs, DumpFormat};
use crate::commands::matching::MatchArgs;
use crate::commands::reduce::{ReduceArgs, ReduceFormat};

pub struct DumpParams {
    pub low: u64,
    pub high: u64,
    pub encoding: Encoding,
    pub memoize: bool,
    pub format: DumpFormat,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(|s| s.as_str()) {
            Some("dot") => DumpFormat::Dot,
            _ => DumpFormat::Text,
        };
        Self {
            low: parse_bound(m, "low"),
            high: parse_bound(m, "high"),
            encoding: parse_encoding(m),
            memoize: m.get_flag("memoize"),
            format,
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            low: p.low,
            high: p.high,
            encoding: p.encoding,
            memoize: p.memoize,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct MatchParams {
    pub low: u64,
    pub high: u64,
    pub values: Vec<u64>,
    pub encoding: Encoding,
    pub memoize: bool,
    pub trace: bool,
    pub color: ColorChoice,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            low: parse_bound(m, "low"),
            high: parse_bound(m, "high"),
            values: m
                .get_many::<u64>("values")
                .map(|values| values.copied().collect())
                .unwrap_or_default(),
            encoding: parse_encoding(m),
            memoize: m.get_flag("memoize"),
            trace: m.get_flag("trace"),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            low: p.low,
            high: p.high,
            values: p.values,
            encoding: p.encoding,
            memoize: p.memoize,
            trace: p.trace,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ReduceParams {
    pub base: Vec<Interval>,
    pub exclude: Vec<Interval>,
    pub preset: Option<String>,
    pub format: ReduceFormat,
}

impl ReduceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(|s| s.as_str()) {
            Some("rust") => ReduceFormat::Rust,
            Some("json") => ReduceFormat::Json,
            _ => ReduceFormat::Hex,
        };
        Self {
            base: parse_intervals(m, "base"),
            exclude: parse_intervals(m, "exclude"),
            preset: m.get_one::<String>("preset").cloned(),
            format,
        }
    }
}

impl From<ReduceParams> for ReduceArgs {
    fn from(p: ReduceParams) -> Self {
        Self {
            base: p.base,
            exclude: p.exclude,
            preset: p.preset,
            format: p.format,
        }
    }
}

/// Required positionals always carry a value once clap accepted the input.
fn parse_bound(m: &ArgMatches, id: &str) -> u64 {
    m.get_one::<u64>(id).copied().unwrap_or_default()
}

fn parse_intervals(m: &ArgMatches, id: &str) -> Vec<Interval> {
    m.get_many::<Interval>(id)
        .map(|intervals| intervals.copied().collect())
        .unwrap_or_default()
}

fn parse_encoding(m: &ArgMatches) -> Encoding {
    match m.get_one::<String>("encoding").map(|s| s.as_str()) {
        Some("padded") => Encoding::Padded,
        _ => Encoding::Minimal,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
