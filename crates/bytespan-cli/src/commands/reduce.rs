use std::fmt::Write as _;

use bytespan_core::{Interval, reduce_intervals};

use crate::presets;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReduceFormat {
    /// `0x000020..=0x00D7FF`
    #[default]
    Hex,
    /// `.chain((0x000020..=0x00D7FF).filter_map(from_u32))`, ready to paste
    /// into a `char` iterator.
    Rust,
    Json,
}

pub struct ReduceArgs {
    pub base: Vec<Interval>,
    pub exclude: Vec<Interval>,
    pub preset: Option<String>,
    pub format: ReduceFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum ReduceError {
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("no base intervals (use --base or --preset)")]
    NoBase,

    #[error("failed to serialize intervals: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn run(args: ReduceArgs) {
    let result = reduce(&args).and_then(|intervals| render(&intervals, args.format));
    match result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Preset intervals first, then the explicit ones.
pub fn reduce(args: &ReduceArgs) -> Result<Vec<Interval>, ReduceError> {
    let mut base = Vec::new();
    let mut exclusions = Vec::new();

    if let Some(name) = &args.preset {
        let preset = presets::find(name).ok_or_else(|| ReduceError::UnknownPreset(name.clone()))?;
        base.extend(preset.base());
        exclusions.extend(preset.exclusions());
    }
    base.extend_from_slice(&args.base);
    exclusions.extend_from_slice(&args.exclude);

    if base.is_empty() {
        return Err(ReduceError::NoBase);
    }
    Ok(reduce_intervals(&base, &exclusions))
}

pub fn render(intervals: &[Interval], format: ReduceFormat) -> Result<String, ReduceError> {
    let mut out = String::new();
    match format {
        ReduceFormat::Hex => {
            for interval in intervals {
                writeln!(out, "0x{:06X}..=0x{:06X}", interval.low(), interval.high()).unwrap();
            }
        }
        ReduceFormat::Rust => {
            for interval in intervals {
                writeln!(
                    out,
                    ".chain((0x{:06X}..=0x{:06X}).filter_map(from_u32))",
                    interval.low(),
                    interval.high()
                )
                .unwrap();
            }
        }
        ReduceFormat::Json => {
            out = serde_json::to_string(intervals)?;
            out.push('\n');
        }
    }
    Ok(out)
}
