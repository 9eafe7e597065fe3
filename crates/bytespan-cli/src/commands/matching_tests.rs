use bytespan_core::{Colors, Encoding};

use super::matching::{MatchArgs, render};

fn args(low: u64, high: u64, values: &[u64], encoding: Encoding) -> MatchArgs {
    MatchArgs {
        low,
        high,
        values: values.to_vec(),
        encoding,
        memoize: true,
        trace: false,
        color: false,
    }
}

#[test]
fn verdict_per_value() {
    let out = render(
        &args(1, 0xDEADBEEF, &[0, 1, 0xDEADBEEF, 0xDEADBEF0], Encoding::Minimal),
        Colors::OFF,
    )
    .unwrap();
    insta::assert_snapshot!(out, @r"
    0x0 no match
    0x1 match
    0xdeadbeef match
    0xdeadbef0 no match
    ");
}

#[test]
fn padded_rejects_wide_values() {
    let out = render(&args(0, 0x100, &[5, 0x10000], Encoding::Padded), Colors::OFF).unwrap();
    insta::assert_snapshot!(out, @r"
    0x5 match
    0x10000 no match
    ");
}

#[test]
fn colored_verdicts() {
    let out = render(&args(0, 0, &[0, 1], Encoding::Minimal), Colors::ON).unwrap();
    assert!(out.contains("\x1b[32mmatch\x1b[0m"));
    assert!(out.contains("\x1b[31mno match\x1b[0m"));
}

#[test]
fn inverted_bounds_fail() {
    assert!(render(&args(5, 4, &[4], Encoding::Minimal), Colors::OFF).is_err());
}
