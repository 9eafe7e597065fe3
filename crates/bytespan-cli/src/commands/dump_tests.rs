use bytespan_core::Encoding;

use super::dump::{DumpArgs, DumpFormat, render};

fn args(low: u64, high: u64, encoding: Encoding, format: DumpFormat) -> DumpArgs {
    DumpArgs {
        low,
        high,
        encoding,
        memoize: false,
        format,
        color: false,
    }
}

#[test]
fn text_dump() {
    let out = render(&args(0, 0x1FF, Encoding::Minimal, DumpFormat::Text)).unwrap();
    insta::assert_snapshot!(out, @r"
    [0x0, 0x1ff] minimal
    root
      00..ff Acc
        01 Acc
    ");
}

#[test]
fn padded_text_dump() {
    let out = render(&args(0, 0x100, Encoding::Padded, DumpFormat::Text)).unwrap();
    insta::assert_snapshot!(out, @r"
    [0x0, 0x100] padded
    root
      00
        00..01 Acc
      01..ff
        00 Acc
    ");
}

#[test]
fn dot_dump() {
    let out = render(&args(0, 0xFF, Encoding::Minimal, DumpFormat::Dot)).unwrap();
    insta::assert_snapshot!(out, @r#"
    digraph automaton {
      node0 [label=""];
      node1 [label="Acc"];
      node0 -> node1 [label="00..ff"];
    }
    "#);
}

#[test]
fn inverted_bounds_fail() {
    let err = render(&args(2, 1, Encoding::Minimal, DumpFormat::Text)).unwrap_err();
    insta::assert_snapshot!(err, @"invalid range: low 0x2 is greater than high 0x1");
}
