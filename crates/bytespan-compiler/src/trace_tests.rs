use bytespan_core::Encoding;

use crate::test_utils::trace_plain;

#[test]
fn trace_single_level() {
    insta::assert_snapshot!(trace_plain(0, 0x1FF, Encoding::Minimal, false), @r"
    enter [0x0, 0x1ff]
      case full-span
      00..ff -> [0x0, 0x1]
      enter [0x0, 0x1] Acc
        case single-byte
        01 -> Acc
    ");
}

#[test]
fn trace_reports_memo_hits() {
    insta::assert_snapshot!(trace_plain(1, 0xFFFFFF, Encoding::Minimal, true), @r"
    enter [0x1, 0xffffff]
      case high-at-end
      00 -> [0x1, 0xffff]
      enter [0x1, 0xffff]
        case high-at-end
        00 -> [0x1, 0xff]
        enter [0x1, 0xff]
          case single-byte
          01..ff -> Acc
        01..ff -> [0x0, 0xff]
        enter [0x0, 0xff] Acc
          case single-byte
          01..ff -> Acc
      01..ff -> [0x0, 0xffff]
      enter [0x0, 0xffff] Acc
        case high-at-end
        00 -> [0x1, 0xff]
        reuse [0x1, 0xff]
        01..ff -> [0x0, 0xff]
        reuse [0x0, 0xff]
    ");
}

#[test]
fn trace_padded_zero_chain() {
    insta::assert_snapshot!(trace_plain(0, 0x100, Encoding::Padded, false), @r"
    enter [0x0, 0x100]
      case low-at-start
      00 -> [0x0, 0x1]
      enter [0x0, 0x1]
        case single-byte
        00..01 -> [0x0, 0x0]
        enter [0x0, 0x0] Acc
      01..ff -> [0x0, 0x0]
      enter [0x0, 0x0]
        case single-byte
        00 -> [0x0, 0x0]
        enter [0x0, 0x0] Acc
    ");
}
