use super::relation::Relation;

/// Classify `[a, b]` the way the compiler does at a non-accepting node.
fn classify(a: u64, b: u64) -> Relation {
    Relation::classify((a & 0xFF) as u8, a >> 8, (b & 0xFF) as u8, b >> 8)
}

#[test]
fn single_byte() {
    assert_eq!(classify(0x10, 0x20), Relation::SingleByte);
    assert_eq!(classify(0, 0), Relation::SingleByte);
}

#[test]
fn same_high() {
    assert_eq!(classify(0x1210, 0x1220), Relation::SameHigh);
}

#[test]
fn full_span() {
    assert_eq!(classify(0x100, 0x3FF), Relation::FullSpan);
    assert_eq!(classify(0, 0x1FF), Relation::FullSpan);
}

#[test]
fn low_at_start() {
    assert_eq!(classify(0x100, 0x310), Relation::LowAtStart);
}

#[test]
fn high_at_end() {
    assert_eq!(classify(0x110, 0x3FF), Relation::HighAtEnd);
}

#[test]
fn overlapping() {
    assert_eq!(classify(0x110, 0x320), Relation::Overlapping);
    assert_eq!(classify(0x110, 0x310), Relation::Overlapping);
}

#[test]
fn wide_gap() {
    assert_eq!(classify(0x120, 0x310), Relation::WideGap);
}

#[test]
fn narrow_gap() {
    // Adjacent high magnitudes: the middle band would be empty.
    assert_eq!(classify(0x120, 0x210), Relation::NarrowGap);
    // Adjacent low bytes: the middle band would be empty.
    assert_eq!(classify(0x120, 0x31F), Relation::NarrowGap);
}

#[test]
fn names_are_distinct() {
    let all = [
        Relation::SingleByte,
        Relation::SameHigh,
        Relation::FullSpan,
        Relation::LowAtStart,
        Relation::HighAtEnd,
        Relation::Overlapping,
        Relation::WideGap,
        Relation::NarrowGap,
    ];
    let names: std::collections::HashSet<_> = all.iter().map(|r| r.name()).collect();
    assert_eq!(names.len(), all.len());
}
