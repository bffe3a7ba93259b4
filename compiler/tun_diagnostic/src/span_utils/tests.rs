use super::*;

#[test]
fn line_lookup() {
    let source = "let a = 1\nlet b = 2\n\nreturn b";
    let table = LineOffsetTable::build(source);

    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(10), 2);
    assert_eq!(table.line_from_offset(20), 3);
    assert_eq!(table.line_from_offset(21), 4);
}

#[test]
fn columns_count_characters() {
    let source = "let é = 1";
    let table = LineOffsetTable::build(source);
    // `=` is at byte 7 but character 7 (é is two bytes).
    assert_eq!(table.offset_to_line_col(source, 7), (1, 7));
}

#[test]
fn line_text_strips_terminators() {
    let source = "let a = 1\r\nreturn a";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("let a = 1"));
    assert_eq!(table.line_text(source, 2), Some("return a"));
    assert_eq!(table.line_text(source, 3), None);
}
