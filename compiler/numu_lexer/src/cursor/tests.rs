use super::*;

#[test]
fn current_and_peek_past_end_are_zero() {
    let mut cursor = Cursor::new("ab");
    assert_eq!((cursor.current(), cursor.peek(), cursor.peek2()), (b'a', b'b', 0));
    cursor.advance_n(2);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn tracks_lines_and_columns() {
    let mut cursor = Cursor::new("a\nbc\r\nd\re");
    let mut positions = Vec::new();
    while !cursor.is_eof() {
        positions.push((cursor.current(), cursor.line(), cursor.column()));
        cursor.advance();
    }
    assert_eq!(
        positions,
        vec![
            (b'a', 1, 1),
            (b'\n', 1, 2),
            (b'b', 2, 1),
            (b'c', 2, 2),
            (b'\r', 2, 3),
            (b'\n', 2, 4),
            (b'd', 3, 1),
            (b'\r', 3, 2),
            (b'e', 4, 1),
        ]
    );
}

#[test]
fn multibyte_characters_take_one_column() {
    let mut cursor = Cursor::new("é!");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.column(), 2);
    assert_eq!(cursor.current(), b'!');
}

#[test]
fn slices() {
    let mut cursor = Cursor::new("hello world");
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.slice_from(0), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}
