use super::*;
use crate::action::Direction;

fn viewport() -> Viewport {
    Viewport::new(RenderOptions::default())
}

fn text(row: &ViewRow) -> &[u8] {
    match row {
        ViewRow::Text { bytes, .. } => bytes,
        other => panic!("expected a text row, got {other:?}"),
    }
}

#[test]
fn test_printable_ascii_is_one_column_each() {
    let (row, visual_x) = viewport().render_line(b"hello", Some(3));
    assert_eq!(row.width(), 5);
    assert_eq!(row.as_bytes(), b"hello");
    assert_eq!(visual_x, 3);
}

#[test]
fn test_append_position_maps_to_width() {
    let (_, visual_x) = viewport().render_line(b"abc", Some(3));
    assert_eq!(visual_x, 3);
}

#[test]
fn test_tab_expands_to_fill() {
    let vp = Viewport::new(RenderOptions {
        tab_width: 4,
        tab_fill: b'.',
    });
    let (row, visual_x) = vp.render_line(b"a\tb", Some(2));
    assert_eq!(row.as_bytes(), b"a....b");
    assert_eq!(visual_x, 5);

    let (_, on_tab) = vp.render_line(b"a\tb", Some(1));
    assert_eq!(on_tab, 1);
}

#[test]
fn test_control_bytes_use_caret_notation() {
    let (row, visual_x) = viewport().render_line(b"a\x01b\x7f", Some(2));
    assert_eq!(row.as_bytes(), b"a^Ab^?");
    assert_eq!(visual_x, 3);

    let (_, on_caret) = viewport().render_line(b"a\x01b", Some(1));
    assert_eq!(on_caret, 1);
}

#[test]
fn test_invalid_high_byte_falls_back_to_question_mark() {
    let (row, _) = viewport().render_line(&[0xff, b'x'], None);
    assert_eq!(row.as_bytes(), b"^?x");

    // Truncated sequence
    let (row, _) = viewport().render_line(&[0xe2, 0x82], None);
    assert_eq!(row.width(), 4);
}

#[test]
fn test_multibyte_codepoint_is_one_column() {
    let line = "aé€b".as_bytes();
    let (row, _) = viewport().render_line(line, None);
    assert_eq!(row.width(), 4);
    assert_eq!(row.as_bytes(), line);
    assert_eq!(row.columns(1, 2), "é€".as_bytes());

    // 'b' starts at byte 6
    let (_, visual_x) = viewport().render_line(line, Some(6));
    assert_eq!(visual_x, 3);
}

#[test]
fn test_columns_clip_to_row() {
    let (row, _) = viewport().render_line(b"abcdef", None);
    assert_eq!(row.columns(2, 3), b"cde");
    assert_eq!(row.columns(4, 10), b"ef");
    assert_eq!(row.columns(10, 3), b"");
}

#[test]
fn test_scroll_keeps_cursor_visible() {
    assert_eq!(Viewport::scroll_for(0, 20), 0);
    assert_eq!(Viewport::scroll_for(18, 20), 0);
    assert_eq!(Viewport::scroll_for(19, 20), 0);
    assert_eq!(Viewport::scroll_for(25, 20), 6);

    for visual_x in 0..100 {
        let scroll = Viewport::scroll_for(visual_x, 20);
        assert!(scroll <= visual_x);
        assert!(visual_x <= scroll + 19);
    }
}

#[test]
fn test_cursor_line_sits_on_focus_row() {
    let mut buf = Buffer::from_bytes(b"one\ntwo\nthree\nfour", None);
    buf.move_cursor(Direction::Down);
    buf.move_cursor(Direction::Down);
    let window = Window::new(1, 5, 20);

    let rows = viewport().render(&mut buf, &window);
    assert_eq!(rows.len(), 5);
    assert_eq!(text(&rows[0]), b"one");
    assert_eq!(text(&rows[2]), b"three");
    assert_eq!(text(&rows[3]), b"four");
    assert_eq!(rows[4], ViewRow::PastEnd);
}

#[test]
fn test_rows_outside_the_buffer() {
    let mut buf = Buffer::from_bytes(b"only", None);
    let window = Window::new(1, 5, 20);
    let rows = viewport().render(&mut buf, &window);
    assert_eq!(rows[0], ViewRow::BeforeStart);
    assert_eq!(rows[1], ViewRow::BeforeStart);
    assert_eq!(text(&rows[2]), b"only");
    assert_eq!(rows[3], ViewRow::PastEnd);
    assert_eq!(rows[4], ViewRow::PastEnd);
}

#[test]
fn test_long_line_scrolls_every_row() {
    let long = "x".repeat(30);
    let mut buf = Buffer::from_bytes(format!("0123456789abcdefghijklmnop\n{long}").as_bytes(), None);
    buf.move_cursor(Direction::Down);
    buf.move_to_line_end();
    let window = Window::new(1, 3, 20);

    let rows = viewport().render(&mut buf, &window);
    assert_eq!(buf.visual_x(), 30);
    assert_eq!(buf.scroll_offset(), 11);
    assert_eq!(text(&rows[0]), b"bcdefghijklmnop");
    assert_eq!(text(&rows[1]).len(), 19);
}

#[test]
fn test_rows_are_clipped_to_cols_minus_one() {
    let mut buf = Buffer::from_bytes("a".repeat(50).as_bytes(), None);
    let window = Window::new(1, 3, 20);
    let rows = viewport().render(&mut buf, &window);
    assert_eq!(text(&rows[1]).len(), 19);
    assert_eq!(buf.scroll_offset(), 0);
}

#[test]
fn test_marked_lines_are_flagged() {
    let mut buf = Buffer::from_bytes(b"a\nb", None);
    buf.toggle_mark();
    let window = Window::new(1, 3, 20);
    let rows = viewport().render(&mut buf, &window);
    assert_eq!(
        rows[1],
        ViewRow::Text {
            bytes: b"a".to_vec(),
            marked: true
        }
    );
    assert_eq!(
        rows[2],
        ViewRow::Text {
            bytes: b"b".to_vec(),
            marked: false
        }
    );
}

#[test]
fn test_render_does_not_touch_contents() {
    let mut buf = Buffer::from_bytes(b"a\tb\x01", None);
    let before = buf.to_bytes();
    let window = Window::new(1, 3, 20);
    let _ = viewport().render(&mut buf, &window);
    assert_eq!(buf.to_bytes(), before);
    assert!(!buf.is_dirty());
}
