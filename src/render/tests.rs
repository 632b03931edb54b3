use super::*;
use crate::buffer::Buffer;
use crate::test_utils::MockTerminal;
use std::path::PathBuf;

fn session_with(text: &str, rows: usize, cols: usize) -> Session {
    let mut session = Session::new(rows, cols);
    session.add_buffer(Buffer::from_bytes(text.as_bytes(), Some(PathBuf::from("t.txt"))));
    session
}

fn frame(session: &mut Session, ctx: &RenderContext<'_>) -> String {
    String::from_utf8_lossy(&compose_frame(session, &Viewport::default(), ctx)).to_string()
}

#[test]
fn test_frame_is_bracketed_by_cursor_visibility() {
    let mut session = session_with("hello", 5, 20);
    let out = frame(&mut session, &RenderContext::default());
    assert!(out.starts_with("\x1b[?25l\x1b[H"));
    assert!(out.ends_with("\x1b[?25h"));
}

#[test]
fn test_rows_and_filler() {
    let mut session = session_with("hello", 5, 20);
    let out = frame(&mut session, &RenderContext::default());
    // focus row 2 holds the cursor line; rows above line 0 stay blank
    assert!(out.contains("\x1b[1;1H\x1b[K"));
    assert!(out.contains("\x1b[2;1H\x1b[K"));
    assert!(out.contains("\x1b[3;1Hhello\x1b[K"));
    assert!(out.contains("\x1b[4;1H~\x1b[K"));
    assert!(out.contains("\x1b[5;1H~\x1b[K"));
}

#[test]
fn test_status_line_follows_text_rows() {
    let mut session = session_with("hello", 5, 40);
    let out = frame(&mut session, &RenderContext::default());
    assert!(out.contains("\x1b[6;1HNormal t.txt\x1b[K"));
}

#[test]
fn test_cursor_is_placed_on_focus_row() {
    let mut session = session_with("hello", 5, 20);
    session.current_mut().move_to_line_end();
    let out = frame(&mut session, &RenderContext::default());
    assert!(out.ends_with("\x1b[3;6H\x1b[?25h"));
}

#[test]
fn test_cursor_accounts_for_scroll() {
    let text = "x".repeat(40);
    let mut session = session_with(&text, 5, 20);
    session.current_mut().move_to_line_end();
    let out = frame(&mut session, &RenderContext::default());
    // visual_x 40, scroll 21: cursor lands on the last usable column
    assert!(out.ends_with("\x1b[3;20H\x1b[?25h"));
    assert_eq!(session.current().scroll_offset(), 21);
}

#[test]
fn test_marked_row_uses_reverse_video() {
    let mut session = session_with("hello", 5, 20);
    session.current_mut().toggle_mark();
    let out = frame(&mut session, &RenderContext::default());
    assert!(out.contains("\x1b[7mhello\x1b[0m"));
}

#[test]
fn test_prompt_moves_cursor_to_status_line() {
    let mut session = session_with("hello", 5, 20);
    let ctx = RenderContext {
        prompt: Some("w"),
        ..RenderContext::default()
    };
    let out = frame(&mut session, &ctx);
    assert!(out.contains("\x1b[6;1H:w\x1b[K"));
    assert!(out.ends_with("\x1b[6;3H\x1b[?25h"));
}

#[test]
fn test_render_writes_once() {
    let mut session = session_with("hello", 5, 20);
    let mut term = MockTerminal::new(6, 20);
    render(&mut term, &mut session, &Viewport::default(), &RenderContext::default()).unwrap();
    assert_eq!(term.writes.len(), 1);
    assert!(term.last_frame().contains("hello"));
}
