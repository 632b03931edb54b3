//! Screen compositor
//! Turns the focused window and the status line into one output frame

/// ## render/ Invariants
///
/// - One frame is assembled per iteration and handed to the terminal in a
///   single write.
/// - Rendering never mutates buffer contents; only the cached visual column
///   and scroll are refreshed.
/// - The terminal cursor ends on the focus row at the cursor's scrolled
///   visual column, or after the prompt while a command is typed.
/// - A full redraw is always safe.
use crate::constants::ui::FILLER;
use crate::error::Result;
use crate::session::Session;
use crate::status::{StatusBar, StatusDrawState, StatusMessage};
use crate::term::{ansi, TerminalBackend};
use crate::viewport::{ViewRow, Viewport};
use unicode_width::UnicodeWidthStr;

/// Editor state the frame shows besides the buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    pub message: Option<&'a StatusMessage>,
    pub prompt: Option<&'a str>,
    pub show_counts: bool,
}

/// Build the bytes of one full frame
pub fn compose_frame(session: &mut Session, viewport: &Viewport, ctx: &RenderContext<'_>) -> Vec<u8> {
    let buffer_index = session.current_index();
    let buffer_count = session.real_buffer_count();
    let (buffer, window) = session.focus_mut();
    let rows = viewport.render(buffer, window);

    let mut out = Vec::with_capacity(window.rows * window.cols + 64);
    out.extend_from_slice(ansi::HIDE_CURSOR);
    out.extend_from_slice(ansi::CURSOR_HOME);

    for (row, view) in rows.iter().enumerate() {
        ansi::push_cursor_position(&mut out, window.y + row, window.x);
        match view {
            ViewRow::Text { bytes, marked: true } => {
                ansi::push_styled(&mut out, ansi::REVERSE_VIDEO, bytes);
            }
            ViewRow::Text { bytes, marked: false } => out.extend_from_slice(bytes),
            ViewRow::BeforeStart => {}
            ViewRow::PastEnd => out.extend_from_slice(FILLER),
        }
        out.extend_from_slice(ansi::CLEAR_TO_EOL);
    }

    let status_row = window.y + window.rows;
    let mut status = StatusDrawState::for_buffer(buffer, buffer_index, buffer_count, window.cols);
    status.message = ctx.message;
    status.prompt = ctx.prompt;
    status.show_counts = ctx.show_counts;
    ansi::push_cursor_position(&mut out, status_row, window.x);
    out.extend_from_slice(&StatusBar::render(&status));
    out.extend_from_slice(ansi::CLEAR_TO_EOL);

    match ctx.prompt {
        Some(prompt) => {
            let col = (prompt.width() + 1).min(window.cols.saturating_sub(1));
            ansi::push_cursor_position(&mut out, status_row, window.x + col);
        }
        None => {
            let col = buffer.visual_x() - buffer.scroll_offset();
            ansi::push_cursor_position(&mut out, window.y + window.focus_row(), window.x + col);
        }
    }
    out.extend_from_slice(ansi::SHOW_CURSOR);
    out
}

/// Compose a frame and write it
pub fn render<T: TerminalBackend>(
    term: &mut T,
    session: &mut Session,
    viewport: &Viewport,
    ctx: &RenderContext<'_>,
) -> Result<()> {
    let frame = compose_frame(session, viewport, ctx);
    term.write(&frame)
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
