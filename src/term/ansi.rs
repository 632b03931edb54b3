//! ANSI escape sequences the renderer composes frames from

pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
pub const CLEAR_TO_EOL: &[u8] = b"\x1b[K";
pub const REVERSE_VIDEO: &[u8] = b"\x1b[7m";
pub const RED_FOREGROUND: &[u8] = b"\x1b[31m";
pub const RESET_ATTRIBUTES: &[u8] = b"\x1b[0m";

/// Cursor position sequence for a 0-indexed cell
#[must_use]
pub fn cursor_position(row: usize, col: usize) -> Vec<u8> {
    format!("\x1b[{};{}H", row + 1, col + 1).into_bytes()
}

/// Append a cursor position sequence to `out`
pub fn push_cursor_position(out: &mut Vec<u8>, row: usize, col: usize) {
    out.extend_from_slice(&cursor_position(row, col));
}

/// Clear the screen and home the cursor
pub fn push_clear_screen(out: &mut Vec<u8>) {
    out.extend_from_slice(CLEAR_SCREEN);
    out.extend_from_slice(CURSOR_HOME);
}

/// Wrap `text` in an attribute, resetting afterwards
pub fn push_styled(out: &mut Vec<u8>, style: &[u8], text: &[u8]) {
    out.extend_from_slice(style);
    out.extend_from_slice(text);
    out.extend_from_slice(RESET_ATTRIBUTES);
}
