//! Status line formatting
//! Builds the bottom row of the screen from editor state
//!
//! ## status/ Invariants
//!
//! - Status content is derived entirely from editor state.
//! - Status rendering does not influence editor behavior.
//! - The status line never exceeds `cols - 1` display columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::buffer::Buffer;
use crate::constants::ui::{DIRTY_MARKER, READONLY_MARKER, SUBMODE_SEPARATOR};
use crate::error::BeError;
use crate::mode::{Mode, SubModeStack};
use crate::term::ansi;

/// Text shown in the message area until the next key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: true,
        }
    }
}

impl From<&BeError> for StatusMessage {
    fn from(err: &BeError) -> Self {
        StatusMessage::error(err.message.clone())
    }
}

/// Everything the status line shows
#[derive(Debug, Clone)]
pub struct StatusDrawState<'a> {
    pub mode: Mode,
    pub submodes: &'a SubModeStack,
    pub name: &'a str,
    pub dirty: bool,
    pub readonly: bool,
    /// 0-indexed cursor line
    pub line: usize,
    pub line_count: usize,
    /// 0-indexed rendered cursor column
    pub column: usize,
    pub buffer_index: usize,
    pub buffer_count: usize,
    pub message: Option<&'a StatusMessage>,
    /// Command line being typed, shown instead of everything else
    pub prompt: Option<&'a str>,
    pub show_counts: bool,
    pub cols: usize,
}

impl<'a> StatusDrawState<'a> {
    /// State for the focused buffer; message, prompt and counts start unset
    pub fn for_buffer(buffer: &'a Buffer, buffer_index: usize, buffer_count: usize, cols: usize) -> Self {
        StatusDrawState {
            mode: buffer.mode(),
            submodes: buffer.submodes(),
            name: buffer.name(),
            dirty: buffer.is_dirty(),
            readonly: buffer.is_readonly(),
            line: buffer.y(),
            line_count: buffer.line_count(),
            column: buffer.visual_x(),
            buffer_index,
            buffer_count,
            message: None,
            prompt: None,
            show_counts: false,
            cols,
        }
    }
}

/// Longest prefix of `text` that fits in `max` columns
fn truncate_to_width(text: &str, max: usize) -> &str {
    let mut width = 0;
    for (i, ch) in text.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > max {
            return &text[..i];
        }
    }
    text
}

/// Longest suffix of `text` that fits in `max` columns
fn tail_to_width(text: &str, max: usize) -> &str {
    let mut width = 0;
    for (i, ch) in text.char_indices().rev() {
        width += ch.width().unwrap_or(0);
        if width > max {
            return &text[i + ch.len_utf8()..];
        }
    }
    text
}

/// Status bar renderer
pub struct StatusBar;

impl StatusBar {
    /// Mode name followed by every active submode, outermost first
    #[must_use]
    pub fn format_mode(mode: Mode, submodes: &SubModeStack) -> String {
        let mut out = mode.name().to_string();
        for sub in submodes.iter() {
            out.push_str(SUBMODE_SEPARATOR);
            out.push_str(sub.name());
        }
        out
    }

    /// Mode, buffer name and markers
    #[must_use]
    pub fn format_head(state: &StatusDrawState<'_>) -> String {
        let mut out = Self::format_mode(state.mode, state.submodes);
        out.push(' ');
        out.push_str(state.name);
        if state.dirty {
            out.push(' ');
            out.push_str(DIRTY_MARKER);
        }
        if state.readonly {
            out.push(' ');
            out.push_str(READONLY_MARKER);
        }
        out
    }

    /// `line/lines:column buffer/buffers`, 1-indexed
    #[must_use]
    pub fn format_counts(state: &StatusDrawState<'_>) -> String {
        format!(
            "{}/{}:{} {}/{}",
            state.line + 1,
            state.line_count,
            state.column + 1,
            state.buffer_index,
            state.buffer_count
        )
    }

    /// Bytes of the status row, without positioning
    #[must_use]
    pub fn render(state: &StatusDrawState<'_>) -> Vec<u8> {
        let budget = state.cols.saturating_sub(1);
        let mut out = Vec::with_capacity(state.cols);

        if let Some(prompt) = state.prompt {
            let line = format!(":{prompt}");
            out.extend_from_slice(tail_to_width(&line, budget).as_bytes());
            return out;
        }

        let head = Self::format_head(state);
        let head = truncate_to_width(&head, budget);
        out.extend_from_slice(head.as_bytes());
        let mut used = head.width();

        if let Some(message) = state.message {
            if used + 2 < budget {
                let text = truncate_to_width(&message.text, budget - used - 2);
                out.extend_from_slice(b"  ");
                if message.is_error {
                    ansi::push_styled(&mut out, ansi::RED_FOREGROUND, text.as_bytes());
                } else {
                    out.extend_from_slice(text.as_bytes());
                }
                used += 2 + text.width();
            }
        }

        if state.show_counts {
            let counts = Self::format_counts(state);
            // Dropped entirely rather than cut
            if used + 1 + counts.len() <= budget {
                out.resize(out.len() + budget - used - counts.len(), b' ');
                out.extend_from_slice(counts.as_bytes());
            }
        }
        out
    }
}
