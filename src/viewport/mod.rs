//! Viewport rendering
//! Projects a window onto a buffer and expands each visible line into
//! screen columns
//!
//! ## viewport/ Invariants
//!
//! - The cursor line is always drawn on the window's focus row.
//! - The viewport never mutates buffer contents; it only stores the cursor's
//!   visual column and the horizontal scroll back on the buffer.
//! - After a render, `scroll <= visual_x <= scroll + cols - 1`.
//! - The horizontal scroll is derived from the cursor line only and applied
//!   to every row.

use crate::buffer::{Buffer, Line};
use crate::session::Window;

/// How non-printable bytes are expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Columns a tab occupies
    pub tab_width: usize,
    /// Byte drawn in each tab column
    pub tab_fill: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            tab_width: 8,
            tab_fill: b' ',
        }
    }
}

/// A line expanded into screen columns.
///
/// A column may hold several bytes (one multi-byte codepoint), so the start
/// offset of every column is kept alongside the bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedRow {
    bytes: Vec<u8>,
    starts: Vec<usize>,
}

impl RenderedRow {
    /// Number of screen columns
    #[must_use]
    pub fn width(&self) -> usize {
        self.starts.len()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes of the columns `from..from + width`, clipped to the row
    #[must_use]
    pub fn columns(&self, from: usize, width: usize) -> &[u8] {
        let end = from.saturating_add(width).min(self.width());
        if from >= end {
            return &[];
        }
        let start = self.starts[from];
        let stop = self.starts.get(end).copied().unwrap_or(self.bytes.len());
        &self.bytes[start..stop]
    }

    fn push_column(&mut self, bytes: &[u8]) {
        self.starts.push(self.bytes.len());
        self.bytes.extend_from_slice(bytes);
    }
}

/// One visible row of a window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRow {
    /// Part of a buffer line, already scrolled and clipped
    Text { bytes: Vec<u8>, marked: bool },
    /// Above the first line; drawn blank
    BeforeStart,
    /// Below the last line; drawn as filler
    PastEnd,
}

/// Length of the UTF-8 sequence a lead byte announces
fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0xc0..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf7 => Some(4),
        _ => None,
    }
}

/// Second byte of a caret escape
fn caret_char(byte: u8) -> u8 {
    let c = byte ^ 0x40;
    if (0x20..0x7f).contains(&c) {
        c
    } else {
        b'?'
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    options: RenderOptions,
}

impl Viewport {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Viewport { options }
    }

    /// Expand a line into columns.
    ///
    /// When `cursor` is a byte offset into the line, also returns the column
    /// of the glyph holding it; the append position maps to the row width.
    #[must_use]
    pub fn render_line(&self, line: &[u8], cursor: Option<usize>) -> (RenderedRow, usize) {
        let mut row = RenderedRow::default();
        let mut visual_x = None;
        let mut i = 0;

        while i < line.len() {
            let byte = line[i];
            let glyph_len = match byte {
                0x20..=0x7e => {
                    row.push_column(&line[i..=i]);
                    1
                }
                b'\t' => {
                    let col = row.width();
                    for _ in 0..self.options.tab_width {
                        row.push_column(&[self.options.tab_fill]);
                    }
                    if cursor == Some(i) {
                        visual_x.get_or_insert(col);
                    }
                    i += 1;
                    continue;
                }
                _ => match sequence_len(byte).filter(|&n| {
                    line.get(i + 1..i + n)
                        .is_some_and(|tail| tail.iter().all(|b| b & 0xc0 == 0x80))
                }) {
                    Some(n) => {
                        row.push_column(&line[i..i + n]);
                        n
                    }
                    None => {
                        row.push_column(b"^");
                        row.push_column(&[caret_char(byte)]);
                        1
                    }
                },
            };

            if let Some(x) = cursor {
                if visual_x.is_none() && x < i + glyph_len {
                    // First column of the glyph the cursor sits on
                    let glyph_cols = if glyph_len > 1 || (0x20..=0x7e).contains(&byte) {
                        1
                    } else {
                        2
                    };
                    visual_x = Some(row.width() - glyph_cols);
                }
            }
            i += glyph_len;
        }

        let width = row.width();
        (row, visual_x.unwrap_or(width))
    }

    /// Horizontal scroll that keeps `visual_x` inside `cols - 1` columns
    #[must_use]
    pub fn scroll_for(visual_x: usize, cols: usize) -> usize {
        let limit = cols.saturating_sub(1);
        if visual_x >= limit {
            visual_x - limit
        } else {
            0
        }
    }

    /// Render every row of `window`, storing the cursor's visual column and
    /// the scroll on `buffer`
    pub fn render(&self, buffer: &mut Buffer, window: &Window) -> Vec<ViewRow> {
        let (_, visual_x) = self.render_line(buffer.current_line().as_bytes(), Some(buffer.x()));
        let scroll = Self::scroll_for(visual_x, window.cols);
        buffer.set_view(visual_x, scroll);

        let width = window.cols.saturating_sub(1);
        let focus = window.focus_row();
        (0..window.rows)
            .map(|row| {
                match (row + buffer.y()).checked_sub(focus) {
                    None => ViewRow::BeforeStart,
                    Some(index) => buffer
                        .line(index)
                        .map_or(ViewRow::PastEnd, |line| self.view_row(line, scroll, width)),
                }
            })
            .collect()
    }

    fn view_row(&self, line: &Line, scroll: usize, width: usize) -> ViewRow {
        let (rendered, _) = self.render_line(line.as_bytes(), None);
        ViewRow::Text {
            bytes: rendered.columns(scroll, width).to_vec(),
            marked: line.is_marked(),
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
