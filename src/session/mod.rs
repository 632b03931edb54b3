//! Open buffers and the windows that show them
//!
//! ## session/ Invariants
//!
//! - Buffer 0 is a permanent sentinel; it is never removed, so the buffer
//!   list is never empty.
//! - Every window is bound to a valid buffer index.
//! - Once no real buffer remains, the session is finished.

pub mod window;

pub use self::window::Window;

use crate::action::Cycle;
use crate::buffer::Buffer;
use crate::constants::errors::{INTERNAL_ERROR, UNSAVED_CHANGES};
use crate::error::{BeError, ErrorType, Result};
use crate::message::{lookup, MessageId};

/// Index of the sentinel buffer
pub const SENTINEL: usize = 0;

/// How a buffer leaves the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Refuse if the buffer has unsaved changes
    Close,
    /// Remove regardless of unsaved changes
    Kill,
}

pub struct Session {
    buffers: Vec<Buffer>,
    windows: Vec<Window>,
    focused: usize,
}

impl Session {
    /// A session holding only the sentinel, shown in one window
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Session {
            buffers: vec![Buffer::new()],
            windows: vec![Window::new(SENTINEL, rows, cols)],
            focused: 0,
        }
    }

    /// Append a buffer and show it in the focused window
    pub fn add_buffer(&mut self, buffer: Buffer) -> usize {
        log::info!("opened buffer {}", buffer.name());
        self.buffers.push(buffer);
        let index = self.buffers.len() - 1;
        self.focused_window_mut().buffer = index;
        index
    }

    /// Buffers excluding the sentinel
    #[must_use]
    pub fn real_buffer_count(&self) -> usize {
        self.buffers.len() - 1
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.real_buffer_count() == 0
    }

    #[must_use]
    pub fn buffer(&self, index: usize) -> Option<&Buffer> {
        self.buffers.get(index)
    }

    #[must_use]
    pub fn focused_window(&self) -> &Window {
        &self.windows[self.focused]
    }

    pub fn focused_window_mut(&mut self) -> &mut Window {
        &mut self.windows[self.focused]
    }

    /// Index of the buffer shown in the focused window
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.focused_window().buffer
    }

    #[must_use]
    pub fn current(&self) -> &Buffer {
        &self.buffers[self.current_index()]
    }

    pub fn current_mut(&mut self) -> &mut Buffer {
        let index = self.current_index();
        &mut self.buffers[index]
    }

    /// Buffer and window of the focus, for rendering
    pub fn focus_mut(&mut self) -> (&mut Buffer, &Window) {
        let window = &self.windows[self.focused];
        (&mut self.buffers[window.buffer], window)
    }

    /// Show the next or previous real buffer in the focused window.
    /// Returns the new index, or `None` when there is nothing to cycle to.
    pub fn cycle(&mut self, direction: Cycle) -> Option<usize> {
        let count = self.real_buffer_count();
        if count == 0 {
            return None;
        }
        // Real buffers occupy 1..=count; the sentinel maps to position 0
        let position = self.current_index().saturating_sub(1);
        let next = match direction {
            Cycle::Next => (position + 1) % count,
            Cycle::Previous => (position + count - 1) % count,
        };
        let index = next + 1;
        self.focused_window_mut().buffer = index;
        Some(index)
    }

    /// Remove a buffer, shifting later buffers down by one.
    ///
    /// Windows showing the removed buffer move to its neighbour.
    pub fn remove_buffer(&mut self, index: usize, how: Removal) -> Result<()> {
        if index == SENTINEL || index >= self.buffers.len() {
            return Err(BeError::new(
                ErrorType::Internal,
                INTERNAL_ERROR,
                format!("buffer {index} cannot be removed"),
            ));
        }
        if how == Removal::Close && self.buffers[index].is_dirty() {
            return Err(BeError::warning(
                ErrorType::Execution,
                UNSAVED_CHANGES,
                lookup(MessageId::Dirty),
            ));
        }

        let removed = self.buffers.remove(index);
        log::info!("{:?} buffer {}", how, removed.name());

        let last = self.buffers.len() - 1;
        for window in &mut self.windows {
            if window.buffer > index {
                window.buffer -= 1;
            } else if window.buffer == index {
                window.buffer = index.min(last);
                if window.buffer == SENTINEL && last > SENTINEL {
                    window.buffer = 1;
                }
            }
        }
        Ok(())
    }

    /// Apply new terminal geometry to every window
    pub fn resize(&mut self, rows: usize, cols: usize) {
        for window in &mut self.windows {
            window.set_size(rows, cols);
        }
    }
}
