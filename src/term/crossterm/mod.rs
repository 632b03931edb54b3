//! Crossterm-based terminal backend
//! Raw mode, geometry and input through crossterm; output is written as-is

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::collections::VecDeque;
use std::io::{stdout, Write};
use std::time::Duration;

use crate::constants::errors::{GEOMETRY, RAW_MODE, READ_FAILED, WRITE_FAILED};
use crate::error::{BeError, ErrorType, Result};
use crate::key::{self, Key};
use crate::term::{ansi, Size, TerminalBackend};

/// Crossterm-based terminal backend implementation
pub struct CrosstermBackend {
    raw_mode_enabled: bool,
    idle_timeout: Duration,
    /// Bytes of already translated events not yet handed out
    pending: VecDeque<Key>,
    resized: Option<Size>,
}

impl CrosstermBackend {
    pub fn new(idle_timeout: Duration) -> Result<Self> {
        Ok(CrosstermBackend {
            raw_mode_enabled: false,
            idle_timeout,
            pending: VecDeque::new(),
            resized: None,
        })
    }

    fn accept(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                self.pending.extend(translate_key_event(key_event));
            }
            Event::Paste(text) => self.pending.extend(text.bytes()),
            Event::Resize(cols, rows) => {
                log::debug!("terminal resized to {cols}x{rows}");
                self.resized = Some(Size { rows, cols });
            }
            // Focus and mouse events
            _ => {}
        }
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<()> {
        terminal::enable_raw_mode().map_err(|e| {
            BeError::critical(
                ErrorType::Terminal,
                RAW_MODE,
                format!("Failed to enable raw mode: {e}"),
            )
        })?;
        self.raw_mode_enabled = true;
        Ok(())
    }

    fn deinit(&mut self) {
        if self.raw_mode_enabled {
            let mut out = Vec::new();
            ansi::push_clear_screen(&mut out);
            out.extend_from_slice(ansi::SHOW_CURSOR);
            let _ = self.write(&out);
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        if let Some(byte) = self.pending.pop_front() {
            return Ok(Some(byte));
        }

        let read_failed = |e: std::io::Error| {
            BeError::critical(
                ErrorType::Terminal,
                READ_FAILED,
                format!("Failed to read event: {e}"),
            )
        };
        if !event::poll(self.idle_timeout).map_err(read_failed)? {
            return Ok(None);
        }
        let event = event::read().map_err(read_failed)?;
        self.accept(event);
        Ok(self.pending.pop_front())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut out = stdout().lock();
        out.write_all(bytes)
            .and_then(|()| out.flush())
            .map_err(|e| {
                BeError::critical(ErrorType::Terminal, WRITE_FAILED, format!("Write failed: {e}"))
            })
    }

    fn get_size(&self) -> Result<Size> {
        let (cols, rows) = terminal::size().map_err(|e| {
            BeError::critical(
                ErrorType::Terminal,
                GEOMETRY,
                format!("Failed to get terminal size: {e}"),
            )
        })?;
        Ok(Size { rows, cols })
    }

    fn take_resize(&mut self) -> Option<Size> {
        self.resized.take()
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        self.deinit();
    }
}

/// Translate a crossterm `KeyEvent` into input keys
///
/// Printable keys become the bytes a raw terminal would send. Cursor keys
/// become the single reserved bytes from `key`. Keys without a binding
/// (function keys, Delete, paging, Alt chords) produce nothing, so the
/// pieces of an escape sequence never reach the binding tables.
pub(crate) fn translate_key_event(key_event: KeyEvent) -> Vec<Key> {
    let modifiers = key_event.modifiers;
    if modifiers.contains(KeyModifiers::ALT) {
        return Vec::new();
    }
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        // Some terminals report Enter as a character
        KeyCode::Char('\r' | '\n') | KeyCode::Enter => vec![key::ENTER],
        KeyCode::Char(ch) if ctrl && ('@'..='~').contains(&ch) => vec![key::ctrl(ch as u8)],
        KeyCode::Char(ch) => {
            let mut buf = [0u8; 4];
            ch.encode_utf8(&mut buf).as_bytes().to_vec()
        }
        KeyCode::Backspace => vec![key::BACKSPACE],
        KeyCode::Esc => vec![key::ESCAPE],
        KeyCode::Tab => vec![key::TAB],
        KeyCode::Up => vec![key::UP],
        KeyCode::Down => vec![key::DOWN],
        KeyCode::Right => vec![key::RIGHT],
        KeyCode::Left => vec![key::LEFT],
        KeyCode::Home => vec![key::HOME],
        KeyCode::End => vec![key::END],
        _ => Vec::new(),
    }
}
