//! Editor core
//! Main loop, key dispatch and the actions that reach past one buffer
//!
//! ## editor/ Invariants
//!
//! - Exactly one frame is drawn before every blocking key read.
//! - Every submode push is matched by one pop before control returns to the
//!   dispatch that pushed it.
//! - Modal state that belongs to the focus (submode stack, buffer select)
//!   follows the focus when the focused buffer changes.
//! - Recoverable errors become status messages; fatal errors end the loop
//!   and the terminal is restored on every exit path.

use std::path::{Path, PathBuf};

use crate::action::{Action, Cycle};
use crate::buffer::Buffer;
use crate::command_line::{self, ParsedCommand};
use crate::config::Config;
use crate::constants::errors::{
    SCREEN_TOO_SMALL, SUBMODE_OVERFLOW, SUBMODE_UNDERFLOW, UNBOUND_KEY, UNKNOWN_COMMAND,
};
use crate::constants::terminal::{MIN_COLS, MIN_ROWS, STATUS_ROWS};
use crate::error::{BeError, ErrorType, Result};
use crate::executor::execute_action;
use crate::file_io::FileIo;
use crate::key::{self, Key};
use crate::keymap::{self, KeyContext};
use crate::message::{lookup, MessageId};
use crate::mode::{Mode, SubMode};
use crate::render::{self, RenderContext};
use crate::session::{Removal, Session};
use crate::status::StatusMessage;
use crate::term::{Size, TerminalBackend};
use crate::viewport::Viewport;

/// Text area for a terminal size, clamped to the minimum geometry
fn text_area(size: Size) -> (usize, usize) {
    let rows = size.rows.max(MIN_ROWS) - STATUS_ROWS;
    let cols = size.cols.max(MIN_COLS);
    (usize::from(rows), usize::from(cols))
}

/// Main editor struct
pub struct Editor<T: TerminalBackend> {
    /// Terminal backend
    pub term: T,
    session: Session,
    io: Box<dyn FileIo>,
    viewport: Viewport,
    config: Config,
    message: Option<StatusMessage>,
    /// Bytes typed at the `:` prompt while it is open
    prompt: Option<Vec<u8>>,
}

impl<T: TerminalBackend> Editor<T> {
    /// Create an editor with no buffers.
    ///
    /// Fails with a fatal error when the terminal is smaller than the
    /// minimum geometry.
    pub fn new(term: T, io: Box<dyn FileIo>, config: Config) -> Result<Self> {
        let size = term.get_size()?;
        if size.rows < MIN_ROWS || size.cols < MIN_COLS {
            return Err(BeError::critical(
                ErrorType::Terminal,
                SCREEN_TOO_SMALL,
                format!(
                    "{} ({}x{}, need {}x{})",
                    lookup(MessageId::ScreenTooSmall),
                    size.cols,
                    size.rows,
                    MIN_COLS,
                    MIN_ROWS
                ),
            ));
        }

        let (rows, cols) = text_area(size);
        Ok(Editor {
            term,
            session: Session::new(rows, cols),
            io,
            viewport: Viewport::new(config.render_options()),
            config,
            message: Some(StatusMessage::info(lookup(MessageId::Welcome))),
            prompt: None,
        })
    }

    /// Open `path` in a new buffer, or an anonymous buffer without one
    pub fn open(&mut self, path: Option<&Path>) -> Result<()> {
        let buffer = match path {
            Some(path) => Buffer::open(path, self.io.as_ref())?,
            None => Buffer::new(),
        };
        self.session.add_buffer(buffer);
        Ok(())
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// Run until the last buffer is gone or a fatal error occurs
    pub fn run(&mut self) -> Result<()> {
        self.term.init()?;
        let result = self.event_loop();
        if let Err(e) = &result {
            log::error!("{e}");
        }
        self.term.deinit();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.session.is_finished() {
            self.read_and_dispatch()?;
        }
        log::info!("last buffer closed");
        Ok(())
    }

    /// Draw a frame, then read and dispatch one key
    fn read_and_dispatch(&mut self) -> Result<()> {
        self.render()?;
        let key = self.next_key()?;
        self.handle_key(key)
    }

    fn render(&mut self) -> Result<()> {
        let prompt = self
            .prompt
            .as_ref()
            .map(|p| String::from_utf8_lossy(p).into_owned());
        let ctx = RenderContext {
            message: self.message.as_ref(),
            prompt: prompt.as_deref(),
            show_counts: self.config.status_line.show_counts,
        };
        render::render(&mut self.term, &mut self.session, &self.viewport, &ctx)
    }

    /// Block until a key arrives; idle timeouts only redraw after a resize
    fn next_key(&mut self) -> Result<Key> {
        loop {
            if let Some(key) = self.term.read_key()? {
                self.message = None;
                return Ok(key);
            }
            if let Some(size) = self.term.take_resize() {
                let (rows, cols) = text_area(size);
                log::debug!("text area now {rows}x{cols}");
                self.session.resize(rows, cols);
                self.render()?;
            }
        }
    }

    /// Table a key is resolved against for the focused buffer
    fn key_context(&self) -> KeyContext {
        let buffer = self.session.current();
        // Buffer select is entered from inside a prefix and outlives it
        if buffer.mode() == Mode::BufferSelect {
            return KeyContext::Mode(Mode::BufferSelect);
        }
        match buffer.submodes().top() {
            Some(sub) => KeyContext::SubMode(sub),
            None => KeyContext::Mode(buffer.mode()),
        }
    }

    pub(crate) fn handle_key(&mut self, key: Key) -> Result<()> {
        let action = keymap::lookup(self.key_context(), key);
        self.dispatch(action, key)
    }

    fn dispatch(&mut self, action: Action, key: Key) -> Result<()> {
        if execute_action(self.session.current_mut(), action, key) {
            return Ok(());
        }

        let result = match action {
            Action::PushSubMode(sub) => self.run_submode(sub),
            Action::EnterBufferSelect => self.run_buffer_select(),
            Action::ExitBufferSelect => {
                self.session.current_mut().set_mode(Mode::Normal);
                Ok(())
            }
            Action::Prompt => self.run_prompt(),
            Action::CycleBuffer(direction) => {
                self.cycle(direction);
                Ok(())
            }
            Action::Write => self.write(None),
            Action::Close => self.remove(Removal::Close),
            Action::Kill => self.remove(Removal::Kill),
            Action::WriteClose => self.write_close(None),
            Action::Unbound => Err(BeError::warning(
                ErrorType::Execution,
                UNBOUND_KEY,
                format!("{}: {}", lookup(MessageId::Unbound), key::describe(key)),
            )),
            other => {
                log::debug!("{other:?} has no effect here");
                Ok(())
            }
        };
        self.recover(result)
    }

    /// Turn a recoverable error into a status message
    fn recover(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Err(e) if !e.is_fatal() => {
                log::warn!("{e}");
                self.message = Some(StatusMessage::from(&e));
                Ok(())
            }
            other => other,
        }
    }

    /// Push `sub`, dispatch exactly one key with its table, pop
    fn run_submode(&mut self, sub: SubMode) -> Result<()> {
        if !self.session.current_mut().submodes_mut().push(sub) {
            return Err(BeError::warning(
                ErrorType::Execution,
                SUBMODE_OVERFLOW,
                lookup(MessageId::SubModeOverflow),
            ));
        }
        log::debug!("push submode {}", sub.name());

        let result = self.read_and_dispatch();

        if self.session.current_mut().submodes_mut().pop().is_none() && !self.session.is_finished() {
            log::warn!("{SUBMODE_UNDERFLOW}: {} already popped", sub.name());
        }
        result
    }

    /// Stay in buffer select until one of its own bindings leaves it
    fn run_buffer_select(&mut self) -> Result<()> {
        self.session.current_mut().set_mode(Mode::BufferSelect);
        while !self.session.is_finished() && self.session.current().mode() == Mode::BufferSelect {
            self.read_and_dispatch()?;
        }
        Ok(())
    }

    /// Change the focused buffer, carrying focus-bound modal state along
    fn switch_focus<F, R>(&mut self, change: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let from = self.session.current_mut();
        let submodes = std::mem::take(from.submodes_mut());
        let selecting = from.mode() == Mode::BufferSelect;
        if selecting {
            from.set_mode(Mode::Normal);
        }

        let result = change(&mut self.session);

        let to = self.session.current_mut();
        *to.submodes_mut() = submodes;
        if selecting {
            to.set_mode(Mode::BufferSelect);
        }
        result
    }

    fn cycle(&mut self, direction: Cycle) {
        self.switch_focus(|session| {
            if let Some(index) = session.cycle(direction) {
                log::debug!("focus buffer {index}");
            }
        });
    }

    fn remove(&mut self, how: Removal) -> Result<()> {
        let index = self.session.current_index();
        self.switch_focus(|session| session.remove_buffer(index, how))
    }

    /// Save the focused buffer, optionally to a new path
    fn write(&mut self, target: Option<PathBuf>) -> Result<()> {
        self.session
            .current_mut()
            .save(self.io.as_mut(), target.as_deref())?;
        let buffer = self.session.current();
        let name = target
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(|| buffer.name().to_string(), |n| n.to_string_lossy().into_owned());
        self.message = Some(StatusMessage::info(format!(
            "{}: {} lines {}",
            name,
            buffer.line_count(),
            lookup(MessageId::Written)
        )));
        Ok(())
    }

    /// Write, and close only when the write succeeded
    fn write_close(&mut self, target: Option<PathBuf>) -> Result<()> {
        self.write(target)?;
        self.remove(Removal::Close)
    }

    /// Read a command line at the prompt and run it
    fn run_prompt(&mut self) -> Result<()> {
        self.prompt = Some(Vec::new());
        loop {
            self.render()?;
            let key = match self.next_key() {
                Ok(key) => key,
                Err(e) => {
                    self.prompt = None;
                    return Err(e);
                }
            };
            let Some(line) = self.prompt.as_mut() else {
                return Ok(());
            };
            match key {
                key::ENTER => break,
                key::ESCAPE => {
                    self.prompt = None;
                    return Ok(());
                }
                key::BACKSPACE => {
                    // Drop a whole codepoint
                    while line.pop().is_some_and(|b| b & 0xc0 == 0x80) {}
                }
                b if b >= 0x20 && b != 0x7f => line.push(b),
                _ => {}
            }
        }

        let line = self.prompt.take().unwrap_or_default();
        let text = String::from_utf8_lossy(&line);
        log::debug!("command {text:?}");
        match command_line::parse(&text) {
            ParsedCommand::Run {
                action: Action::Write,
                path,
            } => self.write(path),
            ParsedCommand::Run {
                action: Action::WriteClose,
                path,
            } => self.write_close(path),
            ParsedCommand::Run { action, .. } => self.dispatch(action, 0),
            ParsedCommand::Empty => Ok(()),
            ParsedCommand::Unknown { name } => Err(BeError::warning(
                ErrorType::Execution,
                UNKNOWN_COMMAND,
                format!("{}: {name}", lookup(MessageId::UnknownCommand)),
            )),
            ParsedCommand::Ambiguous { prefix, matches } => Err(BeError::warning(
                ErrorType::Execution,
                UNKNOWN_COMMAND,
                format!("{prefix}: {}", matches.join(", ")),
            )),
            ParsedCommand::UnexpectedArgument { name } => Err(BeError::warning(
                ErrorType::Execution,
                UNKNOWN_COMMAND,
                format!("{name} takes no argument"),
            )),
        }
    }
}

impl<T: TerminalBackend> Drop for Editor<T> {
    fn drop(&mut self) {
        self.term.deinit();
    }
}
