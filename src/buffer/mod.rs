//! Editable document: lines plus cursor, mode and file metadata
//!
//! ## buffer/ Invariants
//!
//! - A buffer always holds at least one line.
//! - `0 <= y < line_count` and `0 <= x <= lines[y].len()` after every
//!   operation; `x == len` is the append position.
//! - Every mutation of line bytes sets `dirty`.
//! - A successful save clears `dirty`.

pub mod line;
pub mod lines;

pub use self::line::Line;
pub use self::lines::LineStore;

use crate::action::{Direction, LineScope, SplitMode, Truncate};
use crate::constants::errors::{NO_PATH, READ_ONLY};
use crate::constants::ui::ANONYMOUS;
use crate::error::{BeError, ErrorType, Result};
use crate::file_io::FileIo;
use crate::message::{lookup, MessageId};
use crate::mode::{Mode, SubModeStack};
use std::io;
use std::path::{Path, PathBuf};

/// One open document
#[derive(Debug, Clone)]
pub struct Buffer {
    lines: LineStore,
    /// Byte offset of the cursor within the current line
    x: usize,
    /// Index of the current line
    y: usize,
    /// Rendered column of the cursor, refreshed every frame
    visual_x: usize,
    /// Horizontal scroll, in rendered columns
    scroll_offset: usize,
    mode: Mode,
    submodes: SubModeStack,
    path: Option<PathBuf>,
    dirty: bool,
    readonly: bool,
}

impl Buffer {
    /// Create an anonymous buffer with one empty line
    #[must_use]
    pub fn new() -> Self {
        Self::with_lines(LineStore::new(), None)
    }

    /// Create a buffer from raw file contents
    #[must_use]
    pub fn from_bytes(bytes: &[u8], path: Option<PathBuf>) -> Self {
        Self::with_lines(LineStore::from_bytes(bytes), path)
    }

    fn with_lines(lines: LineStore, path: Option<PathBuf>) -> Self {
        Buffer {
            lines,
            x: 0,
            y: 0,
            visual_x: 0,
            scroll_offset: 0,
            mode: Mode::Normal,
            submodes: SubModeStack::new(),
            path,
            dirty: false,
            readonly: false,
        }
    }

    /// Load `path`. A file that does not exist yields an empty buffer bound
    /// to that path.
    pub fn open(path: impl AsRef<Path>, io: &dyn FileIo) -> Result<Self> {
        let path = path.as_ref();
        let mut buffer = match io.read_all(path) {
            Ok(bytes) => Self::from_bytes(&bytes, Some(path.to_path_buf())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("{} does not exist, starting empty", path.display());
                Self::with_lines(LineStore::new(), Some(path.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        };
        buffer.readonly = io.is_read_only(path);
        Ok(buffer)
    }

    /// Write every line followed by `'\n'`.
    ///
    /// `target` overrides the destination. An anonymous buffer saved to a
    /// target takes that path; a named buffer keeps its own path and stays
    /// dirty when written elsewhere.
    pub fn save(&mut self, io: &mut dyn FileIo, target: Option<&Path>) -> Result<()> {
        let own = self.path.clone();
        let path = match (target, &own) {
            (Some(t), _) => t.to_path_buf(),
            (None, Some(p)) => p.clone(),
            (None, None) => {
                return Err(BeError::warning(
                    ErrorType::Execution,
                    NO_PATH,
                    lookup(MessageId::WriteAnonymous),
                ))
            }
        };
        let to_own_path = own.as_deref().map_or(true, |p| p == path.as_path());
        if self.readonly && target.is_none() {
            return Err(BeError::warning(
                ErrorType::Execution,
                READ_ONLY,
                lookup(MessageId::ReadOnly),
            ));
        }

        io.write_all(&path, &self.lines.to_bytes())?;
        log::info!("wrote {} lines to {}", self.lines.len(), path.display());

        if own.is_none() {
            self.path = Some(path);
        }
        if to_own_path {
            if target.is_some() {
                self.readonly = false;
            }
            self.dirty = false;
        }
        Ok(())
    }

    /// Serialized contents, as `save` would write them
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.lines.to_bytes()
    }

    // --- Editing ---

    /// Insert `byte` at the cursor and advance past it
    pub fn insert_byte(&mut self, byte: u8) {
        let x = self.x;
        self.current_line_mut().insert(x, byte);
        self.x += 1;
        self.dirty = true;
    }

    /// Delete the byte before the cursor. No-op at the start of a line.
    pub fn delete_byte(&mut self) -> bool {
        if self.x == 0 {
            return false;
        }
        let at = self.x - 1;
        self.current_line_mut().remove(at);
        self.x = at;
        self.dirty = true;
        true
    }

    /// Open a new line or split the current one, then enter edit mode
    pub fn split_line(&mut self, mode: SplitMode) {
        match mode {
            SplitMode::Below => {
                self.lines.insert(self.y + 1, Line::new());
                self.y += 1;
            }
            SplitMode::Above => {
                self.lines.insert(self.y, Line::new());
            }
            SplitMode::AtCursor => {
                let x = self.x;
                let tail = self.current_line_mut().split_off(x);
                self.lines.insert(self.y + 1, tail);
                self.y += 1;
            }
        }
        self.x = 0;
        self.mode = Mode::Edit;
        self.dirty = true;
    }

    /// Truncate the current line
    pub fn delete_line_content(&mut self, how: Truncate) {
        let keep = match how {
            Truncate::Clear => 0,
            Truncate::ToCursor => self.x,
            Truncate::Length(n) => n,
        };
        let line = self.current_line_mut();
        if keep < line.len() {
            line.truncate(keep);
            self.dirty = true;
        }
        self.clamp_x();
    }

    /// Clear the current line and, for `Whole`, remove it unless it is the
    /// only line left
    pub fn delete_line(&mut self, scope: LineScope) {
        self.delete_line_content(Truncate::Clear);
        if scope == LineScope::Whole && self.lines.remove(self.y).is_some() {
            self.dirty = true;
            self.y = self.y.min(self.lines.len() - 1);
        }
        self.x = 0;
    }

    /// Flip the current line's highlight
    pub fn toggle_mark(&mut self) {
        self.current_line_mut().toggle_mark();
    }

    // --- Cursor ---

    /// Single step; horizontal steps skip over whole UTF-8 sequences.
    /// Returns false when the cursor could not move.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Left => {
                if self.x == 0 {
                    return false;
                }
                self.x -= 1;
                while self.x > 0 && self.current_line().is_continuation(self.x) {
                    self.x -= 1;
                }
            }
            Direction::Right => {
                let len = self.current_line().len();
                if self.x >= len {
                    return false;
                }
                self.x += 1;
                while self.x < len && self.current_line().is_continuation(self.x) {
                    self.x += 1;
                }
            }
            Direction::Up => {
                if self.y == 0 {
                    return false;
                }
                self.y -= 1;
                self.clamp_x();
            }
            Direction::Down => {
                if self.y + 1 >= self.lines.len() {
                    return false;
                }
                self.y += 1;
                self.clamp_x();
            }
        }
        true
    }

    pub fn move_to_line_start(&mut self) {
        self.x = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.x = self.current_line().len();
    }

    /// Jump to line `y` (clamped), keeping `x` within the new line
    pub fn goto_line(&mut self, y: usize) {
        self.y = y.min(self.lines.len() - 1);
        self.clamp_x();
    }

    fn clamp_x(&mut self) {
        self.x = self.x.min(self.current_line().len());
    }

    // --- Accessors ---

    #[must_use]
    pub fn x(&self) -> usize {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> usize {
        self.y
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    #[must_use]
    pub fn current_line(&self) -> &Line {
        match self.lines.get(self.y) {
            Some(line) => line,
            None => unreachable!("cursor line {} out of range", self.y),
        }
    }

    fn current_line_mut(&mut self) -> &mut Line {
        let y = self.y;
        match self.lines.get_mut(y) {
            Some(line) => line,
            None => unreachable!("cursor line {y} out of range"),
        }
    }

    #[must_use]
    pub fn visual_x(&self) -> usize {
        self.visual_x
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Store the renderer's cursor column and horizontal scroll
    pub fn set_view(&mut self, visual_x: usize, scroll_offset: usize) {
        self.visual_x = visual_x;
        self.scroll_offset = scroll_offset;
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::debug!("mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    #[must_use]
    pub fn submodes(&self) -> &SubModeStack {
        &self.submodes
    }

    pub fn submodes_mut(&mut self) -> &mut SubModeStack {
        &mut self.submodes
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.path.is_none()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// File name for display, or the anonymous marker
    #[must_use]
    pub fn name(&self) -> &str {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(ANONYMOUS)
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}
