//! Test utilities
//! Shared testing helpers and mocks

use crate::constants::errors::INPUT_EXHAUSTED;
use crate::error::{BeError, ErrorType, Result};
use crate::file_io::FileIo;
use crate::key::Key;
use crate::term::{Size, TerminalBackend};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// One scripted input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scripted {
    Key(Key),
    /// The idle timeout elapses with no input
    Idle,
    /// The terminal changes size
    Resize(u16, u16),
}

/// Mock terminal backend for testing
/// Serves scripted input and records all output for verification
pub struct MockTerminal {
    pub writes: Vec<Vec<u8>>,
    pub size: (u16, u16),
    pub input: VecDeque<Scripted>,
    pub init_calls: usize,
    pub deinit_calls: usize,
    resized: Option<Size>,
}

impl MockTerminal {
    /// Create a new mock terminal with specified dimensions
    pub fn new(rows: u16, cols: u16) -> Self {
        MockTerminal {
            writes: Vec::new(),
            size: (rows, cols),
            input: VecDeque::new(),
            init_calls: 0,
            deinit_calls: 0,
            resized: None,
        }
    }

    /// Queue every byte of `keys` as input
    pub fn with_input(mut self, keys: &[u8]) -> Self {
        self.push_keys(keys);
        self
    }

    pub fn push_keys(&mut self, keys: &[u8]) {
        self.input.extend(keys.iter().map(|&k| Scripted::Key(k)));
    }

    pub fn push(&mut self, event: Scripted) {
        self.input.push_back(event);
    }

    /// Get all written bytes as a single vector
    pub fn get_written_bytes(&self) -> Vec<u8> {
        self.writes.iter().flatten().copied().collect()
    }

    /// Get all written bytes as a string (lossy UTF-8 conversion)
    pub fn get_written_string(&self) -> String {
        String::from_utf8_lossy(&self.get_written_bytes()).to_string()
    }

    /// Last complete write, as a string
    pub fn last_frame(&self) -> String {
        self.writes
            .last()
            .map(|w| String::from_utf8_lossy(w).to_string())
            .unwrap_or_default()
    }

    /// Clear all recorded output (useful for testing multiple renders)
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl TerminalBackend for MockTerminal {
    fn init(&mut self) -> Result<()> {
        self.init_calls += 1;
        Ok(())
    }

    fn deinit(&mut self) {
        self.deinit_calls += 1;
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        match self.input.pop_front() {
            Some(Scripted::Key(key)) => Ok(Some(key)),
            Some(Scripted::Idle) => Ok(None),
            Some(Scripted::Resize(rows, cols)) => {
                self.size = (rows, cols);
                self.resized = Some(Size { rows, cols });
                Ok(None)
            }
            None => Err(BeError::critical(
                ErrorType::Terminal,
                INPUT_EXHAUSTED,
                "scripted input exhausted",
            )),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn get_size(&self) -> Result<Size> {
        Ok(Size {
            rows: self.size.0,
            cols: self.size.1,
        })
    }

    fn take_resize(&mut self) -> Option<Size> {
        self.resized.take()
    }
}

/// In-memory `FileIo`.
///
/// Clones share the same files, so a test can keep a handle after passing
/// one to the editor.
#[derive(Debug, Clone, Default)]
pub struct MemoryIo {
    files: Rc<RefCell<HashMap<PathBuf, Vec<u8>>>>,
    read_only: Rc<RefCell<HashSet<PathBuf>>>,
    failing: Rc<Cell<bool>>,
}

impl MemoryIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl AsRef<Path>, bytes: &[u8]) {
        self.files
            .borrow_mut()
            .insert(path.as_ref().to_path_buf(), bytes.to_vec());
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn set_read_only(&self, path: impl AsRef<Path>) {
        self.read_only
            .borrow_mut()
            .insert(path.as_ref().to_path_buf());
    }

    /// Make every subsequent write fail
    pub fn fail_writes(&self, fail: bool) {
        self.failing.set(fail);
    }
}

impl FileIo for MemoryIo {
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.contents(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write_all(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if self.failing.get() {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.insert(path, bytes);
        Ok(())
    }

    fn is_read_only(&self, path: &Path) -> bool {
        self.read_only.borrow().contains(path)
    }
}
