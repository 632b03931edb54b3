//! A single line of text as an owned, growable byte run

/// One line of a buffer.
///
/// The bytes are not required to be valid UTF-8; they may hold multi-byte
/// sequences or raw control bytes. The line separator is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
    marked: bool,
}

impl Line {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Line {
            bytes: bytes.into(),
            marked: false,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn toggle_mark(&mut self) {
        self.marked = !self.marked;
    }

    /// Byte at `at`, if any
    #[must_use]
    pub fn byte(&self, at: usize) -> Option<u8> {
        self.bytes.get(at).copied()
    }

    /// Insert `byte` at `at`, shifting the tail right by one.
    /// `at` is clamped to the line length.
    pub fn insert(&mut self, at: usize, byte: u8) {
        let at = at.min(self.bytes.len());
        self.bytes.insert(at, byte);
    }

    /// Remove and return the byte at `at`, shifting the tail left by one
    pub fn remove(&mut self, at: usize) -> Option<u8> {
        if at < self.bytes.len() {
            Some(self.bytes.remove(at))
        } else {
            None
        }
    }

    /// Shorten the line to `len` bytes; longer values are a no-op
    pub fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
    }

    /// Move the bytes from `at` onwards into a new, unmarked line
    pub fn split_off(&mut self, at: usize) -> Line {
        let at = at.min(self.bytes.len());
        Line::from_bytes(self.bytes.split_off(at))
    }

    /// Whether `at` points into the middle of a UTF-8 sequence
    #[must_use]
    pub fn is_continuation(&self, at: usize) -> bool {
        self.byte(at).is_some_and(|b| b & 0xc0 == 0x80)
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Line::from_bytes(s.as_bytes())
    }
}
