//! Ordered, index-addressable store of lines
//!
//! ## Invariants
//!
//! - The store always holds at least one line.

use super::line::Line;

/// Line separator used for loading and saving
pub const NEWLINE: u8 = b'\n';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<Line>,
}

impl LineStore {
    /// A store with a single empty line
    #[must_use]
    pub fn new() -> Self {
        LineStore {
            lines: vec![Line::new()],
        }
    }

    /// Split raw file contents on `'\n'`.
    ///
    /// A trailing newline terminates the last line instead of opening a new
    /// one, so `b"a\n"` and `b"a"` both load as one line.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let body = bytes.strip_suffix(&[NEWLINE]).unwrap_or(bytes);
        let lines = body
            .split(|&b| b == NEWLINE)
            .map(Line::from_bytes)
            .collect();
        LineStore { lines }
    }

    /// Every line followed by a single `'\n'`
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for line in &self.lines {
            out.extend_from_slice(line.as_bytes());
            out.push(NEWLINE);
        }
        out
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Never true; present for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Line> {
        self.lines.get_mut(index)
    }

    /// Insert `line` at `index`, shifting later lines down.
    /// `index` is clamped to the store length.
    pub fn insert(&mut self, index: usize, line: Line) {
        let index = index.min(self.lines.len());
        self.lines.insert(index, line);
    }

    /// Remove the line at `index`. The last remaining line cannot be removed.
    pub fn remove(&mut self, index: usize) -> Option<Line> {
        if self.lines.len() <= 1 || index >= self.lines.len() {
            return None;
        }
        Some(self.lines.remove(index))
    }
}

impl Default for LineStore {
    fn default() -> Self {
        Self::new()
    }
}
