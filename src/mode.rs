//! Editor mode definitions
//!
//! A `Mode` is persistent until an action changes it. A `SubMode` is a
//! single-key prefix: it is pushed, exactly one key is read and dispatched
//! with its table, and it is popped again.

use crate::constants::limits::SUBMODE_DEPTH;
use crate::message::{lookup, MessageId};

/// Editor operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Normal mode (command keys)
    Normal,
    /// Edit mode (bytes are inserted)
    Edit,
    /// Buffer selection, entered and left through its own actions
    BufferSelect,
}

impl Mode {
    #[must_use]
    pub fn name(self) -> &'static str {
        lookup(match self {
            Mode::Normal => MessageId::ModeNormal,
            Mode::Edit => MessageId::ModeEdit,
            Mode::BufferSelect => MessageId::ModeBufferSelect,
        })
    }
}

/// Single-key modal prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubMode {
    /// `g` prefix: goto and buffer navigation
    Global,
    /// `Z` prefix: write / close / kill
    Buffer,
}

impl SubMode {
    #[must_use]
    pub fn name(self) -> &'static str {
        lookup(match self {
            SubMode::Global => MessageId::SubModeGlobal,
            SubMode::Buffer => MessageId::SubModeBuffer,
        })
    }
}

/// Bounded stack of active submodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubModeStack {
    entries: Vec<SubMode>,
}

impl SubModeStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(SUBMODE_DEPTH),
        }
    }

    /// Push a submode; returns false when the stack is full
    #[must_use]
    pub fn push(&mut self, sub: SubMode) -> bool {
        if self.entries.len() >= SUBMODE_DEPTH {
            return false;
        }
        self.entries.push(sub);
        true
    }

    /// Pop the innermost submode; `None` on underflow
    pub fn pop(&mut self) -> Option<SubMode> {
        self.entries.pop()
    }

    #[must_use]
    pub fn top(&self) -> Option<SubMode> {
        self.entries.last().copied()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate from the outermost to the innermost submode
    pub fn iter(&self) -> impl Iterator<Item = SubMode> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_balance() {
        let mut stack = SubModeStack::new();
        assert!(stack.push(SubMode::Global));
        assert!(stack.push(SubMode::Buffer));
        assert_eq!(stack.top(), Some(SubMode::Buffer));
        assert_eq!(stack.pop(), Some(SubMode::Buffer));
        assert_eq!(stack.pop(), Some(SubMode::Global));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_past_bound_fails() {
        let mut stack = SubModeStack::new();
        for _ in 0..SUBMODE_DEPTH {
            assert!(stack.push(SubMode::Global));
        }
        assert!(!stack.push(SubMode::Buffer));
        assert_eq!(stack.depth(), SUBMODE_DEPTH);
        assert_eq!(stack.top(), Some(SubMode::Global));
    }

    #[test]
    fn test_names() {
        assert_eq!(Mode::Normal.name(), "Normal");
        assert_eq!(Mode::Edit.name(), "Edit");
        assert_eq!(SubMode::Global.name(), "Global");
    }
}
