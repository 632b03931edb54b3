//! Key binding tables
//!
//! ## keymap/ Invariants
//!
//! - Every table ends with a catch-all entry, so every key in every mode
//!   resolves to an action.
//! - Resolution is first match in table order.
//! - Tables are static; nothing rebinds keys at runtime.

pub mod defaults;

use crate::action::Action;
use crate::key::{Key, KeyMask};
use crate::mode::{Mode, SubMode};

/// One `(mask, key, action)` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub mask: KeyMask,
    pub key: Key,
    pub action: Action,
}

impl Binding {
    /// Binding that matches only `key`
    #[must_use]
    pub const fn exact(key: Key, action: Action) -> Self {
        Binding {
            mask: KeyMask::EXACT,
            key,
            action,
        }
    }

    /// Binding that matches `key` in either case
    #[must_use]
    pub const fn folded(key: Key, action: Action) -> Self {
        Binding {
            mask: KeyMask::FOLD,
            key,
            action,
        }
    }

    /// Catch-all binding
    #[must_use]
    pub const fn any(action: Action) -> Self {
        Binding {
            mask: KeyMask::ANY,
            key: 0,
            action,
        }
    }

    #[must_use]
    pub fn matches(&self, key: Key) -> bool {
        self.mask.matches(self.key, key)
    }
}

/// Which table a key is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Mode(Mode),
    SubMode(SubMode),
}

/// Static binding table for a context
#[must_use]
pub fn bindings(context: KeyContext) -> &'static [Binding] {
    match context {
        KeyContext::Mode(Mode::Normal) => defaults::NORMAL,
        KeyContext::Mode(Mode::Edit) => defaults::EDIT,
        KeyContext::Mode(Mode::BufferSelect) => defaults::BUFFER_SELECT,
        KeyContext::SubMode(SubMode::Global) => defaults::GLOBAL,
        KeyContext::SubMode(SubMode::Buffer) => defaults::BUFFER,
    }
}

/// Resolve `key` against a table, first match wins
#[must_use]
pub fn resolve(table: &[Binding], key: Key) -> Action {
    table
        .iter()
        .find(|b| b.matches(key))
        .map_or(Action::Unbound, |b| b.action)
}

/// Resolve `key` in a context
#[must_use]
pub fn lookup(context: KeyContext, key: Key) -> Action {
    resolve(bindings(context), key)
}
