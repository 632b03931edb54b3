//! Terminal backend abstraction
//! Provides platform-agnostic interface for terminal operations

/// ## term/ Invariants
///
/// - Terminal handling is isolated behind a strict abstraction boundary.
/// - Raw mode is enabled before input processing begins.
/// - Terminal state is restored on normal exit and on panic.
/// - Input reaches the editor as the byte stream a raw terminal delivers.
/// - Terminal code never depends on editor internals.
use crate::error::Result;
use crate::key::Key;

pub mod ansi;
pub mod crossterm;

/// Terminal size information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// Terminal backend trait
/// All terminal backends must implement these operations
pub trait TerminalBackend {
    /// Enter raw mode
    fn init(&mut self) -> Result<()>;

    /// Restore terminal to original state. Safe to call more than once.
    fn deinit(&mut self);

    /// Read one input byte.
    /// Returns `None` when nothing arrived within the idle timeout.
    fn read_key(&mut self) -> Result<Option<Key>>;

    /// Write bytes to the terminal and flush
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Get terminal dimensions
    fn get_size(&self) -> Result<Size>;

    /// Latest size reported by a resize since the last call
    fn take_resize(&mut self) -> Option<Size>;
}
