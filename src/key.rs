//! Key representation for editor input
//!
//! Input arrives as the raw byte stream a terminal in raw mode delivers, so a
//! key is a single byte. Multi-byte characters arrive as several keys.
//!
//! Cursor keys are not passed on as escape sequences. Each one is a single
//! byte from the range UTF-8 never uses (0xF8..=0xFF), so it cannot be
//! mistaken for text or for the start of another binding.

/// A single input byte
pub type Key = u8;

pub const ESCAPE: Key = 0x1b;
pub const ENTER: Key = b'\r';
pub const BACKSPACE: Key = 0x7f;
pub const TAB: Key = b'\t';

pub const UP: Key = 0xf8;
pub const DOWN: Key = 0xf9;
pub const RIGHT: Key = 0xfa;
pub const LEFT: Key = 0xfb;
pub const HOME: Key = 0xfc;
pub const END: Key = 0xfd;

/// Control key combination (e.g., `ctrl(b'a')` is 0x01)
#[must_use]
pub const fn ctrl(key: u8) -> Key {
    key & 0x1f
}

/// Bit that separates upper and lower case ASCII letters
const CASE_BIT: u8 = 0x20;

/// Mask applied to both the incoming byte and the bound key before comparing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMask(u8);

impl KeyMask {
    /// Byte must equal the bound key
    pub const EXACT: KeyMask = KeyMask(0xff);
    /// Case bit is ignored, so one entry matches `z` and `Z`
    pub const FOLD: KeyMask = KeyMask(!CASE_BIT);
    /// Matches every byte; terminates each binding table
    pub const ANY: KeyMask = KeyMask(0x00);

    #[must_use]
    pub const fn matches(self, bound: Key, incoming: Key) -> bool {
        incoming & self.0 == bound & self.0
    }
}

/// Printable name for a key, used in status messages
#[must_use]
pub fn describe(key: Key) -> String {
    match key {
        ESCAPE => "Esc".to_string(),
        ENTER => "Enter".to_string(),
        BACKSPACE => "Backspace".to_string(),
        TAB => "Tab".to_string(),
        UP => "Up".to_string(),
        DOWN => "Down".to_string(),
        RIGHT => "Right".to_string(),
        LEFT => "Left".to_string(),
        HOME => "Home".to_string(),
        END => "End".to_string(),
        0x00..=0x1f => format!("^{}", (key ^ 0x40) as char),
        0x20..=0x7e => (key as char).to_string(),
        _ => format!("\\x{:02X}", key),
    }
}
