//! Global constants for the be editor

pub mod ui {
    /// Display text for buffers with no file path
    pub const ANONYMOUS: &str = "[anonymous]";

    /// Status line marker for unsaved changes
    pub const DIRTY_MARKER: &str = "[+]";

    /// Status line marker for read-only buffers
    pub const READONLY_MARKER: &str = "[RO]";

    /// Filler drawn on rows past the end of the buffer
    pub const FILLER: &[u8] = b"~";

    /// Separator between mode and submode names in the status line
    pub const SUBMODE_SEPARATOR: &str = "/";
}

pub mod terminal {
    /// Smallest usable terminal width
    pub const MIN_COLS: u16 = 20;

    /// Smallest usable terminal height
    pub const MIN_ROWS: u16 = 3;

    /// Rows reserved below the text area (status line)
    pub const STATUS_ROWS: u16 = 1;
}

pub mod limits {
    /// Maximum depth of the submode stack
    pub const SUBMODE_DEPTH: usize = 32;
}

pub mod errors {
    // Error Codes
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const UNSAVED_CHANGES: &str = "UNSAVED_CHANGES";
    pub const NO_PATH: &str = "NO_PATH";
    pub const READ_ONLY: &str = "READ_ONLY";
    pub const UNBOUND_KEY: &str = "UNBOUND_KEY";
    pub const UNKNOWN_COMMAND: &str = "UNKNOWN_COMMAND";
    pub const SUBMODE_OVERFLOW: &str = "SUBMODE_OVERFLOW";
    pub const SUBMODE_UNDERFLOW: &str = "SUBMODE_UNDERFLOW";
    pub const SCREEN_TOO_SMALL: &str = "SCREEN_TOO_SMALL";
    pub const RAW_MODE: &str = "RAW_MODE";
    pub const GEOMETRY: &str = "GEOMETRY";
    pub const READ_FAILED: &str = "READ_FAILED";
    pub const WRITE_FAILED: &str = "WRITE_FAILED";
    pub const INPUT_EXHAUSTED: &str = "INPUT_EXHAUSTED";
}

pub mod env {
    /// Overrides the configuration file location
    pub const CONFIG: &str = "BE_CONFIG";

    /// File the logger writes to; logging is off when unset
    pub const LOG: &str = "BE_LOG";
}
