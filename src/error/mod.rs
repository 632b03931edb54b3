//! Centralized error handling for be
//! Defines the error type, severity levels and error codes
//!
//! ## error/ Invariants
//!
//! - `Critical` errors are fatal: the editor restores the terminal and exits.
//! - Every other severity is recoverable and is surfaced in the status line.

use std::fmt;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational message (not really an error)
    Info,
    /// Warning - the operation was refused, nothing was lost
    Warning,
    /// Standard error - operation failed but editor can continue
    Error,
    /// Fatal - the process cannot continue correctly
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// File system or I/O errors
    Io,
    /// Raw mode, geometry, terminal input or output
    Terminal,
    /// A command action refused to run
    Execution,
    /// Internal logic or invariant violations
    Internal,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Terminal => write!(f, "Terminal"),
            Self::Execution => write!(f, "Execution"),
            Self::Internal => write!(f, "Internal"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured error in be
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (see `constants::errors`)
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl BeError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new fatal error (Severity: Critical)
    pub fn critical(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning (Severity: Warning)
    pub fn warning(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Warning,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Whether the editor must stop
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.severity == ErrorSeverity::Critical
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for BeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for BeError {}

impl From<std::io::Error> for BeError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, crate::constants::errors::IO_ERROR, err.to_string())
    }
}

/// Result alias for be operations
pub type Result<T> = std::result::Result<T, BeError>;
