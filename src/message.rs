//! User-facing message table
//! Every string shown to the user is looked up by a symbolic id, so the
//! table can be swapped without touching the callers.

/// Symbolic message identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    Usage,
    Welcome,
    ScreenTooSmall,
    Dirty,
    WriteAnonymous,
    ReadOnly,
    Unbound,
    UnknownCommand,
    SubModeOverflow,
    Written,
    ModeNormal,
    ModeEdit,
    ModeBufferSelect,
    SubModeGlobal,
    SubModeBuffer,
}

/// Look up the English text for a message
#[must_use]
pub fn lookup(id: MessageId) -> &'static str {
    match id {
        MessageId::Usage => "usage: be [-hv] [file]",
        MessageId::Welcome => "welcome to be",
        MessageId::ScreenTooSmall => "screen is too small",
        MessageId::Dirty => "buffer has unsaved changes",
        MessageId::WriteAnonymous => "cannot write anonymous buffer without filename",
        MessageId::ReadOnly => "buffer is read-only",
        MessageId::Unbound => "Key is not bound",
        MessageId::UnknownCommand => "unknown command",
        MessageId::SubModeOverflow => "too many nested submodes",
        MessageId::Written => "written",
        MessageId::ModeNormal => "Normal",
        MessageId::ModeEdit => "Edit",
        MessageId::ModeBufferSelect => "Buffer",
        MessageId::SubModeGlobal => "Global",
        MessageId::SubModeBuffer => "Write",
    }
}
