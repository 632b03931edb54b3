//! Editor actions
//! Every key binding resolves to one `Action`; the payload carries the
//! argument the bound operation needs.

use crate::mode::SubMode;

/// Single-step cursor motion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Down,
    Up,
    Right,
}

/// Where edit mode starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    /// At the cursor (`i`)
    Cursor,
    /// At the start of the line (`I`)
    LineStart,
    /// After the character under the cursor (`a`)
    NextChar,
    /// At the end of the line (`A`)
    LineEnd,
}

/// How `split_line` creates the new line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Blank line below the cursor line
    Below,
    /// Blank line above the cursor line
    Above,
    /// Bytes after the cursor move to a new line below
    AtCursor,
}

/// How much of the current line `delete_line_content` keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncate {
    /// Nothing
    Clear,
    /// Everything before the cursor
    ToCursor,
    /// The first `n` bytes
    Length(usize),
}

/// Whether `delete_line` may remove the line itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineScope {
    /// Remove the line unless it is the last one
    Whole,
    /// Only clear the content
    ContentOnly,
}

/// Buffer cycling order in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Next,
    Previous,
}

/// Represents an action in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Cursor
    Move(Direction),
    Beginning,
    Ending,
    FirstLine,
    LastLine,

    // Mode changes
    EditMode(InsertAt),
    NormalMode,
    PushSubMode(SubMode),
    EnterBufferSelect,
    ExitBufferSelect,
    Prompt,

    // Editing
    InsertChar,
    RemoveChar,
    SplitLine(SplitMode),
    DeleteContent(Truncate),
    DeleteLine(LineScope),
    ToggleMark,

    // Session
    CycleBuffer(Cycle),
    Write,
    Close,
    Kill,
    WriteClose,

    /// Report the key as unbound; used by the catch-all bindings
    Unbound,
}
