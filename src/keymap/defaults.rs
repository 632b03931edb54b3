//! Default key bindings

use super::Binding;
use crate::action::{
    Action, Cycle, Direction, InsertAt, LineScope, SplitMode, Truncate,
};
use crate::key::{BACKSPACE, DOWN, END, ENTER, ESCAPE, HOME, LEFT, RIGHT, UP};
use crate::mode::SubMode;

const UNBOUND: Binding = Binding::any(Action::Unbound);

pub static NORMAL: &[Binding] = &[
    // movement
    Binding::exact(b'h', Action::Move(Direction::Left)),
    Binding::exact(b'j', Action::Move(Direction::Down)),
    Binding::exact(b'k', Action::Move(Direction::Up)),
    Binding::exact(b'l', Action::Move(Direction::Right)),
    Binding::exact(b'0', Action::Beginning),
    Binding::exact(b'^', Action::Beginning),
    Binding::exact(b'$', Action::Ending),
    Binding::exact(b'G', Action::LastLine),
    Binding::exact(LEFT, Action::Move(Direction::Left)),
    Binding::exact(DOWN, Action::Move(Direction::Down)),
    Binding::exact(UP, Action::Move(Direction::Up)),
    Binding::exact(RIGHT, Action::Move(Direction::Right)),
    Binding::exact(HOME, Action::Beginning),
    Binding::exact(END, Action::Ending),
    // edit mode
    Binding::exact(b'i', Action::EditMode(InsertAt::Cursor)),
    Binding::exact(b'I', Action::EditMode(InsertAt::LineStart)),
    Binding::exact(b'a', Action::EditMode(InsertAt::NextChar)),
    Binding::exact(b'A', Action::EditMode(InsertAt::LineEnd)),
    // lines
    Binding::exact(b'o', Action::SplitLine(SplitMode::Below)),
    Binding::exact(b'O', Action::SplitLine(SplitMode::Above)),
    Binding::exact(ENTER, Action::SplitLine(SplitMode::AtCursor)),
    Binding::exact(b'D', Action::DeleteContent(Truncate::ToCursor)),
    Binding::exact(b'X', Action::DeleteLine(LineScope::Whole)),
    Binding::exact(b'm', Action::ToggleMark),
    // prefixes
    Binding::exact(b'g', Action::PushSubMode(SubMode::Global)),
    Binding::exact(b'Z', Action::PushSubMode(SubMode::Buffer)),
    Binding::exact(b':', Action::Prompt),
    UNBOUND,
];

pub static EDIT: &[Binding] = &[
    Binding::exact(ESCAPE, Action::NormalMode),
    Binding::exact(ENTER, Action::SplitLine(SplitMode::AtCursor)),
    Binding::exact(BACKSPACE, Action::RemoveChar),
    Binding::exact(LEFT, Action::Move(Direction::Left)),
    Binding::exact(DOWN, Action::Move(Direction::Down)),
    Binding::exact(UP, Action::Move(Direction::Up)),
    Binding::exact(RIGHT, Action::Move(Direction::Right)),
    Binding::exact(HOME, Action::Beginning),
    Binding::exact(END, Action::Ending),
    Binding::any(Action::InsertChar),
];

pub static BUFFER_SELECT: &[Binding] = &[
    Binding::exact(b'j', Action::CycleBuffer(Cycle::Next)),
    Binding::exact(b'l', Action::CycleBuffer(Cycle::Next)),
    Binding::exact(b'k', Action::CycleBuffer(Cycle::Previous)),
    Binding::exact(b'h', Action::CycleBuffer(Cycle::Previous)),
    Binding::exact(DOWN, Action::CycleBuffer(Cycle::Next)),
    Binding::exact(RIGHT, Action::CycleBuffer(Cycle::Next)),
    Binding::exact(UP, Action::CycleBuffer(Cycle::Previous)),
    Binding::exact(LEFT, Action::CycleBuffer(Cycle::Previous)),
    Binding::exact(ENTER, Action::ExitBufferSelect),
    Binding::exact(ESCAPE, Action::ExitBufferSelect),
    Binding::folded(b'q', Action::ExitBufferSelect),
    UNBOUND,
];

pub static GLOBAL: &[Binding] = &[
    Binding::exact(b'g', Action::FirstLine),
    Binding::exact(b'e', Action::LastLine),
    Binding::exact(b'b', Action::EnterBufferSelect),
    Binding::exact(b'n', Action::CycleBuffer(Cycle::Next)),
    Binding::exact(b'p', Action::CycleBuffer(Cycle::Previous)),
    Binding::exact(b'd', Action::DeleteLine(LineScope::ContentOnly)),
    Binding::exact(b'z', Action::PushSubMode(SubMode::Buffer)),
    UNBOUND,
];

pub static BUFFER: &[Binding] = &[
    Binding::folded(b'z', Action::WriteClose),
    Binding::folded(b'w', Action::Write),
    Binding::folded(b'c', Action::Close),
    Binding::folded(b'q', Action::Kill),
    UNBOUND,
];
