//! Command executor
//! Executes buffer-local actions on the focused buffer

use crate::action::{Action, Direction, InsertAt};
use crate::buffer::Buffer;
use crate::key::Key;
use crate::mode::Mode;

/// Execute an action that only touches `buf`.
///
/// `key` is the byte that triggered the action; `InsertChar` stores it.
/// Returns false for actions that need the session or the terminal, which
/// the editor runs itself.
pub fn execute_action(buf: &mut Buffer, action: Action, key: Key) -> bool {
    match action {
        Action::Move(direction) => {
            buf.move_cursor(direction);
        }
        Action::Beginning => buf.move_to_line_start(),
        Action::Ending => buf.move_to_line_end(),
        Action::FirstLine => buf.goto_line(0),
        Action::LastLine => buf.goto_line(usize::MAX),
        Action::EditMode(at) => {
            match at {
                InsertAt::Cursor => {}
                InsertAt::LineStart => buf.move_to_line_start(),
                InsertAt::NextChar => {
                    buf.move_cursor(Direction::Right);
                }
                InsertAt::LineEnd => buf.move_to_line_end(),
            }
            buf.set_mode(Mode::Edit);
        }
        Action::NormalMode => buf.set_mode(Mode::Normal),
        Action::InsertChar => buf.insert_byte(key),
        Action::RemoveChar => {
            buf.delete_byte();
        }
        Action::SplitLine(mode) => buf.split_line(mode),
        Action::DeleteContent(how) => buf.delete_line_content(how),
        Action::DeleteLine(scope) => buf.delete_line(scope),
        Action::ToggleMark => buf.toggle_mark(),
        _ => return false,
    }
    true
}
