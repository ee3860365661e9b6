mod factory;
mod terminals;

pub use factory::TerminalFactory;
pub use terminals::*;

use crate::GameError;

/// Terminal is the line based I/O collaborator the turn controller talks to.
/// The controller doesn't care whether lines come from a real console or a
/// prepared script.
pub trait Terminal {
    type Args;

    fn new(args: Self::Args) -> Result<Self, GameError>
    where
        Self: Sized;

    /// blocks until a full line is available and returns it without the
    /// line terminator. Fails with `GameError::InputClosed` at end of input.
    fn read_line(&mut self) -> Result<String, GameError>;

    fn write_line(&mut self, text: &str) -> Result<(), GameError>;

    /// writes `text` without a newline, so the answer is typed on the same line.
    fn prompt(&mut self, text: &str) -> Result<(), GameError>;

    fn clear_display(&mut self) -> Result<(), GameError>;
}
