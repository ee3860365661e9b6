mod scripted_terminal;
mod std_terminal;

pub use scripted_terminal::{Output, ScriptedTerminal, ScriptedTerminalArgs};
pub use std_terminal::{StdTerminal, StdTerminalArgs};
