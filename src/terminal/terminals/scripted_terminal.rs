use std::collections::VecDeque;

use crate::{GameError, Terminal};

#[derive(Clone, Default)]
pub struct ScriptedTerminalArgs {
    pub input: Vec<String>,
}

impl ScriptedTerminalArgs {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything written to a `ScriptedTerminal`, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Line(String),
    Prompt(String),
    Clear,
}

/// In-memory terminal that answers reads from a fixed script and records
/// what was written.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTerminal {
    pub input: VecDeque<String>,
    pub output: Vec<Output>,
}

impl ScriptedTerminal {
    pub fn lines(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter_map(|output| match output {
                Output::Line(line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn prompts(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter_map(|output| match output {
                Output::Prompt(prompt) => Some(prompt.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Terminal for ScriptedTerminal {
    type Args = ScriptedTerminalArgs;

    fn new(args: Self::Args) -> Result<Self, GameError> {
        Ok(Self {
            input: args.input.into(),
            output: Vec::new(),
        })
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        self.input.pop_front().ok_or(GameError::InputClosed)
    }

    fn write_line(&mut self, text: &str) -> Result<(), GameError> {
        self.output.push(Output::Line(text.to_string()));
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), GameError> {
        self.output.push(Output::Prompt(text.to_string()));
        Ok(())
    }

    fn clear_display(&mut self) -> Result<(), GameError> {
        self.output.push(Output::Clear);
        Ok(())
    }
}
