use std::io::{BufRead, Stdout, StdinLock, Write};

use log::{debug, warn};

use crate::{GameError, Terminal};

/// Console terminal. Reads from stdin and writes to stdout unless other
/// streams are handed in through `StdTerminalArgs::with_streams`.
pub struct StdTerminal<R = StdinLock<'static>, W = Stdout> {
    clear_screen: bool,

    reader: R,
    writer: W,
}

pub struct StdTerminalArgs<R = StdinLock<'static>, W = Stdout> {
    /// emit the ANSI clear sequence on `clear_display`
    pub clear_screen: bool,

    pub reader: R,
    pub writer: W,
}

impl Default for StdTerminalArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl StdTerminalArgs {
    pub fn new() -> Self {
        Self::with_streams(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R, W> StdTerminalArgs<R, W> {
    const DEFAULT_CLEAR_SCREEN: bool = true;

    pub fn with_streams(reader: R, writer: W) -> Self {
        Self {
            clear_screen: Self::DEFAULT_CLEAR_SCREEN,
            reader,
            writer,
        }
    }
}

impl<R, W> StdTerminal<R, W> {
    const CLEAR_SEQUENCE: &'static str = "\x1B[2J\x1B[1;1H";

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> Terminal for StdTerminal<R, W> {
    type Args = StdTerminalArgs<R, W>;

    fn new(args: Self::Args) -> Result<Self, GameError> {
        debug!("Opening console terminal (clear_screen: {})", args.clear_screen);
        Ok(Self {
            clear_screen: args.clear_screen,
            reader: args.reader,
            writer: args.writer,
        })
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        let mut buffer = Vec::new();
        if self.reader.read_until(b'\n', &mut buffer)? == 0 {
            return Err(GameError::InputClosed);
        }
        // undecodable bytes become U+FFFD and the line is rejected as input
        if std::str::from_utf8(&buffer).is_err() {
            warn!("input line is not valid UTF-8");
        }
        let line = String::from_utf8_lossy(&buffer);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), GameError> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    fn clear_display(&mut self) -> Result<(), GameError> {
        if self.clear_screen {
            write!(self.writer, "{}", Self::CLEAR_SEQUENCE)?;
            self.writer.flush()?;
        }
        Ok(())
    }
}
