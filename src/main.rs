use std::process::ExitCode;

use log::{error, info};
use tictactoe_console::{StdTerminal, StdTerminalArgs, TerminalFactory, TurnController};

fn main() -> ExitCode {
    env_logger::init();

    let terminal = match TerminalFactory::create::<StdTerminal>(StdTerminalArgs::new()) {
        Ok(terminal) => terminal,
        Err(err) => {
            error!("Failed to open terminal: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut controller = TurnController::new(terminal);
    match controller.run() {
        Ok(()) => {
            info!("Goodbye");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Session aborted: {}", err);
            ExitCode::FAILURE
        }
    }
}
