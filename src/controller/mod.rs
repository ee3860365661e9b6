//! The turn controller drives a session: it asks the current player for a
//! move, applies it, evaluates the board and handles the rematch prompt.

use log::{debug, info, warn};

use crate::{
    evaluate, help_lines, parse_command, parse_rematch, winner, Board, Command, GameData,
    GameError, InvalidMove, Move, Player, RematchAnswer, Terminal, Verdict,
};

const WELCOME: &str = "Welcome to Tic-Tac-Toe";
const GAME_OVER: &str = "Game Over";
const PLAY_AGAIN: &str = "Play Again? Y/n ";
const GAME_TIED: &str = "Game Tied";
const POSITION_FILLED: &str = "That position is already filled. Please Try Again.";
const POSITION_OFF_BOARD: &str = "That position is not on the board. Please Try Again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingMove(Player),
    Evaluating(Move),
    GameOver(Verdict),
    AwaitingRematch,
    Quit,
}

pub struct TurnController<T: Terminal> {
    terminal: T,
    board: Board,
    state: TurnState,
    game_data: GameData,
    started: bool,
}

impl<T: Terminal> TurnController<T> {
    pub fn new(terminal: T) -> Self {
        Self {
            terminal,
            board: Board::new(),
            state: TurnState::AwaitingMove(Player::One),
            game_data: GameData::new(),
            started: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Plays until a player quits or declines a rematch.
    pub fn run(&mut self) -> Result<(), GameError> {
        while self.state != TurnState::Quit {
            self.step()?;
        }
        Ok(())
    }

    /// Performs a single transition and returns the new state. The first call
    /// also prints the welcome banner and the empty board.
    pub fn step(&mut self) -> Result<TurnState, GameError> {
        if !self.started {
            self.started = true;
            self.start_game()?;
        }

        let next_state = match self.state {
            TurnState::AwaitingMove(player) => self.await_move(player)?,
            TurnState::Evaluating(last_move) => self.evaluate_move(last_move),
            TurnState::GameOver(verdict) => self.announce(verdict)?,
            TurnState::AwaitingRematch => self.await_rematch()?,
            TurnState::Quit => TurnState::Quit,
        };

        if next_state != self.state {
            debug!("{:?} -> {:?}", self.state, next_state);
        }
        self.state = next_state;
        Ok(next_state)
    }

    fn start_game(&mut self) -> Result<(), GameError> {
        info!("Starting game {}", self.game_data.game_id);
        self.terminal.clear_display()?;
        self.terminal.write_line(WELCOME)?;
        self.write_board()
    }

    fn await_move(&mut self, player: Player) -> Result<TurnState, GameError> {
        self.terminal.prompt(&format!("Your turn player {} ", player))?;
        let input = self.terminal.read_line()?;
        let command = parse_command(&input, None);
        debug!("player {} entered {:?} -> {:?}", player, input, command);

        match command {
            Command::Quit => self.end_session(),
            Command::Help | Command::Invalid => {
                self.write_help()?;
                Ok(TurnState::AwaitingMove(player))
            }
            Command::Place(coordinates) => {
                let new_move = Move::new(coordinates, player);
                match self.board.apply(&new_move) {
                    Ok(()) => {
                        self.game_data.add_move(new_move);
                        self.render_board()?;
                        Ok(TurnState::Evaluating(new_move))
                    }
                    Err(err) => {
                        warn!("rejected move {:?}: {}", new_move, err);
                        let notice = match err {
                            InvalidMove::CellOccupied => POSITION_FILLED,
                            InvalidMove::OutOfRange => POSITION_OFF_BOARD,
                        };
                        self.terminal.write_line(notice)?;
                        Ok(TurnState::AwaitingMove(player))
                    }
                }
            }
        }
    }

    fn evaluate_move(&self, last_move: Move) -> TurnState {
        let verdict = evaluate(&self.board, last_move.player);
        if verdict.is_in_progress() {
            TurnState::AwaitingMove(last_move.player.other())
        } else {
            TurnState::GameOver(verdict)
        }
    }

    fn announce(&mut self, verdict: Verdict) -> Result<TurnState, GameError> {
        self.game_data.finish(verdict);
        info!(
            "Game {} ended: {:?} (line held by {:?})",
            self.game_data.game_id,
            verdict,
            winner(&self.board)
        );
        match serde_json::to_string(&self.game_data) {
            Ok(record) => debug!("Game record: {}", record),
            Err(err) => warn!("Failed to serialize game record: {}", err),
        }

        let message = match verdict {
            Verdict::Win { winner } => format!("You win Player {}!", winner),
            Verdict::Draw => GAME_TIED.to_string(),
            Verdict::InProgress => unreachable!("GameOver is only entered with a final verdict"),
        };
        self.terminal.write_line(&message)?;
        Ok(TurnState::AwaitingRematch)
    }

    fn await_rematch(&mut self) -> Result<TurnState, GameError> {
        self.terminal.prompt(PLAY_AGAIN)?;
        let input = self.terminal.read_line()?;

        match parse_rematch(&input) {
            RematchAnswer::Decline | RematchAnswer::Quit => self.end_session(),
            RematchAnswer::Accept => {
                self.board.reset();
                self.game_data = GameData::new();
                info!("Starting game {}", self.game_data.game_id);
                self.render_board()?;
                Ok(TurnState::AwaitingMove(Player::One))
            }
        }
    }

    fn end_session(&mut self) -> Result<TurnState, GameError> {
        info!("Session ended");
        self.terminal.write_line(GAME_OVER)?;
        Ok(TurnState::Quit)
    }

    fn render_board(&mut self) -> Result<(), GameError> {
        self.terminal.clear_display()?;
        self.write_board()
    }

    fn write_board(&mut self) -> Result<(), GameError> {
        let rendered = self.board.to_string();
        for line in rendered.lines() {
            self.terminal.write_line(line)?;
        }
        Ok(())
    }

    fn write_help(&mut self) -> Result<(), GameError> {
        for line in help_lines() {
            self.terminal.write_line(&line)?;
        }
        Ok(())
    }
}
