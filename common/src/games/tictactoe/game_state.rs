use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_minimax_move};
use super::error::MoveError;
use super::types::{GameMode, GameStatus, Mark, PlayerKind, Position};

#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    mode: GameMode,
    current_mark: Mark,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_mark: Mark::X,
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn current_player(&self) -> PlayerKind {
        match self.mode {
            GameMode::VsComputer { human_mark } if human_mark != self.current_mark => {
                PlayerKind::Computer
            }
            _ => PlayerKind::Human,
        }
    }

    pub fn place_mark(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }

        self.board.set(pos.row, pos.col, self.current_mark)?;

        let status = self.status();
        if status.is_over() {
            log!(
                "Game over after {} played cell {}: {:?}",
                self.current_mark,
                pos.cell_number(),
                status
            );
        } else {
            self.switch_turn();
        }

        Ok(status)
    }

    /// Lets the bot play the side to move.
    pub fn play_bot_turn(&mut self, rng: &mut SessionRng) -> Result<Position, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }
        let input = BotInput::from_game_state(self);
        let pos = calculate_minimax_move(&input, rng).ok_or(MoveError::NoLegalMove)?;
        self.place_mark(pos)?;
        Ok(pos)
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X { Mark::O } else { Mark::X };
    }
}
