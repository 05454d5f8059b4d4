use std::io::{self, BufRead, Write};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    GameMode, GameStatus, MoveError, PlayerKind, TicTacToeGameState,
};
use tictactoe_common::log;

use crate::prompt::{
    INVALID_CELL_MESSAGE, ModeChoice, Prompter, parse_cell, parse_mark, parse_mode,
};
use crate::render::render_board;

pub struct GameRunner<R, W> {
    prompter: Prompter<R, W>,
    rng: SessionRng,
    show_cell_numbers: bool,
}

impl<R: BufRead, W: Write> GameRunner<R, W> {
    pub fn new(reader: R, writer: W, rng: SessionRng, show_cell_numbers: bool) -> Self {
        Self {
            prompter: Prompter::new(reader, writer),
            rng,
            show_cell_numbers,
        }
    }

    /// Plays one game. `Ok(None)` means input ended before the game finished.
    pub fn run(&mut self) -> io::Result<Option<GameStatus>> {
        let Some(mode) = self.choose_mode()? else {
            return Ok(None);
        };
        let mut state = TicTacToeGameState::new(mode);
        log!("Starting {:?} game with rng seed {}", state.mode(), self.rng.seed());

        loop {
            let board = render_board(state.board(), self.show_cell_numbers);
            self.prompter.show(&board)?;
            if state.status().is_over() {
                break;
            }

            let moved = match state.current_player() {
                PlayerKind::Human => self.human_turn(&mut state)?,
                PlayerKind::Computer => self.computer_turn(&mut state)?,
            };
            if !moved {
                return Ok(None);
            }
        }

        let status = state.status();
        match status {
            GameStatus::Won(mark) => self.prompter.say(&format!("Winner: {}", mark))?,
            _ => self.prompter.say("It's a draw!")?,
        }
        self.prompter.say("Thanks for playing.")?;
        Ok(Some(status))
    }

    pub fn into_writer(self) -> W {
        self.prompter.into_writer()
    }

    fn choose_mode(&mut self) -> io::Result<Option<GameMode>> {
        self.prompter.say("Choose mode:")?;
        self.prompter.say("1) Two players (local)")?;
        self.prompter.say("2) Play vs Computer (you choose X or O)")?;
        let choice = self
            .prompter
            .ask_until("Enter 1 or 2: ", "Invalid option. Try again.", parse_mode)?;

        match choice {
            None => Ok(None),
            Some(ModeChoice::TwoPlayer) => {
                self.prompter.say("Two-player mode. X goes first.")?;
                Ok(Some(GameMode::TwoPlayer))
            }
            Some(ModeChoice::VsComputer) => {
                let human_mark = self.prompter.ask_until(
                    "Do you want to play as X or O? (X goes first): ",
                    "Invalid choice. Enter X or O.",
                    parse_mark,
                )?;
                let Some(human_mark) = human_mark else {
                    return Ok(None);
                };
                self.prompter.say(&format!("You are {}. Let's play!", human_mark))?;
                Ok(Some(GameMode::VsComputer { human_mark }))
            }
        }
    }

    fn human_turn(&mut self, state: &mut TicTacToeGameState) -> io::Result<bool> {
        let prompt = format!("Player {}, enter cell (1-9): ", state.current_mark());
        loop {
            let Some(answer) = self.prompter.ask(&prompt)? else {
                return Ok(false);
            };
            if answer.is_empty() {
                continue;
            }
            let Some(pos) = parse_cell(&answer) else {
                self.prompter.say(INVALID_CELL_MESSAGE)?;
                continue;
            };
            match state.place_mark(pos) {
                Ok(_) => return Ok(true),
                Err(MoveError::OccupiedCell(_)) => {
                    self.prompter.say("Cell already taken. Pick another.")?;
                }
                Err(e) => return Err(io::Error::other(e)),
            }
        }
    }

    fn computer_turn(&mut self, state: &mut TicTacToeGameState) -> io::Result<bool> {
        let mark = state.current_mark();
        let pos = state.play_bot_turn(&mut self.rng).map_err(io::Error::other)?;
        self.prompter
            .say(&format!("Computer ({}) plays cell {}", mark, pos.cell_number()))?;
        Ok(true)
    }
}
