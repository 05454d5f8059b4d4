use super::error::MoveError;
use super::types::{CELL_COUNT, GameStatus, Mark, Position};
use super::win_detector::check_win;

/// 3x3 grid stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_rows(rows: [&str; 3]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                board.cells[Position::new(row, col).to_index()] = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => Mark::Empty,
                };
            }
        }
        board
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        let pos = Position::new(row, col);
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.to_index()])
    }

    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        let pos = Position::new(row, col);
        if !pos.is_on_board() {
            return Err(MoveError::InvalidCoordinate { row, col });
        }
        if mark == Mark::Empty {
            return Err(MoveError::InvalidMark);
        }
        if self.cells[pos.to_index()] != Mark::Empty {
            return Err(MoveError::OccupiedCell(pos));
        }
        self.cells[pos.to_index()] = mark;
        Ok(())
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Unchecked placement for search; `index` must come from `get_available_moves`.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        debug_assert_eq!(self.cells[index], Mark::Empty);
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn status(&self) -> GameStatus {
        if let Some(mark) = self.winner() {
            return GameStatus::Won(mark);
        }
        if self.is_full() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}
