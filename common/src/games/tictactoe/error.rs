use super::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidCoordinate { row: usize, col: usize },
    OccupiedCell(Position),
    InvalidMark,
    GameOver,
    NoLegalMove,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::InvalidCoordinate { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            MoveError::OccupiedCell(pos) => {
                write!(f, "Cell {} is already marked", pos.cell_number())
            }
            MoveError::InvalidMark => write!(f, "Only X or O can be placed"),
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::NoLegalMove => write!(f, "No legal move left on the board"),
        }
    }
}

impl std::error::Error for MoveError {}
