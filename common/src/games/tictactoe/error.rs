use super::board::CELL_COUNT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidIndex(usize),
    CellOccupied(usize),
    PreconditionViolation(&'static str),
    GameOver,
    NotYourTurn,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidIndex(index) => {
                write!(f, "Cell index {} is out of range 0..{}", index, CELL_COUNT)
            }
            GameError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            GameError::PreconditionViolation(reason) => {
                write!(f, "Precondition violated: {}", reason)
            }
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NotYourTurn => write!(f, "Not your turn"),
        }
    }
}

impl std::error::Error for GameError {}
