mod board;
mod bot_controller;
mod error;
mod minimax;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT};
pub use bot_controller::MoveSource;
pub use error::GameError;
pub use minimax::{DRAW_SCORE, LOSS_SCORE, Minimax, SearchResult, WIN_SCORE};
pub use session::TicTacToeSession;
pub use settings::TicTacToeSessionSettings;
pub use types::{Cell, FirstTurn, GameMode, GameStatus, Move, Outcome, Player};
pub use win_detector::{WIN_LINES, WinLine, check_win, check_win_with_line};
