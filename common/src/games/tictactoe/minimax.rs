use super::board::Board;
use super::error::GameError;
use super::types::Player;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

const SCORE_SENTINEL: i32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub index: usize,
    pub score: i32,
}

/// Exhaustive minimax without pruning or depth discount.
///
/// Scores are from the computer's side: `WIN_SCORE` when the computer wins,
/// `LOSS_SCORE` when the human wins. Candidates are tried in ascending cell
/// order and the incumbent is only replaced on a strict improvement, so among
/// equally scored moves the lowest index is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    computer: Player,
    human: Player,
}

impl Minimax {
    pub fn new(computer: Player) -> Self {
        Self {
            computer,
            human: computer.opponent(),
        }
    }

    pub fn computer(&self) -> Player {
        self.computer
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn best_move(&self, board: &Board, to_move: Player) -> Result<SearchResult, GameError> {
        if board.is_full() {
            return Err(GameError::PreconditionViolation("no empty cells to search"));
        }
        if board.check_win(self.human) || board.check_win(self.computer) {
            return Err(GameError::PreconditionViolation("game is already won"));
        }

        let mut board = *board;
        self.search(&mut board, to_move)
            .ok_or(GameError::PreconditionViolation("no candidate moves"))
    }

    /// Minimax value of the position, including the terminal checks.
    pub fn evaluate(&self, board: &Board, to_move: Player) -> i32 {
        let mut board = *board;
        self.score(&mut board, to_move)
    }

    fn terminal_score(&self, board: &Board) -> Option<i32> {
        // human win is checked first; boards where both sides hold a line
        // only arise from direct construction
        if board.check_win(self.human) {
            Some(LOSS_SCORE)
        } else if board.check_win(self.computer) {
            Some(WIN_SCORE)
        } else if board.is_full() {
            Some(DRAW_SCORE)
        } else {
            None
        }
    }

    fn score(&self, board: &mut Board, to_move: Player) -> i32 {
        if let Some(score) = self.terminal_score(board) {
            return score;
        }
        self.search(board, to_move)
            .map(|result| result.score)
            .unwrap_or(DRAW_SCORE)
    }

    fn search(&self, board: &mut Board, to_move: Player) -> Option<SearchResult> {
        let available_moves = board.empty_cells();
        let mut candidates = Vec::with_capacity(available_moves.len());

        for index in available_moves {
            board.apply_move(index, to_move).ok()?;
            let score = self.score(board, to_move.opponent());
            board.clear_cell(index);

            candidates.push(SearchResult { index, score });
        }

        let mut best = None;
        if to_move == self.computer {
            let mut best_score = -SCORE_SENTINEL;
            for candidate in candidates {
                if candidate.score > best_score {
                    best_score = candidate.score;
                    best = Some(candidate);
                }
            }
        } else {
            let mut best_score = SCORE_SENTINEL;
            for candidate in candidates {
                if candidate.score < best_score {
                    best_score = candidate.score;
                    best = Some(candidate);
                }
            }
        }
        best
    }
}
