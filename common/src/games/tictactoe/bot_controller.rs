use super::board::Board;
use super::error::GameError;
use super::minimax::{Minimax, SearchResult};
use super::types::Player;

/// Who decides the moves of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    Human,
    Computer(Minimax),
}

impl MoveSource {
    pub fn computer(player: Player) -> Self {
        MoveSource::Computer(Minimax::new(player))
    }

    pub fn is_computer(&self) -> bool {
        matches!(self, MoveSource::Computer(_))
    }

    /// Searched move for computer players, `None` when the move has to come
    /// from input.
    pub fn calculate_move(
        &self,
        board: &Board,
        player: Player,
    ) -> Result<Option<SearchResult>, GameError> {
        match self {
            MoveSource::Human => Ok(None),
            MoveSource::Computer(minimax) => minimax.best_move(board, player).map(Some),
        }
    }
}
