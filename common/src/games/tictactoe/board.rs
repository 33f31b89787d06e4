use std::fmt;

use super::error::GameError;
use super::types::{Cell, GameStatus, Player};
use super::win_detector::{WinLine, check_win, check_win_with_line};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The 3x3 grid, cells indexed 0..9 in row-major order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Result<Cell, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::InvalidIndex(index))
    }

    pub fn is_cell_empty(&self, index: usize) -> Result<bool, GameError> {
        Ok(self.cell(index)? == Cell::Empty)
    }

    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        if !self.is_cell_empty(index)? {
            return Err(GameError::CellOccupied(index));
        }
        self.cells[index] = player.into();
        Ok(())
    }

    /// Undoes a placement. Only the search calls this, on its own copy.
    pub(crate) fn clear_cell(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn moves_played(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn check_win(&self, player: Player) -> bool {
        check_win(&self.cells, player)
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.check_win(Player::X) && !self.check_win(Player::O)
    }

    pub fn winning_line(&self) -> Option<(Player, WinLine)> {
        check_win_with_line(&self.cells)
    }

    pub fn status(&self) -> GameStatus {
        match self.winning_line() {
            Some((Player::X, _)) => GameStatus::XWon,
            Some((Player::O, _)) => GameStatus::OWon,
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
