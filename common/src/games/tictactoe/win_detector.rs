use super::types::{Cell, Player};

pub type WinLine = [usize; 3];

pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Cell; 9], player: Player) -> bool {
    let mark = Cell::from(player);
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == mark))
}

/// First complete line in table order, with the player holding it.
pub fn check_win_with_line(cells: &[Cell; 9]) -> Option<(Player, WinLine)> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(player) = cells[a].player()
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some((player, line));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_with(line: WinLine, player: Player) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for index in line {
            cells[index] = player.into();
        }
        cells
    }

    #[test]
    fn test_every_line_is_a_win_for_its_owner_only() {
        for line in WIN_LINES {
            for player in [Player::X, Player::O] {
                let cells = cells_with(line, player);
                assert!(check_win(&cells, player), "line {:?} for {}", line, player);
                assert!(!check_win(&cells, player.opponent()));
                assert_eq!(check_win_with_line(&cells), Some((player, line)));
            }
        }
    }

    #[test]
    fn test_two_of_three_is_not_a_win() {
        for line in WIN_LINES {
            for skipped in line {
                let mut cells = cells_with(line, Player::X);
                cells[skipped] = Cell::Empty;
                assert!(!check_win(&cells, Player::X));

                cells[skipped] = Cell::O;
                assert!(!check_win(&cells, Player::X));
                assert!(!check_win(&cells, Player::O));
                assert_eq!(check_win_with_line(&cells), None);
            }
        }
    }

    #[test]
    fn test_win_requires_some_full_line() {
        // X O X / X O O / O X X has no line for either side
        let cells = [
            Cell::X, Cell::O, Cell::X,
            Cell::X, Cell::O, Cell::O,
            Cell::O, Cell::X, Cell::X,
        ];
        assert!(!check_win(&cells, Player::X));
        assert!(!check_win(&cells, Player::O));
        assert_eq!(check_win_with_line(&cells), None);
    }

    #[test]
    fn test_first_line_in_table_order_is_reported() {
        let mut cells = cells_with([2, 5, 8], Player::O);
        cells[0] = Cell::O;
        cells[4] = Cell::O;
        assert_eq!(check_win_with_line(&cells), Some((Player::O, [2, 5, 8])));
    }
}
