use tictactoe_common::games::tictactoe::{
    BOARD_SIZE, Board, Cell, GameMode, Outcome, TicTacToeSession,
};

/// Draws the board with empty cells labelled by the number that selects them.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, cells)| {
            let symbols: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => (row * BOARD_SIZE + col + 1).to_string(),
                    Cell::X => "X".to_string(),
                    Cell::O => "O".to_string(),
                })
                .collect();
            format!(" {} ", symbols.join(" | "))
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn status_text(session: &TicTacToeSession) -> String {
    match session.outcome() {
        Outcome::Ongoing => format!("{}'s turn to play!", session.current_player()),
        Outcome::Draw => "Draw!".to_string(),
        outcome => match session.settings().mode {
            GameMode::TwoPlayers => match session.status().winner() {
                Some(winner) => format!("{} is a winner!", winner),
                None => "Draw!".to_string(),
            },
            GameMode::VersusComputer if outcome == Outcome::HumanWin => "You win!".to_string(),
            GameMode::VersusComputer => "You lose.".to_string(),
        },
    }
}

pub fn winning_line_text(session: &TicTacToeSession) -> Option<String> {
    session.winning_line().map(|line| {
        let cells: Vec<String> = line.iter().map(|index| (index + 1).to_string()).collect();
        format!("Winning line: {}", cells.join("-"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::SessionRng;
    use tictactoe_common::games::tictactoe::{
        FirstTurn, Player, TicTacToeSessionSettings,
    };

    fn session(mode: GameMode, first_turn: FirstTurn) -> TicTacToeSession {
        let settings = TicTacToeSessionSettings {
            mode,
            human_mark: Player::O,
            first_turn,
        };
        TicTacToeSession::new(settings, &mut SessionRng::new(3))
    }

    #[test]
    fn test_render_empty_board_shows_numbers() {
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_render_marks() {
        let mut board = Board::new();
        board.apply_move(0, Player::X).unwrap();
        board.apply_move(4, Player::O).unwrap();
        let expected = " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_turn_status() {
        let session = session(GameMode::TwoPlayers, FirstTurn::Human);
        assert_eq!(status_text(&session), "X's turn to play!");
    }

    #[test]
    fn test_two_player_winner_status() {
        let mut session = session(GameMode::TwoPlayers, FirstTurn::Human);
        for index in [0, 3, 1, 4, 2] {
            session.place_mark(index).unwrap();
        }
        assert_eq!(status_text(&session), "X is a winner!");
        assert_eq!(winning_line_text(&session).as_deref(), Some("Winning line: 1-2-3"));
    }

    #[test]
    fn test_versus_computer_loss_status() {
        let mut session = session(GameMode::VersusComputer, FirstTurn::Computer);
        session.play_computer_turn().unwrap();
        session.place_mark(1).unwrap();
        while session.is_running() {
            if session.is_computer_turn() {
                session.play_computer_turn().unwrap();
            } else {
                let index = session.board().empty_cells()[0];
                session.place_mark(index).unwrap();
            }
        }
        assert_eq!(status_text(&session), "You lose.");
    }
}
