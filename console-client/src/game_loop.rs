use std::io::{self, BufRead, Write};

use tictactoe_common::debug;
use tictactoe_common::games::tictactoe::{GameError, TicTacToeSession};

use crate::input::{Command, parse_command};
use crate::render::{render_board, status_text, winning_line_text};

/// Plays until the input ends or the player quits. Computer turns are taken
/// as soon as they come up, so every prompt is for a human.
pub fn run_game<R: BufRead, W: Write>(
    session: &mut TicTacToeSession,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        while session.is_computer_turn() {
            let mv = session.play_computer_turn().map_err(io::Error::other)?;
            writeln!(output, "Computer ({}) plays {}", mv.player, mv.index + 1)?;
        }

        writeln!(output, "{}", render_board(session.board()))?;
        writeln!(output, "{}", status_text(session))?;
        if !session.is_running() {
            if let Some(line) = winning_line_text(session) {
                writeln!(output, "{}", line)?;
            }
            writeln!(output, "Enter r to play again or q to quit.")?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };

        match parse_command(&line?) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Restart) => session.reset(),
            Ok(Command::Place(index)) => match session.place_mark(index) {
                Ok(mv) => debug!("{} plays cell {}", mv.player, mv.index),
                Err(e) => writeln!(output, "{}", describe(&e))?,
            },
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

// errors carry 0-based indices; the player sees cells numbered from 1
fn describe(error: &GameError) -> String {
    match error {
        GameError::CellOccupied(index) => format!("Cell {} is already marked", index + 1),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::games::SessionRng;
    use tictactoe_common::games::tictactoe::{
        FirstTurn, GameMode, GameStatus, Outcome, Player, TicTacToeSessionSettings,
    };

    fn new_session(mode: GameMode, first_turn: FirstTurn) -> TicTacToeSession {
        let settings = TicTacToeSessionSettings {
            mode,
            human_mark: Player::O,
            first_turn,
        };
        TicTacToeSession::new(settings, &mut SessionRng::new(5))
    }

    fn play(session: &mut TicTacToeSession, script: &str) -> String {
        let mut output = Vec::new();
        run_game(session, Cursor::new(script.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_scripted_two_player_game() {
        let mut session = new_session(GameMode::TwoPlayers, FirstTurn::Human);
        let output = play(&mut session, "1\n4\n2\n5\n3\nq\n");
        assert_eq!(session.status(), GameStatus::XWon);
        assert!(output.contains("X is a winner!"));
        assert!(output.contains("Winning line: 1-2-3"));
        assert!(output.contains("Enter r to play again"));
    }

    #[test]
    fn test_bad_input_is_reported_and_turn_kept() {
        let mut session = new_session(GameMode::TwoPlayers, FirstTurn::Human);
        let output = play(&mut session, "5\n5\nten\n0\n");
        assert!(output.contains("Cell 5 is already marked"));
        assert!(output.contains("'ten' is not a cell number"));
        assert!(output.contains("Cell number must be between 1 and 9"));
        assert_eq!(session.current_player(), Player::O);
        assert_eq!(session.moves_played(), 1);
    }

    #[test]
    fn test_computer_answers_each_human_move() {
        let mut session = new_session(GameMode::VersusComputer, FirstTurn::Computer);
        let output = play(&mut session, "2\n");
        assert!(output.starts_with("Computer (X) plays 1"));
        assert_eq!(session.moves_played(), 3);
        assert_eq!(session.current_player(), Player::O);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut session = new_session(GameMode::TwoPlayers, FirstTurn::Human);
        play(&mut session, "1\n4\n2\n5\n3\nr\n");
        assert_eq!(session.outcome(), Outcome::Ongoing);
        assert_eq!(session.moves_played(), 0);
    }

    #[test]
    fn test_moves_after_game_over_are_refused() {
        let mut session = new_session(GameMode::TwoPlayers, FirstTurn::Human);
        let output = play(&mut session, "1\n4\n2\n5\n3\n9\n");
        assert!(output.contains("Game is already over"));
        assert_eq!(session.moves_played(), 5);
    }
}
