use crate::games::SessionRng;
use crate::{debug, log};
use super::board::Board;
use super::bot_controller::MoveSource;
use super::error::GameError;
use super::settings::TicTacToeSessionSettings;
use super::types::{FirstTurn, GameMode, GameStatus, Move, Outcome, Player};
use super::win_detector::WinLine;

/// One game of tic-tac-toe, in either mode.
///
/// Both modes go through the same move/turn/status path; the only difference
/// is the [`MoveSource`] assigned to each player. While `running` is false the
/// session refuses every move until [`TicTacToeSession::reset`] is called.
#[derive(Debug, Clone)]
pub struct TicTacToeSession {
    settings: TicTacToeSessionSettings,
    board: Board,
    sources: [MoveSource; 2],
    first_player: Player,
    current_player: Player,
    status: GameStatus,
    running: bool,
    last_move: Option<Move>,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, rng: &mut SessionRng) -> Self {
        let (sources, first_player) = match settings.mode {
            GameMode::TwoPlayers => ([MoveSource::Human, MoveSource::Human], Player::X),
            GameMode::VersusComputer => {
                let human = settings.human_mark;
                let computer = human.opponent();

                let mut sources = [MoveSource::Human; 2];
                sources[computer.index()] = MoveSource::computer(computer);

                let first_player = match settings.first_turn {
                    FirstTurn::Human => human,
                    FirstTurn::Computer => computer,
                    FirstTurn::Random => {
                        if rng.random_bool() {
                            human
                        } else {
                            computer
                        }
                    }
                };
                (sources, first_player)
            }
        };

        log!(
            "New game: {:?}, {} moves first (seed {})",
            settings.mode,
            first_player,
            rng.seed()
        );

        Self {
            settings,
            board: Board::new(),
            sources,
            first_player,
            current_player: first_player,
            status: GameStatus::InProgress,
            running: true,
            last_move: None,
        }
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn moves_played(&self) -> usize {
        self.board.moves_played()
    }

    pub fn move_source(&self, player: Player) -> &MoveSource {
        &self.sources[player.index()]
    }

    pub fn is_computer_turn(&self) -> bool {
        self.running && self.move_source(self.current_player).is_computer()
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        self.board.winning_line().map(|(_, line)| line)
    }

    pub fn outcome(&self) -> Outcome {
        match self.status.winner() {
            Some(winner) if self.move_source(winner).is_computer() => Outcome::ComputerWin,
            Some(_) => Outcome::HumanWin,
            None if self.status == GameStatus::Draw => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<Move, GameError> {
        if !self.running {
            return Err(GameError::GameOver);
        }

        if self.move_source(self.current_player).is_computer() {
            return Err(GameError::NotYourTurn);
        }

        self.board.apply_move(index, self.current_player)?;
        Ok(self.finish_move(Move::new(index, self.current_player)))
    }

    pub fn play_computer_turn(&mut self) -> Result<Move, GameError> {
        if !self.running {
            return Err(GameError::GameOver);
        }

        let player = self.current_player;
        let Some(result) = self.move_source(player).calculate_move(&self.board, player)? else {
            return Err(GameError::NotYourTurn);
        };

        debug!("{} search picked cell {} with score {}", player, result.index, result.score);

        self.board.apply_move(result.index, player)?;
        Ok(self.finish_move(Move::new(result.index, player)))
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = self.first_player;
        self.status = GameStatus::InProgress;
        self.running = true;
        self.last_move = None;
        log!("Game restarted, {} moves first", self.first_player);
    }

    fn finish_move(&mut self, mv: Move) -> Move {
        self.last_move = Some(mv);
        self.status = self.board.status();

        if self.status.is_over() {
            self.running = false;
            log!("Game over after {} moves: {:?}", self.board.moves_played(), self.status);
        } else {
            self.current_player = self.current_player.opponent();
        }
        mv
    }
}
