mod config;
mod game_loop;
mod input;
mod render;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{FirstTurn, GameMode, Player, TicTacToeSession};
use tictactoe_common::version::VERSION;
use tictactoe_common::{log, logger};

use config::get_config_manager;

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    TwoPlayers,
    VersusComputer,
}

#[derive(Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstArg {
    Human,
    Computer,
    Random,
}

#[derive(Parser)]
#[command(name = "tictactoe", version = VERSION)]
struct Args {
    /// Config file, defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Mark played by the human in versus-computer mode
    #[arg(long, value_enum)]
    human: Option<MarkArg>,
    #[arg(long, value_enum)]
    first: Option<FirstArg>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let manager = get_config_manager(args.config.clone());
    let mut config = manager.get_config()?;

    if let Some(mode) = args.mode {
        config.game.mode = match mode {
            ModeArg::TwoPlayers => GameMode::TwoPlayers,
            ModeArg::VersusComputer => GameMode::VersusComputer,
        };
    }
    if let Some(mark) = args.human {
        config.game.human_mark = match mark {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        };
    }
    if let Some(first) = args.first {
        config.game.first_turn = match first {
            FirstArg::Human => FirstTurn::Human,
            FirstArg::Computer => FirstTurn::Computer,
            FirstArg::Random => FirstTurn::Random,
        };
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.verbose {
        config.log.verbose = true;
    }
    config.validate()?;

    let prefix = match config.log.prefix.clone() {
        Some(prefix) => Some(prefix),
        None if args.use_log_prefix => Some("Console".to_string()),
        None => None,
    };
    logger::init_logger(prefix, config.log.verbose);

    log!(
        "Tic-tac-toe {} using config {}",
        VERSION,
        manager.content_provider().path().display()
    );

    if args.save_config {
        manager.set_config(&config)?;
        log!("Config saved");
    }

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut session = TicTacToeSession::new(config.game, &mut rng);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    game_loop::run_game(&mut session, stdin.lock(), &mut stdout)?;

    log!("Goodbye");
    Ok(())
}
