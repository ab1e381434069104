mod config;
mod offline;
mod ui;

use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{FirstPlayerMode, Mark};
use common::{log, logger};
use config::{TicTacToeConfig, get_config_manager};
use offline::run_tictactoe_game;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Computer,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Computer => FirstPlayerMode::Computer,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// Config file, defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    #[arg(long, value_enum)]
    human_mark: Option<MarkArg>,

    /// Pause before the computer's move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_overrides(&self, cfg: &mut TicTacToeConfig) {
        if let Some(first_player) = self.first_player {
            cfg.first_player = first_player.into();
        }
        if let Some(human_mark) = self.human_mark {
            cfg.human_mark = human_mark.into();
        }
        if let Some(delay_ms) = self.delay_ms {
            cfg.computer_delay_ms = delay_ms;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config().map_err(|e| {
        log!("Failed to load config: {}", e);
        e
    })?;

    args.apply_overrides(&mut config.tictactoe);
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!(
            "Config saved to {}",
            config_manager.content_provider().path().display()
        );
    }

    let mut rng = SessionRng::from_seed_or_random(args.seed);
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();

    let summary = run_tictactoe_game(input, &mut output, &config.tictactoe, &mut rng).await?;
    log!("Session over after {} games", summary.games_played());

    Ok(())
}
