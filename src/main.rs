use std::error::Error;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{GameConfig, Overrides, load_settings, load_settings_from_path};
use grid_snake::controller::{GameController, LatestSnapshot};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::palette::Palette;
use grid_snake::score::JsonScoreStore;
use grid_snake::terminal_runtime::TerminalSession;
use grid_snake::ticker::IntervalTicker;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Upper bound on how long the loop waits for input between redraws.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

type TerminalController = GameController<IntervalTicker, JsonScoreStore, LatestSnapshot>;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board side length in cells.
    #[arg(long = "grid-size")]
    grid_size: Option<u16>,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// High-score file. Defaults to the per-user data directory.
    #[arg(long = "scores-file")]
    scores_file: Option<PathBuf>,

    /// Settings file. Defaults to the per-user config directory.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Append tracing output to this file (filter with RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let settings = match &cli.settings {
        Some(path) => load_settings_from_path(path)?,
        None => load_settings()?,
    };
    let config = GameConfig::resolve(
        &settings,
        Overrides {
            grid_size: cli.grid_size,
            tick_interval_ms: cli.tick_ms,
            seed: cli.seed,
        },
    )?;
    let palette = Palette::from_file(&settings.palette)?;

    let scores = cli
        .scores_file
        .map_or_else(JsonScoreStore::at_default_location, |path| {
            JsonScoreStore::new(path)
        });
    info!(
        grid = config.grid.width(),
        tick_ms = config.tick_interval.as_millis() as u64,
        scores = %scores.path().display(),
        "starting"
    );

    let mut controller = GameController::new(
        &config,
        IntervalTicker::new(),
        scores,
        LatestSnapshot::new(),
    );

    run(&mut controller, &palette)?;
    Ok(())
}

fn run(controller: &mut TerminalController, palette: &Palette) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    loop {
        if let Some(snapshot) = controller.view().latest() {
            session.draw(snapshot, palette)?;
        }

        let timeout = controller
            .ticker()
            .time_until_due(Instant::now())
            .map_or(FRAME_INTERVAL, |due| due.min(FRAME_INTERVAL));

        if let Some(game_input) = input.poll_input(timeout)? {
            if game_input == GameInput::Quit {
                break;
            }

            controller.handle_input(game_input);
        }

        if controller.ticker_mut().poll(Instant::now()) {
            controller.on_tick();
        }
    }

    info!(
        high_score = controller.state().high_score,
        "quitting"
    );
    Ok(())
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grid_snake=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
