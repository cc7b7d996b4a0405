use anyhow::Result;
use clap::{Parser, Subcommand};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use tracing::info;

use crate::core::config::{GameConfig, DEFAULT_HINT_QUOTA, DEFAULT_LOG_FILE, DEFAULT_SECRET_WORD};
use crate::core::engine::Engine;
use crate::core::welcome::{WelcomeResult, WelcomeScreen};
use crate::games::eclipsed_sun::game::DEFAULT_MAX_ATTEMPTS;
use crate::games::eclipsed_sun::sun::{self, Shade, DEFAULT_POINT_SIZE, DEFAULT_RADIUS};
use crate::games::eclipsed_sun::Session;

#[derive(Parser)]
#[command(name = "eclipsed-sun")]
#[command(about = "☀ Guess the word before the sun is eclipsed")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play in the terminal (default)
    Play(PlayArgs),
    /// Print the sun's drawing points for a number of wrong guesses
    Sun {
        /// Wrong guesses so far
        #[arg(short, long, default_value_t = 0)]
        attempts: u32,

        #[arg(long, default_value_t = DEFAULT_RADIUS)]
        radius: f64,

        #[arg(long, default_value_t = DEFAULT_POINT_SIZE)]
        point_size: f64,

        /// Print a JSON array instead of one point per line
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args, Debug)]
pub struct PlayArgs {
    /// Word to guess
    #[arg(short, long, default_value = DEFAULT_SECRET_WORD)]
    pub word: String,

    /// Wrong guesses allowed before the game is lost
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Hints available per game
    #[arg(long, default_value_t = DEFAULT_HINT_QUOTA)]
    pub hints: u32,

    /// Seed for hint selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl From<PlayArgs> for GameConfig {
    fn from(args: PlayArgs) -> Self {
        Self {
            secret_word: args.word,
            max_attempts: args.max_attempts,
            hint_quota: args.hints,
            seed: args.seed,
            log_file: args.log_file,
        }
    }
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => play(args.into()),
        Some(Commands::Sun { attempts, radius, point_size, json }) => print_sun(attempts, radius, point_size, json),
        None => play(GameConfig::default()),
    }
}

fn play(config: GameConfig) -> Result<()> {
    config.validate()?;
    crate::core::logging::init(&config.log_file)?;

    let mut terminal = ratatui::init();
    let result = run_game(&mut terminal, &config);
    ratatui::restore();

    if let Some(nickname) = result? {
        println!("👋 Thanks for playing, {}!", nickname);
    }
    Ok(())
}

/// Welcome screen, then the game. Returns the nickname if the player got past the welcome screen.
fn run_game(terminal: &mut DefaultTerminal, config: &GameConfig) -> Result<Option<String>> {
    let player = match WelcomeScreen::new().run(terminal)? {
        WelcomeResult::Start(player) => player,
        WelcomeResult::Quit => return Ok(None),
    };

    let session = Engine::new(Session::new(config, player)).run(terminal)?;
    info!(attempts = session.game().attempts(), status = ?session.game().status(), "Session ended");
    Ok(Some(session.player().nickname.clone()))
}

fn print_sun(attempts: u32, radius: f64, point_size: f64, json: bool) -> Result<()> {
    let points = sun::render(attempts, radius, point_size);

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    for point in &points {
        let shade = match point.shade {
            Shade::Light => "light",
            Shade::Dark => "dark",
        };
        println!("{:.3} {:.3} {}", point.x, point.y, shade);
    }
    Ok(())
}
