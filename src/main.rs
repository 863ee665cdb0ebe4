use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use gameweek_threads::config::Config;
use gameweek_threads::discord::Discord;
use gameweek_threads::error::Result;
use gameweek_threads::reconcile::Reconciler;
use gameweek_threads::sportradar::Sportradar;
use gameweek_threads::state::StateStore;

/// Keep one discussion thread per game week alive in a Discord channel.
#[derive(Debug, Parser)]
#[command(name = "gameweek-threads", version)]
struct Cli {
    /// Enable debug logging (also GAMEWEEK_DEBUG).
    #[arg(long)]
    debug: bool,

    /// State file path (also GAMEWEEK_STATE_PATH).
    #[arg(long)]
    state: Option<PathBuf>,
}

fn run(config: &Config) -> Result<()> {
    let store = StateStore::new(&config.state_path);
    let state = store.load()?;
    debug!(path = %store.path().display(), "Loaded state");

    let discord = Discord::new(&config.bot_token);
    let sportradar = Sportradar::new(&config.settings.league.schedule_api_base, &config.api_key);
    let reconciler = Reconciler {
        settings: &config.settings,
        threads: &discord,
        messenger: &discord,
        schedule: &sportradar,
    };

    let pass = reconciler.run(state, chrono::Utc::now(), &mut rand::thread_rng())?;
    info!(summary = %pass.report.summary(), "Pass complete");

    if pass.report.not_started {
        return Ok(());
    }
    store.save(&pass.state)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(mut config) => {
            config.debug |= cli.debug;
            if let Some(path) = cli.state {
                config.state_path = path;
            }
            Some(config)
        }
        Err(e) => {
            eprintln!("{}", e);
            None
        }
    };
    let debug = config.as_ref().is_some_and(|c| c.debug) || cli.debug;

    // Initialize structured logging with tracing
    let level = if debug { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .try_init();

    let Some(config) = config else {
        return ExitCode::FAILURE;
    };
    debug!(
        league = %config.settings.league.label,
        channel = %config.settings.channel_id,
        guild = %config.settings.guild_id,
        timezone = %config.settings.timezone,
        "Loaded configuration"
    );

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Pass failed");
            ExitCode::FAILURE
        }
    }
}
