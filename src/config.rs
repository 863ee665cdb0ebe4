use std::env;
use std::path::PathBuf;

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;

pub const DEFAULT_STATE_PATH: &str = ".state.json";
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Which columns the daily digest table carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestColumns {
    AwayHome,
    AwayHomeKickoff,
}

/// How the daily digest is posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestStyle {
    Plain,
    Embed,
}

/// Everything that differs between the supported leagues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueProfile {
    pub label: String,
    pub columns: DigestColumns,
    pub style: DigestStyle,
    pub idle_threshold: Duration,
    /// Skip the pass while today is before the current week's first day.
    pub preseason_guard: bool,
    pub week1_start: NaiveDate,
    pub week1_end: NaiveDate,
    pub schedule_api_base: String,
    pub schedule_page_url: String,
    pub footer: String,
}

impl LeagueProfile {
    pub fn nfl() -> Self {
        Self {
            label: "NFL".to_string(),
            columns: DigestColumns::AwayHomeKickoff,
            style: DigestStyle::Embed,
            idle_threshold: Duration::hours(6),
            preseason_guard: true,
            week1_start: ymd(2021, 9, 9),
            week1_end: ymd(2021, 9, 14),
            schedule_api_base: "https://api.sportradar.us/nfl/official/trial/v6/en".to_string(),
            schedule_page_url: "https://www.espn.com/nfl/schedule".to_string(),
            footer: "Powered by Rust!".to_string(),
        }
    }

    pub fn nba() -> Self {
        Self {
            label: "NBA".to_string(),
            columns: DigestColumns::AwayHome,
            style: DigestStyle::Plain,
            idle_threshold: Duration::hours(16),
            preseason_guard: false,
            week1_start: ymd(2021, 10, 19),
            week1_end: ymd(2021, 10, 26),
            schedule_api_base: "https://api.sportradar.us/nba/trial/v7/en".to_string(),
            schedule_page_url: "https://www.espn.com/nba/schedule".to_string(),
            footer: "Powered by Rust!".to_string(),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "nfl" => Some(Self::nfl()),
            "nba" => Some(Self::nba()),
            _ => None,
        }
    }

    pub fn welcome_message(&self) -> &'static str {
        "Welcome to the thread for the current game week.\n\n"
    }

    /// Filler used when the state carries no messages of its own.
    pub fn default_greeting(&self) -> String {
        format!(
            "Hi! I'm the {0} Threads bot. I'm here to help you keep track of the games in the {0}.",
            self.label
        )
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// What a reconciliation pass needs to know about its surroundings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub guild_id: String,
    pub channel_id: String,
    pub league: LeagueProfile,
    /// Zone used for "today" and for kickoff times.
    pub timezone: Tz,
    pub season_year: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub debug: bool,
    pub bot_token: String,
    pub api_key: String,
    pub state_path: PathBuf,
    pub settings: Settings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnv(key.to_string()))
        };
        let date = |key: &str| -> Result<Option<NaiveDate>, ConfigError> {
            lookup(key)
                .map(|v| {
                    NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
                        .map_err(|_| ConfigError::InvalidValue(key.to_string()))
                })
                .transpose()
        };

        let league_name = lookup("GAMEWEEK_LEAGUE").unwrap_or_else(|| "nfl".to_string());
        let mut league = LeagueProfile::by_name(&league_name)
            .ok_or_else(|| ConfigError::InvalidValue("GAMEWEEK_LEAGUE".to_string()))?;
        if let Some(start) = date("GAMEWEEK_WEEK1_START")? {
            league.week1_start = start;
        }
        if let Some(end) = date("GAMEWEEK_WEEK1_END")? {
            league.week1_end = end;
        }
        if let Some(base) = lookup("GAMEWEEK_SCHEDULE_API_BASE") {
            league.schedule_api_base = base.trim_end_matches('/').to_string();
        }

        let timezone = lookup("GAMEWEEK_TIMEZONE")
            .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string())
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidValue("GAMEWEEK_TIMEZONE".to_string()))?;

        let season_year = lookup("GAMEWEEK_SEASON_YEAR")
            .map(|v| {
                v.trim()
                    .parse::<i32>()
                    .map_err(|_| ConfigError::InvalidValue("GAMEWEEK_SEASON_YEAR".to_string()))
            })
            .transpose()?;

        Ok(Config {
            debug: match lookup("GAMEWEEK_DEBUG") {
                Some(v) => matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"),
                None => false,
            },
            bot_token: required("GAMEWEEK_BOT_TOKEN")?,
            api_key: required("GAMEWEEK_API_KEY")?,
            state_path: lookup("GAMEWEEK_STATE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_PATH)),
            settings: Settings {
                guild_id: required("GAMEWEEK_GUILD")?,
                channel_id: required("GAMEWEEK_CHANNEL")?,
                league,
                timezone,
                season_year,
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
