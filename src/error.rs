use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::ConfigError;

/// Failure talking to the schedule API or the chat platform.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status code: {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// The step of a reconciliation pass that a collaborator error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ListThreads,
    CreateThread,
    Welcome,
    FetchGames,
    Digest,
    Filler,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::ListThreads => "get active threads",
            Step::CreateThread => "create thread",
            Step::Welcome => "send welcome message",
            Step::FetchGames => "get games",
            Step::Digest => "send daily schedule",
            Step::Filler => "send filler message",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read state from {}: {source}", path.display())]
    StateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode state at {}: {source}", path.display())]
    StateDecode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write state to {}: {source}", path.display())]
    StateWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no current week found for {0}")]
    NoCurrentWeek(NaiveDate),

    #[error("failed to {step}: {source}")]
    Collaborator { step: Step, source: ApiError },
}

impl Error {
    pub fn at(step: Step) -> impl FnOnce(ApiError) -> Error {
        move |source| Error::Collaborator { step, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
