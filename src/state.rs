//! State carried between runs.
//!
//! One JSON document on local disk. A missing file is a fresh start; any
//! other read or decode failure is fatal. There is no locking: two runs
//! against the same file race and the last writer wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotState {
    pub last_activity: Option<DateTime<Utc>>,
    pub last_digest_day: Option<NaiveDate>,
    pub season_year: i32,
    pub filler_messages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<BotState> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no state file, starting fresh");
                return Ok(BotState::default());
            }
            Err(source) => {
                return Err(Error::StateRead { path: self.path.clone(), source });
            }
        };
        serde_json::from_str(&json).map_err(|source| Error::StateDecode { path: self.path.clone(), source })
    }

    #[instrument(level = "debug", skip(self, state), fields(path = %self.path.display()))]
    pub fn save(&self, state: &BotState) -> Result<()> {
        let json = serde_json::to_string_pretty(state).map_err(|e| Error::StateWrite {
            path: self.path.clone(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;
        fs::write(&self.path, json).map_err(|source| Error::StateWrite { path: self.path.clone(), source })
    }
}
