use serde::{Deserialize, Serialize};

/// Discord channel type for a public thread.
pub const PUBLIC_THREAD: u8 = 11;

/// Auto-archive after one day of inactivity, in minutes.
pub const ARCHIVE_ONE_DAY: u32 = 1440;

/// A thread channel as returned by the Discord API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadHandle {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

/// Body of `GET /guilds/{guild}/threads/active`.
#[derive(Debug, Deserialize)]
pub struct ActiveThreads {
    #[serde(default)]
    pub threads: Vec<ThreadHandle>,
}

/// Body of `POST /channels/{channel}/threads`.
#[derive(Debug, Clone, Serialize)]
pub struct NewThread {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub auto_archive_duration: u32,
}

impl NewThread {
    pub fn public(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PUBLIC_THREAD,
            auto_archive_duration: ARCHIVE_ONE_DAY,
        }
    }
}
