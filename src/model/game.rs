use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub number: Option<i64>,
    /// Local wall-clock kickoff with offset, e.g. `2021-09-12T13:00:00-04:00`.
    pub scheduled: String,
    #[serde(default)]
    pub attendance: Option<i64>,
    #[serde(default)]
    pub utc_offset: i64,
    #[serde(default)]
    pub entry_mode: Option<String>,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub sr_id: Option<String>,
    #[serde(default)]
    pub venue: Option<Venue>,
    pub home: TeamRef,
    pub away: TeamRef,
    #[serde(default)]
    pub scoring: Option<Scoring>,
    #[serde(default)]
    pub broadcast: Option<Broadcast>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub game_number: Option<i64>,
    #[serde(default)]
    pub sr_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<i64>,
    pub surface: Option<String>,
    pub roof_type: Option<String>,
    pub sr_id: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoring {
    #[serde(default)]
    pub home_points: i64,
    #[serde(default)]
    pub away_points: i64,
    #[serde(default)]
    pub periods: Vec<Period>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Period {
    pub period_type: String,
    pub id: String,
    pub number: i64,
    pub sequence: i64,
    pub home_points: i64,
    pub away_points: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Broadcast {
    pub network: Option<String>,
    pub satellite: Option<String>,
    pub internet: Option<String>,
}

impl Game {
    /// Kickoff as a UTC instant.
    ///
    /// The wall-clock fields of `scheduled` are shifted by `utc_offset` hours
    /// and then read as UTC, so `13:00-04:00` with an offset of `-4` gives
    /// `09:00Z` rather than the ISO-8601 `17:00Z`. Digests have always been
    /// rendered from this value; keep it until the league owners confirm
    /// the ISO reading.
    pub fn scheduled_utc(&self) -> Option<DateTime<Utc>> {
        let parsed = DateTime::parse_from_str(&self.scheduled, "%Y-%m-%dT%H:%M:%S%:z").ok()?;
        let shifted = parsed.naive_local() + Duration::hours(self.utc_offset);
        Some(Utc.from_utc_datetime(&shifted))
    }

    /// [`Game::scheduled_utc`] shown in the display time zone.
    pub fn scheduled_local(&self, tz: Tz) -> Option<DateTime<Tz>> {
        self.scheduled_utc().map(|dt| dt.with_timezone(&tz))
    }
}
