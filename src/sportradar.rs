use tracing::{info, info_span, instrument};

use crate::error::ApiError;
use crate::http;
use crate::model::schedule::WeekSchedule;
use crate::schedule::ScheduleProvider;

/// Client for the Sportradar weekly schedule endpoint.
#[derive(Clone)]
pub struct Sportradar {
    base_url: String,
    api_key: String,
    agent: ureq::Agent,
}

impl std::fmt::Debug for Sportradar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sportradar").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl Sportradar {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            agent: http::agent(),
        }
    }

    pub fn schedule_url(&self, year: i32, week: u32) -> String {
        format!(
            "{}/games/{}/REG/{}/schedule.json?api_key={}",
            self.base_url, year, week, self.api_key
        )
    }

    /// Parse a week schedule from a raw JSON response body (no network).
    pub fn parse_week_schedule(body: &str) -> Result<WeekSchedule, ApiError> {
        http::decode(body)
    }
}

impl ScheduleProvider for Sportradar {
    #[instrument(level = "info", skip(self))]
    fn week_schedule(&self, year: i32, week: u32) -> Result<WeekSchedule, ApiError> {
        let url = self.schedule_url(year, week);
        let response = {
            // Only the path goes into the span; the query carries the key.
            let path = url.split('?').next().unwrap_or_default();
            let _span = info_span!("schedule_fetch", url = %path).entered();
            self.agent.get(&url).call()
        };
        let body = http::read_body(response)?;
        let schedule = Self::parse_week_schedule(&body)?;
        info!(games = schedule.week.games.len(), title = %schedule.week.title, "Fetched week schedule");
        Ok(schedule)
    }
}
