//! Game-week calendar.
//!
//! A season is 18 consecutive windows derived from the bounds of week 1.
//! Nothing here is persisted; the weeks are recomputed on every run.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

pub const WEEKS_PER_SEASON: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameWeek {
    pub week_number: u32,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl GameWeek {
    /// Name of the discussion thread for this week, e.g.
    /// `NFL Game Week 3 (Sep 23 - 28)` or `NFL Game Week 5 (Sep 30 - Oct  5)`.
    ///
    /// Days are space padded to two characters. This string is how an
    /// existing thread is found again on later runs, so it must not change
    /// for a given week.
    pub fn thread_name(&self, league: &str) -> String {
        let start = self.first_day.format("%b %e");
        let stop = if self.first_day.month() == self.last_day.month() {
            self.last_day.format("%e").to_string()
        } else {
            self.last_day.format("%b %e").to_string()
        };
        format!("{} Game Week {} ({} - {})", league, self.week_number, start, stop)
    }

    /// True when `at` lies strictly between the starts of `first_day` and `last_day`.
    pub fn time_in_week(&self, at: DateTime<Utc>) -> bool {
        let first = self.first_day.and_time(chrono::NaiveTime::MIN).and_utc();
        let last = self.last_day.and_time(chrono::NaiveTime::MIN).and_utc();
        at > first && at < last
    }
}

/// Build the 18 weeks of a season from the bounds of week 1.
pub fn generate_game_weeks(first_week_start: NaiveDate, first_week_end: NaiveDate) -> BTreeMap<u32, GameWeek> {
    let mut weeks = BTreeMap::new();
    let mut current = GameWeek {
        week_number: 1,
        first_day: first_week_start,
        last_day: first_week_end,
    };
    weeks.insert(1, current);

    for week_number in 2..=WEEKS_PER_SEASON {
        current = GameWeek {
            week_number,
            first_day: current.first_day + Duration::days(7),
            last_day: current.last_day + Duration::days(7),
        };
        weeks.insert(week_number, current);
    }

    weeks
}

/// First week (in week order) whose last day is after `today`.
///
/// Returns `None` once the season is over.
pub fn resolve_current_week(weeks: &BTreeMap<u32, GameWeek>, today: NaiveDate) -> Option<GameWeek> {
    weeks.values().find(|w| today < w.last_day).copied()
}
