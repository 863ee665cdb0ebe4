use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::error::ApiError;
use crate::model::game::Game;
use crate::model::schedule::WeekSchedule;

/// Source of a league's weekly schedule.
pub trait ScheduleProvider {
    fn week_schedule(&self, year: i32, week: u32) -> Result<WeekSchedule, ApiError>;

    /// Games of `week` whose local kickoff date in `tz` is `day`.
    fn games_on_day(&self, year: i32, week: u32, day: NaiveDate, tz: Tz) -> Result<Vec<Game>, ApiError> {
        let schedule = self.week_schedule(year, week)?;
        Ok(games_on_day(schedule.week.games, day, tz))
    }
}

/// Keep the games that kick off on `day` in `tz`, in schedule order.
///
/// Games whose kickoff cannot be parsed never match.
pub fn games_on_day(games: Vec<Game>, day: NaiveDate, tz: Tz) -> Vec<Game> {
    games
        .into_iter()
        .filter(|g| g.scheduled_local(tz).is_some_and(|local| local.date_naive() == day))
        .collect()
}
