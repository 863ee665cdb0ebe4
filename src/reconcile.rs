//! One reconciliation pass.
//!
//! Resolve the current game week, make sure its thread exists, post the
//! daily digest once per calendar day and a filler message when the thread
//! has gone quiet. The pass either completes and returns the new state or
//! stops at the first failing step; the caller only persists on success.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

use crate::calendar::{self, GameWeek};
use crate::chat::{Messenger, ThreadDirectory};
use crate::config::Settings;
use crate::digest::{self, DigestMessage};
use crate::error::{Error, Result, Step};
use crate::model::thread::{NewThread, ThreadHandle};
use crate::schedule::ScheduleProvider;
use crate::state::BotState;

/// What a pass did, for logging and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub week_number: u32,
    pub thread_id: Option<String>,
    pub not_started: bool,
    pub created_thread: bool,
    pub posted_digest: bool,
    pub digest_games: usize,
    pub posted_filler: bool,
}

impl Report {
    pub fn summary(&self) -> String {
        if self.not_started {
            return format!("Game week {} has not started yet", self.week_number);
        }
        let mut parts = vec![format!("Game week {}", self.week_number)];
        if self.created_thread {
            parts.push("thread created".to_string());
        }
        if self.posted_digest {
            parts.push(format!("digest posted ({} games)", self.digest_games));
        }
        if self.posted_filler {
            parts.push("filler posted".to_string());
        }
        if parts.len() == 1 {
            parts.push("nothing to do".to_string());
        }
        parts.join("; ")
    }
}

#[derive(Debug, Clone)]
pub struct Pass {
    pub state: BotState,
    pub report: Report,
}

/// The collaborators a pass talks to.
pub struct Reconciler<'a> {
    pub settings: &'a Settings,
    pub threads: &'a dyn ThreadDirectory,
    pub messenger: &'a dyn Messenger,
    pub schedule: &'a dyn ScheduleProvider,
}

impl Reconciler<'_> {
    #[instrument(level = "info", skip_all, fields(league = %self.settings.league.label))]
    pub fn run<R: Rng + ?Sized>(&self, mut state: BotState, now: DateTime<Utc>, rng: &mut R) -> Result<Pass> {
        let league = &self.settings.league;
        let today = now.with_timezone(&self.settings.timezone).date_naive();

        let weeks = calendar::generate_game_weeks(league.week1_start, league.week1_end);
        let week = calendar::resolve_current_week(&weeks, today).ok_or(Error::NoCurrentWeek(today))?;
        let mut report = Report { week_number: week.week_number, ..Report::default() };

        if league.preseason_guard && today < week.first_day {
            debug!(gw = week.week_number, first = %week.first_day, "Waiting for first day of week");
            report.not_started = true;
            return Ok(Pass { state, report });
        }
        debug!(gw = week.week_number, first = %week.first_day, last = %week.last_day, "Starting");

        state.season_year = self.season_year(&state);

        let thread = match self.find_thread(&week)? {
            Some(thread) => thread,
            None => {
                let thread = self.open_thread(&week)?;
                report.created_thread = true;
                state.last_activity = Some(now);
                thread
            }
        };
        report.thread_id = Some(thread.id.clone());

        if state.last_digest_day != Some(today) {
            report.digest_games = self.post_digest(&thread, &week, state.season_year, today)?;
            report.posted_digest = true;
            state.last_activity = Some(now);
            state.last_digest_day = Some(today);
        }

        if self.is_idle(&state, now) {
            let message = match state.filler_messages.choose(rng) {
                Some(m) => m.clone(),
                None => league.default_greeting(),
            };
            self.messenger.send_message(&thread.id, &message).map_err(Error::at(Step::Filler))?;
            info!(thread = %thread.id, "Sent filler message to thread");
            report.posted_filler = true;
            state.last_activity = Some(now);
        }

        Ok(Pass { state, report })
    }

    /// Configured override, else the stored year, else the year week 1 starts in.
    fn season_year(&self, state: &BotState) -> i32 {
        match self.settings.season_year {
            Some(year) => year,
            None if state.season_year != 0 => state.season_year,
            None => self.settings.league.week1_start.year(),
        }
    }

    fn find_thread(&self, week: &GameWeek) -> Result<Option<ThreadHandle>> {
        let name = week.thread_name(&self.settings.league.label);
        let threads = self
            .threads
            .list_active_threads(&self.settings.guild_id)
            .map_err(Error::at(Step::ListThreads))?;

        for thread in &threads {
            debug!(thread = %thread.id, name = %thread.name, channel = ?thread.parent_id, "Found thread");
        }
        Ok(threads
            .into_iter()
            .find(|t| t.parent_id.as_deref() == Some(self.settings.channel_id.as_str()) && t.name == name))
    }

    fn open_thread(&self, week: &GameWeek) -> Result<ThreadHandle> {
        let league = &self.settings.league;
        let request = NewThread::public(week.thread_name(&league.label));
        let thread = self
            .threads
            .create_thread(&self.settings.channel_id, &request)
            .map_err(Error::at(Step::CreateThread))?;
        self.messenger
            .send_message(&thread.id, league.welcome_message())
            .map_err(Error::at(Step::Welcome))?;
        info!(thread = %thread.id, name = %request.name, "Created thread");
        Ok(thread)
    }

    fn post_digest(&self, thread: &ThreadHandle, week: &GameWeek, year: i32, today: NaiveDate) -> Result<usize> {
        let league = &self.settings.league;
        let tz = self.settings.timezone;
        let games = self
            .schedule
            .games_on_day(year, week.week_number, today, tz)
            .map_err(Error::at(Step::FetchGames))?;

        let table = digest::render_table(&games, league.columns, tz);
        let sent = match DigestMessage::build(league, today, &table) {
            DigestMessage::Plain(text) => self.messenger.send_message(&thread.id, &text),
            DigestMessage::Embed(embed) => self.messenger.send_embed(&thread.id, &embed),
        };
        sent.map_err(Error::at(Step::Digest))?;

        info!(thread = %thread.id, games = games.len(), "Sent daily schedule to thread");
        Ok(games.len())
    }

    /// Quiet for strictly longer than the league's threshold, or never active.
    fn is_idle(&self, state: &BotState, now: DateTime<Utc>) -> bool {
        match state.last_activity {
            Some(last) => now - last > self.settings.league.idle_threshold,
            None => true,
        }
    }
}
