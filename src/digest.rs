//! Daily schedule digest.
//!
//! The table layout matches a tab writer with two spaces of padding: every
//! column but the last is padded to its widest cell, the last is left as is.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::config::{DigestColumns, DigestStyle, LeagueProfile};
use crate::model::embed::{Embed, EmbedFooter};
use crate::model::game::Game;

const PADDING: usize = 2;

pub fn render_table(games: &[Game], columns: DigestColumns, tz: Tz) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(games.len() + 1);
    rows.push(match columns {
        DigestColumns::AwayHome => vec!["AWAY".to_string(), "HOME".to_string()],
        DigestColumns::AwayHomeKickoff => vec!["AWAY".to_string(), "HOME".to_string(), "SCHEDULED".to_string()],
    });

    for game in games {
        let mut row = vec![game.away.name.clone(), game.home.name.clone()];
        if columns == DigestColumns::AwayHomeKickoff {
            let kickoff = game
                .scheduled_local(tz)
                .map(|dt| dt.format("%-I:%M %p %Z").to_string())
                .unwrap_or_default();
            row.push(kickoff);
        }
        rows.push(row);
    }

    let cells = rows[0].len();
    let mut widths = vec![0usize; cells];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            out.push_str(cell);
            if i + 1 < cells {
                let pad = widths[i] + PADDING - cell.chars().count();
                out.extend(std::iter::repeat_n(' ', pad));
            }
        }
        out.push('\n');
    }
    out
}

pub fn digest_title(today: NaiveDate) -> String {
    format!("Today's games {}.", today.format("%A, %b %-d"))
}

/// A rendered digest, ready for the messenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestMessage {
    Plain(String),
    Embed(Embed),
}

impl DigestMessage {
    pub fn build(league: &LeagueProfile, today: NaiveDate, table: &str) -> Self {
        let title = digest_title(today);
        match league.style {
            DigestStyle::Plain => DigestMessage::Plain(format!("{}\n```\n{}```", title, table)),
            DigestStyle::Embed => DigestMessage::Embed(Embed {
                title,
                description: format!("```\n{}\n```", table),
                url: Some(league.schedule_page_url.clone()),
                footer: Some(EmbedFooter { text: league.footer.clone() }),
            }),
        }
    }
}
