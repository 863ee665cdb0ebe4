use serde::{Deserialize, Serialize};

use crate::model::game::Game;

/// Body of `GET /games/{year}/REG/{week}/schedule.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub id: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default, rename = "type")]
    pub type_field: String,
    #[serde(default)]
    pub name: String,
    pub week: Week,
    #[serde(default, rename = "_comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Week {
    pub id: String,
    #[serde(default)]
    pub sequence: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub games: Vec<Game>,
}
