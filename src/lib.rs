pub mod calendar;
pub mod chat;
pub mod config;
pub mod digest;
pub mod discord;
pub mod error;
pub mod http;
pub mod model;
pub mod reconcile;
pub mod schedule;
pub mod sportradar;
pub mod state;
