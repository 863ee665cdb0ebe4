pub mod embed;
pub mod game;
pub mod schedule;
pub mod thread;
