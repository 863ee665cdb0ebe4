use crate::error::ApiError;
use crate::model::embed::Embed;
use crate::model::thread::{NewThread, ThreadHandle};

/// Lists and creates discussion threads.
pub trait ThreadDirectory {
    fn list_active_threads(&self, guild_id: &str) -> Result<Vec<ThreadHandle>, ApiError>;

    fn create_thread(&self, parent_id: &str, thread: &NewThread) -> Result<ThreadHandle, ApiError>;
}

/// Posts messages into a thread.
pub trait Messenger {
    fn send_message(&self, thread_id: &str, content: &str) -> Result<(), ApiError>;

    fn send_embed(&self, thread_id: &str, embed: &Embed) -> Result<(), ApiError>;
}
