use tracing::{info, instrument};

use crate::chat::{Messenger, ThreadDirectory};
use crate::error::ApiError;
use crate::http;
use crate::model::embed::{Embed, OutgoingMessage};
use crate::model::thread::{ActiveThreads, NewThread, ThreadHandle};

const API_BASE: &str = "https://discord.com/api/v10";

/// Discord REST client authenticated as a bot.
#[derive(Clone)]
pub struct Discord {
    auth_header: String,
    base_url: String,
    agent: ureq::Agent,
}

impl std::fmt::Debug for Discord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Discord").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl Discord {
    /// Create a new Discord client with the provided bot token.
    pub fn new(bot_token: &str) -> Self {
        Self::with_base_url(bot_token, API_BASE)
    }

    pub fn with_base_url(bot_token: &str, base_url: impl Into<String>) -> Self {
        Self {
            auth_header: format!("Bot {}", bot_token),
            base_url: base_url.into(),
            agent: http::agent(),
        }
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Decode the body of the active threads listing.
    pub fn parse_active_threads(body: &str) -> Result<Vec<ThreadHandle>, ApiError> {
        http::decode::<ActiveThreads>(body).map(|a| a.threads)
    }

    pub fn parse_thread(body: &str) -> Result<ThreadHandle, ApiError> {
        http::decode(body)
    }

    fn post_message(&self, thread_id: &str, message: &OutgoingMessage<'_>) -> Result<(), ApiError> {
        let url = self.api_url(&format!("/channels/{}/messages", thread_id));
        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.auth_header)
            .send_json(message);
        http::read_body(response)?;
        Ok(())
    }
}

impl ThreadDirectory for Discord {
    #[instrument(level = "info", skip(self))]
    fn list_active_threads(&self, guild_id: &str) -> Result<Vec<ThreadHandle>, ApiError> {
        let url = self.api_url(&format!("/guilds/{}/threads/active", guild_id));
        let response = self.agent.get(&url).header("Authorization", &self.auth_header).call();
        let body = http::read_body(response)?;
        let threads = Self::parse_active_threads(&body)?;
        info!(count = threads.len(), "Listed active threads");
        Ok(threads)
    }

    #[instrument(level = "info", skip(self, thread), fields(name = %thread.name))]
    fn create_thread(&self, parent_id: &str, thread: &NewThread) -> Result<ThreadHandle, ApiError> {
        let url = self.api_url(&format!("/channels/{}/threads", parent_id));
        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.auth_header)
            .send_json(thread);
        let body = http::read_body(response)?;
        let created = Self::parse_thread(&body)?;
        info!(thread = %created.id, "Created thread");
        Ok(created)
    }
}

impl Messenger for Discord {
    #[instrument(level = "info", skip(self, content), fields(len = content.len()))]
    fn send_message(&self, thread_id: &str, content: &str) -> Result<(), ApiError> {
        self.post_message(thread_id, &OutgoingMessage::text(content))?;
        info!("Posted message to thread");
        Ok(())
    }

    #[instrument(level = "info", skip(self, embed), fields(title = %embed.title))]
    fn send_embed(&self, thread_id: &str, embed: &Embed) -> Result<(), ApiError> {
        self.post_message(thread_id, &OutgoingMessage::embed(embed))?;
        info!("Posted embed to thread");
        Ok(())
    }
}
