//! Shared test doubles and fixtures.

use async_trait::async_trait;
use chat_client::{ChatConnection, ChatMessage, ClientError};
use config_store::{ConfigResolver, ConfigStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Chat connection double that records everything sent through it.
#[derive(Default)]
pub struct RecordingChat {
    pub sent: Mutex<Vec<(String, String)>>,
    pub direct: Mutex<Vec<(String, String)>>,
    pub disconnected: AtomicBool,
}

impl RecordingChat {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last in-channel reply, if any.
    pub fn last_reply(&self) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .last()
            .map(|(_, text)| text.clone())
    }

    /// The last direct message, if any.
    pub fn last_direct(&self) -> Option<String> {
        self.direct
            .lock()
            .unwrap()
            .last()
            .map(|(_, text)| text.clone())
    }

    pub fn nothing_sent(&self) -> bool {
        self.sent.lock().unwrap().is_empty() && self.direct.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl ChatConnection for RecordingChat {
    async fn send(&self, channel_id: &str, text: &str) -> Result<(), ClientError> {
        self.sent
            .lock()
            .unwrap()
            .push((channel_id.into(), text.into()));
        Ok(())
    }

    async fn send_direct(&self, user_id: &str, text: &str) -> Result<(), ClientError> {
        self.direct
            .lock()
            .unwrap()
            .push((user_id.into(), text.into()));
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), ClientError> {
        self.disconnected.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// A message posted in a server channel.
pub fn server_message(author_id: &str, server_id: &str, owner_id: &str, text: &str) -> ChatMessage {
    ChatMessage {
        author_id: author_id.into(),
        author_name: None,
        author_is_bot: false,
        server_id: Some(server_id.into()),
        server_owner_id: Some(owner_id.into()),
        channel_id: "channel-1".into(),
        text: text.into(),
        timestamp: 0,
    }
}

/// A message sent directly to the bot.
pub fn direct_message(author_id: &str, text: &str) -> ChatMessage {
    ChatMessage {
        author_id: author_id.into(),
        author_name: None,
        author_is_bot: false,
        server_id: None,
        server_owner_id: None,
        channel_id: "dm-1".into(),
        text: text.into(),
        timestamp: 0,
    }
}

/// An in-memory resolver for handler tests.
pub async fn memory_resolver() -> ConfigResolver {
    let store = ConfigStore::connect("sqlite::memory:").await.unwrap();
    ConfigResolver::new(store)
}
