//! Chat gateway wire types.

use serde::{Deserialize, Serialize};

/// Incoming gateway event.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub author: Author,
    pub server: Option<ServerInfo>,
    #[serde(rename = "channelId")]
    pub channel_id: String,
    pub content: Option<String>,
    pub timestamp: i64,
}

/// The account that authored an event.
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

/// Server context for events posted in server channels.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerInfo {
    pub id: String,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
}

/// Bot identity behind the configured token.
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: Option<String>,
}

/// Outgoing channel message request.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    #[serde(rename = "channelId")]
    pub channel_id: String,
    pub content: String,
}

/// Outgoing direct message request.
#[derive(Debug, Clone, Serialize)]
pub struct SendDirectRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub content: String,
}

/// Parsed message for bot processing.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Id of the account that sent the message.
    pub author_id: String,
    /// Display name of the author, when the gateway knows it.
    pub author_name: Option<String>,
    /// Whether the author is an automated account.
    pub author_is_bot: bool,
    /// Server the message was posted in, absent for direct messages.
    pub server_id: Option<String>,
    /// Owner of the originating server, absent for direct messages.
    pub server_owner_id: Option<String>,
    /// Channel the message arrived on.
    pub channel_id: String,
    /// The message text.
    pub text: String,
    /// Message timestamp.
    pub timestamp: i64,
}

impl ChatMessage {
    /// Extract a bot message from an incoming event. Events without text
    /// content (joins, attachments, reactions) are dropped.
    pub fn from_incoming(msg: &IncomingMessage) -> Option<Self> {
        let text = msg.content.clone()?;

        Some(Self {
            author_id: msg.author.id.clone(),
            author_name: msg.author.name.clone(),
            author_is_bot: msg.author.bot,
            server_id: msg.server.as_ref().map(|s| s.id.clone()),
            server_owner_id: msg.server.as_ref().map(|s| s.owner_id.clone()),
            channel_id: msg.channel_id.clone(),
            text,
            timestamp: msg.timestamp,
        })
    }

    /// Whether the message arrived in a direct-message channel.
    pub fn is_direct(&self) -> bool {
        self.server_id.is_none()
    }
}
