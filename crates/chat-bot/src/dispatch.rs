//! Message dispatch.
//!
//! Turns an inbound chat message into at most one command invocation.

use crate::commands::CommandContext;
use crate::registry::CommandRegistry;
use chat_client::{ChatConnection, ChatMessage};
use config_store::{ConfigResolver, StoreError};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// The configuration key holding the active command prefix.
const PREFIX_KEY: &str = "prefix";

pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    resolver: Arc<ConfigResolver>,
    chat: Arc<dyn ChatConnection>,
    bot_id: String,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<CommandRegistry>,
        resolver: Arc<ConfigResolver>,
        chat: Arc<dyn ChatConnection>,
        bot_id: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            resolver,
            chat,
            bot_id: bot_id.into(),
        }
    }

    /// Process one inbound message.
    pub async fn dispatch(&self, message: ChatMessage) {
        // Never respond to this bot or to other automated accounts.
        if message.author_id == self.bot_id || message.author_is_bot {
            return;
        }

        let prefix = match self.resolve_prefix(message.server_id.as_deref()).await {
            Ok(Some(prefix)) => prefix,
            Ok(None) => {
                debug!("No prefix configured; ignoring message");
                return;
            }
            Err(e) => {
                warn!("Prefix resolution failed: {}", e);
                return;
            }
        };

        let Some(rest) = message.text.strip_prefix(&prefix) else {
            // Not a command.
            return;
        };

        let tokens: Vec<String> = rest.split_whitespace().map(str::to_string).collect();
        let Some((first, args)) = tokens.split_first() else {
            return;
        };

        let name = first.to_lowercase();
        let Some(registration) = self.registry.lookup(&name) else {
            // Unknown commands are silently ignored.
            debug!("Unknown command: {}", name);
            return;
        };

        let ctx = CommandContext {
            message: &message,
            args,
            prefix: &prefix,
            registry: &self.registry,
            chat: self.chat.as_ref(),
        };

        if let Err(e) = registration.handler.run(&ctx).await {
            error!("Command {} failed: {}", name, e);
        }
    }

    /// Effective prefix for the message's origin: the server's prefix when
    /// one is set, else the application-level default. Direct messages
    /// have no server scope and use the application default directly.
    async fn resolve_prefix(&self, server_id: Option<&str>) -> Result<Option<String>, StoreError> {
        match server_id {
            Some(id) => self.resolver.get_server(id, PREFIX_KEY).await,
            None => self.resolver.get_application(PREFIX_KEY).await,
        }
    }
}
