//! Prefix command - changes a server's command prefix.

use crate::commands::{Command, CommandContext};
use crate::error::AppResult;
use async_trait::async_trait;
use config_store::ConfigResolver;
use std::sync::Arc;
use tracing::info;

pub struct PrefixCommand {
    resolver: Arc<ConfigResolver>,
}

impl PrefixCommand {
    pub fn new(resolver: Arc<ConfigResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl Command for PrefixCommand {
    async fn run(&self, ctx: &CommandContext<'_>) -> AppResult<()> {
        // Server channels only; ignored in direct messages.
        let (Some(server_id), Some(owner_id)) = (
            ctx.message.server_id.as_deref(),
            ctx.message.server_owner_id.as_deref(),
        ) else {
            return Ok(());
        };

        // Only the server's owner may change its prefix.
        if ctx.message.author_id != owner_id {
            return Ok(());
        }

        let [new_prefix] = ctx.args else {
            return Ok(());
        };
        if new_prefix.chars().count() < 2 {
            return Ok(());
        }

        self.resolver
            .set_server(server_id, "prefix", new_prefix)
            .await?;
        info!("Prefix for server {} changed to {}", server_id, new_prefix);

        ctx.reply(&format!("My prefix has been changed to {}.", new_prefix))
            .await?;
        Ok(())
    }
}
