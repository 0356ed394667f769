//! Shutdown command - clean termination, admin only.

use crate::commands::{Command, CommandContext};
use crate::error::AppResult;
use async_trait::async_trait;
use config_store::ConfigResolver;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

pub struct ShutdownCommand {
    resolver: Arc<ConfigResolver>,
    shutdown: watch::Sender<bool>,
}

impl ShutdownCommand {
    pub fn new(resolver: Arc<ConfigResolver>, shutdown: watch::Sender<bool>) -> Self {
        Self { resolver, shutdown }
    }
}

#[async_trait]
impl Command for ShutdownCommand {
    async fn run(&self, ctx: &CommandContext<'_>) -> AppResult<()> {
        let admin = self.resolver.get_application("admin").await?;
        if admin.as_deref() != Some(ctx.message.author_id.as_str()) {
            return Ok(());
        }

        info!("Shutdown requested by {}", ctx.message.author_id);
        // The main loop tears down the gateway connection on receipt.
        let _ = self.shutdown.send(true);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CommandRegistry;
    use crate::test_util::{direct_message, memory_resolver, RecordingChat};

    async fn run_shutdown(resolver: Arc<ConfigResolver>, author: &str) -> watch::Receiver<bool> {
        let (tx, rx) = watch::channel(false);
        let registry = CommandRegistry::new();
        let chat = RecordingChat::new();
        let msg = direct_message(author, "!shutdown");
        let ctx = CommandContext {
            message: &msg,
            args: &[],
            prefix: "!",
            registry: &registry,
            chat: &chat,
        };

        ShutdownCommand::new(resolver, tx).run(&ctx).await.unwrap();
        rx
    }

    #[tokio::test]
    async fn test_admin_triggers_shutdown() {
        let resolver = Arc::new(memory_resolver().await);
        resolver.set_application("admin", "user-1").await.unwrap();

        let rx = run_shutdown(resolver, "user-1").await;
        assert!(*rx.borrow());
    }

    #[tokio::test]
    async fn test_non_admin_is_ignored() {
        let resolver = Arc::new(memory_resolver().await);
        resolver.set_application("admin", "user-1").await.unwrap();

        let rx = run_shutdown(resolver, "user-42").await;
        assert!(!*rx.borrow());
    }

    #[tokio::test]
    async fn test_unconfigured_admin_never_matches() {
        let resolver = Arc::new(memory_resolver().await);

        let rx = run_shutdown(resolver, "user-1").await;
        assert!(!*rx.borrow());
    }
}
