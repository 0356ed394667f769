//! Help command - renders the command catalog and per-command docs.

use crate::commands::{Command, CommandContext};
use crate::error::AppResult;
use crate::registry::CommandSpec;
use async_trait::async_trait;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    async fn run(&self, ctx: &CommandContext<'_>) -> AppResult<()> {
        let text = match ctx.args {
            [name] => match ctx.registry.lookup(&name.to_lowercase()) {
                Some(registration) => detail(&registration.spec, ctx.prefix),
                // Unknown command names get no reply.
                None => return Ok(()),
            },
            _ => catalog(ctx),
        };

        // Help always goes to the author directly, wrapped in a code
        // block so padding survives rendering.
        ctx.reply_direct(&format!("```\n{}```", text)).await?;
        Ok(())
    }
}

/// Full documentation for one command, with the usage line interpolated
/// with the active prefix.
fn detail(spec: &CommandSpec, prefix: &str) -> String {
    format!(
        "{}\n{}\n\n{}\n\nUsage:\n    {}\n",
        spec.name,
        spec.summary,
        spec.description,
        spec.usage.replace("{prefix}", prefix),
    )
}

/// The catalog: every command in registration order, names padded to the
/// longest, each with its one-line summary.
fn catalog(ctx: &CommandContext<'_>) -> String {
    let padding = ctx
        .registry
        .iter()
        .map(|r| r.spec.name.len())
        .max()
        .unwrap_or(0);

    let mut text = format!("chat-bot v{}\n\nCommands:\n", VERSION);
    for registration in ctx.registry.iter() {
        text.push_str(&format!(
            "  {:<width$}  {}\n",
            registration.spec.name,
            registration.spec.summary,
            width = padding
        ));
    }
    text.push_str(&format!(
        "\nType {}help <command> for more info.\n",
        ctx.prefix
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_registry;
    use crate::test_util::{direct_message, memory_resolver, RecordingChat};
    use std::sync::Arc;
    use tokio::sync::watch;

    async fn run_help(args: &[String]) -> RecordingChat {
        let resolver = Arc::new(memory_resolver().await);
        let (shutdown, _) = watch::channel(false);
        let registry = build_registry(resolver, shutdown);

        let chat = RecordingChat::new();
        let msg = direct_message("user-42", "!help");
        let ctx = CommandContext {
            message: &msg,
            args,
            prefix: "!",
            registry: &registry,
            chat: &chat,
        };
        HelpCommand.run(&ctx).await.unwrap();
        chat
    }

    #[tokio::test]
    async fn test_catalog_lists_every_command_once_in_order() {
        let chat = run_help(&[]).await;
        let text = chat.last_direct().unwrap();

        let expected = ["hello", "m8b", "roll", "help", "prefix", "shutdown"];
        let mut last_index = 0;
        for name in expected {
            let line = format!("  {:<8}", name);
            assert_eq!(
                text.matches(&line).count(),
                1,
                "{} should appear exactly once",
                name
            );
            let index = text.find(&line).unwrap();
            assert!(index > last_index, "{} out of registration order", name);
            last_index = index;
        }

        assert!(text.contains("Type !help <command> for more info."));
        assert!(chat.sent.lock().unwrap().is_empty(), "catalog must go via DM");
    }

    #[tokio::test]
    async fn test_detail_interpolates_prefix() {
        let chat = run_help(&["roll".into()]).await;
        let text = chat.last_direct().unwrap();

        assert!(text.contains("roll\nRoll some dice."));
        assert!(text.contains("Usage:\n    !roll [NdS]"));
        assert!(!text.contains("{prefix}"));
    }

    #[tokio::test]
    async fn test_detail_lookup_is_case_folded() {
        let chat = run_help(&["RoLl".into()]).await;
        assert!(chat.last_direct().unwrap().contains("Roll some dice."));
    }

    #[tokio::test]
    async fn test_unknown_command_is_silent() {
        let chat = run_help(&["banana".into()]).await;
        assert!(chat.nothing_sent());
    }

    #[tokio::test]
    async fn test_extra_arguments_fall_back_to_catalog() {
        let chat = run_help(&["roll".into(), "hard".into()]).await;
        let text = chat.last_direct().unwrap();
        assert!(text.contains("Commands:"));
    }
}
