//! Dice roll command.

use crate::commands::{Command, CommandContext};
use crate::error::AppResult;
use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

const MAX_DICE: u32 = 20;
const MAX_SIDES: u32 = 100;

/// Parse an `NdS` token. Returns `None` when the token is malformed or
/// out of range (N in 1..=20, S in 2..=100).
fn parse_roll(token: &str) -> Option<(u32, u32)> {
    let (count, sides) = token.split_once('d')?;
    let count: u32 = count.parse().ok()?;
    let sides: u32 = sides.parse().ok()?;

    if !(1..=MAX_DICE).contains(&count) || !(2..=MAX_SIDES).contains(&sides) {
        return None;
    }
    Some((count, sides))
}

pub struct RollCommand;

#[async_trait]
impl Command for RollCommand {
    async fn run(&self, ctx: &CommandContext<'_>) -> AppResult<()> {
        let (count, sides) = match ctx.args.first() {
            // No argument means a single 20-sided die.
            None => (1, 20),
            Some(token) => match parse_roll(token) {
                Some(parsed) => parsed,
                None => {
                    debug!("Ignoring malformed roll argument: {}", token);
                    return Ok(());
                }
            },
        };

        let rolls: Vec<u32> = {
            let mut rng = rand::thread_rng();
            (0..count).map(|_| rng.gen_range(1..=sides)).collect()
        };

        let shown = rolls
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let reply = if count > 1 {
            let total: u32 = rolls.iter().sum();
            format!(
                "<@{}> rolled {}d{}: {} (total {})",
                ctx.message.author_id, count, sides, shown, total
            )
        } else {
            format!("<@{}> rolled 1d{}: {}", ctx.message.author_id, sides, shown)
        };

        ctx.reply(&reply).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CommandRegistry;
    use crate::test_util::{server_message, RecordingChat};

    #[test]
    fn test_parse_roll_valid() {
        assert_eq!(parse_roll("3d6"), Some((3, 6)));
        assert_eq!(parse_roll("1d2"), Some((1, 2)));
        assert_eq!(parse_roll("20d100"), Some((20, 100)));
    }

    #[test]
    fn test_parse_roll_out_of_range() {
        assert_eq!(parse_roll("0d6"), None);
        assert_eq!(parse_roll("21d6"), None);
        assert_eq!(parse_roll("3d1"), None);
        assert_eq!(parse_roll("3d101"), None);
    }

    #[test]
    fn test_parse_roll_malformed() {
        assert_eq!(parse_roll("d6"), None);
        assert_eq!(parse_roll("3d"), None);
        assert_eq!(parse_roll("3x6"), None);
        assert_eq!(parse_roll("3d6d7"), None);
        assert_eq!(parse_roll("-3d6"), None);
        assert_eq!(parse_roll(""), None);
    }

    async fn run_roll(args: &[String]) -> RecordingChat {
        let registry = CommandRegistry::new();
        let chat = RecordingChat::new();
        let msg = server_message("user-42", "server-7", "user-1", "!roll");
        let ctx = CommandContext {
            message: &msg,
            args,
            prefix: "!",
            registry: &registry,
            chat: &chat,
        };
        RollCommand.run(&ctx).await.unwrap();
        chat
    }

    #[tokio::test]
    async fn test_roll_default_is_one_d20() {
        // Repeat: the reply must always report a value in [1, 20].
        for _ in 0..50 {
            let chat = run_roll(&[]).await;
            let reply = chat.last_reply().unwrap();

            let value: u32 = reply
                .rsplit_once(": ")
                .and_then(|(_, v)| v.parse().ok())
                .unwrap();
            assert!(reply.contains("rolled 1d20:"));
            assert!((1..=20).contains(&value));
        }
    }

    #[tokio::test]
    async fn test_roll_reports_each_die_and_total() {
        for _ in 0..50 {
            let chat = run_roll(&["5d10".into()]).await;
            let reply = chat.last_reply().unwrap();

            let (_, rest) = reply.split_once("rolled 5d10: ").unwrap();
            let (dice, total) = rest.split_once(" (total ").unwrap();
            let rolls: Vec<u32> = dice.split(", ").map(|v| v.parse().unwrap()).collect();
            let total: u32 = total.trim_end_matches(')').parse().unwrap();

            assert_eq!(rolls.len(), 5);
            assert!(rolls.iter().all(|v| (1..=10).contains(v)));
            assert_eq!(total, rolls.iter().sum::<u32>());
        }
    }

    #[tokio::test]
    async fn test_roll_malformed_is_silent() {
        let chat = run_roll(&["banana".into()]).await;
        assert!(chat.nothing_sent());

        let chat = run_roll(&["99d99".into()]).await;
        assert!(chat.nothing_sent());
    }
}
