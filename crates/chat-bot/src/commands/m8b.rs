//! Magic 8-Ball command.

use crate::commands::{Command, CommandContext};
use crate::error::AppResult;
use async_trait::async_trait;
use rand::seq::SliceRandom;

// The twenty classic answers.
const ANSWERS: &[&str] = &[
    "It is certain.",
    "It is decidedly so.",
    "Without a doubt.",
    "Yes - definitely.",
    "You may rely on it.",
    "As I see it, yes.",
    "Most likely.",
    "Outlook good.",
    "Yes.",
    "Signs point to yes.",
    "Reply hazy, try again.",
    "Ask again later.",
    "Better not tell you now.",
    "Cannot predict now.",
    "Concentrate and ask again.",
    "Don't count on it.",
    "My reply is no.",
    "My sources say no.",
    "Outlook not so good.",
    "Very doubtful.",
];

pub struct EightBallCommand;

#[async_trait]
impl Command for EightBallCommand {
    async fn run(&self, ctx: &CommandContext<'_>) -> AppResult<()> {
        let answer = *ANSWERS
            .choose(&mut rand::thread_rng())
            .unwrap_or(&"Ask again later.");

        ctx.reply(&format!(
            "<@{}>, the magic 8-ball says:\n> {}",
            ctx.message.author_id, answer
        ))
        .await?;
        Ok(())
    }
}
