//! Hello command - a friendly greeting.

use crate::commands::{Command, CommandContext};
use crate::error::AppResult;
use async_trait::async_trait;
use rand::seq::SliceRandom;

const GREETINGS: &[&str] = &[
    "Ahoy", "Aloha", "Bonjour", "Ciao", "Hello", "Hiya", "Hola", "Howdy", "Konnichiwa",
];

pub struct HelloCommand;

#[async_trait]
impl Command for HelloCommand {
    async fn run(&self, ctx: &CommandContext<'_>) -> AppResult<()> {
        let greeting = *GREETINGS.choose(&mut rand::thread_rng()).unwrap_or(&"Hello");

        ctx.reply(&format!("{} <@{}>!", greeting, ctx.message.author_id))
            .await?;
        Ok(())
    }
}
