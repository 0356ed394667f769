//! Bot command handlers.

mod hello;
mod help;
mod m8b;
mod prefix;
mod roll;
mod shutdown;

pub use hello::HelloCommand;
pub use help::HelpCommand;
pub use m8b::EightBallCommand;
pub use prefix::PrefixCommand;
pub use roll::RollCommand;
pub use shutdown::ShutdownCommand;

use crate::error::AppResult;
use crate::registry::{CommandRegistry, CommandSpec};
use async_trait::async_trait;
use chat_client::{ChatConnection, ChatMessage, ClientError};
use config_store::ConfigResolver;
use std::sync::Arc;
use tokio::sync::watch;

/// Everything a handler receives for one invocation.
pub struct CommandContext<'a> {
    /// The inbound message that triggered the command.
    pub message: &'a ChatMessage,
    /// Tokens following the command name.
    pub args: &'a [String],
    /// The prefix the message was invoked with.
    pub prefix: &'a str,
    /// The full registry, for the help catalog.
    pub registry: &'a CommandRegistry,
    /// Outbound side of the chat connection.
    pub chat: &'a dyn ChatConnection,
}

impl CommandContext<'_> {
    /// Reply in the channel the message arrived on.
    pub async fn reply(&self, text: &str) -> Result<(), ClientError> {
        self.chat.send(&self.message.channel_id, text).await
    }

    /// Reply directly to the author.
    pub async fn reply_direct(&self, text: &str) -> Result<(), ClientError> {
        self.chat.send_direct(&self.message.author_id, text).await
    }
}

/// The unit of logic bound to a command name.
///
/// Handlers absorb their own validation failures: bad arguments or an
/// unauthorized caller mean returning `Ok(())` without a reply.
#[async_trait]
pub trait Command: Send + Sync {
    async fn run(&self, ctx: &CommandContext<'_>) -> AppResult<()>;
}

/// Build the command registry from the static command list.
///
/// This runs once at startup; the registry is read-only afterwards.
pub fn build_registry(
    resolver: Arc<ConfigResolver>,
    shutdown: watch::Sender<bool>,
) -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register(
        CommandSpec {
            name: "hello",
            summary: "A friendly greeting.",
            description: "Say hello to the bot and it says hello back to you!",
            usage: "{prefix}hello",
        },
        Arc::new(HelloCommand),
    );

    registry.register(
        CommandSpec {
            name: "m8b",
            summary: "Ask the Magic 8-Ball.",
            description: "The Magic 8-Ball makes all your hard decisions easy!",
            usage: "{prefix}m8b [your yes/no question]",
        },
        Arc::new(EightBallCommand),
    );

    registry.register(
        CommandSpec {
            name: "roll",
            summary: "Roll some dice.",
            description: "Rolls dice in NdS notation: N dice (1-20) with S \
                          sides (2-100) each. With no argument a single \
                          20-sided die is rolled.",
            usage: "{prefix}roll [NdS]",
        },
        Arc::new(RollCommand),
    );

    registry.register(
        CommandSpec {
            name: "help",
            summary: "Displays help messages.",
            description: "Call with no arguments to get a list of available \
                          commands, or call with a command as an argument to \
                          get additional information about that command.\n\n\
                          Optional arguments are enclosed in [square \
                          brackets], required arguments in <angle brackets>.",
            usage: "{prefix}help [command]",
        },
        Arc::new(HelpCommand),
    );

    registry.register(
        CommandSpec {
            name: "prefix",
            summary: "Change the bot's prefix.",
            description: "If you are the owner of this server, you can change \
                          the prefix used by the bot. The new prefix must be \
                          at least 2 characters long.\n\nThis command is only \
                          supported in server channels, it is ignored in \
                          direct messages.",
            usage: "{prefix}prefix <new prefix>",
        },
        Arc::new(PrefixCommand::new(resolver.clone())),
    );

    registry.register(
        CommandSpec {
            name: "shutdown",
            summary: "Shut down the bot.",
            description: "The admin of the bot can use this command to \
                          perform a clean shutdown.",
            usage: "{prefix}shutdown",
        },
        Arc::new(ShutdownCommand::new(resolver, shutdown)),
    );

    registry
}
