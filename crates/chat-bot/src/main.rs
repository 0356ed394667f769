//! Chat bot - main entry point.

mod commands;
mod config;
mod dispatch;
mod error;
mod registry;
#[cfg(test)]
mod test_util;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::AppResult;
use anyhow::Context;
use chat_client::{ChatConnection, GatewayClient, MessageReceiver};
use config_store::{ConfigResolver, ConfigStore};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::watch;
use tokio_stream::StreamExt;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting chat bot...");

    let store = ConfigStore::connect(&config.database.url).await?;
    let resolver = Arc::new(ConfigResolver::new(store));

    // Required application-level config; refuse to start without it.
    let token = resolver
        .get_application("token")
        .await?
        .context("Missing required application config: token")?;
    resolver
        .get_application("admin")
        .await?
        .context("Missing required application config: admin")?;

    let chat = GatewayClient::new(&config.gateway.service_url, &token)?;

    if !chat.health_check().await {
        error!(
            "Chat gateway not reachable at {}",
            config.gateway.service_url
        );
        return Err(anyhow::anyhow!("Chat gateway not reachable").into());
    }

    let me = chat.identity().await?;
    info!(
        "Connected as {} ({})",
        me.name.as_deref().unwrap_or("unknown"),
        me.id
    );

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let registry = Arc::new(commands::build_registry(resolver.clone(), shutdown_tx));

    info!("Registered {} commands:", registry.len());
    for registration in registry.iter() {
        info!("  [{}]", registration.spec.name);
    }

    let dispatcher = Arc::new(Dispatcher::new(
        registry,
        resolver,
        Arc::new(chat.clone()) as Arc<dyn ChatConnection>,
        me.id,
    ));

    // Start message receiver
    let receiver = MessageReceiver::new(chat.clone(), config.gateway.poll_interval);
    let mut stream = Box::pin(receiver.stream());

    info!("Listening for messages...");

    // Main message loop
    loop {
        tokio::select! {
            Some(message) = stream.next() => {
                // Fire and forget: each message is handled as an
                // independent task; ordering across messages is not
                // guaranteed.
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move {
                    dispatcher.dispatch(message).await;
                });
            }
            _ = shutdown_rx.changed() => {
                info!("Shutdown command received");
                break;
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    if let Err(e) = chat.disconnect().await {
        warn!("Disconnect failed: {}", e);
    }
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
