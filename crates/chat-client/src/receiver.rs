//! Message receiver with polling.

use crate::client::GatewayClient;
use crate::types::*;
use std::time::Duration;
use tokio::time::sleep;
use tokio_stream::Stream;
use tracing::{debug, error};

/// Message receiver that polls the gateway for new messages.
pub struct MessageReceiver {
    client: GatewayClient,
    poll_interval: Duration,
}

/// Truncate to at most `max` characters for log output. Cutting on a
/// char boundary matters: a byte index can land inside a multibyte
/// character and panic the slice.
fn log_preview(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl MessageReceiver {
    /// Create a new message receiver.
    pub fn new(client: GatewayClient, poll_interval: Duration) -> Self {
        Self {
            client,
            poll_interval,
        }
    }

    /// Start receiving messages as an async stream.
    pub fn stream(self) -> impl Stream<Item = ChatMessage> {
        async_stream::stream! {
            loop {
                match self.client.receive().await {
                    Ok(messages) => {
                        for msg in messages {
                            if let Some(chat_msg) = ChatMessage::from_incoming(&msg) {
                                debug!("Received: {} from {}",
                                    log_preview(&chat_msg.text, 50),
                                    chat_msg.author_id
                                );
                                yield chat_msg;
                            }
                        }
                    }
                    Err(e) => {
                        error!("Receive error: {}", e);
                        // Back off on error
                        sleep(Duration::from_secs(5)).await;
                        continue;
                    }
                }

                sleep(self.poll_interval).await;
            }
        }
    }
}
