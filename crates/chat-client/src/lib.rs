//! Chat gateway REST API client.

mod client;
mod error;
mod receiver;
mod types;

pub use client::{ChatConnection, GatewayClient};
pub use error::ClientError;
pub use receiver::MessageReceiver;
pub use types::*;
