//! Chat backend integration layer: the client contract the orchestrators
//! drive, plus an in-process sandbox backend.

mod sandbox;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    channel::{ChannelSummary, NewChannel},
    message::ChatMessage,
    user::ChatUser,
};

pub use sandbox::SandboxChatClient;

pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// Failure reported by the chat backend. The message is optional because
/// the backend does not always describe what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or(UNKNOWN_ERROR))]
pub struct ChatError {
    message: Option<String>,
}

impl ChatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn without_message() -> Self {
        Self { message: None }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Human-readable description, falling back to a generic text.
    pub fn description(&self) -> &str {
        self.message().unwrap_or(UNKNOWN_ERROR)
    }
}

/// Operations consumed from the managed chat backend.
///
/// Every call completes asynchronously; the completion may resume on a
/// different worker thread than the one that issued it.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Connects a registered user authenticated by `token`.
    async fn connect_user(&self, user: &ChatUser, token: &str) -> Result<(), ChatError>;

    /// Connects an anonymous guest user.
    async fn connect_guest_user(&self, user_id: &str, username: &str) -> Result<(), ChatError>;

    async fn create_channel(&self, channel: &NewChannel) -> Result<ChannelSummary, ChatError>;

    /// Lists channels visible to the connected user whose type is one of `types`.
    async fn query_channels(&self, types: &[&str]) -> Result<Vec<ChannelSummary>, ChatError>;

    /// Returns at most `limit` of the newest messages in `cid`, oldest first.
    async fn query_messages(
        &self,
        cid: &str,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, ChatError>;

    /// Posts `text` to `cid` as the connected user.
    async fn send_message(&self, cid: &str, text: &str) -> Result<ChatMessage, ChatError>;

    async fn disconnect(&self);
}

/// Returns the chat module name for smoke checks.
pub fn module_name() -> &'static str {
    "chat"
}
