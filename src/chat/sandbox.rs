use std::{
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use async_trait::async_trait;

use crate::{
    chat::{ChatClient, ChatError},
    domain::{
        channel::{ChannelSummary, NewChannel},
        message::ChatMessage,
        user::ChatUser,
    },
    infra::config::SandboxConfig,
};

const SANDBOX_CONNECTED: &str = "SANDBOX_CONNECTED";
const SANDBOX_CONNECT_REJECTED: &str = "SANDBOX_CONNECT_REJECTED";
const SANDBOX_CHANNEL_CREATED: &str = "SANDBOX_CHANNEL_CREATED";
const SANDBOX_MESSAGE_SENT: &str = "SANDBOX_MESSAGE_SENT";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Session {
    Registered { user_id: String },
    Guest { user_id: String },
}

impl Session {
    fn user_id(&self) -> &str {
        match self {
            Self::Registered { user_id } | Self::Guest { user_id } => user_id,
        }
    }
}

#[derive(Debug, Default)]
struct SandboxState {
    session: Option<Session>,
    channels: Vec<ChannelSummary>,
    messages: Vec<ChatMessage>,
}

impl SandboxState {
    fn connected_user_id(&self) -> Result<&str, ChatError> {
        self.session
            .as_ref()
            .map(Session::user_id)
            .ok_or_else(|| ChatError::new("user not connected"))
    }

    fn ensure_channel(&self, cid: &str) -> Result<(), ChatError> {
        if self.channels.iter().any(|channel| channel.cid == cid) {
            Ok(())
        } else {
            Err(ChatError::new(format!("channel {cid} not found")))
        }
    }
}

/// In-process stand-in for the managed chat backend.
///
/// Keeps connected user, created channels and their messages in memory for the lifetime of
/// the process and optionally delays every call to mimic network latency.
#[derive(Debug)]
pub struct SandboxChatClient {
    latency: Duration,
    accepted_token: Option<String>,
    state: Mutex<SandboxState>,
}

impl SandboxChatClient {
    pub fn new(config: &SandboxConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.latency_ms),
            accepted_token: config.accepted_token.clone(),
            state: Mutex::new(SandboxState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, SandboxState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn token_is_accepted(&self, token: &str) -> bool {
        if token.trim().is_empty() {
            return false;
        }

        match &self.accepted_token {
            Some(accepted) => accepted == token,
            None => true,
        }
    }

    #[cfg(test)]
    fn connected_user_id(&self) -> Option<String> {
        self.state()
            .session
            .as_ref()
            .map(|session| session.user_id().to_owned())
    }
}

#[async_trait]
impl ChatClient for SandboxChatClient {
    async fn connect_user(&self, user: &ChatUser, token: &str) -> Result<(), ChatError> {
        self.simulate_latency().await;

        if !self.token_is_accepted(token) {
            tracing::info!(
                code = SANDBOX_CONNECT_REJECTED,
                user_id = %user.id,
                "sandbox rejected user token"
            );
            return Err(ChatError::new("invalid token"));
        }

        self.state().session = Some(Session::Registered {
            user_id: user.id.clone(),
        });
        tracing::info!(
            code = SANDBOX_CONNECTED,
            user_id = %user.id,
            name = %user.name,
            guest = false,
            "sandbox user connected"
        );

        Ok(())
    }

    async fn connect_guest_user(&self, user_id: &str, username: &str) -> Result<(), ChatError> {
        self.simulate_latency().await;

        self.state().session = Some(Session::Guest {
            user_id: user_id.to_owned(),
        });
        tracing::info!(
            code = SANDBOX_CONNECTED,
            user_id,
            username,
            guest = true,
            "sandbox user connected"
        );

        Ok(())
    }

    async fn create_channel(&self, channel: &NewChannel) -> Result<ChannelSummary, ChatError> {
        self.simulate_latency().await;

        let mut state = self.state();
        let created_by = state.connected_user_id()?.to_owned();

        let cid = channel.cid();
        if state.channels.iter().any(|existing| existing.cid == cid) {
            return Err(ChatError::new(format!("channel {cid} already exists")));
        }

        let summary = ChannelSummary {
            cid,
            channel_type: channel.channel_type.clone(),
            name: channel
                .extra_data
                .get("name")
                .cloned()
                .unwrap_or_else(|| channel.channel_id.clone()),
            image: channel.extra_data.get("image").cloned(),
        };
        state.channels.push(summary.clone());

        tracing::info!(
            code = SANDBOX_CHANNEL_CREATED,
            cid = %summary.cid,
            created_by = %created_by,
            "sandbox channel created"
        );

        Ok(summary)
    }

    async fn query_channels(&self, types: &[&str]) -> Result<Vec<ChannelSummary>, ChatError> {
        self.simulate_latency().await;

        let state = self.state();
        state.connected_user_id()?;

        Ok(state
            .channels
            .iter()
            .filter(|channel| types.contains(&channel.channel_type.as_str()))
            .cloned()
            .collect())
    }

    async fn query_messages(
        &self,
        cid: &str,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, ChatError> {
        self.simulate_latency().await;

        let state = self.state();
        state.connected_user_id()?;
        state.ensure_channel(cid)?;

        let in_channel: Vec<&ChatMessage> = state
            .messages
            .iter()
            .filter(|message| message.cid == cid)
            .collect();
        let skip = in_channel.len().saturating_sub(limit);

        Ok(in_channel.into_iter().skip(skip).cloned().collect())
    }

    async fn send_message(&self, cid: &str, text: &str) -> Result<ChatMessage, ChatError> {
        self.simulate_latency().await;

        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::new("message text cannot be empty"));
        }

        let mut state = self.state();
        let author = state.connected_user_id()?.to_owned();
        state.ensure_channel(cid)?;

        let message = ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            cid: cid.to_owned(),
            author,
            text: text.to_owned(),
        };
        state.messages.push(message.clone());

        tracing::debug!(
            code = SANDBOX_MESSAGE_SENT,
            cid,
            author = %message.author,
            "sandbox message sent"
        );

        Ok(message)
    }

    async fn disconnect(&self) {
        self.state().session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::channel::ChannelName;

    fn client(accepted_token: Option<&str>) -> SandboxChatClient {
        SandboxChatClient::new(&SandboxConfig {
            latency_ms: 0,
            accepted_token: accepted_token.map(str::to_owned),
        })
    }

    fn alice() -> ChatUser {
        ChatUser {
            id: "alice".to_owned(),
            name: "alice".to_owned(),
        }
    }

    fn channel(channel_type: &str, name: &str) -> NewChannel {
        let name = ChannelName::parse(name).expect("valid name");
        NewChannel::with_generated_id(channel_type, &name, "https://img.test/c.png")
    }

    #[tokio::test]
    async fn accepts_any_non_empty_token_without_configured_token() {
        let client = client(None);

        client.connect_user(&alice(), "whatever").await.expect("connect");

        assert_eq!(client.connected_user_id().as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn rejects_token_that_does_not_match_configured_one() {
        let client = client(Some("secret-jwt"));

        let error = client
            .connect_user(&alice(), "other")
            .await
            .expect_err("token must be rejected");

        assert_eq!(error.message(), Some("invalid token"));
        assert_eq!(client.connected_user_id(), None);
    }

    #[tokio::test]
    async fn rejects_blank_token() {
        let client = client(None);

        assert!(client.connect_user(&alice(), "  ").await.is_err());
    }

    #[tokio::test]
    async fn guest_connect_sets_session() {
        let client = client(Some("secret-jwt"));

        client
            .connect_guest_user("bob42", "bob42")
            .await
            .expect("guest connect");

        assert_eq!(client.connected_user_id().as_deref(), Some("bob42"));
    }

    #[tokio::test]
    async fn channel_operations_require_connection() {
        let client = client(None);

        let error = client
            .create_channel(&channel("messaging", "General"))
            .await
            .expect_err("must fail without session");
        assert_eq!(error.message(), Some("user not connected"));

        assert!(client.query_channels(&["messaging"]).await.is_err());
    }

    #[tokio::test]
    async fn created_channels_are_listed_by_type() {
        let client = client(None);
        client
            .connect_guest_user("bob42", "bob42")
            .await
            .expect("guest connect");

        let general = client
            .create_channel(&channel("messaging", "General"))
            .await
            .expect("create");
        client
            .create_channel(&channel("secret", "Hidden"))
            .await
            .expect("create");

        let listed = client.query_channels(&["messaging"]).await.expect("query");

        assert_eq!(listed, vec![general.clone()]);
        assert_eq!(general.name, "General");
        assert_eq!(general.image.as_deref(), Some("https://img.test/c.png"));
    }

    async fn connected_with_channel(client: &SandboxChatClient) -> String {
        client
            .connect_guest_user("bob42", "bob42")
            .await
            .expect("guest connect");
        client
            .create_channel(&channel("messaging", "General"))
            .await
            .expect("create")
            .cid
    }

    #[tokio::test]
    async fn sent_messages_are_listed_oldest_first() {
        let client = client(None);
        let cid = connected_with_channel(&client).await;

        client.send_message(&cid, "hello").await.expect("send");
        let sent = client.send_message(&cid, "  again ").await.expect("send");

        assert_eq!(sent.author, "bob42");
        assert_eq!(sent.text, "again");

        let texts: Vec<String> = client
            .query_messages(&cid, 30)
            .await
            .expect("query")
            .into_iter()
            .map(|message| message.text)
            .collect();
        assert_eq!(texts, vec!["hello", "again"]);
    }

    #[tokio::test]
    async fn message_query_keeps_only_the_newest_within_limit() {
        let client = client(None);
        let cid = connected_with_channel(&client).await;

        for index in 0..35 {
            client
                .send_message(&cid, &format!("message {index}"))
                .await
                .expect("send");
        }

        let listed = client.query_messages(&cid, 30).await.expect("query");

        assert_eq!(listed.len(), 30);
        assert_eq!(listed[0].text, "message 5");
        assert_eq!(listed[29].text, "message 34");
    }

    #[tokio::test]
    async fn messages_require_connection_and_existing_channel() {
        let client = client(None);
        let cid = connected_with_channel(&client).await;

        let missing = client
            .send_message("messaging:nope", "hello")
            .await
            .expect_err("unknown channel");
        assert_eq!(missing.message(), Some("channel messaging:nope not found"));

        let blank = client.send_message(&cid, "   ").await.expect_err("blank text");
        assert_eq!(blank.message(), Some("message text cannot be empty"));

        client.disconnect().await;
        let error = client.query_messages(&cid, 30).await.expect_err("no session");
        assert_eq!(error.message(), Some("user not connected"));
    }

    #[tokio::test]
    async fn disconnect_clears_session() {
        let client = client(None);
        client
            .connect_guest_user("bob42", "bob42")
            .await
            .expect("guest connect");

        client.disconnect().await;

        assert_eq!(client.connected_user_id(), None);
    }
}
