use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::{
    chat::{ChatClient, ChatError},
    domain::{
        channel::{ChannelSummary, NewChannel},
        events::LoadingState,
        message::ChatMessage,
        user::ChatUser,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCall {
    ConnectUser { user: ChatUser, token: String },
    ConnectGuestUser { user_id: String, username: String },
    CreateChannel(NewChannel),
    QueryChannels(Vec<String>),
    QueryMessages { cid: String, limit: usize },
    SendMessage { cid: String, text: String },
    Disconnect,
}

/// Chat client stub that records every call and answers with a fixed
/// outcome. When given a loading receiver it also records the loading flag
/// observed while each connect call is in flight.
#[derive(Debug, Default)]
pub struct RecordingChatClient {
    failure: Option<ChatError>,
    channels: Vec<ChannelSummary>,
    messages: Vec<ChatMessage>,
    calls: Mutex<Vec<ChatCall>>,
    loading: Mutex<Option<watch::Receiver<LoadingState>>>,
    loading_during_calls: Mutex<Vec<LoadingState>>,
}

impl RecordingChatClient {
    pub fn failing(error: ChatError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn with_channels(channels: Vec<ChannelSummary>) -> Self {
        Self {
            channels,
            ..Self::default()
        }
    }

    pub fn with_messages(channels: Vec<ChannelSummary>, messages: Vec<ChatMessage>) -> Self {
        Self {
            channels,
            messages,
            ..Self::default()
        }
    }

    pub fn observe_loading(&self, loading: watch::Receiver<LoadingState>) {
        *lock(&self.loading) = Some(loading);
    }

    pub fn calls(&self) -> Vec<ChatCall> {
        lock(&self.calls).clone()
    }

    pub fn loading_during_calls(&self) -> Vec<LoadingState> {
        lock(&self.loading_during_calls).clone()
    }

    fn record(&self, call: ChatCall) {
        lock(&self.calls).push(call);
    }

    fn record_loading(&self) {
        if let Some(loading) = lock(&self.loading).as_ref() {
            let current = *loading.borrow();
            lock(&self.loading_during_calls).push(current);
        }
    }

    fn outcome(&self) -> Result<(), ChatError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().expect("test stub lock should not be poisoned")
}

#[async_trait]
impl ChatClient for RecordingChatClient {
    async fn connect_user(&self, user: &ChatUser, token: &str) -> Result<(), ChatError> {
        self.record(ChatCall::ConnectUser {
            user: user.clone(),
            token: token.to_owned(),
        });
        self.record_loading();
        tokio::task::yield_now().await;
        self.outcome()
    }

    async fn connect_guest_user(&self, user_id: &str, username: &str) -> Result<(), ChatError> {
        self.record(ChatCall::ConnectGuestUser {
            user_id: user_id.to_owned(),
            username: username.to_owned(),
        });
        self.record_loading();
        tokio::task::yield_now().await;
        self.outcome()
    }

    async fn create_channel(&self, channel: &NewChannel) -> Result<ChannelSummary, ChatError> {
        self.record(ChatCall::CreateChannel(channel.clone()));
        tokio::task::yield_now().await;
        self.outcome()?;

        Ok(ChannelSummary {
            cid: channel.cid(),
            channel_type: channel.channel_type.clone(),
            name: channel.extra_data.get("name").cloned().unwrap_or_default(),
            image: channel.extra_data.get("image").cloned(),
        })
    }

    async fn query_channels(&self, types: &[&str]) -> Result<Vec<ChannelSummary>, ChatError> {
        self.record(ChatCall::QueryChannels(
            types.iter().map(|kind| (*kind).to_owned()).collect(),
        ));
        self.outcome()?;
        Ok(self.channels.clone())
    }

    async fn query_messages(
        &self,
        cid: &str,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, ChatError> {
        self.record(ChatCall::QueryMessages {
            cid: cid.to_owned(),
            limit,
        });
        self.outcome()?;
        Ok(self.messages.clone())
    }

    async fn send_message(&self, cid: &str, text: &str) -> Result<ChatMessage, ChatError> {
        self.record(ChatCall::SendMessage {
            cid: cid.to_owned(),
            text: text.to_owned(),
        });
        self.outcome()?;

        Ok(ChatMessage {
            id: format!("m{}", self.calls().len()),
            cid: cid.to_owned(),
            author: "tester".to_owned(),
            text: text.to_owned(),
        })
    }

    async fn disconnect(&self) {
        self.record(ChatCall::Disconnect);
    }
}
