//! Login use case: validates a display name, connects it to the chat
//! backend as a registered or guest user and republishes the outcome.

use std::sync::Arc;

use tokio::{
    sync::{broadcast, watch},
    task::JoinHandle,
};

use crate::{
    chat::{ChatClient, ChatError},
    domain::{
        events::{LoadingState, LoginEvent},
        user::{ChatUser, Username, DEFAULT_MIN_USERNAME_LENGTH},
    },
};

use super::event_stream::EventStream;

const LOGIN_INPUT_TOO_SHORT: &str = "LOGIN_INPUT_TOO_SHORT";
const LOGIN_CONNECT_STARTED: &str = "LOGIN_CONNECT_STARTED";
const LOGIN_SUCCEEDED: &str = "LOGIN_SUCCEEDED";
const LOGIN_FAILED: &str = "LOGIN_FAILED";

/// Drives the login screen.
///
/// Each call to [`AuthOrchestrator::login`] emits exactly one [`LoginEvent`].
/// When a backend call is made the loading flag goes to
/// [`LoadingState::Loading`] before the call and back to
/// [`LoadingState::NotLoading`] before the outcome is emitted.
///
/// Calls on one instance are not serialized against each other: two
/// overlapping logins may interleave their loading toggles.
#[derive(Clone)]
pub struct AuthOrchestrator {
    client: Arc<dyn ChatClient>,
    min_username_length: usize,
    events: EventStream<LoginEvent>,
    loading: Arc<watch::Sender<LoadingState>>,
}

impl AuthOrchestrator {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        let (loading, _) = watch::channel(LoadingState::NotLoading);

        Self {
            client,
            min_username_length: DEFAULT_MIN_USERNAME_LENGTH,
            events: EventStream::new(),
            loading: Arc::new(loading),
        }
    }

    pub fn with_min_username_length(mut self, min_username_length: usize) -> Self {
        self.min_username_length = min_username_length;
        self
    }

    pub fn min_username_length(&self) -> usize {
        self.min_username_length
    }

    /// Login events emitted after this call. Earlier events are not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<LoginEvent> {
        self.events.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<LoadingState> {
        self.loading.subscribe()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn loading_state(&self) -> LoadingState {
        *self.loading.borrow()
    }

    /// Logs in as a registered user when `token` is present, otherwise as a
    /// guest. Returns the event that was emitted.
    pub async fn login(&self, username: &str, token: Option<&str>) -> LoginEvent {
        let Some(username) = Username::parse(username, self.min_username_length) else {
            tracing::debug!(
                code = LOGIN_INPUT_TOO_SHORT,
                min_length = self.min_username_length,
                "username rejected before connect"
            );
            return self.emit(LoginEvent::InputTooShort);
        };

        self.loading.send_replace(LoadingState::Loading);
        tracing::info!(
            code = LOGIN_CONNECT_STARTED,
            username = username.as_str(),
            guest = token.is_none(),
            "connecting to chat backend"
        );

        let result = match token {
            Some(token) => {
                let user = ChatUser::from_username(&username);
                self.client.connect_user(&user, token).await
            }
            None => {
                self.client
                    .connect_guest_user(username.as_str(), username.as_str())
                    .await
            }
        };

        self.finish(&username, result)
    }

    // Loading must be cleared before the outcome is published.
    fn finish(&self, username: &Username, result: Result<(), ChatError>) -> LoginEvent {
        self.loading.send_replace(LoadingState::NotLoading);

        let event = match result {
            Ok(()) => {
                tracing::info!(
                    code = LOGIN_SUCCEEDED,
                    username = username.as_str(),
                    "login succeeded"
                );
                LoginEvent::Success
            }
            Err(error) => {
                tracing::warn!(code = LOGIN_FAILED, error = %error, "login failed");
                LoginEvent::LoginFailed {
                    message: error.description().to_owned(),
                }
            }
        };

        self.emit(event)
    }

    /// Runs [`AuthOrchestrator::login`] on the current tokio runtime without
    /// waiting for it.
    pub fn launch_login(
        &self,
        username: impl Into<String>,
        token: Option<String>,
    ) -> JoinHandle<LoginEvent> {
        let orchestrator = self.clone();
        let username = username.into();

        tokio::spawn(async move { orchestrator.login(&username, token.as_deref()).await })
    }

    fn emit(&self, event: LoginEvent) -> LoginEvent {
        self.events.emit(event.clone());
        event
    }
}
