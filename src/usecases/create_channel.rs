use std::sync::Arc;

use tokio::{sync::broadcast, task::JoinHandle};

use crate::{
    chat::ChatClient,
    domain::{
        channel::{ChannelName, NewChannel, DEFAULT_CHANNEL_IMAGE_URL, DEFAULT_CHANNEL_TYPE},
        events::ChannelCreationEvent,
    },
};

use super::event_stream::EventStream;

pub const EMPTY_CHANNEL_NAME_MESSAGE: &str = "The channel name cannot be empty.";

const CHANNEL_NAME_EMPTY: &str = "CHANNEL_NAME_EMPTY";
const CHANNEL_CREATE_STARTED: &str = "CHANNEL_CREATE_STARTED";
const CHANNEL_CREATE_SUCCEEDED: &str = "CHANNEL_CREATE_SUCCEEDED";
const CHANNEL_CREATE_FAILED: &str = "CHANNEL_CREATE_FAILED";

/// Creates channels on behalf of the channel list screen and emits one
/// [`ChannelCreationEvent`] per request.
#[derive(Clone)]
pub struct ChannelCreationOrchestrator {
    client: Arc<dyn ChatClient>,
    default_channel_type: String,
    image_url: String,
    events: EventStream<ChannelCreationEvent>,
}

impl ChannelCreationOrchestrator {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            default_channel_type: DEFAULT_CHANNEL_TYPE.to_owned(),
            image_url: DEFAULT_CHANNEL_IMAGE_URL.to_owned(),
            events: EventStream::new(),
        }
    }

    pub fn with_default_channel_type(mut self, channel_type: impl Into<String>) -> Self {
        self.default_channel_type = channel_type.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Creation events emitted after this call. Earlier events are not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<ChannelCreationEvent> {
        self.events.subscribe()
    }

    /// Creates a channel of the default type.
    pub async fn create_channel(&self, name: &str) -> ChannelCreationEvent {
        let channel_type = self.default_channel_type.clone();
        self.create_channel_of_type(name, &channel_type).await
    }

    pub async fn create_channel_of_type(
        &self,
        name: &str,
        channel_type: &str,
    ) -> ChannelCreationEvent {
        let Some(name) = ChannelName::parse(name) else {
            tracing::debug!(code = CHANNEL_NAME_EMPTY, "channel name rejected");
            return self.emit(ChannelCreationEvent::Error {
                message: EMPTY_CHANNEL_NAME_MESSAGE.to_owned(),
            });
        };

        let channel = NewChannel::with_generated_id(channel_type, &name, &self.image_url);
        tracing::info!(
            code = CHANNEL_CREATE_STARTED,
            cid = %channel.cid(),
            name = name.as_str(),
            "creating channel"
        );

        let event = match self.client.create_channel(&channel).await {
            Ok(created) => {
                tracing::info!(
                    code = CHANNEL_CREATE_SUCCEEDED,
                    cid = %created.cid,
                    "channel created"
                );
                ChannelCreationEvent::Success
            }
            Err(error) => {
                tracing::warn!(
                    code = CHANNEL_CREATE_FAILED,
                    cid = %channel.cid(),
                    error = %error,
                    "channel creation failed"
                );
                ChannelCreationEvent::Error {
                    message: error.description().to_owned(),
                }
            }
        };

        self.emit(event)
    }

    pub fn launch_create_channel(
        &self,
        name: impl Into<String>,
    ) -> JoinHandle<ChannelCreationEvent> {
        let orchestrator = self.clone();
        let name = name.into();

        tokio::spawn(async move { orchestrator.create_channel(&name).await })
    }

    fn emit(&self, event: ChannelCreationEvent) -> ChannelCreationEvent {
        self.events.emit(event.clone());
        event
    }
}
