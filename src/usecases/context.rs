use std::sync::Arc;

use crate::{
    chat::ChatClient,
    infra::config::AppConfig,
    usecases::{create_channel::ChannelCreationOrchestrator, login::AuthOrchestrator},
};

/// Shared application wiring: loaded config plus the single chat client
/// every orchestrator is built on.
pub struct AppContext {
    pub config: AppConfig,
    pub client: Arc<dyn ChatClient>,
}

impl AppContext {
    pub fn new(config: AppConfig, client: Arc<dyn ChatClient>) -> Self {
        Self { config, client }
    }

    pub fn auth_orchestrator(&self) -> AuthOrchestrator {
        AuthOrchestrator::new(self.client.clone())
            .with_min_username_length(self.config.chat.min_username_length)
    }

    pub fn channel_creation_orchestrator(&self) -> ChannelCreationOrchestrator {
        ChannelCreationOrchestrator::new(self.client.clone())
            .with_default_channel_type(self.config.chat.default_channel_type.clone())
            .with_image_url(self.config.chat.channel_image_url.clone())
    }

    pub fn user_token(&self) -> Option<&str> {
        self.config.chat.user_token.as_deref()
    }
}
