use std::{path::Path, sync::Arc};

use crate::{
    chat::SandboxChatClient,
    infra::{self, error::AppError, secrets::mask_token},
    usecases::context::AppContext,
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    let token_hint = context
        .user_token()
        .map(mask_token)
        .unwrap_or_else(|| "<none>".to_owned());
    tracing::debug!(
        min_username_length = context.config.chat.min_username_length,
        default_channel_type = %context.config.chat.default_channel_type,
        user_token = %token_hint,
        sandbox_latency_ms = context.config.sandbox.latency_ms,
        "application context ready"
    );

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;
    let client = Arc::new(SandboxChatClient::new(&config.sandbox));

    Ok(AppContext::new(config, client))
}
