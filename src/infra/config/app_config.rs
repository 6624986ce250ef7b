use serde::{Deserialize, Serialize};

use crate::domain::{
    channel::{DEFAULT_CHANNEL_IMAGE_URL, DEFAULT_CHANNEL_TYPE},
    user::DEFAULT_MIN_USERNAME_LENGTH,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub chat: ChatConfig,
    pub sandbox: SandboxConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatConfig {
    /// Token used by "login as user". Without it only guest login works.
    pub user_token: Option<String>,
    pub min_username_length: usize,
    pub default_channel_type: String,
    pub channel_image_url: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            user_token: None,
            min_username_length: DEFAULT_MIN_USERNAME_LENGTH,
            default_channel_type: DEFAULT_CHANNEL_TYPE.to_owned(),
            channel_image_url: DEFAULT_CHANNEL_IMAGE_URL.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SandboxConfig {
    pub latency_ms: u64,
    pub accepted_token: Option<String>,
}
