use serde::Deserialize;

use crate::infra::config::{AppConfig, ChatConfig, LogConfig, SandboxConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub chat: Option<FileChatConfig>,
    pub sandbox: Option<FileSandboxConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(chat) = self.chat {
            chat.merge_into(&mut config.chat);
        }

        if let Some(sandbox) = self.sandbox {
            sandbox.merge_into(&mut config.sandbox);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileChatConfig {
    pub user_token: Option<String>,
    pub min_username_length: Option<usize>,
    pub default_channel_type: Option<String>,
    pub channel_image_url: Option<String>,
}

impl FileChatConfig {
    fn merge_into(self, config: &mut ChatConfig) {
        if let Some(user_token) = self.user_token.filter(|token| !token.trim().is_empty()) {
            config.user_token = Some(user_token);
        }

        if let Some(min_length) = self.min_username_length {
            config.min_username_length = min_length;
        }

        if let Some(channel_type) = self.default_channel_type {
            config.default_channel_type = channel_type;
        }

        if let Some(image_url) = self.channel_image_url {
            config.channel_image_url = image_url;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSandboxConfig {
    pub latency_ms: Option<u64>,
    pub accepted_token: Option<String>,
}

impl FileSandboxConfig {
    fn merge_into(self, config: &mut SandboxConfig) {
        if let Some(latency_ms) = self.latency_ms {
            config.latency_ms = latency_ms;
        }

        if let Some(accepted_token) = self.accepted_token.filter(|token| !token.trim().is_empty()) {
            config.accepted_token = Some(accepted_token);
        }
    }
}
