use std::collections::BTreeMap;

pub const DEFAULT_CHANNEL_TYPE: &str = "messaging";
pub const DEFAULT_CHANNEL_IMAGE_URL: &str = "https://bit.ly/2Tit8NR";

/// Channel types shown on the channel list screen.
pub const LISTED_CHANNEL_TYPES: [&str; 5] =
    ["gaming", "messaging", "commerce", "team", "livestream"];

/// A channel name that is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelName(String);

impl ChannelName {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything the backend needs to create one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChannel {
    pub channel_type: String,
    pub channel_id: String,
    pub member_ids: Vec<String>,
    pub extra_data: BTreeMap<String, String>,
}

impl NewChannel {
    /// Creates a memberless channel with a fresh random id.
    pub fn with_generated_id(channel_type: &str, name: &ChannelName, image_url: &str) -> Self {
        let extra_data = BTreeMap::from([
            ("name".to_owned(), name.as_str().to_owned()),
            ("image".to_owned(), image_url.to_owned()),
        ]);

        Self {
            channel_type: channel_type.to_owned(),
            channel_id: uuid::Uuid::new_v4().to_string(),
            member_ids: Vec::new(),
            extra_data,
        }
    }

    pub fn cid(&self) -> String {
        format!("{}:{}", self.channel_type, self.channel_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSummary {
    pub cid: String,
    pub channel_type: String,
    pub name: String,
    pub image: Option<String>,
}
