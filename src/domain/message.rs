/// How many of the most recent messages the messages screen shows.
pub const MESSAGE_LIMIT: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub cid: String,
    pub author: String,
    pub text: String,
}

impl ChatMessage {
    pub fn display_line(&self) -> String {
        format!("  {}: {}", self.author, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_line_shows_author_and_text() {
        let message = ChatMessage {
            id: "m1".to_owned(),
            cid: "messaging:general".to_owned(),
            author: "alice".to_owned(),
            text: "hello".to_owned(),
        };

        assert_eq!(message.display_line(), "  alice: hello");
    }
}
