pub const DEFAULT_MIN_USERNAME_LENGTH: usize = 3;

/// Identity handed to the chat backend when connecting a registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatUser {
    pub id: String,
    pub name: String,
}

impl ChatUser {
    /// Builds a user whose id and display name are both the given username.
    pub fn from_username(username: &Username) -> Self {
        Self {
            id: username.as_str().to_owned(),
            name: username.as_str().to_owned(),
        }
    }
}

/// A display name that passed the length rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Trims the raw input and accepts it only when it is strictly longer
    /// than `min_length` characters.
    pub fn parse(raw: &str, min_length: usize) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() > min_length {
            Some(Self(trimmed.to_owned()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_names_at_or_below_minimum() {
        assert_eq!(Username::parse("", 3), None);
        assert_eq!(Username::parse("ab", 3), None);
        assert_eq!(Username::parse("abc", 3), None);
        assert_eq!(Username::parse("  abc  ", 3), None);
    }

    #[test]
    fn accepts_trimmed_names_above_minimum() {
        let username = Username::parse("  alice \n", 3).expect("alice is long enough");

        assert_eq!(username.as_str(), "alice");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(Username::parse("äöü", 3), None);
        assert!(Username::parse("äöüß", 3).is_some());
    }

    #[test]
    fn chat_user_mirrors_username_for_id_and_name() {
        let username = Username::parse("alice", 3).expect("valid");
        let user = ChatUser::from_username(&username);

        assert_eq!(user.id, "alice");
        assert_eq!(user.name, "alice");
    }
}
