use std::fmt;

use crate::errors::GameError;

/// Name the player registers with before a run. Only ASCII letters and
/// digits are accepted, and at least one of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn parse(name: &str) -> Result<Self, GameError> {
        if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(Self(name.to_string()))
        } else {
            Err(GameError::InvalidName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_names_are_accepted() {
        for name in ["Player1", "a", "ABC", "007"] {
            let parsed = PlayerName::parse(name);
            assert_eq!(parsed.map(String::from), Ok(name.to_string()));
        }
    }

    #[test]
    fn test_empty_and_symbol_names_are_rejected() {
        for name in ["", "@@@", "Player 1", "snake_case", "tab\t", "naïve"] {
            assert_eq!(
                PlayerName::parse(name),
                Err(GameError::InvalidName(name.to_string()))
            );
        }
    }
}
