use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid player name {0:?}: use one or more letters or digits")]
    InvalidName(String),
    #[error("invalid game settings: {0}")]
    InvalidSettings(String),
}
