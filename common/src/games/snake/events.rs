use crate::PlayerName;
use super::types::{GameOverReason, Point};

/// Read-only view handed to the presentation layer after a tick resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Head first.
    pub segments: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub high_score: u32,
    pub tick: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Started { player: PlayerName },
    Paused,
    Resumed,
    GameOver {
        reason: GameOverReason,
        score: u32,
        high_score: u32,
    },
}
