use super::snake::{GameEvent, GameSnapshot};

/// Push interface towards whatever presents the game.
pub trait GameBroadcaster {
    /// Called once per resolved tick and after every state reset.
    fn broadcast_state(&mut self, snapshot: &GameSnapshot);

    fn broadcast_event(&mut self, event: &GameEvent);

    /// Fire-and-forget feedback for eating. Failures are logged by the caller
    /// and never stop the game.
    fn play_eat_cue(&mut self) -> Result<(), String>;
}
