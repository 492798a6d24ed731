use std::time::Duration;

use crate::{log, GameError, PlayerName};
use crate::games::{GameBroadcaster, SessionRng};
use super::clock::{next_interval, ClockState, GameClock, TickScheduler};
use super::events::{GameEvent, GameSnapshot};
use super::game_state::{SnakeGameState, TickOutcome};
use super::settings::SnakeSettings;
use super::types::{Direction, GameOverReason};

/// Owns one player's session: the board, the clock, score and high score.
/// All mutation goes through the command methods below.
pub struct GameController<S: TickScheduler, B: GameBroadcaster> {
    settings: SnakeSettings,
    game_state: SnakeGameState,
    clock: GameClock<S>,
    rng: SessionRng,
    broadcaster: B,
    player: Option<PlayerName>,
    score: u32,
    high_score: u32,
    tick: u64,
    games_played: u32,
    game_over_reason: Option<GameOverReason>,
}

impl<S: TickScheduler, B: GameBroadcaster> GameController<S, B> {
    /// Fails with `InvalidSettings` when the settings cannot describe a
    /// playable board.
    pub fn new(
        settings: SnakeSettings,
        scheduler: S,
        broadcaster: B,
        mut rng: SessionRng,
    ) -> Result<Self, GameError> {
        let game_state = SnakeGameState::new(&settings, &mut rng)?;
        let clock = GameClock::new(scheduler, settings.initial_tick_interval());

        Ok(Self {
            settings,
            game_state,
            clock,
            rng,
            broadcaster,
            player: None,
            score: 0,
            high_score: 0,
            tick: 0,
            games_played: 0,
            game_over_reason: None,
        })
    }

    /// Begins a round. From `GameOver` the board is reset first; while a
    /// round is running or paused the call does nothing.
    pub fn start(&mut self, name: &str) -> Result<(), GameError> {
        let player = PlayerName::parse(name)?;

        match self.clock.state() {
            ClockState::Running | ClockState::Paused => return Ok(()),
            ClockState::GameOver => self.reset_round(),
            ClockState::Stopped => {}
        }

        self.score = 0;
        self.clock.start();
        self.games_played += 1;
        log!(
            "[{}] started round {} (seed {})",
            player,
            self.games_played,
            self.rng.seed()
        );

        self.player = Some(player.clone());
        self.broadcaster.broadcast_event(&GameEvent::Started { player });
        self.broadcast_snapshot();
        Ok(())
    }

    /// Returns whether the turn was queued. Refused turns are normal input
    /// races, not errors.
    pub fn request_direction_change(&mut self, direction: Direction) -> bool {
        if !self.clock.is_running() {
            return false;
        }
        self.game_state.set_snake_direction(direction)
    }

    pub fn toggle_pause(&mut self) -> ClockState {
        match self.clock.state() {
            ClockState::Running => {
                self.clock.pause();
                self.broadcaster.broadcast_event(&GameEvent::Paused);
            }
            ClockState::Paused => {
                self.clock.resume();
                self.broadcaster.broadcast_event(&GameEvent::Resumed);
            }
            ClockState::Stopped | ClockState::GameOver => {}
        }
        self.clock.state()
    }

    /// Puts a fresh board in place and stops the clock. The high score is
    /// the only thing carried over.
    pub fn restart(&mut self) {
        self.reset_round();
        self.broadcast_snapshot();
    }

    /// Runs a tick only if it comes from the currently armed timer.
    pub fn handle_timer(&mut self, generation: u64) -> Option<TickOutcome> {
        if !self.clock.accepts(generation) {
            return None;
        }
        self.tick()
    }

    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.clock.is_running() {
            return None;
        }

        let outcome = self.game_state.update(&mut self.rng);
        self.tick += 1;

        if outcome.ate_food {
            if let Err(e) = self.broadcaster.play_eat_cue() {
                log!("Eat cue failed: {}", e);
            }
            self.score += self.settings.points_per_food;
            let interval = next_interval(
                self.clock.tick_interval(),
                self.settings.speed_step(),
                self.settings.min_tick_interval(),
            );
            self.clock.set_interval(interval);
        }

        let game_over_reason = outcome.game_over_reason();
        if let Some(reason) = game_over_reason {
            self.high_score = self.high_score.max(self.score);
            self.game_over_reason = Some(reason);
            self.clock.finish();
            log!(
                "Game over after {} ticks: {:?}, score {}, high score {}",
                self.tick,
                reason,
                self.score,
                self.high_score
            );
        }

        self.broadcast_snapshot();

        if let Some(reason) = game_over_reason {
            self.broadcaster.broadcast_event(&GameEvent::GameOver {
                reason,
                score: self.score,
                high_score: self.high_score,
            });
        }

        Some(outcome)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            segments: self.game_state.snake.segments().collect(),
            food: self.game_state.food,
            score: self.score,
            high_score: self.high_score,
            tick: self.tick,
        }
    }

    pub fn state(&self) -> ClockState {
        self.clock.state()
    }

    pub fn direction(&self) -> Direction {
        self.game_state.snake.next_direction()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn tick_interval(&self) -> Duration {
        self.clock.tick_interval()
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn player(&self) -> Option<&PlayerName> {
        self.player.as_ref()
    }

    pub fn scheduler(&self) -> &S {
        self.clock.scheduler()
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    #[cfg(test)]
    pub(crate) fn game_state_mut(&mut self) -> &mut SnakeGameState {
        &mut self.game_state
    }

    fn reset_round(&mut self) {
        // Settings were checked in `new`, so a fresh board always builds.
        match SnakeGameState::new(&self.settings, &mut self.rng) {
            Ok(game_state) => self.game_state = game_state,
            Err(e) => log!("Board reset failed, keeping the old board: {}", e),
        }
        self.clock.reset();
        self.score = 0;
        self.tick = 0;
        self.game_over_reason = None;
    }

    fn broadcast_snapshot(&mut self) {
        let snapshot = self.snapshot();
        self.broadcaster.broadcast_state(&snapshot);
    }
}
