mod clock;
mod collision;
mod controller;
mod events;
mod food;
mod game_state;
mod grid;
mod session;
mod settings;
mod snake;
mod types;

pub use clock::{next_interval, ArmedTimer, ClockState, GameClock, ManualTickScheduler, TickScheduler};
pub use collision::{CollisionDetector, CollisionResult};
pub use controller::GameController;
pub use events::{GameEvent, GameSnapshot};
pub use food::FoodPlacer;
pub use game_state::{SnakeGameState, TickOutcome};
pub use grid::Grid;
pub use session::{SessionMessage, SessionSummary, SnakeSession, SnakeSessionController, TokioTickScheduler};
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use types::{Direction, GameOverReason, Point};
