use crate::config::Validate;
use crate::GameError;
use crate::games::SessionRng;
use super::collision::{CollisionDetector, CollisionResult};
use super::food::FoodPlacer;
use super::grid::Grid;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{Direction, GameOverReason, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub collision: CollisionResult,
    /// Food was eaten and no free cell is left for the next one.
    pub board_full: bool,
}

impl TickOutcome {
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.collision {
            CollisionResult::BoundaryCollision => Some(GameOverReason::BoundaryCollision),
            CollisionResult::SelfCollision => Some(GameOverReason::SelfCollision),
            CollisionResult::None if self.board_full => Some(GameOverReason::BoardFull),
            CollisionResult::None => None,
        }
    }
}

pub struct SnakeGameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Point,
    food_placer: FoodPlacer,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Result<Self, GameError> {
        settings.validate().map_err(GameError::InvalidSettings)?;

        let grid = Grid::new(settings.grid_size);
        let snake = Snake::new(settings.start_position(), settings.initial_direction);
        let food_placer = FoodPlacer::new(grid, settings.food_random_attempts);
        let food = food_placer.place(&snake.occupied(), rng).ok_or_else(|| {
            GameError::InvalidSettings(format!(
                "no free cell for food on a {0}x{0} board",
                settings.grid_size
            ))
        })?;

        Ok(Self {
            grid,
            snake,
            food,
            food_placer,
        })
    }

    /// Queues a turn for the next tick. A turn back onto the neck, measured
    /// against the last move actually made, is refused.
    pub fn set_snake_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.snake.direction) {
            return false;
        }
        self.snake.pending_direction = Some(direction);
        true
    }

    pub fn update(&mut self, rng: &mut SessionRng) -> TickOutcome {
        let direction = self.snake.next_direction();
        self.snake.pending_direction = None;
        let new_head = self.snake.advance(direction);

        let mut ate_food = false;
        let mut board_full = false;

        if new_head == self.food {
            ate_food = true;
            match self.food_placer.place(&self.snake.occupied(), rng) {
                Some(food) => self.food = food,
                None => board_full = true,
            }
        } else {
            self.snake.shrink();
        }

        TickOutcome {
            ate_food,
            collision: CollisionDetector::check(&self.snake, &self.grid),
            board_full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_state() -> (SnakeGameState, SessionRng) {
        let mut rng = SessionRng::new(42);
        let state = SnakeGameState::new(&SnakeSettings::default(), &mut rng).unwrap();
        (state, rng)
    }

    #[test]
    fn test_new_state_places_food_off_the_snake() {
        let (state, _) = create_state();
        assert_eq!(state.snake.head(), Point::new(10, 10));
        assert_ne!(state.food, state.snake.head());
        assert!(state.grid.is_in_bounds(state.food));
    }

    #[test]
    fn test_plain_move_keeps_length() {
        let (mut state, mut rng) = create_state();
        state.food = Point::new(1, 1);
        let outcome = state.update(&mut rng);
        assert!(!outcome.ate_food);
        assert_eq!(outcome.collision, CollisionResult::None);
        assert_eq!(state.snake.head(), Point::new(11, 10));
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_eating_grows_and_relocates_food() {
        let (mut state, mut rng) = create_state();
        state.food = Point::new(11, 10);
        let outcome = state.update(&mut rng);
        assert!(outcome.ate_food);
        assert_eq!(outcome.game_over_reason(), None);
        assert_eq!(state.snake.len(), 2);
        assert!(!state.snake.occupied().contains(&state.food));
    }

    #[test]
    fn test_pending_turn_is_consumed_by_update() {
        let (mut state, mut rng) = create_state();
        state.food = Point::new(1, 1);
        assert!(state.set_snake_direction(Direction::Up));
        state.update(&mut rng);
        assert_eq!(state.snake.head(), Point::new(10, 9));
        assert_eq!(state.snake.direction, Direction::Up);
        assert_eq!(state.snake.pending_direction, None);
    }

    #[test]
    fn test_reversal_against_last_move_is_refused() {
        let (mut state, _) = create_state();
        assert!(state.set_snake_direction(Direction::Up));
        assert!(!state.set_snake_direction(Direction::Left));
        assert_eq!(state.snake.next_direction(), Direction::Up);
    }

    #[test]
    fn test_moving_into_vacated_tail_cell_is_safe() {
        let (mut state, mut rng) = create_state();
        state.snake = Snake::from_segments(
            &[Point::new(5, 5), Point::new(6, 5), Point::new(6, 6), Point::new(5, 6)],
            Direction::Left,
        );
        state.food = Point::new(1, 1);
        assert!(!state.set_snake_direction(Direction::Right));
        assert!(state.set_snake_direction(Direction::Down));
        let outcome = state.update(&mut rng);
        assert_eq!(state.snake.head(), Point::new(5, 6));
        assert_eq!(state.snake.len(), 4);
        assert_eq!(outcome.collision, CollisionResult::None);
    }

    #[test]
    fn test_unvalidated_settings_are_rejected_instead_of_panicking() {
        let mut rng = SessionRng::new(1);
        for settings in [
            SnakeSettings { grid_size: 0, start_x: 1, start_y: 1, ..SnakeSettings::default() },
            SnakeSettings { grid_size: 1, start_x: 1, start_y: 1, ..SnakeSettings::default() },
            SnakeSettings { start_x: 25, ..SnakeSettings::default() },
        ] {
            let result = SnakeGameState::new(&settings, &mut rng);
            assert!(matches!(result, Err(GameError::InvalidSettings(_))));
        }
    }

    #[test]
    fn test_eating_last_free_cell_reports_board_full() {
        let settings = SnakeSettings {
            grid_size: 5,
            start_x: 1,
            start_y: 1,
            ..SnakeSettings::default()
        };
        let mut rng = SessionRng::new(5);
        let mut state = SnakeGameState::new(&settings, &mut rng).unwrap();
        // Serpentine covering every cell except (1, 5), head at (2, 5).
        let mut body: Vec<Point> = Vec::new();
        for y in (1..=5).rev() {
            let row: Vec<i32> = if y % 2 == 1 { (1..=5).collect() } else { (1..=5).rev().collect() };
            for x in row {
                body.push(Point::new(x, y));
            }
        }
        body.retain(|&p| p != Point::new(1, 5));
        state.snake = Snake::from_segments(&body, Direction::Left);
        assert_eq!(state.snake.head(), Point::new(2, 5));
        state.food = Point::new(1, 5);

        let outcome = state.update(&mut rng);
        assert!(outcome.ate_food);
        assert!(outcome.board_full);
        assert_eq!(outcome.game_over_reason(), Some(GameOverReason::BoardFull));
        assert_eq!(state.snake.len(), 25);
    }
}
