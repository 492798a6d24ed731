use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Validate;
use super::types::{Direction, Point};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    pub grid_size: u32,
    pub initial_tick_interval_ms: u32,
    pub speed_step_ms: u32,
    pub min_tick_interval_ms: u32,
    pub points_per_food: u32,
    pub start_x: i32,
    pub start_y: i32,
    pub initial_direction: Direction,
    /// Random draws for a food cell before falling back to a board scan.
    pub food_random_attempts: u32,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_tick_interval_ms: 200,
            speed_step_ms: 2,
            min_tick_interval_ms: 50,
            points_per_food: 10,
            start_x: 10,
            start_y: 10,
            initial_direction: Direction::Right,
            food_random_attempts: 100,
        }
    }
}

impl SnakeSettings {
    pub fn start_position(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    pub fn initial_tick_interval(&self) -> Duration {
        Duration::from_millis(self.initial_tick_interval_ms as u64)
    }

    pub fn speed_step(&self) -> Duration {
        Duration::from_millis(self.speed_step_ms as u64)
    }

    pub fn min_tick_interval(&self) -> Duration {
        Duration::from_millis(self.min_tick_interval_ms as u64)
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if !(5..=100).contains(&self.grid_size) {
            return Err("grid_size must be between 5 and 100".to_string());
        }
        if self.min_tick_interval_ms < 10 {
            return Err("min_tick_interval_ms must be at least 10".to_string());
        }
        if self.initial_tick_interval_ms > 5000 {
            return Err("initial_tick_interval_ms must not exceed 5000".to_string());
        }
        if self.initial_tick_interval_ms < self.min_tick_interval_ms {
            return Err("initial_tick_interval_ms must not be below min_tick_interval_ms".to_string());
        }
        if self.points_per_food == 0 {
            return Err("points_per_food must be greater than 0".to_string());
        }
        let size = self.grid_size as i32;
        if !(1..=size).contains(&self.start_x) || !(1..=size).contains(&self.start_y) {
            return Err(format!("start position must lie within 1..={} on both axes", size));
        }
        if self.food_random_attempts == 0 {
            return Err("food_random_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}
