use super::grid::Grid;
use super::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionResult {
    None,
    SelfCollision,
    BoundaryCollision,
}

impl CollisionResult {
    pub fn is_collision(&self) -> bool {
        !matches!(self, CollisionResult::None)
    }
}

pub struct CollisionDetector;

impl CollisionDetector {
    /// Boundary wins when both apply, since a head outside the board cannot
    /// meet a body segment anyway.
    pub fn check(snake: &Snake, grid: &Grid) -> CollisionResult {
        let head = snake.head();
        if !grid.is_in_bounds(head) {
            return CollisionResult::BoundaryCollision;
        }
        if snake.segments().skip(1).any(|segment| segment == head) {
            return CollisionResult::SelfCollision;
        }
        CollisionResult::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::types::{Direction, Point};

    #[test]
    fn test_single_segment_inside_board_is_clear() {
        let snake = Snake::new(Point::new(10, 10), Direction::Right);
        assert_eq!(CollisionDetector::check(&snake, &Grid::new(20)), CollisionResult::None);
    }

    #[test]
    fn test_head_outside_each_edge_is_boundary_collision() {
        let grid = Grid::new(20);
        for head in [Point::new(0, 5), Point::new(21, 5), Point::new(5, 0), Point::new(5, 21)] {
            let snake = Snake::from_segments(&[head], Direction::Up);
            assert_eq!(CollisionDetector::check(&snake, &grid), CollisionResult::BoundaryCollision);
        }
    }

    #[test]
    fn test_head_reentering_body_is_self_collision() {
        let snake = Snake::from_segments(
            &[Point::new(5, 6), Point::new(5, 5), Point::new(5, 6), Point::new(5, 7)],
            Direction::Down,
        );
        let result = CollisionDetector::check(&snake, &Grid::new(20));
        assert_eq!(result, CollisionResult::SelfCollision);
        assert!(result.is_collision());
    }

    #[test]
    fn test_head_on_body_segment_far_from_neck() {
        let snake = Snake::from_segments(
            &[
                Point::new(4, 4),
                Point::new(4, 5),
                Point::new(5, 5),
                Point::new(5, 4),
                Point::new(4, 4),
            ],
            Direction::Left,
        );
        assert_eq!(CollisionDetector::check(&snake, &Grid::new(20)), CollisionResult::SelfCollision);
    }
}
