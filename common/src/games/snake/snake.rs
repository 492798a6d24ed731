use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
    /// Direction of the last completed move.
    pub direction: Direction,
    /// Latest accepted turn, applied on the next tick.
    pub pending_direction: Option<Direction>,
}

impl Snake {
    pub fn new(start_pos: Point, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([start_pos]),
            direction,
            pending_direction: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: &[Point], direction: Direction) -> Self {
        assert!(!segments.is_empty());
        Self {
            body: segments.iter().copied().collect(),
            direction,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Whichever direction the next tick will move in.
    pub fn next_direction(&self) -> Direction {
        self.pending_direction.unwrap_or(self.direction)
    }

    /// Prepends a new head one cell away in `direction`. The tail stays, so
    /// skipping [`Snake::shrink`] afterwards is how the snake grows.
    pub fn advance(&mut self, direction: Direction) -> Point {
        let new_head = self.head().step(direction);
        self.body.push_front(new_head);
        self.direction = direction;
        new_head
    }

    pub fn shrink(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }

    pub fn occupies_excluding_head(&self) -> HashSet<Point> {
        self.body.iter().skip(1).copied().collect()
    }

    pub fn occupied(&self) -> HashSet<Point> {
        self.body.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_has_single_segment() {
        let snake = Snake::new(Point::new(10, 10), Direction::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(10, 10));
        assert_eq!(snake.tail(), Point::new(10, 10));
        assert!(snake.occupies_excluding_head().is_empty());
    }

    #[test]
    fn test_advance_prepends_without_dropping_tail() {
        let mut snake = Snake::new(Point::new(10, 10), Direction::Right);
        let head = snake.advance(Direction::Down);
        assert_eq!(head, Point::new(10, 11));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), head);
        assert_eq!(snake.tail(), Point::new(10, 10));
        assert_eq!(snake.direction, Direction::Down);
    }

    #[test]
    fn test_advance_then_shrink_moves_snake() {
        let mut snake = Snake::from_segments(
            &[Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)],
            Direction::Right,
        );
        snake.advance(Direction::Right);
        snake.shrink();
        let segments: Vec<Point> = snake.segments().collect();
        assert_eq!(segments, vec![Point::new(6, 5), Point::new(5, 5), Point::new(4, 5)]);
    }

    #[test]
    fn test_shrink_never_empties_body() {
        let mut snake = Snake::new(Point::new(1, 1), Direction::Up);
        snake.shrink();
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_occupies_excluding_head_skips_only_the_head() {
        let snake = Snake::from_segments(
            &[Point::new(5, 5), Point::new(5, 6), Point::new(5, 7)],
            Direction::Up,
        );
        let occupied = snake.occupies_excluding_head();
        assert_eq!(occupied.len(), 2);
        assert!(!occupied.contains(&Point::new(5, 5)));
        assert!(occupied.contains(&Point::new(5, 7)));
        assert_eq!(snake.occupied().len(), 3);
    }
}
