use super::types::Point;

/// Square board with cells numbered `1..=size` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Grid {
    pub fn new(size: u32) -> Self {
        Self { size: size as i32 }
    }

    pub fn size(&self) -> u32 {
        self.size as u32
    }

    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    pub fn is_in_bounds(&self, point: Point) -> bool {
        (1..=self.size).contains(&point.x) && (1..=self.size).contains(&point.y)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (1..=self.size).flat_map(move |y| (1..=self.size).map(move |x| Point::new(x, y)))
    }
}
