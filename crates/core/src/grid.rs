//! Grid module - playfield geometry
//!
//! The grid is `width x height` cells. The outermost ring is the border; every
//! cell strictly inside it is the interior where the snake and fruit live.
//! Leaving the interior on one side re-enters it on the opposite side.

use crate::types::{Position, MIN_GRID_SIDE};

/// Playfield dimensions and boundary rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Create a grid, clamping each side to at least [`MIN_GRID_SIDE`].
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(MIN_GRID_SIDE),
            height: height.max(MIN_GRID_SIDE),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Spawn cell for a fresh snake.
    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i16, (self.height / 2) as i16)
    }

    /// Check if a position is anywhere on the grid, border included.
    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u16) < self.width && (p.y as u16) < self.height
    }

    pub fn is_interior(&self, p: Position) -> bool {
        p.x >= 1 && p.y >= 1 && p.x <= self.max_x() && p.y <= self.max_y()
    }

    /// Number of interior cells.
    pub fn interior_cells(&self) -> usize {
        (self.width as usize - 2) * (self.height as usize - 2)
    }

    /// Largest interior column.
    pub fn max_x(&self) -> i16 {
        self.width as i16 - 2
    }

    /// Largest interior row.
    pub fn max_y(&self) -> i16 {
        self.height as i16 - 2
    }

    /// Fold a position that stepped past the interior back onto the opposite edge.
    ///
    /// Each axis is handled independently; the other coordinate is left as is.
    pub fn wrap(&self, p: Position) -> Position {
        let mut out = p;
        if out.x < 1 {
            out.x = self.max_x();
        } else if out.x > self.max_x() {
            out.x = 1;
        }
        if out.y < 1 {
            out.y = self.max_y();
        } else if out.y > self.max_y() {
            out.y = 1;
        }
        out
    }

    /// Interior cells in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = Position> {
        let (max_x, max_y) = (self.max_x(), self.max_y());
        (1..=max_y).flat_map(move |y| (1..=max_x).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_grids_are_clamped() {
        let g = Grid::new(1, 0);
        assert_eq!(g.width(), MIN_GRID_SIDE);
        assert_eq!(g.height(), MIN_GRID_SIDE);
        assert_eq!(g.interior_cells(), 1);
    }

    #[test]
    fn interior_excludes_border() {
        let g = Grid::new(30, 10);
        assert_eq!(g.interior_cells(), 28 * 8);
        assert!(!g.is_interior(Position::new(0, 5)));
        assert!(!g.is_interior(Position::new(29, 5)));
        assert!(!g.is_interior(Position::new(5, 0)));
        assert!(!g.is_interior(Position::new(5, 9)));
        assert!(g.is_interior(Position::new(1, 1)));
        assert!(g.is_interior(Position::new(28, 8)));
        assert_eq!(g.interior().count(), g.interior_cells());
        assert!(g.interior().all(|p| g.is_interior(p)));
    }

    #[test]
    fn wrap_folds_each_axis_independently() {
        let g = Grid::new(30, 10);
        assert_eq!(g.wrap(Position::new(0, 4)), Position::new(28, 4));
        assert_eq!(g.wrap(Position::new(29, 4)), Position::new(1, 4));
        assert_eq!(g.wrap(Position::new(7, 0)), Position::new(7, 8));
        assert_eq!(g.wrap(Position::new(7, 9)), Position::new(7, 1));
        assert_eq!(g.wrap(Position::new(7, 4)), Position::new(7, 4));
    }

    #[test]
    fn center_of_reference_grid() {
        assert_eq!(Grid::new(30, 10).center(), Position::new(15, 5));
    }
}
