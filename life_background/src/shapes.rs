// shapes.rs - Catalog of small stencils stamped onto the grid

use crate::grid::Grid;

/// A fixed stencil, cells given as `(row, col)` offsets from its origin.
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Shape {
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    /// Unions the stencil into `grid` with its top-left corner at `(x, y)`.
    /// Cells landing outside the grid are dropped. Returns how many cells landed.
    pub fn stamp(&self, grid: &mut Grid, x: i32, y: i32) -> usize {
        self.cells
            .iter()
            .filter(|&&(row, col)| {
                grid.set_alive(x.saturating_add(col as i32), y.saturating_add(row as i32))
            })
            .count()
    }
}

pub const SHAPES: &[Shape] = &[
    Shape {
        name: "Dot",
        cells: &[(0, 0)],
    },
    Shape {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Shape {
        // .###
        // ###.
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Shape {
        // ..#
        // #.#
        // .##
        name: "Glider",
        cells: &[(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)],
    },
];

pub fn by_name(name: &str) -> Option<&'static Shape> {
    SHAPES.iter().find(|shape| shape.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_dimensions() {
        let dims: Vec<_> = SHAPES.iter().map(|s| (s.height(), s.width())).collect();
        assert_eq!(dims, vec![(1, 1), (1, 3), (2, 4), (3, 3)]);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(by_name("Glider").map(|s| s.cells.len()), Some(5));
        assert!(by_name("Gosper Glider Gun").is_none());
    }

    #[test]
    fn stamp_clips_at_every_edge() {
        let toad = by_name("Toad").unwrap();
        let mut grid = Grid::new(3, 3);

        assert_eq!(toad.stamp(&mut grid, 1, 2), 1);   // only stencil cell (0, 1) lands
        assert!(grid.is_alive(2, 2));

        assert_eq!(toad.stamp(&mut grid, -1, -1), 2); // stencil cells (1, 1) and (1, 2) land
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(1, 0));

        assert_eq!(toad.stamp(&mut grid, 50, -50), 0);
        assert_eq!(toad.stamp(&mut grid, i32::MAX, i32::MAX), 0);
        assert_eq!(grid.live_cells(), 3);
    }

    #[test]
    fn stamp_never_clears() {
        let mut grid = Grid::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                grid.set_alive(x, y);
            }
        }
        for shape in SHAPES {
            shape.stamp(&mut grid, 0, 0);
        }
        assert_eq!(grid.live_cells(), 16);
    }
}
