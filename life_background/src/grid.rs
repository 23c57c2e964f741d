// grid.rs - Bounded boolean grid for the background simulation
//
// Storage carries a one-cell dead border around the visible area, so
// neighbour lookups never need a bounds check.

const BORDER: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    stride: usize,      // width + 2 * BORDER
    cells: Vec<bool>,   // (height + 2) rows of `stride` cells
}

impl Grid {
    /// Zero-filled grid. A zero dimension yields an empty grid with no storage.
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            return Self::default();
        }
        let stride = width + 2 * BORDER;
        Self {
            width,
            height,
            stride,
            cells: vec![false; stride * (height + 2 * BORDER)],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Storage index of an in-range visible cell.
    fn index(&self, x: usize, y: usize) -> usize {
        (y + BORDER) * self.stride + x + BORDER
    }

    fn in_bounds(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// Out-of-range coordinates are dead.
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        match self.in_bounds(x, y) {
            Some((x, y)) => self.cells[self.index(x, y)],
            None => false,
        }
    }

    /// Marks a cell live. Never clears. Returns false when the coordinate was clipped.
    pub fn set_alive(&mut self, x: i32, y: i32) -> bool {
        match self.in_bounds(x, y) {
            Some((x, y)) => {
                let index = self.index(x, y);
                self.cells[index] = true;
                true
            }
            None => false,
        }
    }

    pub(crate) fn cell(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub(crate) fn put(&mut self, x: usize, y: usize, alive: bool) {
        let index = self.index(x, y);
        self.cells[index] = alive;
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Live cells among the 8 surrounding positions of a visible cell.
    pub fn neighbours(&self, x: usize, y: usize) -> u8 {
        let centre = self.index(x, y);
        let above = centre - self.stride;
        let below = centre + self.stride;
        [
            above - 1, above, above + 1,
            centre - 1,       centre + 1,
            below - 1, below, below + 1,
        ]
        .iter()
        .filter(|&&i| self.cells[i])
        .count() as u8
    }

    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Visible `(x, y)` positions of every live cell, row by row.
    pub fn live_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.cell(x, y))
                .map(move |x| (x, y))
        })
    }
}
