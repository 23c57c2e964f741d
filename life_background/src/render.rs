// render.rs - Paints a grid generation onto a surface

use egui::Color32;

use crate::config::{BACKGROUND_COLOR, FOREGROUND_COLOR};
use crate::grid::Grid;
use crate::surface::{PixelRect, Surface};

pub struct Renderer {
    block_size: u32,
    background: Color32,
    foreground: Color32,
}

impl Renderer {
    pub fn new(block_size: u32) -> Self {
        Self {
            block_size,
            background: BACKGROUND_COLOR,
            foreground: FOREGROUND_COLOR,
        }
    }

    /// Clears the whole surface, then draws each live cell as a square inset
    /// by one pixel on every side of its block.
    pub fn render(&self, grid: &Grid, surface: &mut impl Surface) {
        let (width, height) = surface.size();
        surface.clear_rect(PixelRect::new(0, 0, width, height), self.background);

        let side = self.block_size.saturating_sub(2);
        if side == 0 {
            return;
        }
        for (x, y) in grid.live_positions() {
            let rect = PixelRect::new(
                x as u32 * self.block_size + 1,
                y as u32 * self.block_size + 1,
                side,
                side,
            );
            surface.fill_rect(rect, self.foreground);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;

    /// Records the calls made against it.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<(&'static str, PixelRect, Color32)>,
    }

    impl Surface for Recorder {
        fn size(&self) -> (u32, u32) {
            (30, 20)
        }

        fn clear_rect(&mut self, rect: PixelRect, color: Color32) {
            self.calls.push(("clear", rect, color));
        }

        fn fill_rect(&mut self, rect: PixelRect, color: Color32) {
            self.calls.push(("fill", rect, color));
        }
    }

    #[test]
    fn clears_first_then_insets_each_live_cell() {
        let mut grid = Grid::new(3, 2);
        grid.set_alive(0, 0);
        grid.set_alive(2, 1);

        let mut recorder = Recorder::default();
        Renderer::new(10).render(&grid, &mut recorder);

        assert_eq!(
            recorder.calls,
            vec![
                ("clear", PixelRect::new(0, 0, 30, 20), BACKGROUND_COLOR),
                ("fill", PixelRect::new(1, 1, 8, 8), FOREGROUND_COLOR),
                ("fill", PixelRect::new(21, 11, 8, 8), FOREGROUND_COLOR),
            ]
        );
    }

    #[test]
    fn repaints_leave_no_trace_of_dead_cells() {
        let mut canvas = Canvas::new(20, 10);
        let renderer = Renderer::new(10);

        let mut grid = Grid::new(2, 1);
        grid.set_alive(0, 0);
        renderer.render(&grid, &mut canvas);
        assert_eq!(canvas.pixel(0, 0), Some(BACKGROUND_COLOR));
        assert_eq!(canvas.pixel(5, 5), Some(Color32::from_gray(229)));
        assert_eq!(canvas.pixel(9, 5), Some(BACKGROUND_COLOR));

        renderer.render(&Grid::new(2, 1), &mut canvas);
        assert_eq!(canvas.pixel(5, 5), Some(BACKGROUND_COLOR));
    }

    #[test]
    fn tiny_blocks_only_clear() {
        let mut grid = Grid::new(1, 1);
        grid.set_alive(0, 0);
        let mut recorder = Recorder::default();
        Renderer::new(2).render(&grid, &mut recorder);
        assert_eq!(recorder.calls.len(), 1);
    }
}
