// surface.rs - Immediate-mode drawing surface and a software canvas implementing it

use egui::{Color32, ColorImage};

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// The part of `self` inside a `width x height` surface, as pixel ranges.
    fn clip(&self, width: u32, height: u32) -> (std::ops::Range<u32>, std::ops::Range<u32>) {
        let x_end = self.x.saturating_add(self.width).min(width);
        let y_end = self.y.saturating_add(self.height).min(height);
        (self.x.min(x_end)..x_end, self.y.min(y_end)..y_end)
    }
}

/// The two primitives the background needs from a host surface.
pub trait Surface {
    /// `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// Replaces every pixel in `rect` with `color`.
    fn clear_rect(&mut self, rect: PixelRect, color: Color32);

    /// Composites `color` over every pixel in `rect`.
    fn fill_rect(&mut self, rect: PixelRect, color: Color32);
}

/// Premultiplied source-over.
pub fn blend(dst: Color32, src: Color32) -> Color32 {
    let inv = 255 - src.a() as u32;
    let mix = |s: u8, d: u8| (s as u32 + (d as u32 * inv + 127) / 255).min(255) as u8;
    Color32::from_rgba_premultiplied(
        mix(src.r(), dst.r()),
        mix(src.g(), dst.g()),
        mix(src.b(), dst.b()),
        mix(src.a(), dst.a()),
    )
}

/// CPU pixel buffer. Hosts upload it as a texture after each render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color32>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color32::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Reallocates to a new size; contents become transparent.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn to_color_image(&self) -> ColorImage {
        ColorImage {
            size: [self.width as usize, self.height as usize],
            pixels: self.pixels.clone(),
        }
    }

    fn apply(&mut self, rect: PixelRect, mut paint: impl FnMut(Color32) -> Color32) {
        let (xs, ys) = rect.clip(self.width, self.height);
        let stride = self.width as usize;
        for y in ys {
            let row = y as usize * stride;
            for x in xs.clone() {
                let pixel = &mut self.pixels[row + x as usize];
                *pixel = paint(*pixel);
            }
        }
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, rect: PixelRect, color: Color32) {
        self.apply(rect, |_| color);
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color32) {
        self.apply(rect, |dst| blend(dst, color));
    }
}
