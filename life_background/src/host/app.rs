// host/app.rs - eframe window that shows the background full-bleed

use eframe::egui;
use egui::{Color32, Rect, TextureHandle, TextureOptions, Vec2};
use std::time::Instant;

use crate::config::{DriverConfig, SimulationConfig, BACKGROUND_COLOR};
use crate::driver::{AnimationDriver, Scheduler};
use crate::surface::{Canvas, Surface};

/// `requestAnimationFrame` for egui: one more repaint at the next refresh.
struct RepaintScheduler<'a>(&'a egui::Context);

impl Scheduler for RepaintScheduler<'_> {
    fn request_frame(&mut self) {
        self.0.request_repaint();
    }
}

/// The driver is created on the first frame, once the panel size is known.
/// The canvas is only repainted on accepted ticks; the uploaded texture keeps
/// showing the last generation in between.
#[derive(Default)]
pub struct BackgroundApp {
    driver: Option<AnimationDriver>,
    canvas: Canvas,
    texture: Option<TextureHandle>,
}

impl BackgroundApp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl eframe::App for BackgroundApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
                let area = response.rect;
                let pixel_size = (
                    area.width().round().max(0.0) as u32,
                    area.height().round().max(0.0) as u32,
                );
                let now = Instant::now();

                let driver = self.driver.get_or_insert_with(|| {
                    AnimationDriver::start(DriverConfig::default(), SimulationConfig::default(), pixel_size, now)
                });
                driver.resize(pixel_size, now);
                if self.canvas.size() != driver.surface_size() {
                    let (width, height) = driver.surface_size();
                    self.canvas.resize(width, height);
                    self.texture = None;
                }

                // Click to seed
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let local = pos - area.min;
                        driver.click(local.x, local.y);
                    }
                }

                if driver.tick(now, &mut self.canvas, &mut RepaintScheduler(ctx)) {
                    let image = self.canvas.to_color_image();
                    match &mut self.texture {
                        Some(texture) => texture.set(image, TextureOptions::NEAREST),
                        None => {
                            self.texture = Some(ctx.load_texture("life-background", image, TextureOptions::NEAREST));
                        }
                    }
                }

                match &self.texture {
                    Some(texture) => {
                        let (width, height) = driver.surface_size();
                        let rect = Rect::from_min_size(area.min, Vec2::new(width as f32, height as f32));
                        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                        painter.image(texture.id(), rect, uv, Color32::WHITE);
                    }
                    None => {
                        painter.rect_filled(area, 0.0, BACKGROUND_COLOR);
                    }
                }
            });
    }
}
