// Freehand brush for the canvas.

use crate::Canvas;
use egui::{Color32, Pos2};
use tracing::trace;

pub const DEFAULT_BRUSH_SIZE: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    pub size: u32,
    pub color: Color32,
}

impl Brush {
    pub fn new(size: u32, color: Color32) -> Self {
        Self { size, color }
    }

    /// Paint a round dot centred on `at`.
    pub fn dab(&self, canvas: &mut Canvas, at: Pos2) {
        self.stroke(canvas, at, at);
    }

    /// Paint a segment with round caps: every pixel whose centre lies within
    /// half the brush size of the segment `from..to`.
    pub fn stroke(&self, canvas: &mut Canvas, from: Pos2, to: Pos2) {
        trace!(
            "Applying Brush from {:?} to {:?} with size {} and color {:?}",
            from,
            to,
            self.size,
            self.color
        );

        let radius = self.size as f32 / 2.0;
        let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
        let max_x = (from.x.max(to.x) + radius).ceil();
        let max_y = (from.y.max(to.y) + radius).ceil();
        if max_x < 0.0 || max_y < 0.0 {
            return;
        }

        let max_x = (max_x as u32).min(canvas.width());
        let max_y = (max_y as u32).min(canvas.height());
        let radius_sq = radius * radius;

        let mut painted = 0usize;
        for py in min_y as u32..max_y {
            for px in min_x as u32..max_x {
                let centre = Pos2::new(px as f32 + 0.5, py as f32 + 0.5);
                if distance_sq_to_segment(centre, from, to) <= radius_sq
                    && canvas.set_pixel(px, py, self.color)
                {
                    painted += 1;
                }
            }
        }
        trace!("Brush painted {} pixels", painted);
    }
}

impl Default for Brush {
    fn default() -> Self {
        Brush::new(DEFAULT_BRUSH_SIZE, Color32::BLACK)
    }
}

fn distance_sq_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let (apx, apy) = (p.x - a.x, p.y - a.y);
    let len_sq = abx * abx + aby * aby;

    let t = if len_sq > 0.0 {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let dx = apx - t * abx;
    let dy = apy - t * aby;
    dx * dx + dy * dy
}
