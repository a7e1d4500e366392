// This is the raster surface the painting session draws on
// It starts fully transparent, the same as a freshly created 2D canvas

use egui::Color32;
use paint_core::{Snapshot, SnapshotError, Surface};
use tracing::{debug, info, trace, warn};

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color32>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        info!(
            "Creating new canvas of size {}x{} with background color {:?}",
            width, height, background
        );

        let total_pixels = width as usize * height as usize;
        debug!("Total pixels to initialize: {}", total_pixels);

        Self {
            width,
            height,
            pixels: vec![background; total_pixels],
        }
    }

    // Check if coordinates are within canvas bounds
    fn is_valid_coordinate(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    // Convert 2d coordinates to 1d index
    fn coord_to_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    // Get the color of a pixel at (x, y)
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color32> {
        if !self.is_valid_coordinate(x, y) {
            warn!(
                "Requested pixel color at invalid coordinates ({}, {})",
                x, y
            );
            return None;
        }

        Some(self.pixels[self.coord_to_index(x, y)])
    }

    // Set the color of a pixel at (x, y)
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color32) -> bool {
        if !self.is_valid_coordinate(x, y) {
            trace!("Ignoring pixel write outside canvas at ({}, {})", x, y);
            return false;
        }

        let index = self.coord_to_index(x, y);
        self.pixels[index] = color;
        true
    }

    // Fill entire canvas with a color
    pub fn fill(&mut self, color: Color32) {
        info!("Filling canvas {:?}", color);
        self.pixels.fill(color);
    }

    // Clear canvas back to transparent
    pub fn clear(&mut self) {
        info!("Clearing canvas");
        self.fill(Color32::TRANSPARENT);
    }

    /// Change the pixel dimensions. Like a browser canvas, this drops every
    /// pixel; callers repaint from history afterwards.
    pub fn resize(&mut self, width: u32, height: u32) {
        info!(
            "Resizing canvas from {}x{} to {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
        self.pixels = vec![Color32::TRANSPARENT; width as usize * height as usize];
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    // Get canvas dimensions
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Surface for Canvas {
    type Pixel = Color32;

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn capture(&self) -> Result<Snapshot<Color32>, SnapshotError> {
        trace!("Capturing {}x{} canvas", self.width, self.height);
        Snapshot::new(self.width, self.height, self.pixels.clone())
    }

    fn restore(&mut self, snapshot: &Snapshot<Color32>) {
        let cols = snapshot.width().min(self.width) as usize;
        let rows = snapshot.height().min(self.height);
        debug!(
            "Restoring {}x{} snapshot onto {}x{} canvas",
            snapshot.width(),
            snapshot.height(),
            self.width,
            self.height
        );

        // The snapshot replaces the whole surface; anything past its extent is blank
        self.pixels.fill(Color32::TRANSPARENT);
        for y in 0..rows {
            let Some(src) = snapshot.row(y) else {
                break;
            };
            let start = self.coord_to_index(0, y);
            self.pixels[start..start + cols].copy_from_slice(&src[..cols]);
        }
    }
}

// Create a default canvas
impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(800, 600, Color32::TRANSPARENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_pixel() {
        let mut canvas = Canvas::new(4, 4, Color32::TRANSPARENT);
        assert!(canvas.set_pixel(3, 3, Color32::RED));
        assert!(!canvas.set_pixel(4, 0, Color32::RED));
        assert_eq!(canvas.get_pixel(3, 3), Some(Color32::RED));
        assert_eq!(canvas.get_pixel(0, 4), None);
    }

    #[test]
    fn test_clear_is_transparent() {
        let mut canvas = Canvas::new(3, 3, Color32::BLACK);
        canvas.clear();
        assert!(canvas.pixels().iter().all(|p| *p == Color32::TRANSPARENT));
    }

    #[test]
    fn test_capture_restore() {
        let mut canvas = Canvas::new(3, 2, Color32::TRANSPARENT);
        canvas.set_pixel(1, 1, Color32::BLUE);
        let snap = canvas.capture().unwrap();

        canvas.fill(Color32::GREEN);
        canvas.restore(&snap);
        assert_eq!(canvas.pixels(), snap.pixels());
    }

    #[test]
    fn test_restore_onto_larger_canvas_is_origin_aligned() {
        let mut small = Canvas::new(2, 2, Color32::TRANSPARENT);
        small.set_pixel(1, 1, Color32::RED);
        let snap = small.capture().unwrap();

        let mut big = Canvas::new(4, 3, Color32::WHITE);
        big.restore(&snap);
        assert_eq!(big.get_pixel(1, 1), Some(Color32::RED));
        assert_eq!(big.get_pixel(0, 0), Some(Color32::TRANSPARENT));
        // Outside the snapshot is cleared
        assert_eq!(big.get_pixel(2, 0), Some(Color32::TRANSPARENT));
        assert_eq!(big.get_pixel(0, 2), Some(Color32::TRANSPARENT));
        assert_eq!(big.get_pixel(3, 2), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_restore_onto_smaller_canvas_clips() {
        let mut big = Canvas::new(4, 4, Color32::TRANSPARENT);
        big.set_pixel(0, 0, Color32::RED);
        big.set_pixel(3, 3, Color32::BLUE);
        let snap = big.capture().unwrap();

        let mut small = Canvas::new(2, 2, Color32::WHITE);
        small.restore(&snap);
        assert_eq!(small.get_pixel(0, 0), Some(Color32::RED));
        assert_eq!(small.get_pixel(1, 1), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_zero_sized_capture_fails() {
        let canvas = Canvas::new(0, 10, Color32::TRANSPARENT);
        assert!(canvas.capture().is_err());
    }
}
