//! Immutable raster captures of a drawing surface.

use std::sync::Arc;
use thiserror::Error;

/// A full-surface raster at one instant.
///
/// The pixel buffer is shared, so cloning a snapshot (e.g. when the history
/// duplicates its top entry) never copies pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<P> {
    width: u32,
    height: u32,
    pixels: Arc<[P]>,
}

impl<P: Copy> Snapshot<P> {
    /// Build a snapshot from a row-major pixel buffer.
    pub fn new(width: u32, height: u32, pixels: Vec<P>) -> Result<Self, SnapshotError> {
        if width == 0 || height == 0 {
            return Err(SnapshotError::EmptySurface { width, height });
        }

        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(SnapshotError::BufferMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major pixels, `width * height` long.
    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    /// One row of pixels, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[P]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.pixels[start..start + self.width as usize])
    }

    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// True when both snapshots share the same pixel buffer.
    pub fn shares_pixels(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

/// Errors raised while capturing a raster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("cannot capture a {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },

    #[error("pixel buffer for {width}x{height} must hold {expected} pixels, got {actual}")]
    BufferMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
