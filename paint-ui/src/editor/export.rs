//! PNG export of the drawing.
//!
//! Pixels are stored premultiplied by the canvas; PNG wants straight alpha,
//! so every pixel is unmultiplied on the way out.

use anyhow::Context;
use egui::Color32;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use paint_core::Snapshot;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// File name offered for downloads unless configured otherwise.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "drawing.png";

pub const PNG_MIME: &str = "image/png";

/// An encoded image ready to hand to the host as a file download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Encode a snapshot as an RGBA8 PNG.
pub fn encode_png(snapshot: &Snapshot<Color32>) -> Result<Vec<u8>, ExportError> {
    let (width, height) = snapshot.dimensions();
    debug!(width, height, "encoding png");

    let mut rgba = Vec::with_capacity(snapshot.pixels().len() * 4);
    for pixel in snapshot.pixels() {
        rgba.extend_from_slice(&pixel.to_srgba_unmultiplied());
    }

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(&rgba, width, height, ExtendedColorType::Rgba8)?;

    info!(bytes = bytes.len(), "png encoded");
    Ok(bytes)
}

/// Encode and wrap as a download named `file_name`.
pub fn png_download(
    snapshot: &Snapshot<Color32>,
    file_name: impl Into<String>,
) -> Result<Download, ExportError> {
    Ok(Download {
        file_name: file_name.into(),
        mime: PNG_MIME,
        bytes: encode_png(snapshot)?,
    })
}

/// Write a snapshot to disk as PNG.
pub fn save_png(path: impl AsRef<Path>, snapshot: &Snapshot<Color32>) -> anyhow::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir: {}", parent.display()))?;
    }

    let bytes = encode_png(snapshot).context("encode drawing as png")?;
    fs::write(path, bytes).with_context(|| format!("write png file: {}", path.display()))?;
    Ok(())
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_decodes_to_same_pixels() {
        let pixels = vec![
            Color32::RED,
            Color32::TRANSPARENT,
            Color32::from_rgb(10, 20, 30),
            Color32::BLACK,
        ];
        let snapshot = Snapshot::new(2, 2, pixels).unwrap();

        let bytes = encode_png(&snapshot).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();

        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 0, 0, 0]);
        assert_eq!(decoded.get_pixel(0, 1).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_download_carries_name_and_mime() {
        let snapshot = Snapshot::new(1, 1, vec![Color32::WHITE]).unwrap();
        let download = png_download(&snapshot, DEFAULT_EXPORT_FILE_NAME).unwrap();

        assert_eq!(download.file_name, "drawing.png");
        assert_eq!(download.mime, "image/png");
        assert!(download.bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_save_png_creates_parent_dir() {
        let snapshot = Snapshot::new(1, 1, vec![Color32::WHITE]).unwrap();
        let path = Path::new("target/test_exports/drawing.png");

        save_png(path, &snapshot).unwrap();
        let decoded = image::open(path).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }
}
