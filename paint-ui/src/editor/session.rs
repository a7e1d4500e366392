//! The painting session: one object owning everything the input handlers touch.
//!
//! Holds the canvas, the brush, the snapshot history and the theme. Stroke
//! state lives here too, so handlers never reach for globals.

use egui::{Color32, Pos2};
use paint_core::{History, HistoryError, Snapshot, SnapshotError, Surface};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, PaintConfig};
use crate::editor::export::{self, Download, ExportError};
use crate::{Brush, Canvas, Theme};

pub struct PaintSession {
    canvas: Canvas,
    brush: Brush,
    history: History<Snapshot<Color32>>,
    theme: Theme,
    /// Canvas-space position of the last sample while a stroke is active.
    stroke: Option<Pos2>,
    /// Client-space top-left corner of the canvas.
    canvas_origin: Pos2,
    export_file_name: String,
}

impl PaintSession {
    /// Build a blank session and commit its baseline state.
    pub fn new(config: &PaintConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let canvas = Canvas::new(
            config.canvas.width,
            config.canvas.height,
            Color32::TRANSPARENT,
        );
        let history = History::from_config(&config.history, canvas.capture()?)?;
        let brush = Brush::new(config.brush.size, config.brush_color()?);

        info!(
            width = canvas.width(),
            height = canvas.height(),
            max_depth = history.max_depth(),
            "painting session started"
        );

        Ok(Self {
            canvas,
            brush,
            history,
            theme: config.theme,
            stroke: None,
            canvas_origin: Pos2::ZERO,
            export_file_name: config.export_file_name.clone(),
        })
    }

    /// Where the canvas sits in client coordinates.
    pub fn set_canvas_origin(&mut self, origin: Pos2) {
        self.canvas_origin = origin;
    }

    /// Translate a client-space pointer position into canvas space.
    pub fn to_canvas(&self, client: Pos2) -> Pos2 {
        (client - self.canvas_origin).to_pos2()
    }

    pub fn is_painting(&self) -> bool {
        self.stroke.is_some()
    }

    /// Start a stroke and stamp a dot at the press point.
    pub fn begin_stroke(&mut self, client: Pos2) {
        let at = self.to_canvas(client);
        debug!(?at, "stroke started");
        self.brush.dab(&mut self.canvas, at);
        self.stroke = Some(at);
    }

    /// Continue the active stroke to `client`. Ignored when not painting.
    pub fn extend_stroke(&mut self, client: Pos2) {
        let Some(last) = self.stroke else {
            return;
        };
        let at = self.to_canvas(client);
        self.brush.stroke(&mut self.canvas, last, at);
        self.stroke = Some(at);
    }

    /// Finish the active stroke and commit the surface. Returns whether a
    /// new state was committed.
    pub fn end_stroke(&mut self) -> bool {
        if self.stroke.take().is_none() {
            return false;
        }

        match self.history.commit_from(&self.canvas) {
            Ok(()) => {
                debug!(undo = self.history.undo_len(), "stroke committed");
                true
            }
            Err(err) => {
                warn!(%err, "stroke not committed");
                false
            }
        }
    }

    /// Returns whether the canvas changed.
    pub fn undo(&mut self) -> bool {
        self.history.undo_onto(&mut self.canvas)
    }

    /// Returns whether the canvas changed.
    pub fn redo(&mut self) -> bool {
        self.history.redo_onto(&mut self.canvas)
    }

    /// Wipe the canvas and start the history over from the blank surface.
    pub fn clear(&mut self) {
        self.stroke = None;
        self.canvas.clear();
        match self.canvas.capture() {
            Ok(blank) => self.history.reset(blank),
            Err(err) => warn!(%err, "history kept after clearing an empty canvas"),
        }
    }

    /// Resize the surface and repaint the last committed drawing onto it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.resize(width, height);
        self.history.restore_current(&mut self.canvas);
    }

    /// Set the brush colour from a `#rrggbb` string.
    pub fn set_brush_color(&mut self, input: &str) -> Result<(), SessionError> {
        let color = Color32::from_hex(input.trim()).map_err(|_| SessionError::InvalidColor {
            input: input.to_string(),
        })?;
        debug!(?color, "brush color changed");
        self.brush.color = color;
        Ok(())
    }

    /// Set the brush size from the text of a numeric input.
    pub fn set_brush_size(&mut self, input: &str) -> Result<(), SessionError> {
        let size = input
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| SessionError::InvalidBrushSize {
                input: input.to_string(),
            })?;
        debug!(size, "brush size changed");
        self.brush.size = size;
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        info!(theme = ?self.theme, "theme toggled");
        self.theme
    }

    /// Encode the current canvas as a PNG download.
    pub fn export_png(&self) -> Result<Download, SessionError> {
        let snapshot = self.canvas.capture()?;
        Ok(export::png_download(&snapshot, self.export_file_name.as_str())?)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn history(&self) -> &History<Snapshot<Color32>> {
        &self.history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("invalid brush color: {input}")]
    InvalidColor { input: String },

    #[error("invalid brush size: {input}")]
    InvalidBrushSize { input: String },
}
