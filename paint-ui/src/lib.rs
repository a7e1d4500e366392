//! paint-ui: a freehand raster painting widget.
//!
//! A [`PaintSession`] owns the canvas, brush, theme and snapshot history.
//! Hosts translate their platform events into [`InputEvent`]s and feed them
//! through [`dispatch`].

pub mod config;
pub mod editor;
pub mod logging;

pub use config::{load_config, save_config, PaintConfig};
pub use editor::{
    dispatch, Brush, Canvas, Download, EventOutcome, InputEvent, PaintSession, SessionError,
    Shortcut, Theme,
};
