// Editor module for the painting widget.

pub mod canvas;
pub mod export;
pub mod input;
pub mod session;
pub mod theme;
pub mod tools;

pub use canvas::Canvas;
pub use export::{Download, ExportError};
pub use input::{dispatch, EventOutcome, InputEvent, Shortcut};
pub use session::{PaintSession, SessionError};
pub use theme::Theme;
pub use tools::Brush;
