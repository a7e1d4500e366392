// Routes host input events to the painting session.

use egui::{Key, Modifiers, Pos2};
use tracing::{debug, trace, warn};

use crate::editor::export::Download;
use crate::editor::session::PaintSession;

/// Prompt shown when the page is about to be closed.
pub const UNLOAD_WARNING: &str = "Are you sure? Unsaved changes will be cleared.";

/// Everything the host can feed into the widget. Pointer positions are in
/// client coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Pos2 },
    PointerMove { pos: Pos2 },
    PointerUp,
    Key { key: Key, modifiers: Modifiers },
    Resize { width: u32, height: u32 },
    ColorInput(String),
    SizeInput(String),
    ClearClicked,
    SaveClicked,
    ThemeToggled,
    BeforeUnload,
}

/// What the host should do after an event was handled.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventOutcome {
    /// Suppress the platform's own handling of the event.
    pub prevent_default: bool,
    pub download: Option<Download>,
    pub unload_prompt: Option<&'static str>,
    /// The toggle button's new label after a theme change.
    pub theme_label: Option<&'static str>,
}

/// A keyboard shortcut bound to a history command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: Key,
}

impl Shortcut {
    pub const UNDO: Shortcut = Shortcut { key: Key::Z };
    pub const REDO: Shortcut = Shortcut { key: Key::Y };

    /// Ctrl plus the key. Holding shift changes the key and does not match.
    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        key == self.key && modifiers.ctrl && !modifiers.shift
    }
}

pub fn dispatch(session: &mut PaintSession, event: InputEvent) -> EventOutcome {
    trace!(?event, "dispatching input");
    match event {
        InputEvent::PointerDown { pos } => on_pointer_down(session, pos),
        InputEvent::PointerMove { pos } => on_pointer_move(session, pos),
        InputEvent::PointerUp => on_pointer_up(session),
        InputEvent::Key { key, modifiers } => on_key(session, key, modifiers),
        InputEvent::Resize { width, height } => on_resize(session, width, height),
        InputEvent::ColorInput(value) => on_color_input(session, &value),
        InputEvent::SizeInput(value) => on_size_input(session, &value),
        InputEvent::ClearClicked => on_clear(session),
        InputEvent::SaveClicked => on_save(session),
        InputEvent::ThemeToggled => on_theme_toggled(session),
        InputEvent::BeforeUnload => on_before_unload(),
    }
}

fn on_pointer_down(session: &mut PaintSession, pos: Pos2) -> EventOutcome {
    session.begin_stroke(pos);
    EventOutcome::default()
}

fn on_pointer_move(session: &mut PaintSession, pos: Pos2) -> EventOutcome {
    session.extend_stroke(pos);
    EventOutcome::default()
}

fn on_pointer_up(session: &mut PaintSession) -> EventOutcome {
    session.end_stroke();
    EventOutcome::default()
}

fn on_key(session: &mut PaintSession, key: Key, modifiers: Modifiers) -> EventOutcome {
    let handled = if Shortcut::UNDO.matches(key, modifiers) {
        let changed = session.undo();
        debug!(changed, "undo shortcut");
        true
    } else if Shortcut::REDO.matches(key, modifiers) {
        let changed = session.redo();
        debug!(changed, "redo shortcut");
        true
    } else {
        false
    };

    EventOutcome {
        prevent_default: handled,
        ..EventOutcome::default()
    }
}

fn on_resize(session: &mut PaintSession, width: u32, height: u32) -> EventOutcome {
    session.resize(width, height);
    EventOutcome::default()
}

fn on_color_input(session: &mut PaintSession, value: &str) -> EventOutcome {
    if let Err(err) = session.set_brush_color(value) {
        warn!(%err, "ignoring color input");
    }
    EventOutcome::default()
}

fn on_size_input(session: &mut PaintSession, value: &str) -> EventOutcome {
    if let Err(err) = session.set_brush_size(value) {
        warn!(%err, "ignoring size input");
    }
    EventOutcome::default()
}

fn on_clear(session: &mut PaintSession) -> EventOutcome {
    session.clear();
    EventOutcome::default()
}

fn on_save(session: &mut PaintSession) -> EventOutcome {
    match session.export_png() {
        Ok(download) => EventOutcome {
            download: Some(download),
            ..EventOutcome::default()
        },
        Err(err) => {
            warn!(%err, "export failed");
            EventOutcome::default()
        }
    }
}

fn on_theme_toggled(session: &mut PaintSession) -> EventOutcome {
    let theme = session.toggle_theme();
    EventOutcome {
        theme_label: Some(theme.toggle_label()),
        ..EventOutcome::default()
    }
}

fn on_before_unload() -> EventOutcome {
    EventOutcome {
        prevent_default: true,
        unload_prompt: Some(UNLOAD_WARNING),
        ..EventOutcome::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_require_ctrl_without_shift() {
        assert!(Shortcut::UNDO.matches(Key::Z, Modifiers::CTRL));
        assert!(Shortcut::REDO.matches(Key::Y, Modifiers::CTRL));
        assert!(!Shortcut::UNDO.matches(Key::Z, Modifiers::NONE));
        assert!(!Shortcut::UNDO.matches(Key::Z, Modifiers::CTRL | Modifiers::SHIFT));
        assert!(!Shortcut::UNDO.matches(Key::Y, Modifiers::CTRL));
    }
}
