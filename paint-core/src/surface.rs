//! Contract between the history and whatever holds the live pixels.

use tracing::debug;

use crate::{History, Snapshot, SnapshotError};

/// A drawing surface that can be captured into, and repainted from, a [`Snapshot`].
pub trait Surface {
    type Pixel: Copy;

    /// Current pixel dimensions.
    fn dimensions(&self) -> (u32, u32);

    /// Capture the full surface. Fails on a zero-sized surface.
    fn capture(&self) -> Result<Snapshot<Self::Pixel>, SnapshotError>;

    /// Replace the surface content with `snapshot`, painted at the origin and
    /// clipped to the surface. Pixels outside the snapshot's extent end up blank.
    fn restore(&mut self, snapshot: &Snapshot<Self::Pixel>);
}

impl<P: Copy> History<Snapshot<P>> {
    /// Capture `surface` and commit it as the newest state.
    pub fn commit_from<S>(&mut self, surface: &S) -> Result<(), SnapshotError>
    where
        S: Surface<Pixel = P>,
    {
        let snapshot = surface.capture()?;
        self.commit(snapshot);
        Ok(())
    }

    /// Undo one step and repaint the surface. Returns false when there was
    /// nothing to undo.
    pub fn undo_onto<S>(&mut self, surface: &mut S) -> bool
    where
        S: Surface<Pixel = P>,
    {
        match self.undo() {
            Some(prev) => {
                surface.restore(&prev);
                true
            }
            None => false,
        }
    }

    /// Redo one step and repaint the surface. Returns false when the redo
    /// branch was empty.
    pub fn redo_onto<S>(&mut self, surface: &mut S) -> bool
    where
        S: Surface<Pixel = P>,
    {
        match self.redo() {
            Some(next) => {
                surface.restore(&next);
                true
            }
            None => false,
        }
    }

    /// Repaint the last committed state, e.g. after a destructive resize.
    pub fn restore_current<S>(&self, surface: &mut S)
    where
        S: Surface<Pixel = P>,
    {
        let current = self.current();
        debug!(
            snapshot = ?current.dimensions(),
            surface = ?surface.dimensions(),
            "restoring last committed snapshot"
        );
        surface.restore(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A one-row surface of bytes.
    struct Strip {
        cells: Vec<u8>,
    }

    impl Surface for Strip {
        type Pixel = u8;

        fn dimensions(&self) -> (u32, u32) {
            (self.cells.len() as u32, 1)
        }

        fn capture(&self) -> Result<Snapshot<u8>, SnapshotError> {
            Snapshot::new(self.cells.len() as u32, 1, self.cells.clone())
        }

        fn restore(&mut self, snapshot: &Snapshot<u8>) {
            for (cell, px) in self.cells.iter_mut().zip(snapshot.pixels()) {
                *cell = *px;
            }
        }
    }

    #[test]
    fn undo_and_redo_repaint_the_surface() {
        let mut strip = Strip { cells: vec![0; 3] };
        let mut history = History::new(5, strip.capture().unwrap()).unwrap();

        strip.cells[0] = 9;
        history.commit_from(&strip).unwrap();

        assert!(history.undo_onto(&mut strip));
        assert_eq!(strip.cells, vec![0, 0, 0]);

        assert!(history.redo_onto(&mut strip));
        assert_eq!(strip.cells, vec![9, 0, 0]);
    }

    #[test]
    fn noop_undo_leaves_surface_alone() {
        let mut strip = Strip { cells: vec![1, 2] };
        let mut history = History::new(5, strip.capture().unwrap()).unwrap();

        strip.cells[1] = 5;
        assert!(!history.undo_onto(&mut strip));
        assert!(!history.redo_onto(&mut strip));
        assert_eq!(strip.cells, vec![1, 5]);
    }

    #[test]
    fn empty_surface_is_not_committed() {
        let strip = Strip { cells: vec![] };
        let mut history = History::new(5, Snapshot::new(1, 1, vec![0]).unwrap()).unwrap();

        assert!(history.commit_from(&strip).is_err());
        assert_eq!(history.undo_len(), 1);
    }
}
