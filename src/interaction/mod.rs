//! Drag gesture state machine
//!
//! One controller tracks one interactive element. Gesture state lives in an
//! explicit [`DragState`] value rather than UI-framework component state, so
//! the whole interaction is testable without a rendering harness. Pointer
//! samples must arrive in order: each delta is computed against the
//! immediately preceding sample, so reordering would corrupt the accumulated
//! position. The text document is never touched during a gesture; mutation
//! happens once, on commit.

use crate::editing::{PositionUpdateEngine, UpdateOutcome};
use crate::elements::ElementIdentity;
use crate::geometry::{MapDimensions, ScreenPosition};

/// Keyboard modifier context at pointer-down time.
///
/// Passed in explicitly instead of read from ambient global state. An active
/// mod key reserves the pointer for alternate interactions (linking), so it
/// suppresses drag initiation entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub mod_key: bool,
}

impl ModifierState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_mod_key() -> Self {
        Self { mod_key: true }
    }
}

/// Per-axis render locks.
///
/// A locked axis pins the rendered (and therefore committed) coordinate
/// regardless of drag state, for elements whose position is only meaningful
/// on one axis, e.g. accelerators fixed on their evolution band.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisLock {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl AxisLock {
    pub fn free() -> Self {
        Self::default()
    }

    pub fn fixed_x(x: f64) -> Self {
        Self {
            x: Some(x),
            y: None,
        }
    }

    pub fn fixed_y(y: f64) -> Self {
        Self {
            x: None,
            y: Some(y),
        }
    }

    fn apply(&self, position: ScreenPosition) -> ScreenPosition {
        ScreenPosition {
            x: self.x.unwrap_or(position.x),
            y: self.y.unwrap_or(position.y),
        }
    }
}

/// Gesture lifecycle: `idle -> dragging -> (idle | cancelled)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        /// Pointer position at gesture start
        start: ScreenPosition,
        /// Most recent pointer sample
        last: ScreenPosition,
        /// Element position accumulated from scale-normalized deltas
        accumulated: ScreenPosition,
    },
}

/// Interaction state machine for one draggable element.
#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    state: DragState,
    lock: AxisLock,
    /// Rendered position outside a gesture; restored on cancel
    resting: ScreenPosition,
}

impl DragController {
    pub fn new(resting: ScreenPosition) -> Self {
        Self {
            state: DragState::Idle,
            lock: AxisLock::free(),
            resting,
        }
    }

    pub fn with_lock(mut self, lock: AxisLock) -> Self {
        self.lock = lock;
        self
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The current gesture state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Where the element renders right now: the live accumulated position
    /// during a gesture, the resting position otherwise, locked axes applied
    /// either way.
    pub fn position(&self) -> ScreenPosition {
        let position = match self.state {
            DragState::Idle => self.resting,
            DragState::Dragging { accumulated, .. } => accumulated,
        };
        self.lock.apply(position)
    }

    /// Start a gesture at the given pointer position. Returns whether one
    /// started: an active mod key gates initiation, and a pointer-down while
    /// already dragging is ignored.
    pub fn pointer_down(&mut self, at: ScreenPosition, modifiers: ModifierState) -> bool {
        if modifiers.mod_key || self.is_dragging() {
            return false;
        }
        self.state = DragState::Dragging {
            start: at,
            last: at,
            accumulated: self.resting,
        };
        true
    }

    /// Feed one pointer-move sample. The delta against the previous sample
    /// is divided by `scale_factor` so drag distance is invariant to zoom,
    /// then accumulated. Ignored while idle.
    pub fn pointer_move(&mut self, at: ScreenPosition, scale_factor: f64) {
        let DragState::Dragging {
            start,
            last,
            accumulated,
        } = self.state
        else {
            return;
        };
        self.state = DragState::Dragging {
            start,
            last: at,
            accumulated: ScreenPosition {
                x: accumulated.x + (at.x - last.x) / scale_factor,
                y: accumulated.y + (at.y - last.y) / scale_factor,
            },
        };
    }

    /// End the gesture and return the final on-screen position (locked axes
    /// applied), which becomes the new resting position. Returns `None` when
    /// no gesture was in progress.
    pub fn pointer_up(&mut self) -> Option<ScreenPosition> {
        let DragState::Dragging { accumulated, .. } = self.state else {
            return None;
        };
        let final_position = self.lock.apply(accumulated);
        self.resting = final_position;
        self.state = DragState::Idle;
        Some(final_position)
    }

    /// Abort the gesture: accumulated position is discarded, the pre-gesture
    /// resting position is restored, and the update engine is not invoked.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// End the gesture and write the element's new position through the
    /// update engine exactly once: final screen position -> logical
    /// coordinates -> text rewrite. Returns `None` when no gesture was in
    /// progress.
    pub fn commit(
        &mut self,
        text: &str,
        identity: &ElementIdentity,
        dims: MapDimensions,
        engine: &PositionUpdateEngine,
    ) -> Option<UpdateOutcome> {
        let final_position = self.pointer_up()?;
        let logical = final_position.to_logical(dims);
        Some(engine.update(text, identity, logical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_at(x: f64, y: f64) -> DragController {
        DragController::new(ScreenPosition::new(x, y))
    }

    #[test]
    fn test_idle_renders_resting_position() {
        let c = controller_at(40.0, 60.0);
        assert!(!c.is_dragging());
        assert_eq!(c.position(), ScreenPosition::new(40.0, 60.0));
    }

    #[test]
    fn test_scale_normalized_accumulation() {
        // Two (dx=20, dy=-10) samples at scale 2 accumulate (20, -10) total:
        // (10, -5) per event, not the raw pixel sum.
        let mut c = controller_at(100.0, 100.0);
        assert!(c.pointer_down(ScreenPosition::new(300.0, 200.0), ModifierState::none()));
        c.pointer_move(ScreenPosition::new(320.0, 190.0), 2.0);
        c.pointer_move(ScreenPosition::new(340.0, 180.0), 2.0);
        assert_eq!(c.position(), ScreenPosition::new(120.0, 90.0));
    }

    #[test]
    fn test_mod_key_gates_initiation() {
        let mut c = controller_at(0.0, 0.0);
        assert!(!c.pointer_down(ScreenPosition::new(5.0, 5.0), ModifierState::with_mod_key()));
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_reentrant_pointer_down_ignored() {
        let mut c = controller_at(0.0, 0.0);
        assert!(c.pointer_down(ScreenPosition::new(5.0, 5.0), ModifierState::none()));
        c.pointer_move(ScreenPosition::new(15.0, 5.0), 1.0);
        // Second down must not reset the accumulated position.
        assert!(!c.pointer_down(ScreenPosition::new(50.0, 50.0), ModifierState::none()));
        assert_eq!(c.position(), ScreenPosition::new(10.0, 0.0));
    }

    #[test]
    fn test_pointer_up_returns_final_and_goes_idle() {
        let mut c = controller_at(10.0, 10.0);
        c.pointer_down(ScreenPosition::new(0.0, 0.0), ModifierState::none());
        c.pointer_move(ScreenPosition::new(30.0, 40.0), 1.0);
        let final_position = c.pointer_up().unwrap();
        assert_eq!(final_position, ScreenPosition::new(40.0, 50.0));
        assert!(!c.is_dragging());
        // The final position becomes the new resting position.
        assert_eq!(c.position(), final_position);
        assert_eq!(c.pointer_up(), None);
    }

    #[test]
    fn test_cancel_restores_resting_position() {
        let mut c = controller_at(10.0, 10.0);
        c.pointer_down(ScreenPosition::new(0.0, 0.0), ModifierState::none());
        c.pointer_move(ScreenPosition::new(30.0, 40.0), 1.0);
        c.cancel();
        assert!(!c.is_dragging());
        assert_eq!(c.position(), ScreenPosition::new(10.0, 10.0));
    }

    #[test]
    fn test_moves_while_idle_ignored() {
        let mut c = controller_at(10.0, 10.0);
        c.pointer_move(ScreenPosition::new(30.0, 40.0), 1.0);
        assert_eq!(c.position(), ScreenPosition::new(10.0, 10.0));
    }

    #[test]
    fn test_axis_lock_pins_rendered_position() {
        let mut c = controller_at(10.0, 80.0).with_lock(AxisLock::fixed_y(80.0));
        c.pointer_down(ScreenPosition::new(0.0, 0.0), ModifierState::none());
        c.pointer_move(ScreenPosition::new(25.0, -30.0), 1.0);
        // x tracks the drag, y stays pinned.
        assert_eq!(c.position(), ScreenPosition::new(35.0, 80.0));
        let final_position = c.pointer_up().unwrap();
        assert_eq!(final_position.y, 80.0);
    }

    #[test]
    fn test_fixed_x_lock() {
        let mut c = controller_at(50.0, 10.0).with_lock(AxisLock::fixed_x(50.0));
        c.pointer_down(ScreenPosition::new(0.0, 0.0), ModifierState::none());
        c.pointer_move(ScreenPosition::new(25.0, 30.0), 1.0);
        assert_eq!(c.position(), ScreenPosition::new(50.0, 40.0));
    }
}
