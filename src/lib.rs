//! Wardley Edit - position editing for text-defined Wardley Maps
//!
//! The map's authoritative source is a line-oriented DSL (`component Kettle
//! [0.43, 0.35]`); the visual canvas is a derived projection of that text.
//! This library keeps the two consistent under direct manipulation: it
//! converts between logical map coordinates and screen pixels, tracks drag
//! gestures, and rewrites exactly the coordinate tuple backing a dragged
//! element without disturbing any other byte of the document.
//!
//! Parsing the full DSL into an element list and rendering symbols are
//! external collaborators; this crate owns the coordinate transform, the
//! position update engine, and the drag state machine.
//!
//! # Example
//!
//! ```rust
//! use wardley_edit::{move_element, ElementIdentity, ElementKind, LogicalPosition};
//!
//! let text = "component Kettle [0.43, 0.35]\ncomponent Teapot [0.20, 0.80]";
//! let identity = ElementIdentity::named(ElementKind::Component, "Kettle");
//! let out = move_element(text, &identity, LogicalPosition::new(0.90, 0.10));
//!
//! assert_eq!(out.text, "component Kettle [0.10, 0.90]\ncomponent Teapot [0.20, 0.80]");
//! ```

pub mod config;
pub mod editing;
pub mod elements;
pub mod geometry;
pub mod interaction;

pub use config::{ConfigError, EditorConfig};
pub use editing::{Change, LineMatcher, MatchResult, PositionUpdateEngine, UpdateOutcome};
pub use elements::{ElementIdentity, ElementKind};
pub use geometry::{LogicalPosition, MapDimensions, ScreenPosition};
pub use interaction::{AxisLock, DragController, DragState, ModifierState};

/// Move an element to a new logical position using the standard matcher
/// chain.
///
/// This is the main entry point for one-shot updates. The result's `text` is
/// byte-identical to the input outside the single rewritten line; when no
/// line corresponds to the identity the update is a no-op and
/// `outcome.changed` is `None`.
pub fn move_element(
    text: &str,
    identity: &ElementIdentity,
    position: LogicalPosition,
) -> UpdateOutcome {
    PositionUpdateEngine::new().update(text, identity, position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_named_component() {
        let out = move_element(
            "component Kettle [0.43, 0.35]",
            &ElementIdentity::named(ElementKind::Component, "Kettle"),
            LogicalPosition::new(0.9, 0.1),
        );
        assert_eq!(out.text, "component Kettle [0.10, 0.90]");
    }

    #[test]
    fn test_move_unknown_element_is_noop() {
        let text = "component Kettle [0.43, 0.35]";
        let out = move_element(
            text,
            &ElementIdentity::named(ElementKind::Component, "Teapot"),
            LogicalPosition::new(0.9, 0.1),
        );
        assert_eq!(out.text, text);
        assert!(out.changed.is_none());
    }

    #[test]
    fn test_move_singleton() {
        let out = move_element(
            "title Tea Shop\nannotations [0.60, 0.02]",
            &ElementIdentity::singleton(ElementKind::Annotations),
            LogicalPosition::new(0.05, 0.95),
        );
        assert_eq!(out.text, "title Tea Shop\nannotations [0.95, 0.05]");
    }

    #[test]
    fn test_move_by_line_number() {
        let out = move_element(
            "note a note [0.1, 0.1]\nnote a note [0.2, 0.2]",
            &ElementIdentity::line(1),
            LogicalPosition::new(0.5, 0.5),
        );
        assert_eq!(out.text, "note a note [0.1, 0.1]\nnote a note [0.50, 0.50]");
    }
}
