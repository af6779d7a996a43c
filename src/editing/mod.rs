//! Text patching for element positions
//!
//! The map text is authoritative; the canvas is a derived projection. This
//! module locates the statement line backing an element identity and rewrites
//! only its coordinate tuple, leaving every other byte of the document
//! untouched.

pub mod engine;
pub mod matchers;
pub mod scan;

pub use engine::{Change, PositionUpdateEngine, UpdateOutcome};
pub use matchers::{
    ExistingCoordsMatcher, LineMatcher, LineNumberMatcher, MatchResult, NotDefinedCoordsMatcher,
    SingletonMatcher,
};
pub use scan::{scan_coords, CoordPair, Coords};
