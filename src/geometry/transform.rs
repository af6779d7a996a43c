//! Axis transforms between logical and screen coordinates.
//!
//! All four transforms are closed-form and stateless. Map dimensions are a
//! caller precondition: zero width or height propagates infinity/NaN rather
//! than being guarded here.
//!
//! ## Canonical precision
//!
//! Coordinates serialized back into map text are fixed to 2 decimal places
//! ([`format_coord`]). This makes the screen-to-logical round trip lossy by
//! design: it bounds the verbosity of generated documents and keeps their
//! diffs stable. Repeated drag-commit cycles re-read the already-rounded
//! value, so sub-centesimal drift per commit is expected behavior, not a
//! precision bug. Pending product clarification, do not widen the format.

/// Convert a visibility fraction to a y pixel offset (y axis points down).
pub fn visibility_to_y(visibility: f64, map_height: f64) -> f64 {
    (1.0 - visibility) * map_height
}

/// Convert a maturity fraction to an x pixel offset.
pub fn maturity_to_x(maturity: f64, map_width: f64) -> f64 {
    maturity * map_width
}

/// Convert an x pixel offset back to a maturity fraction.
pub fn x_to_maturity(x: f64, map_width: f64) -> f64 {
    x / map_width
}

/// Convert a y pixel offset back to a visibility fraction.
pub fn y_to_visibility(y: f64, map_height: f64) -> f64 {
    1.0 - y / map_height
}

/// Serialize a coordinate for map text: 2 decimal places, half away from
/// zero. Negative zero normalizes to `0.00`.
pub fn format_coord(value: f64) -> String {
    // f64::round is half-away-from-zero, unlike format!'s half-to-even.
    let rounded = (value * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", rounded)
}
