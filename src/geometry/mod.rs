//! Coordinate spaces for the map canvas

pub mod transform;

pub use transform::{
    format_coord, maturity_to_x, visibility_to_y, x_to_maturity, y_to_visibility,
};

/// Pixel dimensions of the map canvas.
///
/// Both dimensions must be positive; the transforms do not guard against
/// zero and will propagate whatever arithmetic results (infinity/NaN).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapDimensions {
    pub width: f64,
    pub height: f64,
}

impl MapDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A position on the map's logical axes.
///
/// `maturity` runs left to right (0 = genesis, 1 = commodity), `visibility`
/// bottom to top (0 = low value chain position, 1 = highly visible). Values
/// are fractions of the axes but are not clamped to [0, 1]: a drag past the
/// canvas edge legitimately produces an off-chart position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalPosition {
    pub maturity: f64,
    pub visibility: f64,
}

impl LogicalPosition {
    pub fn new(maturity: f64, visibility: f64) -> Self {
        Self {
            maturity,
            visibility,
        }
    }

    /// Project onto the canvas in pixels.
    pub fn to_screen(&self, dims: MapDimensions) -> ScreenPosition {
        ScreenPosition {
            x: maturity_to_x(self.maturity, dims.width),
            y: visibility_to_y(self.visibility, dims.height),
        }
    }
}

/// A position on the canvas in pixels.
///
/// The y axis is inverted relative to visibility: visibility 1 is y = 0,
/// visibility 0 is y = height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
}

impl ScreenPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Map back to the logical axes.
    pub fn to_logical(&self, dims: MapDimensions) -> LogicalPosition {
        LogicalPosition {
            maturity: x_to_maturity(self.x, dims.width),
            visibility: y_to_visibility(self.y, dims.height),
        }
    }
}
