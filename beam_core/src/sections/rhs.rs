//! Rectangular hollow section (RHS).

use serde::{Deserialize, Serialize};

use super::{defined, rectangle_second_moment, SectionGeometry};

/// RHS dimensions in metres.
///
/// Modelled as an outer `b × h` rectangle minus an inner
/// `(b − 2t) × (h − 2t)` rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RhsSection {
    /// Outer breadth b
    pub breadth: f64,
    /// Outer height h
    pub height: f64,
    /// Wall thickness t
    pub thickness: f64,
}

impl RhsSection {
    pub fn new(breadth: f64, height: f64, thickness: f64) -> Self {
        RhsSection {
            breadth,
            height,
            thickness,
        }
    }

    fn inner_breadth(&self) -> f64 {
        self.breadth - 2.0 * self.thickness
    }

    fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.thickness
    }
}

impl SectionGeometry for RhsSection {
    fn area(&self) -> Option<f64> {
        defined(self.breadth * self.height - self.inner_breadth() * self.inner_height())
    }

    fn second_moment_of_area_xx(&self) -> Option<f64> {
        let outer = rectangle_second_moment(self.breadth, self.height);
        let inner = rectangle_second_moment(self.inner_breadth(), self.inner_height());
        defined(outer - inner)
    }

    fn second_moment_of_area_yy(&self) -> Option<f64> {
        let outer = rectangle_second_moment(self.height, self.breadth);
        let inner = rectangle_second_moment(self.inner_height(), self.inner_breadth());
        defined(outer - inner)
    }
}
