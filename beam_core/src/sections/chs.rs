//! Circular hollow section (CHS).

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{defined, SectionGeometry};

/// CHS dimensions in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChsSection {
    /// Outer radius r, including the wall
    pub radius: f64,
    /// Wall thickness t
    pub thickness: f64,
}

impl ChsSection {
    pub fn new(radius: f64, thickness: f64) -> Self {
        ChsSection { radius, thickness }
    }
}

impl SectionGeometry for ChsSection {
    /// A = π·(2rt − t²)
    ///
    /// This is the area of the annulus between radii `r` and `r − t`
    /// written in expanded form.
    fn area(&self) -> Option<f64> {
        let (r, t) = (self.radius, self.thickness);
        defined(PI * (2.0 * r * t - t.powi(2)))
    }

    /// I = π/4·(r⁴ − (r − t)⁴)
    fn second_moment_of_area_xx(&self) -> Option<f64> {
        let inner = self.radius - self.thickness;
        defined(PI / 4.0 * (self.radius.powi(4) - inner.powi(4)))
    }

    /// Equal to `I_xx` by symmetry.
    fn second_moment_of_area_yy(&self) -> Option<f64> {
        self.second_moment_of_area_xx()
    }
}
