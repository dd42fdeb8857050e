//! I-beam (H-beam) section.
//!
//! ```text
//!     ┌───────────────┐  ─┬─ tf
//!     └─────┐   ┌─────┘   │
//!           │   │         │
//!           │tw │         h
//!           │   │         │
//!     ┌─────┘   └─────┐   │
//!     └───────────────┘  ─┴─
//!             b
//! ```

use serde::{Deserialize, Serialize};

use super::{defined, rectangle_second_moment, SectionGeometry};

/// I-beam dimensions in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IBeamSection {
    /// Flange width b
    pub breadth: f64,
    /// Total height h, including both flanges
    pub height: f64,
    /// Web thickness tw
    pub web_thickness: f64,
    /// Flange thickness tf
    pub flange_thickness: f64,
}

impl IBeamSection {
    pub fn new(breadth: f64, height: f64, web_thickness: f64, flange_thickness: f64) -> Self {
        IBeamSection {
            breadth,
            height,
            web_thickness,
            flange_thickness,
        }
    }

    /// Clear height of the web between the flanges: h − 2·tf
    pub fn web_height(&self) -> f64 {
        self.height - 2.0 * self.flange_thickness
    }
}

impl SectionGeometry for IBeamSection {
    /// A = 2·b·tf + tw·(h − 2·tf)
    fn area(&self) -> Option<f64> {
        let flanges = 2.0 * self.breadth * self.flange_thickness;
        let web = self.web_thickness * self.web_height();
        defined(flanges + web)
    }

    /// Outer b×h rectangle minus the two voids either side of the web.
    fn second_moment_of_area_xx(&self) -> Option<f64> {
        let outer = rectangle_second_moment(self.breadth, self.height);
        let void_breadth = (self.breadth - self.web_thickness) / 2.0;
        let void = rectangle_second_moment(void_breadth, self.web_height());
        defined(outer - 2.0 * void)
    }

    /// Two flanges plus the web, each about the shared vertical axis.
    fn second_moment_of_area_yy(&self) -> Option<f64> {
        let flange = rectangle_second_moment(self.flange_thickness, self.breadth);
        let web = rectangle_second_moment(self.web_height(), self.web_thickness);
        defined(2.0 * flange + web)
    }
}
