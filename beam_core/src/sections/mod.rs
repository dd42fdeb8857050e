//! # Cross-Sections
//!
//! Geometry of the three candidate section families. Each family supplies
//! its area and its two principal second moments of area; everything else a
//! beam needs is derived from those in [`crate::calculations::beam`].
//!
//! ## Notation
//!
//! - `b` = breadth (along the x axis)
//! - `h` = total height (along the y axis)
//! - `t`, `tw`, `tf` = wall, web and flange thickness
//! - `r` = outer radius
//! - `I_xx`, `I_yy` = second moments of area about the centroidal axes
//!
//! All values are SI (m, m², m⁴).
//!
//! ## Undefined results
//!
//! Geometry methods return `Option<f64>`. A result that is not a finite
//! number (NaN or infinite dimensions) is `None`. Finite but physically
//! meaningless geometry, such as a wall thicker than half the section, is
//! *not* rejected here.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::sections::{CrossSection, RhsSection, SectionGeometry};
//!
//! let rhs = CrossSection::from(RhsSection::new(0.03, 0.05, 0.002));
//! let area = rhs.area().unwrap();
//! // 30×50 outer minus 26×46 inner = 304 mm²
//! assert!((area - 304.0e-6).abs() < 1e-12);
//! ```

pub mod chs;
pub mod i_beam;
pub mod rhs;

pub use chs::ChsSection;
pub use i_beam::IBeamSection;
pub use rhs::RhsSection;

use serde::{Deserialize, Serialize};

/// Geometric properties every section family must provide.
pub trait SectionGeometry {
    /// Cross-sectional area (m²)
    fn area(&self) -> Option<f64>;

    /// Second moment of area about the x axis (m⁴)
    fn second_moment_of_area_xx(&self) -> Option<f64>;

    /// Second moment of area about the y axis (m⁴)
    fn second_moment_of_area_yy(&self) -> Option<f64>;
}

/// Cross-section family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionFamily {
    /// I-beam (H-beam)
    IBeam,
    /// Rectangular hollow section
    Rhs,
    /// Circular hollow section
    Chs,
}

impl SectionFamily {
    /// All families, in report order
    pub const ALL: [SectionFamily; 3] = [SectionFamily::IBeam, SectionFamily::Rhs, SectionFamily::Chs];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionFamily::IBeam => "I-beam",
            SectionFamily::Rhs => "RHS-beam",
            SectionFamily::Chs => "CHS-beam",
        }
    }

    /// File stem used for result tables
    pub fn file_stem(&self) -> &'static str {
        match self {
            SectionFamily::IBeam => "I_beams",
            SectionFamily::Rhs => "RHS_beams",
            SectionFamily::Chs => "CHS_beams",
        }
    }
}

impl std::fmt::Display for SectionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A cross-section of any supported family.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Rhs", "breadth": 0.03, "height": 0.05, "thickness": 0.002 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CrossSection {
    IBeam(IBeamSection),
    Rhs(RhsSection),
    Chs(ChsSection),
}

impl CrossSection {
    /// Family of this section
    pub fn family(&self) -> SectionFamily {
        match self {
            CrossSection::IBeam(_) => SectionFamily::IBeam,
            CrossSection::Rhs(_) => SectionFamily::Rhs,
            CrossSection::Chs(_) => SectionFamily::Chs,
        }
    }

    /// Named dimensions in metres, in table column order.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match self {
            CrossSection::IBeam(s) => vec![
                ("breadth", s.breadth),
                ("height", s.height),
                ("web_thickness", s.web_thickness),
                ("flange_thickness", s.flange_thickness),
            ],
            CrossSection::Rhs(s) => vec![
                ("breadth", s.breadth),
                ("height", s.height),
                ("thickness", s.thickness),
            ],
            CrossSection::Chs(s) => vec![("radius", s.radius), ("thickness", s.thickness)],
        }
    }
}

impl SectionGeometry for CrossSection {
    fn area(&self) -> Option<f64> {
        match self {
            CrossSection::IBeam(s) => s.area(),
            CrossSection::Rhs(s) => s.area(),
            CrossSection::Chs(s) => s.area(),
        }
    }

    fn second_moment_of_area_xx(&self) -> Option<f64> {
        match self {
            CrossSection::IBeam(s) => s.second_moment_of_area_xx(),
            CrossSection::Rhs(s) => s.second_moment_of_area_xx(),
            CrossSection::Chs(s) => s.second_moment_of_area_xx(),
        }
    }

    fn second_moment_of_area_yy(&self) -> Option<f64> {
        match self {
            CrossSection::IBeam(s) => s.second_moment_of_area_yy(),
            CrossSection::Rhs(s) => s.second_moment_of_area_yy(),
            CrossSection::Chs(s) => s.second_moment_of_area_yy(),
        }
    }
}

impl From<IBeamSection> for CrossSection {
    fn from(s: IBeamSection) -> Self {
        CrossSection::IBeam(s)
    }
}

impl From<RhsSection> for CrossSection {
    fn from(s: RhsSection) -> Self {
        CrossSection::Rhs(s)
    }
}

impl From<ChsSection> for CrossSection {
    fn from(s: ChsSection) -> Self {
        CrossSection::Chs(s)
    }
}

/// `Some(value)` if finite, otherwise `None`.
#[inline]
pub(crate) fn defined(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Second moment of a `b × d` rectangle about its own centroidal axis
/// parallel to `b`: I = b·d³/12
#[inline]
pub(crate) fn rectangle_second_moment(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}
