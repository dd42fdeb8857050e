//! # Beam Model
//!
//! A [`Beam`] is one material, one cross-section and a length. From those it
//! derives mass, cost, embodied energy, squash load, Euler buckling load and
//! axial strain, and decides whether it can carry a given axial load.
//!
//! ## Undefined quantities
//!
//! Every derived property is an `Option<f64>`. If a prerequisite is `None`,
//! or the arithmetic produces something that is not a finite number, the
//! property is `None` too. `None` never panics and never counts as passing:
//! [`Beam::is_sufficient`] returns `None` and [`Beam::preferred_over`] keeps
//! the incumbent.
//!
//! ## Caching
//!
//! Dimensions never change after construction, so each property is computed
//! on first access and cached in a `OnceCell`.
//!
//! ## Assumptions
//!
//! - Pin-pin ends (effective length factor K = 1.0)
//! - Uniform prismatic column, Euler buckling about the weaker axis
//! - Axial load only
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use beam_core::calculations::beam::Beam;
//! use beam_core::materials::Material;
//! use beam_core::sections::RhsSection;
//!
//! let steel = Arc::new(Material::new("Mild steel", 250.0e6, 200.0e9, 0.21, 7850.0, 0.8, 25.0e6));
//! let beam = Beam::new(steel, RhsSection::new(0.03, 0.05, 0.003), 2.0);
//!
//! // 250 MPa × 444 mm²
//! let squash = beam.squash_load().unwrap();
//! assert!((squash - 111_000.0).abs() < 1e-6);
//! assert_eq!(beam.is_sufficient(24_000.0), Some(true));
//! ```

use std::f64::consts::PI;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::materials::Material;
use crate::sections::{defined, CrossSection, SectionFamily, SectionGeometry};

/// Lazily computed properties of a beam.
#[derive(Debug, Clone, Default)]
struct DerivedCache {
    area: OnceCell<Option<f64>>,
    second_moment_xx: OnceCell<Option<f64>>,
    second_moment_yy: OnceCell<Option<f64>>,
    volume: OnceCell<Option<f64>>,
    mass: OnceCell<Option<f64>>,
    cost: OnceCell<Option<f64>>,
    total_embodied_energy: OnceCell<Option<f64>>,
    embodied_energy_cost: OnceCell<Option<f64>>,
    total_cost: OnceCell<Option<f64>>,
    squash_load: OnceCell<Option<f64>>,
    buckling_load: OnceCell<Option<f64>>,
}

/// A candidate beam: shared material, cross-section and length (m).
#[derive(Debug, Clone)]
pub struct Beam {
    material: Arc<Material>,
    section: CrossSection,
    length: f64,
    cache: DerivedCache,
}

impl Beam {
    /// Create a beam. Nothing is computed until a property is read.
    pub fn new(material: Arc<Material>, section: impl Into<CrossSection>, length: f64) -> Self {
        Beam {
            material,
            section: section.into(),
            length,
            cache: DerivedCache::default(),
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Shared handle to the material
    pub fn material_arc(&self) -> &Arc<Material> {
        &self.material
    }

    pub fn section(&self) -> &CrossSection {
        &self.section
    }

    pub fn family(&self) -> SectionFamily {
        self.section.family()
    }

    /// Length (m)
    pub fn length(&self) -> f64 {
        self.length
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Cross-sectional area (m²)
    pub fn area(&self) -> Option<f64> {
        *self.cache.area.get_or_init(|| self.section.area())
    }

    /// Second moment of area about x (m⁴)
    pub fn second_moment_of_area_xx(&self) -> Option<f64> {
        *self
            .cache
            .second_moment_xx
            .get_or_init(|| self.section.second_moment_of_area_xx())
    }

    /// Second moment of area about y (m⁴)
    pub fn second_moment_of_area_yy(&self) -> Option<f64> {
        *self
            .cache
            .second_moment_yy
            .get_or_init(|| self.section.second_moment_of_area_yy())
    }

    // ------------------------------------------------------------------
    // Mass and economics
    // ------------------------------------------------------------------

    /// Volume (m³) = area × length
    pub fn volume(&self) -> Option<f64> {
        *self
            .cache
            .volume
            .get_or_init(|| scaled(self.area(), self.length))
    }

    /// Mass (kg) = volume × density
    pub fn mass(&self) -> Option<f64> {
        *self
            .cache
            .mass
            .get_or_init(|| scaled(self.volume(), self.material.density))
    }

    /// Material cost ($) = mass × price
    pub fn cost(&self) -> Option<f64> {
        *self
            .cache
            .cost
            .get_or_init(|| scaled(self.mass(), self.material.price))
    }

    /// Embodied energy (J) = mass × energy density
    pub fn total_embodied_energy(&self) -> Option<f64> {
        *self
            .cache
            .total_embodied_energy
            .get_or_init(|| scaled(self.mass(), self.material.energy_density))
    }

    /// Cost of the embodied energy ($) at the fixed electricity price
    pub fn embodied_energy_cost(&self) -> Option<f64> {
        *self.cache.embodied_energy_cost.get_or_init(|| {
            scaled(self.total_embodied_energy(), self.material.electricity_cost())
        })
    }

    /// Material cost plus embodied-energy cost ($)
    pub fn total_cost(&self) -> Option<f64> {
        *self.cache.total_cost.get_or_init(|| {
            let cost = self.cost()?;
            let energy_cost = self.embodied_energy_cost()?;
            defined(cost + energy_cost)
        })
    }

    // ------------------------------------------------------------------
    // Capacity
    // ------------------------------------------------------------------

    /// Load at which the section yields (N) = yield stress × area
    pub fn squash_load(&self) -> Option<f64> {
        *self
            .cache
            .squash_load
            .get_or_init(|| scaled(self.area(), self.material.yield_stress))
    }

    /// Euler buckling load about the weaker axis (N).
    ///
    /// P = π²·E·min(I_xx, I_yy) / L²
    pub fn buckling_load(&self) -> Option<f64> {
        *self.cache.buckling_load.get_or_init(|| {
            let i_min = self
                .second_moment_of_area_xx()?
                .min(self.second_moment_of_area_yy()?);
            defined(PI.powi(2) * self.material.modulus * i_min / self.length.powi(2))
        })
    }

    /// Axial strain under `load` (N): (load / area) / modulus
    pub fn strain(&self, load: f64) -> Option<f64> {
        let area = self.area()?;
        let modulus = defined(self.material.modulus)?;
        defined(load / area / modulus)
    }

    /// Whether the beam survives `load` (N).
    ///
    /// `Some(true)` iff squash load ≥ load, buckling load ≥ load and strain
    /// ≤ elongation. `None` if any of those quantities is undefined; callers
    /// treat that as failing.
    pub fn is_sufficient(&self, load: f64) -> Option<bool> {
        self.check(load).passes()
    }

    /// Evaluate every limit state under `load`.
    pub fn check(&self, load: f64) -> SufficiencyCheck {
        SufficiencyCheck {
            load,
            squash_load: self.squash_load(),
            buckling_load: self.buckling_load(),
            strain: self.strain(load),
            elongation: defined(self.material.elongation),
        }
    }

    // ------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------

    /// Whether this beam beats `other`, ignoring sufficiency.
    ///
    /// Strictly smaller area wins. On an exact area tie this beam wins only
    /// if both second moments of area are strictly greater. Any undefined
    /// quantity means no win.
    pub fn is_better_than(&self, other: &Beam) -> bool {
        let (Some(area), Some(other_area)) = (self.area(), other.area()) else {
            return false;
        };

        if area < other_area {
            return true;
        }
        if area != other_area {
            return false;
        }

        match (
            self.second_moment_of_area_xx(),
            self.second_moment_of_area_yy(),
            other.second_moment_of_area_xx(),
            other.second_moment_of_area_yy(),
        ) {
            (Some(ixx), Some(iyy), Some(other_ixx), Some(other_iyy)) => ixx > other_ixx && iyy > other_iyy,
            _ => false,
        }
    }

    /// Pick between this beam and the current best under `load`.
    ///
    /// - this beam not sufficient: the incumbent is returned unchanged
    /// - no incumbent: this beam
    /// - otherwise: this beam only if [`Beam::is_better_than`] the incumbent
    ///
    /// Meant to be folded over every candidate of a search, seeded with
    /// `None`.
    pub fn preferred_over(self, incumbent: Option<Beam>, load: f64) -> Option<Beam> {
        if self.is_sufficient(load) != Some(true) {
            return incumbent;
        }

        match incumbent {
            None => Some(self),
            Some(best) if self.is_better_than(&best) => Some(self),
            Some(best) => Some(best),
        }
    }
}

/// `value × factor`, or `None` if either side is undefined.
#[inline]
fn scaled(value: Option<f64>, factor: f64) -> Option<f64> {
    defined(value? * factor)
}

/// Limit state that can stop a beam carrying its load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitState {
    /// Yielding of the whole section
    Squash,
    /// Euler buckling
    Buckling,
    /// Strain beyond the material elongation
    Strain,
}

impl LimitState {
    pub fn display_name(&self) -> &'static str {
        match self {
            LimitState::Squash => "Squash",
            LimitState::Buckling => "Buckling",
            LimitState::Strain => "Strain",
        }
    }
}

impl std::fmt::Display for LimitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Result of checking a beam against an axial load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SufficiencyCheck {
    /// Applied axial load (N)
    pub load: f64,
    /// Squash load (N)
    pub squash_load: Option<f64>,
    /// Buckling load (N)
    pub buckling_load: Option<f64>,
    /// Strain under the load
    pub strain: Option<f64>,
    /// Allowed strain
    pub elongation: Option<f64>,
}

impl SufficiencyCheck {
    /// `Some(true)` if every limit state holds, `None` if any is undefined.
    pub fn passes(&self) -> Option<bool> {
        let squash = self.squash_load?;
        let buckling = self.buckling_load?;
        let strain = self.strain?;
        let elongation = self.elongation?;
        Some(squash >= self.load && buckling >= self.load && strain <= elongation)
    }

    /// Demand over capacity for each limit state.
    pub fn utilizations(&self) -> Option<[(LimitState, f64); 3]> {
        Some([
            (LimitState::Squash, self.load / self.squash_load?),
            (LimitState::Buckling, self.load / self.buckling_load?),
            (LimitState::Strain, self.strain? / self.elongation?),
        ])
    }

    /// The limit state closest to (or furthest past) failure.
    ///
    /// Ties go to the earlier of squash, buckling, strain.
    pub fn governing_limit_state(&self) -> Option<LimitState> {
        let mut governing: Option<(LimitState, f64)> = None;
        for (state, ratio) in self.utilizations()? {
            match governing {
                Some((_, max)) if ratio <= max => {}
                _ => governing = Some((state, ratio)),
            }
        }
        governing.map(|(state, _)| state)
    }
}
