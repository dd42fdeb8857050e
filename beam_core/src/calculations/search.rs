//! # Optimal Section Search
//!
//! Exhaustive search over a discretized box of cross-section dimensions.
//! For one material and one family, every grid point becomes a [`Beam`], and
//! the candidates are folded with [`Beam::preferred_over`] starting from "no
//! incumbent". The survivor is the minimum-area sufficient beam.
//!
//! ## Grids
//!
//! Every dimension runs over `step, 2·step, …` up to its limit. The point
//! count is `ceil(limit / step)`, so a limit that is not a multiple of the
//! step gets one point just above it.
//!
//! | Family | Outer loops | Inner loops |
//! |--------|-------------|-------------|
//! | I-beam | b ≤ max breadth, h ≤ max height | tw ≤ b, tf ≤ h/2 |
//! | RHS    | b ≤ max breadth, h ≤ max height | t ≤ min(b, h)/2 |
//! | CHS    | r ≤ min(max breadth, max height)/2 | t ≤ r |
//!
//! The I-beam grid is quartic in resolution and dominates run time.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use beam_core::calculations::search::{best_rhs_beam, SearchConfig};
//! use beam_core::materials::Material;
//!
//! let steel = Arc::new(Material::new("Mild steel", 250.0e6, 200.0e9, 0.21, 7850.0, 0.8, 25.0e6));
//! let config = SearchConfig::default();
//!
//! let outcome = best_rhs_beam(&steel, &config);
//! let best = outcome.best.expect("steel carries 24 kN");
//! assert!(best.squash_load().unwrap() >= config.load);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::beam::Beam;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::materials::Material;
use crate::sections::{ChsSection, IBeamSection, RhsSection, SectionFamily};
use crate::units::{KILO, MILLI};

/// Slack when counting grid points, so that a limit which is an exact
/// multiple of the step does not gain an extra point from rounding noise.
const GRID_TOLERANCE: f64 = 1e-9;

/// Constants shared by every material and family in one run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "load": 24000.0,
///   "length": 2.0,
///   "max_breadth": 0.03,
///   "max_height": 0.1,
///   "step": 0.001
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Axial load (N)
    pub load: f64,
    /// Beam length (m)
    pub length: f64,
    /// Largest outer breadth (m)
    pub max_breadth: f64,
    /// Largest outer height (m)
    pub max_height: f64,
    /// Grid spacing for every dimension (m)
    pub step: f64,
}

impl Default for SearchConfig {
    /// 24 kN over 2 m, within a 30 × 100 mm envelope, at 1 mm resolution.
    fn default() -> Self {
        SearchConfig {
            load: 24.0 * KILO,
            length: 2000.0 * MILLI,
            max_breadth: 30.0 * MILLI,
            max_height: 100.0 * MILLI,
            step: 1.0 * MILLI,
        }
    }
}

impl SearchConfig {
    /// Reject non-positive or non-finite values.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("load", self.load)?;
        require_positive("length", self.length)?;
        require_positive("max_breadth", self.max_breadth)?;
        require_positive("max_height", self.max_height)?;
        require_positive("step", self.step)?;
        Ok(())
    }

    /// Load a configuration from a JSON file and validate it.
    ///
    /// Missing fields take their default values.
    pub fn load_json(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let config: SearchConfig = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Grid values `step, 2·step, …` covering `(0, limit]`.
///
/// Yields `ceil(limit / step)` points, so the last one may overshoot a limit
/// that is not a whole number of steps.
pub fn grid(limit: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if limit > 0.0 && step > 0.0 {
        (limit / step - GRID_TOLERANCE).ceil().max(0.0) as usize
    } else {
        0
    };
    (0..count).map(move |i| step + i as f64 * step)
}

/// Outcome of one family search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best sufficient beam, or `None` if no grid point carries the load
    pub best: Option<Beam>,
    /// Candidates built
    pub evaluated: usize,
    /// Candidates that carried the load
    pub sufficient: usize,
}

impl SearchOutcome {
    /// Whether a suitable beam was found
    pub fn found(&self) -> bool {
        self.best.is_some()
    }
}

/// Running fold state for a search.
struct Incumbent {
    load: f64,
    best: Option<Beam>,
    evaluated: usize,
    sufficient: usize,
}

impl Incumbent {
    fn new(load: f64) -> Self {
        Incumbent {
            load,
            best: None,
            evaluated: 0,
            sufficient: 0,
        }
    }

    fn offer(&mut self, candidate: Beam) {
        self.evaluated += 1;
        if candidate.is_sufficient(self.load) == Some(true) {
            self.sufficient += 1;
        }
        self.best = candidate.preferred_over(self.best.take(), self.load);
    }

    fn finish(self, family: SectionFamily, material: &Material) -> SearchOutcome {
        debug!(
            family = family.display_name(),
            material = %material.name,
            evaluated = self.evaluated,
            sufficient = self.sufficient,
            found = self.best.is_some(),
            "search finished"
        );
        SearchOutcome {
            best: self.best,
            evaluated: self.evaluated,
            sufficient: self.sufficient,
        }
    }
}

/// Lightest sufficient I-beam.
pub fn best_i_beam(material: &Arc<Material>, config: &SearchConfig) -> SearchOutcome {
    let mut incumbent = Incumbent::new(config.load);
    let step = config.step;

    for b in grid(config.max_breadth, step) {
        for h in grid(config.max_height, step) {
            for tw in grid(b, step) {
                for tf in grid(h / 2.0, step) {
                    let section = IBeamSection::new(b, h, tw, tf);
                    incumbent.offer(Beam::new(Arc::clone(material), section, config.length));
                }
            }
        }
    }

    incumbent.finish(SectionFamily::IBeam, material)
}

/// Lightest sufficient rectangular hollow section.
pub fn best_rhs_beam(material: &Arc<Material>, config: &SearchConfig) -> SearchOutcome {
    let mut incumbent = Incumbent::new(config.load);
    let step = config.step;

    for b in grid(config.max_breadth, step) {
        for h in grid(config.max_height, step) {
            // Wall cannot close the interior
            let min_dimension = b.min(h);
            for t in grid(min_dimension / 2.0, step) {
                let section = RhsSection::new(b, h, t);
                incumbent.offer(Beam::new(Arc::clone(material), section, config.length));
            }
        }
    }

    incumbent.finish(SectionFamily::Rhs, material)
}

/// Lightest sufficient circular hollow section.
///
/// The tube must fit the same bounding box as the other families, so its
/// diameter is limited by the smaller envelope dimension.
pub fn best_chs_beam(material: &Arc<Material>, config: &SearchConfig) -> SearchOutcome {
    let mut incumbent = Incumbent::new(config.load);
    let step = config.step;
    let min_dimension = config.max_breadth.min(config.max_height);

    for r in grid(min_dimension / 2.0, step) {
        for t in grid(r, step) {
            let section = ChsSection::new(r, t);
            incumbent.offer(Beam::new(Arc::clone(material), section, config.length));
        }
    }

    incumbent.finish(SectionFamily::Chs, material)
}

/// Dispatch to the search for `family`.
pub fn best_beam(family: SectionFamily, material: &Arc<Material>, config: &SearchConfig) -> SearchOutcome {
    match family {
        SectionFamily::IBeam => best_i_beam(material, config),
        SectionFamily::Rhs => best_rhs_beam(material, config),
        SectionFamily::Chs => best_chs_beam(material, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::CrossSection;

    fn steel() -> Arc<Material> {
        Arc::new(Material::new("Mild steel", 250.0e6, 200.0e9, 0.21, 7850.0, 0.8, 25.0e6))
    }

    fn coarse_config() -> SearchConfig {
        SearchConfig {
            step: 2.0 * MILLI,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_default_config_matches_reference_run() {
        let config = SearchConfig::default();
        assert_eq!(config.load, 24_000.0);
        assert_eq!(config.length, 2.0);
        assert!((config.max_breadth - 0.03).abs() < 1e-15);
        assert!((config.max_height - 0.1).abs() < 1e-15);
        assert_eq!(config.step, 0.001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = SearchConfig::default();
        config.step = 0.0;
        assert!(config.validate().is_err());

        let mut config = SearchConfig::default();
        config.max_height = -0.1;
        assert!(config.validate().is_err());

        let mut config = SearchConfig::default();
        config.load = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_step_coarser_than_envelope_evaluates_one_point() {
        let config = SearchConfig {
            step: 0.05,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_ok());

        // r = 50 mm, t = 50 mm: the single overshooting grid point
        let outcome = best_chs_beam(&steel(), &config);
        assert_eq!(outcome.evaluated, 1);
        let best = outcome.best.expect("a 50 mm solid bar carries 24 kN");
        assert_eq!(best.section(), &CrossSection::Chs(ChsSection::new(0.05, 0.05)));
    }

    #[test]
    fn test_config_json_defaults_missing_fields() {
        let config: SearchConfig = serde_json::from_str(r#"{ "load": 12000.0 }"#).unwrap();
        assert_eq!(config.load, 12_000.0);
        assert_eq!(config.length, SearchConfig::default().length);
        assert_eq!(config.step, SearchConfig::default().step);
    }

    #[test]
    fn test_config_load_json() {
        let path = std::env::temp_dir().join(format!("beam_core_config_{}.json", std::process::id()));
        fs::write(&path, r#"{ "load": 10000.0, "length": 1.5 }"#).unwrap();
        let config = SearchConfig::load_json(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.load, 10_000.0);
        assert_eq!(config.length, 1.5);
    }

    #[test]
    fn test_config_load_json_rejects_invalid() {
        let path = std::env::temp_dir().join(format!("beam_core_bad_config_{}.json", std::process::id()));
        fs::write(&path, r#"{ "step": -1.0 }"#).unwrap();
        let err = SearchConfig::load_json(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_grid_exact_multiple() {
        let values: Vec<f64> = grid(0.03, 0.001).collect();
        assert_eq!(values.len(), 30);
        assert_eq!(values[0], 0.001);
        assert!((values[29] - 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_grid_overshoots_partial_step() {
        // ceil(15.5) = 16 points; the last is 16 mm
        let values: Vec<f64> = grid(0.0155, 0.001).collect();
        assert_eq!(values.len(), 16);
        assert!((values[15] - 0.016).abs() < 1e-12);
    }

    #[test]
    fn test_grid_degenerate() {
        assert_eq!(grid(0.0, 0.001).count(), 0);
        assert_eq!(grid(0.01, 0.0).count(), 0);
        assert_eq!(grid(0.0005, 0.001).count(), 1);
    }

    #[test]
    fn test_grid_sizes_per_family() {
        let config = SearchConfig {
            max_breadth: 4.0 * MILLI,
            max_height: 6.0 * MILLI,
            ..SearchConfig::default()
        };
        let material = steel();

        // Σ_b b · Σ_h ceil(h/2) = (1+2+3+4) · (1+1+2+2+3+3)
        assert_eq!(best_i_beam(&material, &config).evaluated, 10 * 12);
        // Σ_b Σ_h ceil(min(b,h)/2)
        let expected_rhs: usize = (1..=4)
            .flat_map(|b: usize| (1..=6).map(move |h: usize| (b.min(h) + 1) / 2))
            .sum();
        assert_eq!(best_rhs_beam(&material, &config).evaluated, expected_rhs);
        // r ≤ 2 mm, t ≤ r: 1 + 2
        assert_eq!(best_chs_beam(&material, &config).evaluated, 3);
    }

    #[test]
    fn test_rhs_search_finds_sufficient_beam() {
        let config = SearchConfig::default();
        let outcome = best_rhs_beam(&steel(), &config);
        let best = outcome.best.as_ref().expect("a feasible RHS exists");

        assert!(best.squash_load().unwrap() >= config.load);
        assert!(best.buckling_load().unwrap() >= config.load);
        assert!(best.strain(config.load).unwrap() <= 0.21);
        assert!(outcome.sufficient > 0);
        assert!(outcome.sufficient <= outcome.evaluated);
        assert_eq!(best.family(), SectionFamily::Rhs);
    }

    #[test]
    fn test_search_result_is_minimum_area() {
        let config = coarse_config();
        let material = steel();
        let best = best_rhs_beam(&material, &config).best.unwrap();
        let best_area = best.area().unwrap();

        // Brute-force check against every sufficient candidate
        for b in grid(config.max_breadth, config.step) {
            for h in grid(config.max_height, config.step) {
                for t in grid(b.min(h) / 2.0, config.step) {
                    let beam = Beam::new(Arc::clone(&material), RhsSection::new(b, h, t), config.length);
                    if beam.is_sufficient(config.load) == Some(true) {
                        assert!(beam.area().unwrap() >= best_area);
                    }
                }
            }
        }
    }

    #[test]
    fn test_i_beam_and_chs_searches() {
        let config = coarse_config();
        let material = steel();

        let i_beam = best_i_beam(&material, &config).best.expect("feasible I-beam");
        assert_eq!(i_beam.is_sufficient(config.load), Some(true));
        assert!(matches!(i_beam.section(), CrossSection::IBeam(_)));

        // 15 mm is not a whole number of 2 mm steps, so the radius grid
        // reaches 16 mm and a thick tube becomes feasible
        let chs = best_chs_beam(&material, &config).best.expect("feasible CHS");
        assert_eq!(chs.is_sufficient(config.load), Some(true));
        match chs.section() {
            CrossSection::Chs(s) => assert!((s.radius - 0.016).abs() < 1e-12),
            other => panic!("unexpected section {other:?}"),
        }
    }

    #[test]
    fn test_chs_envelope_too_small_for_steel() {
        // A solid 15 mm bar buckles at about 19.6 kN over 2 m
        let outcome = best_chs_beam(&steel(), &SearchConfig::default());
        assert!(!outcome.found());
        assert_eq!(outcome.evaluated, (1..=15).sum::<usize>());
    }

    #[test]
    fn test_insufficient_candidates_never_selected() {
        let config = coarse_config();
        let material = steel();
        for family in SectionFamily::ALL {
            if let Some(best) = best_beam(family, &material, &config).best {
                assert!(best.squash_load().unwrap() >= config.load);
                assert!(best.buckling_load().unwrap() >= config.load);
            }
        }
    }

    #[test]
    fn test_near_zero_yield_finds_nothing() {
        let weak = Arc::new(Material::new("Putty", 1e-3, 200.0e9, 0.21, 7850.0, 0.8, 25.0e6));
        let config = coarse_config();
        for family in SectionFamily::ALL {
            let outcome = best_beam(family, &weak, &config);
            assert!(!outcome.found(), "{family} should have no feasible design");
            assert_eq!(outcome.sufficient, 0);
            assert!(outcome.evaluated > 0);
        }
    }
}
