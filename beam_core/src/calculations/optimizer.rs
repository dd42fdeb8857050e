//! # Optimization Driver
//!
//! Runs every section family search for every material and collects the
//! winners. Materials and the search configuration are validated here, at the
//! boundary, so the search itself can assume well-formed input.
//!
//! With the `parallel` feature, materials are searched on the rayon thread
//! pool. Each family search stays sequential, so the winners are identical
//! to a single-threaded run, and results keep the input material order.

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use super::beam::Beam;
use super::search::{best_beam, SearchConfig, SearchOutcome};
use crate::errors::CalcResult;
use crate::materials::Material;
use crate::sections::SectionFamily;
use crate::units::SqMillimeters;

/// Search results for one material, one entry per family in
/// [`SectionFamily::ALL`] order.
#[derive(Debug, Clone)]
pub struct MaterialRun {
    pub material: Arc<Material>,
    pub outcomes: Vec<(SectionFamily, SearchOutcome)>,
}

impl MaterialRun {
    /// Outcome of the search for `family`
    pub fn outcome(&self, family: SectionFamily) -> Option<&SearchOutcome> {
        self.outcomes
            .iter()
            .find(|(f, _)| *f == family)
            .map(|(_, outcome)| outcome)
    }

    /// Winning beam for `family`, if one was found
    pub fn best(&self, family: SectionFamily) -> Option<&Beam> {
        self.outcome(family).and_then(|outcome| outcome.best.as_ref())
    }
}

/// Results of a full run over a material table.
#[derive(Debug, Clone)]
pub struct OptimizationRun {
    pub config: SearchConfig,
    pub materials: Vec<MaterialRun>,
}

impl OptimizationRun {
    /// Winners for `family`, in material order.
    ///
    /// Materials with no feasible design are skipped.
    pub fn winners(&self, family: SectionFamily) -> Vec<&Beam> {
        self.materials.iter().filter_map(|run| run.best(family)).collect()
    }

    /// Names of materials with no feasible design for `family`
    pub fn not_found(&self, family: SectionFamily) -> Vec<&str> {
        self.materials
            .iter()
            .filter(|run| run.best(family).is_none())
            .map(|run| run.material.name.as_str())
            .collect()
    }

    /// Total candidates evaluated across all searches
    pub fn evaluated(&self) -> usize {
        self.materials
            .iter()
            .flat_map(|run| run.outcomes.iter())
            .map(|(_, outcome)| outcome.evaluated)
            .sum()
    }
}

/// Search every family for every material.
///
/// Fails before any search runs if the configuration or a material is
/// invalid.
///
/// # Example
///
/// ```rust,no_run
/// use beam_core::calculations::optimizer::optimize;
/// use beam_core::calculations::search::SearchConfig;
/// use beam_core::materials::builtin_materials;
/// use beam_core::sections::SectionFamily;
///
/// let run = optimize(&builtin_materials(), &SearchConfig::default())?;
/// for beam in run.winners(SectionFamily::Rhs) {
///     println!("{}: {:?}", beam.material().name, beam.area());
/// }
/// # Ok::<(), beam_core::errors::CalcError>(())
/// ```
pub fn optimize(materials: &[Material], config: &SearchConfig) -> CalcResult<OptimizationRun> {
    config.validate()?;
    for material in materials {
        material.validate()?;
    }

    let shared: Vec<Arc<Material>> = materials.iter().cloned().map(Arc::new).collect();

    #[cfg(feature = "parallel")]
    let runs: Vec<MaterialRun> = shared
        .into_par_iter()
        .map(|material| optimize_material(material, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let runs: Vec<MaterialRun> = shared
        .into_iter()
        .map(|material| optimize_material(material, config))
        .collect();

    Ok(OptimizationRun {
        config: *config,
        materials: runs,
    })
}

/// Run the three family searches for one material.
pub fn optimize_material(material: Arc<Material>, config: &SearchConfig) -> MaterialRun {
    let outcomes = SectionFamily::ALL
        .iter()
        .map(|&family| {
            let outcome = best_beam(family, &material, config);
            match &outcome.best {
                Some(beam) => info!(
                    "Found suitable {} for {} (area {:.1} mm²)",
                    family,
                    material.name,
                    beam.area()
                        .map_or(f64::NAN, |a| SqMillimeters::from_square_meters(a).value())
                ),
                None => info!("No suitable {} found for {}", family, material.name),
            }
            (family, outcome)
        })
        .collect();

    MaterialRun { material, outcomes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    fn config() -> SearchConfig {
        SearchConfig {
            step: 0.002,
            ..SearchConfig::default()
        }
    }

    fn steel() -> Material {
        Material::new("Mild steel", 250.0e6, 200.0e9, 0.21, 7850.0, 0.8, 25.0e6)
    }

    fn putty() -> Material {
        Material::new("Putty", 1e-3, 200.0e9, 0.21, 7850.0, 0.8, 25.0e6)
    }

    #[test]
    fn test_results_keep_material_order() {
        let run = optimize(&[putty(), steel()], &config()).unwrap();
        let names: Vec<&str> = run.materials.iter().map(|r| r.material.name.as_str()).collect();
        assert_eq!(names, vec!["Putty", "Mild steel"]);
        for material_run in &run.materials {
            let families: Vec<SectionFamily> = material_run.outcomes.iter().map(|(f, _)| *f).collect();
            assert_eq!(families, SectionFamily::ALL.to_vec());
        }
    }

    #[test]
    fn test_winners_skip_infeasible_materials() {
        let run = optimize(&[putty(), steel()], &config()).unwrap();
        for family in SectionFamily::ALL {
            let winners = run.winners(family);
            assert_eq!(winners.len(), 1);
            assert_eq!(winners[0].material().name, "Mild steel");
            assert_eq!(winners[0].family(), family);
            assert_eq!(run.not_found(family), vec!["Putty"]);
        }
    }

    #[test]
    fn test_winners_share_material() {
        let run = optimize(&[steel()], &config()).unwrap();
        let material_run = &run.materials[0];
        for family in SectionFamily::ALL {
            let beam = material_run.best(family).unwrap();
            assert!(Arc::ptr_eq(beam.material_arc(), &material_run.material));
        }
    }

    #[test]
    fn test_evaluated_is_total_of_searches() {
        let run = optimize(&[steel()], &config()).unwrap();
        let total: usize = run.materials[0].outcomes.iter().map(|(_, o)| o.evaluated).sum();
        assert_eq!(run.evaluated(), total);
        assert!(total > 0);
    }

    #[test]
    fn test_invalid_material_rejected_before_search() {
        let mut bad = steel();
        bad.density = -1.0;
        let err = optimize(&[steel(), bad], &config()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "density"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut bad = config();
        bad.length = 0.0;
        assert!(optimize(&[steel()], &bad).is_err());
    }

    #[test]
    fn test_empty_material_table() {
        let run = optimize(&[], &config()).unwrap();
        assert!(run.materials.is_empty());
        assert!(run.winners(SectionFamily::IBeam).is_empty());
        assert_eq!(run.evaluated(), 0);
    }

    #[test]
    fn test_winner_report_area_in_square_millimeters() {
        use crate::report::BeamReport;

        let run = optimize(&[steel()], &config()).unwrap();
        for family in SectionFamily::ALL {
            let beam = run.materials[0].best(family).unwrap();
            let report = BeamReport::from_beam(beam, run.config.load);
            let m2 = beam.area().unwrap();
            assert!((report.area.unwrap().value() - m2 * 1e6).abs() < 1e-9);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_run_matches_sequential() {
        let mut aluminium = steel();
        aluminium.name = "Aluminium".into();
        aluminium.yield_stress = 95.0e6;
        aluminium.modulus = 70.0e9;
        aluminium.density = 2700.0;

        let materials = vec![putty(), steel(), aluminium];
        let run = optimize(&materials, &config()).unwrap();

        let names: Vec<&str> = run.materials.iter().map(|r| r.material.name.as_str()).collect();
        assert_eq!(names, vec!["Putty", "Mild steel", "Aluminium"]);

        for (material, parallel) in materials.into_iter().zip(&run.materials) {
            let sequential = optimize_material(Arc::new(material), &config());
            for family in SectionFamily::ALL {
                let expected = sequential.best(family).map(|b| *b.section());
                let actual = parallel.best(family).map(|b| *b.section());
                assert_eq!(actual, expected);
                assert_eq!(
                    parallel.outcome(family).unwrap().evaluated,
                    sequential.outcome(family).unwrap().evaluated
                );
            }
        }
    }
}
