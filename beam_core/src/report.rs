//! # Result Reports
//!
//! Converts winning beams into display units and writes them out as one CSV
//! table per section family (`I_beams.csv`, `RHS_beams.csv`, `CHS_beams.csv`).
//!
//! ## Display units
//!
//! | Quantity | Unit |
//! |----------|------|
//! | Dimensions | mm |
//! | Area | mm² |
//! | Second moments | mm⁴ |
//! | Loads | kN |
//! | Embodied energy | MJ |
//! | Costs | $ |
//!
//! Undefined quantities are written as empty cells.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculations::beam::{Beam, LimitState};
use crate::calculations::optimizer::OptimizationRun;
use crate::errors::{CalcError, CalcResult};
use crate::file_io::{write_atomic, RunMetadata, RunSummary, SCHEMA_VERSION};
use crate::sections::SectionFamily;
use crate::units::{Kilonewtons, Megajoules, Millimeters, Mm4, SqMillimeters};

/// One winning beam in display units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamReport {
    pub material: String,
    pub family: SectionFamily,
    /// Named dimensions in table column order
    pub dimensions: Vec<(String, Millimeters)>,
    pub area: Option<SqMillimeters>,
    pub second_moment_xx: Option<Mm4>,
    pub second_moment_yy: Option<Mm4>,
    pub buckling_load: Option<Kilonewtons>,
    pub squash_load: Option<Kilonewtons>,
    /// Strain under the run's load
    pub strain: Option<f64>,
    pub embodied_energy: Option<Megajoules>,
    pub cost: Option<f64>,
    pub embodied_energy_cost: Option<f64>,
    pub total_cost: Option<f64>,
    /// Limit state with the highest utilization
    pub governing: Option<LimitState>,
}

impl BeamReport {
    /// Build a report for `beam` under axial `load` (N).
    pub fn from_beam(beam: &Beam, load: f64) -> Self {
        BeamReport {
            material: beam.material().name.clone(),
            family: beam.family(),
            dimensions: beam
                .section()
                .dimensions()
                .into_iter()
                .map(|(name, value)| (name.to_string(), Millimeters::from_meters(value)))
                .collect(),
            area: beam.area().map(SqMillimeters::from_square_meters),
            second_moment_xx: beam.second_moment_of_area_xx().map(Mm4::from_meters4),
            second_moment_yy: beam.second_moment_of_area_yy().map(Mm4::from_meters4),
            buckling_load: beam.buckling_load().map(Kilonewtons::from_newtons),
            squash_load: beam.squash_load().map(Kilonewtons::from_newtons),
            strain: beam.strain(load),
            embodied_energy: beam.total_embodied_energy().map(Megajoules::from_joules),
            cost: beam.cost(),
            embodied_energy_cost: beam.embodied_energy_cost(),
            total_cost: beam.total_cost(),
            governing: beam.check(load).governing_limit_state(),
        }
    }

    /// Cells in the same order as [`csv_headers`].
    pub fn csv_row(&self) -> Vec<String> {
        let mut row = vec![self.material.clone(), cell(self.area.map(|a| a.value()))];
        row.extend(self.dimensions.iter().map(|(_, value)| value.value().to_string()));
        row.extend([
            cell(self.second_moment_xx.map(|i| i.value())),
            cell(self.second_moment_yy.map(|i| i.value())),
            cell(self.buckling_load.map(|p| p.value())),
            cell(self.squash_load.map(|p| p.value())),
            cell(self.strain),
            cell(self.embodied_energy.map(|e| e.value())),
            cell(self.cost),
            cell(self.embodied_energy_cost),
            cell(self.total_cost),
            self.governing.map(|g| g.to_string()).unwrap_or_default(),
        ]);
        row
    }
}

/// Winners and misses for one family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyReport {
    pub family: SectionFamily,
    pub winners: Vec<BeamReport>,
    /// Materials with no suitable design
    pub not_found: Vec<String>,
}

/// Column headers for a family's result table.
pub fn csv_headers(family: SectionFamily) -> Vec<&'static str> {
    let dimensions: &[&str] = match family {
        SectionFamily::IBeam => &["Breadth [mm]", "Height [mm]", "Web thickness [mm]", "Flange thickness [mm]"],
        SectionFamily::Rhs => &["Breadth [mm]", "Height [mm]", "Wall thickness [mm]"],
        SectionFamily::Chs => &["Radius [mm]", "Wall thickness [mm]"],
    };

    let mut headers = vec!["Material", "Area [mm^2]"];
    headers.extend_from_slice(dimensions);
    headers.extend_from_slice(&[
        "I_xx [mm^4]",
        "I_yy [mm^4]",
        "Buckling load [kN]",
        "Squash load [kN]",
        "Strain",
        "Embodied energy [MJ]",
        "Cost [$]",
        "Embodied energy cost [$]",
        "Total cost [$]",
        "Governing limit state",
    ]);
    headers
}

/// Render a family table as CSV.
pub fn family_csv(family: SectionFamily, reports: &[BeamReport]) -> CalcResult<Vec<u8>> {
    let csv_error = |e: csv::Error| CalcError::SerializationError {
        reason: format!("{} table: {}", family, e),
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(csv_headers(family)).map_err(csv_error)?;
    for report in reports.iter().filter(|r| r.family == family) {
        writer.write_record(report.csv_row()).map_err(csv_error)?;
    }

    writer.into_inner().map_err(|e| CalcError::SerializationError {
        reason: format!("{} table: {}", family, e),
    })
}

/// Write `<dir>/<family file stem>.csv`.
pub fn write_family_csv(dir: &Path, family: SectionFamily, reports: &[BeamReport]) -> CalcResult<PathBuf> {
    let path = dir.join(format!("{}.csv", family.file_stem()));
    write_atomic(&path, &family_csv(family, reports)?)?;
    info!("Wrote {} {} result(s) to {}", reports.len(), family, path.display());
    Ok(path)
}

/// Write all three family tables into `dir`, creating it if needed.
pub fn write_results_csv(dir: &Path, run: &OptimizationRun) -> CalcResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .map_err(|e| CalcError::file_error("create directory", dir.display().to_string(), e.to_string()))?;

    family_reports(run)
        .iter()
        .map(|report| write_family_csv(dir, report.family, &report.winners))
        .collect()
}

/// Reports for every family, in [`SectionFamily::ALL`] order.
pub fn family_reports(run: &OptimizationRun) -> Vec<FamilyReport> {
    SectionFamily::ALL
        .iter()
        .map(|&family| FamilyReport {
            family,
            winners: run
                .winners(family)
                .into_iter()
                .map(|beam| BeamReport::from_beam(beam, run.config.load))
                .collect(),
            not_found: run.not_found(family).into_iter().map(String::from).collect(),
        })
        .collect()
}

/// Summarize a run for JSON output.
pub fn run_summary(run: &OptimizationRun) -> RunSummary {
    RunSummary {
        meta: RunMetadata {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            config: run.config,
            evaluated: run.evaluated(),
        },
        families: family_reports(run),
    }
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
