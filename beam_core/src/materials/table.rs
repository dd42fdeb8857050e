//! Material table loader.
//!
//! Reads the tabular material source: a header row followed by one row per
//! material with the columns
//!
//! ```text
//! name, yield stress [MPa], modulus [GPa], elongation [%],
//! density [t/m³], price [$/kg], embodied energy [MJ/kg]
//! ```
//!
//! Column order is fixed; header text is ignored. Every row is converted to
//! SI and validated before the search sees it, so a malformed table is
//! rejected as a whole with the offending line number.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Material;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Gigapascals, Megapascals, MegajoulesPerKg, Pascals, Percent, TonnesPerCubicMeter};

/// Number of columns every data row must have
const COLUMN_COUNT: usize = 7;

const COLUMN_NAMES: [&str; COLUMN_COUNT] = [
    "name",
    "yield_stress",
    "modulus",
    "elongation",
    "density",
    "price",
    "energy_density",
];

/// One material row in table units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub name: String,
    pub yield_stress: Megapascals,
    pub modulus: Gigapascals,
    pub elongation: Percent,
    pub density: TonnesPerCubicMeter,
    /// $/kg, already unprefixed
    pub price: f64,
    pub energy_density: MegajoulesPerKg,
}

impl MaterialRecord {
    /// Convert to an SI [`Material`] without validating it.
    pub fn to_material(&self) -> Material {
        Material::new(
            self.name.clone(),
            Pascals::from(self.yield_stress).value(),
            Pascals::from(self.modulus).value(),
            self.elongation.fraction(),
            self.density.kg_per_cubic_meter(),
            self.price,
            self.energy_density.joules_per_kg(),
        )
    }
}

/// Load and validate a material table from a CSV file.
pub fn load_materials_csv(path: &Path) -> CalcResult<Vec<Material>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    let materials = parse_materials_csv(&contents, &path.display().to_string())?;
    debug!(path = %path.display(), count = materials.len(), "loaded material table");
    Ok(materials)
}

/// Parse and validate material table text.
///
/// `source_name` only appears in error messages.
pub fn parse_materials_csv(contents: &str, source_name: &str) -> CalcResult<Vec<Material>> {
    if contents.trim().is_empty() {
        return Err(CalcError::parse_error(source_name, 1, "Material table is empty"));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut materials = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(0, |p| p.line() as usize);
            CalcError::parse_error(source_name, line, e.to_string())
        })?;
        let line_num = record.position().map_or(0, |p| p.line() as usize);

        if record.iter().all(str::is_empty) {
            warn!(source = source_name, line = line_num, "skipping blank row");
            continue;
        }

        let parsed = parse_record(&record, source_name, line_num)?;
        let material = parsed.to_material();
        material.validate().map_err(|e| {
            CalcError::parse_error(source_name, line_num, format!("{} ({})", e, material.name))
        })?;
        materials.push(material);
    }

    Ok(materials)
}

fn parse_record(record: &csv::StringRecord, source_name: &str, line_num: usize) -> CalcResult<MaterialRecord> {
    let fields: Vec<&str> = record.iter().collect();
    if fields.len() < COLUMN_COUNT {
        return Err(CalcError::parse_error(
            source_name,
            line_num,
            format!("Expected {} columns, found {}", COLUMN_COUNT, fields.len()),
        ));
    }

    let name = fields[0].to_string();
    if name.is_empty() {
        return Err(CalcError::parse_error(source_name, line_num, "Missing material name"));
    }

    let number = |col: usize| -> CalcResult<f64> {
        let raw = fields[col];
        f64::from_str(raw).map_err(|_| {
            CalcError::parse_error(
                source_name,
                line_num,
                format!("'{}' is not a number (column {})", raw, COLUMN_NAMES[col]),
            )
        })
    };

    Ok(MaterialRecord {
        name,
        yield_stress: Megapascals(number(1)?),
        modulus: Gigapascals(number(2)?),
        elongation: Percent(number(3)?),
        density: TonnesPerCubicMeter(number(4)?),
        price: number(5)?,
        energy_density: MegajoulesPerKg(number(6)?),
    })
}
