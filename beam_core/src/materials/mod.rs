//! # Materials
//!
//! Mechanical and economic properties of candidate beam materials.
//!
//! A [`Material`] is always stored in plain SI units. Material tables use
//! prefixed units (MPa, GPa, %, t/m³, MJ/kg); see [`table`] for the loader
//! that converts them.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::Material;
//!
//! let steel = Material::new("Mild steel", 250.0e6, 200.0e9, 0.21, 7850.0, 0.8, 25.0e6);
//! assert!(steel.validate().is_ok());
//! assert_eq!(steel.modulus, 200.0e9);
//! ```

pub mod table;

pub use table::{load_materials_csv, parse_materials_csv, MaterialRecord};

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::{Gigapascals, Megapascals, MegajoulesPerKg, Percent, TonnesPerCubicMeter};

/// Cost of electricity in $/J (0.314 $/kWh).
///
/// Shared by every material; converts embodied energy into a cost.
pub const ELECTRICITY_COST: f64 = 0.314 / 1000.0 / 3600.0;

/// Properties of one material, in SI units.
///
/// Immutable once constructed. Beams share a material through an `Arc`
/// rather than owning a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Identifier from the material table
    pub name: String,
    /// Yield stress (Pa)
    pub yield_stress: f64,
    /// Elastic modulus (Pa)
    pub modulus: f64,
    /// Elongation at failure as a strain (dimensionless)
    pub elongation: f64,
    /// Density (kg/m³)
    pub density: f64,
    /// Price ($/kg)
    pub price: f64,
    /// Embodied energy per unit mass (J/kg)
    pub energy_density: f64,
}

impl Material {
    /// Create a material from SI values.
    ///
    /// No validation is done here; call [`Material::validate`] on anything
    /// that came from outside the program.
    pub fn new(
        name: impl Into<String>,
        yield_stress: f64,
        modulus: f64,
        elongation: f64,
        density: f64,
        price: f64,
        energy_density: f64,
    ) -> Self {
        Material {
            name: name.into(),
            yield_stress,
            modulus,
            elongation,
            density,
            price,
            energy_density,
        }
    }

    /// Cost of electricity in $/J used for embodied-energy cost.
    pub fn electricity_cost(&self) -> f64 {
        ELECTRICITY_COST
    }

    /// Check that every physical field is a positive, finite number.
    pub fn validate(&self) -> CalcResult<()> {
        if self.name.trim().is_empty() {
            return Err(CalcError::missing_field("name"));
        }
        require_positive("yield_stress", self.yield_stress)?;
        require_positive("modulus", self.modulus)?;
        require_positive("elongation", self.elongation)?;
        require_positive("density", self.density)?;
        require_positive("price", self.price)?;
        require_positive("energy_density", self.energy_density)?;
        Ok(())
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A small table of common structural materials.
///
/// Lets the CLI and the tests run without a CSV file. Values are typical
/// handbook figures, not design values.
pub fn builtin_materials() -> Vec<Material> {
    // (name, yield MPa, E GPa, elongation %, density t/m³, price $/kg, energy MJ/kg)
    let rows = [
        ("Mild steel", 250.0, 200.0, 21.0, 7.85, 0.8, 25.0),
        ("Stainless steel 304", 215.0, 193.0, 40.0, 8.0, 3.5, 56.0),
        ("Aluminium 6061-T6", 276.0, 69.0, 12.0, 2.7, 2.5, 200.0),
        ("Titanium Ti-6Al-4V", 880.0, 114.0, 14.0, 4.43, 25.0, 650.0),
        ("CFRP laminate", 600.0, 70.0, 1.2, 1.6, 40.0, 270.0),
    ];

    rows.iter()
        .map(|&(name, fy, e, elong, rho, price, energy)| {
            MaterialRecord {
                name: name.to_string(),
                yield_stress: Megapascals(fy),
                modulus: Gigapascals(e),
                elongation: Percent(elong),
                density: TonnesPerCubicMeter(rho),
                price,
                energy_density: MegajoulesPerKg(energy),
            }
            .to_material()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mild_steel() -> Material {
        Material::new("Mild steel", 250.0e6, 200.0e9, 0.21, 7850.0, 0.8, 25.0e6)
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(mild_steel().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let mut mat = mild_steel();
        mat.density = 0.0;
        let err = mat.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("density"));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut mat = mild_steel();
        mat.modulus = f64::NAN;
        assert!(mat.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut mat = mild_steel();
        mat.name = "  ".to_string();
        assert_eq!(mat.validate().unwrap_err(), CalcError::missing_field("name"));
    }

    #[test]
    fn test_electricity_cost() {
        // 0.314 $/kWh over 3.6 MJ per kWh
        assert!((ELECTRICITY_COST - 8.7222e-8).abs() < 1e-11);
        assert_eq!(mild_steel().electricity_cost(), ELECTRICITY_COST);
    }

    #[test]
    fn test_builtin_materials_are_valid_si() {
        let materials = builtin_materials();
        assert_eq!(materials.len(), 5);
        for mat in &materials {
            assert!(mat.validate().is_ok(), "{} should validate", mat.name);
        }
        let steel = &materials[0];
        assert_eq!(steel.yield_stress, 250.0e6);
        assert_eq!(steel.modulus, 200.0e9);
        assert!((steel.elongation - 0.21).abs() < 1e-12);
    }

    #[test]
    fn test_material_serialization() {
        let mat = mild_steel();
        let json = serde_json::to_string(&mat).unwrap();
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, parsed);
    }
}
