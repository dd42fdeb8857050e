//! # Unit Types
//!
//! Everything inside the beam model is plain SI (m, N, Pa, kg, J) with no
//! prefixes. Prefixed units only appear at the edges: the material table is
//! written in MPa/GPa/%/t·m⁻³/MJ·kg⁻¹ and the result tables are read by
//! people in mm/kN/MJ. These newtypes make each conversion explicit.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{Megapascals, Millimeters, Pascals};
//!
//! let yield_stress: Pascals = Megapascals(250.0).into();
//! assert_eq!(yield_stress.0, 250.0e6);
//!
//! let breadth = Millimeters::from_meters(0.03);
//! assert!((breadth.0 - 30.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// 10⁻³
pub const MILLI: f64 = 1e-3;
/// 10³
pub const KILO: f64 = 1e3;
/// 10⁶
pub const MEGA: f64 = 1e6;
/// 10⁹
pub const GIGA: f64 = 1e9;

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Stress in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * MEGA)
    }
}

impl From<Gigapascals> for Pascals {
    fn from(gpa: Gigapascals) -> Self {
        Pascals(gpa.0 * GIGA)
    }
}

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / MEGA)
    }
}

impl From<Pascals> for Gigapascals {
    fn from(pa: Pascals) -> Self {
        Gigapascals(pa.0 / GIGA)
    }
}

// ============================================================================
// Strain
// ============================================================================

/// Elongation expressed as a percentage, as material tables list it
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl Percent {
    /// Dimensionless fraction (percent / 100)
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}

// ============================================================================
// Density and Energy Density
// ============================================================================

/// Density in tonnes per cubic metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonnesPerCubicMeter(pub f64);

impl TonnesPerCubicMeter {
    /// Density in kg/m³
    pub fn kg_per_cubic_meter(self) -> f64 {
        self.0 * KILO
    }
}

/// Embodied energy per unit mass in MJ/kg
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegajoulesPerKg(pub f64);

impl MegajoulesPerKg {
    /// Energy density in J/kg
    pub fn joules_per_kg(self) -> f64 {
        self.0 * MEGA
    }
}

/// Energy in megajoules
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megajoules(pub f64);

impl Megajoules {
    /// Convert from joules
    pub fn from_joules(joules: f64) -> Self {
        Megajoules(joules / MEGA)
    }
}

// ============================================================================
// Length, Area and Section Properties
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl Millimeters {
    /// Convert from metres
    pub fn from_meters(m: f64) -> Self {
        Millimeters(m / MILLI)
    }

    /// Value in metres
    pub fn meters(self) -> f64 {
        self.0 * MILLI
    }
}

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMillimeters(pub f64);

impl SqMillimeters {
    /// Convert from m²
    pub fn from_square_meters(m2: f64) -> Self {
        SqMillimeters(m2 / MILLI.powi(2))
    }
}

/// Second moment of area in mm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm4(pub f64);

impl Mm4 {
    /// Convert from m⁴
    pub fn from_meters4(m4: f64) -> Self {
        Mm4(m4 / MILLI.powi(4))
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl Kilonewtons {
    /// Convert from newtons
    pub fn from_newtons(n: f64) -> Self {
        Kilonewtons(n / KILO)
    }

    /// Value in newtons
    pub fn newtons(self) -> f64 {
        self.0 * KILO
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Pascals);
impl_arithmetic!(Megapascals);
impl_arithmetic!(Gigapascals);
impl_arithmetic!(Percent);
impl_arithmetic!(TonnesPerCubicMeter);
impl_arithmetic!(MegajoulesPerKg);
impl_arithmetic!(Megajoules);
impl_arithmetic!(Millimeters);
impl_arithmetic!(SqMillimeters);
impl_arithmetic!(Mm4);
impl_arithmetic!(Kilonewtons);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_to_pascals() {
        let e: Pascals = Gigapascals(200.0).into();
        assert_eq!(e.0, 200.0e9);
        let fy: Pascals = Megapascals(250.0).into();
        assert_eq!(fy.0, 250.0e6);
        let back: Megapascals = fy.into();
        assert_eq!(back.0, 250.0);
    }

    #[test]
    fn test_table_unit_conversions() {
        assert!((Percent(21.0).fraction() - 0.21).abs() < 1e-12);
        assert!((TonnesPerCubicMeter(7.85).kg_per_cubic_meter() - 7850.0).abs() < 1e-9);
        assert_eq!(MegajoulesPerKg(30.0).joules_per_kg(), 30.0e6);
    }

    #[test]
    fn test_display_conversions() {
        assert!((Millimeters::from_meters(0.002).0 - 2.0).abs() < 1e-9);
        assert!((SqMillimeters::from_square_meters(1e-4).0 - 100.0).abs() < 1e-9);
        assert!((Mm4::from_meters4(1e-8).0 - 10_000.0).abs() < 1e-6);
        assert_eq!(Kilonewtons::from_newtons(24_000.0).0, 24.0);
        assert_eq!(Kilonewtons(24.0).newtons(), 24_000.0);
        assert_eq!(Megajoules::from_joules(5.0e6).0, 5.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(10.0);
        let b = Millimeters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let mpa = Megapascals(250.0);
        let json = serde_json::to_string(&mpa).unwrap();
        assert_eq!(json, "250.0");
        let roundtrip: Megapascals = serde_json::from_str(&json).unwrap();
        assert_eq!(mpa, roundtrip);
    }
}
