//! # beam_core - Axially Loaded Beam Section Optimizer
//!
//! `beam_core` finds, for each material in a table, the lightest cross-section
//! of each family (I-beam, rectangular hollow, circular hollow) that carries a
//! given axial load without yielding, buckling or over-straining. Inputs and
//! results are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Pure core**: Beams and searches do no I/O and never fail; undefined
//!   quantities are `None`
//! - **Validated boundary**: Material tables and search configuration are
//!   checked once, with structured errors
//! - **Deterministic**: Same inputs, same winners, with or without the
//!   `parallel` feature
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use beam_core::calculations::{optimize, SearchConfig};
//! use beam_core::materials::builtin_materials;
//! use beam_core::sections::SectionFamily;
//!
//! let run = optimize(&builtin_materials(), &SearchConfig::default())?;
//! for family in SectionFamily::ALL {
//!     println!("{}: {} winner(s)", family, run.winners(family).len());
//! }
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beam model, grid search and driver
//! - [`sections`] - Cross-section geometry
//! - [`materials`] - Material definitions and the CSV table loader
//! - [`report`] - Display-unit result tables
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic saves and JSON run summaries

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod report;
pub mod sections;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{optimize, Beam, OptimizationRun, SearchConfig};
pub use errors::{CalcError, CalcResult};
pub use materials::Material;
pub use sections::{CrossSection, SectionFamily};
