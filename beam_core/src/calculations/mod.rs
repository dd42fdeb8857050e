//! # Beam Calculations
//!
//! The computation is layered:
//!
//! - [`beam`] - One candidate beam: derived properties and the sufficiency
//!   check against an axial load
//! - [`search`] - Exhaustive grid search for the lightest sufficient beam of
//!   one section family and one material
//! - [`optimizer`] - Every family for every material
//!
//! Nothing in here performs I/O. Inputs are validated once by
//! [`optimizer::optimize`]; after that an uncomputable quantity is `None`,
//! never an error.

pub mod beam;
pub mod optimizer;
pub mod search;

// Re-export commonly used types
pub use beam::{Beam, LimitState, SufficiencyCheck};
pub use optimizer::{optimize, MaterialRun, OptimizationRun};
pub use search::{SearchConfig, SearchOutcome};
