//! # joint_core - Bolted Joint Comparison Engine
//!
//! `joint_core` converts tightening torque and fastener geometry into preload,
//! clamping force and an equivalent strength for a bolted joint, then checks
//! whether a secondary joint stays within an acceptance margin of a primary
//! joint. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Read-only tables**: [`ReferenceData`] is built once and passed by reference
//! - **Rich Errors**: Validation and computation errors are distinct types
//!
//! ## Quick Start
//!
//! ```rust
//! use joint_core::{check_joints, CalcSettings, JointInput, ReferenceData, Verdict};
//!
//! let data = ReferenceData::standard();
//! let settings = CalcSettings::default();
//!
//! let primary = JointInput::new("3/4-10", "A193 B7", 8, 80.0, 0.17);
//! let secondary = JointInput::new("5/8-11", "A307 Gr. B", 4, 50.0, 0.17);
//!
//! let check = check_joints(&data, &settings, &primary, &secondary)?;
//! println!("ratio = {:.2}%", check.comparison.strength_ratio_percent);
//! assert_eq!(check.comparison.verdict, Verdict::Pass);
//! # Ok::<(), joint_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`reference`] - UNC size and ASTM grade tables
//! - [`equations`] - Bolted joint formulas and their metadata
//! - [`calculations`] - Joint calculator, comparator and advisor
//! - [`settings`] - Threshold, strength basis and strength kind
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod reference;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    check_joints, compare_joints, compare_strengths, compute_joint, ComparisonResult, JointComparison,
    JointInput, JointResult, Verdict,
};
pub use errors::{CalcError, CalcResult, ComputationError, ValidationError};
pub use reference::{FastenerSize, MaterialGrade, ReferenceData, StrengthKind};
pub use settings::{CalcSettings, StrengthBasis, StrengthUnit, DEFAULT_THRESHOLD_PERCENT};
