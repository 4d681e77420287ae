//! # Joint Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function taking the read-only [`ReferenceData`](crate::reference::ReferenceData)
//!   and [`CalcSettings`](crate::settings::CalcSettings) by reference
//!
//! ## Available Calculations
//!
//! - [`joint`] - Preload, clamping force and equivalent strength for one joint
//! - [`comparison`] - Strength ratio and pass/fail verdict for two joints
//! - [`advisor`] - Torque what-if and recommendations for a failing check

pub mod advisor;
pub mod comparison;
pub mod joint;

// Re-export commonly used types
pub use advisor::{recommend, torque_what_if, Recommendations, TorqueWhatIf};
pub use comparison::{
    check_joints, compare_joints, compare_strengths, ComparisonResult, JointComparison, Verdict,
};
pub use joint::{compute_joint, JointInput, JointResult};
