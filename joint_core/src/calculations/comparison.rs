//! # Joint Comparison
//!
//! Ratio of joint 2's equivalent strength to joint 1's and the pass/fail
//! verdict against the acceptance threshold.
//!
//! - Ratio R = (E2 / E1) × 100
//! - Pass when R ≤ threshold (default 60%)
//! - E1 = 0 has no ratio; it is reported as [`ComputationError::UndefinedRatio`]
//!
//! ## Example
//!
//! ```rust
//! use joint_core::calculations::comparison::{compare_strengths, Verdict};
//!
//! let result = compare_strengths(100.0, 55.0, 60.0)?;
//! assert_eq!(result.verdict, Verdict::Pass);
//! assert!(compare_strengths(0.0, 55.0, 60.0).is_err());
//! # Ok::<(), joint_core::errors::ComputationError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::joint::{compute_joint, JointInput, JointResult};
use crate::equations::bolt;
use crate::errors::{CalcResult, ComputationError};
use crate::reference::ReferenceData;
use crate::settings::CalcSettings;

/// Outcome of the acceptance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn passes(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results from comparing two equivalent strengths.
///
/// ## JSON Example
///
/// ```json
/// {
///   "equivalent_strength_1": 180.35,
///   "equivalent_strength_2": 72.14,
///   "strength_ratio_percent": 40.0,
///   "threshold_percent": 60.0,
///   "verdict": "Pass"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub equivalent_strength_1: f64,
    pub equivalent_strength_2: f64,
    /// (E2 / E1) × 100
    pub strength_ratio_percent: f64,
    pub threshold_percent: f64,
    pub verdict: Verdict,
}

impl ComparisonResult {
    pub fn passes(&self) -> bool {
        self.verdict.passes()
    }

    /// Remaining margin to the threshold (negative when failing)
    pub fn margin_percent(&self) -> f64 {
        self.threshold_percent - self.strength_ratio_percent
    }
}

/// Compare two raw equivalent strengths.
///
/// # Returns
///
/// * `Ok(ComparisonResult)` - Ratio and verdict
/// * `Err(ComputationError)` - Zero/non-finite reference strength, or a
///   threshold that is not a positive finite percentage
pub fn compare_strengths(
    strength_1: f64,
    strength_2: f64,
    threshold_percent: f64,
) -> Result<ComparisonResult, ComputationError> {
    if !(threshold_percent.is_finite() && threshold_percent > 0.0) {
        return Err(ComputationError::InvalidThreshold {
            value: threshold_percent.to_string(),
        });
    }
    if strength_1 == 0.0 {
        return Err(ComputationError::undefined_ratio("reference joint has zero strength"));
    }
    if !strength_1.is_finite() || !strength_2.is_finite() {
        return Err(ComputationError::undefined_ratio("equivalent strength is not finite"));
    }

    let strength_ratio_percent = bolt::strength_ratio(strength_1, strength_2);
    let verdict = if strength_ratio_percent <= threshold_percent {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    log::debug!(
        "compare: E1={:.4} E2={:.4} ratio={:.2}% threshold={}% -> {}",
        strength_1,
        strength_2,
        strength_ratio_percent,
        threshold_percent,
        verdict
    );

    Ok(ComparisonResult {
        equivalent_strength_1: strength_1,
        equivalent_strength_2: strength_2,
        strength_ratio_percent,
        threshold_percent,
        verdict,
    })
}

/// Compare two computed joints.
///
/// Both joints must have been computed on the same strength basis; mixing a
/// stress-area result with a force-strength result is refused.
pub fn compare_joints(
    joint_1: &JointResult,
    joint_2: &JointResult,
    threshold_percent: f64,
) -> Result<ComparisonResult, ComputationError> {
    if joint_1.basis != joint_2.basis {
        return Err(ComputationError::BasisMismatch {
            joint_1: format!("{:?}", joint_1.basis),
            joint_2: format!("{:?}", joint_2.basis),
        });
    }
    compare_strengths(joint_1.equivalent_strength, joint_2.equivalent_strength, threshold_percent)
}

/// Both joint results and their comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointComparison {
    pub joint_1: JointResult,
    pub joint_2: JointResult,
    pub comparison: ComparisonResult,
}

/// Compute both joints and compare them with the configured threshold.
///
/// Settings and both inputs are validated before anything is computed.
pub fn check_joints(
    reference: &ReferenceData,
    settings: &CalcSettings,
    input_1: &JointInput,
    input_2: &JointInput,
) -> CalcResult<JointComparison> {
    settings.validate()?;
    input_1.validate()?;
    input_2.validate()?;

    let joint_1 = compute_joint(reference, settings, input_1)?;
    let joint_2 = compute_joint(reference, settings, input_2)?;
    let comparison = compare_joints(&joint_1, &joint_2, settings.threshold_percent)?;

    Ok(JointComparison {
        joint_1,
        joint_2,
        comparison,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::StrengthBasis;
    use approx::assert_relative_eq;

    #[test]
    fn test_pass_and_fail() {
        let pass = compare_strengths(100.0, 55.0, 60.0).unwrap();
        assert_relative_eq!(pass.strength_ratio_percent, 55.0, epsilon = 1e-9);
        assert_eq!(pass.verdict, Verdict::Pass);
        assert_relative_eq!(pass.margin_percent(), 5.0, epsilon = 1e-9);

        let fail = compare_strengths(100.0, 65.0, 60.0).unwrap();
        assert_eq!(fail.strength_ratio_percent, 65.0);
        assert_eq!(fail.verdict, Verdict::Fail);
        assert!(!fail.passes());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let result = compare_strengths(100.0, 60.0, 60.0).unwrap();
        assert_eq!(result.verdict, Verdict::Pass);
    }

    #[test]
    fn test_threshold_override() {
        let result = compare_strengths(100.0, 65.0, 75.0).unwrap();
        assert_eq!(result.verdict, Verdict::Pass);
        assert_eq!(result.threshold_percent, 75.0);
    }

    #[test]
    fn test_zero_reference_strength() {
        let err = compare_strengths(0.0, 55.0, 60.0).unwrap_err();
        assert_eq!(err.error_code(), "UNDEFINED_RATIO");
        assert!(err.to_string().contains("zero strength"));
    }

    #[test]
    fn test_invalid_threshold() {
        assert_eq!(
            compare_strengths(100.0, 55.0, -1.0).unwrap_err().error_code(),
            "INVALID_THRESHOLD"
        );
        assert!(compare_strengths(100.0, 55.0, f64::NAN).is_err());
    }

    #[test]
    fn test_ratio_inverts_when_swapped() {
        let ab = compare_strengths(180.35, 72.5, 60.0).unwrap();
        let ba = compare_strengths(72.5, 180.35, 60.0).unwrap();
        assert_relative_eq!(
            ab.strength_ratio_percent * ba.strength_ratio_percent,
            10_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_check_joints() {
        let data = ReferenceData::standard();
        let settings = CalcSettings::default();
        let j1 = JointInput::new("3/4-10", "A193 B7", 8, 80.0, 0.17);
        let j2 = JointInput::new("5/8-11", "A307 Gr. B", 4, 50.0, 0.17);

        let check = check_joints(&data, &settings, &j1, &j2).unwrap();
        assert_eq!(check.joint_1.basis, StrengthBasis::StressArea);
        assert_relative_eq!(
            check.comparison.strength_ratio_percent,
            check.joint_2.equivalent_strength / check.joint_1.equivalent_strength * 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_check_joints_zero_torque_reference() {
        let data = ReferenceData::standard();
        let j1 = JointInput::new("3/4-10", "A193 B7", 8, 0.0, 0.17);
        let j2 = JointInput::new("5/8-11", "A193 B7", 4, 50.0, 0.17);

        let err = check_joints(&data, &CalcSettings::default(), &j1, &j2).unwrap_err();
        assert!(err.is_computation());
    }

    #[test]
    fn test_check_joints_validates_before_computing() {
        let data = ReferenceData::standard();
        let j1 = JointInput::new("3/4-10", "A193 B7", 8, 80.0, 0.17);
        let j2 = JointInput::new("5/8-11", "A193 B7", 0, 50.0, 0.17);

        let err = check_joints(&data, &CalcSettings::default(), &j1, &j2).unwrap_err();
        assert!(err.is_validation());

        let bad = CalcSettings::default().with_threshold(0.0);
        let err = check_joints(&data, &bad, &j1, &j1).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_mixed_bases_refused() {
        let data = ReferenceData::standard();
        let input = JointInput::new("3/4-10", "A193 B7", 8, 80.0, 0.17);
        let stress = compute_joint(&data, &CalcSettings::default(), &input).unwrap();
        let legacy = compute_joint(&data, &CalcSettings::legacy(), &input).unwrap();

        let err = compare_joints(&stress, &legacy, 60.0).unwrap_err();
        assert_eq!(err.error_code(), "BASIS_MISMATCH");
    }
}
