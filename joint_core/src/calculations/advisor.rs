//! # Joint Advisor
//!
//! Follow-up guidance for a joint check:
//!
//! - [`torque_what_if`] recomputes a joint with its torque scaled by a factor
//!   (e.g. 1.10 for "+10%") and reports the change in equivalent strength.
//! - [`recommend`] lists changes to a failing comparison that would bring it
//!   back under the threshold: a torque limit for joint 2, a torque floor for
//!   joint 1, and alternate joint 2 grades or sizes at the current torque.
//!
//! Equivalent strength is linear in torque on both bases, so the torque
//! limits are exact rather than searched.

use serde::{Deserialize, Serialize};

use crate::calculations::comparison::{compare_strengths, JointComparison};
use crate::calculations::joint::{compute_joint, JointInput, JointResult};
use crate::errors::ValidationError;
use crate::reference::ReferenceData;
use crate::settings::CalcSettings;

/// A joint recomputed at a scaled torque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorqueWhatIf {
    /// Torque multiplier applied (1.10 = +10%)
    pub factor: f64,
    pub original_torque_ftlb: f64,
    pub adjusted_torque_ftlb: f64,
    pub original: JointResult,
    pub adjusted: JointResult,
    /// Adjusted equivalent strength as a percentage of the original.
    /// `None` when the original strength is zero.
    pub relative_strength_percent: Option<f64>,
}

/// Recompute `input` with its torque multiplied by `factor`.
pub fn torque_what_if(
    reference: &ReferenceData,
    settings: &CalcSettings,
    input: &JointInput,
    factor: f64,
) -> Result<TorqueWhatIf, ValidationError> {
    if !(factor.is_finite() && factor > 0.0) {
        return Err(ValidationError::invalid_input(
            "factor",
            factor.to_string(),
            "Torque factor must be positive",
        ));
    }

    let original = compute_joint(reference, settings, input)?;
    let scaled = JointInput {
        torque_ftlb: input.torque_ftlb * factor,
        ..input.clone()
    };
    let adjusted = compute_joint(reference, settings, &scaled)?;

    let relative_strength_percent = if original.equivalent_strength == 0.0 {
        None
    } else {
        Some(adjusted.equivalent_strength / original.equivalent_strength * 100.0)
    };

    Ok(TorqueWhatIf {
        factor,
        original_torque_ftlb: input.torque_ftlb,
        adjusted_torque_ftlb: scaled.torque_ftlb,
        original,
        adjusted,
        relative_strength_percent,
    })
}

/// Changes that would make a failing comparison pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Highest joint 2 torque that passes, other inputs unchanged (ft-lb)
    pub max_torque_joint_2_ftlb: f64,

    /// Lowest joint 1 torque that passes, other inputs unchanged (ft-lb)
    pub min_torque_joint_1_ftlb: f64,

    /// Joint 2 grades that pass at the current torque
    pub passing_grades_joint_2: Vec<String>,

    /// Joint 2 sizes that pass at the current torque
    pub passing_sizes_joint_2: Vec<String>,
}

/// Suggest changes for a failing comparison.
///
/// Returns `Ok(None)` when `check` already passes.
pub fn recommend(
    reference: &ReferenceData,
    settings: &CalcSettings,
    input_1: &JointInput,
    input_2: &JointInput,
    check: &JointComparison,
) -> Result<Option<Recommendations>, ValidationError> {
    let comparison = &check.comparison;
    if comparison.passes() {
        return Ok(None);
    }

    let threshold = comparison.threshold_percent;
    let ratio = comparison.strength_ratio_percent;
    let strength_1 = check.joint_1.equivalent_strength;
    let passes = |candidate: &JointResult| {
        compare_strengths(strength_1, candidate.equivalent_strength, threshold)
            .map(|c| c.passes())
            .unwrap_or(false)
    };

    let mut passing_grades_joint_2 = Vec::new();
    for grade in reference.material_grades() {
        if grade.label == check.joint_2.grade {
            continue;
        }
        let candidate = JointInput {
            grade: grade.label.clone(),
            ..input_2.clone()
        };
        if passes(&compute_joint(reference, settings, &candidate)?) {
            passing_grades_joint_2.push(grade.label.clone());
        }
    }

    let mut passing_sizes_joint_2 = Vec::new();
    for size in reference.fastener_sizes() {
        if size.label == check.joint_2.size.label {
            continue;
        }
        let candidate = JointInput {
            size: size.label.clone(),
            ..input_2.clone()
        };
        if passes(&compute_joint(reference, settings, &candidate)?) {
            passing_sizes_joint_2.push(size.label.clone());
        }
    }

    let recommendations = Recommendations {
        max_torque_joint_2_ftlb: input_2.torque_ftlb * threshold / ratio,
        min_torque_joint_1_ftlb: input_1.torque_ftlb * ratio / threshold,
        passing_grades_joint_2,
        passing_sizes_joint_2,
    };
    log::debug!(
        "recommendations: T2 <= {:.1} ft-lb or T1 >= {:.1} ft-lb; {} grades, {} sizes",
        recommendations.max_torque_joint_2_ftlb,
        recommendations.min_torque_joint_1_ftlb,
        recommendations.passing_grades_joint_2.len(),
        recommendations.passing_sizes_joint_2.len()
    );
    Ok(Some(recommendations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::comparison::check_joints;
    use crate::settings::StrengthBasis;
    use approx::assert_relative_eq;

    fn failing_pair() -> (JointInput, JointInput) {
        (
            JointInput::new("3/4-10", "A193 B7", 8, 80.0, 0.17),
            JointInput::new("3/4-10", "A193 B7", 8, 60.0, 0.17),
        )
    }

    #[test]
    fn test_torque_what_if_ten_percent() {
        let data = ReferenceData::standard();
        let input = JointInput::new("5/8-11", "A307 Gr. B", 4, 50.0, 0.17);
        let what_if = torque_what_if(&data, &CalcSettings::default(), &input, 1.10).unwrap();

        assert_relative_eq!(what_if.adjusted_torque_ftlb, 55.0, epsilon = 1e-9);
        assert_relative_eq!(what_if.adjusted.preload_lbf, what_if.original.preload_lbf * 1.10, max_relative = 1e-12);
        assert_relative_eq!(what_if.relative_strength_percent.unwrap(), 110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_torque_what_if_zero_torque() {
        let data = ReferenceData::standard();
        let input = JointInput::new("5/8-11", "A307 Gr. B", 4, 0.0, 0.17);
        let what_if = torque_what_if(&data, &CalcSettings::default(), &input, 1.10).unwrap();
        assert_eq!(what_if.relative_strength_percent, None);
    }

    #[test]
    fn test_torque_what_if_rejects_bad_factor() {
        let data = ReferenceData::standard();
        let input = JointInput::new("5/8-11", "A307 Gr. B", 4, 50.0, 0.17);
        assert!(torque_what_if(&data, &CalcSettings::default(), &input, 0.0).is_err());
    }

    #[test]
    fn test_no_recommendations_when_passing() {
        let data = ReferenceData::standard();
        let settings = CalcSettings::default();
        let j1 = JointInput::new("3/4-10", "A193 B7", 8, 80.0, 0.17);
        let j2 = JointInput::new("3/4-10", "A193 B7", 8, 40.0, 0.17);
        let check = check_joints(&data, &settings, &j1, &j2).unwrap();
        assert!(recommend(&data, &settings, &j1, &j2, &check).unwrap().is_none());
    }

    #[test]
    fn test_torque_limits_restore_threshold() {
        let data = ReferenceData::standard();
        let settings = CalcSettings::default();
        let (j1, j2) = failing_pair();
        let check = check_joints(&data, &settings, &j1, &j2).unwrap();
        assert!(!check.comparison.passes());

        let rec = recommend(&data, &settings, &j1, &j2, &check).unwrap().unwrap();
        // Same joint, ratio = 75% → T2 = 60 × 60/75 = 48
        assert_relative_eq!(rec.max_torque_joint_2_ftlb, 48.0, epsilon = 1e-9);
        assert_relative_eq!(rec.min_torque_joint_1_ftlb, 100.0, epsilon = 1e-9);

        let adjusted = JointInput {
            torque_ftlb: rec.max_torque_joint_2_ftlb,
            ..j2.clone()
        };
        let recheck = check_joints(&data, &settings, &j1, &adjusted).unwrap();
        assert_relative_eq!(recheck.comparison.strength_ratio_percent, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_alternate_sizes_on_stress_area_basis() {
        let data = ReferenceData::standard();
        let settings = CalcSettings::default();
        let (j1, j2) = failing_pair();
        let check = check_joints(&data, &settings, &j1, &j2).unwrap();
        let rec = recommend(&data, &settings, &j1, &j2, &check).unwrap().unwrap();

        // Grade does not enter the stress-area basis
        assert!(rec.passing_grades_joint_2.is_empty());
        // Larger sizes lower both preload and stress at the same torque
        assert!(rec.passing_sizes_joint_2.contains(&"1-8".to_string()));
        assert!(!rec.passing_sizes_joint_2.contains(&"1/2-13".to_string()));
    }

    #[test]
    fn test_alternate_grades_on_force_strength_basis() {
        let data = ReferenceData::standard();
        let settings = CalcSettings::default().with_basis(StrengthBasis::ForceStrength);
        let (j1, j2) = failing_pair();
        let check = check_joints(&data, &settings, &j1, &j2).unwrap();
        let rec = recommend(&data, &settings, &j1, &j2, &check).unwrap().unwrap();

        // Passing needs S <= 105 ksi x 60/75 = 84 ksi
        let passing = |label: &str| rec.passing_grades_joint_2.iter().any(|g| g == label);
        assert!(passing("A307 Gr. B"));
        assert!(!passing("A320 L7"));
        // UTS-only grades are rated on their published UTS
        assert!(passing("A193 B8 Cl 1"));
        assert!(passing("A193 B8M Cl 1"));
        assert!(!passing("A193 B8 Cl 2"));
        assert!(!passing("A193 B8M Cl 2"));
    }
}
