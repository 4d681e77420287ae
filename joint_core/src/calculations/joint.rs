//! # Joint Calculation
//!
//! Preload, clamping force and equivalent strength for one bolted joint of
//! identical fasteners.
//!
//! ## Assumptions
//!
//! - All fasteners in the joint share size, grade, torque and k-factor
//! - Short-form torque relation F = T·12 / (K·d)
//! - No external load; preload only
//!
//! ## Example
//!
//! ```rust
//! use joint_core::calculations::joint::{compute_joint, JointInput};
//! use joint_core::reference::ReferenceData;
//! use joint_core::settings::CalcSettings;
//!
//! let data = ReferenceData::standard();
//! let input = JointInput::new("3/4-10", "A193 B7", 8, 80.0, 0.17);
//!
//! let result = compute_joint(&data, &CalcSettings::default(), &input)?;
//! assert!((result.preload_lbf - 7529.41).abs() < 0.01);
//! # Ok::<(), joint_core::errors::ValidationError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::bolt;
use crate::errors::ValidationError;
use crate::reference::{FastenerSize, ReferenceData, StrengthKind};
use crate::settings::{CalcSettings, StrengthBasis, StrengthUnit};

/// Input parameters for one joint.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Flange A",
///   "size": "3/4-10",
///   "grade": "A193 B7",
///   "quantity": 8,
///   "torque_ftlb": 80.0,
///   "k_factor": 0.17
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointInput {
    /// User label for this joint (e.g., "Joint 1", "Flange A")
    #[serde(default)]
    pub label: String,

    /// Fastener size label (e.g., "3/4-10")
    pub size: String,

    /// Material grade label (e.g., "A193 B7")
    pub grade: String,

    /// Number of fasteners
    pub quantity: u32,

    /// Applied torque per fastener (ft-lb)
    pub torque_ftlb: f64,

    /// Nut factor / k-factor (dimensionless)
    pub k_factor: f64,
}

impl JointInput {
    pub fn new(size: impl Into<String>, grade: impl Into<String>, quantity: u32, torque_ftlb: f64, k_factor: f64) -> Self {
        JointInput {
            label: String::new(),
            size: size.into(),
            grade: grade.into(),
            quantity,
            torque_ftlb,
            k_factor,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.quantity == 0 {
            return Err(ValidationError::invalid_input(
                "quantity",
                self.quantity.to_string(),
                "At least one fastener is required",
            ));
        }
        if !self.torque_ftlb.is_finite() || self.torque_ftlb < 0.0 {
            return Err(ValidationError::invalid_input(
                "torque_ftlb",
                self.torque_ftlb.to_string(),
                "Torque cannot be negative",
            ));
        }
        if !(self.k_factor.is_finite() && self.k_factor > 0.0) {
            return Err(ValidationError::invalid_input(
                "k_factor",
                self.k_factor.to_string(),
                "k-factor must be positive",
            ));
        }
        Ok(())
    }
}

/// Results for one joint.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Flange A",
///   "size": { "label": "3/4-10", "diameter_in": 0.75, "threads_per_inch": 10, "tensile_stress_area_in2": 0.334 },
///   "grade": "A193 B7",
///   "strength_kind": "YS",
///   "material_strength": 105000.0,
///   "strength_unit": "Psi",
///   "thread_pitch_in": 0.1,
///   "preload_lbf": 7529.41,
///   "clamping_force_lbf": 60235.29,
///   "basis": "StressArea",
///   "equivalent_strength": 180.35
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointResult {
    /// Label copied from the input
    pub label: String,

    /// Resolved fastener size
    pub size: FastenerSize,

    /// Grade label as it appears in the reference table
    pub grade: String,

    /// Which published strength was resolved. Differs from the configured
    /// kind when the grade only publishes the other one.
    pub strength_kind: Option<StrengthKind>,

    /// Resolved material strength, in `strength_unit`. Always present on the
    /// force-strength basis; reporting only on the stress-area basis.
    pub material_strength: Option<f64>,

    pub strength_unit: StrengthUnit,

    /// Thread pitch (in)
    pub thread_pitch_in: f64,

    /// Preload per fastener (lbf)
    pub preload_lbf: f64,

    /// Total clamping force (lbf)
    pub clamping_force_lbf: f64,

    /// Basis used for `equivalent_strength`
    pub basis: StrengthBasis,

    /// Equivalent strength: ksi on the stress-area basis, lbf × strength unit
    /// on the force-strength basis
    pub equivalent_strength: f64,
}

impl JointResult {
    /// Units label for `equivalent_strength`
    pub fn equivalent_strength_units(&self) -> String {
        match self.basis {
            StrengthBasis::StressArea => "ksi".to_string(),
            StrengthBasis::ForceStrength => format!("lbf·{}", self.strength_unit.symbol()),
        }
    }
}

/// Preload per fastener, rejecting inputs that would divide by zero.
pub fn checked_preload(torque_ftlb: f64, k_factor: f64, diameter_in: f64) -> Result<f64, ValidationError> {
    if !(k_factor.is_finite() && k_factor > 0.0) {
        return Err(ValidationError::invalid_input(
            "k_factor",
            k_factor.to_string(),
            "k-factor must be positive",
        ));
    }
    if !(diameter_in.is_finite() && diameter_in > 0.0) {
        return Err(ValidationError::invalid_input(
            "diameter_in",
            diameter_in.to_string(),
            "Diameter must be positive",
        ));
    }
    Ok(bolt::preload(torque_ftlb, k_factor, diameter_in))
}

/// Calculate one joint.
///
/// Labels are resolved against `reference`, then preload, clamping force and
/// equivalent strength are computed on `settings.strength_basis`.
///
/// Material strength uses `settings.strength_kind`, or the grade's own
/// published kind when it does not rate that one. The stress-area basis does
/// not need it and only reports it.
///
/// # Returns
///
/// * `Ok(JointResult)` - Calculation results
/// * `Err(ValidationError)` - Invalid input, unknown size/grade label, or a
///   force-strength joint whose grade has no strength at this diameter
pub fn compute_joint(
    reference: &ReferenceData,
    settings: &CalcSettings,
    input: &JointInput,
) -> Result<JointResult, ValidationError> {
    input.validate()?;

    let size = reference.size_properties(&input.size)?;
    let grade = reference.grade(&input.grade)?;
    let resolved = grade.resolve_strength(settings.strength_kind, size.diameter_in);
    if let Some((kind, _)) = resolved {
        if kind != settings.strength_kind {
            log::debug!("grade '{}' is not rated for {}; using {}", grade.label, settings.strength_kind, kind);
        }
    }
    let strength_kind = resolved.map(|(kind, _)| kind);
    let material_strength = resolved.map(|(_, psi)| settings.strength_unit.convert(psi));

    let preload_lbf = checked_preload(input.torque_ftlb, input.k_factor, size.diameter_in)?;
    let clamping_force_lbf = bolt::clamping_force(preload_lbf, f64::from(input.quantity));

    let equivalent_strength = match settings.strength_basis {
        StrengthBasis::StressArea => bolt::stress_area_strength(clamping_force_lbf, size.tensile_stress_area_in2),
        StrengthBasis::ForceStrength => {
            let strength = material_strength.ok_or_else(|| {
                ValidationError::strength_not_rated(&grade.label, settings.strength_kind.display_name())
            })?;
            log::warn!(
                "joint '{}' uses the legacy force x strength basis; result is not a physical stress",
                input.label
            );
            bolt::force_strength_product(clamping_force_lbf, strength)
        }
    };

    log::debug!(
        "joint '{}': {} x{} {} @ {} ft-lb, K={} -> F={:.2} lbf, Fc={:.2} lbf, E={:.4}",
        input.label,
        size.label,
        input.quantity,
        grade.label,
        input.torque_ftlb,
        input.k_factor,
        preload_lbf,
        clamping_force_lbf,
        equivalent_strength
    );

    Ok(JointResult {
        label: input.label.clone(),
        size: size.clone(),
        grade: grade.label.clone(),
        strength_kind,
        material_strength,
        strength_unit: settings.strength_unit,
        thread_pitch_in: bolt::thread_pitch(size.threads_per_inch),
        preload_lbf,
        clamping_force_lbf,
        basis: settings.strength_basis,
        equivalent_strength,
    })
}
