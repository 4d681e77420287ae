//! # Calculation Settings
//!
//! Options that control how joints are evaluated and compared. Hosts load
//! these from a config file or build them in code; every field has a default.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "threshold_percent": 60.0,
//!   "strength_basis": "StressArea",
//!   "strength_kind": "YS",
//!   "strength_unit": "Psi"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::reference::StrengthKind;
use crate::units::{Ksi, Psi};

/// Default acceptance margin: joint 2 must not exceed 60% of joint 1.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 60.0;

/// How a joint's equivalent strength is derived from its clamping force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StrengthBasis {
    /// (clamping force / tensile stress area) / 1000, in ksi
    #[default]
    StressArea,
    /// clamping force × material strength. Legacy figure, not a physical
    /// stress; only meaningful when both joints use it.
    ForceStrength,
}

impl StrengthBasis {
    pub const ALL: [StrengthBasis; 2] = [StrengthBasis::StressArea, StrengthBasis::ForceStrength];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Result<Self, ValidationError> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "stressarea" | "stress" | "ksi" => Ok(StrengthBasis::StressArea),
            "forcestrength" | "force" | "legacy" => Ok(StrengthBasis::ForceStrength),
            _ => Err(ValidationError::invalid_input(
                "strength_basis",
                s,
                "Expected 'stress-area' or 'force-strength'",
            )),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StrengthBasis::StressArea => "Stress-area basis (ksi)",
            StrengthBasis::ForceStrength => "Force x strength basis (legacy, non-physical)",
        }
    }

    /// True for the basis that yields a real stress
    pub fn is_physical(&self) -> bool {
        matches!(self, StrengthBasis::StressArea)
    }
}

impl std::fmt::Display for StrengthBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Unit in which material strength is reported and multiplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StrengthUnit {
    #[default]
    Psi,
    Ksi,
}

impl StrengthUnit {
    /// Express a psi value in this unit
    pub fn convert(&self, value: Psi) -> f64 {
        match self {
            StrengthUnit::Psi => value.0,
            StrengthUnit::Ksi => Ksi::from(value).0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            StrengthUnit::Psi => "psi",
            StrengthUnit::Ksi => "ksi",
        }
    }
}

/// Settings for joint evaluation and comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Pass when joint 2 / joint 1 × 100 is at or below this percentage
    pub threshold_percent: f64,

    /// Equivalent-strength basis used for both joints
    pub strength_basis: StrengthBasis,

    /// Which published material strength to resolve
    pub strength_kind: StrengthKind,

    /// Unit of the resolved material strength
    pub strength_unit: StrengthUnit,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            strength_basis: StrengthBasis::default(),
            strength_kind: StrengthKind::default(),
            strength_unit: StrengthUnit::default(),
        }
    }
}

impl CalcSettings {
    /// Settings reproducing legacy reports: force × strength in ksi
    pub fn legacy() -> Self {
        CalcSettings {
            strength_basis: StrengthBasis::ForceStrength,
            strength_unit: StrengthUnit::Ksi,
            ..CalcSettings::default()
        }
    }

    pub fn with_threshold(mut self, threshold_percent: f64) -> Self {
        self.threshold_percent = threshold_percent;
        self
    }

    pub fn with_basis(mut self, basis: StrengthBasis) -> Self {
        self.strength_basis = basis;
        self
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.threshold_percent.is_finite() && self.threshold_percent > 0.0) {
            return Err(ValidationError::invalid_input(
                "threshold_percent",
                self.threshold_percent.to_string(),
                "Threshold must be a positive percentage",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = CalcSettings::default();
        assert_eq!(s.threshold_percent, 60.0);
        assert_eq!(s.strength_basis, StrengthBasis::StressArea);
        assert_eq!(s.strength_kind, StrengthKind::YieldStrength);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: CalcSettings = serde_json::from_str(r#"{ "threshold_percent": 75.0 }"#).unwrap();
        assert_eq!(s.threshold_percent, 75.0);
        assert_eq!(s.strength_basis, StrengthBasis::StressArea);
        assert_eq!(s.strength_unit, StrengthUnit::Psi);
    }

    #[test]
    fn test_invalid_threshold() {
        assert!(CalcSettings::default().with_threshold(0.0).validate().is_err());
        assert!(CalcSettings::default().with_threshold(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_basis_parsing() {
        assert_eq!(StrengthBasis::from_str_flexible("stress-area").unwrap(), StrengthBasis::StressArea);
        assert_eq!(StrengthBasis::from_str_flexible("Force_Strength").unwrap(), StrengthBasis::ForceStrength);
        assert!(StrengthBasis::from_str_flexible("torque").is_err());
    }

    #[test]
    fn test_strength_unit_conversion() {
        assert_eq!(StrengthUnit::Psi.convert(Psi(125_000.0)), 125_000.0);
        assert_eq!(StrengthUnit::Ksi.convert(Psi(125_000.0)), 125.0);
    }

    #[test]
    fn test_legacy_settings() {
        let s = CalcSettings::legacy();
        assert_eq!(s.strength_basis, StrengthBasis::ForceStrength);
        assert_eq!(s.strength_unit, StrengthUnit::Ksi);
        assert!(!s.strength_basis.is_physical());
    }
}
