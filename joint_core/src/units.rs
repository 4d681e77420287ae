//! # Unit Types
//!
//! Type-safe wrappers for the unit conversions the joint equations perform.
//! They are plain f64 newtypes that serialize as bare numbers.
//!
//! ## US Customary Units
//!
//! - Torque: foot-pounds (ft-lb), inch-pounds (in-lb)
//! - Stress / material strength: psi, ksi
//!
//! Lengths, areas and forces stay as suffixed `f64` fields (`_in`, `_in2`,
//! `_lbf`) in the value types.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::units::{FtLb, InLb, Psi, Ksi};
//!
//! let torque: InLb = FtLb(80.0).into();
//! assert_eq!(torque.0, 960.0);
//!
//! let strength: Ksi = Psi(105_000.0).into();
//! assert_eq!(strength.0, 105.0);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Torque Units
// ============================================================================

/// Torque in foot-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FtLb(pub f64);

/// Torque in inch-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InLb(pub f64);

impl From<FtLb> for InLb {
    fn from(ftlb: FtLb) -> Self {
        InLb(ftlb.0 * 12.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Stress in kips per square inch (ksi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksi(pub f64);

impl From<Psi> for Ksi {
    fn from(psi: Psi) -> Self {
        Ksi(psi.0 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ftlb_to_inlb() {
        let t = FtLb(50.0);
        let inlb: InLb = t.into();
        assert_eq!(inlb.0, 600.0);
    }

    #[test]
    fn test_psi_to_ksi() {
        let s = Psi(60_000.0);
        let ksi: Ksi = s.into();
        assert_eq!(ksi.0, 60.0);
    }

    #[test]
    fn test_serialization() {
        let s = Ksi(180.35);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "180.35");
    }
}
