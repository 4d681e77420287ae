//! # Equation Registry
//!
//! Metadata for every formula in [`super::bolt`], so a host can print the
//! "Formulas Used" section of a report without restating them.
//!
//! ## Usage
//!
//! ```rust
//! use joint_core::equations::registry::{equations_for, Equation};
//! use joint_core::settings::StrengthBasis;
//!
//! let meta = Equation::Preload.metadata();
//! assert_eq!(meta.formula_plain, "F = (T × 12) / (K × d)");
//!
//! let used = equations_for(StrengthBasis::StressArea);
//! assert!(used.contains(&Equation::StressAreaStrength));
//! ```

use serde::{Deserialize, Serialize};

use crate::settings::StrengthBasis;

/// Definition of a variable used in an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable {
    /// Symbol (e.g., "T", "K", "As")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "ft-lb", "in²")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

/// Complete metadata for one formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Preload")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Variable definitions
    pub variables: &'static [Variable],
    /// Function implementing the equation
    pub source_function: &'static str,
}

/// Every formula used by a joint check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    Preload,
    ClampingForce,
    StressAreaStrength,
    ForceStrengthProduct,
    StrengthRatio,
    ThreadPitch,
}

const T: Variable = Variable::new("T", "Applied torque", "ft-lb");
const K: Variable = Variable::new("K", "Nut factor (k-factor)", "-");
const D: Variable = Variable::new("d", "Nominal diameter", "in");
const F: Variable = Variable::new("F", "Preload per fastener", "lbf");
const N: Variable = Variable::new("n", "Number of fasteners", "-");
const FC: Variable = Variable::new("Fc", "Clamping force", "lbf");
const AS: Variable = Variable::new("As", "Tensile stress area", "in²");
const S: Variable = Variable::new("S", "Material strength", "psi or ksi");
const E1: Variable = Variable::new("E1", "Joint 1 equivalent strength", "-");
const E2: Variable = Variable::new("E2", "Joint 2 equivalent strength", "-");
const TPI: Variable = Variable::new("TPI", "Threads per inch", "1/in");

impl Equation {
    pub const ALL: [Equation; 6] = [
        Equation::Preload,
        Equation::ClampingForce,
        Equation::StressAreaStrength,
        Equation::ForceStrengthProduct,
        Equation::StrengthRatio,
        Equation::ThreadPitch,
    ];

    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::Preload => EquationMetadata {
                name: "Preload",
                description: "Axial tension induced in one fastener by the tightening torque",
                formula_plain: "F = (T × 12) / (K × d)",
                variables: &[T, K, D],
                source_function: "bolt::preload",
            },
            Equation::ClampingForce => EquationMetadata {
                name: "Clamping Force",
                description: "Total preload of all fasteners in the joint",
                formula_plain: "Fc = F × n",
                variables: &[F, N],
                source_function: "bolt::clamping_force",
            },
            Equation::StressAreaStrength => EquationMetadata {
                name: "Equivalent Strength (stress area)",
                description: "Clamping force over the tensile stress area, in ksi",
                formula_plain: "E = (Fc / As) / 1000",
                variables: &[FC, AS],
                source_function: "bolt::stress_area_strength",
            },
            Equation::ForceStrengthProduct => EquationMetadata {
                name: "Equivalent Strength (force × strength)",
                description: "Legacy ranking figure; not a physical stress",
                formula_plain: "E = Fc × S",
                variables: &[FC, S],
                source_function: "bolt::force_strength_product",
            },
            Equation::StrengthRatio => EquationMetadata {
                name: "Strength Ratio",
                description: "Joint 2 equivalent strength as a percentage of joint 1",
                formula_plain: "R = (E2 / E1) × 100",
                variables: &[E1, E2],
                source_function: "bolt::strength_ratio",
            },
            Equation::ThreadPitch => EquationMetadata {
                name: "Thread Pitch",
                description: "Axial distance between adjacent threads",
                formula_plain: "p = 1 / TPI",
                variables: &[TPI],
                source_function: "bolt::thread_pitch",
            },
        }
    }
}

/// Formulas a joint check uses on the given basis, in evaluation order
pub fn equations_for(basis: StrengthBasis) -> Vec<Equation> {
    let strength = match basis {
        StrengthBasis::StressArea => Equation::StressAreaStrength,
        StrengthBasis::ForceStrength => Equation::ForceStrengthProduct,
    };
    vec![
        Equation::Preload,
        Equation::ClampingForce,
        strength,
        Equation::StrengthRatio,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_equation_has_metadata() {
        for eq in Equation::ALL {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty());
            assert!(meta.formula_plain.contains('='));
            assert!(!meta.variables.is_empty());
        }
    }

    #[test]
    fn test_equations_for_basis() {
        let legacy = equations_for(StrengthBasis::ForceStrength);
        assert!(legacy.contains(&Equation::ForceStrengthProduct));
        assert!(!legacy.contains(&Equation::StressAreaStrength));
        assert_eq!(legacy.first(), Some(&Equation::Preload));
    }
}
