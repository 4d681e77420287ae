//! # Bolted Joint Formulas
//!
//! Short-form torque-tension relations for a joint of identical fasteners.
//!
//! ## Notation
//!
//! - `T` = Applied torque (ft-lb)
//! - `K` = Nut factor / k-factor (dimensionless)
//! - `d` = Nominal diameter (in)
//! - `F` = Preload per fastener (lbf)
//! - `n` = Number of fasteners
//! - `Fc` = Clamping force (lbf)
//! - `As` = Tensile stress area (in²)
//! - `S` = Material strength (psi or ksi)
//!
//! These functions are unchecked; callers validate that `K`, `d` and `As`
//! are positive before calling them.
//!
//! ## References
//!
//! - Shigley's Mechanical Engineering Design, 10th Edition, Eq. 8-27
//! - ASME PCC-1, Appendix K

use crate::units::{FtLb, InLb, Ksi, Psi};

/// Preload induced by a tightening torque
///
/// # Formula (Shigley Eq. 8-27)
/// - F = T·12 / (K·d)
///
/// Torque is converted from ft-lb to in-lb so the result is in lbf.
#[inline]
pub fn preload(torque_ftlb: f64, k_factor: f64, diameter_in: f64) -> f64 {
    let torque = InLb::from(FtLb(torque_ftlb));
    torque.0 / (k_factor * diameter_in)
}

/// Total clamping force of `n` fasteners
///
/// # Formula
/// - Fc = F·n
#[inline]
pub fn clamping_force(preload_lbf: f64, quantity: f64) -> f64 {
    preload_lbf * quantity
}

/// Equivalent strength on the stress-area basis (ksi)
///
/// # Formula
/// - σ = (Fc / As) / 1000
#[inline]
pub fn stress_area_strength(clamping_force_lbf: f64, tensile_stress_area_in2: f64) -> f64 {
    Ksi::from(Psi(clamping_force_lbf / tensile_stress_area_in2)).0
}

/// Equivalent strength on the legacy force × strength basis
///
/// # Formula
/// - E = Fc·S
///
/// The product has units of lbf·psi (or lbf·ksi) and is only useful for
/// ranking two joints computed the same way.
#[inline]
pub fn force_strength_product(clamping_force_lbf: f64, material_strength: f64) -> f64 {
    clamping_force_lbf * material_strength
}

/// Strength of joint 2 as a percentage of joint 1
///
/// # Formula
/// - R = (E2 / E1)·100
#[inline]
pub fn strength_ratio(strength_1: f64, strength_2: f64) -> f64 {
    (strength_2 / strength_1) * 100.0
}

/// Thread pitch from threads per inch
///
/// # Formula
/// - p = 1 / TPI
#[inline]
pub fn thread_pitch(threads_per_inch: u32) -> f64 {
    1.0 / threads_per_inch as f64
}
