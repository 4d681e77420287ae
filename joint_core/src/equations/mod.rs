//! # Bolted Joint Equations
//!
//! All formulas used by the joint calculator live here so they can be checked
//! against their references in one place.
//!
//! ## Modules
//!
//! - [`bolt`] - Torque-preload, clamping force, equivalent strength, ratio
//! - [`registry`] - Equation metadata for report "Formulas Used" sections
//!
//! ## Units
//!
//! - Torque: ft-lb (converted to in-lb inside [`bolt::preload`])
//! - Diameter: in; stress area: in²
//! - Forces: lbf
//! - Stress-area equivalent strength: ksi

pub mod bolt;
pub mod registry;

pub use bolt::{
    clamping_force,
    force_strength_product,
    preload,
    strength_ratio,
    stress_area_strength,
    thread_pitch,
};

pub use registry::{equations_for, Equation, EquationMetadata, Variable};
