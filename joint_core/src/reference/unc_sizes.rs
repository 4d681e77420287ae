//! Unified Coarse (UNC) Thread Sizes
//!
//! Nominal diameter, threads per inch and tensile stress area for the
//! standard UNC sizes offered in fastener selection lists.
//!
//! ## Tensile Stress Area
//!
//! The tensile stress area is the effective cross section of the threaded
//! portion, smaller than the nominal shank area:
//!
//! - 1/2-13 = 0.1419 in² (nominal shank 0.196 in²)
//! - 3/4-10 = 0.334 in²
//! - 1-8 = 0.606 in²

use serde::{Deserialize, Serialize};

/// A standard fastener size and its thread geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastenerSize {
    /// Size label as shown to users (e.g., "5/8-11", "1 1/8-7")
    pub label: String,
    /// Nominal major diameter (in)
    pub diameter_in: f64,
    /// Threads per inch
    pub threads_per_inch: u32,
    /// Tensile stress area (in²)
    pub tensile_stress_area_in2: f64,
}

impl FastenerSize {
    pub fn new(label: impl Into<String>, diameter_in: f64, threads_per_inch: u32, tensile_stress_area_in2: f64) -> Self {
        FastenerSize {
            label: label.into(),
            diameter_in,
            threads_per_inch,
            tensile_stress_area_in2,
        }
    }

    /// Thread pitch p = 1 / TPI (in)
    pub fn thread_pitch_in(&self) -> f64 {
        1.0 / self.threads_per_inch as f64
    }

    /// Display string, e.g. `3/4-10 UNC (0.750" dia, As = 0.334 in²)`
    pub fn display_name(&self) -> String {
        format!(
            "{} UNC ({:.3}\" dia, As = {} in²)",
            self.label, self.diameter_in, self.tensile_stress_area_in2
        )
    }

    /// Key used for tolerant label matching.
    ///
    /// Spaces and dashes are interchangeable between the whole and fractional
    /// part ("1 1/8-7" == "1-1/8-7"), and a trailing "UNC" is ignored.
    pub(crate) fn lookup_key(label: &str) -> String {
        let upper = label.trim().to_uppercase();
        let trimmed = upper.strip_suffix("UNC").unwrap_or(&upper);
        trimmed
            .split(|c: char| c == ' ' || c == '-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl std::fmt::Display for FastenerSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// (label, diameter in, TPI, tensile stress area in²), smallest first
const UNC_TABLE: [(&str, f64, u32, f64); 12] = [
    ("1/4-20", 0.25, 20, 0.0318),
    ("5/16-18", 0.3125, 18, 0.0524),
    ("3/8-16", 0.375, 16, 0.0775),
    ("7/16-14", 0.4375, 14, 0.1063),
    ("1/2-13", 0.5, 13, 0.1419),
    ("9/16-12", 0.5625, 12, 0.182),
    ("5/8-11", 0.625, 11, 0.226),
    ("3/4-10", 0.75, 10, 0.334),
    ("7/8-9", 0.875, 9, 0.462),
    ("1-8", 1.0, 8, 0.606),
    ("1 1/8-7", 1.125, 7, 0.763),
    ("1 1/4-7", 1.25, 7, 0.969),
];

/// The standard UNC size table, ordered by diameter.
pub fn standard_sizes() -> Vec<FastenerSize> {
    UNC_TABLE
        .iter()
        .map(|&(label, d, tpi, area)| FastenerSize::new(label, d, tpi, area))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_by_diameter() {
        let sizes = standard_sizes();
        assert_eq!(sizes.len(), 12);
        for pair in sizes.windows(2) {
            assert!(pair[0].diameter_in < pair[1].diameter_in);
            assert!(pair[0].tensile_stress_area_in2 < pair[1].tensile_stress_area_in2);
        }
    }

    #[test]
    fn test_thread_pitch() {
        let size = FastenerSize::new("3/4-10", 0.75, 10, 0.334);
        assert!((size.thread_pitch_in() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_lookup_key() {
        assert_eq!(FastenerSize::lookup_key("1 1/8-7"), "1-1/8-7");
        assert_eq!(FastenerSize::lookup_key("1-1/8-7"), "1-1/8-7");
        assert_eq!(FastenerSize::lookup_key(" 3/4-10 UNC"), "3/4-10");
        assert_eq!(FastenerSize::lookup_key("3/4 - 10"), "3/4-10");
    }

    #[test]
    fn test_display_name() {
        let size = FastenerSize::new("3/4-10", 0.75, 10, 0.334);
        assert_eq!(size.display_name(), "3/4-10 UNC (0.750\" dia, As = 0.334 in²)");
    }
}
