//! # Reference Data
//!
//! Lookup tables for fastener sizes and material grades, held in a single
//! read-only [`ReferenceData`] value. Build it once at startup and pass it by
//! reference into every calculation; nothing in the crate mutates it.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::reference::{ReferenceData, StrengthKind};
//!
//! let data = ReferenceData::standard();
//!
//! let size = data.size_properties("3/4-10")?;
//! assert_eq!(size.threads_per_inch, 10);
//!
//! let ys = data.grade_strength("A193 B7", StrengthKind::YieldStrength, size.diameter_in)?;
//! assert_eq!(ys.0, 105_000.0);
//! # Ok::<(), joint_core::errors::ValidationError>(())
//! ```
//!
//! ## Custom Tables
//!
//! Hosts may load their own tables from JSON with [`ReferenceData::from_json`].
//! Custom tables are validated the same way as [`ReferenceData::new`].

pub mod grades;
pub mod unc_sizes;

pub use grades::{GradeStrength, MaterialGrade, StrengthBracket, StrengthKind, StrengthRating};
pub use unc_sizes::FastenerSize;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::units::Psi;

/// Immutable fastener size and material grade tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceData {
    sizes: Vec<FastenerSize>,
    grades: Vec<MaterialGrade>,
}

/// On-disk shape of a custom table
#[derive(Deserialize)]
struct RawTables {
    sizes: Vec<FastenerSize>,
    grades: Vec<MaterialGrade>,
}

impl ReferenceData {
    /// Build tables from custom entries, validating every row.
    ///
    /// Rejects non-positive geometry or strengths, malformed brackets, and
    /// labels that collide after normalization.
    pub fn new(sizes: Vec<FastenerSize>, grades: Vec<MaterialGrade>) -> Result<Self, ValidationError> {
        for size in &sizes {
            validate_size(size)?;
        }
        for grade in &grades {
            grade.validate()?;
        }
        reject_duplicates(sizes.iter().map(|s| (s.label.as_str(), FastenerSize::lookup_key(&s.label))))?;
        reject_duplicates(grades.iter().map(|g| (g.label.as_str(), MaterialGrade::lookup_key(&g.label))))?;

        Ok(ReferenceData { sizes, grades })
    }

    /// The standard UNC size and ASTM grade tables.
    pub fn standard() -> Self {
        ReferenceData {
            sizes: unc_sizes::standard_sizes(),
            grades: grades::standard_grades(),
        }
    }

    /// Load custom tables from a JSON document with `sizes` and `grades` arrays
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let raw: RawTables = serde_json::from_str(json)
            .map_err(|e| ValidationError::invalid_reference_data(format!("malformed JSON: {}", e)))?;
        Self::new(raw.sizes, raw.grades)
    }

    /// All fastener sizes in table order (for selection lists)
    pub fn fastener_sizes(&self) -> &[FastenerSize] {
        &self.sizes
    }

    /// All material grades in table order (for selection lists)
    pub fn material_grades(&self) -> &[MaterialGrade] {
        &self.grades
    }

    /// Look up a fastener size by label
    pub fn size_properties(&self, label: &str) -> Result<&FastenerSize, ValidationError> {
        let key = FastenerSize::lookup_key(label);
        self.sizes
            .iter()
            .find(|s| FastenerSize::lookup_key(&s.label) == key)
            .ok_or_else(|| ValidationError::size_not_found(label))
    }

    /// Look up a material grade by label
    pub fn grade(&self, label: &str) -> Result<&MaterialGrade, ValidationError> {
        let key = MaterialGrade::lookup_key(label);
        self.grades
            .iter()
            .find(|g| MaterialGrade::lookup_key(&g.label) == key)
            .ok_or_else(|| ValidationError::grade_not_found(label))
    }

    /// Resolve a grade's strength of `kind` at `diameter_in`.
    ///
    /// For diameter-dependent grades the bracket whose inclusive upper bound
    /// contains the diameter is used, so a diameter exactly on a bound takes
    /// the lower bracket.
    pub fn grade_strength(&self, label: &str, kind: StrengthKind, diameter_in: f64) -> Result<Psi, ValidationError> {
        if !(diameter_in.is_finite() && diameter_in > 0.0) {
            return Err(ValidationError::invalid_input(
                "diameter_in",
                diameter_in.to_string(),
                "Diameter must be positive",
            ));
        }
        let grade = self.grade(label)?;
        grade
            .strength(kind, diameter_in)
            .ok_or_else(|| ValidationError::strength_not_rated(&grade.label, kind.display_name()))
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        ReferenceData::standard()
    }
}

fn validate_size(size: &FastenerSize) -> Result<(), ValidationError> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if size.label.trim().is_empty() {
        return Err(ValidationError::invalid_reference_data("size label must not be empty"));
    }
    if !positive(size.diameter_in) {
        return Err(ValidationError::invalid_reference_data(format!(
            "{}: diameter {} in must be positive",
            size.label, size.diameter_in
        )));
    }
    if size.threads_per_inch == 0 {
        return Err(ValidationError::invalid_reference_data(format!(
            "{}: threads per inch must be at least 1",
            size.label
        )));
    }
    if !positive(size.tensile_stress_area_in2) {
        return Err(ValidationError::invalid_reference_data(format!(
            "{}: tensile stress area {} in² must be positive",
            size.label, size.tensile_stress_area_in2
        )));
    }
    Ok(())
}

fn reject_duplicates<'a>(entries: impl Iterator<Item = (&'a str, String)>) -> Result<(), ValidationError> {
    let mut seen: Vec<String> = Vec::new();
    for (label, key) in entries {
        if seen.contains(&key) {
            return Err(ValidationError::invalid_reference_data(format!("duplicate label '{}'", label)));
        }
        seen.push(key);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tables_pass_validation() {
        let data = ReferenceData::standard();
        let rebuilt = ReferenceData::new(data.fastener_sizes().to_vec(), data.material_grades().to_vec()).unwrap();
        assert_eq!(rebuilt, data);
    }

    #[test]
    fn test_size_lookup() {
        let data = ReferenceData::standard();
        let size = data.size_properties("5/8-11").unwrap();
        assert_eq!(size.diameter_in, 0.625);
        assert_eq!(size.threads_per_inch, 11);
        assert_eq!(size.tensile_stress_area_in2, 0.226);

        assert_eq!(data.size_properties("1-1/8-7").unwrap().label, "1 1/8-7");
    }

    #[test]
    fn test_unknown_labels() {
        let data = ReferenceData::standard();
        assert_eq!(
            data.size_properties("2-4.5").unwrap_err(),
            ValidationError::size_not_found("2-4.5")
        );
        assert_eq!(data.grade("A325").unwrap_err().error_code(), "GRADE_NOT_FOUND");
    }

    #[test]
    fn test_grade_strength_aliases() {
        let data = ReferenceData::standard();
        let uts = StrengthKind::UltimateTensileStrength;
        assert_eq!(data.grade_strength("A307B", uts, 0.5).unwrap(), Psi(60_000.0));
        assert_eq!(data.grade_strength("ASTM A307 Gr. B", uts, 0.5).unwrap(), Psi(60_000.0));
    }

    #[test]
    fn test_grade_strength_not_rated() {
        let data = ReferenceData::standard();
        let err = data
            .grade_strength("A193 B8 Cl 1", StrengthKind::YieldStrength, 0.5)
            .unwrap_err();
        assert_eq!(err.error_code(), "STRENGTH_NOT_RATED");
    }

    #[test]
    fn test_grade_strength_rejects_bad_diameter() {
        let data = ReferenceData::standard();
        assert!(data.grade_strength("A193 B7", StrengthKind::YieldStrength, 0.0).is_err());
        assert!(data.grade_strength("A193 B7", StrengthKind::YieldStrength, f64::NAN).is_err());
    }

    #[test]
    fn test_custom_tables_validated() {
        let sizes = vec![FastenerSize::new("M12", 0.472, 12, 0.0)];
        assert!(ReferenceData::new(sizes, vec![]).is_err());

        let sizes = vec![
            FastenerSize::new("1 1/8-7", 1.125, 7, 0.763),
            FastenerSize::new("1-1/8-7", 1.125, 7, 0.763),
        ];
        let err = ReferenceData::new(sizes, vec![]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_REFERENCE_DATA");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "sizes": [
                { "label": "1/2-13", "diameter_in": 0.5, "threads_per_inch": 13, "tensile_stress_area_in2": 0.1419 }
            ],
            "grades": [
                {
                    "label": "Custom",
                    "designation": "Shop Standard",
                    "ratings": [
                        { "kind": "YS", "strength": { "type": "Flat", "psi": 92000.0 } }
                    ]
                }
            ]
        }"#;
        let data = ReferenceData::from_json(json).unwrap();
        assert_eq!(data.fastener_sizes().len(), 1);
        assert_eq!(
            data.grade_strength("custom", StrengthKind::YieldStrength, 0.5).unwrap(),
            Psi(92_000.0)
        );

        assert!(ReferenceData::from_json("{ not json").is_err());
    }

    #[test]
    fn test_reference_data_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReferenceData>();
    }
}
