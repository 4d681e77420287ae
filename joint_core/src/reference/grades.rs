//! Fastener Material Grades (ASTM)
//!
//! Published strength values for common bolting specifications:
//! A307, A193 (B7, B7M, B8, B8M and their classes), A320 (L7, L7M) and A574.
//!
//! A grade carries one or more ratings, each tagged with the kind of strength
//! it publishes (yield or ultimate tensile). Some strain-hardened grades
//! (A193 B8 Class 2) publish lower values for larger diameters; those are
//! stored as ordered diameter brackets.
//!
//! All values are in psi.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::units::Psi;

/// Which published strength figure a value represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StrengthKind {
    /// Minimum yield strength
    #[default]
    #[serde(rename = "YS")]
    YieldStrength,
    /// Minimum ultimate tensile strength
    #[serde(rename = "UTS")]
    UltimateTensileStrength,
}

impl StrengthKind {
    pub const ALL: [StrengthKind; 2] = [StrengthKind::YieldStrength, StrengthKind::UltimateTensileStrength];

    /// Short code ("YS", "UTS")
    pub fn code(&self) -> &'static str {
        match self {
            StrengthKind::YieldStrength => "YS",
            StrengthKind::UltimateTensileStrength => "UTS",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Result<Self, ValidationError> {
        match s.to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "YS" | "YIELD" | "YIELDSTRENGTH" | "SY" => Ok(StrengthKind::YieldStrength),
            "UTS" | "ULTIMATE" | "TENSILE" | "ULTIMATETENSILESTRENGTH" | "SU" => {
                Ok(StrengthKind::UltimateTensileStrength)
            }
            _ => Err(ValidationError::invalid_input(
                "strength_kind",
                s,
                "Expected yield (YS) or ultimate tensile (UTS)",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            StrengthKind::YieldStrength => "Yield Strength",
            StrengthKind::UltimateTensileStrength => "Ultimate Tensile Strength",
        }
    }
}

impl std::fmt::Display for StrengthKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One diameter range of a bracketed strength.
///
/// The bracket applies to diameters up to and including `max_diameter_in`;
/// `None` means no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthBracket {
    pub max_diameter_in: Option<f64>,
    pub psi: f64,
}

impl StrengthBracket {
    /// Bracket covering diameters ≤ `max_diameter_in`
    pub fn up_to(max_diameter_in: f64, psi: f64) -> Self {
        StrengthBracket {
            max_diameter_in: Some(max_diameter_in),
            psi,
        }
    }

    /// Open-ended bracket covering everything above the previous bound
    pub fn above(psi: f64) -> Self {
        StrengthBracket {
            max_diameter_in: None,
            psi,
        }
    }

    fn contains(&self, diameter_in: f64) -> bool {
        self.max_diameter_in.map_or(true, |max| diameter_in <= max)
    }
}

/// A published strength value, either flat or diameter dependent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GradeStrength {
    /// Same value for every diameter
    Flat { psi: f64 },
    /// Value depends on diameter; brackets are searched in order
    Bracketed { brackets: Vec<StrengthBracket> },
}

impl GradeStrength {
    /// Resolve the strength for a diameter.
    ///
    /// A diameter equal to a bracket bound resolves to that (lower) bracket.
    /// Returns `None` only when no bracket covers the diameter.
    pub fn resolve(&self, diameter_in: f64) -> Option<Psi> {
        match self {
            GradeStrength::Flat { psi } => Some(Psi(*psi)),
            GradeStrength::Bracketed { brackets } => brackets
                .iter()
                .find(|b| b.contains(diameter_in))
                .map(|b| Psi(b.psi)),
        }
    }

    pub fn is_diameter_dependent(&self) -> bool {
        matches!(self, GradeStrength::Bracketed { .. })
    }

    /// Validate values and bracket ordering
    pub(crate) fn validate(&self, grade: &str) -> Result<(), ValidationError> {
        let bad = |reason: String| Err(ValidationError::invalid_reference_data(format!("{}: {}", grade, reason)));
        match self {
            GradeStrength::Flat { psi } => {
                if !(psi.is_finite() && *psi > 0.0) {
                    return bad(format!("strength {} psi must be positive", psi));
                }
            }
            GradeStrength::Bracketed { brackets } => {
                if brackets.is_empty() {
                    return bad("bracketed strength has no brackets".to_string());
                }
                let mut last_bound = 0.0_f64;
                for (i, b) in brackets.iter().enumerate() {
                    if !(b.psi.is_finite() && b.psi > 0.0) {
                        return bad(format!("strength {} psi must be positive", b.psi));
                    }
                    match b.max_diameter_in {
                        Some(max) if !(max.is_finite() && max > last_bound) => {
                            return bad(format!("bracket bound {} in is not ascending", max));
                        }
                        Some(max) => last_bound = max,
                        None if i + 1 != brackets.len() => {
                            return bad("only the last bracket may be open-ended".to_string());
                        }
                        None => {}
                    }
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for GradeStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeStrength::Flat { psi } => write!(f, "{} psi", psi),
            GradeStrength::Bracketed { brackets } => {
                let parts: Vec<String> = brackets
                    .iter()
                    .map(|b| match b.max_diameter_in {
                        Some(max) => format!("d <= {} in: {} psi", max, b.psi),
                        None => format!("larger: {} psi", b.psi),
                    })
                    .collect();
                f.write_str(&parts.join(", "))
            }
        }
    }
}

/// A strength value tagged with its kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthRating {
    pub kind: StrengthKind,
    pub strength: GradeStrength,
}

/// A fastener material specification and its published strengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialGrade {
    /// Selection label (e.g., "A193 B7")
    pub label: String,
    /// Full designation (e.g., "ASTM A193 Grade B7")
    pub designation: String,
    /// Published ratings; at most one per kind
    pub ratings: Vec<StrengthRating>,
}

impl MaterialGrade {
    pub fn new(label: impl Into<String>, designation: impl Into<String>) -> Self {
        MaterialGrade {
            label: label.into(),
            designation: designation.into(),
            ratings: Vec::new(),
        }
    }

    /// Builder: add a flat rating
    pub fn with_flat(mut self, kind: StrengthKind, psi: f64) -> Self {
        self.ratings.push(StrengthRating {
            kind,
            strength: GradeStrength::Flat { psi },
        });
        self
    }

    /// Builder: add a diameter-bracketed rating
    pub fn with_brackets(mut self, kind: StrengthKind, brackets: Vec<StrengthBracket>) -> Self {
        self.ratings.push(StrengthRating {
            kind,
            strength: GradeStrength::Bracketed { brackets },
        });
        self
    }

    pub fn rating(&self, kind: StrengthKind) -> Option<&StrengthRating> {
        self.ratings.iter().find(|r| r.kind == kind)
    }

    /// Strength of the requested kind at a diameter, if published
    pub fn strength(&self, kind: StrengthKind, diameter_in: f64) -> Option<Psi> {
        self.rating(kind).and_then(|r| r.strength.resolve(diameter_in))
    }

    /// Strength of the `preferred` kind, or of the first kind the grade does
    /// publish when `preferred` is not rated. Returns the kind actually used.
    pub fn resolve_strength(&self, preferred: StrengthKind, diameter_in: f64) -> Option<(StrengthKind, Psi)> {
        std::iter::once(preferred)
            .chain(self.kinds())
            .find_map(|kind| self.strength(kind, diameter_in).map(|psi| (kind, psi)))
    }

    /// Kinds this grade publishes, in table order
    pub fn kinds(&self) -> impl Iterator<Item = StrengthKind> + '_ {
        self.ratings.iter().map(|r| r.kind)
    }

    pub fn is_diameter_dependent(&self) -> bool {
        self.ratings.iter().any(|r| r.strength.is_diameter_dependent())
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::invalid_reference_data("grade label must not be empty"));
        }
        if self.ratings.is_empty() {
            return Err(ValidationError::invalid_reference_data(format!(
                "{}: grade has no strength ratings",
                self.label
            )));
        }
        for kind in StrengthKind::ALL {
            if self.kinds().filter(|k| *k == kind).count() > 1 {
                return Err(ValidationError::invalid_reference_data(format!(
                    "{}: duplicate {} rating",
                    self.label, kind
                )));
            }
        }
        for r in &self.ratings {
            r.strength.validate(&self.label)?;
        }
        Ok(())
    }

    /// Key used for tolerant label matching.
    ///
    /// Ignores case, a leading "ASTM", spaces, dots, dashes and the "Gr"
    /// prefix: "ASTM A307 Gr. B" and "A307B" share a key. "Class" and "Cl"
    /// are equivalent.
    pub(crate) fn lookup_key(label: &str) -> String {
        let upper = label.trim().to_uppercase();
        let without_astm = upper.strip_prefix("ASTM").unwrap_or(&upper);
        without_astm
            .replace("CLASS", "CL")
            .replace("GRADE", "GR")
            .replace([' ', '.', '-'], "")
            .replace("GR", "")
    }
}

impl std::fmt::Display for MaterialGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Diameter at which the A193 Class 2 strain-hardened grades step down (in)
pub const CLASS_2_BRACKET_IN: f64 = 0.75;

/// The standard grade table, in selection-list order.
pub fn standard_grades() -> Vec<MaterialGrade> {
    use StrengthKind::{UltimateTensileStrength as Uts, YieldStrength as Ys};

    let class_2 = || {
        vec![
            StrengthBracket::up_to(CLASS_2_BRACKET_IN, 125_000.0),
            StrengthBracket::above(115_000.0),
        ]
    };

    vec![
        MaterialGrade::new("A307 Gr. B", "ASTM A307 Grade B")
            .with_flat(Uts, 60_000.0)
            .with_flat(Ys, 36_000.0),
        MaterialGrade::new("A193 B7", "ASTM A193 Grade B7")
            .with_flat(Uts, 125_000.0)
            .with_flat(Ys, 105_000.0),
        MaterialGrade::new("A193 B7M", "ASTM A193 Grade B7M")
            .with_flat(Uts, 100_000.0)
            .with_flat(Ys, 75_000.0),
        MaterialGrade::new("A193 B8", "ASTM A193 Grade B8")
            .with_flat(Uts, 75_000.0)
            .with_flat(Ys, 30_000.0),
        MaterialGrade::new("A193 B8M", "ASTM A193 Grade B8M")
            .with_flat(Uts, 75_000.0)
            .with_flat(Ys, 30_000.0),
        MaterialGrade::new("A193 B8 Cl 1", "ASTM A193 Grade B8 Class 1").with_flat(Uts, 80_000.0),
        MaterialGrade::new("A193 B8M Cl 1", "ASTM A193 Grade B8M Class 1").with_flat(Uts, 80_000.0),
        MaterialGrade::new("A193 B8 Cl 2", "ASTM A193 Grade B8 Class 2").with_brackets(Uts, class_2()),
        MaterialGrade::new("A193 B8M Cl 2", "ASTM A193 Grade B8M Class 2").with_brackets(Uts, class_2()),
        MaterialGrade::new("A574", "ASTM A574 Socket Head Cap Screw")
            .with_flat(Uts, 170_000.0)
            .with_flat(Ys, 140_000.0),
        MaterialGrade::new("A320 L7", "ASTM A320 Grade L7").with_flat(Ys, 125_000.0),
        MaterialGrade::new("A320 L7M", "ASTM A320 Grade L7M").with_flat(Ys, 100_000.0),
    ]
}
