//! Text and JSON output for the CLI.

use chrono::{DateTime, Utc};
use joint_core::calculations::advisor::{Recommendations, TorqueWhatIf};
use joint_core::equations::{equations_for, Equation};
use joint_core::{
    CalcError, CalcSettings, ComparisonResult, ComputationError, JointResult, ReferenceData,
};
use serde::Serialize;

/// JSON envelope printed by `compare --json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub settings: &'a CalcSettings,
    pub joint_1: &'a JointResult,
    pub joint_2: &'a JointResult,
    /// `None` when the ratio is undefined; see `error`
    pub comparison: Option<&'a ComparisonResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CalcError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<&'a Recommendations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_if: Option<&'a TorqueWhatIf>,
}

const RULE: &str = "═══════════════════════════════════════";

fn banner(out: &mut String, title: &str) {
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("  {}\n", title));
    out.push_str(RULE);
    out.push('\n');
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

/// Ratio column text: two decimals, or "N/A" when undefined.
pub fn format_ratio(comparison: Result<&ComparisonResult, &ComputationError>) -> String {
    match comparison {
        Ok(c) => format!("{:.2}%", c.strength_ratio_percent),
        Err(_) => "N/A".to_string(),
    }
}

/// Formula list for the active basis.
pub fn formulas(settings: &CalcSettings) -> String {
    let mut out = String::new();
    out.push_str(&format!("Formulas ({}):\n", settings.strength_basis.display_name()));
    for equation in equations_for(settings.strength_basis) {
        let meta = equation.metadata();
        out.push_str(&format!("  {:<24} {}\n", meta.name, meta.formula_plain));
    }
    out
}

/// Every formula with its variables.
pub fn formula_catalog() -> String {
    let mut out = String::new();
    for equation in Equation::ALL {
        let meta = equation.metadata();
        out.push_str(&format!("{}\n  {}\n  {}\n", meta.name, meta.formula_plain, meta.description));
        for var in meta.variables {
            out.push_str(&format!("    {:<4} {} [{}]\n", var.symbol, var.description, var.units));
        }
        out.push('\n');
    }
    out
}

fn joint_block(out: &mut String, heading: &str, joint: &JointResult) {
    let name = if joint.label.is_empty() { heading } else { joint.label.as_str() };
    out.push_str(&format!("{}:\n", name));
    out.push_str(&format!("  Size:                {} (d = {:.4} in, As = {:.4} in²)\n",
        joint.size.label, joint.size.diameter_in, joint.size.tensile_stress_area_in2));
    out.push_str(&format!("  Thread pitch:        {:.4} in\n", joint.thread_pitch_in));
    out.push_str(&format!("  Grade:               {}\n", joint.grade));
    match (joint.strength_kind, joint.material_strength) {
        (Some(kind), Some(strength)) => out.push_str(&format!("  {:<20} {:.2} {}\n",
            format!("{}:", kind.display_name()),
            strength,
            joint.strength_unit.symbol())),
        _ => out.push_str("  Material strength:   N/A\n"),
    }
    out.push_str(&format!("  Preload:             {:.2} lbf\n", joint.preload_lbf));
    out.push_str(&format!("  Clamping force:      {:.2} lbf\n", joint.clamping_force_lbf));
    out.push_str(&format!("  Equivalent strength: {:.2} {}\n",
        joint.equivalent_strength, joint.equivalent_strength_units()));
    out.push('\n');
}

/// Full text report for a comparison.
pub fn comparison_text(
    settings: &CalcSettings,
    joint_1: &JointResult,
    joint_2: &JointResult,
    comparison: Result<&ComparisonResult, &ComputationError>,
    recommendations: Option<&Recommendations>,
    what_if: Option<&TorqueWhatIf>,
) -> String {
    let mut out = String::new();
    banner(&mut out, "BOLTED JOINT COMPARISON");
    out.push('\n');
    out.push_str(&formulas(settings));
    out.push('\n');

    joint_block(&mut out, "Joint 1", joint_1);
    joint_block(&mut out, "Joint 2", joint_2);

    out.push_str(&format!("Strength ratio (J2/J1): {}\n", format_ratio(comparison)));
    out.push_str(&format!("Threshold:              {:.2}%\n", settings.threshold_percent));
    out.push('\n');

    match comparison {
        Ok(c) => {
            let title = format!(
                "RESULT: {} {} (margin {:.2}%)",
                c.verdict,
                status_icon(c.passes()),
                c.margin_percent()
            );
            banner(&mut out, &title);
        }
        Err(e) => {
            banner(&mut out, &format!("RESULT: N/A ({})", e));
        }
    }

    if let Some(rec) = recommendations {
        out.push('\n');
        out.push_str("To pass the threshold:\n");
        out.push_str(&format!("  Reduce joint 2 torque to {:.2} ft-lb or less\n", rec.max_torque_joint_2_ftlb));
        out.push_str(&format!("  Increase joint 1 torque to {:.2} ft-lb or more\n", rec.min_torque_joint_1_ftlb));
        if !rec.passing_grades_joint_2.is_empty() {
            out.push_str(&format!("  Joint 2 grades that pass: {}\n", rec.passing_grades_joint_2.join(", ")));
        }
        if !rec.passing_sizes_joint_2.is_empty() {
            out.push_str(&format!("  Joint 2 sizes that pass:  {}\n", rec.passing_sizes_joint_2.join(", ")));
        }
    }

    if let Some(w) = what_if {
        out.push('\n');
        out.push_str(&format!(
            "What-if joint 2 torque x{:.2} ({:.2} -> {:.2} ft-lb): equivalent strength {:.2} -> {:.2} {}",
            w.factor,
            w.original_torque_ftlb,
            w.adjusted_torque_ftlb,
            w.original.equivalent_strength,
            w.adjusted.equivalent_strength,
            w.adjusted.equivalent_strength_units()
        ));
        match w.relative_strength_percent {
            Some(p) => out.push_str(&format!(" ({:.2}%)\n", p)),
            None => out.push_str(" (N/A)\n"),
        }
    }

    out
}

/// Table of fastener sizes.
pub fn sizes_table(reference: &ReferenceData) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<12} {:>10} {:>6} {:>10} {:>12}\n", "Size", "d (in)", "TPI", "Pitch", "As (in²)"));
    for size in reference.fastener_sizes() {
        out.push_str(&format!(
            "{:<12} {:>10.4} {:>6} {:>10.4} {:>12.4}\n",
            size.label,
            size.diameter_in,
            size.threads_per_inch,
            size.thread_pitch_in(),
            size.tensile_stress_area_in2
        ));
    }
    out
}

/// Table of grades with their rated strengths in psi.
pub fn grades_table(reference: &ReferenceData) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<16} {:<32} {}\n", "Grade", "Designation", "Ratings"));
    for grade in reference.material_grades() {
        let ratings: Vec<String> = grade
            .ratings
            .iter()
            .map(|r| format!("{} {}", r.kind.code(), r.strength))
            .collect();
        out.push_str(&format!("{:<16} {:<32} {}\n", grade.label, grade.designation, ratings.join("; ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use joint_core::{check_joints, compare_strengths, JointInput};

    fn sample() -> (CalcSettings, joint_core::JointComparison) {
        let data = ReferenceData::standard();
        let settings = CalcSettings::default();
        let check = check_joints(
            &data,
            &settings,
            &JointInput::new("3/4-10", "A193 B7", 8, 80.0, 0.17),
            &JointInput::new("5/8-11", "A307 Gr. B", 4, 50.0, 0.17),
        )
        .unwrap();
        (settings, check)
    }

    #[test]
    fn test_ratio_two_decimals() {
        let c = compare_strengths(3.0, 1.0, 60.0).unwrap();
        assert_eq!(format_ratio(Ok(&c)), "33.33%");
    }

    #[test]
    fn test_undefined_ratio_is_na() {
        let err = compare_strengths(0.0, 1.0, 60.0).unwrap_err();
        assert_eq!(format_ratio(Err(&err)), "N/A");
    }

    #[test]
    fn test_comparison_text_contents() {
        let (settings, check) = sample();
        let text = comparison_text(&settings, &check.joint_1, &check.joint_2, Ok(&check.comparison), None, None);
        assert!(text.contains("Joint 1"));
        assert!(text.contains("180.35 ksi"));
        assert!(text.contains("7529.41 lbf"));
        assert!(text.contains("PASS"));
        assert!(text.contains("Preload"));
    }

    #[test]
    fn test_uts_only_grade_shows_its_strength() {
        let data = ReferenceData::standard();
        let settings = CalcSettings::default();
        let check = check_joints(
            &data,
            &settings,
            &JointInput::new("3/4-10", "A193 B7", 8, 80.0, 0.17),
            &JointInput::new("3/4-10", "A193 B8 Cl 1", 8, 40.0, 0.17),
        )
        .unwrap();
        let text = comparison_text(&settings, &check.joint_1, &check.joint_2, Ok(&check.comparison), None, None);
        assert!(text.contains("Yield Strength:      105000.00 psi"));
        assert!(text.contains("Ultimate Tensile Strength: 80000.00 psi"));
    }

    #[test]
    fn test_report_json_shape() {
        let (settings, check) = sample();
        let report = Report {
            generated_at: Utc::now(),
            settings: &settings,
            joint_1: &check.joint_1,
            joint_2: &check.joint_2,
            comparison: Some(&check.comparison),
            error: None,
            recommendations: None,
            what_if: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("generated_at").is_some());
        assert_eq!(json["comparison"]["verdict"], "Pass");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_tables_list_everything() {
        let data = ReferenceData::standard();
        let sizes = sizes_table(&data);
        let grades = grades_table(&data);
        assert_eq!(sizes.lines().count(), data.fastener_sizes().len() + 1);
        assert_eq!(grades.lines().count(), data.material_grades().len() + 1);
        assert!(grades.contains("A193 B7"));
    }
}
