//! Settings and reference-table loading for the CLI.
//!
//! Precedence, lowest to highest: built-in defaults, `--config` TOML file,
//! command-line flags / environment variables.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use joint_core::{CalcSettings, ReferenceData, StrengthBasis, StrengthKind};

/// Flag-level overrides applied on top of the config file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub threshold_percent: Option<f64>,
    pub strength_basis: Option<String>,
    pub strength_kind: Option<String>,
}

/// Load settings from an optional TOML file and apply overrides.
pub fn load_settings(path: Option<&Path>, overrides: &Overrides) -> Result<CalcSettings> {
    let mut settings = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml::from_str::<CalcSettings>(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?
        }
        None => CalcSettings::default(),
    };

    if let Some(threshold) = overrides.threshold_percent {
        settings.threshold_percent = threshold;
    }
    if let Some(basis) = &overrides.strength_basis {
        settings.strength_basis = StrengthBasis::from_str_flexible(basis)?;
    }
    if let Some(kind) = &overrides.strength_kind {
        settings.strength_kind = StrengthKind::from_str_flexible(kind)?;
    }

    settings.validate()?;
    log::debug!("settings: {:?}", settings);
    Ok(settings)
}

/// Standard tables, or a custom JSON table when a path is given.
pub fn load_reference(path: Option<&Path>) -> Result<ReferenceData> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading reference tables {}", path.display()))?;
            let data = ReferenceData::from_json(&text)
                .with_context(|| format!("loading reference tables {}", path.display()))?;
            log::info!(
                "loaded {} sizes and {} grades from {}",
                data.fastener_sizes().len(),
                data.material_grades().len(),
                path.display()
            );
            Ok(data)
        }
        None => Ok(ReferenceData::standard()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let settings = load_settings(None, &Overrides::default()).unwrap();
        assert_eq!(settings, CalcSettings::default());
    }

    #[test]
    fn test_toml_file_and_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threshold_percent = 70.0").unwrap();
        writeln!(file, "strength_basis = \"ForceStrength\"").unwrap();
        writeln!(file, "strength_unit = \"Ksi\"").unwrap();

        let settings = load_settings(Some(file.path()), &Overrides::default()).unwrap();
        assert_eq!(settings.threshold_percent, 70.0);
        assert_eq!(settings.strength_basis, StrengthBasis::ForceStrength);

        let overrides = Overrides {
            threshold_percent: Some(55.0),
            strength_basis: Some("stress-area".to_string()),
            strength_kind: Some("uts".to_string()),
        };
        let settings = load_settings(Some(file.path()), &overrides).unwrap();
        assert_eq!(settings.threshold_percent, 55.0);
        assert_eq!(settings.strength_basis, StrengthBasis::StressArea);
        assert_eq!(settings.strength_kind, StrengthKind::UltimateTensileStrength);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let overrides = Overrides {
            threshold_percent: Some(-5.0),
            ..Overrides::default()
        };
        assert!(load_settings(None, &overrides).is_err());
    }

    #[test]
    fn test_custom_reference_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "sizes": [{{ "label": "1/2-13", "diameter_in": 0.5, "threads_per_inch": 13, "tensile_stress_area_in2": 0.1419 }}], "grades": [] }}"#
        )
        .unwrap();
        let data = load_reference(Some(file.path())).unwrap();
        assert_eq!(data.fastener_sizes().len(), 1);
        assert!(data.material_grades().is_empty());
    }
}
