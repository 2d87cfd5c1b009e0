//! Quick preset loading

use super::ConfigError;
use crate::build::Build;
use crate::section::StatSection;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A named set of panel values that can replace a whole build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPreset {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub weapon: StatSection,
    #[serde(default)]
    pub demon: StatSection,
    #[serde(default)]
    pub allies: StatSection,
    #[serde(default)]
    pub passive: StatSection,
}

impl BuildPreset {
    /// Build with this preset's values; unlisted fields are 0
    pub fn to_build(&self) -> Build {
        Build {
            weapon: self.weapon.clone(),
            demon: self.demon.clone(),
            allies: self.allies.clone(),
            passive: self.passive.clone(),
        }
    }
}

/// Container for preset configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PresetsConfig {
    presets: Vec<BuildPreset>,
}

fn validate(presets: Vec<BuildPreset>) -> Result<Vec<BuildPreset>, ConfigError> {
    {
        let mut seen = HashSet::new();
        for preset in &presets {
            if preset.id.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "preset '{}' has an empty id",
                    preset.label
                )));
            }
            if !seen.insert(preset.id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate preset id '{}'",
                    preset.id
                )));
            }
        }
    }
    Ok(presets)
}

/// Load presets from a TOML file
pub fn load_presets(path: &Path) -> Result<Vec<BuildPreset>, ConfigError> {
    let config: PresetsConfig = super::load_toml(path)?;
    tracing::debug!(path = %path.display(), count = config.presets.len(), "loaded presets");
    validate(config.presets)
}

/// Load presets from a TOML string
pub fn parse_presets(content: &str) -> Result<Vec<BuildPreset>, ConfigError> {
    let config: PresetsConfig = super::parse_toml(content)?;
    validate(config.presets)
}

/// Built-in presets, in display order
pub fn default_presets() -> Vec<BuildPreset> {
    let toml = include_str!("../../config/presets.toml");
    parse_presets(toml).unwrap_or_else(|e| {
        tracing::error!(error = %e, "built-in presets failed to load");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{calculate_multiplier, EvaluationContext};
    use crate::types::StatField;

    #[test]
    fn test_default_presets_load_all() {
        let presets = default_presets();
        let ids: Vec<&str> = presets.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["burst", "sustain", "breaker"]);
        assert_eq!(presets[0].label, "Burst DPS");
        assert_eq!(presets[2].label, "Shield Breaker");
    }

    #[test]
    fn test_burst_values() {
        let burst = &default_presets()[0];
        assert!((burst.weapon.get(StatField::CritDmg) - 190.0).abs() < f64::EPSILON);
        assert!((burst.demon.get(StatField::Morale) - 8.0).abs() < f64::EPSILON);
        assert!((burst.passive.get(StatField::Resolve) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_burst_multiplier() {
        // 3.9 ATK x 1.9 DMG x 1.75 weapon x 1.4 additional x 1.08 morale x 2.33 crit
        let build = default_presets()[0].to_build();
        let m = calculate_multiplier(&build.sections(), &EvaluationContext::default());
        assert!((m - 45.683_983_8).abs() < 1e-6);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml = r#"
[[presets]]
id = "a"
label = "First"

[[presets]]
id = "a"
label = "Second"
"#;
        assert!(matches!(parse_presets(toml), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_load_presets_from_file() {
        let path = std::env::temp_dir().join(format!("presets_{}.toml", std::process::id()));
        std::fs::write(&path, include_str!("../../config/presets.toml")).unwrap();
        let loaded = load_presets(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.unwrap(), default_presets());
        assert!(matches!(
            load_presets(Path::new("no/such/presets.toml")),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_parse_minimal_preset() {
        let toml = r#"
[[presets]]
id = "glass"
label = "Glass Cannon"

[presets.weapon]
critChance = 150
critDmg = 100
"#;
        let presets = parse_presets(toml).unwrap();
        assert_eq!(presets.len(), 1);
        assert!(presets[0].description.is_none());
        let build = presets[0].to_build();
        assert!(build.demon.is_zero());
        assert!((build.weapon.get(StatField::CritChance) - 150.0).abs() < f64::EPSILON);
    }
}
