//! Tuning for the stability filter and the frame pipeline.
//!
//! Configuration is read from YAML or JSON. Keys are snake_case; the
//! camelCase spellings used by the web client (`stabilityWindow`,
//! `agreementRatio`, `cooldownMs`) are accepted as aliases.
//!
//! ```yaml
//! stability:
//!   stability_window: 8
//!   agreement_ratio: 0.8
//!   cooldown_ms: 8000
//!   allow_repeat: false
//! routing: shared
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GestureError, Result};

/// Default number of frames in the stability window.
pub const DEFAULT_STABILITY_WINDOW: usize = 8;
/// Default fraction of the window that must agree on a label.
pub const DEFAULT_AGREEMENT_RATIO: f32 = 0.8;
/// Default minimum time between two confirmed detections.
pub const DEFAULT_COOLDOWN_MS: u64 = 8000;

/// Configuration for [`crate::StabilityFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityConfig {
    /// Frames kept in the history window (default: 8).
    #[serde(alias = "stabilityWindow")]
    pub stability_window: usize,
    /// Minimum share of the window the label must hold, in `[0, 1]`
    /// (default: 0.8).
    #[serde(alias = "agreementRatio")]
    pub agreement_ratio: f32,
    /// Minimum milliseconds between two emissions (default: 8000).
    #[serde(alias = "cooldownMs")]
    pub cooldown_ms: u64,
    /// Allow the same label to be confirmed twice in a row once the
    /// cooldown has elapsed (default: false).
    #[serde(alias = "allowRepeat")]
    pub allow_repeat: bool,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            stability_window: DEFAULT_STABILITY_WINDOW,
            agreement_ratio: DEFAULT_AGREEMENT_RATIO,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            allow_repeat: false,
        }
    }
}

impl StabilityConfig {
    /// Rejects values the filter cannot work with. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        if self.stability_window == 0 {
            return Err(GestureError::InvalidConfig(
                "stability_window must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.agreement_ratio) {
            return Err(GestureError::InvalidConfig(format!(
                "agreement_ratio must be within [0, 1], got {}",
                self.agreement_ratio
            )));
        }
        Ok(())
    }
}

/// How hands seen in the same tick are fed to stability filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandRouting {
    /// Every hand goes through one shared filter, in tick order.
    #[default]
    Shared,
    /// Each handedness owns its own filter.
    #[serde(alias = "perHand")]
    PerHand,
}

/// Configuration for [`crate::Pipeline`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub stability: StabilityConfig,
    pub routing: HandRouting,
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        self.stability.validate()
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Loads a config file, choosing the format by extension
    /// (`.yaml`, `.yml` or `.json`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let content = std::fs::read_to_string(path)?;
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(GestureError::InvalidConfig(format!(
                "unsupported config format: {}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let cfg = StabilityConfig::default();
        assert_eq!(cfg.stability_window, 8);
        assert_eq!(cfg.agreement_ratio, 0.8);
        assert_eq!(cfg.cooldown_ms, 8000);
        assert!(!cfg.allow_repeat);
        assert!(cfg.validate().is_ok());
        assert_eq!(PipelineConfig::default().routing, HandRouting::Shared);
    }

    #[test]
    fn rejects_zero_window() {
        let cfg = StabilityConfig {
            stability_window: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(GestureError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_ratio_out_of_range() {
        for ratio in [-0.1, 1.01, f32::NAN] {
            let cfg = StabilityConfig {
                agreement_ratio: ratio,
                ..Default::default()
            };
            assert!(cfg.validate().is_err(), "ratio {ratio} should be rejected");
        }
        for ratio in [0.0, 1.0] {
            let cfg = StabilityConfig {
                agreement_ratio: ratio,
                ..Default::default()
            };
            assert!(cfg.validate().is_ok(), "ratio {ratio} should be accepted");
        }
    }

    #[test]
    fn yaml_partial_uses_defaults() {
        let cfg = PipelineConfig::from_yaml_str("stability:\n  cooldown_ms: 1000\n").unwrap();
        assert_eq!(cfg.stability.cooldown_ms, 1000);
        assert_eq!(cfg.stability.stability_window, 8);
        assert_eq!(cfg.routing, HandRouting::Shared);
    }

    #[test]
    fn json_accepts_camel_case() {
        let cfg = PipelineConfig::from_json_str(
            r#"{"stability":{"stabilityWindow":3,"agreementRatio":1.0,"cooldownMs":1000},"routing":"per_hand"}"#,
        )
        .unwrap();
        assert_eq!(cfg.stability.stability_window, 3);
        assert_eq!(cfg.stability.agreement_ratio, 1.0);
        assert_eq!(cfg.stability.cooldown_ms, 1000);
        assert_eq!(cfg.routing, HandRouting::PerHand);
    }

    #[test]
    fn parse_rejects_invalid_values() {
        let err = PipelineConfig::from_yaml_str("stability:\n  agreement_ratio: 1.5\n").unwrap_err();
        assert!(matches!(err, GestureError::InvalidConfig(_)));
    }

    #[test]
    fn load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml = dir.path().join("pipeline.yml");
        let mut f = std::fs::File::create(&yaml).unwrap();
        writeln!(f, "stability:\n  stability_window: 5\nrouting: per_hand").unwrap();
        let cfg = PipelineConfig::load(&yaml).unwrap();
        assert_eq!(cfg.stability.stability_window, 5);
        assert_eq!(cfg.routing, HandRouting::PerHand);

        let json = dir.path().join("pipeline.json");
        std::fs::write(&json, r#"{"stability":{"allow_repeat":true}}"#).unwrap();
        let cfg = PipelineConfig::load(&json).unwrap();
        assert!(cfg.stability.allow_repeat);

        let toml = dir.path().join("pipeline.toml");
        std::fs::write(&toml, "").unwrap();
        assert!(matches!(
            PipelineConfig::load(&toml),
            Err(GestureError::InvalidConfig(_))
        ));

        assert!(matches!(
            PipelineConfig::load(dir.path().join("missing.yaml")),
            Err(GestureError::Io(_))
        ));
    }
}
