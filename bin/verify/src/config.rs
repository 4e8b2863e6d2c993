use ilc_verify::SimilarityThresholds;
use serde::Deserialize;

/// Deployment environment, selects the log format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct VerifyConfig {
    /// `APP_ENV`
    #[serde(default)]
    pub app_env: Environment,
    /// `VERIFY_FORWARD_THRESHOLD`
    pub verify_forward_threshold: Option<f64>,
    /// `VERIFY_REVERSE_THRESHOLD`
    pub verify_reverse_threshold: Option<f64>,
}

impl VerifyConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Sentence similarity thresholds with any overrides applied.
    pub fn thresholds(&self) -> SimilarityThresholds {
        let defaults = SimilarityThresholds::default();

        SimilarityThresholds {
            forward: self.verify_forward_threshold.unwrap_or(defaults.forward),
            reverse: self.verify_reverse_threshold.unwrap_or(defaults.reverse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<VerifyConfig, envy::Error> {
        envy::from_iter(
            vars.iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        )
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.app_env, Environment::Development);
        assert!(config.app_env.is_development());
        assert_eq!(config.thresholds(), SimilarityThresholds::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("APP_ENV", "production"),
            ("VERIFY_FORWARD_THRESHOLD", "0.7"),
        ])
        .unwrap();

        assert_eq!(config.app_env, Environment::Production);
        assert!(!config.app_env.is_development());
        assert_eq!(config.thresholds().forward, 0.7);
        assert_eq!(config.thresholds().reverse, 0.6);
    }

    #[test]
    fn test_invalid_threshold_is_an_error() {
        assert!(config_from(&[("VERIFY_REVERSE_THRESHOLD", "often")]).is_err());
    }
}
