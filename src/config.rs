use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureFlags {
    pub sora_enabled: bool,
    pub meta_ads_enabled: bool,
    pub tiktok_ads_enabled: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            sora_enabled: true,
            meta_ads_enabled: false,
            tiktok_ads_enabled: false,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("no config file given, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_enable_only_video_generation() {
        let config = Config::default();
        assert!(config.features.sora_enabled);
        assert!(!config.features.meta_ads_enabled);
        assert!(!config.features.tiktok_ads_enabled);
    }

    #[test]
    fn missing_path_falls_back_to_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_features_table_keeps_other_defaults() {
        let config = Config::parse("[features]\nmeta_ads_enabled = true\n").unwrap();
        assert!(config.features.sora_enabled);
        assert!(config.features.meta_ads_enabled);
        assert!(!config.features.tiktok_ads_enabled);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = Config::parse("[features]\nsnapchat_enabled = true\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = Config::parse("[features\nsora_enabled = true");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[features]\nsora_enabled = false\ntiktok_ads_enabled = true").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(!config.features.sora_enabled);
        assert!(config.features.tiktok_ads_enabled);
    }

    #[test]
    fn load_reports_missing_file() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("ghoste.toml");
        let result = Config::load(Some(&path));
        assert!(matches!(result, Err(Error::ConfigNotFound(missing)) if missing == path));
    }

    #[test]
    fn rendered_toml_parses_back() {
        let config = Config {
            features: FeatureFlags {
                sora_enabled: false,
                meta_ads_enabled: true,
                tiktok_ads_enabled: false,
            },
        };
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("meta_ads_enabled = true"));
        assert_eq!(Config::parse(&rendered).unwrap(), config);
    }
}
