use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_folder() -> String {
    "mutuals".to_string()
}

/// Global configuration loaded from `~/.config/moots/config.toml`.
///
/// Deliberately small: concurrency, retries, and timeouts are not knobs in
/// this tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MootsConfig {
    /// Folder profile pictures land in when `--folder` is not given.
    #[serde(default = "default_folder")]
    pub default_folder: String,
}

impl Default for MootsConfig {
    fn default() -> Self {
        Self {
            default_folder: default_folder(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("moots")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MootsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MootsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MootsConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = MootsConfig::default();
        assert_eq!(cfg.default_folder, "mutuals");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = MootsConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: MootsConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.default_folder, cfg.default_folder);
    }

    #[test]
    fn config_toml_custom_folder() {
        let cfg: MootsConfig = toml::from_str(r#"default_folder = "pics/moots""#).unwrap();
        assert_eq!(cfg.default_folder, "pics/moots");
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: MootsConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.default_folder, "mutuals");
    }
}
