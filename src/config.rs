use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const CONFIG_DIR: &str = ".pypi-license-info";
const APP_NAME: &str = "pypi-license-info";

/// Root configuration structure, deserialized from `.pypi-license-info/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Where and how package metadata is fetched.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base of the JSON API; `/{package}[/{version}]/json` is appended.
    pub base_url: String,
    /// Per-request timeout in seconds. `0` disables the timeout.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pypi.python.org/pypi".to_string(),
            timeout_secs: 30,
            user_agent: format!("{}/{}", APP_NAME, env!("CARGO_PKG_VERSION")),
        }
    }
}

impl RegistryConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Load the configuration, searching in order:
///
/// 1. `<working_dir>/.pypi-license-info/config.toml`
/// 2. `~/.config/pypi-license-info/config.toml`
/// 3. Built-in [`Config::default`]
pub fn load_config(working_dir: &Path) -> Result<Config> {
    let home_config = dirs::home_dir()
        .map(|home| home.join(".config").join(APP_NAME).join("config.toml"));
    load_config_from(working_dir, home_config.as_deref())
}

fn load_config_from(working_dir: &Path, home_config: Option<&Path>) -> Result<Config> {
    let project_config = working_dir.join(CONFIG_DIR).join("config.toml");
    let candidates: Vec<PathBuf> = std::iter::once(project_config)
        .chain(home_config.map(Path::to_path_buf))
        .collect();

    for path in candidates {
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            return toml::from_str(&content)
                .with_context(|| format!("invalid config {}", path.display()));
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let config_dir = dir.join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        let path = config_dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_when_no_config() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(dir.path(), None).unwrap();
        assert_eq!(config.registry.base_url, "https://pypi.python.org/pypi");
        assert_eq!(config.registry.timeout(), Some(Duration::from_secs(30)));
        assert!(config.registry.user_agent.starts_with("pypi-license-info/"));
    }

    #[test]
    fn test_project_config_partial_override() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            "[registry]\nbase_url = \"https://mirror.example/pypi\"\n",
        );

        let config = load_config_from(dir.path(), None).unwrap();
        assert_eq!(config.registry.base_url, "https://mirror.example/pypi");
        assert_eq!(config.registry.timeout_secs, 30);
    }

    #[test]
    fn test_zero_timeout_disables() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "[registry]\ntimeout_secs = 0\n");

        let config = load_config_from(dir.path(), None).unwrap();
        assert_eq!(config.registry.timeout(), None);
    }

    #[test]
    fn test_project_config_wins_over_home() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        write_config(project.path(), "[registry]\nuser_agent = \"project\"\n");
        let home_config = write_config(home.path(), "[registry]\nuser_agent = \"home\"\n");

        let config = load_config_from(project.path(), Some(&home_config)).unwrap();
        assert_eq!(config.registry.user_agent, "project");
    }

    #[test]
    fn test_home_config_fallback() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let home_config = write_config(home.path(), "[registry]\ntimeout_secs = 5\n");

        let config = load_config_from(project.path(), Some(&home_config)).unwrap();
        assert_eq!(config.registry.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "[registry]\ntimeout_secs = \"soon\"\n");
        assert!(load_config_from(dir.path(), None).is_err());
    }
}
