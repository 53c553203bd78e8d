//! Configuration for the soma CLI.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (SOMA_CONFIG, SOMA_PUBLISHED_ONLY, SOMA_LIMIT)
//! 2. Config file (.soma/config.yaml)
//! 3. Defaults
//!
//! Config file discovery:
//! - SOMA_CONFIG names the file explicitly
//! - Otherwise searches current directory and parents for .soma/config.yaml
//! - Falls back to ~/.soma/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::library::MatchMode;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_LIMIT: usize = 50;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryConfig {
    /// Hide draft and in-review entries
    pub published_only: Option<bool>,
    /// How multi-word queries are matched
    pub match_mode: Option<MatchMode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Maximum rows printed by list and search
    pub limit: Option<usize>,
}

/// Resolved configuration after applying every source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub published_only: bool,
    pub match_mode: MatchMode,
    pub limit: usize,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            published_only: false,
            match_mode: MatchMode::Phrase,
            limit: DEFAULT_LIMIT,
            config_file: None,
        }
    }
}

/// Find config file by searching `start` and its parents, then the home directory
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".soma").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    dirs::home_dir()
        .map(|home| home.join(".soma").join("config.yaml"))
        .filter(|path| path.exists())
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => anyhow::bail!("Invalid boolean for {}: {}", name, value),
    }
}

/// Resolve configuration starting the file search at `start`
///
/// `env` looks up environment variables; it is injected so resolution can be
/// exercised without touching the process environment.
fn resolve(start: &Path, env: impl Fn(&str) -> Option<String>) -> Result<ResolvedConfig> {
    let config_file = match env("SOMA_CONFIG") {
        Some(explicit) => Some(PathBuf::from(explicit)),
        None => find_config_file(start),
    };

    let mut resolved = ResolvedConfig::default();

    if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        if let Some(published_only) = config.query.published_only {
            resolved.published_only = published_only;
        }
        if let Some(match_mode) = config.query.match_mode {
            resolved.match_mode = match_mode;
        }
        if let Some(limit) = config.output.limit {
            resolved.limit = limit;
        }
    }

    if let Some(value) = env("SOMA_PUBLISHED_ONLY") {
        resolved.published_only = parse_bool("SOMA_PUBLISHED_ONLY", &value)?;
    }

    if let Some(value) = env("SOMA_LIMIT") {
        resolved.limit = value
            .trim()
            .parse()
            .with_context(|| format!("Invalid SOMA_LIMIT: {}", value))?;
    }

    resolved.config_file = config_file;
    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    resolve(&cwd, |name| std::env::var(name).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let soma_dir = dir.join(".soma");
        std::fs::create_dir_all(&soma_dir).unwrap();

        let config_path = soma_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();
        config_path
    }

    fn env_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            temp.path(),
            r#"
version: "1.0"
query:
  published_only: true
  match_mode: all_words
output:
  limit: 10
"#,
        );

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.query.published_only, Some(true));
        assert_eq!(config.query.match_mode, Some(MatchMode::AllWords));
        assert_eq!(config.output.limit, Some(10));
    }

    #[test]
    fn test_sections_are_optional() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(temp.path(), "version: \"1.0\"");

        let config = load_config_file(&config_path).unwrap();
        assert!(config.query.published_only.is_none());
        assert!(config.output.limit.is_none());
    }

    #[test]
    fn test_discovery_walks_parents() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(temp.path(), "version: \"1.0\"\noutput:\n  limit: 7");
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let resolved = resolve(&nested, env_from(&[])).unwrap();
        assert_eq!(resolved.limit, 7);
        assert_eq!(resolved.config_file, Some(config_path));
    }

    #[test]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "version: \"1.0\"\nquery:\n  published_only: false\noutput:\n  limit: 7",
        );

        let resolved = resolve(
            temp.path(),
            env_from(&[("SOMA_PUBLISHED_ONLY", "true"), ("SOMA_LIMIT", "3")]),
        )
        .unwrap();
        assert!(resolved.published_only);
        assert_eq!(resolved.limit, 3);
        assert_eq!(resolved.match_mode, MatchMode::Phrase);
    }

    #[test]
    fn test_explicit_config_path() {
        let temp = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let config_path = write_config(other.path(), "version: \"1.0\"\noutput:\n  limit: 12");

        let resolved = resolve(
            temp.path(),
            env_from(&[("SOMA_CONFIG", config_path.to_str().unwrap())]),
        )
        .unwrap();
        assert_eq!(resolved.limit, 12);
        assert_eq!(resolved.config_file, Some(config_path));
    }

    #[test]
    fn test_invalid_env_values_are_errors() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "version: \"1.0\"");

        assert!(resolve(temp.path(), env_from(&[("SOMA_LIMIT", "many")])).is_err());
        assert!(resolve(temp.path(), env_from(&[("SOMA_PUBLISHED_ONLY", "maybe")])).is_err());
    }

    #[test]
    fn test_reload_matches_fresh_resolution() {
        let cwd = std::env::current_dir().unwrap();
        let fresh = resolve(&cwd, |name| std::env::var(name).ok());

        match (reload_config(), fresh) {
            (Ok(reloaded), Ok(fresh)) => assert_eq!(reloaded, fresh),
            (Err(_), Err(_)) => {}
            (reloaded, fresh) => panic!("reload {:?} disagrees with {:?}", reloaded, fresh),
        }
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yaml");

        let result = resolve(temp.path(), env_from(&[("SOMA_CONFIG", missing.to_str().unwrap())]));
        assert!(result.is_err());
    }
}
