use anyhow::{Result, bail};
use std::path::PathBuf;

/// Server configuration, read from `I18N_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listen address
    pub addr: String,
    /// Message files and directories, in increasing priority
    pub files: Vec<PathBuf>,
    /// Language naming standard bound to the store
    pub standard: String,
    /// Disable the POST and DELETE message routes
    pub readonly: bool,
    /// Answer 404 for missing messages instead of a `<ln>_<scopes>` placeholder
    pub not_found_with_404: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: "127.0.0.1:3000".to_string(),
            files: Vec::new(),
            standard: scoped_i18n::CUSTOM.to_string(),
            readonly: false,
            not_found_with_404: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        Ok(Config {
            addr: lookup("I18N_ADDR").unwrap_or(defaults.addr),
            files: lookup("I18N_FILES")
                .map(|files| parse_files(&files))
                .unwrap_or(defaults.files),
            standard: lookup("I18N_STANDARD")
                .filter(|standard| !standard.is_empty())
                .unwrap_or(defaults.standard),
            readonly: match lookup("I18N_READONLY") {
                Some(value) => parse_bool("I18N_READONLY", &value)?,
                None => defaults.readonly,
            },
            not_found_with_404: match lookup("I18N_NOT_FOUND_WITH_404") {
                Some(value) => parse_bool("I18N_NOT_FOUND_WITH_404", &value)?,
                None => defaults.not_found_with_404,
            },
        })
    }
}

fn parse_files(value: &str) -> Vec<PathBuf> {
    value
        .split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("{} must be a boolean, got '{}'", key, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr, "127.0.0.1:3000");
        assert_eq!(config.standard, "Custom");
        assert!(!config.readonly);
    }

    #[test]
    fn test_all_values() {
        let config = config_from(&[
            ("I18N_ADDR", "0.0.0.0:8080"),
            ("I18N_FILES", "base.json, overrides/ ,,extra.json"),
            ("I18N_STANDARD", "ISO 639-1"),
            ("I18N_READONLY", "true"),
            ("I18N_NOT_FOUND_WITH_404", "1"),
        ])
        .unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080");
        assert_eq!(
            config.files,
            vec![
                PathBuf::from("base.json"),
                PathBuf::from("overrides/"),
                PathBuf::from("extra.json")
            ]
        );
        assert_eq!(config.standard, "ISO 639-1");
        assert!(config.readonly);
        assert!(config.not_found_with_404);
    }

    #[test]
    fn test_invalid_bool() {
        let err = config_from(&[("I18N_READONLY", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("I18N_READONLY"));
    }

    #[test]
    fn test_empty_standard_keeps_default() {
        let config = config_from(&[("I18N_STANDARD", "")]).unwrap();
        assert_eq!(config.standard, "Custom");
    }
}
