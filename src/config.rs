// ABOUTME: Application configuration loaded from a TOML file with defaults
// Missing or malformed config never blocks startup

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::session::{is_valid_date_format, DEFAULT_DATE_FORMAT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where sessions.json and logs live. A leading `~/` expands to the home
    /// directory. Absent means the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Quit after a fully successful session launch.
    pub quit_after_launch: bool,
    /// strftime format for displayed timestamps and default session names.
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            quit_after_launch: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Loads the config file, falling back to defaults when it is missing or
    /// malformed. A bad config file is never fatal; problems come back as
    /// warnings, since the log file location itself depends on this config.
    pub fn load() -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let Some(path) = Self::config_path() else {
            return (Self::default(), warnings);
        };
        if !path.exists() {
            return (Self::default(), warnings);
        }
        let config = match fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml(&path, &contents, &mut warnings),
            Err(e) => {
                warnings.push(format!("Failed to read config {:?}, using defaults: {}", path, e));
                Self::default()
            }
        };
        (config, warnings)
    }

    fn from_toml(path: &Path, contents: &str, warnings: &mut Vec<String>) -> Self {
        let config: Self = match toml::from_str(contents) {
            Ok(config) => config,
            Err(e) => {
                warnings.push(format!("Malformed config {:?}, using defaults: {}", path, e));
                Self::default()
            }
        };
        config.sanitized(warnings)
    }

    // An unrenderable date_format would panic at draw time.
    fn sanitized(mut self, warnings: &mut Vec<String>) -> Self {
        if !is_valid_date_format(&self.date_format) {
            warnings.push(format!(
                "date_format {:?} has invalid specifiers, using {:?}",
                self.date_format, DEFAULT_DATE_FORMAT
            ));
            self.date_format = DEFAULT_DATE_FORMAT.to_string();
        }
        self
    }

    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tabstash").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Resolves the data directory: CLI override wins, then the config value,
    /// then the platform default.
    pub fn resolve_data_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(dir) = cli_override {
            return expand_tilde(dir);
        }
        if let Some(dir) = &self.data_dir {
            return expand_tilde(dir);
        }
        ProjectDirs::from("", "", "tabstash")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".tabstash"))
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    expand_tilde_with(path, dirs::home_dir())
}

fn expand_tilde_with(path: &Path, home: Option<PathBuf>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.data_dir, None);
        assert!(config.quit_after_launch);
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            data_dir = "~/stash"
            quit_after_launch = false
            date_format = "%d/%m/%Y"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("~/stash")));
        assert!(!config.quit_after_launch);
        assert_eq!(config.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: Config = toml::from_str("quit_after_launch = false").unwrap();

        assert!(!config.quit_after_launch);
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_malformed_toml_reports_a_warning_and_uses_defaults() {
        let mut warnings = Vec::new();

        let config = Config::from_toml(Path::new("config.toml"), "not [valid toml", &mut warnings);

        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Malformed config"));
    }

    #[test]
    fn test_invalid_date_format_falls_back_with_a_warning() {
        let mut warnings = Vec::new();

        let config = Config::from_toml(
            Path::new("config.toml"),
            r#"date_format = "%Y-%m-%d %""#,
            &mut warnings,
        );

        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("date_format"));
    }

    #[test]
    fn test_valid_config_produces_no_warnings() {
        let mut warnings = Vec::new();

        let config = Config::from_toml(
            Path::new("config.toml"),
            r#"date_format = "%d/%m/%Y""#,
            &mut warnings,
        );

        assert_eq!(config.date_format, "%d/%m/%Y");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_cli_override_beats_config_value() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };

        let resolved = config.resolve_data_dir(Some(Path::new("/from/cli")));

        assert_eq!(resolved, PathBuf::from("/from/cli"));
    }

    #[test]
    fn test_config_data_dir_used_when_no_override() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };

        assert_eq!(config.resolve_data_dir(None), PathBuf::from("/from/config"));
    }

    #[test]
    fn test_tilde_expansion() {
        let home = Some(PathBuf::from("/home/someone"));

        assert_eq!(
            expand_tilde_with(Path::new("~/stash"), home.clone()),
            PathBuf::from("/home/someone/stash")
        );
        assert_eq!(
            expand_tilde_with(Path::new("/absolute/stash"), home.clone()),
            PathBuf::from("/absolute/stash")
        );
        assert_eq!(
            expand_tilde_with(Path::new("~"), home),
            PathBuf::from("/home/someone")
        );
        assert_eq!(
            expand_tilde_with(Path::new("~/stash"), None),
            PathBuf::from("~/stash")
        );
    }
}
