//! Configuration layering, fallback logic, and environment overrides

use camino::{Utf8Path, Utf8PathBuf};
use linksmith_core::error::LinkError;
use linksmith_core::types::LinkType;
use std::collections::HashMap;
use std::ffi::OsString;
use tracing::debug;

use crate::settings::{self, LinksmithToml};
use crate::{ConfigResult, CONFIG_FILE_NAME};

/// Prefix of environment variables that override configuration
const ENV_PREFIX: &str = "LINKSMITH_";

/// Main configuration loading interface
pub struct ConfigLoader {
    /// Current working directory
    cwd: Utf8PathBuf,
    /// Global config file (~/.linksmith/config.toml)
    global_path: Option<Utf8PathBuf>,
}

/// Configuration layering and merging
pub struct ConfigLayering;

/// Configuration source tracking
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Built-in defaults
    Defaults,
    /// Global config file
    Global(Utf8PathBuf),
    /// Project linksmith.toml file
    Project(Utf8PathBuf),
    /// Environment variable
    Environment(String),
    /// CLI flag
    CommandLine,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new(cwd: Utf8PathBuf) -> Self {
        let global_path = dirs::home_dir()
            .and_then(|home| Utf8PathBuf::from_path_buf(home).ok())
            .map(|home| home.join(".linksmith").join("config.toml"));
        Self { cwd, global_path }
    }

    /// Use a specific global config file instead of the one under the home directory
    pub fn with_global_path(mut self, path: Option<Utf8PathBuf>) -> Self {
        self.global_path = path;
        self
    }

    /// Find a configuration file in the project (walks up directory tree)
    pub fn resolve_config_path(&self, filename: &str) -> Option<Utf8PathBuf> {
        let mut current: Option<&Utf8Path> = Some(self.cwd.as_path());

        while let Some(dir) = current {
            let config_path = dir.join(filename);
            if config_path.is_file() {
                return Some(config_path);
            }
            current = dir.parent();
        }

        None
    }

    /// Load the effective configuration with overrides from the process environment
    pub fn load(
        &self,
        cli_overrides: &HashMap<String, String>,
    ) -> ConfigResult<(LinksmithToml, Vec<ConfigSource>)> {
        self.load_with(&ConfigLayering::collect_env_overrides()?, cli_overrides)
    }

    /// Load the effective configuration with explicit overrides
    pub fn load_with(
        &self,
        env_overrides: &HashMap<String, String>,
        cli_overrides: &HashMap<String, String>,
    ) -> ConfigResult<(LinksmithToml, Vec<ConfigSource>)> {
        let mut sources = vec![ConfigSource::Defaults];

        let global = match &self.global_path {
            Some(path) if path.is_file() => {
                sources.push(ConfigSource::Global(path.clone()));
                Some(settings::load_table_from_file(path)?)
            },
            _ => None,
        };

        let project_path = self.resolve_config_path(CONFIG_FILE_NAME);
        let project = match &project_path {
            Some(path) => {
                sources.push(ConfigSource::Project(path.clone()));
                Some(settings::load_table_from_file(path)?)
            },
            None => None,
        };

        let origin = project_path
            .or_else(|| self.global_path.clone())
            .unwrap_or_else(|| Utf8PathBuf::from(CONFIG_FILE_NAME));
        let mut config = settings::from_table(ConfigLayering::merge_tables(global, project), &origin)?;

        for key in env_overrides.keys() {
            sources.push(ConfigSource::Environment(key.clone()));
        }
        ConfigLayering::apply_env_overrides(&mut config, env_overrides)?;

        if !cli_overrides.is_empty() {
            sources.push(ConfigSource::CommandLine);
        }
        ConfigLayering::apply_cli_overrides(&mut config, cli_overrides)?;

        settings::validate_config(&config)?;

        debug!("Loaded configuration from {:?}", sources);
        Ok((config, sources))
    }
}

impl ConfigLayering {
    /// Merge the global table under the project table; project keys win
    pub fn merge_tables(global: Option<toml::Table>, project: Option<toml::Table>) -> toml::Table {
        let mut merged = global.unwrap_or_default();
        if let Some(project) = project {
            Self::merge_into(&mut merged, project);
        }
        merged
    }

    fn merge_into(base: &mut toml::Table, overlay: toml::Table) {
        for (key, value) in overlay {
            if let toml::Value::Table(nested) = value {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    Self::merge_into(existing, nested);
                    continue;
                }
                base.insert(key, toml::Value::Table(nested));
            } else {
                base.insert(key, value);
            }
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(
        config: &mut LinksmithToml,
        overrides: &HashMap<String, String>,
    ) -> ConfigResult<()> {
        for (key, value) in overrides {
            match key.as_str() {
                "LINKSMITH_REPORT_WIDTH" => {
                    config.report.width = parse_width(key, value)?;
                },
                "LINKSMITH_LINK_TYPE" => {
                    config.link.default_type = value.parse::<LinkType>()?;
                },
                "LINKSMITH_CONFIRM" => {
                    config.link.confirm = parse_flag(key, value)?;
                },
                "LINKSMITH_TOOL_PROGRAM" => {
                    config.tool.program = value.clone();
                },
                _ => {
                    // Unknown environment variable, ignore
                },
            }
        }

        Ok(())
    }

    /// Apply CLI flag overrides
    fn apply_cli_overrides(
        config: &mut LinksmithToml,
        overrides: &HashMap<String, String>,
    ) -> ConfigResult<()> {
        for (key, value) in overrides {
            match key.as_str() {
                "report-width" => {
                    config.report.width = parse_width(key, value)?;
                },
                _ => {
                    // Unknown CLI override, ignore
                },
            }
        }

        Ok(())
    }

    /// Collect `LINKSMITH_*` overrides from the process environment
    pub fn collect_env_overrides() -> ConfigResult<HashMap<String, String>> {
        Self::env_overrides_from(std::env::vars_os())
    }

    /// Keep the `LINKSMITH_*` variables of `vars`. Other variables are never
    /// decoded, so a non-UTF-8 entry elsewhere in the environment is harmless.
    pub fn env_overrides_from(
        vars: impl IntoIterator<Item = (OsString, OsString)>,
    ) -> ConfigResult<HashMap<String, String>> {
        let mut overrides = HashMap::new();

        for (key, value) in vars {
            let Some(key) = key.to_str().filter(|key| key.starts_with(ENV_PREFIX)) else {
                continue;
            };
            let value = value.into_string().map_err(|value| LinkError::ConfigValidation {
                field: key.to_string(),
                reason: format!("'{}' is not valid UTF-8", value.to_string_lossy()),
            })?;
            overrides.insert(key.to_string(), value);
        }

        Ok(overrides)
    }
}

fn parse_width(field: &str, value: &str) -> ConfigResult<usize> {
    value.trim().parse().map_err(|e| LinkError::ConfigValidation {
        field: field.to_string(),
        reason: format!("'{}' is not a width: {}", value, e),
    })
}

fn parse_flag(field: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LinkError::ConfigValidation {
            field: field.to_string(),
            reason: format!("'{}' is not a boolean", value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn temp_utf8(temp_dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap()
    }

    fn loader(cwd: Utf8PathBuf) -> ConfigLoader {
        ConfigLoader::new(cwd).with_global_path(None)
    }

    #[test]
    fn test_defaults_without_files() {
        let temp_dir = TempDir::new().unwrap();
        let (config, sources) = loader(temp_utf8(&temp_dir))
            .load_with(&HashMap::new(), &HashMap::new())
            .unwrap();
        assert_eq!(config, LinksmithToml::default());
        assert_eq!(sources, vec![ConfigSource::Defaults]);
    }

    #[test]
    fn test_resolve_config_path_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_utf8(&temp_dir);
        let nested = root.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join(CONFIG_FILE_NAME), "[report]\nwidth = 80\n").unwrap();

        let loader = loader(nested);
        assert_eq!(loader.resolve_config_path(CONFIG_FILE_NAME), Some(root.join(CONFIG_FILE_NAME)));

        let (config, sources) = loader.load_with(&HashMap::new(), &HashMap::new()).unwrap();
        assert_eq!(config.report.width, 80);
        assert!(matches!(sources.last(), Some(ConfigSource::Project(_))));
    }

    #[test]
    fn test_project_overrides_global() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_utf8(&temp_dir);
        let global = root.join("global.toml");
        fs::write(&global, "[report]\nwidth = 60\n\n[link]\nconfirm = true\n").unwrap();
        fs::write(root.join(CONFIG_FILE_NAME), "[report]\nwidth = 90\n").unwrap();

        let (config, sources) = ConfigLoader::new(root.clone())
            .with_global_path(Some(global.clone()))
            .load_with(&HashMap::new(), &HashMap::new())
            .unwrap();

        assert_eq!(config.report.width, 90);
        // Keys the project file leaves out still come from the global file
        assert!(config.link.confirm);
        assert_eq!(
            sources,
            vec![
                ConfigSource::Defaults,
                ConfigSource::Global(global),
                ConfigSource::Project(root.join(CONFIG_FILE_NAME)),
            ]
        );
    }

    #[test]
    fn test_env_then_cli_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_utf8(&temp_dir);
        fs::write(root.join(CONFIG_FILE_NAME), "[report]\nwidth = 90\n").unwrap();

        let env = HashMap::from([
            ("LINKSMITH_REPORT_WIDTH".to_string(), "100".to_string()),
            ("LINKSMITH_LINK_TYPE".to_string(), "junction".to_string()),
            ("LINKSMITH_TOOL_PROGRAM".to_string(), "mklink-shim".to_string()),
        ]);
        let cli = HashMap::from([("report-width".to_string(), "120".to_string())]);

        let (config, sources) = loader(root).load_with(&env, &cli).unwrap();
        assert_eq!(config.report.width, 120);
        assert_eq!(config.link.default_type, LinkType::Junction);
        assert_eq!(config.tool.program, "mklink-shim");
        assert_eq!(sources.last(), Some(&ConfigSource::CommandLine));
    }

    #[test]
    fn test_invalid_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let loader = loader(temp_utf8(&temp_dir));

        let env = HashMap::from([("LINKSMITH_REPORT_WIDTH".to_string(), "wide".to_string())]);
        let err = loader.load_with(&env, &HashMap::new()).unwrap_err();
        assert!(matches!(err, LinkError::ConfigValidation { .. }));

        let env = HashMap::from([("LINKSMITH_REPORT_WIDTH".to_string(), "10".to_string())]);
        let err = loader.load_with(&env, &HashMap::new()).unwrap_err();
        assert!(matches!(err, LinkError::ConfigValidation { ref field, .. } if field == "report.width"));

        let env = HashMap::from([("LINKSMITH_LINK_TYPE".to_string(), "softlink".to_string())]);
        let err = loader.load_with(&env, &HashMap::new()).unwrap_err();
        assert!(matches!(err, LinkError::UnsupportedLinkType { .. }));

        let cli = HashMap::from([("report-width".to_string(), "narrow".to_string())]);
        let err = loader.load_with(&HashMap::new(), &cli).unwrap_err();
        assert!(matches!(err, LinkError::ConfigValidation { ref field, .. } if field == "report-width"));
    }

    #[test]
    fn test_env_overrides_keep_only_linksmith_keys() {
        let vars = vec![
            (OsString::from("PATH"), OsString::from("/usr/bin")),
            (OsString::from("LINKSMITH_CONFIRM"), OsString::from("yes")),
            (OsString::from("linksmith_confirm"), OsString::from("no")),
        ];
        let overrides = ConfigLayering::env_overrides_from(vars).unwrap();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides["LINKSMITH_CONFIRM"], "yes");
    }

    #[cfg(unix)]
    #[test]
    fn test_env_overrides_tolerate_non_utf8_environment() {
        use std::os::unix::ffi::OsStringExt;

        let bad = || OsString::from_vec(vec![0xff, 0xfe]);
        let vars = vec![
            (OsString::from("OTHER"), bad()),
            (bad(), OsString::from("x")),
            (OsString::from("LINKSMITH_REPORT_WIDTH"), OsString::from("80")),
        ];
        let overrides = ConfigLayering::env_overrides_from(vars).unwrap();
        assert_eq!(overrides["LINKSMITH_REPORT_WIDTH"], "80");

        let vars = vec![(OsString::from("LINKSMITH_TOOL_PROGRAM"), bad())];
        let err = ConfigLayering::env_overrides_from(vars).unwrap_err();
        assert!(matches!(err, LinkError::ConfigValidation { ref field, .. } if field == "LINKSMITH_TOOL_PROGRAM"));
    }

    #[test]
    fn test_merge_tables_is_deep() {
        let global: toml::Table = "[tool]\nprogram = \"a\"\ntarget_first = true\n".parse().unwrap();
        let project: toml::Table = "[tool]\nprogram = \"b\"\n".parse().unwrap();
        let merged = ConfigLayering::merge_tables(Some(global), Some(project));
        let tool = merged["tool"].as_table().unwrap();
        assert_eq!(tool["program"].as_str(), Some("b"));
        assert_eq!(tool["target_first"].as_bool(), Some(true));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("x", "Yes").unwrap());
        assert!(!parse_flag("x", "0").unwrap());
        assert!(parse_flag("x", "maybe").is_err());
    }
}
