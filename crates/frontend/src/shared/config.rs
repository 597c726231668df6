use contracts::domain::a003_driver_assignment::AssignPolicy;
use serde::Deserialize;

/// localStorage key that may hold a TOML document overriding the defaults
pub const CONFIG_STORAGE_KEY: &str = "dashboard_config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Key of the persisted assignment record
    pub assignment_key: String,
    pub write_policy: AssignPolicy,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            assignment_key: "driverAssignments".to_string(),
            write_policy: AssignPolicy::Merge,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub toast_duration_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[storage]
assignment_key = "driverAssignments"
write_policy = "merge"

[ui]
toast_duration_ms = 3000

[logging]
level = "debug"
"#;

impl DashboardConfig {
    pub fn log_level(&self) -> log::Level {
        match self.logging.level.trim().to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = toml::from_str(contents)?;
    if config.storage.assignment_key.trim().is_empty() {
        anyhow::bail!("storage.assignment_key must not be empty");
    }
    Ok(config)
}

/// Picks the override document when there is a valid one, else the embedded
/// default. The second value is a warning to log once logging is up.
pub fn resolve_config(override_doc: Option<&str>) -> (DashboardConfig, Option<String>) {
    if let Some(doc) = override_doc {
        match parse_config(doc) {
            Ok(config) => return (config, None),
            Err(e) => {
                let warning = format!(
                    "Ignoring invalid '{}' override, using defaults: {}",
                    CONFIG_STORAGE_KEY, e
                );
                return (default_config(), Some(warning));
            }
        }
    }
    (default_config(), None)
}

fn default_config() -> DashboardConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

/// Load configuration.
///
/// Search order:
/// 1. TOML document in localStorage under `dashboard_config`
/// 2. Embedded default config
pub fn load_config() -> (DashboardConfig, Option<String>) {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());
    resolve_config(stored.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.storage.assignment_key, "driverAssignments");
        assert_eq!(config.storage.write_policy, AssignPolicy::Merge);
        assert_eq!(config.ui.toast_duration_ms, 3000);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config("[storage]\nwrite_policy = \"replace\"\n").unwrap();
        assert_eq!(config.storage.write_policy, AssignPolicy::Replace);
        assert_eq!(config.storage.assignment_key, "driverAssignments");
        assert_eq!(config.ui.toast_duration_ms, 3000);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let (config, warning) = resolve_config(Some("[storage]\nwrite_policy = \"append\"\n"));
        assert_eq!(config, DashboardConfig::default());
        assert!(warning.unwrap().contains(CONFIG_STORAGE_KEY));

        let (_, warning) = resolve_config(Some("[storage]\nassignment_key = \"  \"\n"));
        assert!(warning.is_some());

        let (config, warning) = resolve_config(None);
        assert_eq!(config, DashboardConfig::default());
        assert!(warning.is_none());
    }

    #[test]
    fn test_log_level() {
        let mut config = DashboardConfig::default();
        config.logging.level = "WARN".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.logging.level = "nonsense".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
