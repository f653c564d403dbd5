use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use glyco_core::reference::{ReferenceEntry, ReferenceTable};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    /// Directory holding `scaler.json` and `classifier.json`.
    pub model_dir: PathBuf,
    pub bind: String,
    pub log_format: LogFormat,
    /// Include the actual-vs-reference table in generated reports.
    pub reference_in_report: bool,
    /// Replace individual canonical reference values.
    pub reference_overrides: Vec<ReferenceEntry>,
    /// On-disk version of a file that needed migrating. Not persisted.
    #[serde(skip)]
    pub migrated_from: Option<u32>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            model_dir: PathBuf::from("models"),
            bind: "0.0.0.0:8080".to_string(),
            log_format: LogFormat::Json,
            reference_in_report: true,
            reference_overrides: Vec::new(),
            migrated_from: None,
        }
    }
}

impl ServerConfig {
    /// Defaults, then the optional file named by `GLYCO_CONFIG`, then
    /// individual `GLYCO_*` variables.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mut config = match lookup("GLYCO_CONFIG") {
            Some(path) => load_file(Path::new(&path))?,
            None => ServerConfig::default(),
        };

        if let Some(dir) = lookup("GLYCO_MODEL_DIR") {
            config.model_dir = PathBuf::from(dir);
        }
        if let Some(bind) = lookup("GLYCO_BIND") {
            config.bind = bind;
        }
        if let Some(format) = lookup("GLYCO_LOG_FORMAT") {
            config.log_format = match format.to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                other => return Err(eyre::eyre!("GLYCO_LOG_FORMAT must be json or pretty, got {other}")),
            };
        }
        if let Some(flag) = lookup("GLYCO_REFERENCE_IN_REPORT") {
            config.reference_in_report = parse_bool("GLYCO_REFERENCE_IN_REPORT", &flag)?;
        }

        Ok(config)
    }

    /// Report a file migration. Config loads before tracing is installed,
    /// so the binary calls this once the subscriber is up.
    pub fn log_migration(&self) {
        if let Some(from) = self.migrated_from {
            tracing::info!(from, to = CURRENT_VERSION, "migrated config file");
        }
    }

    pub fn reference_table(&self) -> ReferenceTable {
        ReferenceTable::canonical().with_overrides(&self.reference_overrides)
    }
}

fn parse_bool(key: &str, value: &str) -> eyre::Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(eyre::eyre!("{key} must be a boolean, got {other}")),
    }
}

pub fn load_file(path: &Path) -> eyre::Result<ServerConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let mut config: ServerConfig = serde_json::from_value(migrated)?;
    config.migrated_from = (on_disk_version < CURRENT_VERSION).then_some(on_disk_version);
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // v0 → v1: `model_path` renamed to `model_dir`
    if from_version < 1 {
        if let Some(old) = obj.remove("model_path") {
            obj.entry("model_dir").or_insert(old);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
    }

    Ok(json)
}
