use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sprout_protocols::ProtocolCatalog;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SproutConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// JSON protocol catalog replacing the built-in protocols.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Protocol id -> ceiling threshold.
    #[serde(default)]
    pub ceiling_overrides: BTreeMap<String, u32>,
    #[serde(default)]
    pub log_format: LogFormat,
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("sprout").join("config.json"))
}

/// Load the config at `path`, or defaults if the file does not exist.
pub fn load_config(path: &Path) -> eyre::Result<SproutConfig> {
    if !path.exists() {
        return Ok(SproutConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: SproutConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 -> v1: `catalog` renamed to `catalog_path`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(catalog) = obj.remove("catalog") {
            obj.entry("catalog_path").or_insert(catalog);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (catalog renamed to catalog_path)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &SproutConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Build the protocol catalog the config describes.
pub fn build_catalog(config: &SproutConfig) -> eyre::Result<ProtocolCatalog> {
    let mut catalog = match &config.catalog_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| eyre::eyre!("failed to read catalog at {}: {e}", path.display()))?;
            ProtocolCatalog::from_json(&json)?
        }
        None => ProtocolCatalog::builtin()?,
    };
    for (protocol_id, threshold) in &config.ceiling_overrides {
        catalog.set_ceiling_threshold(protocol_id, *threshold)?;
    }
    Ok(catalog)
}
