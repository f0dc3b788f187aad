use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://api.nhtsa.gov/recalls/campaignNumber";
pub const DEFAULT_QUERY_PARAM: &str = "campaignNumber";
pub const DEFAULT_ID_COLUMN: &str = "NHTSA ID";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub lookup: LookupSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupSettings {
    pub endpoint: String,
    pub query_param: String,
    pub id_column: String,
    pub user_agent: String,
    pub request_delay_ms: u64,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            id_column: DEFAULT_ID_COLUMN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
        }
    }
}

impl TomlConfig {
    /// Loads the `[lookup]` table; omitted keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EtlError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}
