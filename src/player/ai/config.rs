use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH: &str = "agent_config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub name: String,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub server_addr: String,
    pub save_kifu: bool,
    pub kifu_dir: String,
}

impl AgentConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: AgentConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load_or_default_from(CONFIG_PATH)
    }

    /// Missing or malformed files fall back to the defaults.
    pub fn load_or_default_from(path: impl AsRef<Path>) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            log::debug!("using default agent config ({})", e);
            Self::default()
        })
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            name: "Kriegspiel Agent Example".to_string(),
            seed: None,
            server_addr: "127.0.0.1:8080".to_string(),
            save_kifu: false,
            kifu_dir: "agent_kifu".to_string(),
        }
    }
}
