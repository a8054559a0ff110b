use ethers::types::Address;
use log::warn;

use crate::constants::*;
use crate::error::ErrorCode;

/// Settings read from the environment, with documented fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub contract_address: Address,
    pub project_id: String,
    pub rpc_url: String,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ErrorCode> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ErrorCode>
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |key: &str, fallback: &str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => {
                warn!("{key} not set, using fallback {fallback}");
                fallback.to_string()
            }
        };

        let raw_address = setting(CONTRACT_ADDRESS_VAR, DEFAULT_CONTRACT_ADDRESS);
        let contract_address = raw_address
            .parse::<Address>()
            .map_err(|e| ErrorCode::InvalidConfig(format!("{CONTRACT_ADDRESS_VAR}: {e}")))?;

        Ok(Self {
            contract_address,
            project_id: setting(PROJECT_ID_VAR, DEFAULT_PROJECT_ID),
            rpc_url: setting(RPC_URL_VAR, DEFAULT_RPC_URL),
        })
    }
}
