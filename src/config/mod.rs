#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTRACT_VERSION: &str = "1.0";
pub const DEFAULT_CONTRACT_LOCATION: &str = "https://api.taxcloud.net";

/// 連線到 TaxCloud 所需的憑證與合約位置，建立一次後可重複使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub api_login_id: String,
    pub api_key: String,
    #[serde(default = "default_contract_version")]
    pub contract_version: String,
    #[serde(default = "default_contract_location")]
    pub contract_location: String,
}

fn default_contract_version() -> String {
    DEFAULT_CONTRACT_VERSION.to_string()
}

fn default_contract_location() -> String {
    DEFAULT_CONTRACT_LOCATION.to_string()
}

impl ServiceConfig {
    pub fn new(api_login_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_login_id: api_login_id.into(),
            api_key: api_key.into(),
            contract_version: default_contract_version(),
            contract_location: default_contract_location(),
        }
    }

    pub fn with_contract_version(mut self, version: impl Into<String>) -> Self {
        self.contract_version = version.into();
        self
    }

    pub fn with_contract_location(mut self, location: impl Into<String>) -> Self {
        self.contract_location = location.into();
        self
    }

    /// 某個遠端程序的完整端點
    pub fn endpoint(&self, method: &str) -> String {
        format!(
            "{}/{}/TaxCloud/{}",
            self.contract_location.trim_end_matches('/'),
            self.contract_version.trim_matches('/'),
            method
        )
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_login_id", &self.api_login_id)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("contract_version", &self.contract_version)?;
        validate_url("contract_location", &self.contract_location)?;
        Ok(())
    }
}
