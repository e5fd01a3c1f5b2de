use crate::config::ServiceConfig;
use crate::utils::error::{Result, TaxCloudError};
use crate::utils::validation::validate_required_field;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

pub const ENV_API_LOGIN_ID: &str = "TAXCLOUD_API_LOGIN_ID";
pub const ENV_API_KEY: &str = "TAXCLOUD_API_KEY";
pub const ENV_CONTRACT_VERSION: &str = "TAXCLOUD_CONTRACT_VERSION";
pub const ENV_CONTRACT_LOCATION: &str = "TAXCLOUD_CONTRACT_LOCATION";

#[derive(Debug, Deserialize)]
struct ConfigFile {
    taxcloud: ServiceConfig,
}

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析 `[taxcloud]` 區段
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        let file: ConfigFile = toml::from_str(&processed_content).map_err(|e| {
            TaxCloudError::Config {
                message: format!("TOML parsing error: {}", e),
            }
        })?;
        Ok(file.taxcloud)
    }

    /// 從環境變數讀取，憑證為必填
    pub fn from_env() -> Result<Self> {
        let login = std::env::var(ENV_API_LOGIN_ID).ok();
        let key = std::env::var(ENV_API_KEY).ok();

        let mut config = ServiceConfig::new(
            validate_required_field(ENV_API_LOGIN_ID, &login)?.as_str(),
            validate_required_field(ENV_API_KEY, &key)?.as_str(),
        );
        if let Ok(version) = std::env::var(ENV_CONTRACT_VERSION) {
            config = config.with_contract_version(version);
        }
        if let Ok(location) = std::env::var(ENV_CONTRACT_LOCATION) {
            config = config.with_contract_location(location);
        }
        Ok(config)
    }
}

/// 替換環境變數 (例如 ${TAXCLOUD_API_KEY})，找不到的保留原樣
fn substitute_env_vars(content: &str) -> String {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid")
    });

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}
