use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaxCloudError {
    #[error("Transport request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned HTTP {status}: {body}")]
    ServiceStatus { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl TaxCloudError {
    /// 呼叫遠端服務途中發生的錯誤 (連線、HTTP 狀態、編解碼)
    pub fn is_transport_fault(&self) -> bool {
        matches!(
            self,
            TaxCloudError::Transport(_)
                | TaxCloudError::ServiceStatus { .. }
                | TaxCloudError::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TaxCloudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_fault_classification() {
        let status = TaxCloudError::ServiceStatus {
            status: 500,
            body: "boom".to_string(),
        };
        assert!(status.is_transport_fault());

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(TaxCloudError::from(json).is_transport_fault());

        let config = TaxCloudError::MissingConfig {
            field: "api_key".to_string(),
        };
        assert!(!config.is_transport_fault());
        assert_eq!(config.to_string(), "Missing configuration: api_key");
    }
}
