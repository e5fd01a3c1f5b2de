use crate::config::ServiceConfig;
use crate::domain::ports::{RemoteMethod, Transport};
use crate::domain::response::ServiceResponse;
use crate::utils::error::{Result, TaxCloudError};
use async_trait::async_trait;
use reqwest::Client;

/// 以 JSON POST 呼叫 `{location}/{version}/TaxCloud/{Method}`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: ServiceConfig,
}

impl HttpTransport {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(
        &self,
        method: RemoteMethod,
        payload: serde_json::Value,
    ) -> Result<ServiceResponse> {
        let url = self.config.endpoint(method.as_str());
        tracing::debug!("Calling {} at {}", method, url);

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        tracing::debug!("{} response status: {}", method, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TaxCloudError::ServiceStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: ServiceResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
