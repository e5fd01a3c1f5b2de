use crate::adapters::http::HttpTransport;
use crate::config::ServiceConfig;
use crate::core::client::{Credentials, Operation, RequestClient};
use crate::domain::ports::{RemoteMethod, Transport};
use crate::domain::response::ServiceResponse;
use serde::Serialize;

/// 檢查 api_login_id / api_key 是否有效
pub struct PingOperation<T: Transport = HttpTransport> {
    client: RequestClient<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PingRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
}

impl PingOperation<HttpTransport> {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: RequestClient::new(config),
        }
    }
}

impl<T: Transport> PingOperation<T> {
    pub fn with_transport(config: ServiceConfig, transport: T) -> Self {
        Self {
            client: RequestClient::with_transport(config, transport),
        }
    }
}

impl<T: Transport> Operation for PingOperation<T> {
    type Transport = T;
    type Wire = ();
    type Request = PingRequest;

    const METHOD: RemoteMethod = RemoteMethod::Ping;

    fn client(&self) -> &RequestClient<T> {
        &self.client
    }

    fn client_mut(&mut self) -> &mut RequestClient<T> {
        &mut self.client
    }

    fn prepare_wire_objects(&self) {}

    fn build_request(&self, _wire: ()) -> PingRequest {
        PingRequest {
            credentials: self.client.credentials(),
        }
    }

    fn parse_response(&mut self, _response: &ServiceResponse) {}
}
