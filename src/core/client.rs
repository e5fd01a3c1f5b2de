use crate::adapters::http::HttpTransport;
use crate::config::ServiceConfig;
use crate::domain::ports::{RemoteMethod, Transport};
use crate::domain::response::ServiceResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Serialize;

/// 每個遠端呼叫都要帶的憑證
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(rename = "apiLoginID")]
    pub api_login_id: String,
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

/// State shared by every operation: where to send, what came back, and the
/// messages the service reported. An instance serves exactly one call.
pub struct RequestClient<T: Transport> {
    config: ServiceConfig,
    transport: T,
    response: Option<ServiceResponse>,
    errors: Vec<String>,
}

impl RequestClient<HttpTransport> {
    pub fn new(config: ServiceConfig) -> Self {
        let transport = HttpTransport::new(&config);
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> RequestClient<T> {
    pub fn with_transport(config: ServiceConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            response: None,
            errors: Vec::new(),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            api_login_id: self.config.api_login_id.clone(),
            api_key: self.config.api_key.clone(),
        }
    }

    pub fn response(&self) -> Option<&ServiceResponse> {
        self.response.as_ref()
    }

    pub fn error_messages(&self) -> &[String] {
        &self.errors
    }

    async fn send(&self, method: RemoteMethod, payload: serde_json::Value) -> Result<ServiceResponse> {
        self.transport.call(method, payload).await
    }

    /// 保存原始回應並累加服務端訊息，不清除先前的錯誤
    fn record(&mut self, method: RemoteMethod, response: ServiceResponse) {
        let messages = response.message_texts();
        if !messages.is_empty() {
            tracing::warn!("{} returned {} message(s): {:?}", method, messages.len(), messages);
        }
        self.errors.extend(messages);
        self.response = Some(response);
    }
}

/// One remote procedure on the contract.
///
/// Implementors supply the three steps that differ per call; `execute` runs
/// them in order against the transport.
#[async_trait]
pub trait Operation: Send {
    type Transport: Transport;
    type Wire;
    type Request: Serialize;

    const METHOD: RemoteMethod;

    fn client(&self) -> &RequestClient<Self::Transport>;
    fn client_mut(&mut self) -> &mut RequestClient<Self::Transport>;

    /// Map value objects into the shapes the contract expects.
    fn prepare_wire_objects(&self) -> Self::Wire;

    /// Keyword arguments for the remote call.
    fn build_request(&self, wire: Self::Wire) -> Self::Request;

    fn parse_response(&mut self, response: &ServiceResponse);

    /// Sends the request once. Transport faults are logged and returned;
    /// messages reported by the service end up in `error_messages`.
    async fn execute(&mut self) -> Result<()> {
        let method = Self::METHOD;

        let payload = {
            let wire = self.prepare_wire_objects();
            let request = self.build_request(wire);
            serde_json::to_value(&request)
        };
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("❌ {} request could not be built: {:?}", method, e);
                return Err(e.into());
            }
        };

        tracing::debug!("Sending {} request", method);
        let response = match self.client().send(method, payload).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("❌ {} request failed: {} ({:?})", method, e, e);
                return Err(e);
            }
        };

        self.parse_response(&response);
        self.client_mut().record(method, response);
        Ok(())
    }

    fn response(&self) -> Option<&ServiceResponse> {
        self.client().response()
    }

    fn error_messages(&self) -> &[String] {
        self.client().error_messages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::StubTransport;
    use serde_json::json;

    struct EchoOperation {
        client: RequestClient<StubTransport>,
        parsed: usize,
    }

    #[derive(Serialize)]
    struct EchoRequest {
        #[serde(flatten)]
        credentials: Credentials,
        note: String,
    }

    impl Operation for EchoOperation {
        type Transport = StubTransport;
        type Wire = String;
        type Request = EchoRequest;

        const METHOD: RemoteMethod = RemoteMethod::Ping;

        fn client(&self) -> &RequestClient<StubTransport> {
            &self.client
        }

        fn client_mut(&mut self) -> &mut RequestClient<StubTransport> {
            &mut self.client
        }

        fn prepare_wire_objects(&self) -> String {
            "prepared".to_string()
        }

        fn build_request(&self, wire: String) -> EchoRequest {
            EchoRequest {
                credentials: self.client.credentials(),
                note: wire,
            }
        }

        fn parse_response(&mut self, _response: &ServiceResponse) {
            self.parsed += 1;
        }
    }

    fn echo(transport: StubTransport) -> EchoOperation {
        EchoOperation {
            client: RequestClient::with_transport(ServiceConfig::new("login", "key"), transport),
            parsed: 0,
        }
    }

    #[tokio::test]
    async fn test_execute_runs_every_step() {
        let transport = StubTransport::responding(json!({"ResponseType": "OK"}));
        let calls = transport.calls();
        let mut op = echo(transport);

        assert!(op.response().is_none());
        op.execute().await.unwrap();

        assert_eq!(op.parsed, 1);
        assert!(op.response().unwrap().is_ok());
        assert!(op.error_messages().is_empty());

        let calls = calls.lock().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, RemoteMethod::Ping);
        assert_eq!(
            calls[0].1,
            json!({"apiLoginID": "login", "apiKey": "key", "note": "prepared"})
        );
    }

    #[tokio::test]
    async fn test_service_messages_become_error_messages() {
        let transport = StubTransport::responding(json!({
            "ResponseType": "Error",
            "Messages": {"ResponseMessage": [
                {"ResponseType": "Error", "Message": "Error code: 101"},
                {"ResponseType": "Error", "Message": "Error code: 202"}
            ]}
        }));
        let mut op = echo(transport);

        op.execute().await.unwrap();

        assert_eq!(op.error_messages(), ["Error code: 101", "Error code: 202"]);
    }

    #[tokio::test]
    async fn test_loosely_shaped_replies_still_report_messages() {
        let replies = [
            json!({
                "ResponseType": "Bogus",
                "Messages": {"ResponseMessage": [{"Message": "Cart is empty"}]}
            }),
            json!({
                "ResponseType": 0,
                "Messages": [{"ResponseType": 0, "Message": "Cart is empty"}]
            }),
        ];

        for reply in replies {
            let mut op = echo(StubTransport::responding(reply));
            op.execute().await.unwrap();
            assert_eq!(op.error_messages(), ["Cart is empty"]);
            assert!(!op.response().unwrap().is_ok());
        }

        let mut op = echo(StubTransport::responding(
            json!({"ResponseType": "Error", "Messages": {"ResponseMessage": null}}),
        ));
        op.execute().await.unwrap();
        assert!(op.error_messages().is_empty());
    }

    #[tokio::test]
    async fn test_errors_accumulate_across_calls() {
        let transport = StubTransport::responding(json!({
            "Messages": {"ResponseMessage": [{"Message": "Invalid apiKey"}]}
        }));
        let mut op = echo(transport);

        op.execute().await.unwrap();
        op.execute().await.unwrap();

        assert_eq!(op.error_messages().len(), 2);
    }

    #[tokio::test]
    async fn test_transport_fault_propagates_without_parsing() {
        let mut op = echo(StubTransport::failing(502));

        let err = op.execute().await.unwrap_err();

        assert!(matches!(
            err,
            crate::utils::error::TaxCloudError::ServiceStatus { status: 502, .. }
        ));
        assert_eq!(op.parsed, 0);
        assert!(op.response().is_none());
        assert!(op.error_messages().is_empty());
    }
}
