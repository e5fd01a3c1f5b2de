use crate::adapters::http::HttpTransport;
use crate::config::ServiceConfig;
use crate::core::client::{Credentials, Operation, RequestClient};
use crate::domain::ports::{RemoteMethod, Transport};
use crate::domain::response::ServiceResponse;
use crate::utils::timestamp::utc_now_timestamp;
use serde::Serialize;

/// 顧客完成付款後呼叫，通知 TaxCloud 訂單已授權並請款
pub struct CaptureOperation<T: Transport = HttpTransport> {
    client: RequestClient<T>,
    customer_id: String,
    cart_id: String,
    order_id: String,
    date_authorized: String,
    date_captured: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaptureRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    #[serde(rename = "cartID")]
    pub cart_id: String,
    #[serde(rename = "orderID")]
    pub order_id: String,
    #[serde(rename = "dateAuthorized")]
    pub date_authorized: String,
    #[serde(rename = "dateCaptured")]
    pub date_captured: String,
}

impl CaptureOperation<HttpTransport> {
    pub fn new(
        config: ServiceConfig,
        customer_id: impl Into<String>,
        cart_id: impl Into<String>,
        order_id: impl Into<String>,
    ) -> Self {
        let transport = HttpTransport::new(&config);
        Self::with_transport(config, transport, customer_id, cart_id, order_id)
    }
}

impl<T: Transport> CaptureOperation<T> {
    /// 兩個時間預設為建立當下的 UTC 時間
    pub fn with_transport(
        config: ServiceConfig,
        transport: T,
        customer_id: impl Into<String>,
        cart_id: impl Into<String>,
        order_id: impl Into<String>,
    ) -> Self {
        let now = utc_now_timestamp();
        Self {
            client: RequestClient::with_transport(config, transport),
            customer_id: customer_id.into(),
            cart_id: cart_id.into(),
            order_id: order_id.into(),
            date_authorized: now.clone(),
            date_captured: now,
        }
    }

    pub fn with_date_authorized(mut self, timestamp: impl Into<String>) -> Self {
        self.date_authorized = timestamp.into();
        self
    }

    pub fn with_date_captured(mut self, timestamp: impl Into<String>) -> Self {
        self.date_captured = timestamp.into();
        self
    }

    pub fn date_authorized(&self) -> &str {
        &self.date_authorized
    }

    pub fn date_captured(&self) -> &str {
        &self.date_captured
    }
}

impl<T: Transport> Operation for CaptureOperation<T> {
    type Transport = T;
    type Wire = ();
    type Request = CaptureRequest;

    const METHOD: RemoteMethod = RemoteMethod::AuthorizedWithCapture;

    fn client(&self) -> &RequestClient<T> {
        &self.client
    }

    fn client_mut(&mut self) -> &mut RequestClient<T> {
        &mut self.client
    }

    fn prepare_wire_objects(&self) {}

    fn build_request(&self, _wire: ()) -> CaptureRequest {
        CaptureRequest {
            credentials: self.client.credentials(),
            customer_id: self.customer_id.clone(),
            cart_id: self.cart_id.clone(),
            order_id: self.order_id.clone(),
            date_authorized: self.date_authorized.clone(),
            date_captured: self.date_captured.clone(),
        }
    }

    fn parse_response(&mut self, _response: &ServiceResponse) {}
}
