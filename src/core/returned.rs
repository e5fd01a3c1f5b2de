use crate::adapters::http::HttpTransport;
use crate::config::ServiceConfig;
use crate::core::client::{Credentials, Operation, RequestClient};
use crate::core::wire::{cart_items_to_wire, ArrayOfCartItem};
use crate::domain::model::CartItem;
use crate::domain::ports::{RemoteMethod, Transport};
use crate::domain::response::ServiceResponse;
use crate::utils::timestamp::utc_now_timestamp;
use serde::Serialize;

/// 顧客退貨時呼叫
pub struct ReturnOperation<T: Transport = HttpTransport> {
    client: RequestClient<T>,
    order_id: String,
    cart_items: Vec<CartItem>,
    returned_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReturnRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(rename = "orderID")]
    pub order_id: String,
    #[serde(rename = "cartItems")]
    pub cart_items: ArrayOfCartItem,
    #[serde(rename = "returnedDate")]
    pub returned_date: String,
}

impl ReturnOperation<HttpTransport> {
    pub fn new(config: ServiceConfig, order_id: impl Into<String>, cart_items: Vec<CartItem>) -> Self {
        let transport = HttpTransport::new(&config);
        Self::with_transport(config, transport, order_id, cart_items)
    }
}

impl<T: Transport> ReturnOperation<T> {
    pub fn with_transport(
        config: ServiceConfig,
        transport: T,
        order_id: impl Into<String>,
        cart_items: Vec<CartItem>,
    ) -> Self {
        Self {
            client: RequestClient::with_transport(config, transport),
            order_id: order_id.into(),
            cart_items,
            returned_date: utc_now_timestamp(),
        }
    }

    pub fn with_returned_date(mut self, timestamp: impl Into<String>) -> Self {
        self.returned_date = timestamp.into();
        self
    }

    pub fn returned_date(&self) -> &str {
        &self.returned_date
    }
}

impl<T: Transport> Operation for ReturnOperation<T> {
    type Transport = T;
    type Wire = ArrayOfCartItem;
    type Request = ReturnRequest;

    const METHOD: RemoteMethod = RemoteMethod::Returned;

    fn client(&self) -> &RequestClient<T> {
        &self.client
    }

    fn client_mut(&mut self) -> &mut RequestClient<T> {
        &mut self.client
    }

    fn prepare_wire_objects(&self) -> ArrayOfCartItem {
        cart_items_to_wire(&self.cart_items)
    }

    fn build_request(&self, cart_items: ArrayOfCartItem) -> ReturnRequest {
        ReturnRequest {
            credentials: self.client.credentials(),
            order_id: self.order_id.clone(),
            cart_items,
            returned_date: self.returned_date.clone(),
        }
    }

    fn parse_response(&mut self, _response: &ServiceResponse) {}
}
