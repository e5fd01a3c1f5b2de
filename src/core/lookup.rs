use crate::adapters::http::HttpTransport;
use crate::config::ServiceConfig;
use crate::core::client::{Credentials, Operation, RequestClient};
use crate::core::wire::{cart_items_to_wire, ArrayOfCartItem, WireAddress};
use crate::domain::model::{Address, CartItem};
use crate::domain::ports::{RemoteMethod, Transport};
use crate::domain::response::{CartItemResponse, ServiceResponse};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// 查詢購物車的銷售稅
///
/// 未指定 cart id 時由 TaxCloud 產生，執行後可從 [`LookupOperation::cart_id`] 取得。
pub struct LookupOperation<T: Transport = HttpTransport> {
    client: RequestClient<T>,
    customer_id: String,
    cart_items: Vec<CartItem>,
    destination: Address,
    origin: Address,
    cart_id: Option<String>,
    delivered_by_seller: bool,
    tax: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupWire {
    pub origin: WireAddress,
    pub destination: WireAddress,
    pub cart_items: ArrayOfCartItem,
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    #[serde(rename = "cartID", skip_serializing_if = "Option::is_none")]
    pub cart_id: Option<String>,
    #[serde(rename = "cartItems")]
    pub cart_items: ArrayOfCartItem,
    pub origin: WireAddress,
    pub destination: WireAddress,
    #[serde(rename = "deliveredBySeller")]
    pub delivered_by_seller: bool,
}

impl LookupOperation<HttpTransport> {
    pub fn new(
        config: ServiceConfig,
        customer_id: impl Into<String>,
        cart_items: Vec<CartItem>,
        destination: Address,
        origin: Address,
    ) -> Self {
        let transport = HttpTransport::new(&config);
        Self::with_transport(config, transport, customer_id, cart_items, destination, origin)
    }
}

impl<T: Transport> LookupOperation<T> {
    pub fn with_transport(
        config: ServiceConfig,
        transport: T,
        customer_id: impl Into<String>,
        cart_items: Vec<CartItem>,
        destination: Address,
        origin: Address,
    ) -> Self {
        Self {
            client: RequestClient::with_transport(config, transport),
            customer_id: customer_id.into(),
            cart_items,
            destination,
            origin,
            cart_id: None,
            delivered_by_seller: false,
            tax: None,
        }
    }

    pub fn with_cart_id(mut self, cart_id: impl Into<String>) -> Self {
        self.cart_id = Some(cart_id.into()).filter(|id: &String| !id.is_empty());
        self
    }

    pub fn delivered_by_seller(mut self, delivered: bool) -> Self {
        self.delivered_by_seller = delivered;
        self
    }

    /// `None` 表示回應中沒有逐項稅額，與稅額為零不同
    pub fn tax(&self) -> Option<Decimal> {
        self.tax
    }

    pub fn cart_id(&self) -> Option<&str> {
        self.cart_id.as_deref()
    }
}

impl<T: Transport> Operation for LookupOperation<T> {
    type Transport = T;
    type Wire = LookupWire;
    type Request = LookupRequest;

    const METHOD: RemoteMethod = RemoteMethod::Lookup;

    fn client(&self) -> &RequestClient<T> {
        &self.client
    }

    fn client_mut(&mut self) -> &mut RequestClient<T> {
        &mut self.client
    }

    fn prepare_wire_objects(&self) -> LookupWire {
        LookupWire {
            origin: WireAddress::from(&self.origin),
            destination: WireAddress::from(&self.destination),
            cart_items: cart_items_to_wire(&self.cart_items),
        }
    }

    fn build_request(&self, wire: LookupWire) -> LookupRequest {
        LookupRequest {
            credentials: self.client.credentials(),
            customer_id: self.customer_id.clone(),
            cart_id: self.cart_id.clone(),
            cart_items: wire.cart_items,
            origin: wire.origin,
            destination: wire.destination,
            delivered_by_seller: self.delivered_by_seller,
        }
    }

    fn parse_response(&mut self, response: &ServiceResponse) {
        if let Some(cart_id) = &response.cart_id {
            self.cart_id = Some(cart_id.clone());
        }
        if let Some(items) = response.item_results() {
            let tax = total_tax(items);
            tracing::debug!("Lookup for cart {:?}: {} item(s), tax {}", self.cart_id, items.len(), tax);
            self.tax = Some(tax);
        }
    }
}

/// Sums per-item tax and rounds up to the next cent.
pub fn total_tax(items: &[CartItemResponse]) -> Decimal {
    let sum: Decimal = items.iter().map(|item| item.tax_amount).sum();
    round_up_to_cents(sum)
}

pub fn round_up_to_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity);
    rounded.rescale(2);
    rounded
}
