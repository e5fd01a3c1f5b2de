use crate::domain::model::{Address, CartItem};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireAddress {
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip5: String,
}

impl From<&Address> for WireAddress {
    fn from(address: &Address) -> Self {
        Self {
            address1: address.line1.clone(),
            address2: address.line2.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip5: address.zip_code.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireCartItem {
    #[serde(rename = "Index")]
    pub index: u32,
    #[serde(rename = "ItemID")]
    pub item_id: String,
    #[serde(rename = "TIC")]
    pub tic: u32,
    #[serde(rename = "Price", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "Qty")]
    pub qty: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ArrayOfCartItem {
    #[serde(rename = "CartItem")]
    pub cart_item: Vec<WireCartItem>,
}

/// 免稅商品 (TIC 為 0) 不送出，也不佔用索引
pub fn cart_items_to_wire(items: &[CartItem]) -> ArrayOfCartItem {
    let cart_item = items
        .iter()
        .filter(|item| item.is_taxable())
        .zip(0u32..)
        .map(|(item, index)| WireCartItem {
            index,
            item_id: item.item_id.clone(),
            tic: item.tic,
            price: item.price,
            qty: item.qty,
        })
        .collect();

    ArrayOfCartItem { cart_item }
}
