use crate::utils::error::{Result, TaxCloudError};
use crate::utils::validation::{validate_field, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 出貨的起點或目的地
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    pub fn new(
        line1: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            line1: line1.into(),
            line2: String::new(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
        }
    }

    pub fn with_line2(mut self, line2: impl Into<String>) -> Self {
        self.line2 = line2.into();
        self
    }
}

impl Validate for Address {
    fn validate(&self) -> Result<()> {
        validate_field("address.line1", &self.line1)?;
        validate_field("address.city", &self.city)?;
        validate_field("address.state", &self.state)?;
        validate_field("address.zip_code", &self.zip_code)?;
        Ok(())
    }
}

/// 購物車中的一列商品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Taxability Information Code, 0 表示免稅
    pub tic: u32,
    pub item_id: String,
    pub price: Decimal,
    pub qty: u32,
}

impl CartItem {
    pub fn new(tic: u32, item_id: impl Into<String>, price: Decimal, qty: u32) -> Self {
        Self {
            tic,
            item_id: item_id.into(),
            price,
            qty,
        }
    }

    /// 免稅商品不送往遠端計算
    pub fn is_taxable(&self) -> bool {
        self.tic != 0
    }
}

impl Validate for CartItem {
    fn validate(&self) -> Result<()> {
        validate_field("cart_item.item_id", &self.item_id)?;
        if self.qty < 1 {
            return Err(TaxCloudError::Validation {
                message: format!("cart item {} must have a quantity of at least 1", self.item_id),
            });
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(TaxCloudError::Validation {
                message: format!("cart item {} has a negative price", self.item_id),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_address_defaults_line2_to_empty() {
        let address = Address::new("1 Main St", "Seattle", "WA", "98101");
        assert_eq!(address.line2, "");
        assert!(address.validate().is_ok());

        let address = address.with_line2("Suite 400");
        assert_eq!(address.line2, "Suite 400");
    }

    #[test]
    fn test_address_requires_zip() {
        let address = Address::new("1 Main St", "Seattle", "WA", "");
        let err = address.validate().unwrap_err();
        assert!(err.to_string().contains("address.zip_code"));
    }

    #[test]
    fn test_cart_item_taxability() {
        let price = Decimal::from_str("19.99").unwrap();
        assert!(CartItem::new(20150, "A100", price, 1).is_taxable());
        assert!(!CartItem::new(0, "A101", price, 1).is_taxable());
    }

    #[test]
    fn test_cart_item_validation() {
        let price = Decimal::from_str("5.00").unwrap();
        assert!(CartItem::new(20150, "A100", price, 2).validate().is_ok());
        assert!(CartItem::new(20150, "A100", price, 0).validate().is_err());
        assert!(CartItem::new(20150, "A100", -price, 1).validate().is_err());
        assert!(CartItem::new(20150, "", price, 1).validate().is_err());
    }

    #[test]
    fn test_cart_item_from_toml() {
        let item: CartItem = toml::from_str(
            r#"
tic = 31000
item_id = "B200"
price = "12.50"
qty = 3
"#,
        )
        .unwrap();
        assert_eq!(item.price, Decimal::from_str("12.50").unwrap());
        assert_eq!(item.qty, 3);
    }
}
