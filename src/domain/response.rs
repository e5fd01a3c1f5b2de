use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 服務端回傳的狀態，JSON 端點以數字表示，其餘以字串表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseType {
    Error,
    Warning,
    Informational,
    Ok,
    /// 未知的狀態值原樣保留，不讓整個回應解析失敗
    Other(String),
}

impl ResponseType {
    pub fn as_str(&self) -> &str {
        match self {
            ResponseType::Error => "Error",
            ResponseType::Warning => "Warning",
            ResponseType::Informational => "Informational",
            ResponseType::Ok => "OK",
            ResponseType::Other(raw) => raw,
        }
    }

    fn from_code(code: u64) -> Self {
        match code {
            0 => ResponseType::Error,
            1 => ResponseType::Warning,
            2 => ResponseType::Informational,
            3 => ResponseType::Ok,
            other => ResponseType::Other(other.to_string()),
        }
    }

    fn from_name(name: &str) -> Self {
        match name {
            "OK" => ResponseType::Ok,
            "Error" => ResponseType::Error,
            "Warning" => ResponseType::Warning,
            "Informational" => ResponseType::Informational,
            other => ResponseType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResponseType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResponseType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => ResponseType::from_name(&s),
            serde_json::Value::Number(n) => match n.as_u64() {
                Some(code) => ResponseType::from_code(code),
                None => ResponseType::Other(n.to_string()),
            },
            other => ResponseType::Other(other.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMessage {
    #[serde(default)]
    pub response_type: Option<ResponseType>,
    #[serde(default)]
    pub message: Option<String>,
}

/// 訊息集合；SOAP 形式包在 `ResponseMessage` 之下，JSON 端點直接給陣列
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMessages {
    pub response_message: Vec<ResponseMessage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MessagesShape {
    Bare(Vec<ResponseMessage>),
    Wrapped {
        #[serde(rename = "ResponseMessage", default)]
        response_message: Option<Vec<ResponseMessage>>,
    },
}

impl<'de> Deserialize<'de> for ResponseMessages {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let response_message = match MessagesShape::deserialize(deserializer)? {
            MessagesShape::Bare(list) => list,
            MessagesShape::Wrapped { response_message } => response_message.unwrap_or_default(),
        };
        Ok(ResponseMessages { response_message })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CartItemResponse {
    #[serde(default)]
    pub cart_item_index: Option<u32>,
    pub tax_amount: Decimal,
}

/// 逐項稅額；與訊息一樣接受包裝與陣列兩種形式
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CartItemsResponse {
    pub cart_item_response: Option<Vec<CartItemResponse>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CartItemsShape {
    Bare(Vec<CartItemResponse>),
    Wrapped {
        #[serde(rename = "CartItemResponse", default)]
        cart_item_response: Option<Vec<CartItemResponse>>,
    },
}

impl<'de> Deserialize<'de> for CartItemsResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cart_item_response = match CartItemsShape::deserialize(deserializer)? {
            CartItemsShape::Bare(list) => Some(list),
            CartItemsShape::Wrapped { cart_item_response } => cart_item_response,
        };
        Ok(CartItemsResponse { cart_item_response })
    }
}

/// 任一遠端呼叫的回應；缺少的欄位保持 `None`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceResponse {
    #[serde(default)]
    pub response_type: Option<ResponseType>,
    #[serde(default)]
    pub messages: Option<ResponseMessages>,
    #[serde(default, rename = "CartID", deserialize_with = "deserialize_opaque_id")]
    pub cart_id: Option<String>,
    #[serde(default)]
    pub cart_items_response: Option<CartItemsResponse>,
}

impl ServiceResponse {
    pub fn is_ok(&self) -> bool {
        self.response_type == Some(ResponseType::Ok)
    }

    /// 所有帶有文字的訊息，依回應中的順序
    pub fn message_texts(&self) -> Vec<String> {
        self.messages
            .iter()
            .flat_map(|m| m.response_message.iter())
            .filter_map(|m| m.message.clone())
            .collect()
    }

    pub fn item_results(&self) -> Option<&[CartItemResponse]> {
        self.cart_items_response
            .as_ref()
            .and_then(|r| r.cart_item_response.as_deref())
    }
}

/// CartID 可能是字串或數字，一律保留為字串
fn deserialize_opaque_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "unexpected cart id: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_parse_ping_response() {
        let response: ServiceResponse =
            serde_json::from_value(json!({"ResponseType": "OK", "Messages": null})).unwrap();
        assert!(response.is_ok());
        assert!(response.message_texts().is_empty());
        assert!(response.item_results().is_none());
    }

    #[test]
    fn test_parse_numeric_response_type() {
        let response: ServiceResponse =
            serde_json::from_value(json!({"ResponseType": 0})).unwrap();
        assert_eq!(response.response_type, Some(ResponseType::Error));
        assert!(!response.is_ok());
    }

    #[test]
    fn test_parse_lookup_response() {
        let response: ServiceResponse = serde_json::from_value(json!({
            "ResponseType": 3,
            "CartID": 48211,
            "CartItemsResponse": {
                "CartItemResponse": [
                    {"CartItemIndex": 0, "TaxAmount": 0.86},
                    {"CartItemIndex": 1, "TaxAmount": "1.005"}
                ]
            }
        }))
        .unwrap();

        assert_eq!(response.cart_id.as_deref(), Some("48211"));
        let items = response.item_results().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].tax_amount, Decimal::from_str("0.86").unwrap());
        assert_eq!(items[1].tax_amount, Decimal::from_str("1.005").unwrap());
    }

    #[test]
    fn test_message_texts_skip_messages_without_text() {
        let response: ServiceResponse = serde_json::from_value(json!({
            "ResponseType": "Error",
            "Messages": {
                "ResponseMessage": [
                    {"ResponseType": "Error", "Message": "Invalid Zip"},
                    {"ResponseType": "Error"},
                    {"ResponseType": "Warning", "Message": "Unknown TIC"}
                ]
            }
        }))
        .unwrap();

        assert_eq!(response.message_texts(), vec!["Invalid Zip", "Unknown TIC"]);
    }

    #[test]
    fn test_unknown_response_type_keeps_messages() {
        let response: ServiceResponse = serde_json::from_value(json!({
            "ResponseType": "Bogus",
            "Messages": {"ResponseMessage": [{"Message": "Invalid cart"}]}
        }))
        .unwrap();

        assert_eq!(
            response.response_type,
            Some(ResponseType::Other("Bogus".to_string()))
        );
        assert!(!response.is_ok());
        assert_eq!(response.message_texts(), vec!["Invalid cart"]);

        let response: ServiceResponse =
            serde_json::from_value(json!({"ResponseType": 9})).unwrap();
        assert_eq!(response.response_type, Some(ResponseType::Other("9".to_string())));
    }

    #[test]
    fn test_null_message_list_is_empty() {
        let response: ServiceResponse =
            serde_json::from_value(json!({"Messages": {"ResponseMessage": null}})).unwrap();
        assert!(response.messages.is_some());
        assert!(response.message_texts().is_empty());
    }

    #[test]
    fn test_bare_message_array() {
        let response: ServiceResponse = serde_json::from_value(json!({
            "ResponseType": 0,
            "Messages": [{"ResponseType": 0, "Message": "Invalid apiKey"}]
        }))
        .unwrap();

        assert_eq!(response.response_type, Some(ResponseType::Error));
        assert_eq!(response.message_texts(), vec!["Invalid apiKey"]);
    }

    #[test]
    fn test_bare_cart_items_array_without_index() {
        let response: ServiceResponse = serde_json::from_value(json!({
            "CartItemsResponse": [
                {"CartItemIndex": 0, "TaxAmount": 0.5},
                {"TaxAmount": 0.25}
            ]
        }))
        .unwrap();

        let items = response.item_results().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].cart_item_index, Some(0));
        assert_eq!(items[1].cart_item_index, None);
        assert_eq!(items[1].tax_amount, Decimal::from_str("0.25").unwrap());
    }

    #[test]
    fn test_null_cart_item_list_has_no_results() {
        let response: ServiceResponse =
            serde_json::from_value(json!({"CartItemsResponse": {"CartItemResponse": null}}))
                .unwrap();
        assert!(response.item_results().is_none());
    }

    #[test]
    fn test_wrapper_without_item_list_has_no_results() {
        let response: ServiceResponse =
            serde_json::from_value(json!({"CartItemsResponse": {}})).unwrap();
        assert!(response.cart_items_response.is_some());
        assert!(response.item_results().is_none());
    }
}
