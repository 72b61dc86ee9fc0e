/*
[INPUT]:  Typed order/account parameters
[OUTPUT]: JSON parameter maps merged into signed payloads
[POS]:    Data layer - request bodies for payload-signed endpoints
[UPDATE]: When private endpoints gain parameters
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Side, Wallet};
use crate::http::{ExchangeError, Params, Result};

/// Convert a serializable request into payload parameters
pub fn to_params<T: Serialize>(request: &T) -> Result<Params> {
    match serde_json::to_value(request)? {
        serde_json::Value::Object(params) => Ok(params),
        other => Err(ExchangeError::Config(format!(
            "request must serialize to a JSON object, got {other}"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderRequest {
    pub symbol: String,
    pub amount: Decimal,
    pub price: Decimal,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(default = "default_exchange")]
    pub exchange: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_postonly: Option<bool>,
}

impl NewOrderRequest {
    pub fn new(
        symbol: impl Into<String>,
        amount: Decimal,
        price: Decimal,
        side: Side,
        order_type: OrderType,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            price,
            side,
            order_type,
            exchange: default_exchange(),
            is_hidden: None,
            is_postonly: None,
        }
    }
}

fn default_exchange() -> String {
    "bitfinex".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIdRequest {
    pub order_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyTradesRequest {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_trades: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRequest {
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Wallet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub method: String,
    pub wallet_name: Wallet,
    pub renew: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_order_params() {
        let request = NewOrderRequest::new(
            "btcusd",
            "0.5".parse().unwrap(),
            "30000.1".parse().unwrap(),
            Side::Buy,
            OrderType::ExchangeLimit,
        );
        let params = to_params(&request).unwrap();

        assert_eq!(params["symbol"], json!("btcusd"));
        assert_eq!(params["amount"], json!("0.5"));
        assert_eq!(params["price"], json!("30000.1"));
        assert_eq!(params["side"], json!("buy"));
        assert_eq!(params["type"], json!("exchange limit"));
        assert_eq!(params["exchange"], json!("bitfinex"));
        assert!(!params.contains_key("is_hidden"));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(to_params(&42), Err(ExchangeError::Config(_))));
    }
}
