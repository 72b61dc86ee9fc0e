/*
[INPUT]:  Order requests and API credentials
[OUTPUT]: Order, position, and trade envelopes
[POS]:    Bitfinex facade - trading endpoints (signed JSON payload)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::bitfinex::BitfinexClient;
use crate::http::{Params, ResponseEnvelope, Result};
use crate::types::{MyTradesRequest, NewOrderRequest, OrderIdRequest, to_params};

impl BitfinexClient {
    /// POST /order/new
    pub async fn new_order(&self, request: &NewOrderRequest) -> Result<ResponseEnvelope> {
        self.post("order/new", &to_params(request)?).await
    }

    /// POST /order/cancel
    pub async fn cancel_order(&self, order_id: u64) -> Result<ResponseEnvelope> {
        self.post("order/cancel", &to_params(&OrderIdRequest { order_id })?)
            .await
    }

    /// POST /order/cancel/all
    pub async fn cancel_all_orders(&self) -> Result<ResponseEnvelope> {
        self.post("order/cancel/all", &Params::new()).await
    }

    /// POST /order/status
    pub async fn order_status(&self, order_id: u64) -> Result<ResponseEnvelope> {
        self.post("order/status", &to_params(&OrderIdRequest { order_id })?)
            .await
    }

    /// POST /orders
    pub async fn active_orders(&self) -> Result<ResponseEnvelope> {
        self.post("orders", &Params::new()).await
    }

    /// POST /positions
    pub async fn active_positions(&self) -> Result<ResponseEnvelope> {
        self.post("positions", &Params::new()).await
    }

    /// POST /mytrades
    pub async fn my_trades(&self, request: &MyTradesRequest) -> Result<ResponseEnvelope> {
        self.post("mytrades", &to_params(request)?).await
    }
}
