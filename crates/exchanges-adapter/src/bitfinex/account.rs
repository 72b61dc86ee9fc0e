/*
[INPUT]:  Account queries and API credentials
[OUTPUT]: Account data envelopes (infos, fees, balances, history, deposits)
[POS]:    Bitfinex facade - account endpoints (signed JSON payload)
[UPDATE]: When adding new account endpoints
*/

use crate::bitfinex::BitfinexClient;
use crate::http::{Params, ResponseEnvelope, Result};
use crate::types::{DepositRequest, HistoryRequest, to_params};

impl BitfinexClient {
    /// POST /account_infos
    pub async fn account_infos(&self) -> Result<ResponseEnvelope> {
        self.post("account_infos", &Params::new()).await
    }

    /// POST /summary
    pub async fn summary(&self) -> Result<ResponseEnvelope> {
        self.post("summary", &Params::new()).await
    }

    /// POST /key_info
    pub async fn key_info(&self) -> Result<ResponseEnvelope> {
        self.post("key_info", &Params::new()).await
    }

    /// POST /margin_infos
    pub async fn margin_infos(&self) -> Result<ResponseEnvelope> {
        self.post("margin_infos", &Params::new()).await
    }

    /// POST /balances
    pub async fn balances(&self) -> Result<ResponseEnvelope> {
        self.post("balances", &Params::new()).await
    }

    /// POST /history
    pub async fn history(&self, request: &HistoryRequest) -> Result<ResponseEnvelope> {
        self.post("history", &to_params(request)?).await
    }

    /// POST /deposit/new
    pub async fn deposit_address(&self, request: &DepositRequest) -> Result<ResponseEnvelope> {
        self.post("deposit/new", &to_params(request)?).await
    }
}
