/*
[INPUT]:  Currency codes, order uuids, withdrawal details, API credentials
[OUTPUT]: Account data envelopes (balances, deposits, withdrawals, orders)
[POS]:    Bittrex facade - account endpoints (require signed URL)
[UPDATE]: When adding new account endpoints
*/

use rust_decimal::Decimal;

use crate::bittrex::BittrexClient;
use crate::http::{ResponseEnvelope, Result};

impl BittrexClient {
    /// GET /account/getwithdrawalhistory?currency={currency}
    pub async fn get_withdrawal_history(&self, currency: &str) -> Result<ResponseEnvelope> {
        self.query("getwithdrawalhistory", &[currency]).await
    }

    /// GET /account/getbalance?currency={currency}
    pub async fn get_balance(&self, currency: &str) -> Result<ResponseEnvelope> {
        self.query("getbalance", &[currency]).await
    }

    /// GET /account/getbalances
    pub async fn get_balances(&self) -> Result<ResponseEnvelope> {
        self.query("getbalances", &[]).await
    }

    /// GET /account/getdepositaddress?currency={currency}
    pub async fn get_deposit_address(&self, currency: &str) -> Result<ResponseEnvelope> {
        self.query("getdepositaddress", &[currency]).await
    }

    /// GET /account/getdeposithistory?currency={currency}
    pub async fn get_deposit_history(&self, currency: &str) -> Result<ResponseEnvelope> {
        self.query("getdeposithistory", &[currency]).await
    }

    /// GET /account/getorder?uuid={uuid}
    pub async fn get_order(&self, uuid: &str) -> Result<ResponseEnvelope> {
        self.query("getorder", &[uuid]).await
    }

    /// GET /account/getorderhistory?market={market}
    pub async fn get_order_history(&self, market: &str) -> Result<ResponseEnvelope> {
        self.query("getorderhistory", &[market]).await
    }

    /// GET /account/withdraw?currency={currency}&quantity={quantity}&address={address}
    pub async fn withdraw(
        &self,
        currency: &str,
        quantity: Decimal,
        address: &str,
    ) -> Result<ResponseEnvelope> {
        let quantity = quantity.to_string();
        self.query("withdraw", &[currency, &quantity, address]).await
    }
}
