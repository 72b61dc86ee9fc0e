/*
[INPUT]:  Markets, quantities, rates, order uuids, API credentials
[OUTPUT]: Order placement/cancellation envelopes
[POS]:    Bittrex facade - market (trading) endpoints (require signed URL)
[UPDATE]: When adding new trading endpoints
*/

use rust_decimal::Decimal;

use crate::bittrex::BittrexClient;
use crate::http::{ResponseEnvelope, Result};

impl BittrexClient {
    /// GET /market/getopenorders?market={market}
    ///
    /// `None` lists open orders across all markets.
    pub async fn get_open_orders(&self, market: Option<&str>) -> Result<ResponseEnvelope> {
        match market {
            Some(market) => self.query("getopenorders", &[market]).await,
            None => self.query("getopenorders", &[]).await,
        }
    }

    /// GET /market/buylimit?market={market}&quantity={quantity}&rate={rate}
    pub async fn buy_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> Result<ResponseEnvelope> {
        let (quantity, rate) = (quantity.to_string(), rate.to_string());
        self.query("buylimit", &[market, &quantity, &rate]).await
    }

    /// GET /market/selllimit?market={market}&quantity={quantity}&rate={rate}
    pub async fn sell_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> Result<ResponseEnvelope> {
        let (quantity, rate) = (quantity.to_string(), rate.to_string());
        self.query("selllimit", &[market, &quantity, &rate]).await
    }

    /// GET /market/cancel?uuid={uuid}
    pub async fn cancel(&self, uuid: &str) -> Result<ResponseEnvelope> {
        self.query("cancel", &[uuid]).await
    }
}
