/*
[INPUT]:  Market and currency identifiers
[OUTPUT]: Market data envelopes (currencies, markets, summaries, book, ticker)
[POS]:    Bittrex facade - public endpoints (no auth required)
[UPDATE]: When adding new public endpoints
*/

use crate::bittrex::BittrexClient;
use crate::http::{ResponseEnvelope, Result};
use crate::types::OrderBookType;

impl BittrexClient {
    /// GET /public/getcurrencies
    pub async fn get_currencies(&self) -> Result<ResponseEnvelope> {
        self.query("getcurrencies", &[]).await
    }

    /// GET /public/getmarkethistory?market={market}
    pub async fn get_market_history(&self, market: &str) -> Result<ResponseEnvelope> {
        self.query("getmarkethistory", &[market]).await
    }

    /// GET /public/getmarkets
    pub async fn get_markets(&self) -> Result<ResponseEnvelope> {
        self.query("getmarkets", &[]).await
    }

    /// GET /public/getmarketsummaries
    pub async fn get_market_summaries(&self) -> Result<ResponseEnvelope> {
        self.query("getmarketsummaries", &[]).await
    }

    /// GET /public/getmarketsummary?market={market}
    pub async fn get_market_summary(&self, market: &str) -> Result<ResponseEnvelope> {
        self.query("getmarketsummary", &[market]).await
    }

    /// GET /public/getorderbook?market={market}&type={book}
    pub async fn get_order_book(
        &self,
        market: &str,
        book: OrderBookType,
    ) -> Result<ResponseEnvelope> {
        self.query("getorderbook", &[market, book.as_str()]).await
    }

    /// GET /public/getticker?market={market}
    pub async fn get_ticker(&self, market: &str) -> Result<ResponseEnvelope> {
        self.query("getticker", &[market]).await
    }
}
