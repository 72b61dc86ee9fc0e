/*
[INPUT]:  Symbols, currencies, and optional limits
[OUTPUT]: Market data envelopes (ticker, stats, books, trades, lends, symbols)
[POS]:    Bitfinex facade - public endpoints (plain GET, no auth)
[UPDATE]: When adding new public endpoints
*/

use crate::bitfinex::BitfinexClient;
use crate::http::{ResponseEnvelope, Result};

impl BitfinexClient {
    /// GET /pubticker/{symbol}
    pub async fn get_ticker(&self, symbol: &str) -> Result<ResponseEnvelope> {
        self.query("pubticker", &[symbol]).await
    }

    /// GET /stats/{symbol}
    pub async fn get_stats(&self, symbol: &str) -> Result<ResponseEnvelope> {
        self.query("stats", &[symbol]).await
    }

    /// GET /book/{symbol} with 50 bids, 50 asks, grouped
    pub async fn get_order_book(&self, symbol: &str) -> Result<ResponseEnvelope> {
        self.query("book", &[symbol]).await
    }

    /// GET /book/{symbol}?limit_bids=..&limit_asks=..&group=..
    pub async fn get_order_book_limited(
        &self,
        symbol: &str,
        limit_bids: u32,
        limit_asks: u32,
        group: bool,
    ) -> Result<ResponseEnvelope> {
        let (bids, asks) = (limit_bids.to_string(), limit_asks.to_string());
        let group = if group { "1" } else { "0" };
        self.query("book", &[symbol, &bids, &asks, group]).await
    }

    /// GET /lendbook/{currency} with 50 bids and 50 asks
    pub async fn get_funding_book(&self, currency: &str) -> Result<ResponseEnvelope> {
        self.query("lendbook", &[currency]).await
    }

    /// GET /lendbook/{currency}?limit_bids=..&limit_asks=..
    pub async fn get_funding_book_limited(
        &self,
        currency: &str,
        limit_bids: u32,
        limit_asks: u32,
    ) -> Result<ResponseEnvelope> {
        let (bids, asks) = (limit_bids.to_string(), limit_asks.to_string());
        self.query("lendbook", &[currency, &bids, &asks]).await
    }

    /// GET /trades/{symbol}, last 50 trades
    pub async fn get_trades(&self, symbol: &str) -> Result<ResponseEnvelope> {
        self.query("trades", &[symbol]).await
    }

    /// GET /trades/{symbol}?limit_trades=..&timestamp=..
    pub async fn get_trades_since(
        &self,
        symbol: &str,
        limit_trades: u32,
        timestamp: i64,
    ) -> Result<ResponseEnvelope> {
        let (limit, timestamp) = (limit_trades.to_string(), timestamp.to_string());
        self.query("trades", &[symbol, &limit, &timestamp]).await
    }

    /// GET /lends/{currency}, last 50 entries
    pub async fn get_lends(&self, currency: &str) -> Result<ResponseEnvelope> {
        self.query("lends", &[currency]).await
    }

    /// GET /lends/{currency}?limit_lends=..&timestamp=..
    pub async fn get_lends_since(
        &self,
        currency: &str,
        limit_lends: u32,
        timestamp: i64,
    ) -> Result<ResponseEnvelope> {
        let (limit, timestamp) = (limit_lends.to_string(), timestamp.to_string());
        self.query("lends", &[currency, &limit, &timestamp]).await
    }

    /// GET /symbols
    pub async fn get_symbols(&self) -> Result<ResponseEnvelope> {
        self.query("symbols", &[]).await
    }

    /// GET /symbols_details
    pub async fn get_symbols_details(&self) -> Result<ResponseEnvelope> {
        self.query("symbols_details", &[]).await
    }
}
