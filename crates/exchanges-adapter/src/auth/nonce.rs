/*
[INPUT]:  Wall-clock time in epoch milliseconds
[OUTPUT]: Strictly increasing nonces for signed requests
[POS]:    Auth layer - replay protection shared by every client of one exchange key
[UPDATE]: When changing nonce resolution or sequencing
*/

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use chrono::Utc;

/// Thread-safe nonce generator
///
/// Returns the current epoch milliseconds unless that would not exceed the
/// previous nonce, in which case it returns previous + 1.
#[derive(Debug, Default)]
pub struct NonceSource {
    last: Mutex<u64>,
}

impl NonceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide source for one exchange and API key
    ///
    /// Every client built for the same pair draws from the same sequence, so
    /// two clients sharing a key never send the same nonce.
    pub fn shared(exchange: &str, api_key: &str) -> Arc<Self> {
        static REGISTRY: OnceLock<Mutex<HashMap<(String, String), Arc<NonceSource>>>> =
            OnceLock::new();

        let mut registry = REGISTRY
            .get_or_init(Default::default)
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            registry
                .entry((exchange.to_string(), api_key.to_string()))
                .or_default(),
        )
    }

    pub fn next(&self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.next_after(now)
    }

    fn next_after(&self, now: u64) -> u64 {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        let nonce = now.max(*last + 1);
        *last = nonce;
        nonce
    }
}
