/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public exchange adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod bitfinex;
pub mod bittrex;
pub mod catalog;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, HmacSigner, NonceSource};

// Re-export catalog types
pub use catalog::{Catalog, EndpointDescriptor, HttpMethod, ResolvedEndpoint, Visibility};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Dispatcher,
    ExchangeClient,
    ExchangeError,
    Params,
    PayloadHeaders,
    PayloadSigner,
    QuerySigner,
    RequestSigner,
    ResponseEnvelope,
    Result,
    SignedRequest,
};

// Exchange facades
pub use bitfinex::BitfinexClient;
pub use bittrex::BittrexClient;

// Re-export all types
pub use types::*;
