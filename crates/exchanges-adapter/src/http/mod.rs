/*
[INPUT]:  HTTP client configuration, catalogs, and signing strategies
[OUTPUT]: Response envelopes for every exchange operation
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding signing strategies or changing client behavior
*/

pub mod client;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod signature;

pub use error::{ExchangeError, Result};
pub use signature::{
    PayloadHeaders, PayloadSigner, Params, QuerySigner, RequestSigner, SignedRequest,
};

pub use client::{ClientConfig, ExchangeClient};
pub use dispatcher::Dispatcher;
pub use envelope::{COMMUNICATION_ERROR, ResponseEnvelope};
