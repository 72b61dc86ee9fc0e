/*
[INPUT]:  API key/secret configuration and wall-clock time
[OUTPUT]: Validated credentials, nonces, and HMAC digests
[POS]:    Auth layer - primitives shared by every signing strategy
[UPDATE]: When adding credential sources or hash functions
*/

pub mod credentials;
pub mod nonce;
pub mod signer;

pub use credentials::Credentials;
pub use nonce::NonceSource;
pub use signer::HmacSigner;
