/*
[INPUT]:  Message bytes and secret key bytes
[OUTPUT]: Hex-encoded HMAC digests (SHA-512, SHA-384)
[POS]:    Auth layer - keyed hashing for request authentication
[UPDATE]: When adding hash functions or changing digest encoding
*/

use hmac::{Hmac, Mac};
use sha2::{Sha384, Sha512};

use crate::http::{ExchangeError, Result};

type HmacSha512 = Hmac<Sha512>;
type HmacSha384 = Hmac<Sha384>;

/// HMAC signer keyed with an API secret
pub struct HmacSigner<'a> {
    secret: &'a [u8],
}

impl<'a> HmacSigner<'a> {
    pub fn new(secret: &'a str) -> Self {
        Self {
            secret: secret.as_bytes(),
        }
    }

    /// HMAC-SHA512, hex encoded
    pub fn sha512_hex(&self, message: &[u8]) -> Result<String> {
        let mut mac = HmacSha512::new_from_slice(self.secret).map_err(invalid_key)?;
        mac.update(message);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// HMAC-SHA384, hex encoded
    pub fn sha384_hex(&self, message: &[u8]) -> Result<String> {
        let mut mac = HmacSha384::new_from_slice(self.secret).map_err(invalid_key)?;
        mac.update(message);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

fn invalid_key(err: hmac::digest::InvalidLength) -> ExchangeError {
    ExchangeError::Config(format!("invalid HMAC key: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231 test case 2
    const KEY: &str = "Jefe";
    const DATA: &[u8] = b"what do ya want for nothing?";

    #[test]
    fn test_sha512_known_vector() {
        let digest = HmacSigner::new(KEY).sha512_hex(DATA).unwrap();
        assert_eq!(
            digest,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_sha384_known_vector() {
        let digest = HmacSigner::new(KEY).sha384_hex(DATA).unwrap();
        assert_eq!(
            digest,
            "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e\
             8e2240ca5e69e2c78b3239ecfab21649"
        );
    }

    #[test]
    fn test_digest_lengths() {
        let signer = HmacSigner::new("secret");
        assert_eq!(signer.sha512_hex(b"x").unwrap().len(), 128);
        assert_eq!(signer.sha384_hex(b"x").unwrap().len(), 96);
    }
}
