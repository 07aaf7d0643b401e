//! HMAC-SHA256 signature generation for Bitstamp API authentication.
//!
//! Bitstamp private endpoints require a signature computed as:
//! ```text
//! HMAC-SHA256(nonce + customer_id + api_key, api_secret)
//! ```
//!
//! The message parts are concatenated without separators and the secret is
//! used as its raw UTF-8 bytes. The signature is hex-encoded, uppercased
//! and sent as the `signature` form field alongside `key` and `nonce`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BitstampError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a request for Bitstamp's private API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the key, secret and customer ID
/// * `nonce` - The nonce value for this request
///
/// # Returns
///
/// Uppercase hex-encoded HMAC-SHA256 signature (64 characters).
///
/// # Example
///
/// ```rust
/// use bitstamp_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret", "123456");
/// let signature = sign_request(&credentials, "13404232008660000")?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(credentials: &Credentials, nonce: &str) -> Result<String, BitstampError> {
    // Message is nonce + customer_id + api_key, no separators.
    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| BitstampError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(nonce.as_bytes());
    hmac.update(credentials.customer_id.as_bytes());
    hmac.update(credentials.api_key.as_bytes());
    let hmac_result = hmac.finalize().into_bytes();

    Ok(hex::encode_upper(hmac_result))
}
