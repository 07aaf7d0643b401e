//! Credential management for Bitstamp API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// API credentials: key, secret and the account's customer ID.
///
/// All three are required for private endpoints. The customer ID is the
/// numeric account identifier shown in Bitstamp's account settings and is
/// part of the signed message.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    /// The API secret (private, used for signing)
    api_secret: SecretString,
    /// The Bitstamp customer ID
    pub customer_id: String,
}

impl Credentials {
    /// Create new credentials from an API key, secret and customer ID.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
            customer_id: customer_id.into(),
        }
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("customer_id", &self.customer_id)
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager or environment variables.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret, customer_id),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `BITSTAMP_API_KEY`, `BITSTAMP_API_SECRET` and
/// `BITSTAMP_CUSTOMER_ID`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from default environment variables.
    ///
    /// Reads `BITSTAMP_API_KEY`, `BITSTAMP_API_SECRET` and `BITSTAMP_CUSTOMER_ID`.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env() -> Self {
        Self::from_env_vars("BITSTAMP_API_KEY", "BITSTAMP_API_SECRET", "BITSTAMP_CUSTOMER_ID")
    }

    /// Create credentials from custom environment variable names.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env_vars(key_var: &str, secret_var: &str, customer_var: &str) -> Self {
        let api_key = std::env::var(key_var)
            .unwrap_or_else(|_| panic!("Environment variable {key_var} not set"));
        let api_secret = std::env::var(secret_var)
            .unwrap_or_else(|_| panic!("Environment variable {secret_var} not set"));
        let customer_id = std::env::var(customer_var)
            .unwrap_or_else(|_| panic!("Environment variable {customer_var} not set"));

        Self {
            credentials: Credentials::new(api_key, api_secret, customer_id),
        }
    }

    /// Try to create credentials from default environment variables.
    ///
    /// Returns `None` if any of the environment variables are not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars("BITSTAMP_API_KEY", "BITSTAMP_API_SECRET", "BITSTAMP_CUSTOMER_ID")
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` if any of the environment variables are not set.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str, customer_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;
        let api_secret = std::env::var(secret_var).ok()?;
        let customer_id = std::env::var(customer_var).ok()?;

        Some(Self {
            credentials: Credentials::new(api_key, api_secret, customer_id),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
