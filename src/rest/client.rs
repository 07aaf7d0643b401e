//! Bitstamp REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::auth::{CredentialsProvider, NonceProvider, TimestampNonce, sign_request};
use crate::error::{ApiError, BitstampError};
use crate::rest::endpoints::{BITSTAMP_BASE_URL, DEFAULT_PAIR};

/// The Bitstamp REST API client.
///
/// This client provides access to the Bitstamp public market-data endpoints
/// and, when credentials are configured, the signed private endpoints.
///
/// # Example
///
/// ```rust,no_run
/// use bitstamp_api_client::rest::BitstampRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = BitstampRestClient::new();
///
///     let ticker = client.ticker().await?;
///     println!("Last price: {}", ticker.last);
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use bitstamp_api_client::rest::BitstampRestClient;
/// use bitstamp_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret", "123456"));
///     let client = BitstampRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balance = client.balance().await?;
///     println!("Balance: {:?}", balance);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitstampRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    pair: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl BitstampRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BitstampRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BitstampRestClientBuilder {
        BitstampRestClientBuilder::new()
    }

    /// The trading pair this client scopes market-data and trading requests to.
    pub fn pair(&self) -> &str {
        &self.pair
    }

    /// Build a `/api/{action}/[{pair}/]` path with an optional query string.
    fn build_path(&self, action: &str, pair: Option<&str>, query: &str) -> String {
        let mut path = format!("/api/{}/", action);
        if let Some(pair) = pair {
            path.push_str(pair);
            path.push('/');
        }
        if !query.is_empty() {
            path.push('?');
            path.push_str(query);
        }
        path
    }

    /// Make a public GET request without parameters.
    pub(crate) async fn public_get<T>(
        &self,
        action: &str,
        pair: Option<&str>,
    ) -> Result<T, BitstampError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[derive(serde::Serialize)]
        struct Empty {}
        self.public_get_with_params(action, pair, &Empty {}).await
    }

    /// Make a public GET request with query parameters.
    ///
    /// Absent (`None`) parameters are dropped before encoding, so the query
    /// string only carries fields the caller actually set.
    pub(crate) async fn public_get_with_params<T, Q>(
        &self,
        action: &str,
        pair: Option<&str>,
        params: &Q,
    ) -> Result<T, BitstampError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| BitstampError::InvalidResponse(e.to_string()))?;
        let path = self.build_path(action, pair, &query_string);
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(method = "GET", path = %path, "dispatching request");
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(map_send_error)?;
        self.parse_response(response).await
    }

    /// Make an authenticated POST request.
    ///
    /// Fails with [`BitstampError::MissingCredentials`] before any network
    /// I/O when no credentials are configured. The signed `key`,
    /// `signature` and `nonce` fields are merged into the form body ahead
    /// of the caller's parameters; absent parameters are dropped.
    pub(crate) async fn private_post<T, P>(
        &self,
        action: &str,
        pair: Option<&str>,
        params: &P,
    ) -> Result<T, BitstampError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BitstampError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let nonce = self.nonce_provider.next_nonce();
        let signature = sign_request(creds, &nonce)?;

        let auth_fields = [
            ("key", creds.api_key.as_str()),
            ("signature", signature.as_str()),
            ("nonce", nonce.as_str()),
        ];
        let mut form_data = serde_urlencoded::to_string(auth_fields)
            .map_err(|e| BitstampError::InvalidResponse(e.to_string()))?;

        let caller_data = serde_urlencoded::to_string(params)
            .map_err(|e| BitstampError::InvalidResponse(e.to_string()))?;
        if !caller_data.is_empty() {
            form_data.push('&');
            form_data.push_str(&caller_data);
        }

        let path = self.build_path(action, pair, "");
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(method = "POST", path = %path, "dispatching request");
        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form_data)
            .send()
            .await
            .map_err(map_send_error)?;

        self.parse_response(response).await
    }

    /// Parse a response from the Bitstamp API.
    ///
    /// A non-200 status is an error carrying the status and body verbatim.
    /// A 200 body that flags an error (Bitstamp reports failures under
    /// HTTP 200) is an application error, not a success.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, BitstampError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                BitstampError::Timeout
            } else {
                BitstampError::Http(e)
            }
        })?;

        if !status.is_success() {
            return Err(BitstampError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&body)?;
        if let Some(api_error) = ApiError::from_body(&value, &body) {
            return Err(BitstampError::Api(api_error));
        }

        serde_json::from_value(value).map_err(|e| {
            BitstampError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })
    }
}

/// Map a transport failure, distinguishing inactivity timeouts.
fn map_send_error(err: reqwest_middleware::Error) -> BitstampError {
    match err {
        reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => BitstampError::Timeout,
        other => BitstampError::HttpMiddleware(other),
    }
}

impl Default for BitstampRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BitstampRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitstampRestClient")
            .field("base_url", &self.base_url)
            .field("pair", &self.pair)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`BitstampRestClient`].
pub struct BitstampRestClientBuilder {
    base_url: String,
    pair: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    proxy_url: Option<String>,
    read_timeout: Duration,
}

impl BitstampRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BITSTAMP_BASE_URL.to_string(),
            pair: DEFAULT_PAIR.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            proxy_url: None,
            read_timeout: Duration::from_secs(5),
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the default trading pair (e.g. "ethusd"). Defaults to "btcusd".
    pub fn pair(mut self, pair: impl Into<String>) -> Self {
        self.pair = pair.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    ///
    /// Overriding the default forfeits the built-in strictly increasing
    /// guarantee; the provided implementation must supply it instead.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Route all requests through a forward proxy.
    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Set the read-inactivity timeout. Defaults to 5 seconds.
    ///
    /// A request whose connection produces no bytes for this duration is
    /// aborted and reported as [`BitstampError::Timeout`].
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> BitstampRestClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bitstamp-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bitstamp-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .read_timeout(self.read_timeout);

        if let Some(proxy_url) = self.proxy_url {
            match reqwest::Proxy::all(&proxy_url) {
                Ok(proxy) => builder = builder.proxy(proxy),
                Err(error) => {
                    tracing::warn!(%proxy_url, %error, "ignoring invalid proxy URL");
                }
            }
        }

        let reqwest_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(TimestampNonce::new()));

        BitstampRestClient {
            http_client: client,
            base_url: self.base_url,
            pair: self.pair,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for BitstampRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
