//! # Bitstamp Client
//!
//! An async Rust client library for the Bitstamp exchange REST API.
//!
//! ## Features
//!
//! - Public market-data endpoints (ticker, transactions, order book)
//! - Private endpoints with HMAC-SHA256 signed requests
//! - Strictly increasing nonce generation for replay protection
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitstamp_api_client::rest::BitstampRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BitstampRestClient::new();
//!     let ticker = client.ticker().await?;
//!     println!("Last price: {}", ticker.last);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::BitstampError;
pub use types::common::{OrderSide, UserTransactionType};

/// Result type alias using BitstampError
pub type Result<T> = std::result::Result<T, BitstampError>;
