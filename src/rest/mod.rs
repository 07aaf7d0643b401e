//! Bitstamp REST API client.
//!
//! Provides access to the Bitstamp public market-data and private trading
//! REST endpoints.
//!
//! # Trait-based API
//!
//! The [`BitstampClient`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., a caching wrapper)
//! - Alternative implementations
//!
//! ```rust,ignore
//! use bitstamp_api_client::rest::{BitstampClient, BitstampRestClient};
//!
//! async fn use_client<C: BitstampClient>(client: &C) -> Result<(), bitstamp_api_client::error::BitstampError> {
//!     let ticker = client.ticker().await?;
//!     println!("Last price: {}", ticker.last);
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod traits;

pub use client::{BitstampRestClient, BitstampRestClientBuilder};
pub use endpoints::*;
pub use traits::{BitstampClient, BitstampClientExt};
