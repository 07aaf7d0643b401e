//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::BitstampError;
use crate::rest::BitstampRestClient;
use crate::rest::endpoints::public;

impl BitstampRestClient {
    /// Get recent transactions for the configured pair.
    ///
    /// # Arguments
    ///
    /// * `request` - Optional time-window filter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitstamp_api_client::rest::BitstampRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BitstampRestClient::new();
    ///     let trades = client.transactions(None).await?;
    ///     println!("{} trades in the last hour", trades.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn transactions(
        &self,
        request: Option<&TransactionsRequest>,
    ) -> Result<Vec<Transaction>, BitstampError> {
        let pair = self.pair().to_string();
        match request {
            Some(req) => {
                self.public_get_with_params(public::TRANSACTIONS, Some(&pair), req)
                    .await
            }
            None => self.public_get(public::TRANSACTIONS, Some(&pair)).await,
        }
    }

    /// Get the ticker for the configured pair.
    pub async fn ticker(&self) -> Result<Ticker, BitstampError> {
        let pair = self.pair().to_string();
        self.public_get(public::TICKER, Some(&pair)).await
    }

    /// Get the order book for the configured pair.
    ///
    /// # Arguments
    ///
    /// * `request` - Optional grouping flag.
    pub async fn order_book(
        &self,
        request: Option<&OrderBookRequest>,
    ) -> Result<OrderBook, BitstampError> {
        let pair = self.pair().to_string();
        match request {
            Some(req) => {
                self.public_get_with_params(public::ORDER_BOOK, Some(&pair), req)
                    .await
            }
            None => self.public_get(public::ORDER_BOOK, Some(&pair)).await,
        }
    }

    /// Get the EUR/USD conversion rate.
    pub async fn eur_usd(&self) -> Result<ConversionRate, BitstampError> {
        self.public_get(public::EUR_USD, None).await
    }
}
