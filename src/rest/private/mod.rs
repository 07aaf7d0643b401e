//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Every request is signed with a fresh nonce; see [`crate::auth`].

mod types;

pub use types::*;

use rust_decimal::Decimal;

use crate::error::BitstampError;
use crate::rest::BitstampRestClient;
use crate::rest::endpoints::private;

#[derive(serde::Serialize)]
struct Empty {}

impl BitstampRestClient {
    /// Get the account balance.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitstamp_api_client::rest::BitstampRestClient;
    /// use bitstamp_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret", "123456"));
    ///     let client = BitstampRestClient::builder().credentials(credentials).build();
    ///
    ///     let balance = client.balance().await?;
    ///     println!("Available USD: {:?}", balance.available("usd"));
    ///     Ok(())
    /// }
    /// ```
    pub async fn balance(&self) -> Result<AccountBalance, BitstampError> {
        self.private_post(private::BALANCE, None, &Empty {}).await
    }

    /// Get the status of an order by ID.
    pub async fn order_status(&self, id: &str) -> Result<OrderStatusInfo, BitstampError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            id: &'a str,
        }
        self.private_post(private::ORDER_STATUS, None, &Params { id })
            .await
    }

    /// Get the user's transaction history for the configured pair.
    ///
    /// The pair is sent both as a path segment and as a `pair` body field,
    /// matching what the endpoint expects for signed history requests.
    pub async fn user_transactions(
        &self,
        request: Option<&UserTransactionsRequest>,
    ) -> Result<Vec<UserTransaction>, BitstampError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            offset: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            limit: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            sort: Option<SortOrder>,
            pair: &'a str,
        }
        let pair = self.pair().to_string();
        let params = Params {
            offset: request.and_then(|r| r.offset),
            limit: request.and_then(|r| r.limit),
            sort: request.and_then(|r| r.sort),
            pair: &pair,
        };
        self.private_post(private::USER_TRANSACTIONS, Some(&pair), &params)
            .await
    }

    /// Get all open orders.
    pub async fn open_orders(&self) -> Result<Vec<OpenOrder>, BitstampError> {
        self.private_post(private::OPEN_ORDERS, None, &Empty {})
            .await
    }

    /// Cancel an order by ID.
    ///
    /// Returns `true` when the order was cancelled.
    pub async fn cancel_order(&self, id: &str) -> Result<bool, BitstampError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            id: &'a str,
        }
        self.private_post(private::CANCEL_ORDER, None, &Params { id })
            .await
    }

    /// Place a buy limit order on the configured pair.
    ///
    /// # Arguments
    ///
    /// * `amount` - Amount of the base asset to buy
    /// * `price` - Limit price
    pub async fn buy(&self, amount: Decimal, price: Decimal) -> Result<PlacedOrder, BitstampError> {
        self.limit_order(private::BUY, amount, price).await
    }

    /// Place a sell limit order on the configured pair.
    ///
    /// # Arguments
    ///
    /// * `amount` - Amount of the base asset to sell
    /// * `price` - Limit price
    pub async fn sell(
        &self,
        amount: Decimal,
        price: Decimal,
    ) -> Result<PlacedOrder, BitstampError> {
        self.limit_order(private::SELL, amount, price).await
    }

    async fn limit_order(
        &self,
        action: &str,
        amount: Decimal,
        price: Decimal,
    ) -> Result<PlacedOrder, BitstampError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            amount: Decimal,
            price: Decimal,
            pair: &'a str,
        }
        let pair = self.pair().to_string();
        self.private_post(
            action,
            Some(&pair),
            &Params {
                amount,
                price,
                pair: &pair,
            },
        )
        .await
    }

    /// List the account's withdrawal requests.
    pub async fn withdrawal_requests(&self) -> Result<Vec<WithdrawalRequest>, BitstampError> {
        self.private_post(private::WITHDRAWAL_REQUESTS, None, &Empty {})
            .await
    }

    /// Withdraw bitcoin to an address.
    pub async fn bitcoin_withdrawal(
        &self,
        amount: Decimal,
        address: &str,
    ) -> Result<WithdrawalId, BitstampError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            amount: Decimal,
            address: &'a str,
        }
        self.private_post(
            private::BITCOIN_WITHDRAWAL,
            None,
            &Params { amount, address },
        )
        .await
    }

    /// Withdraw ripple assets to an address.
    ///
    /// # Arguments
    ///
    /// * `amount` - Amount to withdraw
    /// * `address` - Destination ripple address
    /// * `currency` - Currency to withdraw over the ripple network
    pub async fn ripple_withdrawal(
        &self,
        amount: Decimal,
        address: &str,
        currency: &str,
    ) -> Result<WithdrawalId, BitstampError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            amount: Decimal,
            address: &'a str,
            currency: &'a str,
        }
        self.private_post(
            private::RIPPLE_WITHDRAWAL,
            None,
            &Params {
                amount,
                address,
                currency,
            },
        )
        .await
    }

    /// Get the account's bitcoin deposit address.
    pub async fn bitcoin_deposit_address(&self) -> Result<String, BitstampError> {
        self.private_post(private::BITCOIN_DEPOSIT_ADDRESS, None, &Empty {})
            .await
    }

    /// Get the account's ripple deposit address.
    pub async fn ripple_address(&self) -> Result<DepositAddress, BitstampError> {
        self.private_post(private::RIPPLE_ADDRESS, None, &Empty {})
            .await
    }

    /// List bitcoin deposits awaiting confirmation.
    pub async fn unconfirmed_btc(&self) -> Result<Vec<UnconfirmedDeposit>, BitstampError> {
        self.private_post(private::UNCONFIRMED_BTC, None, &Empty {})
            .await
    }
}
