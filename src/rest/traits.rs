//! Trait definition for the Bitstamp REST API client.
//!
//! This module provides the `BitstampClient` trait which abstracts all REST
//! API operations. This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., a caching wrapper)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use bitstamp_api_client::rest::{BitstampClient, BitstampRestClient};
//!
//! async fn log_last_price<C: BitstampClient>(client: &C) -> Result<(), bitstamp_api_client::BitstampError> {
//!     let ticker = client.ticker().await?;
//!     println!("Last price: {}", ticker.last);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use rust_decimal::Decimal;

use crate::error::BitstampError;
use crate::rest::BitstampRestClient;
use crate::rest::private::{
    AccountBalance, DepositAddress, OpenOrder, OrderStatusInfo, PlacedOrder, UnconfirmedDeposit,
    UserTransaction, UserTransactionsRequest, WithdrawalId, WithdrawalRequest,
};
use crate::rest::public::{
    ConversionRate, OrderBook, OrderBookRequest, Ticker, Transaction, TransactionsRequest,
};

/// Trait defining all Bitstamp REST API operations.
///
/// All methods are async and return `Result<T, BitstampError>`.
pub trait BitstampClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get recent transactions for the configured pair.
    fn transactions(
        &self,
        request: Option<&TransactionsRequest>,
    ) -> impl Future<Output = Result<Vec<Transaction>, BitstampError>> + Send;

    /// Get the ticker for the configured pair.
    fn ticker(&self) -> impl Future<Output = Result<Ticker, BitstampError>> + Send;

    /// Get the order book for the configured pair.
    fn order_book(
        &self,
        request: Option<&OrderBookRequest>,
    ) -> impl Future<Output = Result<OrderBook, BitstampError>> + Send;

    /// Get the EUR/USD conversion rate.
    fn eur_usd(&self) -> impl Future<Output = Result<ConversionRate, BitstampError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get the account balance.
    fn balance(&self) -> impl Future<Output = Result<AccountBalance, BitstampError>> + Send;

    /// Get the status of an order by ID.
    fn order_status(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<OrderStatusInfo, BitstampError>> + Send;

    /// Get the user's transaction history for the configured pair.
    fn user_transactions(
        &self,
        request: Option<&UserTransactionsRequest>,
    ) -> impl Future<Output = Result<Vec<UserTransaction>, BitstampError>> + Send;

    /// Get all open orders.
    fn open_orders(&self) -> impl Future<Output = Result<Vec<OpenOrder>, BitstampError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Cancel an order by ID.
    fn cancel_order(&self, id: &str) -> impl Future<Output = Result<bool, BitstampError>> + Send;

    /// Place a buy limit order on the configured pair.
    fn buy(
        &self,
        amount: Decimal,
        price: Decimal,
    ) -> impl Future<Output = Result<PlacedOrder, BitstampError>> + Send;

    /// Place a sell limit order on the configured pair.
    fn sell(
        &self,
        amount: Decimal,
        price: Decimal,
    ) -> impl Future<Output = Result<PlacedOrder, BitstampError>> + Send;

    // ========== Private Endpoints - Funding ==========

    /// List the account's withdrawal requests.
    fn withdrawal_requests(
        &self,
    ) -> impl Future<Output = Result<Vec<WithdrawalRequest>, BitstampError>> + Send;

    /// Withdraw bitcoin to an address.
    fn bitcoin_withdrawal(
        &self,
        amount: Decimal,
        address: &str,
    ) -> impl Future<Output = Result<WithdrawalId, BitstampError>> + Send;

    /// Withdraw ripple assets to an address.
    fn ripple_withdrawal(
        &self,
        amount: Decimal,
        address: &str,
        currency: &str,
    ) -> impl Future<Output = Result<WithdrawalId, BitstampError>> + Send;

    /// Get the account's bitcoin deposit address.
    fn bitcoin_deposit_address(
        &self,
    ) -> impl Future<Output = Result<String, BitstampError>> + Send;

    /// Get the account's ripple deposit address.
    fn ripple_address(&self) -> impl Future<Output = Result<DepositAddress, BitstampError>> + Send;

    /// List bitcoin deposits awaiting confirmation.
    fn unconfirmed_btc(
        &self,
    ) -> impl Future<Output = Result<Vec<UnconfirmedDeposit>, BitstampError>> + Send;
}

impl BitstampClient for BitstampRestClient {
    // ========== Public Endpoints ==========

    async fn transactions(
        &self,
        request: Option<&TransactionsRequest>,
    ) -> Result<Vec<Transaction>, BitstampError> {
        BitstampRestClient::transactions(self, request).await
    }

    async fn ticker(&self) -> Result<Ticker, BitstampError> {
        BitstampRestClient::ticker(self).await
    }

    async fn order_book(
        &self,
        request: Option<&OrderBookRequest>,
    ) -> Result<OrderBook, BitstampError> {
        BitstampRestClient::order_book(self, request).await
    }

    async fn eur_usd(&self) -> Result<ConversionRate, BitstampError> {
        BitstampRestClient::eur_usd(self).await
    }

    // ========== Private Endpoints - Account ==========

    async fn balance(&self) -> Result<AccountBalance, BitstampError> {
        BitstampRestClient::balance(self).await
    }

    async fn order_status(&self, id: &str) -> Result<OrderStatusInfo, BitstampError> {
        BitstampRestClient::order_status(self, id).await
    }

    async fn user_transactions(
        &self,
        request: Option<&UserTransactionsRequest>,
    ) -> Result<Vec<UserTransaction>, BitstampError> {
        BitstampRestClient::user_transactions(self, request).await
    }

    async fn open_orders(&self) -> Result<Vec<OpenOrder>, BitstampError> {
        BitstampRestClient::open_orders(self).await
    }

    // ========== Private Endpoints - Trading ==========

    async fn cancel_order(&self, id: &str) -> Result<bool, BitstampError> {
        BitstampRestClient::cancel_order(self, id).await
    }

    async fn buy(&self, amount: Decimal, price: Decimal) -> Result<PlacedOrder, BitstampError> {
        BitstampRestClient::buy(self, amount, price).await
    }

    async fn sell(&self, amount: Decimal, price: Decimal) -> Result<PlacedOrder, BitstampError> {
        BitstampRestClient::sell(self, amount, price).await
    }

    // ========== Private Endpoints - Funding ==========

    async fn withdrawal_requests(&self) -> Result<Vec<WithdrawalRequest>, BitstampError> {
        BitstampRestClient::withdrawal_requests(self).await
    }

    async fn bitcoin_withdrawal(
        &self,
        amount: Decimal,
        address: &str,
    ) -> Result<WithdrawalId, BitstampError> {
        BitstampRestClient::bitcoin_withdrawal(self, amount, address).await
    }

    async fn ripple_withdrawal(
        &self,
        amount: Decimal,
        address: &str,
        currency: &str,
    ) -> Result<WithdrawalId, BitstampError> {
        BitstampRestClient::ripple_withdrawal(self, amount, address, currency).await
    }

    async fn bitcoin_deposit_address(&self) -> Result<String, BitstampError> {
        BitstampRestClient::bitcoin_deposit_address(self).await
    }

    async fn ripple_address(&self) -> Result<DepositAddress, BitstampError> {
        BitstampRestClient::ripple_address(self).await
    }

    async fn unconfirmed_btc(&self) -> Result<Vec<UnconfirmedDeposit>, BitstampError> {
        BitstampRestClient::unconfirmed_btc(self).await
    }
}

/// Object-safe version of [`BitstampClient`].
///
/// This allows using `BitstampClient` as a trait object via
/// `Box<dyn BitstampClientExt>`.
#[allow(async_fn_in_trait)]
pub trait BitstampClientExt: Send + Sync {
    // ========== Public Endpoints ==========

    async fn transactions(
        &self,
        request: Option<&TransactionsRequest>,
    ) -> Result<Vec<Transaction>, BitstampError>;
    async fn ticker(&self) -> Result<Ticker, BitstampError>;
    async fn order_book(
        &self,
        request: Option<&OrderBookRequest>,
    ) -> Result<OrderBook, BitstampError>;
    async fn eur_usd(&self) -> Result<ConversionRate, BitstampError>;

    // ========== Private Endpoints ==========

    async fn balance(&self) -> Result<AccountBalance, BitstampError>;
    async fn order_status(&self, id: &str) -> Result<OrderStatusInfo, BitstampError>;
    async fn user_transactions(
        &self,
        request: Option<&UserTransactionsRequest>,
    ) -> Result<Vec<UserTransaction>, BitstampError>;
    async fn open_orders(&self) -> Result<Vec<OpenOrder>, BitstampError>;
    async fn cancel_order(&self, id: &str) -> Result<bool, BitstampError>;
    async fn buy(&self, amount: Decimal, price: Decimal) -> Result<PlacedOrder, BitstampError>;
    async fn sell(&self, amount: Decimal, price: Decimal) -> Result<PlacedOrder, BitstampError>;
    async fn withdrawal_requests(&self) -> Result<Vec<WithdrawalRequest>, BitstampError>;
    async fn bitcoin_withdrawal(
        &self,
        amount: Decimal,
        address: &str,
    ) -> Result<WithdrawalId, BitstampError>;
    async fn ripple_withdrawal(
        &self,
        amount: Decimal,
        address: &str,
        currency: &str,
    ) -> Result<WithdrawalId, BitstampError>;
    async fn bitcoin_deposit_address(&self) -> Result<String, BitstampError>;
    async fn ripple_address(&self) -> Result<DepositAddress, BitstampError>;
    async fn unconfirmed_btc(&self) -> Result<Vec<UnconfirmedDeposit>, BitstampError>;
}

impl<T: BitstampClient> BitstampClientExt for T {
    async fn transactions(
        &self,
        request: Option<&TransactionsRequest>,
    ) -> Result<Vec<Transaction>, BitstampError> {
        BitstampClient::transactions(self, request).await
    }

    async fn ticker(&self) -> Result<Ticker, BitstampError> {
        BitstampClient::ticker(self).await
    }

    async fn order_book(
        &self,
        request: Option<&OrderBookRequest>,
    ) -> Result<OrderBook, BitstampError> {
        BitstampClient::order_book(self, request).await
    }

    async fn eur_usd(&self) -> Result<ConversionRate, BitstampError> {
        BitstampClient::eur_usd(self).await
    }

    async fn balance(&self) -> Result<AccountBalance, BitstampError> {
        BitstampClient::balance(self).await
    }

    async fn order_status(&self, id: &str) -> Result<OrderStatusInfo, BitstampError> {
        BitstampClient::order_status(self, id).await
    }

    async fn user_transactions(
        &self,
        request: Option<&UserTransactionsRequest>,
    ) -> Result<Vec<UserTransaction>, BitstampError> {
        BitstampClient::user_transactions(self, request).await
    }

    async fn open_orders(&self) -> Result<Vec<OpenOrder>, BitstampError> {
        BitstampClient::open_orders(self).await
    }

    async fn cancel_order(&self, id: &str) -> Result<bool, BitstampError> {
        BitstampClient::cancel_order(self, id).await
    }

    async fn buy(&self, amount: Decimal, price: Decimal) -> Result<PlacedOrder, BitstampError> {
        BitstampClient::buy(self, amount, price).await
    }

    async fn sell(&self, amount: Decimal, price: Decimal) -> Result<PlacedOrder, BitstampError> {
        BitstampClient::sell(self, amount, price).await
    }

    async fn withdrawal_requests(&self) -> Result<Vec<WithdrawalRequest>, BitstampError> {
        BitstampClient::withdrawal_requests(self).await
    }

    async fn bitcoin_withdrawal(
        &self,
        amount: Decimal,
        address: &str,
    ) -> Result<WithdrawalId, BitstampError> {
        BitstampClient::bitcoin_withdrawal(self, amount, address).await
    }

    async fn ripple_withdrawal(
        &self,
        amount: Decimal,
        address: &str,
        currency: &str,
    ) -> Result<WithdrawalId, BitstampError> {
        BitstampClient::ripple_withdrawal(self, amount, address, currency).await
    }

    async fn bitcoin_deposit_address(&self) -> Result<String, BitstampError> {
        BitstampClient::bitcoin_deposit_address(self).await
    }

    async fn ripple_address(&self) -> Result<DepositAddress, BitstampError> {
        BitstampClient::ripple_address(self).await
    }

    async fn unconfirmed_btc(&self) -> Result<Vec<UnconfirmedDeposit>, BitstampError> {
        BitstampClient::unconfirmed_btc(self).await
    }
}
