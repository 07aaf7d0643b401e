//! Bitstamp REST API endpoint constants.
//!
//! Endpoints are "actions" inserted into `/api/{action}/` paths, optionally
//! followed by a trading-pair segment.

/// Base URL for the Bitstamp REST API.
pub const BITSTAMP_BASE_URL: &str = "https://www.bitstamp.net";

/// Default trading pair scoping market-data and trading requests.
pub const DEFAULT_PAIR: &str = "btcusd";

/// Public endpoints (no authentication required).
pub mod public {
    /// Get recent transactions for a pair.
    pub const TRANSACTIONS: &str = "v2/transactions";
    /// Get ticker for a pair.
    pub const TICKER: &str = "v2/ticker";
    /// Get order book for a pair.
    pub const ORDER_BOOK: &str = "v2/order_book";
    /// Get the EUR/USD conversion rate.
    pub const EUR_USD: &str = "eur_usd";
}

/// Private endpoints (authentication required).
pub mod private {
    // Account endpoints
    /// Get account balance.
    pub const BALANCE: &str = "balance";
    /// Get the status of an order.
    pub const ORDER_STATUS: &str = "order_status";
    /// Get user transaction history.
    pub const USER_TRANSACTIONS: &str = "user_transactions";
    /// Get open orders.
    pub const OPEN_ORDERS: &str = "v2/open_orders";

    // Trading endpoints
    /// Cancel an order.
    pub const CANCEL_ORDER: &str = "cancel_order";
    /// Place a buy limit order.
    pub const BUY: &str = "v2/buy";
    /// Place a sell limit order.
    pub const SELL: &str = "v2/sell";

    // Funding endpoints
    /// List withdrawal requests.
    pub const WITHDRAWAL_REQUESTS: &str = "withdrawal_requests";
    /// Withdraw bitcoin.
    pub const BITCOIN_WITHDRAWAL: &str = "bitcoin_withdrawal";
    /// Withdraw ripple.
    pub const RIPPLE_WITHDRAWAL: &str = "ripple_withdrawal";
    /// Get the bitcoin deposit address.
    pub const BITCOIN_DEPOSIT_ADDRESS: &str = "bitcoin_deposit_address";
    /// Get the ripple deposit address.
    pub const RIPPLE_ADDRESS: &str = "ripple_address";
    /// List unconfirmed bitcoin deposits.
    pub const UNCONFIRMED_BTC: &str = "unconfirmed_btc";
}
