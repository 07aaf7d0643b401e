//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::common::{OrderBookLevel, OrderSide};
use crate::types::serde_helpers::id_string;

/// Request parameters for recent transactions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionsRequest {
    /// Time window to return transactions for: "minute", "hour" (default)
    /// or "day".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeWindow>,
}

/// Time window filter for the transactions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    /// Transactions from the last minute
    Minute,
    /// Transactions from the last hour
    Hour,
    /// Transactions from the last day
    Day,
}

/// A single market transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Unix timestamp of the transaction
    pub date: String,
    /// Transaction ID
    #[serde(deserialize_with = "id_string::deserialize")]
    pub tid: String,
    /// Price the trade executed at
    pub price: Decimal,
    /// Amount traded
    pub amount: Decimal,
    /// Side of the taker order
    #[serde(rename = "type")]
    pub side: OrderSide,
}

/// Ticker snapshot for a trading pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Last traded price
    pub last: Decimal,
    /// Highest price of the last 24 hours
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Lowest price of the last 24 hours
    #[serde(default)]
    pub low: Option<Decimal>,
    /// Volume-weighted average price of the last 24 hours
    #[serde(default)]
    pub vwap: Option<Decimal>,
    /// Volume of the last 24 hours
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Highest buy order price
    #[serde(default)]
    pub bid: Option<Decimal>,
    /// Lowest sell order price
    #[serde(default)]
    pub ask: Option<Decimal>,
    /// Unix timestamp of the snapshot
    #[serde(default)]
    pub timestamp: Option<String>,
    /// First price of the day
    #[serde(default)]
    pub open: Option<Decimal>,
}

/// Request parameters for the order book.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderBookRequest {
    /// Group orders at the same price into one level (1, default) or list
    /// them individually (0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<u8>,
}

/// Order book snapshot for a trading pair.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Unix timestamp of the snapshot
    pub timestamp: String,
    /// Buy side, best bid first
    pub bids: Vec<OrderBookLevel>,
    /// Sell side, best ask first
    pub asks: Vec<OrderBookLevel>,
}

/// EUR/USD conversion rate.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionRate {
    /// Rate applied when buying
    pub buy: Decimal,
    /// Rate applied when selling
    pub sell: Decimal,
}
