//! Common domain types for the Bitstamp API.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::serde_helpers::numeric_code;

/// Buy or sell side of an order or transaction.
///
/// Bitstamp encodes the side as `0` (buy) or `1` (sell), sometimes as a
/// JSON number and sometimes as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// The numeric wire code for this side.
    pub fn code(&self) -> u8 {
        match self {
            OrderSide::Buy => 0,
            OrderSide::Sell => 1,
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

impl Serialize for OrderSide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code().to_string())
    }
}

impl<'de> Deserialize<'de> for OrderSide {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match numeric_code(deserializer)? {
            0 => Ok(OrderSide::Buy),
            1 => Ok(OrderSide::Sell),
            other => Err(serde::de::Error::custom(format!(
                "unknown order side code: {other}"
            ))),
        }
    }
}

/// Category of a user transaction.
///
/// Bitstamp encodes the category as `0` (deposit), `1` (withdrawal) or
/// `2` (market trade).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserTransactionType {
    /// Funds deposited into the account
    Deposit,
    /// Funds withdrawn from the account
    Withdrawal,
    /// A market trade
    MarketTrade,
}

impl UserTransactionType {
    /// The numeric wire code for this transaction type.
    pub fn code(&self) -> u8 {
        match self {
            UserTransactionType::Deposit => 0,
            UserTransactionType::Withdrawal => 1,
            UserTransactionType::MarketTrade => 2,
        }
    }
}

impl std::fmt::Display for UserTransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserTransactionType::Deposit => write!(f, "deposit"),
            UserTransactionType::Withdrawal => write!(f, "withdrawal"),
            UserTransactionType::MarketTrade => write!(f, "market_trade"),
        }
    }
}

impl Serialize for UserTransactionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code().to_string())
    }
}

impl<'de> Deserialize<'de> for UserTransactionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match numeric_code(deserializer)? {
            0 => Ok(UserTransactionType::Deposit),
            1 => Ok(UserTransactionType::Withdrawal),
            2 => Ok(UserTransactionType::MarketTrade),
            other => Err(serde::de::Error::custom(format!(
                "unknown user transaction type code: {other}"
            ))),
        }
    }
}

/// A single price level of the order book.
///
/// Bitstamp serializes levels as two-element `[price, amount]` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "(Decimal, Decimal)")]
pub struct OrderBookLevel {
    /// Price of the level
    pub price: Decimal,
    /// Amount offered or requested at this price
    pub amount: Decimal,
}

impl From<(Decimal, Decimal)> for OrderBookLevel {
    fn from((price, amount): (Decimal, Decimal)) -> Self {
        Self { price, amount }
    }
}
