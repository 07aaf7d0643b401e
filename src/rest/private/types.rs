//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::common::{OrderSide, UserTransactionType};
use crate::types::serde_helpers::{empty_string_as_none, id_string, numeric_code};

/// Account balance.
///
/// Bitstamp reports one flat object of `{currency}_balance`,
/// `{currency}_available`, `{currency}_reserved` fields plus the account
/// trading `fee`, all as decimal strings. The set of currencies grows over
/// time, so amounts are kept as a map with typed accessors.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalance {
    /// All balance fields keyed by their wire name.
    #[serde(flatten)]
    pub amounts: HashMap<String, Decimal>,
}

impl AccountBalance {
    /// Total balance for a currency (e.g. "btc").
    pub fn balance(&self, currency: &str) -> Option<Decimal> {
        self.amounts.get(&format!("{currency}_balance")).copied()
    }

    /// Available (unreserved) balance for a currency.
    pub fn available(&self, currency: &str) -> Option<Decimal> {
        self.amounts.get(&format!("{currency}_available")).copied()
    }

    /// Balance reserved by open orders for a currency.
    pub fn reserved(&self, currency: &str) -> Option<Decimal> {
        self.amounts.get(&format!("{currency}_reserved")).copied()
    }

    /// The account's trading fee percentage.
    pub fn fee(&self) -> Option<Decimal> {
        self.amounts.get("fee").copied()
    }
}

/// Status of a single order, with its fills.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderStatusInfo {
    /// "In Queue", "Open" or "Finished"
    pub status: String,
    /// Fills executed against this order
    #[serde(default)]
    pub transactions: Vec<OrderTransaction>,
}

/// A fill executed against an order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderTransaction {
    /// Transaction ID
    #[serde(deserialize_with = "id_string::deserialize")]
    pub tid: String,
    /// Price the fill executed at
    pub price: Decimal,
    /// Fee charged for the fill
    pub fee: Decimal,
    /// Date and time of the fill
    pub datetime: String,
    /// Per-currency amounts of the fill (e.g. "usd", "btc")
    #[serde(flatten)]
    pub amounts: HashMap<String, Decimal>,
}

/// Request parameters for user transaction history.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserTransactionsRequest {
    /// Skip this many transactions before returning results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Maximum number of transactions to return (default 100, max 1000)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Result ordering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

/// Result ordering for paged history requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    /// Oldest first
    #[serde(rename = "asc")]
    Ascending,
    /// Newest first
    #[serde(rename = "desc")]
    Descending,
}

/// A single entry of the user's transaction history.
#[derive(Debug, Clone, Deserialize)]
pub struct UserTransaction {
    /// Date and time of the transaction
    pub datetime: String,
    /// Transaction ID
    #[serde(deserialize_with = "id_string::deserialize")]
    pub id: String,
    /// Category: deposit, withdrawal or market trade
    #[serde(rename = "type")]
    pub transaction_type: UserTransactionType,
    /// Fee charged, if any
    #[serde(default)]
    pub fee: Option<Decimal>,
    /// The order this trade executed against; absent for deposits and
    /// withdrawals
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub order_id: Option<String>,
    /// Per-currency amounts moved (e.g. "usd", "btc") and the exchange
    /// rate (e.g. "btc_usd"); negative values denote outflows
    #[serde(flatten)]
    pub amounts: HashMap<String, Decimal>,
}

/// An open order resting on the book.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenOrder {
    /// Order ID
    #[serde(deserialize_with = "id_string::deserialize")]
    pub id: String,
    /// Date and time the order was placed
    pub datetime: String,
    /// Buy or sell
    #[serde(rename = "type")]
    pub side: OrderSide,
    /// Limit price
    pub price: Decimal,
    /// Remaining amount
    pub amount: Decimal,
    /// The pair the order rests on, when the endpoint reports it
    #[serde(default)]
    pub currency_pair: Option<String>,
}

/// Acknowledgement of a newly placed limit order.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacedOrder {
    /// Order ID
    #[serde(deserialize_with = "id_string::deserialize")]
    pub id: String,
    /// Date and time the order was accepted
    pub datetime: String,
    /// Buy or sell
    #[serde(rename = "type")]
    pub side: OrderSide,
    /// Limit price
    pub price: Decimal,
    /// Ordered amount
    pub amount: Decimal,
}

/// A pending or settled withdrawal request.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalRequest {
    /// Withdrawal ID
    #[serde(deserialize_with = "id_string::deserialize")]
    pub id: String,
    /// Date and time the withdrawal was requested
    pub datetime: String,
    /// Withdrawal kind code (0 SEPA, 1 bitcoin, 2 wire transfer, 14 ripple)
    #[serde(rename = "type", deserialize_with = "numeric_code")]
    pub withdrawal_type: u64,
    /// Amount withdrawn
    pub amount: Decimal,
    /// Status code (0 open, 1 in process, 2 finished, 3 canceled, 4 failed)
    #[serde(deserialize_with = "numeric_code")]
    pub status: u64,
    /// Destination address for crypto withdrawals
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub address: Option<String>,
    /// On-chain transaction ID, once broadcast
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub transaction_id: Option<String>,
}

/// Identifier of a newly created withdrawal.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalId {
    /// Withdrawal ID
    #[serde(deserialize_with = "id_string::deserialize")]
    pub id: String,
}

/// A deposit address for a crypto asset.
#[derive(Debug, Clone, Deserialize)]
pub struct DepositAddress {
    /// The address to deposit to
    pub address: String,
}

/// A bitcoin deposit seen on-chain but not yet credited.
#[derive(Debug, Clone, Deserialize)]
pub struct UnconfirmedDeposit {
    /// Amount of the deposit
    pub amount: Decimal,
    /// Address the deposit was sent to
    pub address: String,
    /// Number of confirmations so far
    #[serde(deserialize_with = "numeric_code")]
    pub confirmations: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_balance_accessors() {
        let json = r#"{
            "usd_balance": "100.00",
            "btc_balance": "1.50000000",
            "usd_reserved": "10.00",
            "btc_reserved": "0.00000000",
            "usd_available": "90.00",
            "btc_available": "1.50000000",
            "fee": "0.5000"
        }"#;
        let balance: AccountBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.available("usd").unwrap().to_string(), "90.00");
        assert_eq!(balance.reserved("usd").unwrap().to_string(), "10.00");
        assert_eq!(balance.fee().unwrap().to_string(), "0.5000");
        assert!(balance.balance("eth").is_none());
    }

    #[test]
    fn test_order_status_with_fills() {
        let json = r#"{
            "status": "Finished",
            "transactions": [
                {"tid": 1234, "usd": "10.00", "price": "100.00", "fee": "0.05", "btc": "0.10000000", "datetime": "2023-12-01 10:00:00"}
            ]
        }"#;
        let status: OrderStatusInfo = serde_json::from_str(json).unwrap();
        assert_eq!(status.status, "Finished");
        assert_eq!(status.transactions[0].tid, "1234");
        assert_eq!(status.transactions[0].amounts["btc"].to_string(), "0.10000000");
    }

    #[test]
    fn test_user_transaction_trade() {
        let json = r#"{
            "datetime": "2023-12-01 10:00:00",
            "id": 9999,
            "type": "2",
            "usd": "-10.00",
            "btc": "0.10000000",
            "btc_usd": "100.00",
            "fee": "0.05",
            "order_id": "1234"
        }"#;
        let tx: UserTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.transaction_type, UserTransactionType::MarketTrade);
        assert_eq!(tx.order_id.as_deref(), Some("1234"));
        assert!(tx.amounts["usd"].is_sign_negative());
    }

    #[test]
    fn test_user_transaction_deposit_without_order() {
        let json = r#"{
            "datetime": "2023-12-01 10:00:00",
            "id": 9998,
            "type": 0,
            "usd": "50.00",
            "order_id": ""
        }"#;
        let tx: UserTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.transaction_type, UserTransactionType::Deposit);
        assert!(tx.order_id.is_none());
        assert!(tx.fee.is_none());
    }

    #[test]
    fn test_user_transactions_request_compaction() {
        let request = UserTransactionsRequest {
            offset: Some(10),
            limit: None,
            sort: Some(SortOrder::Descending),
        };
        let encoded = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(encoded, "offset=10&sort=desc");
    }

    #[test]
    fn test_withdrawal_request_codes() {
        let json = r#"{
            "id": "555",
            "datetime": "2023-12-01 10:00:00",
            "type": "1",
            "amount": "0.50000000",
            "status": 2,
            "address": "1BitcoinAddress",
            "transaction_id": ""
        }"#;
        let withdrawal: WithdrawalRequest = serde_json::from_str(json).unwrap();
        assert_eq!(withdrawal.withdrawal_type, 1);
        assert_eq!(withdrawal.status, 2);
        assert!(withdrawal.transaction_id.is_none());
    }
}
