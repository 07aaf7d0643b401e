use std::sync::Arc;

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bitstamp_api_client::auth::{Credentials, NonceProvider, StaticCredentials, sign_request};
use bitstamp_api_client::error::BitstampError;
use bitstamp_api_client::rest::private::{SortOrder, UserTransactionsRequest};
use bitstamp_api_client::rest::{BitstampClientExt, BitstampRestClient};
use rust_decimal::Decimal;

/// Nonce provider pinned to one value, so signatures are predictable.
struct FixedNonce(&'static str);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> String {
        self.0.to_string()
    }
}

fn build_client(server: &MockServer) -> BitstampRestClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", "test_secret", "123456"));
    BitstampRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build()
}

#[tokio::test]
async fn test_buy_posts_signed_form_body() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "id": 55,
        "datetime": "2023-12-01 10:00:00",
        "type": "0",
        "price": "100",
        "amount": "1"
    });

    // With a pinned nonce the signature is fully determined.
    let nonce = "17000000000000000";
    let expected_signature =
        sign_request(&Credentials::new("test_key", "test_secret", "123456"), nonce).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v2/buy/btcusd/"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("key=test_key"))
        .and(body_string_contains(format!("signature={expected_signature}")))
        .and(body_string_contains(format!("nonce={nonce}")))
        .and(body_string_contains("amount=1"))
        .and(body_string_contains("price=100"))
        .and(body_string_contains("pair=btcusd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let credentials = Arc::new(StaticCredentials::new("test_key", "test_secret", "123456"));
    let client = BitstampRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .nonce_provider(Arc::new(FixedNonce(nonce)))
        .build();

    let order = client.buy(Decimal::from(1), Decimal::from(100)).await.unwrap();
    assert_eq!(order.id, "55");
    assert_eq!(order.side, bitstamp_api_client::OrderSide::Buy);
}

#[tokio::test]
async fn test_buy_non_200_carries_status_and_body_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/buy/btcusd/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client
        .buy(Decimal::from(1), Decimal::from(100))
        .await
        .unwrap_err();
    match error {
        BitstampError::Status { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "bad request");
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_private_call_without_credentials_makes_no_request() {
    let server = MockServer::start().await;

    // The mock records any request that arrives; none may.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = BitstampRestClient::builder().base_url(server.uri()).build();
    let error = client.balance().await.unwrap_err();
    assert!(matches!(error, BitstampError::MissingCredentials));

    server.verify().await;
}

#[tokio::test]
async fn test_balance() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "usd_balance": "100.00",
        "btc_balance": "1.50000000",
        "usd_available": "90.00",
        "btc_available": "1.50000000",
        "usd_reserved": "10.00",
        "btc_reserved": "0.00000000",
        "fee": "0.5000"
    });

    Mock::given(method("POST"))
        .and(path("/api/balance/"))
        .and(body_string_contains("key=test_key"))
        .and(body_string_contains("signature="))
        .and(body_string_contains("nonce="))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let balance = client.balance().await.unwrap();
    assert_eq!(balance.available("usd").unwrap().to_string(), "90.00");
    assert_eq!(balance.fee().unwrap().to_string(), "0.5000");
}

#[tokio::test]
async fn test_private_error_flag_under_http_200() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "error": "Invalid nonce" });

    Mock::given(method("POST"))
        .and(path("/api/balance/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.balance().await.unwrap_err();
    match error {
        BitstampError::Api(api_error) => assert!(api_error.is_invalid_nonce()),
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_order_status() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "Finished",
        "transactions": [
            {"tid": 1234, "usd": "10.00", "price": "100.00", "fee": "0.05", "btc": "0.10000000", "datetime": "2023-12-01 10:00:00"}
        ]
    });

    Mock::given(method("POST"))
        .and(path("/api/order_status/"))
        .and(body_string_contains("id=55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let status = client.order_status("55").await.unwrap();
    assert_eq!(status.status, "Finished");
    assert_eq!(status.transactions.len(), 1);
}

#[tokio::test]
async fn test_user_transactions_sends_pair_in_path_and_body() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {
            "datetime": "2023-12-01 10:00:00",
            "id": 9999,
            "type": "2",
            "usd": "-10.00",
            "btc": "0.10000000",
            "btc_usd": "100.00",
            "fee": "0.05",
            "order_id": "1234"
        }
    ]);

    Mock::given(method("POST"))
        .and(path("/api/user_transactions/btcusd/"))
        .and(body_string_contains("limit=5"))
        .and(body_string_contains("sort=desc"))
        .and(body_string_contains("pair=btcusd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = UserTransactionsRequest {
        offset: None,
        limit: Some(5),
        sort: Some(SortOrder::Descending),
    };
    let transactions = client.user_transactions(Some(&request)).await.unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].order_id.as_deref(), Some("1234"));
}

#[tokio::test]
async fn test_open_orders() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {"id": "101", "datetime": "2023-12-01 10:00:00", "type": "1", "price": "105.00", "amount": "0.50000000", "currency_pair": "BTC/USD"}
    ]);

    Mock::given(method("POST"))
        .and(path("/api/v2/open_orders/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let orders = client.open_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].side, bitstamp_api_client::OrderSide::Sell);
}

#[tokio::test]
async fn test_cancel_order_returns_bool() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/cancel_order/"))
        .and(body_string_contains("id=101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(true)))
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert!(client.cancel_order("101").await.unwrap());
}

#[tokio::test]
async fn test_bitcoin_withdrawal() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "id": 555 });

    Mock::given(method("POST"))
        .and(path("/api/bitcoin_withdrawal/"))
        .and(body_string_contains("amount=0.5"))
        .and(body_string_contains("address=1BitcoinAddress"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let withdrawal = client
        .bitcoin_withdrawal("0.5".parse().unwrap(), "1BitcoinAddress")
        .await
        .unwrap();
    assert_eq!(withdrawal.id, "555");
}

#[tokio::test]
async fn test_ripple_withdrawal_with_currency() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "id": "556" });

    Mock::given(method("POST"))
        .and(path("/api/ripple_withdrawal/"))
        .and(body_string_contains("amount=25"))
        .and(body_string_contains("address=rRippleAddress"))
        .and(body_string_contains("currency=USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let withdrawal = client
        .ripple_withdrawal(Decimal::from(25), "rRippleAddress", "USD")
        .await
        .unwrap();
    assert_eq!(withdrawal.id, "556");
}

#[tokio::test]
async fn test_bitcoin_deposit_address_is_a_bare_string() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/bitcoin_deposit_address/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!("1DepositAddress")),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let address = client.bitcoin_deposit_address().await.unwrap();
    assert_eq!(address, "1DepositAddress");
}

#[tokio::test]
async fn test_unconfirmed_btc() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {"amount": "0.25000000", "address": "1DepositAddress", "confirmations": "2"}
    ]);

    Mock::given(method("POST"))
        .and(path("/api/unconfirmed_btc/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let deposits = client.unconfirmed_btc().await.unwrap();
    assert_eq!(deposits.len(), 1);
    assert_eq!(deposits[0].confirmations, 2);
}

#[tokio::test]
async fn test_withdrawal_requests() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {
            "id": "555",
            "datetime": "2023-12-01 10:00:00",
            "type": "1",
            "amount": "0.50000000",
            "status": 2,
            "address": "1BitcoinAddress",
            "transaction_id": "abc123"
        }
    ]);

    Mock::given(method("POST"))
        .and(path("/api/withdrawal_requests/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let withdrawals = client.withdrawal_requests().await.unwrap();
    assert_eq!(withdrawals.len(), 1);
    assert_eq!(withdrawals[0].status, 2);
    assert_eq!(withdrawals[0].transaction_id.as_deref(), Some("abc123"));
}

/// Generic wrapper bound on the blanket-implemented trait, the way a
/// downstream decorator or test double would consume the client.
async fn first_open_order_id<C: BitstampClientExt>(
    client: &C,
) -> Result<Option<String>, BitstampError> {
    let orders = client.open_orders().await?;
    Ok(orders.into_iter().next().map(|order| order.id))
}

#[tokio::test]
async fn test_client_works_through_blanket_trait_impl() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {"id": "101", "datetime": "2023-12-01 10:00:00", "type": "0", "price": "99.00", "amount": "0.25000000", "currency_pair": "BTC/USD"}
    ]);

    Mock::given(method("POST"))
        .and(path("/api/v2/open_orders/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let id = first_open_order_id(&client).await.unwrap();
    assert_eq!(id.as_deref(), Some("101"));
}

#[tokio::test]
async fn test_nonces_increase_across_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/balance/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"fee": "0.5"})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.balance().await.unwrap();
    client.balance().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let nonce_of = |body: &[u8]| -> u128 {
        let body = String::from_utf8(body.to_vec()).unwrap();
        body.split('&')
            .find_map(|kv| kv.strip_prefix("nonce="))
            .unwrap()
            .parse()
            .unwrap()
    };
    assert!(nonce_of(&requests[1].body) > nonce_of(&requests[0].body));
}
