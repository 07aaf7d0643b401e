//! Nonce generation for Bitstamp API authentication.
//!
//! Bitstamp requires a strictly increasing nonce for each authenticated
//! request to prevent replay attacks.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
///
/// The nonce must be a numeric string strictly greater than any previously
/// returned value. Implement this to override the built-in generator;
/// overriding forfeits the ordering guarantee [`TimestampNonce`] provides,
/// the implementation is then solely responsible for uniqueness and order.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must be greater than any previously returned value.
    fn next_nonce(&self) -> String;
}

/// A nonce provider combining a millisecond timestamp with a counter.
///
/// Each nonce is the current UNIX time in milliseconds with a four-digit
/// zero-padded counter appended. The counter resets on every new clock
/// tick, so nonces from the same millisecond stay strictly increasing both
/// numerically and lexically. This caps correctness at 10,000 calls per
/// millisecond; the 10,001st call in one tick overflows the padding and
/// breaks the ordering guarantee.
pub struct TimestampNonce {
    state: Mutex<NonceState>,
}

#[derive(Default)]
struct NonceState {
    last_millis: u64,
    counter: u32,
}

impl TimestampNonce {
    /// Create a new timestamp-based nonce provider.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(NonceState::default()),
        }
    }

    /// Get current time in milliseconds since UNIX epoch.
    fn current_time_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    /// Produce the nonce for an observed clock reading.
    ///
    /// The read-modify-write of the timestamp and counter happens under the
    /// lock, so concurrent callers on one instance still observe a strictly
    /// increasing sequence.
    fn next_for_millis(&self, now: u64) -> String {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        // Clamp a backwards-stepping clock to the last seen tick, the
        // sequence must never decrease.
        let now = now.max(state.last_millis);

        if now != state.last_millis {
            state.counter = 0;
        } else {
            state.counter += 1;
        }
        state.last_millis = now;

        format!("{}{:04}", now, state.counter)
    }
}

impl Default for TimestampNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for TimestampNonce {
    fn next_nonce(&self) -> String {
        self.next_for_millis(Self::current_time_millis())
    }
}
