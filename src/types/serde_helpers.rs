//! Custom serde helpers for Bitstamp's quirky serialization formats.
//!
//! Bitstamp mixes strings and numbers for the same logical field across
//! endpoints and API versions. These helpers absorb those quirks in one
//! place.

use std::fmt;

use serde::{Deserialize, Deserializer, de};

/// Deserialize a numeric code that may arrive as a JSON number or as a
/// stringified digit (`0` vs `"0"`).
pub fn numeric_code<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CodeVisitor;

    impl<'de> de::Visitor<'de> for CodeVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a string containing one")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u64::try_from(v).map_err(|_| de::Error::custom("code out of range"))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.trim().parse().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(CodeVisitor)
}

/// Helper for empty strings that should be deserialized as None.
///
/// Some Bitstamp fields (e.g. `order_id` on non-trade transactions) return
/// `""` instead of null.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use bitstamp_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     order_id: Option<String>,
/// }
///
/// let json = r#"{"order_id":""}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert!(response.order_id.is_none());
///
/// let json = r#"{"order_id":"1234"}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert_eq!(response.order_id.unwrap(), "1234");
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}

/// Deserialize an identifier that may arrive as a JSON number or a string.
///
/// Bitstamp returns order and transaction IDs as numbers on some endpoints
/// and as strings on others.
pub mod id_string {
    use super::*;

    /// Deserialize a number-or-string identifier into a String.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl<'de> de::Visitor<'de> for IdVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an identifier as a number or string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(v.to_string())
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(v.to_string())
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(v.to_string())
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_code_from_number_and_string() {
        #[derive(Deserialize)]
        struct Test {
            #[serde(deserialize_with = "numeric_code")]
            code: u64,
        }

        let t: Test = serde_json::from_str(r#"{"code":2}"#).unwrap();
        assert_eq!(t.code, 2);

        let t: Test = serde_json::from_str(r#"{"code":"2"}"#).unwrap();
        assert_eq!(t.code, 2);
    }

    #[test]
    fn test_numeric_code_rejects_garbage() {
        #[derive(Deserialize, Debug)]
        struct Test {
            #[serde(deserialize_with = "numeric_code")]
            #[allow(dead_code)]
            code: u64,
        }

        assert!(serde_json::from_str::<Test>(r#"{"code":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Test>(r#"{"code":-1}"#).is_err());
    }

    #[test]
    fn test_empty_string_as_none() {
        #[derive(Deserialize, Debug)]
        struct Test {
            #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
            order_id: Option<String>,
        }

        let t: Test = serde_json::from_str(r#"{"order_id":""}"#).unwrap();
        assert!(t.order_id.is_none());

        let t: Test = serde_json::from_str(r#"{"order_id":"99"}"#).unwrap();
        assert_eq!(t.order_id.unwrap(), "99");
    }

    #[test]
    fn test_id_string_from_number() {
        #[derive(Deserialize)]
        struct Test {
            #[serde(deserialize_with = "id_string::deserialize")]
            id: String,
        }

        let t: Test = serde_json::from_str(r#"{"id":1254}"#).unwrap();
        assert_eq!(t.id, "1254");

        let t: Test = serde_json::from_str(r#"{"id":"1254"}"#).unwrap();
        assert_eq!(t.id, "1254");
    }
}
