//! Serde helpers for vendor wire formats.
//!
//! - [`rfc2822`]: `api/2010-04-01` timestamps (`"Mon, 16 Aug 2010 03:45:01 +0000"`)
//! - [`decimal`]: prices sent either as JSON numbers or numeric strings
//!
//! `v1` domains use RFC 3339, which chrono's own serde support handles.
//!
//! ```rust,ignore
//! #[derive(Deserialize)]
//! struct Record {
//!     #[serde(default, with = "crate::rest::formats::rfc2822")]
//!     date_created: Option<DateTime<Utc>>,
//! }
//! ```

/// Optional RFC 2822 timestamps. `null`, absent and empty strings are `None`.
pub mod rfc2822 {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes as an RFC 2822 string, or `null`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc2822()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an RFC 2822 string into UTC.
    ///
    /// # Errors
    ///
    /// Fails if a non-empty string is not a valid RFC 2822 date.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => DateTime::parse_from_rfc2822(s)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(de::Error::custom),
        }
    }
}

/// Optional decimal values accepted as numbers or numeric strings.
pub mod decimal {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    /// Serializes as a JSON number, or `null`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(n) => serializer.serialize_f64(*n),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes a number or numeric string.
    ///
    /// # Errors
    ///
    /// Fails on strings that are not numbers and on non-scalar values.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => s.trim().parse().map(Some).map_err(de::Error::custom),
            other => Err(de::Error::custom(format!("expected a decimal, got {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Sample {
        #[serde(default, with = "super::rfc2822")]
        date: Option<DateTime<Utc>>,
        #[serde(default, with = "super::decimal")]
        price: Option<f64>,
    }

    #[test]
    fn test_rfc2822_dates_parse_to_utc() {
        let sample: Sample =
            serde_json::from_str(r#"{"date":"Mon, 16 Aug 2010 03:45:01 +0000","price":null}"#)
                .unwrap();
        assert_eq!(
            sample.date,
            Some(Utc.with_ymd_and_hms(2010, 8, 16, 3, 45, 1).unwrap())
        );
        assert_eq!(sample.price, None);
    }

    #[test]
    fn test_missing_and_empty_values_are_none() {
        let sample: Sample = serde_json::from_str(r#"{"date":"","price":""}"#).unwrap();
        assert_eq!(sample.date, None);
        assert_eq!(sample.price, None);

        let sample: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(sample.date, None);
    }

    #[test]
    fn test_decimal_accepts_strings_and_numbers() {
        let from_string: Sample = serde_json::from_str(r#"{"price":"-0.00750"}"#).unwrap();
        assert_eq!(from_string.price, Some(-0.0075));

        let from_number: Sample = serde_json::from_str(r#"{"price":1.5}"#).unwrap();
        assert_eq!(from_number.price, Some(1.5));

        assert!(serde_json::from_str::<Sample>(r#"{"price":"abc"}"#).is_err());
    }

    #[test]
    fn test_rfc2822_serializes_back() {
        let sample = Sample {
            date: Some(Utc.with_ymd_and_hms(2015, 7, 30, 20, 0, 0).unwrap()),
            price: None,
        };
        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["date"], "Thu, 30 Jul 2015 20:00:00 +0000");
    }
}
