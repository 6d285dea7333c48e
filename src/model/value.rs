//! Cell value model

use std::borrow::Cow;
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// A dynamically-typed cell payload.
///
/// The variant set is closed; cell rendering dispatches on it with an
/// exhaustive match. Values outside the recognized kinds are carried as
/// [`Value::Other`] with their textual representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Cow<'static, str>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Other(String),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Other(a), Value::Other(b)) => a == b,
            // Cross-type numeric comparison
            (Value::Int(a), Value::Float(b)) => (*a as f64) == *b,
            (Value::Float(a), Value::Int(b)) => *a == (*b as f64),
            _ => false,
        }
    }
}

impl Value {
    /// Check if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Capture an arbitrary value through its textual representation.
    pub fn other(value: impl std::fmt::Display) -> Self {
        Value::Other(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Cow::Owned(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        // Widen through the canonical decimal string so 0.1f32 lands as 0.1,
        // not 0.10000000149011612.
        Value::Float(f.to_string().parse().unwrap_or_else(|_| f64::from(f)))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

/// Zoned date-times keep their local wall-clock fields; the zone is dropped.
impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(dt: DateTime<Tz>) -> Self {
        Value::DateTime(dt.naive_local())
    }
}

/// System timestamps are read in the host's local time zone.
impl From<SystemTime> for Value {
    fn from(t: SystemTime) -> Self {
        Value::DateTime(DateTime::<Local>::from(t).naive_local())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_primitive_conversions() {
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(3.5f64), Value::Float(3.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(
            Value::from("hello"),
            Value::Str(Cow::Owned("hello".to_string()))
        );
    }

    #[test]
    fn test_f32_widens_through_decimal_string() {
        assert_eq!(Value::from(0.1f32), Value::Float(0.1));
        assert_eq!(Value::from(2.5f32), Value::Float(2.5));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(7i64)), Value::Int(7));
        assert!(Value::from(None::<String>).is_null());
    }

    #[test]
    fn test_zoned_datetime_drops_zone() {
        let zone = FixedOffset::east_opt(3 * 3600).unwrap();
        let zoned = zone.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(Value::from(zoned), Value::DateTime(expected));

        let utc = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
        assert_eq!(Value::from(utc), Value::DateTime(expected));
    }

    #[test]
    fn test_cross_type_numeric_equality() {
        assert_eq!(Value::Int(3), Value::Float(3.0));
        assert_ne!(Value::Int(3), Value::Float(3.5));
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_other_captures_display() {
        assert_eq!(
            Value::other(std::net::Ipv4Addr::LOCALHOST),
            Value::Other("127.0.0.1".to_string())
        );
    }
}
