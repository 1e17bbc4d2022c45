//! SNMP value types and the semantic value decoder.
//!
//! [`RawValue`] is the wire-level representation handed over by the access
//! port. [`Value`] is the typed semantic value a capability works with:
//! exactly one of unsigned integer, signed integer, float, or string.
//!
//! The decoder performs no unit conversion. Scaling (e.g. a kbit/s reading
//! multiplied by 1000 to obtain bit/s) is done explicitly by the calling
//! capability, per the source MIB's documented unit.

use bytes::Bytes;

use crate::error::{Error, Result, ValueKind};
use crate::oid::Oid;

/// Raw SNMP value as returned by the access port.
///
/// Shaped after the SMI type set; the core never interprets these directly
/// but decodes them through [`VarBind`] accessors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RawValue {
    /// INTEGER (signed 32-bit)
    Integer(i32),
    /// Counter32 (unsigned 32-bit, wrapping)
    Counter32(u32),
    /// Gauge32 / Unsigned32
    Gauge32(u32),
    /// TimeTicks (hundredths of seconds)
    TimeTicks(u32),
    /// Counter64 (unsigned 64-bit, wrapping)
    Counter64(u64),
    /// OCTET STRING (arbitrary bytes)
    OctetString(Bytes),
    /// Opaque (legacy, arbitrary bytes)
    Opaque(Bytes),
    /// IpAddress (4 bytes, big-endian)
    IpAddress([u8; 4]),
    /// NULL
    Null,
}

impl RawValue {
    fn text(&self) -> Option<&str> {
        match self {
            RawValue::OctetString(b) | RawValue::Opaque(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::OctetString(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<u64> for RawValue {
    fn from(v: u64) -> Self {
        RawValue::Counter64(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Integer(v)
    }
}

/// Decoded semantic value.
///
/// A raw value decodes to exactly one of these; requesting a type the raw
/// value cannot represent is a [`Error::Decode`], never a zero placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unsigned 64-bit integer.
    Unsigned(u64),
    /// Signed 64-bit integer.
    Signed(i64),
    /// 64-bit float.
    Float(f64),
    /// UTF-8 string.
    String(String),
}

/// Variable binding - an OID paired with a raw value.
///
/// The typed `decode_*` accessors are the Value Decoder: they fail with
/// [`Error::Decode`] naming the source OID and the requested type.
///
/// # Examples
///
/// ```
/// use snmp_collect::{Oid, RawValue, VarBind};
///
/// let vb = VarBind::new(Oid::from("1.3.6.1.2.1.2.2.1.5.1"), RawValue::Gauge32(1000));
/// assert_eq!(vb.decode_u64().unwrap(), 1000);
///
/// // Numeric text decodes too; non-numeric text does not.
/// let vb = VarBind::new(Oid::from("1.3.6.1.2.1.1.1.0"), RawValue::from("42"));
/// assert_eq!(vb.decode_u64().unwrap(), 42);
/// let vb = VarBind::new(Oid::from("1.3.6.1.2.1.1.1.0"), RawValue::from("router1"));
/// assert!(vb.decode_u64().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VarBind {
    /// The object identifier.
    pub oid: Oid,
    /// The raw value.
    pub value: RawValue,
}

impl VarBind {
    /// Create a new VarBind.
    pub fn new(oid: Oid, value: RawValue) -> Self {
        Self { oid, value }
    }

    fn decode_err(&self, requested: ValueKind) -> Box<Error> {
        Error::Decode {
            oid: self.oid.clone(),
            requested,
        }
        .boxed()
    }

    /// Decode as unsigned 64-bit integer.
    ///
    /// Accepts Counter64, Counter32, Gauge32, TimeTicks, non-negative
    /// Integer, and octet strings holding decimal text.
    pub fn decode_u64(&self) -> Result<u64> {
        match &self.value {
            RawValue::Counter64(v) => Ok(*v),
            RawValue::Counter32(v) | RawValue::Gauge32(v) | RawValue::TimeTicks(v) => {
                Ok(u64::from(*v))
            }
            RawValue::Integer(v) if *v >= 0 => Ok(*v as u64),
            other => other
                .text()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .ok_or_else(|| self.decode_err(ValueKind::Unsigned)),
        }
    }

    /// Decode as signed 64-bit integer.
    pub fn decode_i64(&self) -> Result<i64> {
        match &self.value {
            RawValue::Integer(v) => Ok(i64::from(*v)),
            RawValue::Counter32(v) | RawValue::Gauge32(v) | RawValue::TimeTicks(v) => {
                Ok(i64::from(*v))
            }
            RawValue::Counter64(v) => {
                i64::try_from(*v).map_err(|_| self.decode_err(ValueKind::Signed))
            }
            other => other
                .text()
                .and_then(|s| s.trim().parse::<i64>().ok())
                .ok_or_else(|| self.decode_err(ValueKind::Signed)),
        }
    }

    /// Decode as 64-bit float.
    pub fn decode_f64(&self) -> Result<f64> {
        match &self.value {
            RawValue::Integer(v) => Ok(f64::from(*v)),
            RawValue::Counter32(v) | RawValue::Gauge32(v) | RawValue::TimeTicks(v) => {
                Ok(f64::from(*v))
            }
            RawValue::Counter64(v) => Ok(*v as f64),
            other => other
                .text()
                .and_then(|s| s.trim().parse::<f64>().ok())
                .ok_or_else(|| self.decode_err(ValueKind::Float)),
        }
    }

    /// Decode as UTF-8 string.
    ///
    /// Numeric raw values render as their decimal form; binary octet strings
    /// that are not valid UTF-8 fail.
    pub fn decode_string(&self) -> Result<String> {
        match &self.value {
            RawValue::Integer(v) => Ok(v.to_string()),
            RawValue::Counter32(v) | RawValue::Gauge32(v) | RawValue::TimeTicks(v) => {
                Ok(v.to_string())
            }
            RawValue::Counter64(v) => Ok(v.to_string()),
            RawValue::IpAddress(a) => Ok(format!("{}.{}.{}.{}", a[0], a[1], a[2], a[3])),
            other => other
                .text()
                .map(str::to_owned)
                .ok_or_else(|| self.decode_err(ValueKind::String)),
        }
    }

    /// Decode into the semantic [`Value`] best matching the raw type.
    ///
    /// Numeric wire types become integers, text becomes [`Value::String`].
    pub fn decode(&self) -> Result<Value> {
        match &self.value {
            RawValue::Integer(v) => Ok(Value::Signed(i64::from(*v))),
            RawValue::Counter32(v) | RawValue::Gauge32(v) | RawValue::TimeTicks(v) => {
                Ok(Value::Unsigned(u64::from(*v)))
            }
            RawValue::Counter64(v) => Ok(Value::Unsigned(*v)),
            _ => self.decode_string().map(Value::String),
        }
    }
}

impl std::fmt::Display for VarBind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {:?}", self.oid, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vb(value: RawValue) -> VarBind {
        VarBind::new(Oid::from("1.3.6.1.4.1.9999.1"), value)
    }

    #[test]
    fn decode_u64_numeric_types() {
        assert_eq!(vb(RawValue::Counter64(10_000_000_000)).decode_u64().unwrap(), 10_000_000_000);
        assert_eq!(vb(RawValue::Counter32(100)).decode_u64().unwrap(), 100);
        assert_eq!(vb(RawValue::Gauge32(200)).decode_u64().unwrap(), 200);
        assert_eq!(vb(RawValue::TimeTicks(300)).decode_u64().unwrap(), 300);
        assert_eq!(vb(RawValue::Integer(50)).decode_u64().unwrap(), 50);
    }

    #[test]
    fn decode_u64_rejects_negative_integer() {
        let err = vb(RawValue::Integer(-1)).decode_u64().unwrap_err();
        assert!(matches!(
            *err,
            Error::Decode {
                requested: ValueKind::Unsigned,
                ..
            }
        ));
    }

    #[test]
    fn decode_u64_numeric_text() {
        assert_eq!(vb(RawValue::from(" 500 ")).decode_u64().unwrap(), 500);
    }

    #[test]
    fn decode_u64_non_numeric_text_fails_with_oid() {
        let err = vb(RawValue::from("GigabitEthernet0/1")).decode_u64().unwrap_err();
        match *err {
            Error::Decode { ref oid, requested } => {
                assert_eq!(oid.as_str(), "1.3.6.1.4.1.9999.1");
                assert_eq!(requested, ValueKind::Unsigned);
            }
            ref other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn decode_u64_null_fails() {
        assert!(vb(RawValue::Null).decode_u64().is_err());
    }

    #[test]
    fn decode_i64_covers_negative_and_counter64_overflow() {
        assert_eq!(vb(RawValue::Integer(-42)).decode_i64().unwrap(), -42);
        assert_eq!(vb(RawValue::Counter64(42)).decode_i64().unwrap(), 42);
        assert!(vb(RawValue::Counter64(u64::MAX)).decode_i64().is_err());
    }

    #[test]
    fn decode_f64_from_text() {
        assert_eq!(vb(RawValue::from("3.5")).decode_f64().unwrap(), 3.5);
        assert_eq!(vb(RawValue::Integer(2)).decode_f64().unwrap(), 2.0);
        assert!(vb(RawValue::from("warm")).decode_f64().is_err());
    }

    #[test]
    fn decode_string_renders_numbers_and_ips() {
        assert_eq!(vb(RawValue::Integer(7)).decode_string().unwrap(), "7");
        assert_eq!(
            vb(RawValue::IpAddress([192, 168, 1, 1])).decode_string().unwrap(),
            "192.168.1.1"
        );
        assert_eq!(vb(RawValue::from("eth0")).decode_string().unwrap(), "eth0");
    }

    #[test]
    fn decode_string_rejects_invalid_utf8() {
        let raw = RawValue::OctetString(Bytes::from_static(&[0xFF, 0xFE]));
        assert!(vb(raw).decode_string().is_err());
    }

    #[test]
    fn decode_semantic_value() {
        assert_eq!(vb(RawValue::Counter64(9)).decode().unwrap(), Value::Unsigned(9));
        assert_eq!(vb(RawValue::Integer(-9)).decode().unwrap(), Value::Signed(-9));
        assert_eq!(
            vb(RawValue::from("up")).decode().unwrap(),
            Value::String("up".to_owned())
        );
    }
}
