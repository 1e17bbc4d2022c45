//! Normalized, technology-agnostic device data model.
//!
//! Every capability populates these entities or leaves fields absent. A
//! `None` field means "not determinable for this class/device", never an
//! error and never a zero placeholder. Serialized forms omit absent fields
//! entirely; enums serialize as their documented string labels, with the
//! integer bijections available as explicit conversions
//! ([`Status::code`], [`HardwareHealthComponentState::ordinal`]).

mod component;
mod interface;

pub use component::*;
pub use interface::*;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A resolved device: class identity plus determinable properties.
///
/// Identity is the resolved class name and is immutable for the lifetime of
/// a collection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Class of the device (e.g. `routerOS`).
    pub class: String,
    /// Properties of the device.
    pub properties: Properties,
}

/// Descriptive properties that can be determined for a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
}

/// Interface status per IF-MIB, bijective with wire codes 1..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "up")]
    Up,
    #[serde(rename = "down")]
    Down,
    #[serde(rename = "testing")]
    Testing,
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "dormant")]
    Dormant,
    #[serde(rename = "notPresent")]
    NotPresent,
    #[serde(rename = "lowerLayerDown")]
    LowerLayerDown,
}

impl Status {
    /// Decode a wire status code. Out-of-range codes are an error, not a
    /// default.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Status::Up),
            2 => Ok(Status::Down),
            3 => Ok(Status::Testing),
            4 => Ok(Status::Unknown),
            5 => Ok(Status::Dormant),
            6 => Ok(Status::NotPresent),
            7 => Ok(Status::LowerLayerDown),
            other => Err(Error::EnumDecode {
                kind: "status code",
                value: other.to_string().into_boxed_str(),
            }
            .boxed()),
        }
    }

    /// The 1-based wire code for this status.
    pub fn code(&self) -> i64 {
        match self {
            Status::Up => 1,
            Status::Down => 2,
            Status::Testing => 3,
            Status::Unknown => 4,
            Status::Dormant => 5,
            Status::NotPresent => 6,
            Status::LowerLayerDown => 7,
        }
    }

    /// The documented string label (the serialization form).
    pub fn label(&self) -> &'static str {
        match self {
            Status::Up => "up",
            Status::Down => "down",
            Status::Testing => "testing",
            Status::Unknown => "unknown",
            Status::Dormant => "dormant",
            Status::NotPresent => "notPresent",
            Status::LowerLayerDown => "lowerLayerDown",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_bijection() {
        for code in 1..=7 {
            let status = Status::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
    }

    #[test]
    fn status_out_of_range_codes_fail() {
        assert!(Status::from_code(0).is_err());
        assert!(Status::from_code(8).is_err());
        assert!(Status::from_code(-1).is_err());
    }

    #[test]
    fn status_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Status::Up).unwrap(), "\"up\"");
        assert_eq!(
            serde_json::to_string(&Status::LowerLayerDown).unwrap(),
            "\"lowerLayerDown\""
        );
        let status: Status = serde_json::from_str("\"notPresent\"").unwrap();
        assert_eq!(status, Status::NotPresent);
    }

    #[test]
    fn absent_properties_are_omitted() {
        let props = Properties {
            vendor: Some("Mikrotik".to_owned()),
            ..Default::default()
        };
        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(json, r#"{"vendor":"Mikrotik"}"#);
    }
}
