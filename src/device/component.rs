//! Per-component telemetry groups (CPU, memory, disk, UPS, server, SBC,
//! hardware health).
//!
//! Each group is a collection of per-unit readings. A group with zero
//! entries means the device does not expose the component at all; an entry
//! with all-absent fields means the component exists but was unreadable
//! this cycle.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// CPU readings, one entry per core or processor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuComponent {
    pub cpus: Vec<Cpu>,
}

/// Load of one CPU.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cpu {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<f64>,
}

/// Memory readings, one entry per pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryComponent {
    pub pools: Vec<MemoryPool>,
}

/// Usage of one memory pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryPool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<f64>,
}

/// Disk readings, one entry per storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskComponent {
    pub storages: Vec<DiskStorage>,
}

/// One storage unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskStorage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<u64>,
}

/// UPS readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpsComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_low_voltage_disconnect: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_amperage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_current: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_remaining_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_voltage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_load: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mains_voltage_applied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectifier_current: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_voltage: Option<f64>,
}

/// General-purpose server readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<u64>,
}

/// Session border controller readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SbcComponent {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub agents: Vec<SbcAgent>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub realms: Vec<SbcRealm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_call_per_second: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_concurrent_sessions: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_local_contacts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcoding_capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_redundancy: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_health_score: Option<i64>,
}

/// Per-agent SBC session counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SbcAgent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_active_sessions_inbound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_session_rate_inbound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_active_sessions_outbound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_session_rate_outbound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_asr: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
}

/// Per-realm SBC session counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SbcRealm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_active_sessions_inbound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_session_rate_inbound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_active_sessions_outbound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_session_rate_outbound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_asr: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_local_contacts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
}

/// Hardware health of a device: fans, power supplies, temperatures, voltages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareHealthComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_monitor_state: Option<HardwareHealthComponentState>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fans: Vec<HardwareHealthFan>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub power_supply: Vec<HardwareHealthPowerSupply>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub temperature: Vec<HardwareHealthTemperature>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub voltage: Vec<HardwareHealthVoltage>,
}

/// One fan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareHealthFan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<HardwareHealthComponentState>,
}

/// One power supply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareHealthPowerSupply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<HardwareHealthComponentState>,
}

/// One temperature sensor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareHealthTemperature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<HardwareHealthComponentState>,
}

/// One voltage sensor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareHealthVoltage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<HardwareHealthComponentState>,
}

/// Health state of a hardware component, bijective with ordinals 0..=7.
///
/// The ordinal ordering is used for worst-state-wins aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareHealthComponentState {
    Initial,
    Normal,
    Warning,
    Critical,
    Shutdown,
    NotPresent,
    NotFunctioning,
    Unknown,
}

impl HardwareHealthComponentState {
    /// Decode from the 0-based ordinal. Out-of-range ordinals are an error.
    pub fn from_ordinal(ordinal: i64) -> Result<Self> {
        match ordinal {
            0 => Ok(Self::Initial),
            1 => Ok(Self::Normal),
            2 => Ok(Self::Warning),
            3 => Ok(Self::Critical),
            4 => Ok(Self::Shutdown),
            5 => Ok(Self::NotPresent),
            6 => Ok(Self::NotFunctioning),
            7 => Ok(Self::Unknown),
            other => Err(Error::EnumDecode {
                kind: "hardware health state",
                value: other.to_string().into_boxed_str(),
            }
            .boxed()),
        }
    }

    /// Decode from the 0-based ordinal, mapping out-of-range ordinals to
    /// [`Unknown`](Self::Unknown).
    ///
    /// Explicit lossy companion to [`from_ordinal`](Self::from_ordinal) for
    /// callers that want a degraded reading instead of a failed one.
    pub fn from_ordinal_or_unknown(ordinal: i64) -> Self {
        Self::from_ordinal(ordinal).unwrap_or(Self::Unknown)
    }

    /// The 0-based ordinal used for comparison and aggregation.
    pub fn ordinal(&self) -> i64 {
        match self {
            Self::Initial => 0,
            Self::Normal => 1,
            Self::Warning => 2,
            Self::Critical => 3,
            Self::Shutdown => 4,
            Self::NotPresent => 5,
            Self::NotFunctioning => 6,
            Self::Unknown => 7,
        }
    }

    /// Worst-state-wins aggregation over any number of states, comparing by
    /// [`ordinal`](Self::ordinal): the highest ordinal wins.
    ///
    /// Returns `None` for an empty iterator.
    pub fn worst(states: impl IntoIterator<Item = Self>) -> Option<Self> {
        states.into_iter().max_by_key(Self::ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_state_ordinal_bijection() {
        for ordinal in 0..=7 {
            let state = HardwareHealthComponentState::from_ordinal(ordinal).unwrap();
            assert_eq!(state.ordinal(), ordinal);
        }
        assert!(HardwareHealthComponentState::from_ordinal(-1).is_err());
        assert!(HardwareHealthComponentState::from_ordinal(8).is_err());
    }

    #[test]
    fn lossy_ordinal_decode_falls_back_to_unknown() {
        use HardwareHealthComponentState::*;
        assert_eq!(HardwareHealthComponentState::from_ordinal_or_unknown(4), Shutdown);
        assert_eq!(HardwareHealthComponentState::from_ordinal_or_unknown(-1), Unknown);
        assert_eq!(HardwareHealthComponentState::from_ordinal_or_unknown(8), Unknown);
    }

    #[test]
    fn health_state_serializes_snake_case() {
        use HardwareHealthComponentState::*;
        assert_eq!(serde_json::to_string(&NotPresent).unwrap(), "\"not_present\"");
        assert_eq!(
            serde_json::to_string(&NotFunctioning).unwrap(),
            "\"not_functioning\""
        );
        let state: HardwareHealthComponentState = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(state, Warning);
    }

    #[test]
    fn worst_state_wins() {
        use HardwareHealthComponentState::*;
        assert_eq!(HardwareHealthComponentState::worst([Normal, Warning, Normal]), Some(Warning));
        assert_eq!(HardwareHealthComponentState::worst([Warning, Shutdown, Critical]), Some(Shutdown));
        assert_eq!(HardwareHealthComponentState::worst([]), None);
    }

    #[test]
    fn worst_state_compares_by_ordinal() {
        use HardwareHealthComponentState::*;
        // The ordinal is the comparison key, so the late states outrank the
        // operational ones.
        assert_eq!(HardwareHealthComponentState::worst([Critical, Unknown]), Some(Unknown));
        assert_eq!(HardwareHealthComponentState::worst([Shutdown, NotPresent]), Some(NotPresent));
        assert_eq!(
            HardwareHealthComponentState::worst([Initial, Normal]),
            Some(Normal)
        );
    }

    #[test]
    fn empty_group_serializes_compactly() {
        let health = HardwareHealthComponent::default();
        assert_eq!(serde_json::to_string(&health).unwrap(), "{}");

        // Zero entries ("unsupported") is distinct from an entry with
        // all-absent fields ("supported but unreadable this cycle").
        let unreadable = HardwareHealthComponent {
            fans: vec![HardwareHealthFan::default()],
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&unreadable).unwrap(), r#"{"fans":[{}]}"#);
    }
}
