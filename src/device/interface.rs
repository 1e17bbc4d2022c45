//! Network interface model with technology extension blocks.

use serde::{Deserialize, Serialize};

use super::Status;

/// One network interface.
///
/// Carries the standard IF-MIB counters and status fields (legacy and
/// high-capacity forms) plus optional technology blocks. A real device
/// populates at most the subset matching its hardware.
///
/// Serialized IF-MIB field names keep the MIB's camelCase object names
/// (`ifIndex`, `ifHCInOctets`); everything else is snake_case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    #[serde(rename = "ifIndex", skip_serializing_if = "Option::is_none")]
    pub if_index: Option<u64>,
    #[serde(rename = "ifDescr", skip_serializing_if = "Option::is_none")]
    pub if_descr: Option<String>,
    #[serde(rename = "ifType", skip_serializing_if = "Option::is_none")]
    pub if_type: Option<String>,
    #[serde(rename = "ifMtu", skip_serializing_if = "Option::is_none")]
    pub if_mtu: Option<u64>,
    #[serde(rename = "ifSpeed", skip_serializing_if = "Option::is_none")]
    pub if_speed: Option<u64>,
    #[serde(rename = "ifPhysAddress", skip_serializing_if = "Option::is_none")]
    pub if_phys_address: Option<String>,
    #[serde(rename = "ifAdminStatus", skip_serializing_if = "Option::is_none")]
    pub if_admin_status: Option<Status>,
    #[serde(rename = "ifOperStatus", skip_serializing_if = "Option::is_none")]
    pub if_oper_status: Option<Status>,
    #[serde(rename = "ifLastChange", skip_serializing_if = "Option::is_none")]
    pub if_last_change: Option<u64>,
    #[serde(rename = "ifInOctets", skip_serializing_if = "Option::is_none")]
    pub if_in_octets: Option<u64>,
    #[serde(rename = "ifInUcastPkts", skip_serializing_if = "Option::is_none")]
    pub if_in_ucast_pkts: Option<u64>,
    #[serde(rename = "ifInNUcastPkts", skip_serializing_if = "Option::is_none")]
    pub if_in_nucast_pkts: Option<u64>,
    #[serde(rename = "ifInDiscards", skip_serializing_if = "Option::is_none")]
    pub if_in_discards: Option<u64>,
    #[serde(rename = "ifInErrors", skip_serializing_if = "Option::is_none")]
    pub if_in_errors: Option<u64>,
    #[serde(rename = "ifInUnknownProtos", skip_serializing_if = "Option::is_none")]
    pub if_in_unknown_protos: Option<u64>,
    #[serde(rename = "ifOutOctets", skip_serializing_if = "Option::is_none")]
    pub if_out_octets: Option<u64>,
    #[serde(rename = "ifOutUcastPkts", skip_serializing_if = "Option::is_none")]
    pub if_out_ucast_pkts: Option<u64>,
    #[serde(rename = "ifOutNUcastPkts", skip_serializing_if = "Option::is_none")]
    pub if_out_nucast_pkts: Option<u64>,
    #[serde(rename = "ifOutDiscards", skip_serializing_if = "Option::is_none")]
    pub if_out_discards: Option<u64>,
    #[serde(rename = "ifOutErrors", skip_serializing_if = "Option::is_none")]
    pub if_out_errors: Option<u64>,
    #[serde(rename = "ifOutQLen", skip_serializing_if = "Option::is_none")]
    pub if_out_qlen: Option<u64>,
    #[serde(rename = "ifName", skip_serializing_if = "Option::is_none")]
    pub if_name: Option<String>,
    #[serde(rename = "ifInMulticastPkts", skip_serializing_if = "Option::is_none")]
    pub if_in_multicast_pkts: Option<u64>,
    #[serde(rename = "ifInBroadcastPkts", skip_serializing_if = "Option::is_none")]
    pub if_in_broadcast_pkts: Option<u64>,
    #[serde(rename = "ifOutMulticastPkts", skip_serializing_if = "Option::is_none")]
    pub if_out_multicast_pkts: Option<u64>,
    #[serde(rename = "ifOutBroadcastPkts", skip_serializing_if = "Option::is_none")]
    pub if_out_broadcast_pkts: Option<u64>,
    #[serde(rename = "ifHCInOctets", skip_serializing_if = "Option::is_none")]
    pub if_hc_in_octets: Option<u64>,
    #[serde(rename = "ifHCInUcastPkts", skip_serializing_if = "Option::is_none")]
    pub if_hc_in_ucast_pkts: Option<u64>,
    #[serde(rename = "ifHCInMulticastPkts", skip_serializing_if = "Option::is_none")]
    pub if_hc_in_multicast_pkts: Option<u64>,
    #[serde(rename = "ifHCInBroadcastPkts", skip_serializing_if = "Option::is_none")]
    pub if_hc_in_broadcast_pkts: Option<u64>,
    #[serde(rename = "ifHCOutOctets", skip_serializing_if = "Option::is_none")]
    pub if_hc_out_octets: Option<u64>,
    #[serde(rename = "ifHCOutUcastPkts", skip_serializing_if = "Option::is_none")]
    pub if_hc_out_ucast_pkts: Option<u64>,
    #[serde(rename = "ifHCOutMulticastPkts", skip_serializing_if = "Option::is_none")]
    pub if_hc_out_multicast_pkts: Option<u64>,
    #[serde(rename = "ifHCOutBroadcastPkts", skip_serializing_if = "Option::is_none")]
    pub if_hc_out_broadcast_pkts: Option<u64>,
    #[serde(rename = "ifHighSpeed", skip_serializing_if = "Option::is_none")]
    pub if_high_speed: Option<u64>,
    #[serde(rename = "ifAlias", skip_serializing_if = "Option::is_none")]
    pub if_alias: Option<String>,

    /// Set only when an interface has different inbound/outbound max speeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed_in: Option<u64>,
    /// Set only when an interface has different inbound/outbound max speeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed_out: Option<u64>,

    /// Internal port-type refinement. Never read by generic class logic and
    /// never serialized; used to tag a port type without changing `if_type`.
    #[serde(skip)]
    pub sub_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethernet_like: Option<EthernetLikeInterface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio: Option<RadioInterface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dwdm: Option<DwdmInterface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optical_transponder: Option<OpticalTransponderInterface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optical_amplifier: Option<OpticalAmplifierInterface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optical_opm: Option<OpticalOpmInterface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sap: Option<SapInterface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<VlanInformation>,
}

/// Ethernet-like interface counters (EtherLike-MIB).
///
/// Serialized names keep the MIB's camelCase object names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EthernetLikeInterface {
    #[serde(rename = "dot3StatsAlignmentErrors", skip_serializing_if = "Option::is_none")]
    pub dot3_stats_alignment_errors: Option<u64>,
    #[serde(rename = "dot3StatsFCSErrors", skip_serializing_if = "Option::is_none")]
    pub dot3_stats_fcs_errors: Option<u64>,
    #[serde(rename = "dot3StatsSingleCollisionFrames", skip_serializing_if = "Option::is_none")]
    pub dot3_stats_single_collision_frames: Option<u64>,
    #[serde(rename = "dot3StatsMultipleCollisionFrames", skip_serializing_if = "Option::is_none")]
    pub dot3_stats_multiple_collision_frames: Option<u64>,
    #[serde(rename = "dot3StatsSQETestErrors", skip_serializing_if = "Option::is_none")]
    pub dot3_stats_sqe_test_errors: Option<u64>,
    #[serde(rename = "dot3StatsDeferredTransmissions", skip_serializing_if = "Option::is_none")]
    pub dot3_stats_deferred_transmissions: Option<u64>,
    #[serde(rename = "dot3StatsLateCollisions", skip_serializing_if = "Option::is_none")]
    pub dot3_stats_late_collisions: Option<u64>,
    #[serde(rename = "dot3StatsExcessiveCollisions", skip_serializing_if = "Option::is_none")]
    pub dot3_stats_excessive_collisions: Option<u64>,
    #[serde(rename = "dot3StatsInternalMacTransmitErrors", skip_serializing_if = "Option::is_none")]
    pub dot3_stats_internal_mac_transmit_errors: Option<u64>,
    #[serde(rename = "dot3StatsCarrierSenseErrors", skip_serializing_if = "Option::is_none")]
    pub dot3_stats_carrier_sense_errors: Option<u64>,
    #[serde(rename = "dot3StatsFrameTooLongs", skip_serializing_if = "Option::is_none")]
    pub dot3_stats_frame_too_longs: Option<u64>,
    #[serde(rename = "dot3StatsInternalMacReceiveErrors", skip_serializing_if = "Option::is_none")]
    pub dot3_stats_internal_mac_receive_errors: Option<u64>,
    #[serde(rename = "dot3HCStatsAlignmentErrors", skip_serializing_if = "Option::is_none")]
    pub dot3_hc_stats_alignment_errors: Option<u64>,
    #[serde(rename = "dot3HCStatsFCSErrors", skip_serializing_if = "Option::is_none")]
    pub dot3_hc_stats_fcs_errors: Option<u64>,
    #[serde(rename = "dot3HCStatsInternalMacTransmitErrors", skip_serializing_if = "Option::is_none")]
    pub dot3_hc_stats_internal_mac_transmit_errors: Option<u64>,
    #[serde(rename = "dot3HCStatsFrameTooLongs", skip_serializing_if = "Option::is_none")]
    pub dot3_hc_stats_frame_too_longs: Option<u64>,
    #[serde(rename = "dot3HCStatsInternalMacReceiveErrors", skip_serializing_if = "Option::is_none")]
    pub dot3_hc_stats_internal_mac_receive_errors: Option<u64>,
    #[serde(rename = "etherStatsCRCAlignErrors", skip_serializing_if = "Option::is_none")]
    pub ether_stats_crc_align_errors: Option<u64>,
}

/// Radio link values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadioInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_out: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_in: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxbitrate_out: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxbitrate_in: Option<u64>,
}

/// DWDM optical values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DwdmInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_power: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub corrected_fec: Vec<Rate>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub uncorrected_fec: Vec<Rate>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub channels: Vec<OpticalChannel>,
}

/// Optical transponder values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpticalTransponderInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_fec: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncorrected_fec: Option<u64>,
}

/// Optical amplifier values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpticalAmplifierInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain: Option<f64>,
}

/// Optical power monitor values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpticalOpmInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_power: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub channels: Vec<OpticalChannel>,
}

/// One optical channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpticalChannel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_power: Option<f64>,
}

/// Service access point counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SapInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound: Option<u64>,
}

/// VLAN membership of an interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VlanInformation {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub vlans: Vec<Vlan>,
}

/// One VLAN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A value referring to a time span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub time: String,
    pub value: f64,
}
