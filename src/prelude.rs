//! Convenience re-exports for common usage.
//!
//! ```rust
//! use snmp_collect::prelude::*;
//! ```

pub use crate::BoxFuture;
pub use crate::class::{
    Capability, ClassRegistry, CodeCommunicator, Communicator, Filter, GenericDeviceClass,
    VendorOverrides, compose,
};
pub use crate::context::CollectionContext;
pub use crate::device::{
    Cpu, CpuComponent, Device, DiskComponent, DiskStorage, HardwareHealthComponent,
    HardwareHealthComponentState, Interface, MemoryComponent, MemoryPool, Properties,
    RadioInterface, SbcComponent, ServerComponent, Status, UpsComponent,
};
pub use crate::error::{Error, Result, ValueKind};
pub use crate::oid::Oid;
pub use crate::snmp::SnmpPort;
pub use crate::value::{RawValue, Value, VarBind};
