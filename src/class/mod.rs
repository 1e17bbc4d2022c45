//! Device-class composition engine.
//!
//! A device resolves to a class identity. Classes form an inheritance
//! hierarchy: a specific class inherits every capability of its ancestors
//! and may override any subset. Generic, declarative capability
//! implementations are registered per class in a [`ClassRegistry`];
//! imperative vendor overrides ([`VendorOverrides`]) are layered on top as
//! decorators at composition time.
//!
//! Composition ([`compose`]) builds the final capability provider: the
//! [`GenericDeviceClass`] innermost, wrapped by one [`CodeCommunicator`] per
//! ancestor class that registered overrides, most specific outermost.
//! Resolution performs no protocol access.
//!
//! ```rust
//! use std::sync::Arc;
//! use snmp_collect::class::{ClassRegistry, compose};
//!
//! let mut registry = ClassRegistry::new();
//! registry.register_class("ios", Some("cisco"));
//! registry.register_class("cisco", Some("generic"));
//!
//! let registry = Arc::new(registry);
//! assert_eq!(registry.resolution_chain("ios"), ["ios", "cisco", "generic"]);
//!
//! // Every capability of the resolved provider reports
//! // CapabilityUnsupported until implementations are registered.
//! let provider = compose(Arc::clone(&registry), "ios");
//! assert_eq!(provider.class(), "ios");
//! ```

mod decorator;
mod generic;
mod registry;

pub use decorator::{CodeCommunicator, FilteredOverride, PlainOverride, VendorOverrides};
pub use generic::GenericDeviceClass;
pub use registry::{CapabilityFn, ClassRegistry, compose};

use serde::{Deserialize, Serialize};

use crate::BoxFuture;
use crate::context::CollectionContext;
use crate::device::{
    Cpu, CpuComponent, DiskComponent, DiskStorage, HardwareHealthComponent, Interface,
    MemoryComponent, MemoryPool, Properties, SbcComponent, ServerComponent, UpsComponent,
};
use crate::error::Result;

/// A named, independently collectible unit of telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Properties,
    Interfaces,
    Cpu,
    Memory,
    Disk,
    Ups,
    Server,
    Sbc,
    HardwareHealth,
}

impl Capability {
    /// Stable lowercase name, used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Interfaces => "interfaces",
            Self::Cpu => "cpu",
            Self::Memory => "memory",
            Self::Disk => "disk",
            Self::Ups => "ups",
            Self::Server => "server",
            Self::Sbc => "sbc",
            Self::HardwareHealth => "hardware_health",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Entry-level filter predicate applied to collection-shaped capabilities.
pub type Filter<T> = dyn Fn(&T) -> bool + Send + Sync;

/// A resolved capability provider.
///
/// One method per capability, `(context, optional filter) -> result`.
/// Implementations are the generic device class and the code-communicator
/// decorators wrapped around it.
///
/// Error contract: [`Error::CapabilityUnsupported`](crate::Error::CapabilityUnsupported)
/// means "no telemetry for this device/capability" and must be treated as
/// absence by callers; any other error fails that capability only, siblings
/// are unaffected.
pub trait Communicator: Send + Sync {
    /// The resolved class identity this provider was composed for.
    fn class(&self) -> &str;

    /// Read the device properties (vendor, model, serial, OS version).
    fn properties<'a>(&'a self, ctx: &'a CollectionContext) -> BoxFuture<'a, Result<Properties>>;

    /// List the device's interfaces, normalized.
    fn interfaces<'a>(
        &'a self,
        ctx: &'a CollectionContext,
        filter: Option<&'a Filter<Interface>>,
    ) -> BoxFuture<'a, Result<Vec<Interface>>>;

    /// Read per-CPU load.
    fn cpu<'a>(
        &'a self,
        ctx: &'a CollectionContext,
        filter: Option<&'a Filter<Cpu>>,
    ) -> BoxFuture<'a, Result<CpuComponent>>;

    /// Read per-pool memory usage.
    fn memory<'a>(
        &'a self,
        ctx: &'a CollectionContext,
        filter: Option<&'a Filter<MemoryPool>>,
    ) -> BoxFuture<'a, Result<MemoryComponent>>;

    /// Read per-storage disk usage.
    fn disk<'a>(
        &'a self,
        ctx: &'a CollectionContext,
        filter: Option<&'a Filter<DiskStorage>>,
    ) -> BoxFuture<'a, Result<DiskComponent>>;

    /// Read UPS state.
    fn ups<'a>(&'a self, ctx: &'a CollectionContext) -> BoxFuture<'a, Result<UpsComponent>>;

    /// Read server process/user counts.
    fn server<'a>(&'a self, ctx: &'a CollectionContext) -> BoxFuture<'a, Result<ServerComponent>>;

    /// Read session border controller state.
    fn sbc<'a>(&'a self, ctx: &'a CollectionContext) -> BoxFuture<'a, Result<SbcComponent>>;

    /// Read hardware health (fans, power supplies, temperatures, voltages).
    fn hardware_health<'a>(
        &'a self,
        ctx: &'a CollectionContext,
    ) -> BoxFuture<'a, Result<HardwareHealthComponent>>;
}
