//! Class registration table and composition resolver.

use std::collections::HashMap;
use std::sync::Arc;

use crate::BoxFuture;
use crate::context::CollectionContext;
use crate::device::{
    CpuComponent, DiskComponent, HardwareHealthComponent, Interface, MemoryComponent, Properties,
    SbcComponent, ServerComponent, UpsComponent,
};
use crate::error::{Error, Result};

use super::decorator::{CodeCommunicator, VendorOverrides};
use super::generic::GenericDeviceClass;
use super::{Capability, Communicator};

/// A registered capability implementation for one class.
pub type CapabilityFn<T> =
    Arc<dyn for<'a> Fn(&'a CollectionContext) -> BoxFuture<'a, Result<T>> + Send + Sync>;

enum CapabilityImpl {
    Properties(CapabilityFn<Properties>),
    Interfaces(CapabilityFn<Vec<Interface>>),
    Cpu(CapabilityFn<CpuComponent>),
    Memory(CapabilityFn<MemoryComponent>),
    Disk(CapabilityFn<DiskComponent>),
    Ups(CapabilityFn<UpsComponent>),
    Server(CapabilityFn<ServerComponent>),
    Sbc(CapabilityFn<SbcComponent>),
    HardwareHealth(CapabilityFn<HardwareHealthComponent>),
}

/// Flat registration table keyed by (class identity, capability), plus the
/// class parent map and per-class vendor overrides.
///
/// Built once at startup, then shared read-only (`Arc`) across concurrent
/// collection runs. Capability lookup walks the ancestor chain from the most
/// specific class toward more generic ancestors and takes the first class
/// that declares the capability.
pub struct ClassRegistry {
    parents: HashMap<Box<str>, Box<str>>,
    capabilities: HashMap<(Box<str>, Capability), CapabilityImpl>,
    overrides: HashMap<Box<str>, Arc<VendorOverrides>>,
}

macro_rules! capability_table {
    ($(($register:ident, $lookup:ident, $variant:ident, $ty:ty)),* $(,)?) => {
        $(
            /// Register a generic implementation of this capability for `class`.
            pub fn $register<F>(&mut self, class: &str, f: F)
            where
                F: for<'a> Fn(&'a CollectionContext) -> BoxFuture<'a, Result<$ty>>
                    + Send
                    + Sync
                    + 'static,
            {
                self.capabilities.insert(
                    (class.into(), Capability::$variant),
                    CapabilityImpl::$variant(Arc::new(f)),
                );
            }

            pub(crate) fn $lookup(&self, class: &str) -> Result<CapabilityFn<$ty>> {
                for ancestor in self.resolution_chain(class) {
                    let key = (Box::from(ancestor), Capability::$variant);
                    if let Some(CapabilityImpl::$variant(f)) = self.capabilities.get(&key) {
                        tracing::debug!(
                            target: "snmp_collect::class",
                            class,
                            declaring = ancestor,
                            capability = %Capability::$variant,
                            "capability resolved"
                        );
                        return Ok(Arc::clone(f));
                    }
                }
                tracing::debug!(
                    target: "snmp_collect::class",
                    class,
                    capability = %Capability::$variant,
                    "capability unsupported along class chain"
                );
                Err(Error::CapabilityUnsupported {
                    class: class.into(),
                    capability: Capability::$variant,
                }
                .boxed())
            }
        )*
    };
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
            capabilities: HashMap::new(),
            overrides: HashMap::new(),
        }
    }

    /// Register a class and its optional parent.
    ///
    /// A class without a parent is a hierarchy root. Unregistered class
    /// names are still resolvable; their chain is just themselves.
    pub fn register_class(&mut self, class: &str, parent: Option<&str>) {
        if let Some(parent) = parent {
            self.parents.insert(class.into(), parent.into());
        } else {
            self.parents.remove(class);
        }
    }

    /// Attach imperative vendor overrides to a class.
    ///
    /// At composition time every class along the ancestor chain with
    /// registered overrides contributes one decorator layer.
    pub fn register_overrides(&mut self, class: &str, overrides: VendorOverrides) {
        self.overrides.insert(class.into(), Arc::new(overrides));
    }

    /// The capability lookup order for a class: itself first, then its
    /// ancestors toward the hierarchy root.
    ///
    /// Exposed as data so resolution order is directly testable.
    pub fn resolution_chain<'r>(&'r self, class: &'r str) -> Vec<&'r str> {
        let mut chain = vec![class];
        let mut current = class;
        while let Some(parent) = self.parents.get(current) {
            let parent: &str = parent;
            if chain.contains(&parent) {
                tracing::warn!(
                    target: "snmp_collect::class",
                    class,
                    parent,
                    "cycle in class hierarchy, truncating chain"
                );
                break;
            }
            chain.push(parent);
            current = parent;
        }
        chain
    }

    pub(crate) fn overrides_for(&self, class: &str) -> Option<Arc<VendorOverrides>> {
        self.overrides.get(class).cloned()
    }

    capability_table! {
        (register_properties, lookup_properties, Properties, Properties),
        (register_interfaces, lookup_interfaces, Interfaces, Vec<Interface>),
        (register_cpu, lookup_cpu, Cpu, CpuComponent),
        (register_memory, lookup_memory, Memory, MemoryComponent),
        (register_disk, lookup_disk, Disk, DiskComponent),
        (register_ups, lookup_ups, Ups, UpsComponent),
        (register_server, lookup_server, Server, ServerComponent),
        (register_sbc, lookup_sbc, Sbc, SbcComponent),
        (register_hardware_health, lookup_hardware_health, HardwareHealth, HardwareHealthComponent),
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the capability provider for a resolved class identity.
///
/// The [`GenericDeviceClass`] sits innermost. Walking the ancestor chain
/// from the most generic class to the most specific, every class with
/// registered [`VendorOverrides`] contributes a [`CodeCommunicator`] layer,
/// so the most specific vendor override executes closest to the caller and
/// sees the result of all more-generic overrides already applied.
///
/// Composition performs no protocol access.
pub fn compose(registry: Arc<ClassRegistry>, class: &str) -> Arc<dyn Communicator> {
    let chain: Vec<Box<str>> = registry
        .resolution_chain(class)
        .into_iter()
        .map(Box::from)
        .collect();

    let mut provider: Arc<dyn Communicator> =
        Arc::new(GenericDeviceClass::new(class, Arc::clone(&registry)));

    for ancestor in chain.iter().rev() {
        if let Some(overrides) = registry.overrides_for(ancestor) {
            tracing::debug!(
                target: "snmp_collect::class",
                class,
                layer = %ancestor,
                "adding code communicator layer"
            );
            provider = Arc::new(CodeCommunicator::new(ancestor, provider, overrides));
        }
    }

    provider
}
