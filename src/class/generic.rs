//! Generic device class: the innermost capability provider.

use std::sync::Arc;

use crate::BoxFuture;
use crate::context::CollectionContext;
use crate::device::{
    Cpu, CpuComponent, DiskComponent, DiskStorage, HardwareHealthComponent, Interface,
    MemoryComponent, MemoryPool, Properties, SbcComponent, ServerComponent, UpsComponent,
};
use crate::error::Result;

use super::registry::ClassRegistry;
use super::{Communicator, Filter};

/// The declarative, class-scoped baseline provider.
///
/// Executes the capability implementation registered for the nearest class
/// along the ancestor chain and applies the caller's filter. Declares no
/// vendor behavior of its own; everything imperative lives in the
/// [`CodeCommunicator`](super::CodeCommunicator) layers wrapped around it.
pub struct GenericDeviceClass {
    class: Box<str>,
    registry: Arc<ClassRegistry>,
}

impl GenericDeviceClass {
    /// Create the baseline provider for a resolved class identity.
    pub fn new(class: &str, registry: Arc<ClassRegistry>) -> Self {
        Self {
            class: class.into(),
            registry,
        }
    }
}

impl Communicator for GenericDeviceClass {
    fn class(&self) -> &str {
        &self.class
    }

    fn properties<'a>(&'a self, ctx: &'a CollectionContext) -> BoxFuture<'a, Result<Properties>> {
        Box::pin(async move {
            ctx.ensure_active()?;
            let f = self.registry.lookup_properties(&self.class)?;
            f(ctx).await
        })
    }

    fn interfaces<'a>(
        &'a self,
        ctx: &'a CollectionContext,
        filter: Option<&'a Filter<Interface>>,
    ) -> BoxFuture<'a, Result<Vec<Interface>>> {
        Box::pin(async move {
            ctx.ensure_active()?;
            let f = self.registry.lookup_interfaces(&self.class)?;
            let mut interfaces = f(ctx).await?;
            if let Some(filter) = filter {
                interfaces.retain(|i| filter(i));
            }
            Ok(interfaces)
        })
    }

    fn cpu<'a>(
        &'a self,
        ctx: &'a CollectionContext,
        filter: Option<&'a Filter<Cpu>>,
    ) -> BoxFuture<'a, Result<CpuComponent>> {
        Box::pin(async move {
            ctx.ensure_active()?;
            let f = self.registry.lookup_cpu(&self.class)?;
            let mut component = f(ctx).await?;
            if let Some(filter) = filter {
                component.cpus.retain(|c| filter(c));
            }
            Ok(component)
        })
    }

    fn memory<'a>(
        &'a self,
        ctx: &'a CollectionContext,
        filter: Option<&'a Filter<MemoryPool>>,
    ) -> BoxFuture<'a, Result<MemoryComponent>> {
        Box::pin(async move {
            ctx.ensure_active()?;
            let f = self.registry.lookup_memory(&self.class)?;
            let mut component = f(ctx).await?;
            if let Some(filter) = filter {
                component.pools.retain(|p| filter(p));
            }
            Ok(component)
        })
    }

    fn disk<'a>(
        &'a self,
        ctx: &'a CollectionContext,
        filter: Option<&'a Filter<DiskStorage>>,
    ) -> BoxFuture<'a, Result<DiskComponent>> {
        Box::pin(async move {
            ctx.ensure_active()?;
            let f = self.registry.lookup_disk(&self.class)?;
            let mut component = f(ctx).await?;
            if let Some(filter) = filter {
                component.storages.retain(|s| filter(s));
            }
            Ok(component)
        })
    }

    fn ups<'a>(&'a self, ctx: &'a CollectionContext) -> BoxFuture<'a, Result<UpsComponent>> {
        Box::pin(async move {
            ctx.ensure_active()?;
            let f = self.registry.lookup_ups(&self.class)?;
            f(ctx).await
        })
    }

    fn server<'a>(&'a self, ctx: &'a CollectionContext) -> BoxFuture<'a, Result<ServerComponent>> {
        Box::pin(async move {
            ctx.ensure_active()?;
            let f = self.registry.lookup_server(&self.class)?;
            f(ctx).await
        })
    }

    fn sbc<'a>(&'a self, ctx: &'a CollectionContext) -> BoxFuture<'a, Result<SbcComponent>> {
        Box::pin(async move {
            ctx.ensure_active()?;
            let f = self.registry.lookup_sbc(&self.class)?;
            f(ctx).await
        })
    }

    fn hardware_health<'a>(
        &'a self,
        ctx: &'a CollectionContext,
    ) -> BoxFuture<'a, Result<HardwareHealthComponent>> {
        Box::pin(async move {
            ctx.ensure_active()?;
            let f = self.registry.lookup_hardware_health(&self.class)?;
            f(ctx).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::Capability;
    use crate::error::Error;

    fn fixed_interfaces(_: &CollectionContext) -> BoxFuture<'_, Result<Vec<Interface>>> {
        Box::pin(async {
            Ok(vec![
                Interface {
                    if_index: Some(1),
                    if_name: Some("eth0".into()),
                    ..Default::default()
                },
                Interface {
                    if_index: Some(2),
                    if_name: Some("Radio0/1".into()),
                    ..Default::default()
                },
            ])
        })
    }

    #[tokio::test]
    async fn filter_is_applied_to_the_collection() {
        let mut registry = ClassRegistry::new();
        registry.register_interfaces("generic", fixed_interfaces);
        let class = GenericDeviceClass::new("generic", Arc::new(registry));

        let ctx = CollectionContext::new();
        let all = class.interfaces(&ctx, None).await.unwrap();
        assert_eq!(all.len(), 2);

        let filter = |i: &Interface| i.if_name.as_deref() == Some("eth0");
        let filtered = class.interfaces(&ctx, Some(&filter)).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].if_index, Some(1));
    }

    #[tokio::test]
    async fn missing_capability_is_unsupported() {
        let registry = ClassRegistry::new();
        let class = GenericDeviceClass::new("generic", Arc::new(registry));
        let ctx = CollectionContext::new();

        let err = class.cpu(&ctx, None).await.unwrap_err();
        match *err {
            Error::CapabilityUnsupported { capability, .. } => {
                assert_eq!(capability, Capability::Cpu);
            }
            ref other => panic!("expected CapabilityUnsupported, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn cancelled_context_short_circuits() {
        let mut registry = ClassRegistry::new();
        registry.register_interfaces("generic", fixed_interfaces);
        let class = GenericDeviceClass::new("generic", Arc::new(registry));

        let ctx = CollectionContext::new();
        ctx.cancellation().cancel();
        let err = class.interfaces(&ctx, None).await.unwrap_err();
        assert!(matches!(*err, Error::Cancelled));
    }
}
