//! Code communicator: the imperative per-class override layer.

use std::sync::Arc;

use crate::BoxFuture;
use crate::context::CollectionContext;
use crate::device::{
    Cpu, CpuComponent, DiskComponent, DiskStorage, HardwareHealthComponent, Interface,
    MemoryComponent, MemoryPool, Properties, SbcComponent, ServerComponent, UpsComponent,
};
use crate::error::Result;

use super::{Communicator, Filter};

/// An override for a capability whose collection takes an entry filter.
///
/// Receives the wrapped provider, so the override decides whether to obtain
/// the baseline (and must propagate the baseline's error unchanged if it
/// does) or bypass it.
pub type FilteredOverride<T, E> = Arc<
    dyn for<'a> Fn(
            &'a dyn Communicator,
            &'a CollectionContext,
            Option<&'a Filter<E>>,
        ) -> BoxFuture<'a, Result<T>>
        + Send
        + Sync,
>;

/// An override for a scalar capability.
pub type PlainOverride<T> = Arc<
    dyn for<'a> Fn(&'a dyn Communicator, &'a CollectionContext) -> BoxFuture<'a, Result<T>>
        + Send
        + Sync,
>;

/// The override set one class contributes to the composition chain.
///
/// Every field is optional; capabilities without an override delegate
/// transparently through the [`CodeCommunicator`].
#[derive(Default, Clone)]
pub struct VendorOverrides {
    pub properties: Option<PlainOverride<Properties>>,
    pub interfaces: Option<FilteredOverride<Vec<Interface>, Interface>>,
    pub cpu: Option<FilteredOverride<CpuComponent, Cpu>>,
    pub memory: Option<FilteredOverride<MemoryComponent, MemoryPool>>,
    pub disk: Option<FilteredOverride<DiskComponent, DiskStorage>>,
    pub ups: Option<PlainOverride<UpsComponent>>,
    pub server: Option<PlainOverride<ServerComponent>>,
    pub sbc: Option<PlainOverride<SbcComponent>>,
    pub hardware_health: Option<PlainOverride<HardwareHealthComponent>>,
}

/// Decorator wrapping a capability provider with one class's
/// [`VendorOverrides`].
///
/// For overridden capabilities the override function runs with the wrapped
/// provider in hand; for everything else the decorator is an identity
/// wrapper with no side effects.
pub struct CodeCommunicator {
    class: Box<str>,
    inner: Arc<dyn Communicator>,
    overrides: Arc<VendorOverrides>,
}

impl CodeCommunicator {
    /// Wrap `inner` with the overrides registered for `class`.
    pub fn new(class: &str, inner: Arc<dyn Communicator>, overrides: Arc<VendorOverrides>) -> Self {
        Self {
            class: class.into(),
            inner,
            overrides,
        }
    }
}

impl Communicator for CodeCommunicator {
    fn class(&self) -> &str {
        // The composed chain reports the identity it was resolved for.
        self.inner.class()
    }

    fn properties<'a>(&'a self, ctx: &'a CollectionContext) -> BoxFuture<'a, Result<Properties>> {
        match &self.overrides.properties {
            Some(f) => {
                tracing::debug!(target: "snmp_collect::class", layer = %self.class, "properties override");
                f(self.inner.as_ref(), ctx)
            }
            None => self.inner.properties(ctx),
        }
    }

    fn interfaces<'a>(
        &'a self,
        ctx: &'a CollectionContext,
        filter: Option<&'a Filter<Interface>>,
    ) -> BoxFuture<'a, Result<Vec<Interface>>> {
        match &self.overrides.interfaces {
            Some(f) => {
                tracing::debug!(target: "snmp_collect::class", layer = %self.class, "interfaces override");
                f(self.inner.as_ref(), ctx, filter)
            }
            None => self.inner.interfaces(ctx, filter),
        }
    }

    fn cpu<'a>(
        &'a self,
        ctx: &'a CollectionContext,
        filter: Option<&'a Filter<Cpu>>,
    ) -> BoxFuture<'a, Result<CpuComponent>> {
        match &self.overrides.cpu {
            Some(f) => f(self.inner.as_ref(), ctx, filter),
            None => self.inner.cpu(ctx, filter),
        }
    }

    fn memory<'a>(
        &'a self,
        ctx: &'a CollectionContext,
        filter: Option<&'a Filter<MemoryPool>>,
    ) -> BoxFuture<'a, Result<MemoryComponent>> {
        match &self.overrides.memory {
            Some(f) => f(self.inner.as_ref(), ctx, filter),
            None => self.inner.memory(ctx, filter),
        }
    }

    fn disk<'a>(
        &'a self,
        ctx: &'a CollectionContext,
        filter: Option<&'a Filter<DiskStorage>>,
    ) -> BoxFuture<'a, Result<DiskComponent>> {
        match &self.overrides.disk {
            Some(f) => f(self.inner.as_ref(), ctx, filter),
            None => self.inner.disk(ctx, filter),
        }
    }

    fn ups<'a>(&'a self, ctx: &'a CollectionContext) -> BoxFuture<'a, Result<UpsComponent>> {
        match &self.overrides.ups {
            Some(f) => f(self.inner.as_ref(), ctx),
            None => self.inner.ups(ctx),
        }
    }

    fn server<'a>(&'a self, ctx: &'a CollectionContext) -> BoxFuture<'a, Result<ServerComponent>> {
        match &self.overrides.server {
            Some(f) => f(self.inner.as_ref(), ctx),
            None => self.inner.server(ctx),
        }
    }

    fn sbc<'a>(&'a self, ctx: &'a CollectionContext) -> BoxFuture<'a, Result<SbcComponent>> {
        match &self.overrides.sbc {
            Some(f) => f(self.inner.as_ref(), ctx),
            None => self.inner.sbc(ctx),
        }
    }

    fn hardware_health<'a>(
        &'a self,
        ctx: &'a CollectionContext,
    ) -> BoxFuture<'a, Result<HardwareHealthComponent>> {
        match &self.overrides.hardware_health {
            Some(f) => f(self.inner.as_ref(), ctx),
            None => self.inner.hardware_health(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{ClassRegistry, GenericDeviceClass};

    fn fixed_interfaces(_: &CollectionContext) -> BoxFuture<'_, Result<Vec<Interface>>> {
        Box::pin(async {
            Ok(vec![Interface {
                if_index: Some(1),
                if_name: Some("eth0".into()),
                if_speed: Some(1_000_000_000),
                ..Default::default()
            }])
        })
    }

    fn baseline() -> Arc<dyn Communicator> {
        let mut registry = ClassRegistry::new();
        registry.register_interfaces("generic", fixed_interfaces);
        Arc::new(GenericDeviceClass::new("generic", Arc::new(registry)))
    }

    #[tokio::test]
    async fn without_overrides_results_are_identical_to_inner() {
        let inner = baseline();
        let wrapped = CodeCommunicator::new(
            "vendor",
            Arc::clone(&inner),
            Arc::new(VendorOverrides::default()),
        );

        let ctx = CollectionContext::new();
        let direct = inner.interfaces(&ctx, None).await.unwrap();
        let decorated = wrapped.interfaces(&ctx, None).await.unwrap();
        assert_eq!(direct, decorated);

        // Errors pass through unchanged too.
        let direct_err = inner.cpu(&ctx, None).await.unwrap_err();
        let decorated_err = wrapped.cpu(&ctx, None).await.unwrap_err();
        assert_eq!(direct_err.to_string(), decorated_err.to_string());
    }

    #[tokio::test]
    async fn override_sees_the_wrapped_provider() {
        fn doubled_speed<'a>(
            inner: &'a dyn Communicator,
            ctx: &'a CollectionContext,
            filter: Option<&'a Filter<Interface>>,
        ) -> BoxFuture<'a, Result<Vec<Interface>>> {
            Box::pin(async move {
                let mut interfaces = inner.interfaces(ctx, filter).await?;
                for interface in &mut interfaces {
                    if let Some(speed) = interface.if_speed {
                        interface.if_speed = Some(speed * 2);
                    }
                }
                Ok(interfaces)
            })
        }

        let wrapped = CodeCommunicator::new(
            "vendor",
            baseline(),
            Arc::new(VendorOverrides {
                interfaces: Some(Arc::new(doubled_speed)),
                ..Default::default()
            }),
        );

        let ctx = CollectionContext::new();
        let interfaces = wrapped.interfaces(&ctx, None).await.unwrap();
        assert_eq!(interfaces[0].if_speed, Some(2_000_000_000));
    }

    #[tokio::test]
    async fn override_propagates_inner_error_unchanged() {
        fn enrich_cpu<'a>(
            inner: &'a dyn Communicator,
            ctx: &'a CollectionContext,
            filter: Option<&'a Filter<Cpu>>,
        ) -> BoxFuture<'a, Result<CpuComponent>> {
            Box::pin(async move {
                // Baseline fails (no cpu registered); the decorator must not mask it.
                inner.cpu(ctx, filter).await
            })
        }

        let wrapped = CodeCommunicator::new(
            "vendor",
            baseline(),
            Arc::new(VendorOverrides {
                cpu: Some(Arc::new(enrich_cpu)),
                ..Default::default()
            }),
        );

        let ctx = CollectionContext::new();
        let err = wrapped.cpu(&ctx, None).await.unwrap_err();
        assert!(err.is_unsupported());
    }
}
