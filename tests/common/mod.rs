//! Shared fixtures: a mock device and a populated class registry.

#![allow(dead_code)]

use std::sync::Arc;

use snmp_collect::class::{ClassRegistry, compose};
use snmp_collect::context::CollectionContext;
use snmp_collect::device::{Cpu, CpuComponent, Interface, Properties};
use snmp_collect::snmp::MockSnmpPort;
use snmp_collect::value::RawValue;
use snmp_collect::{BoxFuture, Communicator, Oid, Result};

/// ifName column of the IF-MIB.
pub const IF_NAME: &str = "1.3.6.1.2.1.31.1.1.1.1";

/// Generic interface list: walk ifName and normalize index + name.
pub fn generic_interfaces(ctx: &CollectionContext) -> BoxFuture<'_, Result<Vec<Interface>>> {
    Box::pin(async move {
        let varbinds = ctx.walk(&Oid::from(IF_NAME)).await?;
        let mut interfaces = Vec::with_capacity(varbinds.len());
        for (i, varbind) in varbinds.iter().enumerate() {
            interfaces.push(Interface {
                if_index: Some(i as u64 + 1),
                if_name: Some(varbind.decode_string()?),
                ..Default::default()
            });
        }
        Ok(interfaces)
    })
}

/// Generic CPU load: a fixed two-core reading.
pub fn generic_cpu(_ctx: &CollectionContext) -> BoxFuture<'_, Result<CpuComponent>> {
    Box::pin(async {
        Ok(CpuComponent {
            cpus: vec![
                Cpu {
                    label: Some("core0".into()),
                    load: Some(12.5),
                },
                Cpu {
                    label: Some("core1".into()),
                    load: Some(80.0),
                },
            ],
        })
    })
}

/// Generic properties implementation.
pub fn generic_properties(_ctx: &CollectionContext) -> BoxFuture<'_, Result<Properties>> {
    Box::pin(async {
        Ok(Properties {
            vendor: Some("generic".into()),
            ..Default::default()
        })
    })
}

/// Registry with the generic class and all built-in vendor communicators.
pub fn registry() -> Arc<ClassRegistry> {
    let mut registry = ClassRegistry::new();
    registry.register_interfaces("generic", generic_interfaces);
    registry.register_cpu("generic", generic_cpu);
    registry.register_properties("generic", generic_properties);
    registry.register_class("routeros", Some("generic"));
    snmp_collect::vendor::register_all(&mut registry);
    Arc::new(registry)
}

/// Resolve a provider from the shared fixture registry.
pub fn provider(class: &str) -> Arc<dyn Communicator> {
    compose(registry(), class)
}

/// A mock radio device: one radio port plus one ethernet port, and the
/// Aviat modem capacity tables.
pub fn radio_device() -> MockSnmpPort {
    let port = MockSnmpPort::new();
    port.insert("1.3.6.1.2.1.31.1.1.1.1.1", RawValue::from("Radio0/1"));
    port.insert("1.3.6.1.2.1.31.1.1.1.1.2", RawValue::from("GigabitEthernet0/1"));
    // Max capacity: one link, already in bit/s.
    port.insert("1.3.6.1.4.1.2509.9.3.2.4.1.1.1", RawValue::Gauge32(500));
    // Current Tx/Rx capacity, kbit/s.
    port.insert("1.3.6.1.4.1.2509.9.3.2.1.1.11.1", RawValue::Gauge32(10));
    port.insert("1.3.6.1.4.1.2509.9.3.2.1.1.12.1", RawValue::Gauge32(20));
    port
}

/// Context bound to the given mock device.
pub fn ctx(port: &MockSnmpPort) -> CollectionContext {
    CollectionContext::new().with_port(Arc::new(port.clone()))
}
