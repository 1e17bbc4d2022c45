//! # snmp-collect
//!
//! Device-class composition and SNMP-backed telemetry normalization.
//!
//! A device resolves to a class of behavior; generic per-class capability
//! implementations produce a baseline, and vendor code communicators layered
//! on top correct, enrich, or override it. The result is one normalized,
//! technology-agnostic data model per device, regardless of how exotic the
//! hardware underneath is.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use snmp_collect::class::{ClassRegistry, compose};
//! use snmp_collect::context::CollectionContext;
//! use snmp_collect::snmp::SnmpPort;
//!
//! # async fn example(port: Arc<dyn SnmpPort>) -> snmp_collect::Result<()> {
//! let mut registry = ClassRegistry::new();
//! snmp_collect::vendor::register_all(&mut registry);
//! let registry = Arc::new(registry);
//!
//! // One collection run: one context, one bound SNMP port.
//! let provider = compose(Arc::clone(&registry), "aviat");
//! let ctx = CollectionContext::new().with_port(port);
//!
//! let interfaces = provider.interfaces(&ctx, None).await?;
//! for interface in &interfaces {
//!     println!("{:?} {:?}", interface.if_name, interface.if_oper_status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error semantics
//!
//! [`Error::CapabilityUnsupported`] means a device class simply has no
//! implementation for a capability; callers skip it. Every other error fails
//! only the capability that produced it. Values that cannot be decoded are
//! errors, never zero placeholders, and a decorator that fails mid-walk
//! never leaks a partially-enriched result.

pub mod class;
pub mod context;
pub mod device;
pub mod error;
pub mod oid;
pub mod prelude;
pub mod snmp;
pub mod value;
pub mod vendor;

pub use class::{Capability, ClassRegistry, Communicator, compose};
pub use context::CollectionContext;
pub use error::{Error, Result, ValueKind};
pub use oid::Oid;
pub use value::{RawValue, Value, VarBind};

use std::future::Future;
use std::pin::Pin;

/// Boxed future used across the capability traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
