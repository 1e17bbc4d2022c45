//! SNMP access port abstraction.
//!
//! The core consumes SNMP as a capability, it does not implement the
//! protocol. [`SnmpPort`] is the minimal surface a transport must provide:
//! subtree walks and single gets. Session handling, timeouts and retries are
//! the port's responsibility; the core only sees terminal success or error
//! per call.

#[cfg(any(test, feature = "testing"))]
pub mod mock;

#[cfg(any(test, feature = "testing"))]
pub use mock::MockSnmpPort;

use crate::BoxFuture;
use crate::error::Result;
use crate::oid::Oid;
use crate::value::VarBind;

/// Client-side SNMP access abstraction.
///
/// Implementations wrap a real SNMP session (or a test fixture) and are
/// bound to a collection run via
/// [`CollectionContext`](crate::context::CollectionContext). Walks return
/// the varbinds under a subtree in agent order; an empty result means the
/// subtree is absent on the device, which is not an error.
pub trait SnmpPort: Send + Sync {
    /// Read all values under `root`.
    ///
    /// Transport failures surface as [`Error::Walk`](crate::Error::Walk).
    fn walk<'a>(&'a self, root: &'a Oid) -> BoxFuture<'a, Result<Vec<VarBind>>>;

    /// Read the single value at `oid`.
    fn get<'a>(&'a self, oid: &'a Oid) -> BoxFuture<'a, Result<VarBind>>;
}
