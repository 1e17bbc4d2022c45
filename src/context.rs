//! Request-scoped collection context.
//!
//! A device collection run executes against one [`CollectionContext`], which
//! binds the SNMP access port and the cancellation token for the run. The
//! context is threaded explicitly through the composition chain, so deeply
//! nested decorator layers reach the port without every intermediate layer
//! carrying its own connection state.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};
use crate::oid::Oid;
use crate::snmp::SnmpPort;
use crate::value::VarBind;

/// Context for one device collection run.
///
/// Holds the optional SNMP port binding and the run's cancellation token.
/// Capabilities that need protocol access call [`walk`](Self::walk), which
/// fails with [`Error::NoConnection`] when no port is bound and with
/// [`Error::Cancelled`] once the run is cancelled.
///
/// # Example
///
/// ```rust
/// use snmp_collect::context::CollectionContext;
///
/// // A context without a binding is valid to construct; capabilities that
/// // need the port fail at invocation time.
/// let unbound = CollectionContext::new();
/// assert!(unbound.port().is_err());
/// assert!(unbound.ensure_active().is_ok());
/// ```
#[derive(Clone)]
pub struct CollectionContext {
    port: Option<Arc<dyn SnmpPort>>,
    cancel: CancellationToken,
}

impl CollectionContext {
    /// Create a context with no port bound and a fresh cancellation token.
    pub fn new() -> Self {
        Self {
            port: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Bind an SNMP access port to this run.
    pub fn with_port(mut self, port: Arc<dyn SnmpPort>) -> Self {
        self.port = Some(port);
        self
    }

    /// Use an externally owned cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// The bound SNMP port, or [`Error::NoConnection`].
    pub fn port(&self) -> Result<&dyn SnmpPort> {
        self.port
            .as_deref()
            .ok_or_else(|| Error::NoConnection.boxed())
    }

    /// The run's cancellation token.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Fail with [`Error::Cancelled`] once the run has been cancelled.
    pub fn ensure_active(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            Err(Error::Cancelled.boxed())
        } else {
            Ok(())
        }
    }

    /// Walk a subtree through the bound port.
    ///
    /// Checks cancellation before issuing the walk, so a cancelled run stops
    /// producing protocol traffic.
    pub async fn walk(&self, root: &Oid) -> Result<Vec<VarBind>> {
        self.ensure_active()?;
        tracing::trace!(target: "snmp_collect::context", oid = %root, "walking subtree");
        self.port()?.walk(root).await
    }

    /// Get a single value through the bound port.
    pub async fn get(&self, oid: &Oid) -> Result<VarBind> {
        self.ensure_active()?;
        self.port()?.get(oid).await
    }
}

impl Default for CollectionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CollectionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionContext")
            .field("port_bound", &self.port.is_some())
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}
