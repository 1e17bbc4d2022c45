//! Mock SNMP port for testing.
//!
//! Provides a programmable port that can simulate device MIB content and
//! transport failures without a network connection.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::BoxFuture;
use crate::error::{Error, Result};
use crate::oid::Oid;
use crate::snmp::SnmpPort;
use crate::value::{RawValue, VarBind};

/// Mock port state shared between clones.
struct MockSnmpPortInner {
    /// Simulated MIB, ordered by OID.
    data: BTreeMap<Oid, RawValue>,
    /// Subtrees that fail with a transport error when walked.
    failures: BTreeMap<Oid, String>,
    /// Recorded walk roots, in issue order.
    walks: Vec<Oid>,
}

/// Mock SNMP port for testing capability implementations.
///
/// # Example
///
/// ```rust
/// use snmp_collect::snmp::MockSnmpPort;
/// use snmp_collect::{Oid, RawValue};
///
/// let port = MockSnmpPort::new();
/// port.insert("1.3.6.1.2.1.2.2.1.2.1", RawValue::from("eth0"));
/// port.insert("1.3.6.1.2.1.2.2.1.2.2", RawValue::from("Radio0/1"));
///
/// // Or make a whole subtree fail:
/// port.fail_subtree("1.3.6.1.4.1.2509", "host unreachable");
/// ```
#[derive(Clone)]
pub struct MockSnmpPort {
    inner: Arc<Mutex<MockSnmpPortInner>>,
}

impl MockSnmpPort {
    /// Create an empty mock port.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockSnmpPortInner {
                data: BTreeMap::new(),
                failures: BTreeMap::new(),
                walks: Vec::new(),
            })),
        }
    }

    /// Insert a value at an OID.
    pub fn insert(&self, oid: &str, value: RawValue) {
        let mut inner = self.inner.lock().unwrap();
        inner.data.insert(Oid::from(oid), value);
    }

    /// Make every walk of `root` (and of subtrees under it) fail.
    pub fn fail_subtree(&self, root: &str, message: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.failures.insert(Oid::from(root), message.to_owned());
    }

    /// Walk roots issued so far, in order.
    pub fn recorded_walks(&self) -> Vec<Oid> {
        self.inner.lock().unwrap().walks.clone()
    }
}

impl Default for MockSnmpPort {
    fn default() -> Self {
        Self::new()
    }
}

impl SnmpPort for MockSnmpPort {
    fn walk<'a>(&'a self, root: &'a Oid) -> BoxFuture<'a, Result<Vec<VarBind>>> {
        Box::pin(async move {
            let mut inner = self.inner.lock().unwrap();
            inner.walks.push(root.clone());

            if let Some((failed_root, message)) = inner
                .failures
                .iter()
                .find(|(r, _)| root.is_under(r) || r.is_under(root))
            {
                return Err(Error::Walk {
                    oid: failed_root.clone(),
                    source: message.clone().into(),
                }
                .boxed());
            }

            Ok(inner
                .data
                .iter()
                .filter(|(oid, _)| oid.is_under(root))
                .map(|(oid, value)| VarBind::new(oid.clone(), value.clone()))
                .collect())
        })
    }

    fn get<'a>(&'a self, oid: &'a Oid) -> BoxFuture<'a, Result<VarBind>> {
        Box::pin(async move {
            let inner = self.inner.lock().unwrap();
            match inner.data.get(oid) {
                Some(value) => Ok(VarBind::new(oid.clone(), value.clone())),
                None => Err(Error::Walk {
                    oid: oid.clone(),
                    source: "no such object".into(),
                }
                .boxed()),
            }
        })
    }
}
