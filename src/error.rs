//! Error types for snmp-collect.
//!
//! This module provides:
//!
//! - [`Error`] - The main error type covering all collection failure modes
//! - [`ValueKind`] - The semantic type a decode was asked to produce
//!
//! # Error Handling
//!
//! Errors are boxed for efficiency: `Result<T> = Result<T, Box<Error>>`.
//!
//! Callers of capability operations must distinguish two classes of failure:
//!
//! - [`Error::CapabilityUnsupported`] means the resolved device class declares
//!   no implementation for the capability. This is absence of telemetry, not a
//!   failed collection, and should be skipped.
//! - Every other variant means the collection attempt for that capability
//!   failed. Sibling capabilities in the same run are unaffected.
//!
//! ```rust
//! use snmp_collect::{Error, Result};
//!
//! fn handle<T>(result: Result<T>) {
//!     match result {
//!         Ok(_) => println!("collected"),
//!         Err(e) => match &*e {
//!             Error::CapabilityUnsupported { class, capability } => {
//!                 println!("{class} has no {capability} support, skipping");
//!             }
//!             other => println!("collection failed: {other}"),
//!         },
//!     }
//! }
//! ```

use crate::class::Capability;
use crate::oid::Oid;

/// Result type alias using the library's boxed Error type.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Semantic type requested from a raw SNMP value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Unsigned 64-bit integer.
    Unsigned,
    /// Signed 64-bit integer.
    Signed,
    /// 64-bit float.
    Float,
    /// UTF-8 string.
    String,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsigned => write!(f, "unsigned integer"),
            Self::Signed => write!(f, "signed integer"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
        }
    }
}

/// The main error type for all snmp-collect operations.
///
/// Errors are boxed (via [`Result`]) to keep the size small on the stack.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No SNMP access port is bound to the collection context.
    ///
    /// Fatal for the invoking capability only; the caller forgot to bind a
    /// port before starting the run.
    #[error("no SNMP connection bound to the collection context")]
    NoConnection,

    /// The class chain declares no implementation for the capability.
    ///
    /// Callers must treat this as "no telemetry available", not as a failed
    /// collection.
    #[error("device class '{class}' does not support capability '{capability}'")]
    CapabilityUnsupported {
        class: Box<str>,
        capability: Capability,
    },

    /// Transport-level failure during a subtree walk.
    #[error("walk of {oid} failed")]
    Walk {
        oid: Oid,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A returned value could not be converted to its required semantic type.
    ///
    /// Never coerced to a default value; the whole capability invocation
    /// fails instead.
    #[error("value at {oid} cannot be decoded as {requested}")]
    Decode { oid: Oid, requested: ValueKind },

    /// An integer code or label outside the documented set for an enum.
    #[error("invalid {kind}: '{value}'")]
    EnumDecode {
        kind: &'static str,
        value: Box<str>,
    },

    /// The collection run was cancelled.
    ///
    /// A cancelled run stops issuing walks; partial results are discarded.
    #[error("collection run cancelled")]
    Cancelled,
}

impl Error {
    /// Box this error (convenience for constructing boxed errors).
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Whether this error means "capability absent" rather than "collection failed".
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::CapabilityUnsupported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size_budget() {
        // Error size should stay bounded to avoid bloating Result types.
        assert!(
            std::mem::size_of::<Error>() <= 64,
            "Error size {} exceeds 64-byte budget",
            std::mem::size_of::<Error>()
        );

        // Result<(), Box<Error>> should be pointer-sized (8 bytes on 64-bit).
        assert_eq!(
            std::mem::size_of::<Result<()>>(),
            std::mem::size_of::<*const ()>(),
            "Result<()> should be pointer-sized"
        );
    }

    #[test]
    fn unsupported_is_absence() {
        let err = Error::CapabilityUnsupported {
            class: "generic".into(),
            capability: Capability::Cpu,
        };
        assert!(err.is_unsupported());
        assert!(!Error::NoConnection.is_unsupported());
    }

    #[test]
    fn display_names_class_and_capability() {
        let err = Error::CapabilityUnsupported {
            class: "ios".into(),
            capability: Capability::Interfaces,
        };
        let msg = err.to_string();
        assert!(msg.contains("ios"));
        assert!(msg.contains("interfaces"));
    }
}
