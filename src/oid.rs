//! Object Identifier (OID) type.
//!
//! The core treats OIDs as opaque dotted-decimal strings: they are used as
//! walk roots and error context, never parsed into arcs. Vendor code names
//! its subtrees as literals (e.g. `1.3.6.1.4.1.2509.9.3.2.4.1.1`).

use std::fmt;

/// An opaque dotted-decimal OID (e.g. `1.3.6.1.2.1.2.2.1.2`).
///
/// # Examples
///
/// ```
/// use snmp_collect::Oid;
///
/// let root = Oid::from("1.3.6.1.2.1.2");
/// let leaf = Oid::from("1.3.6.1.2.1.2.2.1.2.1");
/// assert!(leaf.is_under(&root));
/// assert_eq!(root.to_string(), "1.3.6.1.2.1.2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid(Box<str>);

impl Oid {
    /// The dotted-decimal representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this OID lies within the subtree rooted at `root`.
    ///
    /// String-prefix match on arc boundaries, so `1.3.6.1.21` is *not*
    /// under `1.3.6.1.2`.
    pub fn is_under(&self, root: &Oid) -> bool {
        match self.0.strip_prefix(root.as_str()) {
            Some("") => true,
            Some(rest) => rest.starts_with('.'),
            None => false,
        }
    }

    /// Append an index (or further arcs) below this OID.
    pub fn child(&self, suffix: &str) -> Oid {
        Oid(format!("{}.{}", self.0, suffix).into_boxed_str())
    }
}

impl From<&str> for Oid {
    fn from(s: &str) -> Self {
        Oid(s.into())
    }
}

impl From<String> for Oid {
    fn from(s: String) -> Self {
        Oid(s.into_boxed_str())
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtree_membership() {
        let root = Oid::from("1.3.6.1.2.1.2");
        assert!(Oid::from("1.3.6.1.2.1.2").is_under(&root));
        assert!(Oid::from("1.3.6.1.2.1.2.2.1.2.1").is_under(&root));
        assert!(!Oid::from("1.3.6.1.2.1.3").is_under(&root));
        // Arc-boundary check: "...2.1.20" must not match the "...2.1.2" root.
        assert!(!Oid::from("1.3.6.1.2.1.20").is_under(&root));
    }

    #[test]
    fn child_appends_arcs() {
        let root = Oid::from("1.3.6.1.2.1.2.2.1.2");
        assert_eq!(root.child("7").as_str(), "1.3.6.1.2.1.2.2.1.2.7");
    }

    #[test]
    fn ordering_is_lexicographic_over_the_string_form() {
        // Good enough for deterministic mock walks; the core never relies on
        // numeric arc ordering.
        let a = Oid::from("1.3.6.1.1");
        let b = Oid::from("1.3.6.1.2");
        assert!(a < b);
    }
}
