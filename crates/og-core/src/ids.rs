//! Opaque node identifier.
//!
//! OSM identifiers are carried as text exactly as they appear in the source
//! extract.  They are never parsed as integers: `"007"` and `"7"` are
//! different nodes, and negative editor-local ids pass through untouched.
//!
//! The inner `Arc<str>` makes cloning a pointer bump, which matters because
//! every edge stores its neighbour's id.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Identifier of an OSM point entity, compared and hashed as a string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(Arc<str>);

impl NodeId {
    #[inline]
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

// Lets `IndexMap<NodeId, _>::get` take a plain `&str`.
impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NodeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NodeId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Ok(NodeId::new(&s))
    }
}
