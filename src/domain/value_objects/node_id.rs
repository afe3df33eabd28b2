//! Node identity shared by links, menus and sections

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Identifier of a node in the link tree.
///
/// Assigned once when a [`Link`](crate::Link), [`Menu`](crate::Menu) or
/// [`Section`](crate::Section) is created and never reused, so it can key
/// rendered items for diffing and activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Allocate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
