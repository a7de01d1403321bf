//! Change detection output types.

use serde::Serialize;
use serde_json::Value;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Coordinate of a single leaf field: (group, item, field).
///
/// A plain value type with structural equality, hashing, and ordering so it
/// can key a deterministic map. No identity semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FieldCoord {
    /// Top-level group identifier
    pub group: String,
    /// Item identifier within the group
    pub item: String,
    /// Field identifier within the item
    pub field: String,
}

impl FieldCoord {
    /// Create a coordinate from its three components
    pub fn new(
        group: impl Into<String>,
        item: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            item: item.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for FieldCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.group, self.item, self.field)
    }
}

/// The set of changed leaf coordinates, each mapped to its prior value.
///
/// Set-like: iteration follows coordinate ordering, not discovery order.
/// Output ordering always follows the current snapshot instead, so nothing
/// downstream depends on this ordering beyond determinism.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangeSet {
    changes: BTreeMap<FieldCoord, Value>,
}

impl ChangeSet {
    /// Create an empty change set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the prior value for a changed coordinate
    pub fn insert(&mut self, coord: FieldCoord, prior: Value) {
        self.changes.insert(coord, prior);
    }

    /// Prior value for a coordinate, if it changed
    pub fn get(&self, coord: &FieldCoord) -> Option<&Value> {
        self.changes.get(coord)
    }

    /// True if the coordinate is recorded as changed
    pub fn contains(&self, coord: &FieldCoord) -> bool {
        self.changes.contains_key(coord)
    }

    /// Number of changed coordinates
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// True if no changes were detected
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Iterate changes in coordinate order
    pub fn iter(&self) -> btree_map::Iter<'_, FieldCoord, Value> {
        self.changes.iter()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = (&'a FieldCoord, &'a Value);
    type IntoIter = btree_map::Iter<'a, FieldCoord, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}
