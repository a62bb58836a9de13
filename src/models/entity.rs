//! Entity (roster member) model.
//!
//! An entity is one person or item to be placed into a group. Its id is
//! derived from the label so that pair history keyed by ids stays valid
//! across sessions with the same roster.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a roster member.
///
/// Built from the label with `\` and `|` escaped by a backslash, so an id
/// never contains the pair separator `||`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Derives the id for a display label.
    pub fn from_label(label: &str) -> Self {
        let mut id = String::with_capacity(label.len());
        for ch in label.chars() {
            if ch == '\\' || ch == '|' {
                id.push('\\');
            }
            id.push(ch);
        }
        Self(id)
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A roster member: stable id plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Identifier used for pair history.
    pub id: EntityId,
    /// Display string.
    pub label: String,
}

impl Entity {
    /// Creates an entity whose id is derived from the label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: EntityId::from_label(&label),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_label_id() {
        let e = Entity::new("Avery");
        assert_eq!(e.id.as_str(), "Avery");
        assert_eq!(e.label, "Avery");
    }

    #[test]
    fn test_id_never_contains_separator() {
        let e = Entity::new("a||b");
        assert_eq!(e.id.as_str(), "a\\|\\|b");
        assert!(!e.id.as_str().contains("||"));

        let trailing = Entity::new("x|");
        assert_eq!(trailing.id.as_str(), "x\\|");
    }

    #[test]
    fn test_backslash_escaped() {
        let e = Entity::new("a\\b");
        assert_eq!(e.id.as_str(), "a\\\\b");
        assert_ne!(EntityId::from_label("a\\|"), EntityId::from_label("a|"));
    }
}
