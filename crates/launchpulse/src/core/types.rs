//! Core type definitions for the idea registry
//!
//! This module contains the fundamental types used throughout LaunchPulse:
//! idea records, drafts, investor profiles, and immutable snapshots.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::RegistryError;

/// Identifier for a single idea
///
/// Ids are assigned by the registry, start at 1, and are never reused
/// within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdeaId(pub u64);

impl IdeaId {
    /// Raw numeric value of the id
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IdeaId {
    fn from(value: u64) -> Self {
        IdeaId(value)
    }
}

/// A single startup idea held by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    /// Registry-assigned identifier, immutable once created
    pub id: IdeaId,
    /// Short display name
    pub name: String,
    /// One-paragraph pitch
    pub description: String,
    /// Category label, e.g. "SaaS" or "FinTech"
    pub category: String,
    /// Total interest count, including counts present in the seed data
    pub interests: u64,
    /// Editorial promotion flag; never set by creation
    pub trending: bool,
}

impl Idea {
    /// Build a freshly created idea: zero interests, not trending
    pub fn new(
        id: IdeaId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category: category.into(),
            interests: 0,
            trending: false,
        }
    }
}

/// Caller-supplied fields for a new idea
///
/// Every field is required and must contain at least one non-whitespace
/// character. Empty drafts are rejected before any state changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaDraft {
    pub name: String,
    pub description: String,
    pub category: String,
}

impl IdeaDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
        }
    }

    /// Check that every field is non-empty
    ///
    /// Whitespace-only values count as empty. Returns the first offending
    /// field so the caller can point at it.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("category", &self.category),
        ] {
            if value.trim().is_empty() {
                return Err(RegistryError::validation(field, "must not be empty"));
            }
        }
        Ok(())
    }
}

/// An investor profile from the featured-investor dataset
///
/// Investors are read-only records; the registry never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investor {
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub investment_range: String,
    pub focus: Vec<String>,
    pub avatar: String,
}

/// Immutable view of the registry at a point in time
///
/// Snapshots are produced by every mutating operation and by
/// [`IdeaRegistry::snapshot`](crate::core::IdeaRegistry::snapshot).
/// Ideas are ordered newest-first for inserted ideas, with seed ideas in
/// their original order behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    ideas: Vec<Idea>,
    marked: BTreeSet<IdeaId>,
}

impl Snapshot {
    pub(crate) fn new(ideas: Vec<Idea>, marked: BTreeSet<IdeaId>) -> Self {
        Self { ideas, marked }
    }

    /// Ordered sequence of ideas, newest first
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// Ids the current viewer has marked interested
    pub fn marked(&self) -> &BTreeSet<IdeaId> {
        &self.marked
    }

    /// Whether the viewer has marked the given idea
    pub fn is_marked(&self, id: IdeaId) -> bool {
        self.marked.contains(&id)
    }

    /// Look up an idea by id
    pub fn get(&self, id: IdeaId) -> Option<&Idea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    /// Number of ideas in the snapshot
    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_id_display() {
        assert_eq!(IdeaId(7).to_string(), "7");
        assert_eq!(IdeaId::from(3).value(), 3);
    }

    #[test]
    fn test_new_idea_defaults() {
        let idea = Idea::new(IdeaId(4), "X", "Y", "Z");
        assert_eq!(idea.interests, 0);
        assert!(!idea.trending);
    }

    #[test]
    fn test_draft_validation_accepts_filled_fields() {
        let draft = IdeaDraft::new("EcoTrack", "Carbon tracking", "SaaS");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_validation_rejects_empty_name() {
        let draft = IdeaDraft::new("", "Carbon tracking", "SaaS");
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_draft_validation_rejects_whitespace_only() {
        let draft = IdeaDraft::new("EcoTrack", "   \t ", "SaaS");
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_snapshot_lookup() {
        let ideas = vec![Idea::new(IdeaId(1), "A", "B", "C")];
        let snapshot = Snapshot::new(ideas, BTreeSet::new());
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get(IdeaId(1)).is_some());
        assert!(snapshot.get(IdeaId(2)).is_none());
        assert!(!snapshot.is_marked(IdeaId(1)));
    }
}
