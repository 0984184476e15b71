//! The idea registry: ordered ideas plus the viewer's interest marks
//!
//! This is the only stateful component in the system. Both mutating
//! operations are atomic: they either apply fully and return a fresh
//! snapshot, or fail and leave the registry untouched.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::core::error::RegistryError;
use crate::core::seed::seed_ideas;
use crate::core::types::{Idea, IdeaDraft, IdeaId, Snapshot};

/// In-memory registry of startup ideas for a single viewer session
///
/// Holds the ordered idea collection and the set of ids the viewer has
/// marked interested. Marks and per-idea interest counts move in
/// lockstep: marking adds exactly 1 to that idea's count, unmarking
/// removes exactly 1.
#[derive(Debug, Clone, Default)]
pub struct IdeaRegistry {
    ideas: Vec<Idea>,
    marked: BTreeSet<IdeaId>,
    /// Highest id ever assigned; next insert uses `next_id + 1`
    next_id: u64,
}

impl IdeaRegistry {
    /// Create an empty registry
    ///
    /// The first inserted idea receives id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the sample startup dataset
    pub fn with_seed() -> Self {
        Self::from_ideas(seed_ideas())
    }

    /// Create a registry from an explicit idea collection
    ///
    /// The collection order is preserved as-is. The id counter resumes
    /// from the maximum id present, so new ids stay unique.
    pub fn from_ideas(ideas: Vec<Idea>) -> Self {
        let next_id = ideas.iter().map(|idea| idea.id.value()).max().unwrap_or(0);
        Self {
            ideas,
            marked: BTreeSet::new(),
            next_id,
        }
    }

    /// Flip the viewer's interest mark for an idea
    ///
    /// Marking increments that idea's interest count by 1; unmarking
    /// decrements it by 1. The membership check and the count adjustment
    /// are a single logical operation.
    ///
    /// Returns `NotFound` and changes nothing when `id` does not
    /// reference an existing idea.
    pub fn toggle_interest(&mut self, id: IdeaId) -> Result<Snapshot, RegistryError> {
        let idea = self
            .ideas
            .iter_mut()
            .find(|idea| idea.id == id)
            .ok_or_else(|| RegistryError::not_found(id))?;

        if self.marked.remove(&id) {
            // The lockstep invariant guarantees at least 1 here
            idea.interests = idea.interests.saturating_sub(1);
            debug!(%id, interests = idea.interests, "interest unmarked");
        } else {
            self.marked.insert(id);
            idea.interests += 1;
            debug!(%id, interests = idea.interests, "interest marked");
        }

        Ok(self.snapshot())
    }

    /// Append a new idea from a draft
    ///
    /// The draft is validated first; a rejected draft changes nothing.
    /// The new idea gets the next unused id, zero interests, no trending
    /// flag, and is placed at the front of the collection (newest-first).
    pub fn add_idea(&mut self, draft: IdeaDraft) -> Result<Snapshot, RegistryError> {
        draft.validate()?;

        self.next_id += 1;
        let id = IdeaId(self.next_id);
        let idea = Idea::new(id, draft.name, draft.description, draft.category);
        info!(%id, name = %idea.name, category = %idea.category, "idea added");
        self.ideas.insert(0, idea);

        Ok(self.snapshot())
    }

    /// Immutable view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.ideas.clone(), self.marked.clone())
    }

    /// Number of ideas currently held
    pub fn idea_count(&self) -> usize {
        self.ideas.len()
    }
}
