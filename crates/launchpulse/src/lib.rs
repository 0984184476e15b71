//! LaunchPulse - In-memory idea registry and analytics core
//!
//! A library for managing a session-scoped collection of startup ideas:
//! toggling per-viewer interest marks, submitting new ideas, and deriving
//! analytics from immutable snapshots.
//!
//! # Quick Start
//!
//! ```rust
//! use launchpulse::prelude::*;
//!
//! let mut registry = launchpulse::session();
//!
//! // Mark interest in the first seeded idea
//! let snapshot = registry.toggle_interest(IdeaId(1)).unwrap();
//! assert!(snapshot.is_marked(IdeaId(1)));
//!
//! // Submit a new idea; it lands at the front with a fresh id
//! let snapshot = registry
//!     .add_idea(IdeaDraft::new("PetMatch", "Match shelters with adopters", "Marketplace"))
//!     .unwrap();
//! assert_eq!(snapshot.ideas()[0].name, "PetMatch");
//!
//! // Derive dashboard numbers from the snapshot
//! let analytics = Analytics::derive(&snapshot);
//! assert_eq!(analytics.total_ideas, 7);
//! ```

pub mod core;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Analytics, Idea, IdeaDraft, IdeaId, IdeaRegistry, Investor, RegistryError, Snapshot,
    };
}

/// Create a registry seeded with the sample startup dataset
///
/// This is the entry point the presentation layer uses at session start.
///
/// # Example
/// ```rust
/// let registry = launchpulse::session();
/// assert_eq!(registry.idea_count(), 6);
/// ```
pub fn session() -> core::IdeaRegistry {
    core::IdeaRegistry::with_seed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Analytics, IdeaDraft, IdeaId};

    #[test]
    fn test_session_is_seeded() {
        let registry = session();
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 6);
        assert!(snapshot.marked().is_empty());
    }

    #[test]
    fn test_session_analytics_match_seed() {
        let registry = session();
        let analytics = Analytics::derive(&registry.snapshot());
        assert_eq!(analytics.total_ideas, 6);
        assert_eq!(analytics.total_interests, 1247 + 892 + 634 + 1089 + 456 + 2103);
        assert_eq!(analytics.trending_count, 4);
    }

    #[test]
    fn test_session_round_trip() {
        let mut registry = session();
        registry.toggle_interest(IdeaId(3)).unwrap();
        let snapshot = registry
            .add_idea(IdeaDraft::new("X", "Y", "Z"))
            .unwrap();
        assert_eq!(snapshot.ideas()[0].id, IdeaId(7));
        assert!(snapshot.is_marked(IdeaId(3)));
    }
}
