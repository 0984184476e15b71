//! Derived analytics over a registry snapshot
//!
//! A pure projection: every call recomputes from the snapshot it is
//! given, so the numbers can never go stale.

use serde::{Deserialize, Serialize};

use crate::core::types::Snapshot;

/// Summary statistics for the analytics dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    /// Number of ideas in the snapshot
    pub total_ideas: usize,
    /// Sum of interest counts over all ideas
    pub total_interests: u64,
    /// Number of ideas flagged as trending
    pub trending_count: usize,
    /// Week-over-week growth percentage shown on the dashboard
    pub weekly_growth: u32,
}

impl Analytics {
    /// Static growth figure from the sample dataset
    pub const WEEKLY_GROWTH: u32 = 24;

    /// Derive analytics from a snapshot
    pub fn derive(snapshot: &Snapshot) -> Self {
        let ideas = snapshot.ideas();
        Self {
            total_ideas: ideas.len(),
            total_interests: ideas.iter().map(|idea| idea.interests).sum(),
            trending_count: ideas.iter().filter(|idea| idea.trending).count(),
            weekly_growth: Self::WEEKLY_GROWTH,
        }
    }
}
