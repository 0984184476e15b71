//! Sample dataset the platform ships with
//!
//! Six startup ideas and three featured investors. The registry clones
//! this data at session start; it is never mutated in place.

use crate::core::types::{Idea, IdeaId, Investor};

/// Categories offered when submitting a new idea
pub const CATEGORIES: &[&str] = &[
    "SaaS",
    "HealthTech",
    "EdTech",
    "FinTech",
    "Marketplace",
    "AI/ML",
];

/// The seed idea collection
pub fn seed_ideas() -> Vec<Idea> {
    vec![
        Idea {
            id: IdeaId(1),
            name: "EcoTrack".into(),
            description: "AI-powered carbon footprint tracking for businesses. Automated sustainability reporting and actionable insights.".into(),
            category: "SaaS".into(),
            interests: 1247,
            trending: true,
        },
        Idea {
            id: IdeaId(2),
            name: "HealthSync".into(),
            description: "Unified health data platform connecting wearables, medical records, and wellness apps in one dashboard.".into(),
            category: "HealthTech".into(),
            interests: 892,
            trending: true,
        },
        Idea {
            id: IdeaId(3),
            name: "LearnLoop".into(),
            description: "Personalized microlearning platform using spaced repetition and AI tutoring for professional skills.".into(),
            category: "EdTech".into(),
            interests: 634,
            trending: false,
        },
        Idea {
            id: IdeaId(4),
            name: "PayFlow".into(),
            description: "Instant cross-border payments for freelancers with zero hidden fees and real-time currency conversion.".into(),
            category: "FinTech".into(),
            interests: 1089,
            trending: true,
        },
        Idea {
            id: IdeaId(5),
            name: "LocalBite".into(),
            description: "Hyperlocal food marketplace connecting home cooks with hungry neighbors. Fresh, authentic, community-driven.".into(),
            category: "Marketplace".into(),
            interests: 456,
            trending: false,
        },
        Idea {
            id: IdeaId(6),
            name: "CodeBuddy".into(),
            description: "AI pair programmer that learns your codebase and provides context-aware suggestions and code reviews.".into(),
            category: "AI/ML".into(),
            interests: 2103,
            trending: true,
        },
    ]
}

/// The featured investor profiles
pub fn seed_investors() -> Vec<Investor> {
    vec![
        Investor {
            name: "Sarah Chen".into(),
            title: "General Partner".into(),
            company: "Velocity Ventures".into(),
            location: "San Francisco".into(),
            investment_range: "$500K - $2M".into(),
            focus: vec!["SaaS".into(), "AI/ML".into(), "B2B".into()],
            avatar: "SC".into(),
        },
        Investor {
            name: "Marcus Johnson".into(),
            title: "Angel Investor".into(),
            company: "Independent".into(),
            location: "New York".into(),
            investment_range: "$50K - $250K".into(),
            focus: vec!["FinTech".into(), "Consumer".into(), "HealthTech".into()],
            avatar: "MJ".into(),
        },
        Investor {
            name: "Elena Rodriguez".into(),
            title: "Partner".into(),
            company: "Future Fund".into(),
            location: "Austin".into(),
            investment_range: "$1M - $5M".into(),
            focus: vec!["EdTech".into(), "Marketplace".into(), "SaaS".into()],
            avatar: "ER".into(),
        },
    ]
}
