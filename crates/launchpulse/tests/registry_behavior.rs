//! Behavioral tests for the idea registry and derived analytics
//!
//! Covers toggle idempotence, insertion ordering, rejection atomicity,
//! and aggregate consistency across snapshots.

use launchpulse::prelude::*;

fn single_idea_registry() -> IdeaRegistry {
    IdeaRegistry::from_ideas(vec![Idea {
        id: IdeaId(1),
        name: "EcoTrack".into(),
        description: "Carbon tracking".into(),
        category: "SaaS".into(),
        interests: 5,
        trending: true,
    }])
}

// =============================================================================
// Interest Toggle Tests
// =============================================================================

mod toggling {
    use super::*;

    #[test]
    fn test_toggle_scenario_from_sample_data() {
        let mut registry = single_idea_registry();

        let snapshot = registry.toggle_interest(IdeaId(1)).unwrap();
        assert!(snapshot.is_marked(IdeaId(1)));
        assert_eq!(snapshot.get(IdeaId(1)).unwrap().interests, 6);

        let analytics = Analytics::derive(&snapshot);
        assert_eq!(analytics.total_interests, 6);
        assert_eq!(analytics.trending_count, 1);

        let snapshot = registry.toggle_interest(IdeaId(1)).unwrap();
        assert!(!snapshot.is_marked(IdeaId(1)));
        assert_eq!(snapshot.get(IdeaId(1)).unwrap().interests, 5);
        assert_eq!(Analytics::derive(&snapshot).total_interests, 5);
    }

    #[test]
    fn test_double_toggle_is_identity_on_seeded_registry() {
        let mut registry = launchpulse::session();
        let before = registry.snapshot();
        for idea in before.ideas().to_vec() {
            registry.toggle_interest(idea.id).unwrap();
            registry.toggle_interest(idea.id).unwrap();
        }
        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn test_marks_never_exceed_idea_count() {
        let mut registry = launchpulse::session();
        let ids: Vec<IdeaId> = registry.snapshot().ideas().iter().map(|i| i.id).collect();
        for id in ids {
            let snapshot = registry.toggle_interest(id).unwrap();
            assert!(snapshot.marked().len() <= snapshot.len());
        }
    }

    #[test]
    fn test_unknown_id_leaves_state_untouched() {
        let mut registry = launchpulse::session();
        let before = registry.snapshot();
        let err = registry.toggle_interest(IdeaId(999)).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));
        assert_eq!(registry.snapshot(), before);
    }
}

// =============================================================================
// Idea Creation Tests
// =============================================================================

mod creation {
    use super::*;

    #[test]
    fn test_add_idea_scenario_with_gapped_seed() {
        let mut registry = IdeaRegistry::from_ideas(vec![Idea {
            id: IdeaId(3),
            name: "LearnLoop".into(),
            description: "Microlearning".into(),
            category: "EdTech".into(),
            interests: 0,
            trending: false,
        }]);
        let before = Analytics::derive(&registry.snapshot());

        let snapshot = registry
            .add_idea(IdeaDraft::new("X", "Y", "Z"))
            .unwrap();
        let newest = &snapshot.ideas()[0];
        assert_eq!(newest.id, IdeaId(4));
        assert_eq!(newest.interests, 0);
        assert!(!newest.trending);

        let after = Analytics::derive(&snapshot);
        assert_eq!(after.total_ideas, before.total_ideas + 1);
        assert_eq!(after.trending_count, before.trending_count);
    }

    #[test]
    fn test_new_id_exceeds_every_existing_id() {
        let mut registry = launchpulse::session();
        let max_before = registry
            .snapshot()
            .ideas()
            .iter()
            .map(|idea| idea.id)
            .max()
            .unwrap();
        let snapshot = registry
            .add_idea(IdeaDraft::new("New", "Thing", "SaaS"))
            .unwrap();
        assert!(snapshot.ideas()[0].id > max_before);
    }

    #[test]
    fn test_existing_order_preserved_after_insert() {
        let mut registry = launchpulse::session();
        let order_before: Vec<IdeaId> =
            registry.snapshot().ideas().iter().map(|i| i.id).collect();
        let snapshot = registry
            .add_idea(IdeaDraft::new("New", "Thing", "SaaS"))
            .unwrap();
        let order_after: Vec<IdeaId> = snapshot.ideas()[1..].iter().map(|i| i.id).collect();
        assert_eq!(order_before, order_after);
    }

    #[test]
    fn test_rejected_draft_is_atomic() {
        let mut registry = launchpulse::session();
        let before = registry.snapshot();
        let before_analytics = Analytics::derive(&before);

        for draft in [
            IdeaDraft::new("", "desc", "SaaS"),
            IdeaDraft::new("name", "", "SaaS"),
            IdeaDraft::new("name", "desc", ""),
            IdeaDraft::new("   ", "desc", "SaaS"),
        ] {
            let err = registry.add_idea(draft).unwrap_err();
            assert!(matches!(err, RegistryError::Validation { .. }));
        }

        let after = registry.snapshot();
        assert_eq!(after, before);
        assert_eq!(Analytics::derive(&after), before_analytics);
    }

    #[test]
    fn test_empty_registry_insert_starts_at_one() {
        let mut registry = IdeaRegistry::new();
        let snapshot = registry
            .add_idea(IdeaDraft::new("First", "Ever", "SaaS"))
            .unwrap();
        assert_eq!(snapshot.ideas()[0].id, IdeaId(1));
    }
}

// =============================================================================
// Aggregate Consistency Tests
// =============================================================================

mod aggregates {
    use super::*;

    #[test]
    fn test_totals_match_sum_of_interests() {
        let mut registry = launchpulse::session();
        registry.toggle_interest(IdeaId(1)).unwrap();
        registry.toggle_interest(IdeaId(4)).unwrap();
        let snapshot = registry
            .add_idea(IdeaDraft::new("New", "Thing", "SaaS"))
            .unwrap();

        let analytics = Analytics::derive(&snapshot);
        let expected: u64 = snapshot.ideas().iter().map(|idea| idea.interests).sum();
        assert_eq!(analytics.total_interests, expected);
        assert_eq!(analytics.total_ideas, snapshot.len());
    }

    #[test]
    fn test_analytics_serialize_to_json() {
        let registry = launchpulse::session();
        let analytics = Analytics::derive(&registry.snapshot());
        let json = serde_json::to_value(&analytics).unwrap();
        assert_eq!(json["total_ideas"], 6);
        assert_eq!(json["weekly_growth"], 24);
    }
}
