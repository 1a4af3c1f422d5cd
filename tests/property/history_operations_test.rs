//! Property-based tests for History Manager operations.
//!
//! These tests verify that after any sequence of adds the history stays
//! within capacity, holds one entry per topic id, and has the most recently
//! added topic first.

use std::collections::HashSet;

use proptest::prelude::*;
use topicdeck::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use topicdeck::types::topic::Topic;

/// Strategy for topics drawn from a small id pool so that re-adds are common.
fn arb_topic() -> impl Strategy<Value = Topic> {
    (0u8..20, "[a-z]{1,8}", "[A-Za-z][A-Za-z0-9 ]{0,20}").prop_map(|(n, category, title)| {
        Topic::new(&format!("topic-{}", n), &category, &title, "description")
    })
}

// **History invariants**
//
// *For any* sequence of added topics, the history SHALL hold at most 10
// entries, at most one per id, with the last added topic first.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn history_invariants_hold_after_any_adds(
        topics in proptest::collection::vec(arb_topic(), 1..60),
    ) {
        let mut mgr = HistoryManager::default();
        for topic in &topics {
            mgr.add(topic.clone());
        }

        prop_assert!(mgr.len() <= 10, "history grew to {}", mgr.len());

        let ids: HashSet<&str> = mgr.entries().iter().map(|e| e.topic.id.as_str()).collect();
        prop_assert_eq!(ids.len(), mgr.len(), "duplicate ids in history");

        let last = topics.last().unwrap();
        prop_assert_eq!(&mgr.entries()[0].topic, last);

        let distinct: HashSet<&str> = topics.iter().map(|t| t.id.as_str()).collect();
        prop_assert_eq!(mgr.len(), distinct.len().min(10));
    }

    #[test]
    fn history_order_matches_last_occurrence(
        topics in proptest::collection::vec(arb_topic(), 1..60),
    ) {
        let mut mgr = HistoryManager::default();
        for topic in &topics {
            mgr.add(topic.clone());
        }

        // Expected order: ids by most recent occurrence, newest first.
        let mut expected: Vec<&str> = Vec::new();
        for topic in topics.iter().rev() {
            if !expected.contains(&topic.id.as_str()) {
                expected.push(topic.id.as_str());
            }
        }
        expected.truncate(10);

        let actual: Vec<&str> = mgr.entries().iter().map(|e| e.topic.id.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }
}
