//! Property tests for repository search

use medrec::{MemoryStore, PatientRepository};
use proptest::prelude::*;
use std::sync::Arc;

fn seeded_repo() -> PatientRepository {
    PatientRepository::new(Arc::new(MemoryStore::new()))
}

proptest! {
    /// Search never invents entries: every hit is already in the collection.
    #[test]
    fn search_returns_a_subset(query in ".{0,16}") {
        let repo = seeded_repo();
        let all = repo.all();
        let hits = repo.search(&query);

        prop_assert!(hits.len() <= all.len());
        for hit in &hits {
            prop_assert!(all.contains(hit));
        }
    }

    /// Hits come back in original collection order.
    #[test]
    fn search_preserves_order(query in ".{0,16}") {
        let repo = seeded_repo();
        let all = repo.all();
        let hits = repo.search(&query);

        let positions: Vec<usize> = hits
            .iter()
            .map(|hit| all.iter().position(|p| p == hit).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Whitespace-only queries behave like the empty query.
    #[test]
    fn blank_queries_return_everything(query in "[ \t]{0,8}") {
        let repo = seeded_repo();
        prop_assert_eq!(repo.search(&query), repo.all());
    }
}
