use proptest::prelude::*;
use std::collections::HashSet;
use streetmap_core::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z ]{0,12}"
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z '.&0-9-]{1,16}"
}

fn nodes_strategy() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(
        (
            -180.0f64..180.0,
            -85.0f64..85.0,
            prop::option::of(name_strategy()),
        ),
        1..40,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (lon, lat, name))| Node {
                id: i as NodeId,
                lon,
                lat,
                name,
            })
            .collect()
    })
}

proptest! {
    /// Property: every prefix of an inserted key is a known prefix.
    #[test]
    fn prop_every_prefix_of_a_key_is_contained(keys in prop::collection::vec(key_strategy(), 1..20)) {
        let index: PrefixIndex = keys.iter().collect();
        for key in &keys {
            prop_assert!(index.contains(key));
            for i in 0..=key.len() {
                prop_assert!(index.contains_prefix(&key[..i]));
            }
        }
    }

    /// Property: inserting a key twice behaves like inserting it once.
    #[test]
    fn prop_insert_is_idempotent(keys in prop::collection::vec(key_strategy(), 1..20), probe in "[a-z]{0,3}") {
        let once: PrefixIndex = keys.iter().collect();
        let twice: PrefixIndex = keys.iter().chain(keys.iter()).collect();
        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.words_with_prefix(&probe), twice.words_with_prefix(&probe));
    }

    /// Property: prefix enumeration agrees with a brute-force filter.
    #[test]
    fn prop_prefix_enumeration_matches_filter(keys in prop::collection::vec(key_strategy(), 0..20), probe in "[a-z ]{0,3}") {
        let index: PrefixIndex = keys.iter().collect();
        let mut expected: Vec<String> = keys
            .iter()
            .filter(|k| k.starts_with(&probe))
            .cloned()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        expected.sort();
        prop_assert_eq!(index.words_with_prefix(&probe), expected);
    }

    /// Property: the empty prefix yields every named node's display name.
    #[test]
    fn prop_empty_prefix_lists_all_names(nodes in nodes_strategy()) {
        let mut expected: Vec<String> = nodes.iter().filter_map(|n| n.name.clone()).collect();
        let catalog = LocationCatalog::<NaivePointSet>::build(nodes, |_| true);
        let mut got = catalog.names_by_prefix("");
        expected.sort();
        got.sort();
        prop_assert_eq!(got, expected);
    }

    /// Property: every display name finds its own node by exact name.
    #[test]
    fn prop_exact_name_round_trip(nodes in nodes_strategy()) {
        let catalog = LocationCatalog::<NaivePointSet>::build(nodes.clone(), |_| true);
        for node in nodes.iter().filter(|n| n.name.is_some()) {
            let name = node.name.as_deref().unwrap();
            let records = catalog.entities_by_exact_name(name).unwrap();
            prop_assert!(records.iter().any(|r| r.id == node.id && r.name == name));
        }
    }

    /// Property: query case and punctuation are irrelevant.
    #[test]
    fn prop_prefix_ignores_case_and_punctuation(nodes in nodes_strategy(), probe in "[a-z]{1,3}") {
        let catalog = LocationCatalog::<NaivePointSet>::build(nodes, |_| true);
        let plain = catalog.names_by_prefix(&probe);
        let shouted = catalog.names_by_prefix(&probe.to_uppercase());
        let noisy = catalog.names_by_prefix(&format!("{}'.", &probe));
        prop_assert_eq!(&plain, &shouted);
        prop_assert_eq!(&plain, &noisy);
    }

    /// Property: nearest never leaves the eligible set.
    #[test]
    fn prop_nearest_is_eligible(nodes in nodes_strategy(), lon in -180.0f64..180.0, lat in -85.0f64..85.0) {
        let eligible: HashSet<NodeId> = nodes.iter().map(|n| n.id).filter(|id| id % 2 == 0).collect();
        let catalog = DefaultCatalog::build(nodes, |n| eligible.contains(&n.id));
        let id = catalog.nearest_to(lon, lat).unwrap();
        prop_assert!(eligible.contains(&id));
    }
}
