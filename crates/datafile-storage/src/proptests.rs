//! Property-based tests for store persistence.

#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{DescriptorStore, KeyedStore};
    use datafile_acl::{AccessDescriptor, Visibility};
    use proptest::prelude::*;

    fn visibility() -> impl Strategy<Value = Visibility> {
        prop_oneof![
            Just(Visibility::Private),
            Just(Visibility::Public),
            Just(Visibility::Free),
        ]
    }

    fn descriptor() -> impl Strategy<Value = AccessDescriptor> {
        (
            "\\PC*",
            prop::collection::vec("\\PC*", 0..4),
            prop::collection::vec("\\PC*", 0..4),
            visibility(),
        )
            .prop_map(|(path, users, groups, v)| {
                let mut d = AccessDescriptor::new(path);
                for u in users {
                    d.add_user(u);
                }
                for g in groups {
                    d.add_group(g);
                }
                d.set_visibility(v);
                d
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_descriptor_store_roundtrip(
            entries in prop::collection::hash_map("\\PC*", descriptor(), 0..8),
            pretty in any::<bool>(),
        ) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("store.json");

            let store = entries
                .into_iter()
                .collect::<DescriptorStore>()
                .with_pretty(pretty);
            store.save(&path).unwrap();

            let loaded = DescriptorStore::open(&path).unwrap();
            prop_assert_eq!(loaded, store);
        }

        #[test]
        fn test_integer_key_roundtrip(
            entries in prop::collection::hash_map(any::<i64>(), any::<Option<u32>>(), 0..16),
        ) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("store.json");

            let store: KeyedStore<i64, Option<u32>> = entries.into_iter().collect();
            store.save(&path).unwrap();

            let mut loaded = KeyedStore::new();
            loaded.add(0i64, Some(0u32));
            loaded.load(&path).unwrap();
            prop_assert_eq!(loaded, store);
        }

        #[test]
        fn test_last_add_wins(values in prop::collection::vec(any::<u16>(), 1..10)) {
            let mut store = KeyedStore::new();
            for v in &values {
                store.add("k".to_string(), *v);
            }
            prop_assert_eq!(store.len(), 1);
            prop_assert_eq!(*store.get("k").unwrap(), *values.last().unwrap());
        }
    }
}
