//! Property-based tests for access descriptors.

#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{AccessDescriptor, Visibility};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn visibility() -> impl Strategy<Value = Visibility> {
        prop_oneof![
            Just(Visibility::Private),
            Just(Visibility::Public),
            Just(Visibility::Free),
        ]
    }

    proptest! {
        #[test]
        fn test_users_match_distinct_inputs(users in prop::collection::vec("[a-z]{1,6}", 0..20)) {
            let mut d = AccessDescriptor::new("/data/f");
            for u in &users {
                d.add_user(u.as_str());
            }
            let expected: BTreeSet<&str> = users.iter().map(String::as_str).collect();
            let actual: BTreeSet<&str> = d.allowed_users().map(|u| u.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn test_group_adds_are_idempotent(group in "\\PC*", repeats in 1usize..5) {
            let mut d = AccessDescriptor::new("/data/f");
            for _ in 0..repeats {
                d.add_group(group.as_str());
            }
            prop_assert_eq!(d.allowed_groups().len(), 1);
        }

        #[test]
        fn test_last_visibility_wins(seq in prop::collection::vec(visibility(), 1..10)) {
            let mut d = AccessDescriptor::new("/data/f");
            for v in &seq {
                d.set_visibility(*v);
            }
            prop_assert_eq!(d.visibility(), *seq.last().unwrap());
        }

        #[test]
        fn test_mutation_never_changes_path(
            path in "\\PC*",
            users in prop::collection::vec("\\PC*", 0..5),
            v in visibility(),
        ) {
            let mut d = AccessDescriptor::new(path.clone());
            for u in users {
                d.add_user(u);
            }
            d.set_visibility(v);
            prop_assert_eq!(d.path(), path.as_str());
        }

        #[test]
        fn test_json_roundtrip(
            path in "\\PC*",
            users in prop::collection::vec("\\PC*", 0..5),
            groups in prop::collection::vec("\\PC*", 0..5),
            v in visibility(),
        ) {
            let mut d = AccessDescriptor::new(path);
            for u in users {
                d.add_user(u);
            }
            for g in groups {
                d.add_group(g);
            }
            d.set_visibility(v);
            let json = serde_json::to_string(&d).unwrap();
            let back: AccessDescriptor = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, d);
        }
    }
}
