//! Full register → grant → show cycles through the command handlers.

use crate::common::TestHarness;
use datafile_acl::{AccessDescriptor, Visibility};
use datafile_cli::Error;
use datafile_cli::cli::Command;
use datafile_storage::DescriptorStore;

#[test]
fn test_register_grant_and_show() {
    let h = TestHarness::new();

    h.run(Command::Register {
        path: "/data/a.csv".to_string(),
        key: None,
    });
    for _ in 0..2 {
        h.run(Command::GrantUser {
            key: "a.csv".to_string(),
            user: "alice".to_string(),
        });
    }
    h.run(Command::SetVisibility {
        key: "a.csv".to_string(),
        visibility: Visibility::Public,
    });

    let shown = h.run(Command::Show {
        key: "a.csv".to_string(),
    });
    let descriptor: AccessDescriptor = serde_json::from_str(&shown).unwrap();

    let mut expected = AccessDescriptor::new("/data/a.csv");
    expected.add_user("alice");
    expected.set_visibility(Visibility::Public);
    assert_eq!(descriptor, expected);
}

#[test]
fn test_changes_persist_between_commands() {
    let h = TestHarness::new();
    h.run(Command::Register {
        path: "/data/q3.parquet".to_string(),
        key: Some("q3".to_string()),
    });
    h.run(Command::GrantGroup {
        key: "q3".to_string(),
        group: "finance".to_string(),
    });

    let store = DescriptorStore::open(&h.ctx.path).unwrap();
    let d = store.get("q3").unwrap();
    assert_eq!(d.path(), "/data/q3.parquet");
    assert!(d.has_group("finance"));
    assert_eq!(d.visibility(), Visibility::Private);
}

#[test]
fn test_register_replaces_existing_descriptor() {
    let h = TestHarness::new();
    h.run(Command::Register {
        path: "/old/a.csv".to_string(),
        key: None,
    });
    h.run(Command::GrantUser {
        key: "a.csv".to_string(),
        user: "bob".to_string(),
    });
    h.run(Command::Register {
        path: "/new/a.csv".to_string(),
        key: None,
    });

    let store = DescriptorStore::open(&h.ctx.path).unwrap();
    assert_eq!(store.get("a.csv").unwrap(), &AccessDescriptor::new("/new/a.csv"));
}

#[test]
fn test_show_missing_key() {
    let h = TestHarness::new();
    let err = h
        .try_run(Command::Show {
            key: "ghost".to_string(),
        })
        .unwrap_err();
    assert!(err.to_string().contains("Key not found"));
}

#[test]
fn test_commands_need_initialized_store() {
    let h = TestHarness::uninitialized();
    let err = h.try_run(Command::List).unwrap_err();
    assert!(matches!(
        err,
        Error::Storage(datafile_storage::Error::FileNotFound { .. })
    ));
}

#[test]
fn test_list_empty_store() {
    let h = TestHarness::new();
    assert_eq!(h.run(Command::List), "");
}

#[test]
fn test_corrupt_store_is_reported_and_left_alone() {
    let h = TestHarness::new();
    std::fs::write(&h.ctx.path, "{\"format\":\"datafile-store\"").unwrap();

    let err = h
        .try_run(Command::Register {
            path: "/data/a.csv".to_string(),
            key: None,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Storage(datafile_storage::Error::Deserialization { .. })
    ));
    assert_eq!(
        std::fs::read_to_string(&h.ctx.path).unwrap(),
        "{\"format\":\"datafile-store\""
    );
}
