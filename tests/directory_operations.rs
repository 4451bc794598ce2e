//! Collection behavior of the directory: insertion, ordering, keyed
//! index construction, and builder seeding.

mod common;

use common::{IVAN_ID, PETR_ID, ivan, petr};
use user_directory::{UserDirectory, UserRecord};

#[test]
fn fresh_directory_is_empty() {
    common::init_logging();
    let directory = UserDirectory::new();

    assert!(directory.is_empty());
    assert_eq!(directory.len(), 0);
    assert!(directory.records().is_empty());
}

#[test]
fn add_preserves_insertion_order_and_count() {
    common::init_logging();
    let mut directory = UserDirectory::new();

    assert!(directory.add(ivan()));
    assert!(directory.add(petr()));

    let records = directory.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], ivan());
    assert_eq!(records[1], petr());
}

#[test]
fn add_all_appends_in_the_given_order() {
    common::init_logging();
    let mut directory = UserDirectory::new();
    directory.add_all([petr(), ivan()]);

    assert_eq!(directory.records(), &[petr(), ivan()]);
}

#[test]
fn add_all_with_no_records_is_a_no_op() {
    common::init_logging();
    let mut directory = UserDirectory::new();
    directory.add_all(std::iter::empty());

    assert!(directory.is_empty());
}

#[test]
fn duplicate_ids_are_accepted_in_the_sequence() {
    common::init_logging();
    let mut directory = UserDirectory::new();
    directory.add(ivan());
    directory.add(UserRecord::new(IVAN_ID, "Ivan2", "999"));

    assert_eq!(directory.len(), 2);
}

#[test]
fn index_by_id_covers_every_held_id() {
    common::init_logging();
    let mut directory = UserDirectory::new();
    directory.add(ivan());
    directory.add(petr());

    let index = directory.index_by_id();
    assert_eq!(index.len(), 2);
    assert_eq!(index.get(&IVAN_ID), Some(&ivan()));
    assert_eq!(index.get(&PETR_ID), Some(&petr()));
}

#[test]
fn index_by_id_applies_last_write_wins_on_duplicates() {
    common::init_logging();
    let first = UserRecord::new(1, "A", "a");
    let second = UserRecord::new(1, "B", "b");

    let mut directory = UserDirectory::new();
    directory.add(first);
    directory.add(second.clone());

    let index = directory.index_by_id();
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(&1), Some(&second));
}

#[test]
fn builder_seeding_matches_repeated_add() {
    common::init_logging();
    let built = UserDirectory::builder().records([ivan(), petr()]).build();

    let mut added = UserDirectory::new();
    added.add(ivan());
    added.add(petr());

    assert_eq!(built.records(), added.records());
}
