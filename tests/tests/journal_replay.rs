//! Rebuilding a store from its journal.

use std::sync::Arc;

use cograph_journal::{FileJournal, Journal, MemoryJournal};
use cograph_session::{ClockConfig, ManualClock, StoreConfig};
use cograph_tests::prelude::*;
use pretty_assertions::assert_eq;

fn populate(store: &GraphStore) {
    store.register_node(actor(1), node(1), "paper", "ipfs://p").unwrap();
    store.register_node(actor(2), node(2), "dataset", "ipfs://d").unwrap();
    store.register_node(actor(1), node(3), "figure", "ipfs://f").unwrap();
    store.create_link(actor(1), node(1), node(2), "uses").unwrap();
    store.create_link(actor(1), node(1), node(2), "uses").unwrap();
    store.create_link(actor(1), node(3), node(1), "part-of").unwrap();
    store.set_link_active(actor(1), node(1), 0, false).unwrap();
    store.set_node_active(actor(2), node(2), false).unwrap();
    store.transfer_ownership(actor(OWNER), actor(0xbb)).unwrap();
    // rejected, never journaled
    let _ = store.set_node_active(actor(OWNER), node(1), false);
}

#[test]
fn test_file_journal_reproduces_state() {
    init_tracing();

    // GIVEN
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(actor(OWNER))
        .with_journal_path(dir.path().join("events.jsonl"))
        .with_clock(ClockConfig::Fixed(1_234));
    let original = GraphStore::open(&config).unwrap();
    populate(&original);
    original.sync().unwrap();

    // WHEN
    let replayed = GraphStore::open(&config).unwrap();

    // THEN
    assert_eq!(replayed.owner(), original.owner());
    assert_eq!(replayed.stats(), original.stats());
    assert_eq!(replayed.last_seq(), 9);
    for i in 1..=3 {
        assert_eq!(replayed.node(node(i)).unwrap(), original.node(node(i)).unwrap());
        assert_eq!(
            replayed.outgoing_links(node(i)).unwrap(),
            original.outgoing_links(node(i)).unwrap()
        );
        assert_eq!(
            replayed.incoming_links(node(i)).unwrap(),
            original.incoming_links(node(i)).unwrap()
        );
    }
    assert_eq!(replayed.nodes_of(actor(1)), vec![node(1), node(3)]);
    assert_eq!(replayed.events_since(0), original.events_since(0));
}

#[test]
fn test_replay_continues_numbering() {
    // GIVEN a journal recorded by one store
    let clock = Arc::new(ManualClock::new(10));
    let first = GraphStore::with_clock(actor(OWNER), clock.clone()).unwrap();
    populate(&first);

    let mut journal = MemoryJournal::new();
    let events: Vec<Event> = first.events_since(0).into_iter().map(|r| r.event).collect();
    journal.append(&events).unwrap();

    // WHEN a second store is built over it and keeps writing
    let second = GraphStore::with_parts(actor(OWNER), Box::new(journal), clock).unwrap();
    let link = second.create_link(actor(0xbb), node(2), node(3), "cites").unwrap();

    // THEN
    assert_eq!(link, LinkId::new(3));
    assert_eq!(second.last_seq(), 10);
    assert_eq!(second.events_since(9).len(), 1);
}

#[test]
fn test_replay_with_wrong_owner_fails() {
    // GIVEN a journal that starts with a transfer away from OWNER
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    {
        let store = GraphStore::open(&StoreConfig::new(actor(OWNER)).with_journal_path(&path))
            .unwrap();
        store.transfer_ownership(actor(OWNER), actor(1)).unwrap();
    }

    // WHEN it is opened with a different initial owner
    let journal = FileJournal::open(&path, true).unwrap();
    let result = GraphStore::with_parts(actor(2), Box::new(journal), Arc::new(ManualClock::new(0)));

    // THEN
    assert!(matches!(result, Err(SessionError::JournalError(_))));
}

#[test]
fn test_journal_lines_are_tagged_json() {
    // GIVEN
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let config = StoreConfig::new(actor(OWNER))
        .with_journal_path(&path)
        .with_clock(ClockConfig::Fixed(7));

    // WHEN
    {
        let store = GraphStore::open(&config).unwrap();
        store.register_node(actor(1), node(1), "a", "u").unwrap();
    }

    // THEN
    let text = std::fs::read_to_string(&path).unwrap();
    let line = text.lines().next().unwrap();
    assert!(line.starts_with(r#"{"seq":1,"event":{"type":"NodeRegistered""#));
    assert!(line.contains(&format!(r#""id":"{}""#, node(1))));
    assert!(line.contains(r#""timestamp":7"#));
}
