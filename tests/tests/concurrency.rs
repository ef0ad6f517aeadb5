//! Shared stores under concurrent callers.

use std::sync::Arc;
use std::thread;

use cograph_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_concurrent_registration_of_one_id() {
    // GIVEN
    let store = Arc::new(GraphStore::new(actor(OWNER)).unwrap());

    // WHEN sixteen callers race to register the same id
    let handles: Vec<_> = (1..=16)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.register_node(actor(i), node(1), "race", "u").is_ok())
        })
        .collect();
    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();

    // THEN exactly one wins and it is the recorded creator
    assert_eq!(winners, 1);
    let creator = store.node(node(1)).unwrap().creator;
    assert_eq!(store.nodes_of(creator), vec![node(1)]);
    assert_eq!(store.last_seq(), 1);
}

#[test]
fn test_readers_only_see_committed_batches() {
    // GIVEN
    let store = Arc::new(GraphStore::new(actor(OWNER)).unwrap());
    store.register_node(actor(1), node(1), "hub", "u").unwrap();

    // WHEN a writer adds leaves two at a time while a reader watches
    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..50u64 {
                store
                    .transaction(actor(1), |tx| {
                        tx.register_node(node(100 + i), "leaf", "u")?;
                        tx.create_link(node(1), node(100 + i), "has")?;
                        Ok(())
                    })
                    .unwrap();
            }
        })
    };
    let reader = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for _ in 0..200 {
                // every committed leaf comes with its link
                let (nodes, links) = store.read(|g| (g.node_count(), g.link_count()));
                assert_eq!(nodes, links + 1);
            }
        })
    };
    writer.join().unwrap();
    reader.join().unwrap();

    // THEN
    assert_eq!(store.outgoing_links(node(1)).unwrap().len(), 50);
    assert_eq!(store.last_seq(), 101);
}
