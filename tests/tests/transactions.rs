//! Multi-operation transactions.

use std::panic::{self, AssertUnwindSafe};

use cograph_tests::prelude::*;
use pretty_assertions::assert_eq;

const C1: u64 = 1;

mod atomicity {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("atomicity")
            .step("seed", Expect::OK, |s| s.register_node(actor(C1), node(1), "root", "u"))
            .step("batch_import", Expect::Emits(4), |s| {
                s.transaction(actor(C1), |tx| {
                    for i in 2..=3 {
                        tx.register_node(node(i), "child", "u")?;
                        tx.create_link(node(1), node(i), "contains")?;
                    }
                    Ok(())
                })
            })
            .step("batch_with_duplicate", Expect::DuplicateId, |s| {
                s.transaction(actor(C1), |tx| {
                    tx.register_node(node(4), "child", "u")?;
                    tx.create_link(node(1), node(4), "contains")?;
                    tx.set_link_active(node(1), 0, false)?;
                    tx.register_node(node(2), "clash", "u")
                })
            })
    }

    #[test]
    fn test_failed_batch_leaves_no_trace() {
        let store = scenario().run().unwrap();

        assert!(store.node(node(4)).unwrap_err().is_not_found());
        assert_eq!(store.nodes_of(actor(C1)), vec![node(1), node(2), node(3)]);
        let out = store.outgoing_links(node(1)).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|l| l.is_active));
        assert_eq!(store.last_seq(), 5);
    }
}

#[test]
fn test_transaction_sees_its_own_writes() {
    // GIVEN
    let store = GraphStore::new(actor(OWNER)).unwrap();

    // WHEN
    let seen = store
        .transaction(actor(C1), |tx| {
            tx.register_node(node(1), "a", "u")?;
            Ok(tx.graph().contains_node(node(1)))
        })
        .unwrap();

    // THEN
    assert!(seen);
    assert_eq!(store.node(node(1)).unwrap().creator, actor(C1));
}

#[test]
fn test_caller_error_rolls_back() {
    // GIVEN
    let store = GraphStore::new(actor(OWNER)).unwrap();

    // WHEN the closure bails out with its own error after writing
    let result: SessionResult<()> = store.transaction(actor(OWNER), |tx| {
        tx.transfer_ownership(actor(2))?;
        Err(SessionError::config("aborted"))
    });

    // THEN
    assert!(matches!(result, Err(SessionError::Config { .. })));
    assert_eq!(store.owner(), actor(OWNER));
    assert_eq!(store.last_seq(), 0);
}

#[test]
fn test_recovered_error_inside_transaction_still_commits() {
    // GIVEN
    let store = GraphStore::new(actor(OWNER)).unwrap();

    // WHEN one step fails but the closure carries on
    store
        .transaction(actor(C1), |tx| {
            tx.register_node(node(1), "a", "u")?;
            assert!(tx.register_node(node(1), "b", "u").is_err());
            tx.register_node(node(2), "c", "u")
        })
        .unwrap();

    // THEN only the successful steps were applied and journaled
    assert_eq!(store.nodes_of(actor(C1)), vec![node(1), node(2)]);
    assert_eq!(store.last_seq(), 2);
}

#[test]
fn test_panic_inside_transaction_rolls_back() {
    // GIVEN
    let store = GraphStore::new(actor(OWNER)).unwrap();

    // WHEN the closure panics after a successful write
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        store.transaction(actor(C1), |tx| {
            tx.register_node(node(1), "a", "u")?;
            tx.transfer_ownership(actor(2)).unwrap();
            Ok(())
        })
    }));

    // THEN the write is gone and the store stays usable
    assert!(outcome.is_err());
    assert!(store.node(node(1)).unwrap_err().is_not_found());
    assert!(store.nodes_of(actor(C1)).is_empty());
    assert_eq!(store.last_seq(), 0);

    store.register_node(actor(C1), node(1), "a", "u").unwrap();
    assert_eq!(store.last_seq(), 1);
}
