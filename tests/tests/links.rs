//! Link creation and the outgoing/incoming views.

use cograph_tests::prelude::*;
use pretty_assertions::assert_eq;

const C1: u64 = 1;
const C2: u64 = 2;

fn two_nodes() -> Scenario {
    Scenario::new("links")
        .step("register_a", Expect::OK, |s| s.register_node(actor(C1), node(1), "a", "u"))
        .step("register_b", Expect::OK, |s| s.register_node(actor(C2), node(2), "b", "u"))
}

mod views {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        two_nodes()
            .step("link", Expect::OK, |s| {
                s.create_link(actor(C1), node(1), node(2), "references").map(drop)
            })
            .step("self_link", Expect::OK, |s| {
                s.create_link(actor(C1), node(1), node(1), "revises").map(drop)
            })
            .step("missing_source", Expect::NotFound, |s| {
                s.create_link(actor(OWNER), node(9), node(1), "x").map(drop)
            })
            .step("missing_target", Expect::NotFound, |s| {
                s.create_link(actor(C1), node(1), node(9), "x").map(drop)
            })
            .step("target_creator_cannot_link_source", Expect::Unauthorized, |s| {
                s.create_link(actor(C2), node(1), node(2), "x").map(drop)
            })
            .step("owner_links_anything", Expect::OK, |s| {
                s.create_link(actor(OWNER), node(2), node(1), "cited-by").map(drop)
            })
    }

    #[test]
    fn test_views_mirror_each_other() {
        let store = scenario().run().unwrap();

        let out_a = store.outgoing_links(node(1)).unwrap();
        let in_b = store.incoming_links(node(2)).unwrap();
        assert_eq!(out_a.len(), 2);
        assert_eq!(in_b, vec![out_a[0].clone()]);
        assert!(out_a.iter().all(|l| l.is_active));

        let in_a = store.incoming_links(node(1)).unwrap();
        let relations: Vec<&str> = in_a.iter().map(|l| l.relation.as_str()).collect();
        assert_eq!(relations, vec!["revises", "cited-by"]);

        assert!(store.outgoing_links(node(9)).unwrap_err().is_not_found());
        assert!(store.incoming_links(node(9)).unwrap_err().is_not_found());
    }
}

mod toggling {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        two_nodes()
            .step("link_twice", Expect::Emits(2), |s| {
                s.transaction(actor(C1), |tx| {
                    tx.create_link(node(1), node(2), "references")?;
                    tx.create_link(node(1), node(2), "references")?;
                    Ok(())
                })
            })
            .step("deactivate_second", Expect::OK, |s| {
                s.set_link_active(actor(C1), node(1), 1, false)
            })
            .step("index_past_end", Expect::IndexOutOfRange, |s| {
                s.set_link_active(actor(C1), node(1), 2, false)
            })
            .step("index_past_end_beats_authorization", Expect::IndexOutOfRange, |s| {
                s.set_link_active(actor(C2), node(1), 5, false)
            })
            .step("missing_node_beats_index", Expect::NotFound, |s| {
                s.set_link_active(actor(C1), node(9), 0, false)
            })
            .step("stranger_toggles", Expect::Unauthorized, |s| {
                s.set_link_active(actor(C2), node(1), 0, false)
            })
            .step("empty_outgoing_list", Expect::IndexOutOfRange, |s| {
                s.set_link_active(actor(C2), node(2), 0, false)
            })
    }

    #[test]
    fn test_identical_duplicates_toggle_independently() {
        let store = scenario().run().unwrap();

        // Both links share relation and timestamp; only the second changed.
        let out = store.outgoing_links(node(1)).unwrap();
        let inc = store.incoming_links(node(2)).unwrap();
        assert_eq!(out[0].created_at, out[1].created_at);
        assert_eq!(
            out.iter().map(|l| l.is_active).collect::<Vec<_>>(),
            vec![true, false]
        );
        assert_eq!(out, inc);
    }

    #[test]
    fn test_status_event_names_the_link() {
        let store = scenario().run().unwrap();

        let last = store.events_since(store.last_seq() - 1);
        assert_eq!(
            last[0].event,
            Event::LinkStatusUpdated {
                link: LinkId::new(1),
                from: node(1),
                to: node(2),
                relation: "references".into(),
                is_active: false,
                timestamp: 1_700_000_003,
            }
        );
    }
}
