//! Decisions running concurrently with document registration.

use std::thread;

use holon_core::{ClassificationLevel, EntityId, Holon, Role};
use holon_docs::DocumentProperties;

use crate::common::{user, TestHarness};

#[test]
fn test_decisions_stable_while_registering() {
    let harness = TestHarness::new();
    let secret = harness.document("SECRET");
    let holons: Vec<_> = (0..32)
        .map(|i| {
            let h = Holon::new(format!("h{i}"), "task");
            if i % 2 == 0 {
                h.with_source_document(secret)
            } else {
                h
            }
        })
        .collect();
    let analyst = user("a", ClassificationLevel::Confidential, &[Role::Analyst]);

    thread::scope(|scope| {
        for writer in 0..4 {
            let registry = &harness.registry;
            scope.spawn(move || {
                for n in 0..100 {
                    registry.register_document(
                        DocumentProperties::new(format!("w{writer}-{n}"), "TOP SECRET"),
                        EntityId::new(format!("evt-{writer}-{n}")),
                    );
                }
            });
        }
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..50 {
                    let visible = harness.engine.filter_holons(&analyst, &holons);
                    assert_eq!(visible.len(), 16);
                    assert!(visible.iter().all(|h| h.source_documents.is_empty()));
                }
            });
        }
    });

    assert_eq!(harness.registry.len(), 401);
}

#[test]
fn test_engine_shared_across_threads() {
    let harness = TestHarness::new();
    let doc = harness.document("CONFIDENTIAL");
    let holon = Holon::new("h1", "person").with_source_document(doc);

    thread::scope(|scope| {
        for level in ClassificationLevel::ALL {
            let engine = harness.engine.clone();
            let holon = &holon;
            scope.spawn(move || {
                let u = user("u", level, &[Role::Viewer]);
                let expected = level >= ClassificationLevel::Confidential;
                assert_eq!(engine.can_access_holon(&u, holon).allowed, expected);
            });
        }
    });
}
