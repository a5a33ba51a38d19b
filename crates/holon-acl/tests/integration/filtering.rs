//! Collection filtering across entity kinds.

use chrono::{TimeZone, Utc};
use holon_core::{ClassificationLevel, EntityStatus, Event, Holon, Relationship, Role};

use crate::common::{user, TestHarness};

#[test]
fn test_filter_holons_mixed_collection() {
    let harness = TestHarness::new();
    let confidential = harness.document("CONFIDENTIAL");
    let secret = harness.document("SECRET");

    let holons = vec![
        Holon::new("org-1", "organization"),
        Holon::new("mission-1", "mission").with_source_document(secret),
        Holon::new("person-1", "person").with_source_document(confidential),
        Holon::new("task-1", "task")
            .with_source_document(confidential)
            .with_source_document(secret),
        Holon::new("person-2", "person").with_status(EntityStatus::Inactive),
    ];

    let analyst = user("a", ClassificationLevel::Confidential, &[Role::Analyst]);
    let ids: Vec<_> = harness
        .engine
        .filter_holons(&analyst, &holons)
        .into_iter()
        .map(|h| h.id.as_str())
        .collect();
    assert_eq!(ids, vec!["org-1", "person-1", "person-2"]);
}

#[test]
fn test_filter_keeps_status_untouched() {
    let harness = TestHarness::new();
    let holons = vec![Holon::new("p", "person").with_status(EntityStatus::Inactive)];
    let viewer = user("v", ClassificationLevel::Unclassified, &[Role::Viewer]);
    let visible = harness.engine.filter_holons(&viewer, &holons);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].status, EntityStatus::Inactive);
}

#[test]
fn test_filter_relationships() {
    let harness = TestHarness::new();
    let top = harness.document("TOP SECRET");
    let rels = vec![
        Relationship::new("r1", "reports_to", "p1", "p2"),
        Relationship::new("r2", "assigned_to", "p1", "m1").with_source_document(top),
        Relationship::new("r3", "member_of", "p2", "o1"),
    ];
    let viewer = user("v", ClassificationLevel::Secret, &[Role::Viewer]);
    let ids: Vec<_> = harness
        .engine
        .filter_relationships(&viewer, &rels)
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, vec!["r1", "r3"]);
}

#[test]
fn test_filter_events_by_role_and_clearance() {
    let harness = TestHarness::new();
    let secret = harness.document("SECRET");
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let events = vec![
        Event::new("e1", "holon_created", "op", at).with_subject("h1"),
        Event::new("e2", "order_issued", "op", at).with_source_document(secret),
        Event::new("e3", "holon_updated", "op", at).with_subject("h1"),
    ];

    let operator = user("op", ClassificationLevel::Confidential, &[Role::Operator]);
    let ids: Vec<_> = harness
        .engine
        .filter_events(&operator, &events)
        .into_iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, vec!["e1", "e3"]);

    let viewer = user("v", ClassificationLevel::TopSecret, &[Role::Viewer]);
    assert!(harness.engine.filter_events(&viewer, &events).is_empty());

    let admin = user("root", ClassificationLevel::Unclassified, &[Role::Administrator]);
    assert_eq!(harness.engine.filter_events(&admin, &events).len(), 3);
}

#[test]
fn test_generic_filter_over_iterator() {
    let harness = TestHarness::new();
    let secret = harness.document("SECRET");
    let holons = vec![
        Holon::new("a", "task"),
        Holon::new("b", "task").with_source_document(secret),
    ];
    let viewer = user("v", ClassificationLevel::Unclassified, &[Role::Viewer]);
    let visible = harness.engine.filter(&viewer, holons.iter().rev());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id.as_str(), "a");
}

#[test]
fn test_filter_with_no_roles_is_empty() {
    let harness = TestHarness::new();
    let holons = vec![Holon::new("a", "task"), Holon::new("b", "task")];
    let nobody = user("n", ClassificationLevel::TopSecret, &[]);
    assert!(harness.engine.filter_holons(&nobody, &holons).is_empty());
}
