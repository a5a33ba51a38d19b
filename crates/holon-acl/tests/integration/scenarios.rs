//! Concrete access scenarios.

use chrono::Utc;
use holon_acl::AccessDecision;
use holon_core::{ClassificationLevel, Event, Holon, Relationship, Role};

use crate::common::{user, TestHarness};

#[test]
fn test_secret_document_gates_holon() {
    let harness = TestHarness::new();
    let d1 = harness.document("SECRET");
    let h1 = Holon::new("H1", "mission").with_source_document(d1);

    let u1 = user("U1", ClassificationLevel::Unclassified, &[Role::Analyst]);
    let denied = harness.engine.can_access_holon(&u1, &h1);
    assert!(!denied.allowed);
    assert!(denied.reason.expect("denial has a reason").contains("clearance"));

    let u2 = user("U2", ClassificationLevel::Secret, &[Role::Analyst]);
    assert_eq!(harness.engine.can_access_holon(&u2, &h1), AccessDecision::allow());
}

#[test]
fn test_submit_event_operator_vs_analyst() {
    let harness = TestHarness::new();
    let operator = user("op", ClassificationLevel::Unclassified, &[Role::Operator]);
    let analyst = user("an", ClassificationLevel::TopSecret, &[Role::Analyst]);
    assert!(harness.engine.can_submit_event(&operator).allowed);
    assert!(!harness.engine.can_submit_event(&analyst).allowed);
}

#[test]
fn test_modify_schema_schema_manager_vs_operator() {
    let harness = TestHarness::new();
    let manager = user("sm", ClassificationLevel::Unclassified, &[Role::SchemaManager]);
    let operator = user("op", ClassificationLevel::TopSecret, &[Role::Operator]);
    assert!(harness.engine.can_modify_schema(&manager).allowed);
    assert!(!harness.engine.can_modify_schema(&operator).allowed);
}

#[test]
fn test_viewer_never_reads_events() {
    let harness = TestHarness::new();
    let doc = harness.document("UNCLASSIFIED");
    let events = [
        Event::new("e1", "holon_created", "op", Utc::now()),
        Event::new("e2", "holon_updated", "op", Utc::now()).with_source_document(doc),
    ];
    for level in ClassificationLevel::ALL {
        let viewer = user("v", level, &[Role::Viewer]);
        for event in &events {
            assert!(!harness.engine.can_access_event(&viewer, event).allowed);
        }
    }
}

#[test]
fn test_administrator_reads_any_classification() {
    let harness = TestHarness::new();
    let admin = user("root", ClassificationLevel::Unclassified, &[Role::Administrator]);
    for label in ["UNCLASSIFIED", "CONFIDENTIAL", "SECRET", "TOP SECRET", "garbage"] {
        let doc = harness.document(label);
        let holon = Holon::new(format!("h-{label}"), "document").with_source_document(doc);
        assert!(harness.engine.can_access_holon(&admin, &holon).allowed, "{label}");
    }
}

#[test]
fn test_top_secret_label_not_read_as_secret() {
    let harness = TestHarness::new();
    let doc = harness.document("TOP SECRET");
    let holon = Holon::new("h1", "mission").with_source_document(doc);
    let secret = user("s", ClassificationLevel::Secret, &[Role::Analyst]);
    assert!(!harness.engine.can_access_holon(&secret, &holon).allowed);
    let top = user("t", ClassificationLevel::TopSecret, &[Role::Analyst]);
    assert!(harness.engine.can_access_holon(&top, &holon).allowed);
}

#[test]
fn test_relationship_gated_independently_of_endpoints() {
    let harness = TestHarness::new();
    let secret = harness.document("SECRET");
    let source = Holon::new("h1", "person");
    let target = Holon::new("h2", "position");
    let rel = Relationship::new("r1", "occupies", "h1", "h2").with_source_document(secret);

    let analyst = user("a", ClassificationLevel::Confidential, &[Role::Analyst]);
    assert!(harness.engine.can_access_holon(&analyst, &source).allowed);
    assert!(harness.engine.can_access_holon(&analyst, &target).allowed);
    assert!(!harness.engine.can_access_relationship(&analyst, &rel).allowed);
}

#[test]
fn test_broken_reference_behaves_as_unclassified() {
    let harness = TestHarness::new();
    let holon = Holon::new("h1", "task").with_source_document(holon_core::DocumentId::new());
    let viewer = user("v", ClassificationLevel::Unclassified, &[Role::Viewer]);
    assert!(harness.engine.can_access_holon(&viewer, &holon).allowed);
}

#[test]
fn test_denial_never_mutates_entity() {
    let harness = TestHarness::new();
    let doc = harness.document("SECRET");
    let holon = Holon::new("h1", "task")
        .with_source_document(doc)
        .with_property("classificationMetadata", "UNCLASSIFIED");
    let before = holon.clone();
    let viewer = user("v", ClassificationLevel::Unclassified, &[Role::Viewer]);
    assert!(!harness.engine.can_access_holon(&viewer, &holon).allowed);
    assert_eq!(holon, before);
}
