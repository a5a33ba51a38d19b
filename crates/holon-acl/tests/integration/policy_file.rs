//! Engines built from policy files.

use std::sync::Arc;

use chrono::Utc;
use holon_acl::{AccessControlEngine, AccessPolicy, Operation};
use holon_core::{ClassificationLevel, Event, Holon, Role};

use crate::common::{user, TestHarness};

#[test]
fn test_policy_file_denies_schema_manager_events() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("policy.toml");
    std::fs::write(
        &path,
        r#"
clearance_bypass = ["administrator"]

[permissions]
read_holon = ["administrator", "operator", "analyst", "viewer", "schema_manager"]
read_relationship = ["administrator", "operator", "analyst", "viewer", "schema_manager"]
read_event = ["administrator", "operator", "analyst"]
submit_event = ["administrator", "operator"]
modify_schema = ["administrator", "schema_manager"]
"#,
    )
    .unwrap();

    let harness = TestHarness::new();
    let policy = AccessPolicy::from_path(&path).unwrap();
    let engine = AccessControlEngine::with_policy(Arc::clone(&harness.registry), policy);

    let event = Event::new("e1", "holon_created", "op", Utc::now());
    let manager = user("sm", ClassificationLevel::TopSecret, &[Role::SchemaManager]);
    assert!(!engine.can_access_event(&manager, &event).allowed);
    assert!(harness.engine.can_access_event(&manager, &event).allowed);
}

#[test]
fn test_rendered_default_policy_reloads_identically() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("policy.toml");
    std::fs::write(&path, AccessPolicy::default().to_toml_string().unwrap()).unwrap();
    assert_eq!(AccessPolicy::from_path(&path).unwrap(), AccessPolicy::default());
}

#[test]
fn test_policy_without_bypass_gates_admin() {
    let harness = TestHarness::new();
    let secret = harness.document("SECRET");
    let policy = AccessPolicy::from_toml_str("clearance_bypass = []").unwrap();
    let engine = AccessControlEngine::with_policy(Arc::clone(&harness.registry), policy);

    let holon = Holon::new("h1", "mission").with_source_document(secret);
    let admin = user("root", ClassificationLevel::Confidential, &[Role::Administrator]);
    let decision = engine.can_access_holon(&admin, &holon);
    assert!(!decision.allowed);
    assert!(decision.reason.unwrap().contains("clearance"));
    assert!(engine.can_perform(&admin, Operation::ModifySchema).allowed);
}
