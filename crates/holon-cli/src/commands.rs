//! Handler functions for CLI commands.
//!
//! Each command has a `render_*` function that builds the report as a
//! string and a `cmd_*` function that prints it. The render functions are
//! what the tests exercise.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use holon_acl::{AccessControlEngine, AccessPolicy};
use holon_core::{Error as CoreError, UserContext};
use holon_docs::DocumentRegistry;

use crate::cli::{ConfigAction, KindArg, PolicyAction};
use crate::config::HolonConfig;
use crate::error::Result;
use crate::scenario::{LoadedScenario, Scenario};

// ============================================================================
// Scenario commands
// ============================================================================

/// Loads a scenario into a fresh registry and builds an engine over it.
pub fn load_scenario(
    path: &Path,
    policy: AccessPolicy,
) -> Result<(AccessControlEngine, LoadedScenario)> {
    let scenario = Scenario::from_path(path)?;
    let registry = Arc::new(DocumentRegistry::new());
    let loaded = scenario.load_into(&registry)?;
    let engine = AccessControlEngine::with_policy(registry, policy);
    log::info!(
        "Loaded scenario {} ({} documents, {} holons, {} relationships, {} events)",
        path.display(),
        engine.source().len(),
        loaded.holons.len(),
        loaded.relationships.len(),
        loaded.events.len()
    );
    Ok((engine, loaded))
}

/// Every decision the engine makes for `user` over the scenario.
pub fn render_check(
    engine: &AccessControlEngine,
    scenario: &LoadedScenario,
    user: &UserContext,
) -> String {
    let mut out = String::new();
    for holon in &scenario.holons {
        let _ = writeln!(out, "holon {}: {}", holon.id, engine.can_access_holon(user, holon));
    }
    for rel in &scenario.relationships {
        let decision = engine.can_access_relationship(user, rel);
        let _ = writeln!(out, "relationship {}: {decision}", rel.id);
    }
    for event in &scenario.events {
        let _ = writeln!(out, "event {}: {}", event.id, engine.can_access_event(user, event));
    }
    let _ = writeln!(out, "submit_event: {}", engine.can_submit_event(user));
    let _ = writeln!(out, "modify_schema: {}", engine.can_modify_schema(user));
    out
}

/// Ids visible to `user`, one per line.
pub fn render_filter(
    engine: &AccessControlEngine,
    scenario: &LoadedScenario,
    user: &UserContext,
    kind: Option<KindArg>,
) -> String {
    let mut ids = Vec::new();
    if kind.is_none_or(|k| k == KindArg::Holons) {
        ids.extend(engine.filter_holons(user, &scenario.holons).into_iter().map(|h| &h.id));
    }
    if kind.is_none_or(|k| k == KindArg::Relationships) {
        ids.extend(
            engine
                .filter_relationships(user, &scenario.relationships)
                .into_iter()
                .map(|r| &r.id),
        );
    }
    if kind.is_none_or(|k| k == KindArg::Events) {
        ids.extend(engine.filter_events(user, &scenario.events).into_iter().map(|e| &e.id));
    }

    let mut out = String::new();
    for id in ids {
        let _ = writeln!(out, "{id}");
    }
    out
}

/// Print every decision for one user.
pub fn cmd_check(scenario_path: &Path, user_id: &str, policy: AccessPolicy) -> Result<()> {
    let (engine, scenario) = load_scenario(scenario_path, policy)?;
    let user = scenario.user(user_id)?;
    print!("{}", render_check(&engine, &scenario, user));
    Ok(())
}

/// Print the ids visible to one user.
pub fn cmd_filter(
    scenario_path: &Path,
    user_id: &str,
    kind: Option<KindArg>,
    policy: AccessPolicy,
) -> Result<()> {
    let (engine, scenario) = load_scenario(scenario_path, policy)?;
    let user = scenario.user(user_id)?;
    print!("{}", render_filter(&engine, &scenario, user, kind));
    Ok(())
}

// ============================================================================
// Policy commands
// ============================================================================

/// Handle a policy subcommand.
pub fn handle_policy_command(policy: &AccessPolicy, action: PolicyAction) -> Result<()> {
    match action {
        PolicyAction::Show => {
            print!("{}", policy.to_toml_string()?);
            Ok(())
        }
    }
}

// ============================================================================
// Config commands
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Init { force } => {
            let path = cmd_config_init(config_path, force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = HolonConfig::resolve_config_path(config_path).ok_or_else(|| {
        CoreError::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `holon config init` to create it)");
    }
    Ok(())
}

/// Create a default configuration file and return its path.
pub fn cmd_config_init(config_path: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = HolonConfig::resolve_config_path(config_path)
        .ok_or_else(|| CoreError::config("Could not determine config directory"))?;

    if path.exists() && !force {
        return Err(CoreError::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CoreError::io_with_path(e, parent))?;
    }

    let toml_str = HolonConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| CoreError::io_with_path(e, &path))?;
    Ok(path)
}
