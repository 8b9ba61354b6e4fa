//! End-to-end sync flow: a real origin repository, a local clone, and the
//! full trigger surface (refresh, pull, webhook) driving the registry.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use snippa_core::{RegistryState, SyncEngine};
use snippa_fs::{NormalizedPath, StateStore};
use snippa_test_utils::{git, snippets};
use tempfile::TempDir;

struct World {
    origin: TempDir,
    _local: TempDir,
    clone: PathBuf,
    engine: SyncEngine,
    store: StateStore,
}

/// Origin with two committed snippets, cloned locally.
fn world() -> World {
    let origin = TempDir::new().unwrap();
    git::repo_with_commit(origin.path());
    git::commit_file(
        origin.path(),
        "alpha.php",
        &snippets::snippet_source(&[("Snippet", "Alpha"), ("Tags", "alpha")]),
        "Add alpha",
    );
    git::commit_file(
        origin.path(),
        "beta.php",
        &snippets::snippet_source(&[
            ("Snippet", "Beta"),
            ("Tags", "alpha,beta"),
            ("Context", "backend"),
        ]),
        "Add beta",
    );

    let local = TempDir::new().unwrap();
    let clone = local.path().join("snippets");
    git::clone_to(origin.path(), &clone);

    let engine = SyncEngine::new(NormalizedPath::new(&clone), "php");
    let store = StateStore::new(NormalizedPath::new(local.path().join("state")));

    World {
        origin,
        _local: local,
        clone,
        engine,
        store,
    }
}

#[test]
fn refresh_discovers_the_cloned_snippets() {
    let w = world();

    let state = snippa_core::refresh(&w.engine, &w.store).unwrap();

    let mut files = state.file_ids();
    files.sort();
    assert_eq!(files, vec!["alpha.php", "beta.php"]);
    assert!(state.is_enabled("alpha.php"));
    assert!(state.is_enabled("beta.php"));
}

#[test]
fn upstream_edit_flows_through_pull_into_the_registry() {
    let w = world();
    snippa_core::refresh(&w.engine, &w.store).unwrap();

    git::commit_file(
        w.origin.path(),
        "alpha.php",
        &snippets::snippet_source(&[("Snippet", "Alpha Renamed"), ("Tags", "alpha")]),
        "Rename alpha",
    );

    let outcome = snippa_core::git_sync(&w.engine, &w.store).unwrap();
    assert_eq!(outcome.changed_files, vec!["alpha.php"]);

    let state = RegistryState::load(&w.store).unwrap();
    assert_eq!(state.record("alpha.php").unwrap().name, "Alpha Renamed");
}

#[test]
fn upstream_deletion_disables_the_snippet() {
    let w = world();
    snippa_core::refresh(&w.engine, &w.store).unwrap();

    git::remove_file(w.origin.path(), "alpha.php", "Drop alpha");

    snippa_core::git_sync(&w.engine, &w.store).unwrap();

    let state = RegistryState::load(&w.store).unwrap();
    assert!(state.record("alpha.php").is_none());
    assert!(!state.is_enabled("alpha.php"));
    assert!(state.is_enabled("beta.php"));
}

#[test]
fn operator_disable_survives_subsequent_pulls() {
    let w = world();
    let state = snippa_core::refresh(&w.engine, &w.store).unwrap();

    // Disable beta, then pull an unrelated upstream change.
    let edited = w.engine.set_enabled(&["alpha.php".to_string()], &state);
    edited.save(&w.store).unwrap();

    git::commit_file(
        w.origin.path(),
        "gamma.php",
        &snippets::snippet_source(&[("Snippet", "Gamma")]),
        "Add gamma",
    );

    snippa_core::git_sync(&w.engine, &w.store).unwrap();

    let state = RegistryState::load(&w.store).unwrap();
    assert!(state.is_enabled("alpha.php"));
    assert!(!state.is_enabled("beta.php"));
    // The new arrival is enabled by default.
    assert!(state.is_enabled("gamma.php"));
}

#[test]
fn tag_allow_list_applies_on_the_next_sync() {
    let w = world();
    snippa_core::refresh(&w.engine, &w.store).unwrap();

    let state = RegistryState::load(&w.store).unwrap();
    state.with_allowed_tags("beta").save(&w.store).unwrap();

    let state = snippa_core::refresh(&w.engine, &w.store).unwrap();
    assert_eq!(state.file_ids(), vec!["beta.php"]);
    assert!(!state.is_enabled("alpha.php"));
}

#[test]
fn failed_pull_leaves_the_registry_untouched() {
    let w = world();
    let before = snippa_core::refresh(&w.engine, &w.store).unwrap();

    // Break the remote so the next fetch fails.
    let config_path = w.clone.join(".git/config");
    let config = std::fs::read_to_string(&config_path).unwrap();
    std::fs::write(&config_path, config.replace("url = ", "url = /nonexistent"))
        .unwrap();

    let result = snippa_core::git_sync(&w.engine, &w.store);
    assert!(result.is_err());

    let after = RegistryState::load(&w.store).unwrap();
    assert_eq!(after, before);
}

#[test]
fn webhook_matches_manual_pull_for_the_same_diff() {
    let w = world();
    snippa_core::refresh(&w.engine, &w.store).unwrap();

    git::commit_file(
        w.origin.path(),
        "delta.php",
        &snippets::snippet_source(&[("Snippet", "Delta")]),
        "Add delta",
    );

    let response = snippa_core::webhook(&w.engine, &w.store).unwrap();
    assert!(response.success);
    assert_eq!(response.changed_files, Some(vec!["delta.php".to_string()]));

    // The webhook trigger time was recorded alongside.
    assert!(snippa_core::last_webhook(&w.store).unwrap().is_some());

    let state = RegistryState::load(&w.store).unwrap();
    assert!(state.is_enabled("delta.php"));
}

#[test]
fn webhook_response_serializes_for_the_transport() {
    let w = world();
    snippa_core::refresh(&w.engine, &w.store).unwrap();

    let response = snippa_core::webhook(&w.engine, &w.store).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["success"], true);
    assert!(json["changed_files"].is_array());
    assert!(json.get("error").is_none());
}
