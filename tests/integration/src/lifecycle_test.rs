//! Registry lifecycle scenarios: discovery, filtering, enabled-set edits,
//! and context-conditional loading working together over one directory.

use pretty_assertions::assert_eq;
use snippa_core::{
    ExecutionContext, LoadStatus, RegistryState, SnippetRunner, SyncEngine, load,
};
use snippa_fs::NormalizedPath;
use snippa_test_utils::snippets;
use tempfile::TempDir;

/// Records which files ran instead of executing anything.
#[derive(Default)]
struct RecordingRunner {
    ran: Vec<String>,
}

impl SnippetRunner for RecordingRunner {
    fn run(&mut self, path: &NormalizedPath) -> Result<(), String> {
        self.ran.push(path.file_name().unwrap_or_default().to_string());
        Ok(())
    }
}

fn engine_for(temp: &TempDir) -> SyncEngine {
    SyncEngine::new(NormalizedPath::new(temp.path()), "php")
}

#[test]
fn discovery_filter_and_load_compose() {
    let temp = TempDir::new().unwrap();
    snippets::write_snippet(
        temp.path(),
        "shop.php",
        &[("Snippet", "Shop"), ("Tags", "shop"), ("Context", "frontend")],
    );
    snippets::write_snippet(
        temp.path(),
        "admin.php",
        &[("Snippet", "Admin"), ("Tags", "shop"), ("Context", "backend")],
    );
    snippets::write_snippet(
        temp.path(),
        "other.php",
        &[("Snippet", "Other"), ("Tags", "blog")],
    );

    let engine = engine_for(&temp);
    let state = engine
        .full_discovery(&RegistryState::default().with_allowed_tags("shop"))
        .unwrap();

    // The blog-tagged snippet never entered the cache.
    assert!(state.record("other.php").is_none());

    let mut frontend = RecordingRunner::default();
    load(
        &state,
        &NormalizedPath::new(temp.path()),
        ExecutionContext::Frontend,
        &mut frontend,
    );
    assert_eq!(frontend.ran, vec!["shop.php"]);

    let mut backend = RecordingRunner::default();
    load(
        &state,
        &NormalizedPath::new(temp.path()),
        ExecutionContext::Backend,
        &mut backend,
    );
    assert_eq!(backend.ran, vec!["admin.php"]);
}

#[test]
fn backend_only_snippet_never_loads_on_frontend() {
    let temp = TempDir::new().unwrap();
    snippets::write_snippet(
        temp.path(),
        "x.php",
        &[("Snippet", "X"), ("Context", "backend")],
    );

    let engine = engine_for(&temp);
    let state = engine.full_discovery(&RegistryState::default()).unwrap();
    assert!(state.is_enabled("x.php"));

    let mut runner = RecordingRunner::default();
    let report = load(
        &state,
        &NormalizedPath::new(temp.path()),
        ExecutionContext::Frontend,
        &mut runner,
    );

    assert_eq!(report.loaded(), 0);
    assert!(runner.ran.is_empty());
}

#[test]
fn default_context_loads_on_both_sides() {
    let temp = TempDir::new().unwrap();
    snippets::write_named_snippet(temp.path(), "a.php", "A");

    let engine = engine_for(&temp);
    let state = engine.set_enabled(
        &["a.php".to_string()],
        &engine.full_discovery(&RegistryState::default()).unwrap(),
    );

    for context in [ExecutionContext::Frontend, ExecutionContext::Backend] {
        let mut runner = RecordingRunner::default();
        let report = load(
            &state,
            &NormalizedPath::new(temp.path()),
            context,
            &mut runner,
        );
        assert_eq!(report.loaded(), 1);
    }
}

#[test]
fn incremental_addition_is_cached_and_enabled() {
    let temp = TempDir::new().unwrap();
    let engine = engine_for(&temp);

    // Prior state has no entry for y.php.
    snippets::write_named_snippet(temp.path(), "y.php", "Y");
    let state = engine
        .incremental_update(&["y.php".to_string()], &RegistryState::default())
        .unwrap();

    assert_eq!(state.record("y.php").unwrap().name, "Y");
    assert!(state.is_enabled("y.php"));
}

#[test]
fn enabled_ghost_identifier_is_inert_until_the_file_appears() {
    let temp = TempDir::new().unwrap();
    let engine = engine_for(&temp);

    let state = engine.set_enabled(&["ghost.php".to_string()], &RegistryState::default());

    let mut runner = RecordingRunner::default();
    let report = load(
        &state,
        &NormalizedPath::new(temp.path()),
        ExecutionContext::Frontend,
        &mut runner,
    );
    assert!(runner.ran.is_empty());
    assert_eq!(report.outcomes[0].status, LoadStatus::SkippedMissing);

    // The file appears under the same identifier and loads on the next
    // pass without any registry change.
    snippets::write_named_snippet(temp.path(), "ghost.php", "Ghost");
    let mut runner = RecordingRunner::default();
    let report = load(
        &state,
        &NormalizedPath::new(temp.path()),
        ExecutionContext::Frontend,
        &mut runner,
    );
    assert_eq!(report.loaded(), 1);
}

#[test]
fn tag_scenarios_from_the_allow_list() {
    let temp = TempDir::new().unwrap();
    snippets::write_snippet(
        temp.path(),
        "survives.php",
        &[("Snippet", "Survives"), ("Tags", "alpha,beta")],
    );
    snippets::write_snippet(
        temp.path(),
        "excluded.php",
        &[("Snippet", "Excluded"), ("Tags", "alpha")],
    );

    let engine = engine_for(&temp);
    let state = engine
        .full_discovery(&RegistryState::default().with_allowed_tags("beta"))
        .unwrap();

    assert_eq!(state.file_ids(), vec!["survives.php"]);
}

#[test]
fn rescan_after_no_change_is_stable() {
    let temp = TempDir::new().unwrap();
    snippets::write_named_snippet(temp.path(), "a.php", "A");
    snippets::write_named_snippet(temp.path(), "b.php", "B");

    let engine = engine_for(&temp);
    let first = engine.full_discovery(&RegistryState::default()).unwrap();
    let second = engine.full_discovery(&first).unwrap();
    let third = engine.incremental_update(&[], &second).unwrap();

    assert_eq!(first, second);
    assert_eq!(second, third);
}
