//! End-to-end tests over the real course catalog: navigation, search,
//! and persistence across sessions, driven through the reducer the way
//! the event loop drives it.

use lectern::core::action::{Action, Effect, update};
use lectern::core::content;
use lectern::core::outline::Direction;
use lectern::core::state::{App, Position};
use tempfile::TempDir;

fn app_in(dir: &TempDir) -> App {
    App::new(content::course(), dir.path().to_path_buf())
}

fn open(app: &mut App, module_slug: &str, lesson_slug: &str) -> Effect {
    update(
        app,
        Action::Open {
            module_slug: module_slug.to_string(),
            lesson_slug: lesson_slug.to_string(),
        },
    )
}

#[test]
fn walks_the_entire_course_forward_and_stops() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let total = app.outline.len();
    assert_eq!(total, 29);

    for expected in 1..total {
        update(&mut app, Action::Step(Direction::Forward));
        assert_eq!(app.current_index(), Some(expected));
    }

    // At the last lesson, forward is a no-op and there is no next neighbor
    update(&mut app, Action::Step(Direction::Forward));
    assert_eq!(app.current_index(), Some(total - 1));
    assert!(app.neighbors().next.is_none());
    assert!(app.neighbors().previous.is_some());
}

#[test]
fn stepping_crosses_module_boundaries_in_catalog_order() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    // Last lesson of the first module
    open(&mut app, "introduction", "exam-overview");
    update(&mut app, Action::Step(Direction::Forward));

    let entry = app.current_entry().expect("still on a lesson");
    assert_eq!(entry.module_slug, "mail-flow");
    assert_eq!(entry.lesson_slug, "mail-flow-overview");

    update(&mut app, Action::Step(Direction::Back));
    let entry = app.current_entry().unwrap();
    assert_eq!(entry.module_slug, "introduction");
}

#[test]
fn opening_an_unknown_location_is_renderable_not_fatal() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    open(&mut app, "introduction", "no-such-lesson");

    assert!(matches!(app.position, Position::NotFound { .. }));
    assert!(app.current_lesson().is_none());
    assert!(app.neighbors().previous.is_none());
    assert!(app.neighbors().next.is_none());

    // Recovery: opening a valid location works afterwards
    open(&mut app, "monitoring-troubleshooting", "service-health");
    assert_eq!(app.current_entry().unwrap().lesson_id, "lesson-8-3");
}

#[test]
fn completion_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = app_in(&dir);
        open(&mut app, "mail-flow", "connectors");
        let effect = update(&mut app, Action::ToggleComplete);
        assert_eq!(effect, Effect::SaveProgress);
        app.progress.save();
    }

    let app = app_in(&dir);
    assert!(app.progress.is_complete("lesson-2-3"));
    assert_eq!(app.progress.completed_count(), 1);
}

#[test]
fn trainer_mode_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = app_in(&dir);
        let effect = update(&mut app, Action::ToggleTrainerMode);
        assert_eq!(effect, Effect::SaveTrainerMode);
        lectern::core::progress::save_trainer_mode(&app.state_dir, app.trainer_mode);
    }

    let app = app_in(&dir);
    assert!(app.trainer_mode);
}

#[test]
fn sidebar_state_does_not_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = app_in(&dir);
        update(&mut app, Action::ToggleSidebar);
        assert!(!app.sidebar_open);
    }

    let app = app_in(&dir);
    assert!(app.sidebar_open);
}

#[test]
fn corrupt_progress_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("completed.json"), "{not json").unwrap();

    let app = app_in(&dir);
    assert_eq!(app.progress.completed_count(), 0);
    assert_eq!(app.current_index(), Some(0));
}

#[test]
fn search_finds_lessons_across_the_real_catalog() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    update(&mut app, Action::SetSearchQuery("QUARANTINE".to_string()));
    assert!(!app.search_results.is_empty());
    let ids: Vec<&str> = app
        .search_results
        .iter()
        .filter_map(|&i| app.outline.get(i))
        .map(|e| e.lesson_id)
        .collect();
    assert!(ids.contains(&"lesson-3-4"), "quarantine-management should match: {ids:?}");

    // Results come back in catalog order
    let mut sorted = app.search_results.clone();
    sorted.sort_unstable();
    assert_eq!(app.search_results, sorted);

    // Blank query clears results
    update(&mut app, Action::SetSearchQuery("   ".to_string()));
    assert!(app.search_results.is_empty());
}

#[test]
fn search_result_opens_the_matching_lesson() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    update(&mut app, Action::SetSearchQuery("hybrid configuration wizard".to_string()));
    let &first = app.search_results.first().expect("at least one hit");
    let entry = *app.outline.get(first).unwrap();

    open(&mut app, entry.module_slug, entry.lesson_slug);
    assert_eq!(app.current_index(), Some(first));
}

#[test]
fn progress_percent_over_the_full_course() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    assert_eq!(app.progress_percent(), 0);

    // Complete the whole first module (4 of 29 lessons)
    for slug in ["architecture-overview", "admin-center-powershell", "dns-records", "exam-overview"] {
        open(&mut app, "introduction", slug);
        update(&mut app, Action::ToggleComplete);
    }
    assert_eq!(app.progress_percent(), 4 * 100 / 29);
}
