//! # Actions
//!
//! Everything that can happen in Lectern becomes an `Action`.
//! User presses Alt+Right? That's `Action::Step(Direction::Forward)`.
//! User marks a lesson done? That's `Action::ToggleComplete`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place. It performs no I/O itself — persistence
//! is requested through the returned `Effect`, and the TUI loop is the
//! single owner that executes it. That keeps every state transition
//! testable: apply an action, assert on the state and the effect.

use log::debug;

use crate::core::outline::Direction;
use crate::core::search;
use crate::core::state::{App, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Jump to a lesson by its `(module_slug, lesson_slug)` location.
    Open { module_slug: String, lesson_slug: String },
    /// Move one lesson forward or back in the flat ordering.
    Step(Direction),
    /// Flip completion of the current lesson.
    ToggleComplete,
    ToggleTrainerMode,
    ToggleSidebar,
    SetSearchQuery(String),
    Quit,
}

/// Side effects requested by `update()`, executed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SaveProgress,
    SaveTrainerMode,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Open { module_slug, lesson_slug } => {
            // A miss is a renderable state, never a failure
            app.position = match app.outline.index_of(&module_slug, &lesson_slug) {
                Some(index) => Position::Lesson(index),
                None => Position::NotFound { module_slug, lesson_slug },
            };
            Effect::None
        }
        Action::Step(direction) => {
            // Out-of-bounds steps (and steps from a not-found position)
            // are silent no-ops: no wraparound, no error.
            if let Some(index) = app.current_index()
                && let Some(target) = app.outline.step(index, direction)
            {
                app.position = Position::Lesson(target);
            }
            Effect::None
        }
        Action::ToggleComplete => match app.current_entry() {
            Some(entry) => {
                let id = entry.lesson_id;
                app.progress.toggle(id);
                Effect::SaveProgress
            }
            None => Effect::None,
        },
        Action::ToggleTrainerMode => {
            app.trainer_mode = !app.trainer_mode;
            Effect::SaveTrainerMode
        }
        Action::ToggleSidebar => {
            app.sidebar_open = !app.sidebar_open;
            Effect::None
        }
        Action::SetSearchQuery(query) => {
            app.search_results = search::search(&app.catalog, &query)
                .iter()
                .filter_map(|hit| app.outline.index_of(hit.module.slug, hit.lesson.slug))
                .collect();
            app.search_query = query;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

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
    fn test_open_known_lesson() {
        let mut app = test_app();
        let effect = open(&mut app, "beta", "b1");
        assert_eq!(effect, Effect::None);
        assert_eq!(app.current_index(), Some(2));
    }

    #[test]
    fn test_open_unknown_lesson_sets_not_found() {
        let mut app = test_app();
        open(&mut app, "alpha", "nope");
        assert_eq!(
            app.position,
            Position::NotFound {
                module_slug: "alpha".to_string(),
                lesson_slug: "nope".to_string()
            }
        );
        assert!(app.current_lesson().is_none());
    }

    #[test]
    fn test_step_forward_crosses_module_boundary() {
        let mut app = test_app();
        open(&mut app, "alpha", "a2");
        update(&mut app, Action::Step(Direction::Forward));
        let entry = app.current_entry().unwrap();
        assert_eq!(entry.module_slug, "beta");
        assert_eq!(entry.lesson_id, "b1");
    }

    #[test]
    fn test_step_back_at_start_is_a_noop() {
        let mut app = test_app();
        update(&mut app, Action::Step(Direction::Back));
        assert_eq!(app.current_index(), Some(0));
    }

    #[test]
    fn test_step_forward_at_end_is_a_noop() {
        let mut app = test_app();
        open(&mut app, "beta", "b1");
        update(&mut app, Action::Step(Direction::Forward));
        assert_eq!(app.current_index(), Some(2));
    }

    #[test]
    fn test_step_from_not_found_is_a_noop() {
        let mut app = test_app();
        open(&mut app, "nope", "nope");
        update(&mut app, Action::Step(Direction::Forward));
        assert!(app.current_index().is_none());
    }

    #[test]
    fn test_toggle_complete_requests_save() {
        let mut app = test_app();
        let effect = update(&mut app, Action::ToggleComplete);
        assert_eq!(effect, Effect::SaveProgress);
        assert!(app.current_complete());

        let effect = update(&mut app, Action::ToggleComplete);
        assert_eq!(effect, Effect::SaveProgress);
        assert!(!app.current_complete());
    }

    #[test]
    fn test_toggle_complete_without_lesson_is_a_noop() {
        let mut app = test_app();
        open(&mut app, "nope", "nope");
        let effect = update(&mut app, Action::ToggleComplete);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.progress.completed_count(), 0);
    }

    #[test]
    fn test_toggle_trainer_mode_requests_save() {
        let mut app = test_app();
        let effect = update(&mut app, Action::ToggleTrainerMode);
        assert_eq!(effect, Effect::SaveTrainerMode);
        assert!(app.trainer_mode);
    }

    #[test]
    fn test_toggle_sidebar_is_transient() {
        let mut app = test_app();
        let effect = update(&mut app, Action::ToggleSidebar);
        assert_eq!(effect, Effect::None);
        assert!(!app.sidebar_open);
    }

    #[test]
    fn test_set_search_query_recomputes_results() {
        let mut app = test_app();
        update(&mut app, Action::SetSearchQuery("routing".to_string()));
        assert_eq!(app.search_results, vec![1]);

        update(&mut app, Action::SetSearchQuery("  ".to_string()));
        assert!(app.search_results.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
