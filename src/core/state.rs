//! # Application State
//!
//! Core viewing-session state for Lectern. This module contains domain
//! state only - no TUI-specific types. Presentation state (scroll
//! offsets, overlay visibility) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog            // immutable course tree
//! ├── outline: Outline            // cached flat lesson ordering
//! ├── position: Position          // current lesson, or a not-found miss
//! ├── progress: ProgressStore     // completed lesson ids
//! ├── trainer_mode: bool          // persisted display toggle
//! ├── sidebar_open: bool          // transient, defaults to true
//! ├── search_query: String        // transient, defaults to empty
//! ├── search_results: Vec<usize>  // flat indices matching the query
//! └── state_dir: PathBuf          // where progress/trainer flag persist
//! ```
//!
//! State changes only happen through `update(state, action)` in
//! action.rs. This keeps things predictable, so no surprise mutations.

use std::path::PathBuf;

use crate::core::catalog::{Catalog, Lesson, Module};
use crate::core::outline::{FlatEntry, Neighbors, Outline};
use crate::core::progress::{self, ProgressStore};

/// Where the viewer currently is.
///
/// A bad slug pair is a display state, not an error: the pane renders
/// "Lesson not found" and every other feature keeps working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Lesson(usize),
    NotFound { module_slug: String, lesson_slug: String },
}

pub struct App {
    pub catalog: Catalog,
    pub outline: Outline,
    pub position: Position,
    pub progress: ProgressStore,
    pub trainer_mode: bool,
    pub sidebar_open: bool,
    pub search_query: String,
    pub search_results: Vec<usize>,
    pub state_dir: PathBuf,
}

impl App {
    /// Build a session over `catalog`, restoring persisted progress and
    /// trainer mode from `state_dir`. Starts at the first lesson.
    pub fn new(catalog: Catalog, state_dir: PathBuf) -> Self {
        let outline = Outline::new(&catalog);
        let progress = ProgressStore::load(state_dir.clone());
        let trainer_mode = progress::load_trainer_mode(&state_dir);
        Self {
            catalog,
            outline,
            position: Position::Lesson(0),
            progress,
            trainer_mode,
            sidebar_open: true,
            search_query: String::new(),
            search_results: Vec::new(),
            state_dir,
        }
    }

    /// The flat index of the current lesson, if the position resolves.
    pub fn current_index(&self) -> Option<usize> {
        match self.position {
            Position::Lesson(index) => Some(index),
            Position::NotFound { .. } => None,
        }
    }

    pub fn current_entry(&self) -> Option<&FlatEntry> {
        self.outline.get(self.current_index()?)
    }

    pub fn current_lesson(&self) -> Option<(&Module, &Lesson)> {
        self.outline.resolve(&self.catalog, self.current_index()?)
    }

    /// Previous/next entries around the current lesson. Both sides are
    /// `None` when the position is a not-found miss.
    pub fn neighbors(&self) -> Neighbors<'_> {
        match self.current_index() {
            Some(index) => self.outline.adjacent(index),
            None => Neighbors { previous: None, next: None },
        }
    }

    /// Whether the current lesson is marked complete.
    pub fn current_complete(&self) -> bool {
        self.current_entry()
            .is_some_and(|e| self.progress.is_complete(e.lesson_id))
    }

    /// Completed lessons as a percentage of the whole course.
    pub fn progress_percent(&self) -> u16 {
        let total = self.outline.len();
        if total == 0 {
            return 0;
        }
        (self.progress.completed_count() * 100 / total) as u16
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_new_session_defaults() {
        let app = test_app();
        assert_eq!(app.current_index(), Some(0));
        assert!(app.sidebar_open);
        assert!(!app.trainer_mode);
        assert!(app.search_query.is_empty());
        assert!(app.search_results.is_empty());
    }

    #[test]
    fn test_current_lesson_resolves() {
        let app = test_app();
        let (module, lesson) = app.current_lesson().expect("starts on a lesson");
        assert_eq!(module.slug, "alpha");
        assert_eq!(lesson.id, "a1");
    }

    #[test]
    fn test_progress_percent() {
        let mut app = test_app();
        assert_eq!(app.progress_percent(), 0);
        app.progress.toggle("a1");
        assert_eq!(app.progress_percent(), 33);
        app.progress.toggle("a2");
        app.progress.toggle("b1");
        assert_eq!(app.progress_percent(), 100);
    }
}
