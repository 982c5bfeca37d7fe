//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! core never renders and the TUI never mutates `App` except through
//! `update()`.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop is fully event-driven: it sleeps up to
//! 500ms in `poll`, redraws only when an event arrived, and drains all
//! pending events before the next draw so held-down keys don't queue a
//! frame per keypress.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{self, ResolvedConfig};
use crate::core::content;
use crate::core::outline::Direction;
use crate::core::progress;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{LessonViewState, SearchEvent, SearchOverlayState, SidebarState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub sidebar: SidebarState,
    pub lesson_view: LessonViewState,
    /// Search overlay (None = hidden)
    pub search_overlay: Option<SearchOverlayState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            sidebar: SidebarState::new(),
            lesson_view: LessonViewState::new(),
            search_overlay: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture is only needed for wheel scrolling in the lesson pane
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the App from resolved config: state dir, persisted progress
/// and trainer flag, then CLI/config overrides on top.
fn build_app(config: &ResolvedConfig) -> std::io::Result<App> {
    let state_dir = match &config.state_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            dir.clone()
        }
        None => progress::state_dir()?,
    };

    let mut app = App::new(content::course(), state_dir);

    // --trainer turns the mode on and persists it, same as pressing 't'
    if config.trainer_mode && !app.trainer_mode {
        let effect = update(&mut app, Action::ToggleTrainerMode);
        run_effect(&mut app, effect);
    }

    if let Some(location) = &config.start_lesson {
        match config::split_location(location) {
            Some((module_slug, lesson_slug)) => {
                if app.catalog.locate(module_slug, lesson_slug).is_none() {
                    warn!("Start lesson {location:?} does not exist; showing not-found view");
                }
                update(
                    &mut app,
                    Action::Open {
                        module_slug: module_slug.to_string(),
                        lesson_slug: lesson_slug.to_string(),
                    },
                );
            }
            None => warn!("Ignoring malformed start lesson {location:?}"),
        }
    }

    Ok(app)
}

/// Execute a side effect requested by `update()`. Returns true when the
/// application should quit.
fn run_effect(app: &mut App, effect: Effect) -> bool {
    match effect {
        Effect::SaveProgress => {
            app.progress.save();
            false
        }
        Effect::SaveTrainerMode => {
            progress::save_trainer_mode(&app.state_dir, app.trainer_mode);
            false
        }
        Effect::Quit => true,
        Effect::None => false,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = build_app(&config)?;
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut last_position = app.position.clone();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of what is open
            if matches!(event, TuiEvent::ForceQuit) {
                let effect = update(&mut app, Action::Quit);
                if run_effect(&mut app, effect) {
                    break 'main;
                }
                continue;
            }

            // When the search overlay is open it owns the keyboard:
            // typed characters are query text, never commands.
            if let Some(ref mut overlay) = tui.search_overlay {
                match overlay.handle_event(&event) {
                    Some(SearchEvent::QueryChanged(query)) => {
                        update(&mut app, Action::SetSearchQuery(query));
                        overlay.set_result_count(app.search_results.len());
                    }
                    Some(SearchEvent::Open(result_pos)) => {
                        if let Some(&flat_index) = app.search_results.get(result_pos)
                            && let Some(&entry) = app.outline.get(flat_index)
                        {
                            let action = Action::Open {
                                module_slug: entry.module_slug.to_string(),
                                lesson_slug: entry.lesson_slug.to_string(),
                            };
                            update(&mut app, action);
                        }
                        tui.search_overlay = None;
                    }
                    Some(SearchEvent::Dismiss) => {
                        tui.search_overlay = None;
                    }
                    None => {}
                }
                continue;
            }

            // Scroll events always go to the lesson pane
            if tui.lesson_view.handle_event(&event).is_some() {
                continue;
            }

            let action = match event {
                TuiEvent::Escape | TuiEvent::InputChar('q') => Some(Action::Quit),
                TuiEvent::NextLesson => Some(Action::Step(Direction::Forward)),
                TuiEvent::PrevLesson => Some(Action::Step(Direction::Back)),
                TuiEvent::InputChar('c') | TuiEvent::InputChar(' ') => {
                    Some(Action::ToggleComplete)
                }
                TuiEvent::InputChar('t') => Some(Action::ToggleTrainerMode),
                TuiEvent::InputChar('b') => Some(Action::ToggleSidebar),
                TuiEvent::InputChar('/') => {
                    tui.search_overlay = Some(SearchOverlayState::new(
                        app.search_query.clone(),
                        app.search_results.len(),
                    ));
                    None
                }
                _ => None,
            };

            if let Some(action) = action {
                let effect = update(&mut app, action);
                if run_effect(&mut app, effect) {
                    break 'main;
                }
            }
        }

        // Jumping to another lesson starts reading from the top
        if app.position != last_position {
            tui.lesson_view.reset();
            last_position = app.position.clone();
        }
    }

    // Ensure the progress file exists even if nothing was toggled
    app.progress.save();

    ratatui::restore();
    Ok(())
}
