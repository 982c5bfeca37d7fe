//! # Search Overlay Component
//!
//! Centered overlay for searching lesson text. Opened with `/`,
//! dismissed with Esc. While it is open it consumes every key event, so
//! none of the single-key commands or lesson navigation fire while the
//! user is typing a query.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SearchOverlayState` lives in `TuiState` (as an `Option`)
//! - `SearchOverlay` is created each frame with the borrowed outline
//!   and the result indices computed by the core

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::outline::Outline;
use crate::tui::event::TuiEvent;

/// Persistent state for the search overlay.
pub struct SearchOverlayState {
    pub query: String,
    pub selected: usize,
    pub result_count: usize,
    pub list_state: ListState,
}

impl SearchOverlayState {
    /// Open the overlay, seeding the input with the session's current
    /// query so reopening resumes where the user left off.
    pub fn new(query: String, result_count: usize) -> Self {
        let mut list_state = ListState::default();
        if result_count > 0 {
            list_state.select(Some(0));
        }
        Self { query, selected: 0, result_count, list_state }
    }

    /// Handle a key event, returning a SearchEvent if the loop should act.
    ///
    /// Always swallows the event — an open overlay owns the keyboard.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::Escape => Some(SearchEvent::Dismiss),
            TuiEvent::Submit => {
                // Selection is a position within the result list; the
                // event loop maps it back to a flat outline index.
                (self.result_count > 0).then_some(SearchEvent::Open(self.selected))
            }
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                if self.result_count > 0 {
                    self.selected = (self.selected + 1).min(self.result_count - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::InputChar(c) => {
                self.query.push(*c);
                Some(SearchEvent::QueryChanged(self.query.clone()))
            }
            TuiEvent::Backspace => {
                self.query.pop();
                Some(SearchEvent::QueryChanged(self.query.clone()))
            }
            _ => None,
        }
    }

    /// Re-sync after the core recomputed results for a new query.
    pub fn set_result_count(&mut self, count: usize) {
        self.result_count = count;
        self.selected = 0;
        self.list_state.select((count > 0).then_some(0));
    }
}

/// Events emitted by the search overlay.
pub enum SearchEvent {
    /// The query text changed; the core should recompute results.
    QueryChanged(String),
    /// Open the result at this position in the result list.
    Open(usize),
    Dismiss,
}

/// Transient render wrapper for the search overlay.
pub struct SearchOverlay<'a> {
    state: &'a mut SearchOverlayState,
    outline: &'a Outline,
    /// Flat outline indices of the matching lessons, in catalog order.
    results: &'a [usize],
}

impl<'a> SearchOverlay<'a> {
    pub fn new(state: &'a mut SearchOverlayState, outline: &'a Outline, results: &'a [usize]) -> Self {
        Self { state, outline, results }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 60, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Search ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Open  Esc Close ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [input_area, results_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let input = Paragraph::new(self.state.query.as_str());
        frame.render_widget(input, input_area);
        let cursor_x = input_area.x + self.state.query.width() as u16;
        frame.set_cursor_position(Position::new(
            cursor_x.min(input_area.right().saturating_sub(1)),
            input_area.y,
        ));

        if self.results.is_empty() {
            let hint = if self.state.query.trim().is_empty() {
                "Type to search lesson text."
            } else {
                "No matching lessons."
            };
            let empty = Paragraph::new(hint)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, results_area);
            return;
        }

        let items: Vec<ListItem> = self
            .results
            .iter()
            .enumerate()
            .map(|(i, &flat_index)| {
                let text = match self.outline.get(flat_index) {
                    Some(entry) => format!("{} › {}", entry.module_title, entry.lesson_title),
                    None => String::new(),
                };
                let style = if i == self.state.selected {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(Span::styled(text, style)))
            })
            .collect();

        let list = List::new(items);
        frame.render_stateful_widget(list, results_area, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_builds_the_query() {
        let mut state = SearchOverlayState::new(String::new(), 0);
        let event = state.handle_event(&TuiEvent::InputChar('d'));
        assert!(matches!(event, Some(SearchEvent::QueryChanged(q)) if q == "d"));
        state.handle_event(&TuiEvent::InputChar('n'));
        let event = state.handle_event(&TuiEvent::InputChar('s'));
        assert!(matches!(event, Some(SearchEvent::QueryChanged(q)) if q == "dns"));
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut state = SearchOverlayState::new("dns".to_string(), 1);
        let event = state.handle_event(&TuiEvent::Backspace);
        assert!(matches!(event, Some(SearchEvent::QueryChanged(q)) if q == "dn"));
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = SearchOverlayState::new(String::new(), 0);
        assert!(matches!(
            state.handle_event(&TuiEvent::Escape),
            Some(SearchEvent::Dismiss)
        ));
    }

    #[test]
    fn test_submit_without_results_is_a_noop() {
        let mut state = SearchOverlayState::new("zzz".to_string(), 0);
        assert!(state.handle_event(&TuiEvent::Submit).is_none());
    }

    #[test]
    fn test_selection_clamps_to_results() {
        let mut state = SearchOverlayState::new("mail".to_string(), 2);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_navigation_keys_are_swallowed() {
        let mut state = SearchOverlayState::new(String::new(), 0);
        assert!(state.handle_event(&TuiEvent::NextLesson).is_none());
        assert!(state.handle_event(&TuiEvent::PrevLesson).is_none());
    }

    #[test]
    fn test_set_result_count_resets_selection() {
        let mut state = SearchOverlayState::new("mail".to_string(), 5);
        state.selected = 3;
        state.set_result_count(1);
        assert_eq!(state.selected, 0);
        assert_eq!(state.result_count, 1);
    }
}
