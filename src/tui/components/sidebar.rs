//! # Sidebar Component
//!
//! Course tree: one header row per module, one indented row per lesson,
//! with a completion marker and the current lesson highlighted.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SidebarState` (the `ListState`) lives in `TuiState`
//! - `Sidebar` is created each frame with borrowed catalog/progress data

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::catalog::Catalog;
use crate::core::progress::ProgressStore;

/// Persistent sidebar state. The list selection tracks the current
/// lesson so ratatui keeps it scrolled into view.
pub struct SidebarState {
    pub list_state: ListState,
}

impl SidebarState {
    pub fn new() -> Self {
        Self { list_state: ListState::default() }
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the sidebar.
pub struct Sidebar<'a> {
    catalog: &'a Catalog,
    progress: &'a ProgressStore,
    /// `(module_idx, lesson_idx)` of the current lesson, if it resolves.
    current: Option<(usize, usize)>,
}

impl<'a> Sidebar<'a> {
    pub fn new(
        catalog: &'a Catalog,
        progress: &'a ProgressStore,
        current: Option<(usize, usize)>,
    ) -> Self {
        Self { catalog, progress, current }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &mut SidebarState) {
        let mut items: Vec<ListItem> = Vec::new();
        let mut selected_row = None;

        for (module_idx, module) in self.catalog.modules.iter().enumerate() {
            let done = module
                .lessons
                .iter()
                .filter(|l| self.progress.is_complete(l.id))
                .count();
            items.push(ListItem::new(Line::from(Span::styled(
                format!("{} ({}/{})", module.title, done, module.lessons.len()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))));

            for (lesson_idx, lesson) in module.lessons.iter().enumerate() {
                let marker = if self.progress.is_complete(lesson.id) { "✓" } else { " " };
                let is_current = self.current == Some((module_idx, lesson_idx));
                if is_current {
                    selected_row = Some(items.len());
                }
                let style = if is_current {
                    Style::default().fg(Color::White).add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                items.push(ListItem::new(Line::from(Span::styled(
                    format!(" {} {}", marker, lesson.title),
                    style,
                ))));
            }
        }

        state.list_state.select(selected_row);

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    fn render_to_text(current: Option<(usize, usize)>, complete: &[&str]) -> String {
        let catalog = test_catalog();
        let dir = TempDir::new().unwrap();
        let mut progress = ProgressStore::load(dir.path().to_path_buf());
        for id in complete {
            progress.toggle(id);
        }
        let mut state = SidebarState::new();
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                Sidebar::new(&catalog, &progress, current).render(f, f.area(), &mut state);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_sidebar_lists_modules_and_lessons() {
        let text = render_to_text(Some((0, 0)), &[]);
        assert!(text.contains("Alpha (0/2)"));
        assert!(text.contains("Beta (0/1)"));
        assert!(text.contains("First Lesson"));
        assert!(text.contains("Third Lesson"));
    }

    #[test]
    fn test_sidebar_completion_counts() {
        let text = render_to_text(Some((0, 0)), &["a1", "b1"]);
        assert!(text.contains("Alpha (1/2)"));
        assert!(text.contains("Beta (1/1)"));
        assert!(text.contains("✓"));
    }
}
