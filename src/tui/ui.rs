//! Frame composition: lays out the title bar, sidebar, and lesson pane,
//! then the search overlay on top when it is open.

use crate::core::state::{App, Position};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LessonView, SearchOverlay, Sidebar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

/// Sidebar width in columns when open.
const SIDEBAR_WIDTH: u16 = 34;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let mut title_bar = TitleBar::new(
        format!("{} ({})", app.catalog.title, app.catalog.certification_code),
        location_label(app),
        app.progress_percent(),
        app.trainer_mode,
    );
    title_bar.render(frame, title_area);

    let lesson_area = if app.sidebar_open {
        let [sidebar_area, lesson_area] =
            Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(main_area);
        let current = app.current_entry().map(|e| (e.module_idx, e.lesson_idx));
        Sidebar::new(&app.catalog, &app.progress, current).render(
            frame,
            sidebar_area,
            &mut tui.sidebar,
        );
        lesson_area
    } else {
        main_area
    };

    match app.current_lesson() {
        Some((module, lesson)) => {
            LessonView::new(module, lesson, app.trainer_mode, app.current_complete()).render(
                frame,
                lesson_area,
                &mut tui.lesson_view,
            );
        }
        None => draw_not_found(frame, lesson_area, app),
    }

    if let Some(ref mut overlay) = tui.search_overlay {
        SearchOverlay::new(overlay, &app.outline, &app.search_results)
            .render(frame, frame.area());
    }
}

/// "Module Title / Lesson Title" for the title bar, or the raw slug
/// pair when the position doesn't resolve.
fn location_label(app: &App) -> String {
    match &app.position {
        Position::Lesson(_) => match app.current_entry() {
            Some(entry) => format!("{} / {}", entry.module_title, entry.lesson_title),
            None => String::new(),
        },
        Position::NotFound { module_slug, lesson_slug } => {
            format!("{module_slug}/{lesson_slug}")
        }
    }
}

fn draw_not_found(frame: &mut Frame, area: Rect, app: &App) {
    let message = match &app.position {
        Position::NotFound { module_slug, lesson_slug } => {
            format!("Lesson not found: {module_slug}/{lesson_slug}")
        }
        Position::Lesson(_) => "Lesson not found".to_string(),
    };
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" Not Found "));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_default_layout() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Test Course (TST-1)"));
        assert!(text.contains("Alpha / First Lesson"));
        // Sidebar open by default
        assert!(text.contains("Alpha (0/2)"));
    }

    #[test]
    fn test_draw_ui_sidebar_closed() {
        let mut app = test_app();
        update(&mut app, Action::ToggleSidebar);
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(!text.contains("Alpha (0/2)"));
        assert!(text.contains("First Lesson"));
    }

    #[test]
    fn test_draw_ui_not_found() {
        let mut app = test_app();
        update(
            &mut app,
            Action::Open {
                module_slug: "ghost".to_string(),
                lesson_slug: "nowhere".to_string(),
            },
        );
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Lesson not found: ghost/nowhere"));
    }

    #[test]
    fn test_draw_ui_with_search_overlay() {
        let mut app = test_app();
        update(&mut app, Action::SetSearchQuery("routing".to_string()));
        let mut tui = TuiState::new();
        tui.search_overlay = Some(crate::tui::components::SearchOverlayState::new(
            app.search_query.clone(),
            app.search_results.len(),
        ));
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Search"));
        assert!(text.contains("Alpha › Second Lesson"));
    }
}
