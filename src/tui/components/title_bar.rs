//! # TitleBar Component
//!
//! Top status bar: course title, current location, completion
//! percentage, and a trainer-mode marker.
//!
//! Purely presentational — all fields are props from `draw_ui`, there is
//! no internal state. The location segment falls back to the raw slug
//! pair when the current position doesn't resolve, so a bad deep link is
//! still visible in the bar.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Course title plus certification code, e.g. "Exchange Online (MS-203)".
    pub course: String,
    /// "Module Title / Lesson Title", or the unresolved slug pair.
    pub location: String,
    /// Completed lessons as a percentage of the course.
    pub progress_percent: u16,
    pub trainer_mode: bool,
}

impl TitleBar {
    pub fn new(course: String, location: String, progress_percent: u16, trainer_mode: bool) -> Self {
        Self { course, location, progress_percent, trainer_mode }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.course),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("| "),
            Span::raw(self.location.clone()),
            Span::raw(format!(" | {}% complete", self.progress_percent)),
        ];
        if self.trainer_mode {
            spans.push(Span::styled(
                " | Trainer",
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_location_and_progress() {
        let mut title_bar = TitleBar::new(
            "Exchange Online (MS-203)".to_string(),
            "Introduction / DNS Records".to_string(),
            34,
            false,
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Exchange Online (MS-203)"));
        assert!(text.contains("Introduction / DNS Records"));
        assert!(text.contains("34% complete"));
        assert!(!text.contains("Trainer"));
    }

    #[test]
    fn test_title_bar_trainer_marker() {
        let mut title_bar = TitleBar::new(
            "Exchange Online (MS-203)".to_string(),
            "Mail Flow / Connectors".to_string(),
            0,
            true,
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Trainer"));
    }
}
