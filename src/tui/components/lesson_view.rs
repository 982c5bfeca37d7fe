//! # LessonView Component
//!
//! Scrollable pane rendering the current lesson's content sections in
//! authoring order: explanation, key points, architecture flow, why it
//! matters, common mistakes, interview tips, exam tips, and — only in
//! trainer mode — the trainer notes.
//!
//! The whole lesson is laid out as one tall `Paragraph` inside a
//! `ScrollView`. Section heights vary with terminal width, so the
//! content height is measured with `Paragraph::line_count` each frame
//! rather than cached.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::{Lesson, Module};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent scroll state for the lesson pane.
pub struct LessonViewState {
    pub scroll_state: ScrollViewState,
}

impl LessonViewState {
    pub fn new() -> Self {
        Self { scroll_state: ScrollViewState::default() }
    }

    /// Reset scroll to the top, used when the current lesson changes.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl Default for LessonViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for LessonViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

/// Transient render wrapper for the lesson pane.
pub struct LessonView<'a> {
    module: &'a Module,
    lesson: &'a Lesson,
    trainer_mode: bool,
    complete: bool,
}

impl<'a> LessonView<'a> {
    pub fn new(module: &'a Module, lesson: &'a Lesson, trainer_mode: bool, complete: bool) -> Self {
        Self { module, lesson, trainer_mode, complete }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &mut LessonViewState) {
        let content_width = area.width.saturating_sub(1).max(1);

        let paragraph = Paragraph::new(self.build_lines()).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            paragraph,
            Rect::new(0, 0, content_width, content_height),
        );

        frame.render_stateful_widget(scroll_view, area, &mut state.scroll_state);
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let content = &self.lesson.content;
        let mut lines = Vec::new();

        let status = if self.complete { " ✓ completed" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(
                self.lesson.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · {}{}", self.module.title, self.lesson.duration, status),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::default());

        for paragraph in &content.explanation {
            lines.push(Line::raw(*paragraph));
            lines.push(Line::default());
        }

        push_section(&mut lines, "Key Points", Color::Cyan);
        for point in &content.key_points {
            push_bullet(&mut lines, *point);
        }
        lines.push(Line::default());

        if let Some(architecture) = &content.architecture {
            push_section(&mut lines, architecture.title, Color::Magenta);
            for step in &architecture.steps {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {}. {} ", step.step, step.title),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("— {}", step.description),
                        Style::default().fg(Color::Gray),
                    ),
                ]));
            }
            lines.push(Line::default());
        }

        push_section(&mut lines, "Why It Matters", Color::Green);
        lines.push(Line::raw(content.why_it_matters));
        lines.push(Line::default());

        push_section(&mut lines, "Common Mistakes", Color::Red);
        for mistake in &content.common_mistakes {
            push_bullet(&mut lines, *mistake);
        }
        lines.push(Line::default());

        push_section(&mut lines, "Interview Tips", Color::Blue);
        for tip in &content.interview_tips {
            push_bullet(&mut lines, *tip);
        }
        lines.push(Line::default());

        push_section(&mut lines, "Exam Tips", Color::Blue);
        for tip in &content.exam_tips {
            push_bullet(&mut lines, *tip);
        }

        if self.trainer_mode
            && let Some(notes) = &self.lesson.trainer_notes
        {
            lines.push(Line::default());
            push_section(&mut lines, "Trainer Notes", Color::Yellow);
            push_subsection(&mut lines, "Talking points", &notes.talking_points);
            push_subsection(&mut lines, "Real examples", &notes.real_examples);
            push_subsection(&mut lines, "Questions to ask", &notes.questions_to_ask);
        }

        lines
    }
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &'static str, color: Color) {
    lines.push(Line::from(Span::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
}

fn push_subsection(lines: &mut Vec<Line<'static>>, title: &'static str, items: &[&'static str]) {
    if items.is_empty() {
        return;
    }
    lines.push(Line::from(Span::styled(
        format!("  {title}"),
        Style::default().fg(Color::Yellow),
    )));
    for item in items {
        lines.push(Line::from(Span::styled(
            format!("    • {item}"),
            Style::default().fg(Color::Gray),
        )));
    }
}

fn push_bullet(lines: &mut Vec<Line<'static>>, text: &'static str) {
    lines.push(Line::from(vec![
        Span::styled("  • ", Style::default().fg(Color::DarkGray)),
        Span::raw(text),
    ]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(trainer_mode: bool) -> String {
        let catalog = test_catalog();
        let module = &catalog.modules[0];
        let lesson = &module.lessons[1]; // a2 carries architecture and trainer notes
        let mut state = LessonViewState::new();
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                LessonView::new(module, lesson, trainer_mode, false)
                    .render(f, f.area(), &mut state);
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
    fn test_sections_render_in_order() {
        let text = render_to_text(false);
        let key_points = text.find("Key Points").unwrap();
        let architecture = text.find("Two Step Flow").unwrap();
        let why = text.find("Why It Matters").unwrap();
        let mistakes = text.find("Common Mistakes").unwrap();
        assert!(key_points < architecture);
        assert!(architecture < why);
        assert!(why < mistakes);
    }

    #[test]
    fn test_trainer_notes_hidden_by_default() {
        let text = render_to_text(false);
        assert!(!text.contains("Trainer Notes"));
        assert!(!text.contains("Walk through the flow diagram"));
    }

    #[test]
    fn test_trainer_notes_shown_in_trainer_mode() {
        let text = render_to_text(true);
        assert!(text.contains("Trainer Notes"));
        assert!(text.contains("Walk through the flow diagram"));
    }

    #[test]
    fn test_scroll_events_are_consumed() {
        let mut state = LessonViewState::new();
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), Some(()));
        assert_eq!(state.handle_event(&TuiEvent::ScrollPageDown), Some(()));
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }
}
