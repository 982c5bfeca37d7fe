//! Translation from crossterm events to Lectern's input vocabulary.
//!
//! Keyboard and mouse events are mapped here, once, into [`TuiEvent`]
//! values. The rest of the TUI never touches crossterm key codes.

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C: quit regardless of what is open.
    ForceQuit,
    /// Esc: dismiss the search overlay, or quit from the main view.
    Escape,
    /// Right or Alt+Right: step to the next lesson.
    NextLesson,
    /// Left or Alt+Left: step to the previous lesson.
    PrevLesson,
    /// Up/Down arrows: scroll the lesson pane, or move the search cursor.
    CursorUp,
    CursorDown,
    // Mouse wheel
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    /// Enter: open the selected search result.
    Submit,
    Backspace,
    /// Any printable character. Commands ('q', 't', '/'…) are derived in
    /// the event loop so the search overlay can consume these as text.
    InputChar(char),
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    translate(event::read().ok()?)
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                // Plain and Alt-modified arrows both navigate
                (_, KeyCode::Right) => Some(TuiEvent::NextLesson),
                (_, KeyCode::Left) => Some(TuiEvent::PrevLesson),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
