//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns appear here:
//!
//! - **Stateless, props-based**: `TitleBar` receives all data as fields
//!   and renders it. No internal state.
//! - **Persistent state + transient wrapper**: `Sidebar`, `LessonView`
//!   and `SearchOverlay` keep their presentation state (`*State` types)
//!   in `TuiState` across frames, and a short-lived wrapper borrows
//!   that state plus the core data for a single render pass.
//!
//! Each component file is self-contained: state types, event types,
//! rendering, and tests live together.

mod title_bar;
pub use title_bar::TitleBar;

pub mod lesson_view;
pub mod search_overlay;
pub mod sidebar;
pub use lesson_view::{LessonView, LessonViewState};
pub use search_overlay::{SearchEvent, SearchOverlay, SearchOverlayState};
pub use sidebar::{Sidebar, SidebarState};
