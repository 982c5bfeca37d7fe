//! # Core Application Logic
//!
//! This module contains Lectern's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (course)     │
//!                    │  • Outline (ordering)   │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure, except    │
//!                    │  progress file I/O.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The immutable course tree and slug lookup
//! - [`content`]: The static course payload
//! - [`outline`]: The flat lesson ordering behind prev/next
//! - [`search`]: Substring search over lesson text
//! - [`progress`]: Completion set and trainer flag persistence
//! - [`state`]: The `App` struct — all session state in one place
//! - [`action`]: The `Action` enum — everything that can happen
//! - [`config`]: TOML config with layered overrides

pub mod action;
pub mod catalog;
pub mod config;
pub mod content;
pub mod outline;
pub mod progress;
pub mod search;
pub mod state;
