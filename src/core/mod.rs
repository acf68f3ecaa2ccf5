//! # Core Navigation Logic
//!
//! This module contains Runeview's navigation engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (cursor/range) │
//!                    │  • Action (commands)    │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal I/O here.  │
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
//! - [`state`]: The `App` struct — cursor, range bound, and search memory
//! - [`action`]: The `Action` enum — every navigation command, and `update()`

pub mod action;
pub mod state;
