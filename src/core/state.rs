//! # Application State
//!
//! Core navigation state for Runeview. This module contains domain logic
//! only - no TUI-specific types. Rendering details live in the `tui` module.
//!
//! ```text
//! App
//! ├── chars: Arc<dyn CharTable>  // injected character database
//! ├── current: u32               // cursor code point
//! ├── max_code_point: u32        // highest displayable code point
//! ├── status_message: String     // status line text ("" = hidden)
//! ├── last_search: String        // reused when a search query is empty
//! └── viewport_height: u16       // rows in the listing, page delta
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::unicode::{CharTable, compute_max_code_point};
use std::sync::Arc;

pub struct App {
    pub chars: Arc<dyn CharTable>,
    pub current: u32,
    pub max_code_point: u32,
    pub status_message: String,
    pub last_search: String,
    pub viewport_height: u16,
}

impl App {
    pub fn new(chars: Arc<dyn CharTable>) -> Self {
        let max_code_point = compute_max_code_point(&*chars);
        Self {
            chars,
            current: 0,
            max_code_point,
            status_message: String::new(),
            last_search: String::new(),
            // Measured from the terminal before the first frame.
            viewport_height: 0,
        }
    }

    /// First displayable code point at or after `from`.
    ///
    /// Returns `from` unchanged when it is already displayable, and
    /// `max_code_point` when the scan exhausts the range.
    pub fn next_displayable(&self, from: u32) -> u32 {
        let mut cp = from;
        while cp < self.max_code_point && !self.chars.is_displayable(cp) {
            cp += 1;
        }
        cp
    }

    /// Clamp `current` into `[0, max_code_point]` and advance it to the next
    /// displayable code point.
    ///
    /// Runs once per display cycle, before each draw. Commands may leave
    /// `current` out of range or on a non-displayable point in between.
    pub fn normalize(&mut self) {
        if self.current > self.max_code_point {
            self.current = self.max_code_point;
            return;
        }
        self.current = self.next_displayable(self.current);
    }

    /// The code points one frame of the listing shows: starting at `current`,
    /// up to `rows` displayable code points in strictly increasing order.
    pub fn visible_from_current(&self, rows: usize) -> Vec<u32> {
        let mut out = Vec::with_capacity(rows);
        let mut cp = self.current;
        for _ in 0..rows {
            cp = self.next_displayable(cp);
            out.push(cp);
            if cp == self.max_code_point {
                break;
            }
            cp += 1;
        }
        out
    }
}
