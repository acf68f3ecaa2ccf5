//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::state::App;
use crate::unicode::CharTable;

/// A small, hand-built character table with a known shape:
/// code points up to `0x2FF` are displayable except for two gaps,
/// `0x00..=0x1F` and `0x80..=0x9F`. Names follow a fixed
/// `TEST GLYPH XXXX` scheme so search tests have predictable matches.
pub struct FakeTable;

const LIMIT: u32 = 0x2FF;
const GAPS: [(u32, u32); 2] = [(0x00, 0x1F), (0x80, 0x9F)];

impl CharTable for FakeTable {
    fn is_displayable(&self, cp: u32) -> bool {
        cp <= LIMIT && !GAPS.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
    }

    fn name_of(&self, cp: u32) -> Option<String> {
        self.is_displayable(cp)
            .then(|| format!("TEST GLYPH {:04X}", cp))
    }
}

/// Creates a test App backed by a [`FakeTable`].
pub fn test_app() -> App {
    App::new(Arc::new(FakeTable))
}
