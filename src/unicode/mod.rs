//! # Character Database
//!
//! The Unicode character database as an injected capability. Everything the
//! rest of the crate needs from Unicode data goes through the [`CharTable`]
//! trait: is a code point displayable, and what is it called. The production
//! implementation ([`UcdTable`]) delegates to registry crates that track the
//! UCD; tests swap in a hand-built table instead.
//!
//! Nothing here hard-codes the highest assigned code point. It moves with
//! every Unicode revision, so [`compute_max_code_point`] derives it at
//! startup from whatever data is linked in.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Upper bound of the 21-bit Unicode code space.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Classification and naming for code points.
///
/// Injected into [`App`](crate::core::state::App) so the navigation core can
/// be tested against a deterministic table instead of the live UCD.
pub trait CharTable {
    /// True when the code point has a renderable glyph: a letter, mark,
    /// number, punctuation, symbol, or plain space. Controls, format
    /// characters, surrogates, private use, and unassigned code points are
    /// not displayable.
    fn is_displayable(&self, cp: u32) -> bool;

    /// The official character name, or `None` when the code point has no
    /// name in the active UCD (unassigned, control, surrogate).
    fn name_of(&self, cp: u32) -> Option<String>;
}

/// Production [`CharTable`] backed by the Unicode Character Database.
pub struct UcdTable;

impl CharTable for UcdTable {
    fn is_displayable(&self, cp: u32) -> bool {
        // from_u32 rejects surrogates and anything past 0x10FFFF.
        match char::from_u32(cp) {
            Some(c) => is_graphic(get_general_category(c)),
            None => false,
        }
    }

    fn name_of(&self, cp: u32) -> Option<String> {
        let c = char::from_u32(cp)?;
        unicode_names2::name(c).map(|name| name.to_string())
    }
}

/// General categories with a visible rendering: L*, M*, N*, P*, S*, and Zs.
fn is_graphic(category: GeneralCategory) -> bool {
    !matches!(
        category,
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Largest displayable code point in the active character database.
///
/// Scans downward from [`MAX_CODE_POINT`]; computed once at startup and
/// treated as immutable afterward.
pub fn compute_max_code_point(chars: &dyn CharTable) -> u32 {
    let mut cp = MAX_CODE_POINT;
    while cp > 0 && !chars.is_displayable(cp) {
        cp -= 1;
    }
    cp
}
