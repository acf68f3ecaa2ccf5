//! # Actions
//!
//! Everything that can happen in Runeview becomes an `Action`.
//! User presses Down? That's `Action::StepDown`.
//! User submits "0x41" at the jump prompt? That's `Action::JumpTo("0x41")`.
//!
//! The `update()` function takes the current state and an action, then
//! mutates the state in place and reports the required `Effect`. No terminal
//! I/O here. Prompting for text happens in the `tui` module and arrives as a
//! string payload on the action.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes every command testable without a terminal.
//!
//! Out-of-range or non-displayable landings are deliberately left raw:
//! `App::normalize` corrects them at the start of the next display cycle, so
//! a find-by-rune may sit on a format character until the next frame skips
//! it forward.

use std::num::ParseIntError;

use log::debug;

use crate::core::state::App;

/// Every navigation command the core supports. String payloads carry the
/// text the user typed into a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    JumpToStart,
    JumpToEnd,
    JumpTo(String),
    FindRune(String),
    SearchName(String),
    StepUp,
    StepDown,
    PageUp,
    PageDown,
}

/// What the event loop must do after a reducer call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// Apply one command to the navigation state.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} (current={:#x})", action, app.current);
    match action {
        Action::Quit => return Effect::Quit,
        Action::JumpToStart => app.current = 0,
        Action::JumpToEnd => app.current = app.max_code_point,
        Action::JumpTo(text) => match parse_code_point(&text) {
            Ok(dest) => {
                app.current = if dest > u64::from(app.max_code_point) {
                    app.max_code_point
                } else {
                    dest as u32
                };
            }
            Err(e) => app.status_message = e.to_string(),
        },
        Action::FindRune(text) => match text.chars().next() {
            Some(c) => app.current = c as u32,
            None => app.status_message = String::from("No or erroneous rune provided"),
        },
        Action::SearchName(query) => search_name(app, query),
        Action::StepUp => {
            app.current = app.current.saturating_sub(1);
            while app.current > 0 && !app.chars.is_displayable(app.current) {
                app.current -= 1;
            }
        }
        Action::StepDown => app.current = app.current.saturating_add(1),
        Action::PageUp => {
            app.current = app.current.saturating_sub(u32::from(app.viewport_height));
        }
        Action::PageDown => {
            app.current = app.current.saturating_add(u32::from(app.viewport_height));
        }
    }
    Effect::None
}

/// Case-insensitive substring search over character names, scanning forward
/// from the cursor. An empty query repeats the previous search.
fn search_name(app: &mut App, query: String) {
    let query = if query.is_empty() {
        app.last_search.clone()
    } else {
        query
    };
    let needle = query.to_uppercase();

    let origin = app.current;
    let mut cp = origin.saturating_add(1);
    while cp < app.max_code_point {
        if app
            .chars
            .name_of(cp)
            .is_some_and(|name| name.contains(&needle))
        {
            debug!("search \"{}\" matched at {:#x}", query, cp);
            app.current = cp;
            app.last_search = query;
            return;
        }
        cp += 1;
    }

    app.status_message = format!("No match found for {}", query);
    app.current = origin;
}

/// Parse user input as a code point number, accepting `0x`/`0o`/`0b` prefixes
/// and a plain leading `0` for octal. Parses as u64 so oversized values are
/// clamped by the caller rather than rejected here.
pub fn parse_code_point(text: &str) -> Result<u64, ParseIntError> {
    let (digits, radix) = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(rest) => (rest, 16),
        None => match text.strip_prefix("0o").or_else(|| text.strip_prefix("0O")) {
            Some(rest) => (rest, 8),
            None => match text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
                Some(rest) => (rest, 2),
                None => {
                    if text.len() > 1 && text.starts_with('0') {
                        (&text[1..], 8)
                    } else {
                        (text, 10)
                    }
                }
            },
        },
    };
    u64::from_str_radix(digits, radix)
}
