//! # Prompt Line
//!
//! The single-line text prompt used by the jump, find, and search commands.
//!
//! Prompting is a nested blocking sub-interaction: while a prompt is active,
//! the main loop is suspended and [`prompt_for_text`] owns the terminal. It
//! redraws the full browse view on every keystroke with the prompt text in
//! place of the status line, so the listing stays visible while typing.
//!
//! Cancelling (Esc, Ctrl+G, or Ctrl+C) yields the empty string, which the
//! command semantics already handle: an empty jump is a parse error, an
//! empty find is a decode error, and an empty search repeats the last term.

use std::io;

use log::debug;
use ratatui::DefaultTerminal;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::{TuiEvent, read_event};
use crate::tui::ui;

/// High-level events emitted by the PromptLine
#[derive(Debug, Clone, PartialEq)]
pub enum PromptEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// User cancelled the prompt (Esc, Ctrl+G, Ctrl+C)
    Cancel,
    /// Text content changed
    Changed,
}

/// Single-line text input shown on the bottom row.
///
/// # Props
///
/// - `label`: What is being asked for (e.g. "Jump to #")
///
/// # State
///
/// - `buffer`: Current text being typed
pub struct PromptLine {
    pub label: &'static str,
    pub buffer: String,
}

impl PromptLine {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            buffer: String::new(),
        }
    }
}

impl EventHandler for PromptLine {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(PromptEvent::Changed)
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                Some(PromptEvent::Changed)
            }
            TuiEvent::Submit => Some(PromptEvent::Submit(std::mem::take(&mut self.buffer))),
            TuiEvent::Cancel | TuiEvent::Quit => Some(PromptEvent::Cancel),
            _ => None,
        }
    }
}

impl Component for PromptLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = format!("{}: {}", self.label, self.buffer);
        // Hardware cursor sits right after the typed text; width() keeps it
        // honest when the buffer holds wide characters
        let cursor_x = (text.as_str().width() as u16).min(area.width.saturating_sub(1));
        frame.render_widget(Span::raw(text), area);
        frame.set_cursor_position((area.x + cursor_x, area.y));
    }
}

/// Run a prompt to completion, redrawing the browse view on each keystroke.
///
/// Returns the submitted text, or the empty string when cancelled.
pub fn prompt_for_text(
    terminal: &mut DefaultTerminal,
    app: &App,
    label: &'static str,
) -> io::Result<String> {
    let mut prompt = PromptLine::new(label);
    loop {
        terminal.draw(|f| ui::draw_ui(f, app, Some(&mut prompt)))?;
        let Some(event) = read_event()? else { continue };
        match prompt.handle_event(&event) {
            Some(PromptEvent::Submit(text)) => {
                debug!("prompt \"{}\" submitted: {:?}", label, text);
                return Ok(text);
            }
            Some(PromptEvent::Cancel) => {
                debug!("prompt \"{}\" cancelled", label);
                return Ok(String::new());
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_builds_buffer() {
        let mut prompt = PromptLine::new("Jump to #");

        let res = prompt.handle_event(&TuiEvent::InputChar('4'));
        assert_eq!(res, Some(PromptEvent::Changed));
        let res = prompt.handle_event(&TuiEvent::InputChar('2'));
        assert_eq!(res, Some(PromptEvent::Changed));
        assert_eq!(prompt.buffer, "42");

        let res = prompt.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(PromptEvent::Changed));
        assert_eq!(prompt.buffer, "4");
    }

    #[test]
    fn test_backspace_on_empty_buffer() {
        let mut prompt = PromptLine::new("Find rune");
        let res = prompt.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(PromptEvent::Changed));
        assert_eq!(prompt.buffer, "");
    }

    #[test]
    fn test_submit_takes_buffer() {
        let mut prompt = PromptLine::new("Search for rune name");
        prompt.buffer = "latin".to_string();

        let res = prompt.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(PromptEvent::Submit("latin".to_string())));
        assert!(prompt.buffer.is_empty(), "Buffer is cleared after submit");
    }

    #[test]
    fn test_submit_empty_buffer_is_allowed() {
        // An empty submit is meaningful: search repeats the last term
        let mut prompt = PromptLine::new("Search for rune name");
        let res = prompt.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(PromptEvent::Submit(String::new())));
    }

    #[test]
    fn test_cancel_events() {
        let mut prompt = PromptLine::new("Jump to #");
        prompt.buffer = "123".to_string();
        assert_eq!(
            prompt.handle_event(&TuiEvent::Cancel),
            Some(PromptEvent::Cancel)
        );
        assert_eq!(
            prompt.handle_event(&TuiEvent::Quit),
            Some(PromptEvent::Cancel)
        );
    }

    #[test]
    fn test_navigation_events_are_ignored() {
        let mut prompt = PromptLine::new("Jump to #");
        assert_eq!(prompt.handle_event(&TuiEvent::StepUp), None);
        assert_eq!(prompt.handle_event(&TuiEvent::PageDown), None);
        assert_eq!(prompt.handle_event(&TuiEvent::Resize), None);
    }
}
