//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the listing,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly single-threaded and event-driven: each iteration measures the
//! terminal, normalizes the cursor, draws one frame, then blocks on the next
//! input event. The jump/find/search commands suspend the loop inside a
//! nested prompt sub-interaction (see `prompt`) that keeps redrawing the
//! frame while the user types.
//!
//! Resize events only trigger a redraw; navigation state never changes on
//! resize.

mod component;
mod event;
mod prompt;
mod ui;

use std::io;
use std::sync::Arc;

use log::info;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::event::{TuiEvent, read_event};
use crate::tui::prompt::prompt_for_text;
use crate::unicode::{CharTable, UcdTable};

pub fn run() -> io::Result<()> {
    let chars: Arc<dyn CharTable> = Arc::new(UcdTable);
    let mut app = App::new(chars);
    info!(
        "character table loaded, max code point {:#x}",
        app.max_code_point
    );

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        let size = terminal.size()?;
        // Listing rows: everything above the help bar and status line
        app.viewport_height = size.height.saturating_sub(2);
        app.normalize();
        terminal.draw(|f| ui::draw_ui(f, app, None))?;

        let Some(tui_event) = read_event()? else {
            continue;
        };
        let action = match tui_event {
            TuiEvent::Resize => continue,
            TuiEvent::Quit => Action::Quit,
            TuiEvent::JumpToStart => Action::JumpToStart,
            TuiEvent::JumpToEnd => Action::JumpToEnd,
            TuiEvent::StepUp => Action::StepUp,
            TuiEvent::StepDown => Action::StepDown,
            TuiEvent::PageUp => Action::PageUp,
            TuiEvent::PageDown => Action::PageDown,
            TuiEvent::PromptJump => Action::JumpTo(prompt_for_text(terminal, app, "Jump to #")?),
            TuiEvent::PromptFind => Action::FindRune(prompt_for_text(terminal, app, "Find rune")?),
            TuiEvent::PromptSearch => {
                Action::SearchName(prompt_for_text(terminal, app, "Search for rune name")?)
            }
            // Prompt editing events mean nothing while browsing
            TuiEvent::InputChar(_) | TuiEvent::Backspace | TuiEvent::Submit | TuiEvent::Cancel => {
                continue;
            }
        };

        if update(app, action) == Effect::Quit {
            info!("quit requested, leaving event loop");
            return Ok(());
        }
    }
}
