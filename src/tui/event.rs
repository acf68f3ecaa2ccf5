use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events.
///
/// One vocabulary serves both loops: the browse loop consumes the navigation
/// variants and ignores editing ones, the prompt loop does the opposite.
pub enum TuiEvent {
    // Navigation commands (mapped to core::Action)
    Quit,
    JumpToStart,
    JumpToEnd,
    PromptJump,
    PromptFind,
    PromptSearch,
    StepUp,
    StepDown,
    PageUp,
    PageDown,

    // Prompt editing (consumed by PromptLine)
    InputChar(char),
    Backspace,
    Submit,
    Cancel,

    // Terminal resize - redraw only, never touches navigation state
    Resize,
}

/// Block until the next terminal event and decode it.
///
/// Returns `None` for events outside our vocabulary (mouse, focus, unknown
/// chords); the caller just waits again.
pub fn read_event() -> std::io::Result<Option<TuiEvent>> {
    match event::read()? {
        // Enhanced keyboards report releases and repeats too; act on press only
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(decode_key(key)),
        Event::Resize(_, _) => Ok(Some(TuiEvent::Resize)),
        _ => Ok(None),
    }
}

/// Emacs-flavored key chords.
fn decode_key(key: KeyEvent) -> Option<TuiEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(TuiEvent::Quit),
        KeyCode::Char('f') if ctrl => Some(TuiEvent::PromptFind),
        KeyCode::Char('s') if ctrl => Some(TuiEvent::PromptSearch),
        // C-g is the Emacs cancel; check before M-g so C-M-g stays a cancel
        KeyCode::Char('g') if ctrl => Some(TuiEvent::Cancel),
        KeyCode::Char('g') if alt => Some(TuiEvent::PromptJump),
        KeyCode::Char('<') if alt => Some(TuiEvent::JumpToStart),
        KeyCode::Char('>') if alt => Some(TuiEvent::JumpToEnd),
        KeyCode::Char('p') if ctrl => Some(TuiEvent::StepUp),
        KeyCode::Char('n') if ctrl => Some(TuiEvent::StepDown),
        KeyCode::Char('v') if alt => Some(TuiEvent::PageUp),
        KeyCode::Char('v') if ctrl => Some(TuiEvent::PageDown),
        KeyCode::Char('z') if ctrl => Some(TuiEvent::PageUp),
        KeyCode::Up => Some(TuiEvent::StepUp),
        KeyCode::Down => Some(TuiEvent::StepDown),
        KeyCode::PageUp => Some(TuiEvent::PageUp),
        KeyCode::PageDown => Some(TuiEvent::PageDown),
        KeyCode::Char(c) if !ctrl && !alt => Some(TuiEvent::InputChar(c)),
        KeyCode::Backspace => Some(TuiEvent::Backspace),
        KeyCode::Enter => Some(TuiEvent::Submit),
        KeyCode::Esc => Some(TuiEvent::Cancel),
        _ => None,
    }
}
