use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::prompt::PromptLine;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Key bindings summary for the reverse-video help bar.
const HELP_TEXT: &str = "^C:Quit ^F:Find ^S:Search M-g:Jump M-<:Start M->:End";

/// Draw one full frame: the code point listing, the help bar, and either the
/// active prompt or the status message on the bottom line.
pub fn draw_ui(frame: &mut Frame, app: &App, prompt: Option<&mut PromptLine>) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(1), Length(1)]);
    let [list_area, help_area, bottom_area] = layout.areas(frame.area());

    draw_listing(frame, list_area, app);
    draw_help_bar(frame, help_area);

    match prompt {
        Some(p) => p.render(frame, bottom_area),
        None => {
            if !app.status_message.is_empty() {
                frame.render_widget(Span::raw(app.status_message.as_str()), bottom_area);
            }
            // Park the hardware cursor on the marker row while browsing
            frame.set_cursor_position((list_area.x, list_area.y));
        }
    }
}

/// One line per displayable code point: decimal, hex, octal, glyph, name.
/// The first row carries the `>` cursor marker.
fn draw_listing(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .visible_from_current(area.height as usize)
        .iter()
        .enumerate()
        .map(|(i, &cp)| {
            let marker = if i == 0 { '>' } else { ' ' };
            Line::raw(format_row(app, marker, cp))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn format_row(app: &App, marker: char, cp: u32) -> String {
    let glyph = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
    let name = app.chars.name_of(cp).unwrap_or_default();
    format!("{} {} 0x{:02x} 0{:o} '{}' {}", marker, cp, cp, cp, glyph, name)
}

fn draw_help_bar(frame: &mut Frame, area: Rect) {
    // Paragraph styles the whole row, so the bar spans the full width
    let bar = Paragraph::new(HELP_TEXT).style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App) -> String {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, None)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui_shows_rows_and_help() {
        let mut app = test_app();
        app.normalize();
        let text = render_to_text(&app);

        // First row: cursor marker + SPACE (0x20) in all three bases
        assert!(text.contains("> 32 0x20 040 ' ' TEST GLYPH 0020"));
        // Second row follows without the marker
        assert!(text.contains("  33 0x21 041 '!' TEST GLYPH 0021"));
        assert!(text.contains(HELP_TEXT));
    }

    #[test]
    fn test_draw_ui_shows_status_message() {
        let mut app = test_app();
        app.normalize();
        app.status_message = "No match found for xyzzy".to_string();
        let text = render_to_text(&app);
        assert!(text.contains("No match found for xyzzy"));
    }

    #[test]
    fn test_draw_ui_with_prompt_line() {
        let mut app = test_app();
        app.normalize();
        let mut prompt = PromptLine::new("Jump to #");
        prompt.buffer = "0x41".to_string();

        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, &app, Some(&mut prompt)))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Jump to #: 0x41"));
    }

    #[test]
    fn test_format_row_layout() {
        let app = test_app();
        assert_eq!(
            format_row(&app, ' ', 0x41),
            "  65 0x41 0101 'A' TEST GLYPH 0041"
        );
    }

    #[test]
    fn test_listing_never_repeats_a_row() {
        let mut app = test_app();
        app.current = 0x7D;
        app.normalize();
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, None)).unwrap();

        // 10 listing rows over the 0x80..=0x9F gap: all distinct
        let rows = app.visible_from_current(10);
        let mut deduped = rows.clone();
        deduped.dedup();
        assert_eq!(rows, deduped);
    }
}
