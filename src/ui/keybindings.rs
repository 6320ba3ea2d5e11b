use crate::ui::styles::{hint_style, palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect, dark_mode: bool) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Tab subtasks   "),
        Span::raw("Enter done   "),
        Span::raw("a add   "),
        Span::raw("e edit   "),
        Span::raw("x delete   "),
        Span::raw("A subtask   "),
        Span::raw("p start/pause   "),
        Span::raw("s stop   "),
        Span::raw("r reset   "),
        Span::raw("b break   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style(palette(dark_mode)));
    f.render_widget(paragraph, area);
}
