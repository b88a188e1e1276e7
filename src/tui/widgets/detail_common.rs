//! Shared primitives for popup widgets.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear};

use crate::tui::style::Styles;

/// Returns a centered rect of given percentage within `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Clears `popup_area`, draws the bordered popup block and returns its inner area.
pub fn render_popup_block(
    frame: &mut Frame,
    popup_area: Rect,
    title: &str,
    styles: &Styles,
) -> Rect {
    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(styles.border())
        .style(styles.default());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    inner
}

/// Section header: `── {name} ──`
pub fn section(name: &str, styles: &Styles) -> Line<'static> {
    Line::from(Span::styled(
        format!("── {} ──", name),
        styles.section_header(),
    ))
}

/// Key-value line. Key is right-aligned 16 chars with colon.
pub fn kv(key: &str, value: &str, styles: &Styles) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>16}: ", key), styles.help_key()),
        Span::raw(value.to_string()),
    ])
}

/// Footer line of `key description` pairs.
pub fn hint_line(pairs: &[(&str, &str)], styles: &Styles) -> Line<'static> {
    let spans: Vec<Span<'static>> = pairs
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(key.to_string(), styles.help_key()),
                Span::styled(format!(" {}  ", desc), styles.help()),
            ]
        })
        .collect();
    Line::from(spans)
}
