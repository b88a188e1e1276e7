//! Header widget showing title, route tabs, theme, and filter/status.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::route::Route;
use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &Styles) {
    let chunks = Layout::horizontal([
        Constraint::Length(12), // Title
        Constraint::Min(26),    // Tabs
        Constraint::Length(9),  // Theme
        Constraint::Length(42), // Filter/Status
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(" orderdesk").style(styles.header()),
        chunks[0],
    );

    let tabs: Vec<Span> = Route::all()
        .iter()
        .enumerate()
        .flat_map(|(i, route)| {
            let style = if *route == state.route {
                styles.tab_active()
            } else {
                styles.tab_inactive()
            };
            [
                Span::styled(format!(" {}:", i + 1), styles.dim()),
                Span::styled(format!("{} ", route.name()), style),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(tabs)).style(styles.header()),
        chunks[1],
    );

    let theme = format!(" [{}]", state.theme_mode().as_str());
    frame.render_widget(Paragraph::new(theme).style(styles.header()), chunks[2]);

    let (right_content, right_style) = if let Some(msg) = &state.status_message {
        (msg.clone(), styles.header().patch(styles.warning()))
    } else {
        match state.input_mode {
            InputMode::Filter => (
                format!("Country: {}█", state.filter_input),
                styles.header().patch(styles.filter_input()),
            ),
            InputMode::Normal => {
                let filter = &state.customers.query().filter_text;
                let text = if state.route == Route::Customers && !filter.is_empty() {
                    format!("/{}", filter)
                } else {
                    String::new()
                };
                (text, styles.header())
            }
        }
    };
    frame.render_widget(Paragraph::new(right_content).style(right_style), chunks[3]);
}
