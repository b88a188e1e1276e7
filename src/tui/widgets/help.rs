//! Help popup widget listing the key bindings of the active route.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::route::Route;
use crate::tui::style::Styles;

use super::detail_common::{hint_line, render_popup_block, section};

const GLOBAL_KEYS: &[(&str, &str)] = &[
    ("q", "Quit (with confirmation)"),
    ("Ctrl-C", "Quit immediately"),
    ("Tab / Shift-Tab", "Next / previous route"),
    ("1 / 2", "Customers / Orders"),
    ("t", "Toggle light/dark theme"),
    ("?", "Toggle this help"),
];

const TABLE_KEYS: &[(&str, &str)] = &[
    ("↑/↓ j/k", "Move cursor"),
    ("PgUp/PgDn", "Move cursor by 10 rows"),
    ("Home/End", "First / last row"),
    ("→ n", "Next page"),
    ("← p", "Previous page"),
    ("+ / -", "Larger / smaller page size"),
    ("s", "Sort by next column"),
    ("r", "Reverse sort direction"),
    ("R", "Retry the last request"),
];

const CUSTOMER_KEYS: &[(&str, &str)] = &[
    ("/", "Filter by country prefix (Enter applies, Esc cancels)"),
    ("Enter", "Show the selected customer's orders"),
];

const DETAIL_KEYS: &[(&str, &str)] = &[
    ("→ n / ← p", "Page through the customer's orders"),
    ("R", "Retry loading orders"),
    ("Esc", "Close"),
];

/// Help lines for `route`.
pub fn help_lines(route: Route, styles: &Styles) -> Vec<Line<'static>> {
    let key_line = |(key, desc): &(&str, &str)| {
        Line::from(vec![
            Span::styled(format!("{:>18}  ", key), styles.help_key()),
            Span::raw(desc.to_string()),
        ])
    };

    let mut lines = vec![section("General", styles)];
    lines.extend(GLOBAL_KEYS.iter().map(key_line));
    lines.push(Line::from(""));
    lines.push(section(route.name(), styles));
    lines.extend(TABLE_KEYS.iter().map(key_line));
    if route == Route::Customers {
        lines.extend(CUSTOMER_KEYS.iter().map(key_line));
        lines.push(Line::from(""));
        lines.push(section("Customer detail", styles));
        lines.extend(DETAIL_KEYS.iter().map(key_line));
    }
    lines
}

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, route: Route, scroll: &mut usize, styles: &Styles) {
    // 60% width, 80% height, clamped to 40-80 x 10-30
    let popup_width = (area.width * 60 / 100).clamp(40, 80).min(area.width);
    let popup_height = (area.height * 80 / 100).clamp(10, 30).min(area.height);
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    let inner = render_popup_block(frame, popup_area, "Help", styles);
    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let content = help_lines(route, styles);
    let max_scroll = content.len().saturating_sub(chunks[0].height as usize);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(styles.default());
    frame.render_widget(paragraph, chunks[0]);

    let footer = hint_line(&[("↑/↓", "scroll"), ("Esc", "close")], styles);
    frame.render_widget(Paragraph::new(footer).style(styles.default()), chunks[1]);
}
