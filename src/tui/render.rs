//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::{Block, Paragraph};

use crate::route::Route;

use super::state::{AppState, PopupState};
use super::style::Styles;
use super::widgets::{
    render_collection, render_customer_detail, render_header, render_help, render_quit_confirm,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let styles = Styles::new(state.theme_mode());
    let area = frame.area();
    frame.render_widget(Block::default().style(styles.default()), area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(4),    // Table + pager
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    render_header(frame, chunks[0], state, &styles);

    match state.route {
        Route::Customers => render_collection(
            frame,
            chunks[1],
            &state.customers,
            &mut state.customers_cursor,
            &styles,
        ),
        Route::Orders => render_collection(
            frame,
            chunks[1],
            &state.orders,
            &mut state.orders_cursor,
            &styles,
        ),
    }

    let hints = match state.route {
        Route::Customers => " ? help  / filter  Enter orders  s sort  r reverse  ←/→ page  t theme  q quit",
        Route::Orders => " ? help  s sort  r reverse  ←/→ page  +/- size  t theme  q quit",
    };
    frame.render_widget(Paragraph::new(hints).style(styles.help()), chunks[2]);

    // Popups (rendered last to overlay everything).
    let route = state.route;
    match &mut state.popup {
        PopupState::None => {}
        PopupState::Help { scroll } => render_help(frame, area, route, scroll, &styles),
        PopupState::QuitConfirm => render_quit_confirm(frame, area, &styles),
        PopupState::CustomerDetail => {
            if let Some(detail) = &state.detail {
                render_customer_detail(frame, area, detail, &styles);
            }
        }
    }
}
