//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::route::Route;

use super::navigable::NavigableTable;
use super::state::{AppState, FetchCommand, InputMode, PopupState, ViewIntent};

/// Rows moved by PgUp/PgDn.
const PAGE_STEP: usize = 10;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Run a fetch and post its result back.
    Fetch(FetchCommand),
}

impl From<Option<FetchCommand>> for KeyAction {
    fn from(command: Option<FetchCommand>) -> Self {
        command.map(KeyAction::Fetch).unwrap_or(KeyAction::None)
    }
}

/// Navigation action for unified scroll/selection dispatch.
enum NavAction {
    Up,
    Down,
    PageUp(usize),
    PageDown(usize),
    Home,
    End,
}

/// Dispatches a navigation action to the help scroll or the active table cursor.
fn dispatch_navigation(state: &mut AppState, action: NavAction) {
    if let PopupState::Help { scroll } = &mut state.popup {
        match action {
            NavAction::Up => *scroll = scroll.saturating_sub(1),
            NavAction::Down => *scroll = scroll.saturating_add(1),
            NavAction::PageUp(n) => *scroll = scroll.saturating_sub(n),
            NavAction::PageDown(n) => *scroll = scroll.saturating_add(n),
            NavAction::Home => *scroll = 0,
            NavAction::End => {}
        }
        return;
    }

    let nav: &mut dyn NavigableTable = state.active_cursor_mut();
    match action {
        NavAction::Up => nav.select_up(),
        NavAction::Down => nav.select_down(),
        NavAction::PageUp(n) => nav.page_up(n),
        NavAction::PageDown(n) => nav.page_down(n),
        NavAction::Home => nav.home(),
        NavAction::End => nav.end(),
    }
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if matches!(state.popup, PopupState::QuitConfirm) {
        return handle_quit_confirm(state, key);
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    match state.input_mode {
        InputMode::Filter => handle_filter_mode(state, key),
        InputMode::Normal => match state.popup {
            PopupState::CustomerDetail => handle_detail_popup(state, key),
            PopupState::Help { .. } => handle_help_popup(state, key),
            _ => handle_normal_mode(state, key),
        },
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Route switching is blocked while a popup is open.
fn is_route_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('1') | KeyCode::Char('2')
    )
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    state.status_message = None;
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }

        // Routes
        KeyCode::Tab => state.switch_route(state.route.next()).into(),
        KeyCode::BackTab => state.switch_route(state.route.prev()).into(),
        KeyCode::Char('1') => state.switch_route(Route::Customers).into(),
        KeyCode::Char('2') => state.switch_route(Route::Orders).into(),

        // Row cursor
        KeyCode::Up | KeyCode::Char('k') => {
            dispatch_navigation(state, NavAction::Up);
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            dispatch_navigation(state, NavAction::Down);
            KeyAction::None
        }
        KeyCode::PageUp => {
            dispatch_navigation(state, NavAction::PageUp(PAGE_STEP));
            KeyAction::None
        }
        KeyCode::PageDown => {
            dispatch_navigation(state, NavAction::PageDown(PAGE_STEP));
            KeyAction::None
        }
        KeyCode::Home => {
            dispatch_navigation(state, NavAction::Home);
            KeyAction::None
        }
        KeyCode::End => {
            dispatch_navigation(state, NavAction::End);
            KeyAction::None
        }

        // Paging
        KeyCode::Right | KeyCode::Char('n') => state.apply_intent(ViewIntent::NextPage).into(),
        KeyCode::Left | KeyCode::Char('p') => state.apply_intent(ViewIntent::PrevPage).into(),
        KeyCode::Char('+') => state.apply_intent(ViewIntent::LargerPageSize).into(),
        KeyCode::Char('-') => state.apply_intent(ViewIntent::SmallerPageSize).into(),

        // Sorting
        KeyCode::Char('s') => state.apply_intent(ViewIntent::SortNextColumn).into(),
        KeyCode::Char('r') => state.apply_intent(ViewIntent::ReverseSort).into(),

        KeyCode::Char('R') => state.apply_intent(ViewIntent::Retry).into(),

        KeyCode::Char('/') => {
            if state.route == Route::Customers {
                state.input_mode = InputMode::Filter;
                state.filter_input = state.customers.query().filter_text.clone();
            } else {
                state.status_message = Some("Orders cannot be filtered".to_string());
            }
            KeyAction::None
        }

        KeyCode::Enter => state.open_customer_detail().into(),

        KeyCode::Char('t') | KeyCode::Char('T') => {
            state.theme.toggle();
            KeyAction::None
        }

        KeyCode::Char('?') | KeyCode::F(1) => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

/// Keys while the customer detail popup is open. Paging is local.
fn handle_detail_popup(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if is_route_key(key.code) {
        state.status_message = Some("Close popup (Esc) before switching routes".to_string());
        return KeyAction::None;
    }
    state.status_message = None;
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.close_popup();
            KeyAction::None
        }
        KeyCode::Right | KeyCode::Char('n') => {
            if let Some(detail) = state.detail.as_mut() {
                detail.next_page();
            }
            KeyAction::None
        }
        KeyCode::Left | KeyCode::Char('p') => {
            if let Some(detail) = state.detail.as_mut() {
                detail.prev_page();
            }
            KeyAction::None
        }
        KeyCode::Char('R') => match state.detail.as_mut() {
            Some(detail) => KeyAction::Fetch(FetchCommand::CustomerOrders(detail.retry())),
            None => KeyAction::None,
        },
        KeyCode::Char('t') | KeyCode::Char('T') => {
            state.theme.toggle();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help_popup(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if is_route_key(key.code) {
        state.status_message = Some("Close popup (Esc) before switching routes".to_string());
        return KeyAction::None;
    }
    state.status_message = None;
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1) => {
            state.close_popup();
        }
        KeyCode::Up | KeyCode::Char('k') => dispatch_navigation(state, NavAction::Up),
        KeyCode::Down | KeyCode::Char('j') => dispatch_navigation(state, NavAction::Down),
        KeyCode::PageUp => dispatch_navigation(state, NavAction::PageUp(PAGE_STEP)),
        KeyCode::PageDown => dispatch_navigation(state, NavAction::PageDown(PAGE_STEP)),
        KeyCode::Home => dispatch_navigation(state, NavAction::Home),
        KeyCode::End => dispatch_navigation(state, NavAction::End),
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in filter mode. The filter is sent on Enter.
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.filter_input = state.customers.query().filter_text.clone();
            KeyAction::None
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
            state.commit_filter().into()
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            KeyAction::None
        }
        KeyCode::Char(c) => {
            state.filter_input.push(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}
