//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::runtime::Runtime;
use tracing::{debug, info};

use crate::config::Config;
use crate::theme::Theme;

use super::event::{Event, EventHandler};
use super::fetch::{Fetcher, Sources};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    state: AppState,
    sources: Sources,
    runtime: Runtime,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    /// Creates the app for `config`, fetching through `sources`.
    pub fn new(config: &Config, sources: Sources, theme: Theme) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("orderdesk-fetch")
            .enable_all()
            .build()?;
        Ok(Self {
            state: AppState::new(config.initial_route, config.page_size, theme),
            sources,
            runtime,
            tick_rate: config.tick_rate,
            should_quit: false,
        })
    }

    /// Runs the TUI application until the user quits.
    pub fn run(mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(self.tick_rate);
        let fetcher = Fetcher::new(
            self.runtime.handle().clone(),
            self.sources.clone(),
            events.sender(),
        );

        info!(route = self.state.route.path(), "starting");
        if let Some(command) = self.state.start() {
            fetcher.dispatch(command);
        }

        let result = self.event_loop(&mut terminal, &events, &fetcher);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &EventHandler,
        fetcher: &Fetcher,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) | Ok(Event::Resize) => {}
                Ok(Event::Key(key)) => {
                    // Windows reports releases as well.
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match handle_key(&mut self.state, key) {
                        KeyAction::Quit => self.should_quit = true,
                        KeyAction::Fetch(command) => fetcher.dispatch(command),
                        KeyAction::None => {}
                    }
                }
                Ok(Event::Customers(ticket, outcome)) => {
                    let completion = self.state.apply_customers(ticket, outcome);
                    debug!(?completion, "customers fetch finished");
                }
                Ok(Event::Orders(ticket, outcome)) => {
                    let completion = self.state.apply_orders(ticket, outcome);
                    debug!(?completion, "orders fetch finished");
                }
                Ok(Event::CustomerOrders(customer_id, outcome)) => {
                    self.state.apply_customer_orders(&customer_id, outcome);
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quit requested");
                return Ok(());
            }
        }
    }
}
