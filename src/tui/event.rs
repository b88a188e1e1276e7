//! Event handling for the TUI.
//!
//! A separate thread polls for terminal events and timer ticks. Completed
//! fetches are posted into the same channel through [`EventHandler::sender`].

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

use crate::api::{Customer, CustomerOrder, Order};
use crate::error::ApiError;
use crate::view::{FetchTicket, Page};

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Timer tick (redraw).
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize.
    Resize,
    /// Customers page fetch finished.
    Customers(FetchTicket, Result<Page<Customer>, ApiError>),
    /// Orders page fetch finished.
    Orders(FetchTicket, Result<Page<Order>, ApiError>),
    /// Per-customer order list fetch finished.
    CustomerOrders(String, Result<Vec<CustomerOrder>, ApiError>),
}

/// Event handler that polls for terminal events in a separate thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    tx: Sender<Event>,
}

impl EventHandler {
    /// Creates a new event handler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) => Event::Key(key),
                            CrosstermEvent::Resize(..) => Event::Resize,
                            _ => continue,
                        };
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                } else if event_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    /// Sender for posting fetch completions back to the UI loop.
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
