//! orderdesk - terminal admin panel for customers and orders.
//!
//! Usage:
//!   orderdesk                          # orders table, default backend
//!   orderdesk --route /customers       # start on the customers table
//!   orderdesk --api-url http://host    # other backend
//!   RUST_LOG=orderdesk=debug orderdesk # verbose log file

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use orderdesk::api::ApiClient;
use orderdesk::config::{Config, DEFAULT_API_URL, DEFAULT_PAGE_SIZE, default_state_file};
use orderdesk::route::Route;
use orderdesk::theme::{JsonFileStore, Theme};
use orderdesk::tui::{App, Sources};

/// Terminal admin panel for the customers and orders backend.
#[derive(Parser)]
#[command(name = "orderdesk", about = "Customers and orders admin panel", version = orderdesk::VERSION)]
struct Args {
    /// Backend base URL.
    #[arg(long, default_value = DEFAULT_API_URL, env = "ORDERDESK_API_URL")]
    api_url: String,

    /// Rows per page of the customers and orders tables.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, env = "ORDERDESK_PAGE_SIZE")]
    page_size: usize,

    /// Initial route. Unknown paths open /orders.
    #[arg(long, default_value = "/orders", env = "ORDERDESK_ROUTE")]
    route: String,

    /// JSON file persisting UI state (theme).
    /// Default: $HOME/.config/orderdesk/state.json
    #[arg(long, value_name = "PATH", env = "ORDERDESK_STATE_FILE")]
    state_file: Option<PathBuf>,

    /// Log file. The terminal belongs to the UI, so logs never go to stderr.
    /// Default: <tmp>/orderdesk.log
    #[arg(long, value_name = "PATH", env = "ORDERDESK_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, default_value = "30", env = "ORDERDESK_TIMEOUT")]
    timeout: u64,

    /// UI tick interval in milliseconds.
    #[arg(long, default_value = "250")]
    tick: u64,
}

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("orderdesk=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("orderdesk.log"));
    if let Err(e) = init_logging(&log_file) {
        eprintln!("Error: cannot open log file '{}': {}", log_file.display(), e);
        std::process::exit(1);
    }

    let config = Config {
        api_url: args.api_url,
        page_size: args.page_size,
        initial_route: Route::resolve(&args.route),
        state_file: args.state_file.unwrap_or_else(default_state_file),
        request_timeout: Duration::from_secs(args.timeout),
        tick_rate: Duration::from_millis(args.tick),
    };
    let config = match config.validate() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        version = orderdesk::VERSION,
        api_url = %config.api_url,
        route = config.initial_route.path(),
        state_file = %config.state_file.display(),
        "starting orderdesk"
    );

    let client = match ApiClient::new(&config.api_url, config.request_timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error creating HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let theme = Theme::load(Box::new(JsonFileStore::new(&config.state_file)));

    let app = match App::new(&config, Sources::http(client), theme) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run() {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
