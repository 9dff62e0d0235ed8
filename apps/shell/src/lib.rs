//! # Paradise Nursery Shell
//!
//! Terminal storefront over `nursery-core`: browse plants, fill a cart, see
//! the total.
//!
//! ## Module Organization
//! ```text
//! nursery_shell/
//! ├── lib.rs          ◄─── You are here (startup & input loop)
//! ├── input.rs        ◄─── Line → Command parsing
//! ├── render.rs       ◄─── Text / JSON output
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartSession (Arc<Mutex<CartStore>>)
//! │   ├── catalog.rs  ◄─── Bundled or file catalog
//! │   └── config.rs   ◄─── ShopConfig
//! ├── commands/
//! │   ├── mod.rs      ◄─── Response, help
//! │   ├── catalog.rs  ◄─── Product grid
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── checkout.rs ◄─── Checkout stub
//! └── error.rs        ◄─── ShellError and JSON error body
//! ```

pub mod commands;
pub mod error;
pub mod input;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use commands::Response;
use error::ShellResult;
use input::Command;
use state::{CartSession, CatalogState, OutputFormat, ShopConfig};

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,nursery_shell=info";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "nursery")]
#[command(version, about = "Paradise Nursery terminal storefront")]
pub struct Cli {
    /// Config file (default: nursery.toml in the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog JSON to load instead of the bundled plants
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Print responses as JSON
    #[arg(long)]
    pub json: bool,
}

// =============================================================================
// Shop
// =============================================================================

/// Everything one shell session works with.
#[derive(Debug, Clone)]
pub struct Shop {
    pub config: ShopConfig,
    pub catalog: CatalogState,
    pub cart: CartSession,
}

impl Shop {
    /// Creates a shop with an empty cart.
    pub fn new(config: ShopConfig, catalog: CatalogState) -> Self {
        Shop {
            config,
            catalog,
            cart: CartSession::new(),
        }
    }

    /// Loads config and catalog as the arguments ask.
    ///
    /// `--catalog` wins over `catalog_path` from config; `--json` wins over
    /// the configured output format.
    pub fn open(cli: &Cli) -> ShellResult<Self> {
        let mut config = ShopConfig::load(cli.config.clone())?;
        if cli.json {
            config.output = OutputFormat::Json;
        }

        let catalog_path = cli.catalog.clone().or_else(|| config.catalog_path.clone());
        let catalog = CatalogState::load(catalog_path.as_deref())?;

        Ok(Shop::new(config, catalog))
    }

    /// Runs one command. `None` means the user asked to quit.
    pub fn execute(&self, command: Command) -> ShellResult<Option<Response>> {
        let Shop {
            config,
            catalog,
            cart,
        } = self;

        let response = match command {
            Command::Quit => return Ok(None),
            Command::Help => Response::Help(commands::help()),
            Command::Plants => Response::Catalog(commands::catalog::list_plants(catalog, cart, config)),
            Command::Cart => Response::Cart(commands::cart::get_cart(cart, config)),
            Command::Add(name) => {
                Response::Cart(commands::cart::add_to_cart(catalog, cart, config, &name)?)
            }
            Command::Increment(name) => {
                Response::Cart(commands::cart::increment_item(cart, config, &name))
            }
            Command::Decrement(name) => {
                Response::Cart(commands::cart::decrement_item(cart, config, &name))
            }
            Command::Remove(name) => {
                Response::Cart(commands::cart::remove_from_cart(cart, config, &name))
            }
            Command::Set { name, quantity } => {
                Response::Cart(commands::cart::update_cart_item(cart, config, &name, quantity))
            }
            Command::Checkout => {
                commands::checkout::checkout(cart, config)?;
                Response::Cart(commands::cart::get_cart(cart, config))
            }
        };

        Ok(Some(response))
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Parses arguments, loads the shop, and reads commands from stdin.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse arguments (clap)                                              │
/// │  2. Initialize logging to stderr                                        │
/// │  3. Load config: defaults → nursery.toml → NURSERY_* env               │
/// │  4. Load catalog: --catalog, config catalog_path, or bundled           │
/// │  5. Loop: read line → parse → execute → render                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ShellResult<()> {
    let cli = Cli::parse();
    init_tracing();

    let shop = Shop::open(&cli)?;
    info!(
        store = %shop.config.store_name,
        output = %shop.config.output,
        "Shop open"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&shop, stdin.lock(), stdout.lock())
}

/// Reads commands until `quit` or end of input.
///
/// Command errors are rendered and the loop goes on. I/O and encoding
/// errors end it.
pub fn run_loop<R, W>(shop: &Shop, mut input: R, mut out: W) -> ShellResult<()>
where
    R: BufRead,
    W: Write,
{
    let format = shop.config.output;
    render::render_banner(&mut out, format, &shop.config.store_name, &shop.config.tagline)?;

    let mut line = String::new();
    loop {
        if format == OutputFormat::Text {
            write!(out, "> ")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>().and_then(|command| shop.execute(command)) {
            Ok(Some(response)) => render::render(&mut out, format, &response)?,
            Ok(None) => break,
            Err(err) if err.is_recoverable() => {
                debug!(error = %err, "Command rejected");
                render::render_error(&mut out, format, &err)?;
            }
            Err(err) => {
                warn!(error = %err, "Command failed");
                return Err(err);
            }
        }
        out.flush()?;
    }

    info!("Goodbye");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every cart transition
/// - `RUST_LOG=nursery_core=debug` - Core events only
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Logs go to stderr so stdout carries only rendered output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
