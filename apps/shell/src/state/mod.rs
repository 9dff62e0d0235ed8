//! # State Module
//!
//! State the shell holds while it runs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │ CartSession  │  │  CatalogState    │  │   ShopConfig     │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  Arc<Mutex<  │  │  categories      │  │  store_name      │          │
//! │  │   CartStore  │  │  plants          │  │  currency        │          │
//! │  │  >>          │  │                  │  │  output format   │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartSession: Arc<Mutex<T>> for exclusive access                     │
//! │  • CatalogState, ShopConfig: read-only after startup                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartSession;
pub use catalog::CatalogState;
pub use config::{OutputFormat, ShopConfig, CONFIG_FILE_NAME};
