//! # nursery-core: Pure Cart Logic for Paradise Nursery
//!
//! This crate is the **heart** of the Paradise Nursery storefront. It holds
//! the cart state machine and the money logic as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Paradise Nursery Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Presentation (web UI / terminal shell)           │   │
//! │  │    Product Grid ──► Cart View ──► Checkout (stub)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ intents: add, +, −, delete            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ nursery-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │   money   │  │  totals   │  │  catalog  │  │   │
//! │  │   │ CartStore │  │ normalize │  │ line/cart │  │  Catalog  │  │   │
//! │  │   │ CartState │  │   Money   │  │  Summary  │  │   Item    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Cart lines, actions, state transitions, the store
//! - [`price`] - Raw price as supplied by the catalog
//! - [`money`] - Price normalization and the display `Money` type
//! - [`totals`] - Line totals, cart total, summary
//! - [`catalog`] - Catalog items and JSON loading
//! - [`validation`] - Catalog name rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Store raw, normalize on read**: the cart keeps prices as given;
//!    totals interpret them every time they are computed
//! 2. **Total transitions**: cart operations never fail
//! 3. **Exact amounts**: decimals until the display boundary, rounded once
//!
//! ## Example Usage
//!
//! ```rust
//! use nursery_core::{cart_total, line_total, CartStore, CatalogItem};
//!
//! let mut store = CartStore::new();
//! store.add(CatalogItem::new("Snake Plant", "$15"));
//! store.add(CatalogItem::new("Snake Plant", "$15"));
//!
//! let line = store.state().get("Snake Plant").unwrap();
//! assert_eq!(line.quantity, 2);
//! assert_eq!(line_total(line).to_string(), "$30.00");
//! assert_eq!(cart_total(store.state()).to_string(), "$30.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod price;
pub mod totals;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartLineItem, CartState, CartStore};
pub use catalog::{Catalog, CatalogCategory, CatalogItem};
pub use error::{CoreError, CoreResult, PriceError, ValidationError};
pub use money::{normalize, try_normalize, Money, NormalizedAmount, PriceNormalizer};
pub use price::PriceRepresentation;
pub use totals::{cart_total, line_total, summarize, CartSummary};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Marker stripped from the front of textual prices unless configured
/// otherwise.
pub const DEFAULT_CURRENCY_MARKER: char = '$';

/// Symbol used when showing amounts.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Decimal places shown for amounts.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Longest plant or category name accepted from a catalog.
pub const MAX_NAME_LENGTH: usize = 200;
