//! # Cart Session
//!
//! Holds the one cart store the shell reads and mutates.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` so the session can be cloned
//! into anything that needs the cart while only one writer runs at a time.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Session Operations                              │
//! │                                                                         │
//! │  Shell Input              Command                 Store Call            │
//! │  ───────────              ───────                 ──────────            │
//! │                                                                         │
//! │  add Snake Plant ───────► add_to_cart() ────────► store.add(item)      │
//! │                                                                         │
//! │  inc / dec ─────────────► increment_item() ─────► store.increment()    │
//! │                           decrement_item() ─────► store.decrement()    │
//! │                                                                         │
//! │  set Fern 4 ────────────► update_cart_item() ───► store.set_quantity() │
//! │                                                                         │
//! │  remove Fern ───────────► remove_from_cart() ───► store.remove()       │
//! │                                                                         │
//! │  cart ──────────────────► get_cart() ───────────► (read only)          │
//! │                                                                         │
//! │  Every write bumps `version`, so views can tell when to re-render.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use nursery_core::{CartState, CartStore};

#[derive(Debug, Default)]
struct SessionInner {
    store: CartStore,
    version: u64,
}

/// Shared cart store plus a change counter.
#[derive(Debug, Clone, Default)]
pub struct CartSession {
    inner: Arc<Mutex<SessionInner>>,
}

impl CartSession {
    /// Creates a session with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let badge = session.with_cart(|cart| cart.total_quantity());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        let inner = self.lock();
        f(inner.store.state())
    }

    /// Executes a function with write access to the store.
    ///
    /// The version advances once per call, whether or not the cart changed.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_cart_mut(|store| store.add(item));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut inner = self.lock();
        inner.version = inner.version.wrapping_add(1);
        f(&mut inner.store)
    }

    /// Number of writes so far.
    pub fn version(&self) -> u64 {
        self.lock().version
    }

    // A panic inside a closure cannot leave the store half-updated,
    // because transitions replace the whole state.
    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
