//! # Paradise Nursery Shell Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        nursery (binary)                                 │
//! │                                                                         │
//! │  stdin ──► input.rs ──► commands/ ──► render.rs ──► stdout              │
//! │                            │                                            │
//! │                     CartSession / CatalogState / ShopConfig             │
//! │                            │                                            │
//! │                       nursery-core                                      │
//! │                                                                         │
//! │  logs ──► stderr                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    match nursery_shell::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("nursery: {}", err);
            ExitCode::FAILURE
        }
    }
}
