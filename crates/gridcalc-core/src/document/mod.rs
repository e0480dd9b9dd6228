//! Sheet state and logic (UI-agnostic).

mod ops;
mod recalc;
mod state;

pub use state::Sheet;
