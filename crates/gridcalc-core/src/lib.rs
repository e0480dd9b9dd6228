//! gridcalc-core - UI-agnostic sheet model.

pub mod display;
pub mod document;
pub mod error;
pub mod storage;

pub use display::{DisplayGrid, DisplaySink, DisplayUpdate};
pub use document::Sheet;
pub use error::{ErrorKind, GridcalcError, Result};

pub use gridcalc_engine::engine::{CellKind, CellRef, NUM_COLS, NUM_ROWS};
