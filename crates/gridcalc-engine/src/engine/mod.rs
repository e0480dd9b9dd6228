//! Spreadsheet engine API.
//!
//! This module provides the core computation engine for the spreadsheet:
//!
//! - [`Cell`], [`CellContent`], [`CellKind`], [`Grid`] - Data structures for cell storage
//! - [`CellRef`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`tokenize`] - Lex the additive formula dialect into typed tokens
//! - [`evaluate`] - Validate and sum a formula against the grid
//! - [`register_dependencies`], [`retract_dependencies`] - Maintain reverse edges
//! - [`would_cycle`] - Circular dependency detection
//! - [`format_number`] - Format values for display

mod cell;
mod cell_ref;
mod cycle;
mod deps;
mod error;
mod eval;
mod format;
mod lexer;

pub use cell::{Cell, CellContent, CellInput, CellKind, Grid, NUM_COLS, NUM_ROWS};
pub use cell_ref::CellRef;
pub use cycle::{dependency_path, would_cycle};
pub use deps::{register_dependencies, retract_dependencies};
pub use error::{FormulaError, InvalidFormulaReason};
pub use eval::{Evaluation, evaluate, recompute};
pub use format::{DEFAULT_PRECISION, MAX_PRECISION, format_number};
pub use lexer::{FORMULA_MARKER, Token, tokenize};
