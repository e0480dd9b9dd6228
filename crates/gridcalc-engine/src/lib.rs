//! gridcalc_engine - Spreadsheet engine for a small fixed grid with additive formulas.

pub mod engine;
