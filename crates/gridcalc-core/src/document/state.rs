use gridcalc_engine::engine::{Cell, CellRef, DEFAULT_PRECISION, Grid, MAX_PRECISION};

use crate::error::{GridcalcError, Result};

/// UI-agnostic state for one spreadsheet.
///
/// Owns every cell and every dependency edge. All edits go through
/// [`Sheet::set_cell_value`] and [`Sheet::clear_cell`], which either apply
/// completely (including recalculation of dependents) or not at all.
#[derive(Clone, Debug)]
pub struct Sheet {
    /// The fixed-size cell grid
    pub(crate) grid: Grid,
    /// Decimal places used when a number is formatted for display
    pub(crate) precision: usize,
}

impl Sheet {
    /// Create a sheet where every cell is empty.
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }

    /// Create an empty sheet that formats numbers with `precision` decimals,
    /// at most [`MAX_PRECISION`].
    pub fn with_precision(precision: usize) -> Self {
        Sheet {
            grid: Grid::new(),
            precision: precision.min(MAX_PRECISION),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Look up a cell, or `None` outside the grid.
    pub fn cell(&self, cell_ref: CellRef) -> Option<&Cell> {
        self.grid.get(cell_ref)
    }

    pub(crate) fn checked_cell(&self, cell_ref: CellRef) -> Result<&Cell> {
        self.grid.get(cell_ref).ok_or(GridcalcError::OutOfBounds {
            row: cell_ref.row,
            col: cell_ref.col,
        })
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}
