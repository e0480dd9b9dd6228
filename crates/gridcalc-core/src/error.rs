//! Error types for Gridcalc core.

use thiserror::Error;

use gridcalc_engine::engine::{CellRef, FormulaError, InvalidFormulaReason};

/// Errors that can occur when editing a sheet.
///
/// A failed edit leaves the sheet exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridcalcError {
    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error("{0} is referenced by other cells and must stay numeric")]
    DependentCellConflict(CellRef),

    #[error("Cell at row {row}, column {col} is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

/// Broad category of a [`GridcalcError`], for hosts that only need to decide
/// how to surface a rejected edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidReference,
    InvalidFormula,
    CircularDependency,
    DependentCellConflict,
    OutOfBounds,
}

impl GridcalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GridcalcError::Formula(FormulaError::InvalidReference(_)) => ErrorKind::InvalidReference,
            GridcalcError::Formula(FormulaError::InvalidFormula(_)) => ErrorKind::InvalidFormula,
            GridcalcError::Formula(FormulaError::CircularDependency { .. }) => {
                ErrorKind::CircularDependency
            }
            GridcalcError::DependentCellConflict(_) => ErrorKind::DependentCellConflict,
            GridcalcError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
        }
    }

    /// The invalid-formula reason, if this is an invalid formula.
    pub fn invalid_formula_reason(&self) -> Option<&InvalidFormulaReason> {
        match self {
            GridcalcError::Formula(FormulaError::InvalidFormula(reason)) => Some(reason),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GridcalcError>;
