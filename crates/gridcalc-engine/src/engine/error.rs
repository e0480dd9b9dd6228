//! Errors raised while lexing or evaluating a formula.

use thiserror::Error;

use super::CellRef;

/// Why a formula was rejected even though its tokens were well formed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidFormulaReason {
    #[error("reference {0} is outside the grid")]
    OutOfRange(String),

    #[error("{0} cannot reference itself")]
    SelfReference(CellRef),

    #[error("{0} holds text and cannot be summed")]
    TextReference(CellRef),
}

/// Errors that can occur while parsing or evaluating a formula.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    #[error("Invalid reference: {0:?} is neither a number nor a cell reference")]
    InvalidReference(String),

    #[error("Invalid formula: {0}")]
    InvalidFormula(InvalidFormulaReason),

    #[error("Circular dependency: {precedent} already depends on {cell}")]
    CircularDependency { cell: CellRef, precedent: CellRef },
}
