//! Formula evaluation.
//!
//! Evaluation is a pure function of the grid: it computes the sum and reports
//! which cells were referenced, but does not touch any `dependents` set. The
//! caller registers the edges with [`super::register_dependencies`] once the
//! whole edit has been validated, so a rejected formula never leaves a
//! partially registered edge behind.

use super::cycle::would_cycle;
use super::error::{FormulaError, InvalidFormulaReason};
use super::lexer::{Token, tokenize};
use super::{CellRef, Grid};

/// Result of evaluating a formula.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    /// Referenced cells, in formula order (repeats kept).
    pub precedents: Vec<CellRef>,
}

/// Evaluate `formula` as if it were entered into cell `at`.
pub fn evaluate(grid: &Grid, formula: &str, at: CellRef) -> Result<Evaluation, FormulaError> {
    let mut value = 0.0;
    let mut precedents = Vec::new();

    for token in tokenize(formula)? {
        match token {
            Token::Number(n) => value += n,
            Token::Reference(precedent) => {
                if precedent == at {
                    return Err(FormulaError::InvalidFormula(
                        InvalidFormulaReason::SelfReference(at),
                    ));
                }
                let cell_value = grid.get(precedent).and_then(|cell| cell.value()).ok_or(
                    FormulaError::InvalidFormula(InvalidFormulaReason::TextReference(precedent)),
                )?;
                if would_cycle(grid, precedent, at) {
                    return Err(FormulaError::CircularDependency {
                        cell: at,
                        precedent,
                    });
                }
                value += cell_value;
                precedents.push(precedent);
            }
        }
    }

    Ok(Evaluation { value, precedents })
}

/// Recompute a formula that was accepted earlier, without validation.
///
/// Used during recalculation, where the formula text and its edges are
/// unchanged and only precedent values moved.
pub fn recompute(grid: &Grid, formula: &str) -> f64 {
    tokenize(formula)
        .unwrap_or_default()
        .into_iter()
        .map(|token| match token {
            Token::Number(n) => n,
            Token::Reference(cell_ref) => grid
                .get(cell_ref)
                .and_then(|cell| cell.value())
                .unwrap_or(0.0),
        })
        .sum()
}
