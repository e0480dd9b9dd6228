//! Dependency bookkeeping between formula cells.
//!
//! Edges are stored in reverse: when `B1 = A1 + 1`, `B1` is recorded in
//! `A1`'s `dependents`. There is no forward index, so removing a formula's
//! edges re-derives its references by re-lexing the stored formula text.

use log::trace;

use super::lexer::references;
use super::{CellRef, Grid};

/// Record `owner` as a dependent of every precedent.
///
/// Precedents come from a successful [`super::evaluate`], so each one is an
/// in-grid number or formula cell. A cell referenced twice is recorded once.
pub fn register_dependencies(grid: &mut Grid, precedents: &[CellRef], owner: CellRef) {
    for &precedent in precedents {
        if let Some(cell) = grid.get_mut(precedent)
            && cell.is_numeric()
            && cell.dependents.insert(owner)
        {
            trace!("{owner} now depends on {precedent}");
        }
    }
}

/// Remove the edges created by `formula`, previously accepted into `owner`.
///
/// No validation is done: the formula was checked when it was entered.
pub fn retract_dependencies(grid: &mut Grid, formula: &str, owner: CellRef) {
    for precedent in references(formula) {
        if let Some(cell) = grid.get_mut(precedent)
            && cell.is_numeric()
            && cell.dependents.remove(&owner)
        {
            trace!("{owner} no longer depends on {precedent}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Cell;

    fn numbers(grid: &mut Grid, refs: &[CellRef]) {
        for &r in refs {
            *grid.get_mut(r).unwrap() = Cell::new_number(1.0);
        }
    }

    #[test]
    fn test_register_then_retract() {
        let (a1, b1, c1) = (CellRef::new(0, 0), CellRef::new(0, 1), CellRef::new(0, 2));
        let mut grid = Grid::new();
        numbers(&mut grid, &[a1, b1]);

        register_dependencies(&mut grid, &[a1, b1], c1);
        assert!(grid.get(a1).unwrap().dependents.contains(&c1));
        assert!(grid.get(b1).unwrap().dependents.contains(&c1));

        retract_dependencies(&mut grid, "=A1+B1+4", c1);
        assert!(grid.get(a1).unwrap().dependents.is_empty());
        assert!(grid.get(b1).unwrap().dependents.is_empty());
    }

    #[test]
    fn test_duplicate_reference_is_one_edge() {
        let (a1, b1) = (CellRef::new(0, 0), CellRef::new(0, 1));
        let mut grid = Grid::new();
        numbers(&mut grid, &[a1]);

        register_dependencies(&mut grid, &[a1, a1], b1);
        assert_eq!(grid.get(a1).unwrap().dependents.len(), 1);

        retract_dependencies(&mut grid, "=A1+A1", b1);
        assert!(grid.get(a1).unwrap().dependents.is_empty());
    }

    #[test]
    fn test_retract_only_removes_owner() {
        let (a1, b1, c1) = (CellRef::new(0, 0), CellRef::new(0, 1), CellRef::new(0, 2));
        let mut grid = Grid::new();
        numbers(&mut grid, &[a1]);
        register_dependencies(&mut grid, &[a1], b1);
        register_dependencies(&mut grid, &[a1], c1);

        retract_dependencies(&mut grid, "=A1", b1);
        let remaining: Vec<CellRef> = grid.get(a1).unwrap().dependents.iter().copied().collect();
        assert_eq!(remaining, vec![c1]);
    }

    #[test]
    fn test_retract_skips_text_and_garbage() {
        let b1 = CellRef::new(0, 1);
        let mut grid = Grid::new();
        retract_dependencies(&mut grid, "=A1+junk+Z9+3", b1);
        assert!(grid.iter().all(|(_, cell)| cell.dependents.is_empty()));
    }
}
