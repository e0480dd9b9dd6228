//! Circular dependency detection for formula cells.
//!
//! When a formula in `current` is about to reference `precedent`, the new edge
//! closes a loop if `precedent` already depends on `current`, directly or
//! through a chain of other formulas (e.g., A1 references B1, B1 references
//! C1, and C1 is now being given a formula that references A1).
//!
//! Edges are stored in reverse (each cell lists its dependents), so the check
//! walks `dependents` outward from `current` looking for `precedent`.

use std::collections::HashSet;

use super::{CellRef, Grid};

/// Returns true if `current` referencing `precedent` would form a cycle.
pub fn would_cycle(grid: &Grid, precedent: CellRef, current: CellRef) -> bool {
    dependency_path(grid, current, precedent).is_some()
}

/// Find a chain of dependents leading from `from` to `to`.
/// Returns the path including both ends, or None if `to` is unreachable.
pub fn dependency_path(grid: &Grid, from: CellRef, to: CellRef) -> Option<Vec<CellRef>> {
    let mut visited = HashSet::new();
    let mut path = Vec::new();

    if path_dfs(grid, from, to, &mut visited, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn path_dfs(
    grid: &Grid,
    current: CellRef,
    target: CellRef,
    visited: &mut HashSet<CellRef>,
    path: &mut Vec<CellRef>,
) -> bool {
    if !visited.insert(current) {
        return false;
    }
    path.push(current);

    let Some(cell) = grid.get(current) else {
        path.pop();
        return false;
    };

    for &dependent in &cell.dependents {
        if dependent == target {
            path.push(dependent);
            return true;
        }
        if path_dfs(grid, dependent, target, visited, path) {
            return true;
        }
    }

    path.pop();
    false
}
