use std::collections::HashSet;

use log::trace;

use super::Sheet;
use crate::display::DisplaySink;
use gridcalc_engine::engine::{CellContent, CellRef, format_number, recompute};

impl Sheet {
    /// Recalculate every cell that depends, directly or transitively, on
    /// `changed`, and report each new value to `display`.
    ///
    /// Cells are visited in dependency order, so each one is recomputed once
    /// and only after all of its affected precedents.
    pub(crate) fn propagate(&mut self, changed: CellRef, display: &mut impl DisplaySink) {
        for cell_ref in self.recalc_order(changed) {
            let Some(cell) = self.grid.get(cell_ref) else {
                continue;
            };
            let CellContent::Formula { raw, .. } = &cell.contents else {
                continue;
            };
            let new_value = recompute(&self.grid, raw);

            if let Some(cell) = self.grid.get_mut(cell_ref)
                && let CellContent::Formula { value, .. } = &mut cell.contents
            {
                *value = new_value;
            }
            trace!("recalculated {cell_ref} = {new_value}");
            display.update_cell_display(cell_ref, &format_number(new_value, self.precision));
        }
    }

    /// Transitive dependents of `changed` in topological order, excluding
    /// `changed` itself.
    fn recalc_order(&self, changed: CellRef) -> Vec<CellRef> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.visit_dependents(changed, &mut visited, &mut order);
        // Post-order puts `changed` last.
        order.pop();
        order.reverse();
        order
    }

    fn visit_dependents(
        &self,
        current: CellRef,
        visited: &mut HashSet<CellRef>,
        order: &mut Vec<CellRef>,
    ) {
        if !visited.insert(current) {
            return;
        }
        if let Some(cell) = self.grid.get(current) {
            for &dependent in &cell.dependents {
                self.visit_dependents(dependent, visited, order);
            }
        }
        order.push(current);
    }
}
