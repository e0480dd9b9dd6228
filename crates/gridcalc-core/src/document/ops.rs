use log::debug;

use super::Sheet;
use crate::display::DisplaySink;
use crate::error::{GridcalcError, Result};
use gridcalc_engine::engine::{
    CellContent, CellInput, CellRef, evaluate, format_number, register_dependencies,
    retract_dependencies,
};

impl Sheet {
    /// Set cell contents from input text.
    ///
    /// Input starting with `=` becomes a formula, input that parses as a
    /// number becomes a number, anything else is stored as text. Every cell
    /// that depends on this one is recalculated and reported to `display`.
    ///
    /// On error nothing is changed and nothing is reported.
    pub fn set_cell_value(
        &mut self,
        cell_ref: CellRef,
        input: &str,
        display: &mut impl DisplaySink,
    ) -> Result<()> {
        let cell = self.checked_cell(cell_ref)?;

        // Validate everything before the first mutation.
        let (contents, precedents, shown) = match CellInput::parse(input) {
            CellInput::Formula(raw) => {
                let evaluation = evaluate(&self.grid, raw, cell_ref).inspect_err(|e| {
                    debug!("rejected {cell_ref} = {raw:?}: {e}");
                })?;
                let shown = format_number(evaluation.value, self.precision);
                let contents = CellContent::Formula {
                    raw: raw.to_string(),
                    value: evaluation.value,
                };
                (contents, evaluation.precedents, shown)
            }
            CellInput::Number(n) => {
                (CellContent::Number(n), Vec::new(), input.trim().to_string())
            }
            CellInput::Text(text) => {
                if !cell.dependents.is_empty() {
                    debug!("rejected {cell_ref} = {text:?}: cell has dependents");
                    return Err(GridcalcError::DependentCellConflict(cell_ref));
                }
                (CellContent::Text(text.to_string()), Vec::new(), input.to_string())
            }
        };
        let numeric = !matches!(contents, CellContent::Text(_));

        self.replace_contents(cell_ref, contents);
        register_dependencies(&mut self.grid, &precedents, cell_ref);
        debug!("set {cell_ref} = {input:?}");

        if numeric {
            self.propagate(cell_ref, display);
        }
        display.update_cell_display(cell_ref, &shown);
        Ok(())
    }

    /// Reset a cell to empty text.
    ///
    /// Fails if other formulas reference the cell, since an empty cell is
    /// text and text cannot be summed.
    pub fn clear_cell(&mut self, cell_ref: CellRef, display: &mut impl DisplaySink) -> Result<()> {
        let cell = self.checked_cell(cell_ref)?;
        if !cell.dependents.is_empty() {
            debug!("rejected clear of {cell_ref}: cell has dependents");
            return Err(GridcalcError::DependentCellConflict(cell_ref));
        }

        self.replace_contents(cell_ref, CellContent::Text(String::new()));
        debug!("cleared {cell_ref}");
        display.update_cell_display(cell_ref, "");
        Ok(())
    }

    /// The authoritative content of a cell, for an edit field.
    ///
    /// Text and formulas come back exactly as entered (a formula, not its
    /// result); numbers are formatted with the sheet precision.
    pub fn get_textual_value(&self, cell_ref: CellRef) -> Result<String> {
        let cell = self.checked_cell(cell_ref)?;
        Ok(match &cell.contents {
            CellContent::Text(text) => text.clone(),
            CellContent::Number(n) => format_number(*n, self.precision),
            CellContent::Formula { raw, .. } => raw.clone(),
        })
    }

    /// Swap in new contents, dropping the edges of the formula being replaced.
    /// The cell keeps its own `dependents`.
    fn replace_contents(&mut self, cell_ref: CellRef, contents: CellContent) {
        let Some(cell) = self.grid.get_mut(cell_ref) else {
            return;
        };
        let old = std::mem::replace(&mut cell.contents, contents);
        if let CellContent::Formula { raw, .. } = old {
            retract_dependencies(&mut self.grid, &raw, cell_ref);
        }
    }
}
