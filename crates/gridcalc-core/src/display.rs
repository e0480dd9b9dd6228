//! Boundary to whatever paints the grid.

use gridcalc_engine::engine::{CellRef, NUM_COLS, NUM_ROWS};

/// Receives every change to a cell's displayed text, including changes
/// caused by recalculation. The last update for a cell is what it shows.
pub trait DisplaySink {
    fn update_cell_display(&mut self, cell_ref: CellRef, text: &str);
}

/// One recorded display change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub cell_ref: CellRef,
    pub text: String,
}

impl DisplayUpdate {
    pub fn new(cell_ref: CellRef, text: impl Into<String>) -> Self {
        DisplayUpdate {
            cell_ref,
            text: text.into(),
        }
    }
}

/// Discards updates, for hosts that read display values on demand.
impl DisplaySink for () {
    fn update_cell_display(&mut self, _cell_ref: CellRef, _text: &str) {}
}

/// Records updates in order.
impl DisplaySink for Vec<DisplayUpdate> {
    fn update_cell_display(&mut self, cell_ref: CellRef, text: &str) {
        self.push(DisplayUpdate::new(cell_ref, text));
    }
}

/// Headless renderer: the last text reported for every cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayGrid {
    cells: Vec<String>,
}

impl DisplayGrid {
    pub fn new() -> Self {
        DisplayGrid {
            cells: vec![String::new(); NUM_ROWS * NUM_COLS],
        }
    }

    /// Text shown for a cell; empty outside the grid.
    pub fn text(&self, cell_ref: CellRef) -> &str {
        if cell_ref.row < NUM_ROWS && cell_ref.col < NUM_COLS {
            &self.cells[cell_ref.row * NUM_COLS + cell_ref.col]
        } else {
            ""
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(String::is_empty)
    }
}

impl Default for DisplayGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for DisplayGrid {
    fn update_cell_display(&mut self, cell_ref: CellRef, text: &str) {
        if cell_ref.row < NUM_ROWS && cell_ref.col < NUM_COLS {
            self.cells[cell_ref.row * NUM_COLS + cell_ref.col] = text.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Sheet;

    #[test]
    fn test_display_grid_tracks_last_update() {
        let mut sheet = Sheet::new();
        let mut screen = DisplayGrid::new();
        assert!(screen.is_empty());

        let a1 = CellRef::new(0, 0);
        let b1 = CellRef::new(0, 1);
        sheet.set_cell_value(a1, "5", &mut screen).unwrap();
        sheet.set_cell_value(b1, "=A1+1", &mut screen).unwrap();
        sheet.set_cell_value(a1, "10", &mut screen).unwrap();

        assert_eq!(screen.text(a1), "10");
        assert_eq!(screen.text(b1), "11.00");
        assert_eq!(screen.text(CellRef::new(NUM_ROWS, 0)), "");
    }

    #[test]
    fn test_rejected_edit_leaves_display_alone() {
        let mut sheet = Sheet::new();
        let mut screen = DisplayGrid::new();
        let a1 = CellRef::new(0, 0);
        sheet.set_cell_value(a1, "7", &mut screen).unwrap();
        assert!(sheet.set_cell_value(a1, "=A1", &mut screen).is_err());
        assert_eq!(screen.text(a1), "7");
    }
}
