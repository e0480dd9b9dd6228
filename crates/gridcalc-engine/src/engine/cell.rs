//! Cell data structures for the spreadsheet grid.
//!
//! This module provides the core data types for representing cells:
//! - [`CellContent`] - The classified content of a cell (text, number, or formula)
//! - [`CellKind`] - The bare tag of a cell's content
//! - [`CellInput`] - User input classified before it is stored
//! - [`Cell`] - A cell with content and its reverse dependencies
//! - [`Grid`] - Fixed-size, pre-allocated storage for every cell

use std::collections::BTreeSet;

use super::cell_ref::CellRef;
use super::lexer::FORMULA_MARKER;

/// Number of rows in the grid.
pub const NUM_ROWS: usize = 10;
/// Number of columns in the grid (`A`..=`G`).
pub const NUM_COLS: usize = 7;

/// The tag of a cell's content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Number,
    Formula,
}

/// The content stored in a cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellContent {
    Text(String),
    Number(f64),
    /// `raw` is the formula exactly as typed, including the leading `=`.
    Formula { raw: String, value: f64 },
}

/// User input classified by what it would turn a cell into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellInput<'a> {
    /// Input starting with `=`, kept verbatim.
    Formula(&'a str),
    Number(f64),
    Text(&'a str),
}

impl<'a> CellInput<'a> {
    /// Classify user input.
    /// - Starts with '=' -> Formula (marker kept)
    /// - Valid number, ignoring surrounding whitespace -> Number
    /// - Otherwise, including empty input -> Text
    pub fn parse(input: &'a str) -> CellInput<'a> {
        if input.starts_with(FORMULA_MARKER) {
            return CellInput::Formula(input);
        }

        if let Ok(n) = input.trim().parse::<f64>() {
            return CellInput::Number(n);
        }

        CellInput::Text(input)
    }
}

/// A cell in the spreadsheet grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub contents: CellContent,
    /// Cells whose current formula references this one.
    pub dependents: BTreeSet<CellRef>,
}

impl Cell {
    pub fn new_empty() -> Cell {
        Cell::new_text("")
    }

    pub fn new_text(text: &str) -> Cell {
        Cell {
            contents: CellContent::Text(text.to_string()),
            dependents: BTreeSet::new(),
        }
    }

    pub fn new_number(n: f64) -> Cell {
        Cell {
            contents: CellContent::Number(n),
            dependents: BTreeSet::new(),
        }
    }

    pub fn kind(&self) -> CellKind {
        match self.contents {
            CellContent::Text(_) => CellKind::Text,
            CellContent::Number(_) => CellKind::Number,
            CellContent::Formula { .. } => CellKind::Formula,
        }
    }

    /// Numeric value of a number or formula cell.
    pub fn value(&self) -> Option<f64> {
        match &self.contents {
            CellContent::Text(_) => None,
            CellContent::Number(n) => Some(*n),
            CellContent::Formula { value, .. } => Some(*value),
        }
    }

    /// Text as last entered, for text and formula cells.
    pub fn raw(&self) -> Option<&str> {
        match &self.contents {
            CellContent::Text(s) => Some(s),
            CellContent::Number(_) => None,
            CellContent::Formula { raw, .. } => Some(raw),
        }
    }

    /// Only number and formula cells may be referenced by formulas.
    pub fn is_numeric(&self) -> bool {
        !matches!(self.contents, CellContent::Text(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(&self.contents, CellContent::Text(s) if s.is_empty())
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new_empty()
    }
}

/// Fixed-size grid storage, row-major.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every cell is empty text with no dependents.
    pub fn new() -> Grid {
        Grid {
            cells: vec![Cell::new_empty(); NUM_ROWS * NUM_COLS],
        }
    }

    pub fn contains(&self, cell_ref: CellRef) -> bool {
        cell_ref.row < NUM_ROWS && cell_ref.col < NUM_COLS
    }

    pub fn get(&self, cell_ref: CellRef) -> Option<&Cell> {
        if self.contains(cell_ref) {
            self.cells.get(cell_ref.row * NUM_COLS + cell_ref.col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, cell_ref: CellRef) -> Option<&mut Cell> {
        if self.contains(cell_ref) {
            self.cells.get_mut(cell_ref.row * NUM_COLS + cell_ref.col)
        } else {
            None
        }
    }

    /// Iterate all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (CellRef::new(i / NUM_COLS, i % NUM_COLS), cell))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty_text() {
        let grid = Grid::new();
        assert_eq!(grid.iter().count(), NUM_ROWS * NUM_COLS);
        for (_, cell) in grid.iter() {
            assert_eq!(cell.kind(), CellKind::Text);
            assert!(cell.is_empty());
            assert!(cell.dependents.is_empty());
        }
    }

    #[test]
    fn test_grid_bounds() {
        let mut grid = Grid::new();
        assert!(grid.get(CellRef::new(NUM_ROWS - 1, NUM_COLS - 1)).is_some());
        assert!(grid.get(CellRef::new(NUM_ROWS, 0)).is_none());
        assert!(grid.get_mut(CellRef::new(0, NUM_COLS)).is_none());
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = Grid::new();
        let refs: Vec<CellRef> = grid.iter().map(|(r, _)| r).take(NUM_COLS + 1).collect();
        assert_eq!(refs[1], CellRef::new(0, 1));
        assert_eq!(refs[NUM_COLS], CellRef::new(1, 0));
    }

    #[test]
    fn test_classify_input() {
        assert_eq!(CellInput::parse("=A1+2"), CellInput::Formula("=A1+2"));
        assert_eq!(CellInput::parse("42"), CellInput::Number(42.0));
        assert_eq!(CellInput::parse(" -1.5 "), CellInput::Number(-1.5));
        assert_eq!(CellInput::parse("1e3"), CellInput::Number(1000.0));
        assert_eq!(CellInput::parse("hello"), CellInput::Text("hello"));
        assert_eq!(CellInput::parse(" =A1"), CellInput::Text(" =A1"));
        assert_eq!(CellInput::parse(""), CellInput::Text(""));
    }

    #[test]
    fn test_kind_determines_raw_and_value() {
        let number = Cell::new_number(2.5);
        assert_eq!(number.value(), Some(2.5));
        assert_eq!(number.raw(), None);

        let text = Cell::new_text("hi");
        assert_eq!(text.value(), None);
        assert_eq!(text.raw(), Some("hi"));
        assert!(!text.is_numeric());

        let formula = Cell {
            contents: CellContent::Formula {
                raw: "=1+2".to_string(),
                value: 3.0,
            },
            dependents: Default::default(),
        };
        assert_eq!(formula.kind(), CellKind::Formula);
        assert_eq!(formula.value(), Some(3.0));
        assert_eq!(formula.raw(), Some("=1+2"));
    }
}
