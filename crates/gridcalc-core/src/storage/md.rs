//! Markdown export functionality

use crate::display::DisplayGrid;
use gridcalc_engine::engine::{CellRef, NUM_COLS, NUM_ROWS};
use std::io::Write;

/// Write the displayed grid as a markdown table.
///
/// Only the bounding box of non-empty cells is written.
pub fn write_markdown<W: Write>(w: &mut W, screen: &DisplayGrid, title: &str) -> std::io::Result<()> {
    writeln!(w, "# {}", title)?;
    writeln!(w)?;

    let Some((min_row, min_col, max_row, max_col)) = find_grid_bounds(screen) else {
        writeln!(w, "*Empty spreadsheet*")?;
        return Ok(());
    };

    // Write markdown table header with column letters
    write!(w, "|   |")?;
    for col in min_col..=max_col {
        write!(w, " {} |", CellRef::col_to_letters(col))?;
    }
    writeln!(w)?;

    // Write separator row
    write!(w, "|---|")?;
    for _ in min_col..=max_col {
        write!(w, "---|")?;
    }
    writeln!(w)?;

    // Write data rows
    for row in min_row..=max_row {
        write!(w, "| {} |", row + 1)?; // 1-based row numbers
        for col in min_col..=max_col {
            let text = screen.text(CellRef::new(row, col));
            write!(w, " {} |", escape_markdown(text))?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Find the bounds of the displayed cells (min/max row/col)
fn find_grid_bounds(screen: &DisplayGrid) -> Option<(usize, usize, usize, usize)> {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for row in 0..NUM_ROWS {
        for col in 0..NUM_COLS {
            if screen.text(CellRef::new(row, col)).is_empty() {
                continue;
            }
            bounds = Some(match bounds {
                None => (row, col, row, col),
                Some((min_row, min_col, max_row, max_col)) => (
                    min_row.min(row),
                    min_col.min(col),
                    max_row.max(row),
                    max_col.max(col),
                ),
            });
        }
    }
    bounds
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::write_markdown;
    use crate::display::DisplayGrid;
    use crate::document::Sheet;
    use gridcalc_engine::engine::CellRef;
    use pretty_assertions::assert_eq;

    fn render(screen: &DisplayGrid) -> String {
        let mut out = Vec::new();
        write_markdown(&mut out, screen, "Sheet").unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_sheet() {
        assert_eq!(render(&DisplayGrid::new()), "# Sheet\n\n*Empty spreadsheet*\n");
    }

    #[test]
    fn test_bounding_box_table() {
        let mut sheet = Sheet::new();
        let mut screen = DisplayGrid::new();
        sheet.set_cell_value(CellRef::new(1, 1), "5", &mut screen).unwrap(); // B2
        sheet.set_cell_value(CellRef::new(2, 2), "=B2+1", &mut screen).unwrap(); // C3
        sheet.set_cell_value(CellRef::new(1, 2), "a|b", &mut screen).unwrap(); // C2

        assert_eq!(
            render(&screen),
            "# Sheet\n\n\
             |   | B | C |\n\
             |---|---|---|\n\
             | 2 | 5 | a\\|b |\n\
             | 3 |  | 6.00 |\n"
        );
    }
}
