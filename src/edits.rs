//! Edit scripts: one cell edit per line.
//!
//! ```text
//! # comment
//! A1 5
//! B1 =A1+1
//! C1 some text
//! B1
//! ```
//!
//! The cell name and its input are separated by the first run of whitespace.
//! A line with only a cell name clears that cell.

use anyhow::{Context, Result, bail};
use gridcalc_core::{CellRef, DisplaySink, GridcalcError, Sheet};

/// One edit to apply to a sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    Set { cell_ref: CellRef, input: String },
    Clear { cell_ref: CellRef },
}

impl Edit {
    pub fn cell_ref(&self) -> CellRef {
        match self {
            Edit::Set { cell_ref, .. } | Edit::Clear { cell_ref } => *cell_ref,
        }
    }

    pub fn apply(&self, sheet: &mut Sheet, display: &mut impl DisplaySink) -> Result<(), GridcalcError> {
        match self {
            Edit::Set { cell_ref, input } => sheet.set_cell_value(*cell_ref, input, display),
            Edit::Clear { cell_ref } => sheet.clear_cell(*cell_ref, display),
        }
    }
}

/// Parse a cell name such as `B3` (case-insensitive).
pub fn parse_cell_name(name: &str) -> Result<CellRef> {
    CellRef::from_str(name).with_context(|| format!("Invalid cell reference: {}", name))
}

/// Parse an edit script.
pub fn parse_script(content: &str) -> Result<Vec<Edit>> {
    let mut edits = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let edit = parse_line(trimmed).with_context(|| format!("line {}", idx + 1))?;
        edits.push(edit);
    }
    Ok(edits)
}

fn parse_line(line: &str) -> Result<Edit> {
    let (name, input) = match line.split_once(|c: char| c.is_whitespace()) {
        Some((name, rest)) => (name, Some(rest.trim_start())),
        None => (line, None),
    };
    if name.is_empty() {
        bail!("missing cell reference");
    }
    let cell_ref = parse_cell_name(name)?;
    Ok(match input {
        Some(input) if !input.is_empty() => Edit::Set {
            cell_ref,
            input: input.to_string(),
        },
        _ => Edit::Clear { cell_ref },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = "# totals\nA1 5\n\nb1   =A1+1\nC1 two words\nB1\n";
        let edits = parse_script(script).unwrap();
        assert_eq!(
            edits,
            vec![
                Edit::Set {
                    cell_ref: CellRef::new(0, 0),
                    input: "5".to_string()
                },
                Edit::Set {
                    cell_ref: CellRef::new(0, 1),
                    input: "=A1+1".to_string()
                },
                Edit::Set {
                    cell_ref: CellRef::new(0, 2),
                    input: "two words".to_string()
                },
                Edit::Clear {
                    cell_ref: CellRef::new(0, 1)
                },
            ]
        );
    }

    #[test]
    fn test_parse_script_reports_line() {
        let err = parse_script("A1 1\n1A 2\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2");
        assert!(format!("{:#}", err).contains("Invalid cell reference: 1A"));
    }

    #[test]
    fn test_apply_edits() {
        let mut sheet = Sheet::new();
        let edits = parse_script("A1 2\nB1 =A1+A1\n").unwrap();
        for edit in &edits {
            edit.apply(&mut sheet, &mut ()).unwrap();
        }
        assert_eq!(sheet.get_textual_value(CellRef::new(0, 1)).unwrap(), "=A1+A1");
        assert_eq!(sheet.cell(CellRef::new(0, 1)).unwrap().value(), Some(4.0));
    }
}
