//! Lexer for the additive formula dialect.
//!
//! A formula is an optional leading `=` followed by terms separated by `+`.
//! Each term is either a numeric literal or a two-character cell reference.
//! There are no other operators, no parentheses and no functions.
//!
//! Whitespace around a term is ignored and empty terms (`=A1++2`) are skipped.

use super::cell_ref::CellRef;
use super::error::FormulaError;

/// Leading marker that turns cell input into a formula.
pub const FORMULA_MARKER: char = '=';

/// A single term of a formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Reference(CellRef),
}

fn terms(formula: &str) -> impl Iterator<Item = &str> {
    let body = formula.strip_prefix(FORMULA_MARKER).unwrap_or(formula);
    body.split('+')
        .map(|term| term.trim_matches(|c: char| c.is_ascii_whitespace()))
        .filter(|term| !term.is_empty())
}

fn lex_term(term: &str) -> Result<Token, FormulaError> {
    if let Ok(n) = term.parse::<f64>() {
        return Ok(Token::Number(n));
    }
    CellRef::parse_reference(term).map(Token::Reference)
}

/// Split a formula into typed tokens, failing on the first malformed term.
pub fn tokenize(formula: &str) -> Result<Vec<Token>, FormulaError> {
    terms(formula).map(lex_term).collect()
}

/// Cell references of a formula that was accepted earlier.
///
/// Terms that no longer lex as references are skipped instead of reported.
pub fn references(formula: &str) -> Vec<CellRef> {
    terms(formula)
        .filter_map(|term| match lex_term(term) {
            Ok(Token::Reference(cell_ref)) => Some(cell_ref),
            _ => None,
        })
        .collect()
}
