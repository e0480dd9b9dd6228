//! Rendering the sheet for output.

mod md;

pub use md::write_markdown;
