/// Decimal places used when formatting numbers for display.
pub const DEFAULT_PRECISION: usize = 2;
/// Largest precision honored; `f64` carries no more significant decimals.
pub const MAX_PRECISION: usize = 15;

/// Format a number for display with a fixed number of decimals.
///
/// Precisions above [`MAX_PRECISION`] are clamped.
pub fn format_number(n: f64, precision: usize) -> String {
    if n.is_nan() {
        "#NAN!".to_string()
    } else if n.is_infinite() {
        "#INF!".to_string()
    } else {
        format!("{:.*}", precision.min(MAX_PRECISION), n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(11.0, DEFAULT_PRECISION), "11.00");
        assert_eq!(format_number(-0.125, 1), "-0.1");
        assert_eq!(format_number(3.0, 0), "3");
        assert_eq!(format_number(f64::NAN, 2), "#NAN!");
        assert_eq!(format_number(f64::NEG_INFINITY, 2), "#INF!");
    }

    #[test]
    fn test_format_number_clamps_precision() {
        let clamped = format_number(1.5, MAX_PRECISION);
        assert_eq!(format_number(1.5, 100_000), clamped);
        assert_eq!(format_number(1.5, usize::MAX), clamped);
        assert_eq!(clamped.len(), "1.".len() + MAX_PRECISION);
    }
}
