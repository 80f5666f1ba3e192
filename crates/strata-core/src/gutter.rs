//! Line-number gutter metrics.
//!
//! The gutter is sized to the digit count of the current line count, in
//! font-metric units supplied by the host toolkit (the advance of one
//! monospaced digit). Recomputed whenever the line count changes.

/// Horizontal padding inside the gutter, in the same units as the digit
/// advance.
pub const PADDING: f32 = 3.0;

/// Returns the number of decimal digits needed to show the last line number.
///
/// A buffer always has at least one line, so zero is treated as one.
pub fn digit_count(line_count: usize) -> usize {
    let mut digits = 1;
    let mut max = line_count.max(1);
    while max >= 10 {
        max /= 10;
        digits += 1;
    }
    digits
}

/// Returns the smallest gutter width accommodating `line_count` lines.
///
/// `digit_advance` is the horizontal advance of one digit in the gutter
/// font. The result is monotonically non-decreasing in `line_count`.
pub fn width(line_count: usize, digit_advance: f32) -> f32 {
    PADDING + digit_advance * digit_count(line_count) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(1), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(100), 3);
        assert_eq!(digit_count(1000), 4);
    }

    #[test]
    fn test_empty_buffer_is_one_line_wide() {
        assert_eq!(width(0, 8.0), width(1, 8.0));
    }

    #[test]
    fn test_width_grows_at_powers_of_ten() {
        let advance = 8.0;
        assert_eq!(width(9, advance), width(1, advance));
        assert!(width(10, advance) > width(9, advance));
        assert!(width(100, advance) > width(99, advance));
        assert!(width(1000, advance) > width(999, advance));
    }

    #[test]
    fn test_width_is_monotonic() {
        let advance = 7.5;
        let mut last = 0.0;
        for count in 0..2000 {
            let w = width(count, advance);
            assert!(w >= last, "width shrank at line count {}", count);
            last = w;
        }
    }
}
