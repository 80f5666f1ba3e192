//! Layout metrics shared by the editor, the gutter, and the highlight layer.
//!
//! All three paint rows of the same monospace font, so they must agree on
//! row height and digit width or the gutter drifts out of line with the text.

/// Width of a monospace digit relative to the font size.
///
/// iced's bundled monospace font (Fira Mono) has an advance of 0.6em for
/// every glyph, digits included.
const MONO_ADVANCE_RATIO: f32 = 0.6;

/// Padding inside the editor and gutter, in logical pixels.
pub const EDITOR_PADDING: f32 = 8.0;

/// Font-derived layout metrics.
#[derive(Debug, Clone, Copy)]
pub struct Metrics {
    pub font_size: f32,
    pub line_height: f32,
}

impl Metrics {
    pub fn new(font_size: f32, line_height: f32) -> Self {
        Self {
            font_size,
            line_height,
        }
    }

    /// Height of one text row in logical pixels.
    pub fn row_height(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// Horizontal advance of one digit in logical pixels.
    pub fn digit_advance(&self) -> f32 {
        self.font_size * MONO_ADVANCE_RATIO
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(14.0, 1.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_height_scales_with_font_size() {
        let small = Metrics::new(12.0, 1.3);
        let large = Metrics::new(24.0, 1.3);
        assert!(large.row_height() > small.row_height());
        assert_eq!(large.row_height(), 24.0 * 1.3);
    }

    #[test]
    fn test_digit_advance_is_positive() {
        assert!(Metrics::default().digit_advance() > 0.0);
    }
}
