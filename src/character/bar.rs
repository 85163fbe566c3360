//! Dot-bar rendering for character stats.

/// Glyph for a filled point.
pub const FILLED_GLYPH: char = '●';
/// Glyph for an unspent point.
pub const EMPTY_GLYPH: char = '○';
/// Number of glyphs in every bar.
pub const BAR_WIDTH: usize = 10;

/// Render `value` filled glyphs followed by empty glyphs up to [`BAR_WIDTH`].
///
/// Values above the width are clamped so the bar never grows past it.
pub fn render_bar(value: u8) -> String {
    let filled = usize::from(value).min(BAR_WIDTH);
    let mut bar = String::with_capacity(BAR_WIDTH * FILLED_GLYPH.len_utf8());
    bar.extend(std::iter::repeat(FILLED_GLYPH).take(filled));
    bar.extend(std::iter::repeat(EMPTY_GLYPH).take(BAR_WIDTH - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bar_counts() {
        assert_eq!(render_bar(2), "●●○○○○○○○○");
        assert_eq!(render_bar(4), "●●●●○○○○○○");
    }

    #[test]
    fn test_render_bar_is_fixed_width() {
        for value in 0..=12u8 {
            assert_eq!(render_bar(value).chars().count(), BAR_WIDTH);
        }
    }

    #[test]
    fn test_render_bar_empty_and_full() {
        assert_eq!(render_bar(0), "○".repeat(BAR_WIDTH));
        assert_eq!(render_bar(10), "●".repeat(BAR_WIDTH));
    }
}
