//! Scroll position shared by the editor's three layers

/// One logical viewport for the editable surface, the highlight layer and
/// the gutter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Vertical scroll offset in pixels
    pub scroll_top: u32,
    /// Horizontal scroll offset in pixels
    pub scroll_left: u32,
}

impl Viewport {
    pub fn new(scroll_top: u32, scroll_left: u32) -> Self {
        Self {
            scroll_top,
            scroll_left,
        }
    }

    /// Offset applied to the gutter, which only follows vertical scrolling
    pub fn gutter_offset(&self) -> Viewport {
        Viewport::new(self.scroll_top, 0)
    }
}

/// 1-based line numbers for every line of `text`, counting a trailing empty
/// line after a final newline.
pub fn gutter_lines(text: &str) -> Vec<usize> {
    (1..=text.split('\n').count()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gutter_counts_trailing_line() {
        assert_eq!(gutter_lines(""), vec![1]);
        assert_eq!(gutter_lines("a"), vec![1]);
        assert_eq!(gutter_lines("a\n"), vec![1, 2]);
        assert_eq!(gutter_lines("a\n\nb"), vec![1, 2, 3]);
    }

    #[test]
    fn test_gutter_ignores_horizontal_scroll() {
        let viewport = Viewport::new(120, 40);
        assert_eq!(viewport.gutter_offset(), Viewport::new(120, 0));
    }
}
