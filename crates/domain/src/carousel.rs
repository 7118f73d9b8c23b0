//! Carousel — a bounded sliding window over a horizontal item set.
//!
//! `slides_to_show` items are visible at once; `next`/`prev` move the
//! window by one item and clamp at the ends, so the track never shows a
//! trailing gap.

/// Visible slide count for a given viewport width.
#[must_use]
pub const fn slides_for_width(width: u32) -> usize {
    if width < 640 {
        1
    } else if width < 768 {
        2
    } else {
        4
    }
}

/// Sliding-window state over `item_count` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    item_count: usize,
    slides_to_show: usize,
    current_index: usize,
}

impl Carousel {
    /// Create a carousel with the window at the far left.
    ///
    /// `slides_to_show` is raised to 1 if 0 is passed.
    #[must_use]
    pub fn new(item_count: usize, slides_to_show: usize) -> Self {
        Self {
            item_count,
            slides_to_show: slides_to_show.max(1),
            current_index: 0,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn slides_to_show(&self) -> usize {
        self.slides_to_show
    }

    /// Largest index the window may start at.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.slides_to_show)
    }

    /// Advance the window one item, clamped to [`max_index`](Self::max_index).
    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1).min(self.max_index());
    }

    /// Move the window back one item, clamped to 0.
    pub fn prev(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Jump straight to `index`, clamped into range.
    pub fn set_index(&mut self, index: usize) {
        self.current_index = index.min(self.max_index());
    }

    /// Change the visible slide count and re-clamp the index so no gap
    /// appears past the last item.
    pub fn set_slides_to_show(&mut self, slides_to_show: usize) {
        self.slides_to_show = slides_to_show.max(1);
        self.current_index = self.current_index.min(self.max_index());
    }

    /// React to a viewport resize using the breakpoint policy.
    pub fn resize(&mut self, width: u32) {
        self.set_slides_to_show(slides_for_width(width));
    }

    /// Whether the "prev" control is enabled.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current_index > 0
    }

    /// Whether the "next" control is enabled.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_index < self.max_index()
    }

    /// Track offset in percent of track width.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset_percent(&self) -> f64 {
        self.current_index as f64 * (100.0 / self.slides_to_show as f64)
    }

    /// Indices of the currently visible items.
    #[must_use]
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.current_index + self.slides_to_show).min(self.item_count);
        self.current_index..end
    }
}
