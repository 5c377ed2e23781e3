//! Viewport geometry so scroll, breakpoints, and reveal ratios share one frame.

use crate::page::Page;

/// Visible window over the document, all units in logical px.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }

    /// Largest valid scroll offset for the given page.
    pub fn max_scroll(&self, page: &Page) -> f32 {
        (page.document_height() - self.height).max(0.0)
    }

    /// Scroll by a signed delta, clamped to the document. Returns true when
    /// the position actually changed.
    pub fn scroll_by(&mut self, delta: f32, page: &Page) -> bool {
        self.scroll_to(self.scroll_y + delta, page)
    }

    /// Scroll to an absolute offset, clamped to the document.
    pub fn scroll_to(&mut self, target: f32, page: &Page) -> bool {
        let clamped = target.clamp(0.0, self.max_scroll(page));
        let changed = (clamped - self.scroll_y).abs() > f32::EPSILON;
        self.scroll_y = clamped;
        changed
    }

    pub fn resize(&mut self, width: f32, height: f32, page: &Page) {
        self.width = width;
        self.height = height;
        // Keep the offset valid for the new geometry.
        self.scroll_to(self.scroll_y, page);
    }

    /// Fraction of an element (document-space top/height) currently visible,
    /// in `0.0..=1.0`. Zero-height elements count as fully visible once their
    /// top enters the viewport.
    pub fn intersection_ratio(&self, top: f32, height: f32) -> f32 {
        let view_top = self.scroll_y;
        let view_bottom = self.scroll_y + self.height;
        if height <= 0.0 {
            return if top >= view_top && top <= view_bottom {
                1.0
            } else {
                0.0
            };
        }
        let visible_top = top.max(view_top);
        let visible_bottom = (top + height).min(view_bottom);
        ((visible_bottom - visible_top) / height).clamp(0.0, 1.0)
    }
}
