//! Smooth in-page scrolling with header offset and hash cleanup.

use std::time::{Duration, Instant};

use crate::nav::{NavOverlay, NavTrigger};
use crate::page::Page;
use crate::viewport::Viewport;

/// Duration of the eased scroll toward an anchor target.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);

/// An in-flight eased scroll. Sampled by the event loop each tick; there is
/// no cancellation — a new animation simply replaces the old one.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration: SMOOTH_SCROLL_DURATION,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Eased position at `now`. Ease-out cubic: fast start, gentle landing.
    pub fn sample(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }
}

/// Scroll offset that puts the section's top just below the header, clamped
/// to the scrollable range. `None` when the section does not exist.
pub fn anchor_scroll_target(page: &Page, viewport: &Viewport, id: &str) -> Option<f32> {
    let section = page.find_section(id)?;
    let offset = page.header.as_ref().map_or(0.0, |h| h.anchor_offset());
    Some((section.top - offset).clamp(0.0, viewport.max_scroll(page)))
}

/// Activate an in-page anchor link: start a smooth scroll toward the target,
/// clear the location hash without adding a history entry, and close the nav
/// overlay if it is open. Returns the animation to drive, or `None` when the
/// target does not exist (a dead link simply does nothing).
pub fn activate_anchor(
    page: &mut Page,
    viewport: &Viewport,
    nav: &mut NavOverlay,
    target_id: &str,
    now: Instant,
) -> Option<ScrollAnimation> {
    let target = anchor_scroll_target(page, viewport, target_id)?;
    page.location.replace_hash(None);
    nav.handle_trigger(page, NavTrigger::AnchorActivated);
    Some(ScrollAnimation::new(viewport.scroll_y, target, now))
}

/// Reload behavior: a leftover hash in the address bar is cleared (replace,
/// not push) and the page pins to the top instead of jumping to the anchor.
pub fn settle_initial_hash(page: &mut Page, viewport: &mut Viewport) {
    if page.location.hash.is_some() {
        page.location.replace_hash(None);
        viewport.scroll_to(0.0, page);
    }
}
