//! Reveal-on-scroll markers driven by viewport intersection.

use std::time::{Duration, Instant};

use crate::deferred::{DeferredQueue, DeferredTask};
use crate::page::Page;
use crate::viewport::Viewport;

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f32 = 0.15;

/// Delay between crossing the threshold and the visible marker landing, so
/// sections fade in slightly after they enter rather than popping.
pub const REVEAL_DELAY: Duration = Duration::from_millis(120);

/// Visibility lifecycle of a reveal-eligible element. One-way: once visible,
/// scrolling away never hides it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    /// Threshold crossed; a deferred timer is armed.
    Pending,
    Visible,
}

/// Arm a deferred reveal for every hidden section past the threshold.
pub fn schedule_reveals(
    page: &mut Page,
    viewport: &Viewport,
    queue: &mut DeferredQueue,
    now: Instant,
) {
    for section in &mut page.sections {
        if section.reveal != RevealState::Hidden {
            continue;
        }
        let ratio = viewport.intersection_ratio(section.top, section.height);
        if ratio < REVEAL_THRESHOLD {
            continue;
        }
        if queue.has_reveal_for(&section.id) {
            continue;
        }
        section.reveal = RevealState::Pending;
        queue.schedule(
            now,
            REVEAL_DELAY,
            DeferredTask::RevealSection {
                id: section.id.clone(),
            },
        );
    }
}

/// Apply a fired reveal timer. The section may have been removed between
/// scheduling and execution; that is a silent no-op.
pub fn apply_reveal(page: &mut Page, id: &str) {
    if let Some(section) = page.find_section_mut(id) {
        section.reveal = RevealState::Visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;

    fn setup() -> (Page, Viewport, DeferredQueue) {
        (
            Page::standard(),
            Viewport::new(400.0, 600.0),
            DeferredQueue::new(),
        )
    }

    fn drain_and_apply(page: &mut Page, queue: &mut DeferredQueue, now: Instant) {
        for task in queue.drain_due(now) {
            if let DeferredTask::RevealSection { id } = task {
                apply_reveal(page, &id);
            }
        }
    }

    #[test]
    fn sections_in_view_become_visible_after_the_delay() {
        let (mut page, viewport, mut queue) = setup();
        let now = Instant::now();
        schedule_reveals(&mut page, &viewport, &mut queue, now);
        assert_eq!(page.sections[0].reveal, RevealState::Pending);

        drain_and_apply(&mut page, &mut queue, now + REVEAL_DELAY);
        assert_eq!(page.sections[0].reveal, RevealState::Visible);
    }

    #[test]
    fn offscreen_sections_stay_hidden() {
        let (mut page, viewport, mut queue) = setup();
        schedule_reveals(&mut page, &viewport, &mut queue, Instant::now());
        let last = page.sections.last().expect("sections");
        assert_eq!(last.reveal, RevealState::Hidden);
    }

    #[test]
    fn threshold_is_fifteen_percent() {
        let (mut page, mut viewport, mut queue) = setup();
        let section_top = page.sections[2].top;
        let section_height = page.sections[2].height;
        // Scroll so exactly 10% of the third section is visible: below threshold.
        viewport.scroll_to(section_top + 0.1 * section_height - viewport.height, &page);
        schedule_reveals(&mut page, &viewport, &mut queue, Instant::now());
        assert_eq!(page.sections[2].reveal, RevealState::Hidden);

        // 20% visible: past threshold.
        viewport.scroll_to(section_top + 0.2 * section_height - viewport.height, &page);
        schedule_reveals(&mut page, &viewport, &mut queue, Instant::now());
        assert_eq!(page.sections[2].reveal, RevealState::Pending);
    }

    #[test]
    fn scheduling_twice_arms_a_single_timer() {
        let (mut page, viewport, mut queue) = setup();
        let now = Instant::now();
        schedule_reveals(&mut page, &viewport, &mut queue, now);
        schedule_reveals(&mut page, &viewport, &mut queue, now);
        let revealed = queue.drain_due(now + REVEAL_DELAY);
        let hero_count = revealed
            .iter()
            .filter(|task| matches!(task, DeferredTask::RevealSection { id } if id == "home"))
            .count();
        assert_eq!(hero_count, 1);
    }

    #[test]
    fn reveal_survives_scrolling_away() {
        let (mut page, viewport, mut queue) = setup();
        let now = Instant::now();
        schedule_reveals(&mut page, &viewport, &mut queue, now);
        drain_and_apply(&mut page, &mut queue, now + REVEAL_DELAY);
        // Scrolled far away; nothing re-hides.
        schedule_reveals(&mut page, &viewport, &mut queue, now + REVEAL_DELAY);
        assert_eq!(page.sections[0].reveal, RevealState::Visible);
    }

    #[test]
    fn firing_against_a_removed_section_is_a_noop() {
        let (mut page, viewport, mut queue) = setup();
        let now = Instant::now();
        schedule_reveals(&mut page, &viewport, &mut queue, now);
        page.sections.clear();
        drain_and_apply(&mut page, &mut queue, now + REVEAL_DELAY);
        assert!(page.sections.is_empty());
    }
}
