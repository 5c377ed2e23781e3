//! Decorative animation play/pause toggle.

use crate::page::Page;

/// Animation play state of the decorative wiggle element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Running,
    Paused,
}

/// The background animation the motion toggle controls.
#[derive(Debug, Clone, Default)]
pub struct Wiggle {
    pub play_state: PlayState,
}

/// The control that pauses or resumes the wiggle. `pressed` is the exposed
/// indicator: true while the animation is paused.
#[derive(Debug, Clone)]
pub struct MotionToggle {
    pub pressed: bool,
    pub label: String,
}

impl Default for MotionToggle {
    fn default() -> Self {
        Self {
            pressed: false,
            label: label_for(PlayState::Running),
        }
    }
}

fn label_for(state: PlayState) -> String {
    match state {
        PlayState::Running => "Motion: On".to_string(),
        PlayState::Paused => "Motion: Off".to_string(),
    }
}

/// Flip the wiggle between running and paused, keeping the toggle's pressed
/// indicator and label in sync. No-op unless both elements exist.
pub fn toggle_motion(page: &mut Page) {
    let (Some(wiggle), Some(toggle)) = (page.wiggle.as_mut(), page.motion_toggle.as_mut()) else {
        return;
    };
    wiggle.play_state = match wiggle.play_state {
        PlayState::Running => PlayState::Paused,
        PlayState::Paused => PlayState::Running,
    };
    toggle.pressed = wiggle.play_state == PlayState::Paused;
    toggle.label = label_for(wiggle.play_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_pauses_then_resumes() {
        let mut page = Page::standard();
        toggle_motion(&mut page);
        let wiggle = page.wiggle.as_ref().expect("wiggle");
        let toggle = page.motion_toggle.as_ref().expect("toggle");
        assert_eq!(wiggle.play_state, PlayState::Paused);
        assert!(toggle.pressed);
        assert_eq!(toggle.label, "Motion: Off");

        toggle_motion(&mut page);
        let wiggle = page.wiggle.as_ref().expect("wiggle");
        let toggle = page.motion_toggle.as_ref().expect("toggle");
        assert_eq!(wiggle.play_state, PlayState::Running);
        assert!(!toggle.pressed);
        assert_eq!(toggle.label, "Motion: On");
    }

    #[test]
    fn toggle_without_wiggle_or_control_is_a_noop() {
        let mut page = Page::standard();
        page.wiggle = None;
        toggle_motion(&mut page);
        assert!(!page.motion_toggle.as_ref().expect("toggle").pressed);

        let mut page = Page::standard();
        page.motion_toggle = None;
        toggle_motion(&mut page);
        assert_eq!(
            page.wiggle.as_ref().expect("wiggle").play_state,
            PlayState::Running
        );
    }
}
