//! Single-threaded event loop: input events in, page mutations and frames out.
//!
//! All state lives here. Input arrives over the channel from the reader
//! thread; timers are the deferred queue drained on every tick, so there is
//! no cross-thread mutation anywhere.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use folioterm::contact::{
    self, ContactAction, FormField, CONTACT_SECTION_ID, FOCUS_DEFER,
};
use folioterm::deferred::{DeferredQueue, DeferredTask};
use folioterm::motion::{toggle_motion, PlayState};
use folioterm::nav::{NavOverlay, NavTrigger};
use folioterm::page::{Focus, Page};
use folioterm::reveal::{apply_reveal, schedule_reveals};
use folioterm::scroll::{
    activate_anchor, anchor_scroll_target, settle_initial_hash, ScrollAnimation,
};
use folioterm::viewport::Viewport;
use folioterm::log_debug;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::hit_regions::{classify_click, HitTarget};
use crate::input::InputEvent;
use crate::layout::{self, PX_PER_ROW};
use crate::render::{self, Screen};
use crate::theme::ThemeColors;

const TICK: Duration = Duration::from_millis(33);
const WIGGLE_FRAME_INTERVAL: Duration = Duration::from_millis(250);

pub(crate) struct App {
    pub(crate) page: Page,
    pub(crate) viewport: Viewport,
    pub(crate) nav: NavOverlay,
    pub(crate) deferred: DeferredQueue,
    pub(crate) scroll_anim: Option<ScrollAnimation>,
    pub(crate) colors: ThemeColors,
    pub(crate) mailto_to: String,
    pub(crate) cols: u16,
    pub(crate) rows: u16,
    pub(crate) wiggle_frame: usize,
    last_wiggle_advance: Instant,
    pub(crate) running: bool,
}

impl App {
    pub(crate) fn new(
        cols: u16,
        rows: u16,
        colors: ThemeColors,
        mailto_to: String,
        reduced_motion: bool,
    ) -> Self {
        let mut page = Page::standard();
        let (width, height) = layout::viewport_px(cols, rows);
        let mut viewport = Viewport::new(width, height);
        settle_initial_hash(&mut page, &mut viewport);
        if reduced_motion {
            toggle_motion(&mut page);
        }
        Self {
            page,
            viewport,
            nav: NavOverlay::new(),
            deferred: DeferredQueue::new(),
            scroll_anim: None,
            colors,
            mailto_to,
            cols,
            rows,
            wiggle_frame: 0,
            last_wiggle_advance: Instant::now(),
            running: true,
        }
    }

    pub(crate) fn screen(&self) -> Screen<'_> {
        Screen {
            page: &self.page,
            nav_open: self.nav.is_open(),
            scroll_rows: layout::doc_row(self.viewport.scroll_y),
            colors: self.colors,
            wiggle_frame: self.wiggle_frame,
        }
    }
}

pub(crate) fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &Receiver<InputEvent>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while app.running {
        match rx.recv_timeout(TICK) {
            Ok(event) => handle_input(app, event, Instant::now()),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        tick(app, Instant::now());
        terminal.draw(|frame| render::draw(frame, &app.screen()))?;
    }
    Ok(())
}

pub(crate) fn handle_input(app: &mut App, event: InputEvent, now: Instant) {
    match event {
        InputEvent::Exit => app.running = false,
        InputEvent::Escape => app
            .nav
            .handle_trigger(&mut app.page, NavTrigger::EscapePressed),
        InputEvent::Resize { cols, rows } => handle_resize(app, cols, rows),
        InputEvent::ScrollRows(delta) => handle_scroll(app, delta),
        InputEvent::MouseClick { x, y } => handle_click(app, x, y, now),
        InputEvent::Enter => activate_focus(app, now),
        InputEvent::Tab => cycle_focus(app, 1),
        InputEvent::BackTab => cycle_focus(app, -1),
        InputEvent::Backspace => {
            if let Focus::FormField(field) = app.page.focus {
                if let Some(form) = app.page.contact.as_mut() {
                    form.field_mut(field).pop();
                }
            }
        }
        InputEvent::Char(c) => handle_char(app, c, now),
    }
}

fn handle_resize(app: &mut App, cols: u16, rows: u16) {
    app.cols = cols;
    app.rows = rows;
    let (width, height) = layout::viewport_px(cols, rows);
    app.viewport.resize(width, height, &app.page);
    app.nav
        .handle_trigger(&mut app.page, NavTrigger::Resized { width });
}

/// A scroll gesture while the drawer is open dismisses the drawer and is
/// otherwise swallowed, matching the body scroll lock. Closed, it moves the
/// page and cancels any eased scroll still in flight.
fn handle_scroll(app: &mut App, delta_rows: i32) {
    if app.nav.is_open() {
        app.nav.handle_trigger(&mut app.page, NavTrigger::Scrolled);
        return;
    }
    app.scroll_anim = None;
    let delta = delta_rows as f32 * PX_PER_ROW;
    if app.viewport.scroll_by(delta, &app.page) {
        app.page.update_header(app.viewport.scroll_y);
    }
}

fn handle_click(app: &mut App, x: u16, y: u16, now: Instant) {
    let scroll_rows = layout::doc_row(app.viewport.scroll_y);
    let target = classify_click(
        &app.page,
        app.nav.is_open(),
        scroll_rows,
        app.cols,
        app.rows,
        x,
        y,
    );
    match target {
        HitTarget::NavToggle => app
            .nav
            .handle_trigger(&mut app.page, NavTrigger::ToggleActivated),
        HitTarget::NavClose => app
            .nav
            .handle_trigger(&mut app.page, NavTrigger::CloseActivated),
        HitTarget::NavLink(index) => {
            let target = app
                .page
                .nav_panel
                .as_ref()
                .and_then(|panel| panel.links.get(index))
                .map(|link| link.target.clone());
            if let Some(target) = target {
                start_anchor(app, &target, now);
            }
        }
        HitTarget::HeaderLink(target) => start_anchor(app, &target, now),
        HitTarget::NavPanelBackground | HitTarget::Outside => app
            .nav
            .handle_trigger(&mut app.page, NavTrigger::OutsidePress),
        HitTarget::MotionToggle => {
            app.page.focus = Focus::MotionToggle;
            toggle_motion(&mut app.page);
        }
        HitTarget::FormField(field) => app.page.focus = Focus::FormField(field),
        HitTarget::ConsultButton => {
            app.page.focus = Focus::ConsultButton;
            submit_contact(app, now);
        }
        HitTarget::MailButton => {
            app.page.focus = Focus::MailButton;
            submit_contact(app, now);
        }
    }
}

fn start_anchor(app: &mut App, target: &str, now: Instant) {
    if let Some(anim) = activate_anchor(&mut app.page, &app.viewport, &mut app.nav, target, now) {
        app.scroll_anim = Some(anim);
    }
}

fn submit_contact(app: &mut App, now: Instant) {
    let Some(form) = app.page.contact.as_ref() else {
        return;
    };
    match contact::submit(form, &app.mailto_to) {
        ContactAction::FocusForm => {
            if let Some(target) =
                anchor_scroll_target(&app.page, &app.viewport, CONTACT_SECTION_ID)
            {
                app.scroll_anim = Some(ScrollAnimation::new(app.viewport.scroll_y, target, now));
            }
            app.deferred.schedule(
                now,
                FOCUS_DEFER,
                DeferredTask::FocusFormField {
                    field: FormField::Name,
                },
            );
        }
        ContactAction::Navigate(url) => {
            log_debug(&format!("mail draft to {}", app.mailto_to));
            tracing::info!(target: "contact", to = %app.mailto_to, "mail draft launched");
            if let Err(err) = open::that_detached(&url) {
                log_debug(&format!("mail launch failed: {err}"));
            }
        }
    }
}

fn handle_char(app: &mut App, c: char, now: Instant) {
    if let Focus::FormField(field) = app.page.focus {
        if let Some(form) = app.page.contact.as_mut() {
            form.field_mut(field).push(c);
        }
        return;
    }
    match c {
        'q' => app.running = false,
        'm' => toggle_motion(&mut app.page),
        'n' => app
            .nav
            .handle_trigger(&mut app.page, NavTrigger::ToggleActivated),
        'j' => handle_scroll(app, 1),
        'k' => handle_scroll(app, -1),
        'g' => handle_scroll(app, i32::MIN / 2),
        'G' => handle_scroll(app, i32::MAX / 2),
        _ => {}
    }
}

fn activate_focus(app: &mut App, now: Instant) {
    match app.page.focus {
        Focus::NavToggle => app
            .nav
            .handle_trigger(&mut app.page, NavTrigger::ToggleActivated),
        Focus::NavLink(index) => {
            let target = app
                .page
                .nav_panel
                .as_ref()
                .and_then(|panel| panel.links.get(index))
                .map(|link| link.target.clone());
            if let Some(target) = target {
                start_anchor(app, &target, now);
            }
        }
        Focus::MotionToggle => toggle_motion(&mut app.page),
        Focus::ConsultButton | Focus::MailButton => submit_contact(app, now),
        // Enter advances through the form; in the message it inserts a line.
        Focus::FormField(FormField::Name) => app.page.focus = Focus::FormField(FormField::Email),
        Focus::FormField(FormField::Email) => {
            app.page.focus = Focus::FormField(FormField::Message)
        }
        Focus::FormField(FormField::Message) => {
            if let Some(form) = app.page.contact.as_mut() {
                form.message.push('\n');
            }
        }
        Focus::None => {}
    }
}

fn focus_ring(app: &App) -> Vec<Focus> {
    if app.nav.is_open() {
        let links = app
            .page
            .nav_panel
            .as_ref()
            .map_or(0, |panel| panel.links.len());
        return (0..links).map(Focus::NavLink).collect();
    }
    let mut ring = Vec::new();
    if app.page.nav_toggle.is_some() {
        ring.push(Focus::NavToggle);
    }
    if app.page.motion_toggle.is_some() {
        ring.push(Focus::MotionToggle);
    }
    if app.page.contact.is_some() {
        ring.extend([
            Focus::FormField(FormField::Name),
            Focus::FormField(FormField::Email),
            Focus::FormField(FormField::Message),
            Focus::ConsultButton,
            Focus::MailButton,
        ]);
    }
    ring
}

fn cycle_focus(app: &mut App, direction: i32) {
    let ring = focus_ring(app);
    if ring.is_empty() {
        return;
    }
    let len = ring.len() as i32;
    let next = match ring.iter().position(|f| *f == app.page.focus) {
        Some(current) => (current as i32 + direction).rem_euclid(len),
        None => {
            if direction >= 0 {
                0
            } else {
                len - 1
            }
        }
    };
    app.page.focus = ring[next as usize];
}

fn tick(app: &mut App, now: Instant) {
    if let Some(anim) = app.scroll_anim {
        app.viewport.scroll_to(anim.sample(now), &app.page);
        if anim.finished(now) {
            app.scroll_anim = None;
        }
    }
    app.page.update_header(app.viewport.scroll_y);
    schedule_reveals(&mut app.page, &app.viewport, &mut app.deferred, now);
    for task in app.deferred.drain_due(now) {
        match task {
            DeferredTask::RevealSection { id } => apply_reveal(&mut app.page, &id),
            DeferredTask::FocusFormField { field } => {
                contact::focus_form_field(&mut app.page, field)
            }
        }
    }
    let animating = app
        .page
        .wiggle
        .as_ref()
        .is_some_and(|wiggle| wiggle.play_state == PlayState::Running);
    if animating && now.duration_since(app.last_wiggle_advance) >= WIGGLE_FRAME_INTERVAL {
        app.wiggle_frame = app.wiggle_frame.wrapping_add(1);
        app.last_wiggle_advance = now;
    }
}
