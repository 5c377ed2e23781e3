//! Page document model so every behavior hangs off typed elements, not selectors.
//!
//! A missing element means "feature off": every optional element is an
//! `Option`, and operations that need one degrade to a silent no-op when it
//! is absent. Nothing in this module errors.

use crate::contact::{ContactForm, FormField};
use crate::motion::{MotionToggle, Wiggle};
use crate::reveal::RevealState;

/// Minimum viewport width treated as a desktop layout, in logical pixels.
/// Crossing this width while the nav overlay is open force-closes it.
pub const DESKTOP_MIN_WIDTH_PX: f32 = 601.0;

/// Extra gap below the fixed header when scrolling to an anchor target.
pub const HEADER_ANCHOR_GAP_PX: f32 = 12.0;

/// A content section; also the target of in-page anchor links.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub body: Vec<String>,
    /// Document-space offset of the section top, in logical px.
    pub top: f32,
    pub height: f32,
    pub reveal: RevealState,
}

impl Section {
    pub fn new(id: &str, title: &str, height: f32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: Vec::new(),
            top: 0.0,
            height,
            reveal: RevealState::default(),
        }
    }
}

/// Fixed page header. `elevated` mirrors whether the page is scrolled at all.
#[derive(Debug, Clone)]
pub struct Header {
    pub height: f32,
    pub elevated: bool,
}

impl Header {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            elevated: false,
        }
    }

    /// Anchor offset the smooth scroller subtracts so targets clear the header.
    pub fn anchor_offset(&self) -> f32 {
        self.height.ceil() + HEADER_ANCHOR_GAP_PX
    }
}

/// A link inside the nav panel pointing at a section id.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

/// The navigation overlay panel. `hidden` is the exposed accessibility
/// indicator and must always be the negation of the toggle's `expanded`.
#[derive(Debug, Clone)]
pub struct NavPanel {
    pub links: Vec<NavLink>,
    pub open_marker: bool,
    pub hidden: bool,
    pub has_close_control: bool,
}

impl NavPanel {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            links,
            open_marker: false,
            hidden: true,
            has_close_control: true,
        }
    }
}

/// The control that opens and closes the nav panel.
#[derive(Debug, Clone, Default)]
pub struct NavToggle {
    pub expanded: bool,
}

/// Where keyboard focus currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    NavToggle,
    NavLink(usize),
    MotionToggle,
    FormField(FormField),
    ConsultButton,
    MailButton,
}

/// Address-bar analog. `replace_hash` mirrors `history.replaceState`: it
/// rewrites the hash without growing the history.
#[derive(Debug, Clone)]
pub struct Location {
    pub path: String,
    pub hash: Option<String>,
    history_entries: usize,
}

impl Location {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            hash: None,
            history_entries: 1,
        }
    }

    pub fn with_hash(path: &str, hash: &str) -> Self {
        let mut location = Self::new(path);
        location.hash = Some(hash.to_string());
        location
    }

    /// Replace the current entry's hash. Never adds a history entry.
    pub fn replace_hash(&mut self, hash: Option<String>) {
        self.hash = hash;
    }

    pub fn history_entries(&self) -> usize {
        self.history_entries
    }
}

/// The whole page. Optional elements degrade their features when absent.
#[derive(Debug, Clone)]
pub struct Page {
    pub header: Option<Header>,
    pub nav_panel: Option<NavPanel>,
    pub nav_toggle: Option<NavToggle>,
    pub sections: Vec<Section>,
    pub wiggle: Option<Wiggle>,
    pub motion_toggle: Option<MotionToggle>,
    pub contact: Option<ContactForm>,
    pub location: Location,
    pub body_scroll_locked: bool,
    pub focus: Focus,
}

impl Page {
    /// An empty page: every feature degrades to a no-op.
    pub fn empty() -> Self {
        Self {
            header: None,
            nav_panel: None,
            nav_toggle: None,
            sections: Vec::new(),
            wiggle: None,
            motion_toggle: None,
            contact: None,
            location: Location::new("/"),
            body_scroll_locked: false,
            focus: Focus::None,
        }
    }

    /// The built-in portfolio page the viewer renders by default.
    pub fn standard() -> Self {
        let mut page = Self::empty();
        page.header = Some(Header::new(48.0));
        page.sections = vec![
            hero_section(),
            about_section(),
            work_section(),
            contact_section(),
        ];
        page.reflow();
        page.nav_panel = Some(NavPanel::new(vec![
            NavLink {
                label: "About".to_string(),
                target: "about".to_string(),
            },
            NavLink {
                label: "Work".to_string(),
                target: "work".to_string(),
            },
            NavLink {
                label: "Contact".to_string(),
                target: "contact".to_string(),
            },
        ]));
        page.nav_toggle = Some(NavToggle::default());
        page.wiggle = Some(Wiggle::default());
        page.motion_toggle = Some(MotionToggle::default());
        page.contact = Some(ContactForm::default());
        page
    }

    /// Recompute section offsets after heights change.
    pub fn reflow(&mut self) {
        let mut cursor = self.header.as_ref().map_or(0.0, |h| h.height);
        for section in &mut self.sections {
            section.top = cursor;
            cursor += section.height;
        }
    }

    /// Total document height in logical px.
    pub fn document_height(&self) -> f32 {
        self.sections
            .last()
            .map_or(0.0, |section| section.top + section.height)
    }

    pub fn find_section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn find_section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.id == id)
    }

    /// Sync the header's elevated marker with the current scroll position.
    pub fn update_header(&mut self, scroll_y: f32) {
        if let Some(header) = self.header.as_mut() {
            header.elevated = scroll_y > 0.0;
        }
    }
}

fn hero_section() -> Section {
    let mut section = Section::new("home", "Studio Folio", 480.0);
    section.body = vec![
        "Design-minded engineering for small teams.".to_string(),
        "Scroll to explore, or open the menu.".to_string(),
    ];
    section
}

fn about_section() -> Section {
    let mut section = Section::new("about", "About", 400.0);
    section.body = vec![
        "Ten years of product work across web and embedded UIs.".to_string(),
        "Calm interfaces, honest typography, no dark patterns.".to_string(),
    ];
    section
}

fn work_section() -> Section {
    let mut section = Section::new("work", "Selected Work", 520.0);
    section.body = vec![
        "Atlas — a mapping console for field crews.".to_string(),
        "Ledgerline — bookkeeping without the spreadsheet dread.".to_string(),
        "Quiet Signals — ambient status displays for ops rooms.".to_string(),
    ];
    section
}

fn contact_section() -> Section {
    let mut section = Section::new("contact", "Contact", 480.0);
    section.body = vec!["Tell us about your project.".to_string()];
    section
}
