//! Terminal layout geometry shared by the renderer and the hit-region layer.
//!
//! The page model thinks in logical pixels; the terminal thinks in cells. One
//! cell maps to a fixed pixel box so breakpoint and scroll math stay in the
//! page's units. Every control's cell rectangle is computed here, in one
//! place, so a click always tests against exactly what was drawn.

use folioterm::page::Page;
use unicode_width::UnicodeWidthStr;

/// Horizontal pixels represented by one terminal column.
pub(crate) const PX_PER_COL: f32 = 8.0;
/// Vertical pixels represented by one terminal row.
pub(crate) const PX_PER_ROW: f32 = 16.0;

/// Width of the nav drawer in columns.
pub(crate) const NAV_PANEL_COLS: u16 = 24;

pub(crate) const TOGGLE_LABEL: &str = "[menu]";
pub(crate) const CLOSE_LABEL: &str = "[x]";
pub(crate) const CONSULT_LABEL: &str = "[ Start a project ]";
pub(crate) const MAIL_LABEL: &str = "[ Email us ]";

/// Column where inline header links begin on wide layouts.
pub(crate) const HEADER_LINKS_START_COL: u16 = 16;

/// Left edge of contact form fields and buttons, in columns.
pub(crate) const FORM_LEFT_COL: u16 = 4;

/// Row offsets of the contact form inside its section, in document rows.
pub(crate) const FORM_NAME_ROW_OFFSET: u16 = 4;
pub(crate) const FORM_EMAIL_ROW_OFFSET: u16 = 6;
pub(crate) const FORM_MESSAGE_ROW_OFFSET: u16 = 8;
pub(crate) const FORM_BUTTONS_ROW_OFFSET: u16 = 10;

/// Logical-pixel size of the scrollable content area (everything between the
/// header row and the footer row).
pub(crate) fn viewport_px(cols: u16, rows: u16) -> (f32, f32) {
    let content_rows = rows.saturating_sub(2);
    (f32::from(cols) * PX_PER_COL, f32::from(content_rows) * PX_PER_ROW)
}

/// Document row of a logical-pixel offset.
pub(crate) fn doc_row(px: f32) -> u16 {
    (px / PX_PER_ROW).max(0.0) as u16
}

/// Terminal row showing the given document row, or `None` when it is outside
/// the content area.
pub(crate) fn terminal_row(doc_row: u16, scroll_rows: u16, total_rows: u16) -> Option<u16> {
    let content_rows = total_rows.saturating_sub(2);
    let offset = doc_row.checked_sub(scroll_rows)?;
    if offset >= content_rows {
        return None;
    }
    Some(offset + 1)
}

/// Half-open column span `[start, end)`.
pub(crate) type Span = (u16, u16);

pub(crate) fn span_contains(span: Span, x: u16) -> bool {
    x >= span.0 && x < span.1
}

/// Label width in terminal cells.
pub(crate) fn label_width(label: &str) -> u16 {
    label.width() as u16
}

/// The nav toggle in the header's right corner.
pub(crate) fn toggle_span(cols: u16) -> Span {
    let width = label_width(TOGGLE_LABEL);
    let start = cols.saturating_sub(width + 1);
    (start, start + width)
}

/// An inline header anchor link, present only on wide layouts.
#[derive(Debug, Clone)]
pub(crate) struct HeaderLink {
    pub(crate) span: Span,
    pub(crate) label: String,
    pub(crate) target: String,
}

/// Inline anchor links laid out left to right after the site title. Links
/// that would collide with the toggle are dropped rather than clipped.
pub(crate) fn header_link_spans(page: &Page, cols: u16) -> Vec<HeaderLink> {
    let Some(panel) = page.nav_panel.as_ref() else {
        return Vec::new();
    };
    let limit = toggle_span(cols).0.saturating_sub(1);
    let mut links = Vec::new();
    let mut cursor = HEADER_LINKS_START_COL;
    for link in &panel.links {
        let width = label_width(&link.label);
        if cursor + width > limit {
            break;
        }
        links.push(HeaderLink {
            span: (cursor, cursor + width),
            label: link.label.clone(),
            target: link.target.clone(),
        });
        cursor += width + 2;
    }
    links
}

/// Cell rectangle of the open nav drawer, anchored to the right edge just
/// below the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PanelRect {
    pub(crate) left: u16,
    pub(crate) top: u16,
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl PanelRect {
    pub(crate) fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.left
            && x < self.left + self.width
            && y >= self.top
            && y < self.top + self.height
    }

    pub(crate) fn right(&self) -> u16 {
        self.left + self.width
    }
}

pub(crate) fn nav_panel_rect(cols: u16, rows: u16, link_count: usize) -> PanelRect {
    let width = NAV_PANEL_COLS.min(cols);
    // Borders above and below the link rows.
    let height = (link_count as u16 + 2).min(rows.saturating_sub(1));
    PanelRect {
        left: cols.saturating_sub(width),
        top: 1,
        width,
        height,
    }
}

/// The `[x]` close control on the panel's top border.
pub(crate) fn close_span(panel: PanelRect) -> Span {
    let width = label_width(CLOSE_LABEL);
    let end = panel.right().saturating_sub(1);
    (end.saturating_sub(width), end)
}

/// Terminal row of a panel link, or `None` when it falls outside the drawer.
pub(crate) fn panel_link_row(panel: PanelRect, index: usize) -> Option<u16> {
    let row = panel.top + 1 + index as u16;
    (row < panel.top + panel.height - 1).then_some(row)
}

/// The motion toggle pill in the footer.
pub(crate) fn motion_span(label: &str) -> Span {
    let width = label_width(label) + 2;
    (1, 1 + width)
}

/// Terminal rows and column spans of the contact form, for whatever parts of
/// it are currently scrolled into view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormLayout {
    pub(crate) name_row: Option<u16>,
    pub(crate) email_row: Option<u16>,
    pub(crate) message_row: Option<u16>,
    pub(crate) buttons_row: Option<u16>,
    pub(crate) field_span: Span,
    pub(crate) consult_span: Span,
    pub(crate) mail_span: Span,
}

pub(crate) fn form_layout(
    page: &Page,
    scroll_rows: u16,
    cols: u16,
    rows: u16,
) -> Option<FormLayout> {
    page.contact.as_ref()?;
    let section = page.find_section(folioterm::contact::CONTACT_SECTION_ID)?;
    let top = doc_row(section.top);
    let row_for = |offset: u16| terminal_row(top + offset, scroll_rows, rows);
    let consult_width = label_width(CONSULT_LABEL);
    let mail_width = label_width(MAIL_LABEL);
    let consult_span = (FORM_LEFT_COL, FORM_LEFT_COL + consult_width);
    let mail_start = consult_span.1 + 2;
    Some(FormLayout {
        name_row: row_for(FORM_NAME_ROW_OFFSET),
        email_row: row_for(FORM_EMAIL_ROW_OFFSET),
        message_row: row_for(FORM_MESSAGE_ROW_OFFSET),
        buttons_row: row_for(FORM_BUTTONS_ROW_OFFSET),
        field_span: (FORM_LEFT_COL, cols.saturating_sub(2)),
        consult_span,
        mail_span: (mail_start, mail_start + mail_width),
    })
}
