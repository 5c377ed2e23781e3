//! Click classification: raw cell coordinates to the control underneath.
//!
//! Layer order matters. The open drawer is tested first so a press on its
//! empty background never falls through to the page below it, and the toggle
//! is tested before the outside fallback so activating it cannot double as an
//! outside press.

use folioterm::contact::FormField;
use folioterm::page::{Page, DESKTOP_MIN_WIDTH_PX};

use crate::layout::{
    self, close_span, form_layout, header_link_spans, nav_panel_rect, panel_link_row,
    span_contains, toggle_span, viewport_px,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HitTarget {
    NavToggle,
    NavClose,
    NavLink(usize),
    /// Empty drawer background. Closes the overlay, same as outside.
    NavPanelBackground,
    MotionToggle,
    /// Inline header anchor link carrying its section id.
    HeaderLink(String),
    FormField(FormField),
    ConsultButton,
    MailButton,
    Outside,
}

pub(crate) fn classify_click(
    page: &Page,
    nav_open: bool,
    scroll_rows: u16,
    cols: u16,
    rows: u16,
    x: u16,
    y: u16,
) -> HitTarget {
    if nav_open {
        if let Some(panel) = page.nav_panel.as_ref() {
            let rect = nav_panel_rect(cols, rows, panel.links.len());
            if rect.contains(x, y) {
                if panel.has_close_control && y == rect.top && span_contains(close_span(rect), x) {
                    return HitTarget::NavClose;
                }
                for index in 0..panel.links.len() {
                    if panel_link_row(rect, index) == Some(y) {
                        return HitTarget::NavLink(index);
                    }
                }
                return HitTarget::NavPanelBackground;
            }
        }
    }

    if y == 0 {
        return classify_header_click(page, cols, x);
    }

    if rows >= 2 && y == rows - 1 {
        if let Some(toggle) = page.motion_toggle.as_ref() {
            if span_contains(layout::motion_span(&toggle.label), x) {
                return HitTarget::MotionToggle;
            }
        }
        return HitTarget::Outside;
    }

    if let Some(form) = form_layout(page, scroll_rows, cols, rows) {
        if form.buttons_row == Some(y) {
            if span_contains(form.consult_span, x) {
                return HitTarget::ConsultButton;
            }
            if span_contains(form.mail_span, x) {
                return HitTarget::MailButton;
            }
        }
        if span_contains(form.field_span, x) {
            if form.name_row == Some(y) {
                return HitTarget::FormField(FormField::Name);
            }
            if form.email_row == Some(y) {
                return HitTarget::FormField(FormField::Email);
            }
            if form.message_row == Some(y) {
                return HitTarget::FormField(FormField::Message);
            }
        }
    }

    HitTarget::Outside
}

fn classify_header_click(page: &Page, cols: u16, x: u16) -> HitTarget {
    if page.nav_toggle.is_some() && span_contains(toggle_span(cols), x) {
        return HitTarget::NavToggle;
    }
    let (width_px, _) = viewport_px(cols, 2);
    if width_px >= DESKTOP_MIN_WIDTH_PX {
        for link in header_link_spans(page, cols) {
            if span_contains(link.span, x) {
                return HitTarget::HeaderLink(link.target);
            }
        }
    }
    HitTarget::Outside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{doc_row, FORM_BUTTONS_ROW_OFFSET, FORM_NAME_ROW_OFFSET};

    const COLS: u16 = 50;
    const ROWS: u16 = 20;

    fn classify(page: &Page, open: bool, scroll_rows: u16, x: u16, y: u16) -> HitTarget {
        classify_click(page, open, scroll_rows, COLS, ROWS, x, y)
    }

    #[test]
    fn toggle_is_hit_in_the_header_corner() {
        let page = Page::standard();
        let span = toggle_span(COLS);
        assert_eq!(classify(&page, false, 0, span.0, 0), HitTarget::NavToggle);
        assert_eq!(classify(&page, true, 0, span.0, 0), HitTarget::NavToggle);
        assert_eq!(classify(&page, false, 0, 2, 0), HitTarget::Outside);
    }

    #[test]
    fn open_drawer_classifies_close_links_and_background() {
        let page = Page::standard();
        let links = page.nav_panel.as_ref().expect("panel").links.len();
        let rect = nav_panel_rect(COLS, ROWS, links);
        let close = close_span(rect);

        assert_eq!(
            classify(&page, true, 0, close.0, rect.top),
            HitTarget::NavClose
        );
        assert_eq!(
            classify(&page, true, 0, rect.left + 2, rect.top + 1),
            HitTarget::NavLink(0)
        );
        assert_eq!(
            classify(&page, true, 0, rect.left + 2, rect.top + 3),
            HitTarget::NavLink(2)
        );
        // Bottom border row of the drawer is background, not a link.
        assert_eq!(
            classify(&page, true, 0, rect.left + 2, rect.top + rect.height - 1),
            HitTarget::NavPanelBackground
        );
        // Left of the drawer is outside it.
        assert_eq!(
            classify(&page, true, 0, rect.left - 1, rect.top + 1),
            HitTarget::Outside
        );
    }

    #[test]
    fn closed_drawer_region_is_plain_page() {
        let page = Page::standard();
        let rect = nav_panel_rect(COLS, ROWS, 3);
        assert_eq!(
            classify(&page, false, 0, rect.left + 2, rect.top + 1),
            HitTarget::Outside
        );
    }

    #[test]
    fn motion_toggle_lives_in_the_footer() {
        let page = Page::standard();
        assert_eq!(classify(&page, false, 0, 2, ROWS - 1), HitTarget::MotionToggle);
        assert_eq!(classify(&page, false, 0, 40, ROWS - 1), HitTarget::Outside);

        let mut bare = Page::standard();
        bare.motion_toggle = None;
        assert_eq!(classify(&bare, false, 0, 2, ROWS - 1), HitTarget::Outside);
    }

    #[test]
    fn header_links_only_hit_on_wide_layouts() {
        let page = Page::standard();
        // 100 cols is 800 logical px: desktop layout.
        let wide = classify_click(&page, false, 0, 100, ROWS, 17, 0);
        assert_eq!(wide, HitTarget::HeaderLink("about".to_string()));
        // 50 cols is 400 px: links are inside the drawer instead.
        assert_eq!(classify(&page, false, 0, 17, 0), HitTarget::Outside);
    }

    #[test]
    fn contact_form_fields_and_buttons_hit_when_scrolled_into_view() {
        let page = Page::standard();
        let contact_top = doc_row(page.find_section("contact").expect("contact").top);
        let name_row = 1 + FORM_NAME_ROW_OFFSET;
        let buttons_row = 1 + FORM_BUTTONS_ROW_OFFSET;

        assert_eq!(
            classify(&page, false, contact_top, 10, name_row),
            HitTarget::FormField(FormField::Name)
        );
        let form = form_layout(&page, contact_top, COLS, ROWS).expect("form");
        assert_eq!(
            classify(&page, false, contact_top, form.consult_span.0, buttons_row),
            HitTarget::ConsultButton
        );
        assert_eq!(
            classify(&page, false, contact_top, form.mail_span.0, buttons_row),
            HitTarget::MailButton
        );
        // Same coordinates without the scroll are plain page.
        assert_eq!(classify(&page, false, 0, 10, name_row), HitTarget::Outside);
    }

    #[test]
    fn drawer_background_shadows_the_form_behind_it() {
        let page = Page::standard();
        let contact_top = doc_row(page.find_section("contact").expect("contact").top);
        let rect = nav_panel_rect(COLS, ROWS, 3);
        let name_row = 1 + FORM_NAME_ROW_OFFSET;
        // A form field row under the open drawer hits the drawer, not the form.
        if rect.contains(rect.left + 1, name_row) {
            let hit = classify(&page, true, contact_top, rect.left + 1, name_row);
            assert_ne!(hit, HitTarget::FormField(FormField::Name));
        }
    }
}
