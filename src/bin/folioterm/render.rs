//! Frame rendering. Everything hit-testable is drawn at the cell rectangles
//! the layout module reports, so clicks and pixels never disagree.

use folioterm::contact::FormField;
use folioterm::motion::PlayState;
use folioterm::page::{Focus, Page, Section, DESKTOP_MIN_WIDTH_PX};
use folioterm::reveal::RevealState;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::layout::{
    self, doc_row, header_link_spans, nav_panel_rect, toggle_span, viewport_px, CLOSE_LABEL,
    CONSULT_LABEL, FORM_BUTTONS_ROW_OFFSET, FORM_EMAIL_ROW_OFFSET, FORM_MESSAGE_ROW_OFFSET,
    FORM_NAME_ROW_OFFSET, HEADER_LINKS_START_COL, MAIL_LABEL, TOGGLE_LABEL,
};
use crate::theme::ThemeColors;

const SITE_TITLE: &str = "Studio Folio";

/// Marquee frames for the decorative hero animation.
const WIGGLE_FRAMES: [&str; 4] = ["~·~·~·~·~", "·~·~·~·~·", "~·~·~·~·~", "·~·~·~·~·"];

/// Document row of the wiggle inside the hero section.
const WIGGLE_ROW_OFFSET: u16 = 6;

/// Everything one frame needs, borrowed from the loop state.
pub(crate) struct Screen<'a> {
    pub(crate) page: &'a Page,
    pub(crate) nav_open: bool,
    pub(crate) scroll_rows: u16,
    pub(crate) colors: ThemeColors,
    pub(crate) wiggle_frame: usize,
}

pub(crate) fn draw(frame: &mut Frame, screen: &Screen) {
    let [header_area, content_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(header_line(screen, frame.area().width), header_area);
    frame.render_widget(content(screen), content_area);
    frame.render_widget(footer_line(screen), footer_area);

    if screen.nav_open {
        draw_nav_drawer(frame, screen);
    }
}

fn header_line(screen: &Screen, cols: u16) -> Paragraph<'static> {
    let colors = screen.colors;
    let elevated = screen
        .page
        .header
        .as_ref()
        .is_some_and(|header| header.elevated);
    let title_style = if elevated {
        Style::new()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::new().fg(colors.accent).add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![Span::styled(format!(" {SITE_TITLE}"), title_style)];
    let mut cursor = 1 + layout::label_width(SITE_TITLE);

    let (width_px, _) = viewport_px(cols, 2);
    if width_px >= DESKTOP_MIN_WIDTH_PX {
        for link in header_link_spans(screen.page, cols) {
            pad_to(&mut spans, &mut cursor, link.span.0.max(HEADER_LINKS_START_COL));
            cursor += layout::label_width(&link.label);
            spans.push(Span::styled(link.label, Style::new().fg(colors.text)));
        }
    }

    if screen.page.nav_toggle.is_some() {
        let toggle = toggle_span(cols);
        pad_to(&mut spans, &mut cursor, toggle.0);
        let style = if screen.page.focus == Focus::NavToggle {
            Style::new().fg(colors.highlight).add_modifier(Modifier::REVERSED)
        } else {
            Style::new().fg(colors.accent)
        };
        spans.push(Span::styled(TOGGLE_LABEL, style));
    }

    Paragraph::new(Line::from(spans))
}

fn pad_to(spans: &mut Vec<Span<'static>>, cursor: &mut u16, target: u16) {
    if target > *cursor {
        spans.push(Span::raw(" ".repeat(usize::from(target - *cursor))));
        *cursor = target;
    }
}

fn content(screen: &Screen) -> Paragraph<'static> {
    let page = screen.page;
    let total_rows = doc_row(page.document_height()) + 1;
    let mut lines = vec![Line::default(); usize::from(total_rows)];

    for section in &page.sections {
        render_section(screen, section, &mut lines);
    }

    Paragraph::new(Text::from(lines)).scroll((screen.scroll_rows, 0))
}

fn render_section(screen: &Screen, section: &Section, lines: &mut [Line<'static>]) {
    // Hidden and pending sections hold their space but draw nothing, the
    // reveal timer flips them visible.
    if section.reveal != RevealState::Visible {
        return;
    }
    let colors = screen.colors;
    let top = usize::from(doc_row(section.top));
    set_line(
        lines,
        top,
        Line::from(Span::styled(
            format!("  {}", section.title),
            Style::new().fg(colors.accent).add_modifier(Modifier::BOLD),
        )),
    );
    for (offset, text) in section.body.iter().enumerate() {
        set_line(
            lines,
            top + 2 + offset,
            Line::from(Span::styled(
                format!("  {text}"),
                Style::new().fg(colors.text),
            )),
        );
    }

    if section.id == "home" {
        render_wiggle(screen, top, lines);
    }
    if section.id == folioterm::contact::CONTACT_SECTION_ID {
        render_contact_form(screen, top, lines);
    }
}

fn render_wiggle(screen: &Screen, section_top: usize, lines: &mut [Line<'static>]) {
    let Some(wiggle) = screen.page.wiggle.as_ref() else {
        return;
    };
    let frame = match wiggle.play_state {
        PlayState::Running => screen.wiggle_frame % WIGGLE_FRAMES.len(),
        PlayState::Paused => 0,
    };
    set_line(
        lines,
        section_top + usize::from(WIGGLE_ROW_OFFSET),
        Line::from(Span::styled(
            format!("  {}", WIGGLE_FRAMES[frame]),
            Style::new().fg(screen.colors.highlight),
        )),
    );
}

fn render_contact_form(screen: &Screen, section_top: usize, lines: &mut [Line<'static>]) {
    let Some(form) = screen.page.contact.as_ref() else {
        return;
    };
    let colors = screen.colors;
    let focus = screen.page.focus;

    let field_line = |label: &str, field: FormField| {
        let focused = focus == Focus::FormField(field);
        let value = form.field(field);
        let style = if focused {
            Style::new().fg(colors.highlight).add_modifier(Modifier::REVERSED)
        } else {
            Style::new().fg(colors.text)
        };
        let caret = if focused { "_" } else { "" };
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{label}: "), Style::new().fg(colors.dim)),
            Span::styled(format!("{value}{caret}"), style),
        ])
    };

    set_line(
        lines,
        section_top + usize::from(FORM_NAME_ROW_OFFSET),
        field_line("Name", FormField::Name),
    );
    set_line(
        lines,
        section_top + usize::from(FORM_EMAIL_ROW_OFFSET),
        field_line("Email", FormField::Email),
    );
    set_line(
        lines,
        section_top + usize::from(FORM_MESSAGE_ROW_OFFSET),
        field_line("Message", FormField::Message),
    );

    let button = |label: &str, focused: bool| {
        let style = if focused {
            Style::new().fg(colors.highlight).add_modifier(Modifier::REVERSED)
        } else {
            Style::new().fg(colors.accent)
        };
        Span::styled(label.to_string(), style)
    };
    set_line(
        lines,
        section_top + usize::from(FORM_BUTTONS_ROW_OFFSET),
        Line::from(vec![
            Span::raw("    "),
            button(CONSULT_LABEL, focus == Focus::ConsultButton),
            Span::raw("  "),
            button(MAIL_LABEL, focus == Focus::MailButton),
        ]),
    );
}

fn set_line(lines: &mut [Line<'static>], index: usize, line: Line<'static>) {
    if let Some(slot) = lines.get_mut(index) {
        *slot = line;
    }
}

fn footer_line(screen: &Screen) -> Paragraph<'static> {
    let colors = screen.colors;
    let mut spans = Vec::new();
    if let Some(toggle) = screen.page.motion_toggle.as_ref() {
        let style = if screen.page.focus == Focus::MotionToggle {
            Style::new().fg(colors.highlight).add_modifier(Modifier::REVERSED)
        } else {
            Style::new().fg(colors.accent)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("[{}]", toggle.label), style));
    }
    spans.push(Span::styled(
        "  q quit · esc close · tab focus · m motion",
        Style::new().fg(colors.dim),
    ));
    Paragraph::new(Line::from(spans))
}

fn draw_nav_drawer(frame: &mut Frame, screen: &Screen) {
    let Some(panel) = screen.page.nav_panel.as_ref() else {
        return;
    };
    let colors = screen.colors;
    let area = frame.area();
    let rect = nav_panel_rect(area.width, area.height, panel.links.len());
    let drawer = Rect {
        x: rect.left,
        y: rect.top,
        width: rect.width,
        height: rect.height,
    }
    .intersection(area);

    frame.render_widget(Clear, drawer);

    let mut block = Block::bordered()
        .title(" Menu ")
        .border_style(Style::new().fg(colors.border));
    if panel.has_close_control {
        block = block.title_top(
            Line::from(Span::styled(CLOSE_LABEL, Style::new().fg(colors.accent)))
                .right_aligned(),
        );
    }

    let links: Vec<Line> = panel
        .links
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let style = if screen.page.focus == Focus::NavLink(index) {
                Style::new().fg(colors.highlight).add_modifier(Modifier::REVERSED)
            } else {
                Style::new().fg(colors.text)
            };
            Line::from(Span::styled(format!(" {}", link.label), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(links).block(block), drawer);
}
