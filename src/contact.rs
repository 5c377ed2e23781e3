//! Contact form and `mailto:` draft composition.
//!
//! Independent of the nav overlay. An entirely empty form steers the user to
//! the form itself (scroll plus a deferred focus on the name field); anything
//! filled in composes a percent-encoded `mailto:` URL for the mail client.

use std::time::Duration;

use crate::page::{Focus, Page};

/// Destination the composed draft is addressed to unless overridden.
pub const DEFAULT_CONTACT_ADDRESS: &str = "hello@studiofolio.dev";

/// Section the form lives in; the empty-form fallback scrolls here.
pub const CONTACT_SECTION_ID: &str = "contact";

/// Delay before the deferred focus lands, so the scroll toward the form has
/// visibly begun first.
pub const FOCUS_DEFER: Duration = Duration::from_millis(450);

/// Editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.message.trim().is_empty()
    }
}

/// What activating a contact button resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    /// Form is empty: scroll to it and focus the name field instead of
    /// opening a mail client.
    FocusForm,
    /// Hand this URL to the mail client.
    Navigate(String),
}

/// Resolve a contact button press against the current form contents.
pub fn submit(form: &ContactForm, to: &str) -> ContactAction {
    if form.is_empty() {
        ContactAction::FocusForm
    } else {
        ContactAction::Navigate(compose_mailto(form, to))
    }
}

/// Build the `mailto:` URL with percent-encoded subject and body.
pub fn compose_mailto(form: &ContactForm, to: &str) -> String {
    let name = form.name.trim();
    let subject = if name.is_empty() {
        "Website inquiry".to_string()
    } else {
        format!("Website inquiry from {name}")
    };
    let body = format!(
        "Name: {}\nEmail: {}\nMessage:\n{}\n",
        name,
        form.email.trim(),
        form.message.trim()
    );
    format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// Deferred-focus executor. The form may have been removed between the timer
/// arming and firing; that is a silent no-op.
pub fn focus_form_field(page: &mut Page, field: FormField) {
    if page.contact.is_some() {
        page.focus = Focus::FormField(field);
    }
}
