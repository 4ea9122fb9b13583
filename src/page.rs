//! Portfolio page behavior outside the game
//!
//! Selectors, timings and the small state machines behind the navbar, in-page
//! anchors, scroll fade-in and the demo contact form. The DOM side lives in
//! `platform::page`.

/// Hamburger button that opens the mobile menu
pub const NAV_TOGGLE_SELECTOR: &str = ".hamburger";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const NAV_ITEM_SELECTOR: &str = ".nav-links li";
/// Class on the link list while the menu is open
pub const NAV_OPEN_CLASS: &str = "active";
/// Class on the hamburger while the menu is open
pub const HAMBURGER_OPEN_CLASS: &str = "toggle";

/// Same-page links that scroll instead of jumping
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Elements that fade in when they scroll into view
pub const FADE_IN_SELECTOR: &str = ".project-card, .skill-category, .cert-card, \
     .section-title-glow, .hero-content, .about-content, .contact-wrapper";
pub const FADE_IN_CLASS: &str = "fade-in-up";
/// Fraction of the element that must be visible
pub const FADE_IN_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so elements fade in slightly after entering
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const SENDING_LABEL: &str = "Sending...";
/// Simulated send time; nothing leaves the page
pub const CONTACT_SEND_DELAY_MS: i32 = 1500;
pub const SENT_MESSAGE: &str = "Message sent successfully! (This is a demo)";

/// Element id an in-page link points at.
///
/// A bare `#` (or anything not starting with `#`) scrolls nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Simulated contact form submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactForm {
    #[default]
    Idle,
    /// Waiting out the send delay; holds the button label to restore
    Sending { label: String },
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, ContactForm::Sending { .. })
    }

    /// Start a send, given the submit button's current label.
    ///
    /// Returns the label to show while sending, or `None` when a send is
    /// already in flight and this submit should be ignored.
    pub fn submit(&mut self, label: &str) -> Option<&'static str> {
        if self.is_sending() {
            return None;
        }
        *self = ContactForm::Sending {
            label: label.to_string(),
        };
        Some(SENDING_LABEL)
    }

    /// Finish the send; returns the original button label
    pub fn complete(&mut self) -> Option<String> {
        match std::mem::take(self) {
            ContactForm::Sending { label } => Some(label),
            ContactForm::Idle => None,
        }
    }
}
