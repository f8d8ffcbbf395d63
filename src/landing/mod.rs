//! Marketing page of the ceiling-installation business.

use maud::Markup;

use crate::config::ContactConfig;

pub mod content;
mod render;

/// One rendering of the landing page. The only state is whether the
/// floating WhatsApp popover is open.
#[derive(Debug, Clone)]
pub struct LandingPage<'a> {
    contact: &'a ContactConfig,
    whatsapp_open: bool,
}

impl<'a> LandingPage<'a> {
    pub fn new(contact: &'a ContactConfig) -> Self {
        Self {
            contact,
            whatsapp_open: false,
        }
    }

    pub fn with_whatsapp_open(mut self, open: bool) -> Self {
        self.whatsapp_open = open;
        self
    }

    pub fn toggle_whatsapp(&mut self) {
        self.whatsapp_open = !self.whatsapp_open;
    }

    /// The same page with the popover flipped; the floating button links there.
    pub fn toggled(&self) -> Self {
        let mut next = self.clone();
        next.toggle_whatsapp();
        next
    }

    /// Path that renders this state of the page.
    pub fn href(&self) -> &'static str {
        if self.whatsapp_open {
            "/?contact=open"
        } else {
            "/"
        }
    }

    pub fn whatsapp_open(&self) -> bool {
        self.whatsapp_open
    }

    pub fn contact(&self) -> &ContactConfig {
        self.contact
    }

    pub fn render(&self) -> Markup {
        render::render_landing(self)
    }
}
