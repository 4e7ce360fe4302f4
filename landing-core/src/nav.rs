//! Scroll-position rules for the fixed navigation bar.

use crate::config::LandingConfig;

const NAV_BACKGROUND_SOLID: &str = "rgba(255, 255, 255, 0.98)";
const NAV_BACKGROUND_TRANSLUCENT: &str = "rgba(255, 255, 255, 0.95)";

/// Position of a `section[id]` element on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// Returns the id of the section the visitor is in: the last section, in
/// document order, whose top minus the lead distance has been scrolled past.
pub fn active_section<'a>(
    sections: &'a [SectionOffset],
    scroll_y: f64,
    config: &LandingConfig,
) -> Option<&'a str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - config.section_lead_px)
        .last()
        .map(|section| section.id.as_str())
}

/// Whether a nav link pointing at `href` is the active one.
pub fn is_active_link(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(target), Some(active)) => target == active,
        _ => false,
    }
}

pub fn nav_background(scroll_y: f64, config: &LandingConfig) -> &'static str {
    if scroll_y > config.nav_solid_after_px {
        NAV_BACKGROUND_SOLID
    } else {
        NAV_BACKGROUND_TRANSLUCENT
    }
}

/// Where to scroll so that a section starting at `section_top` ends up right
/// below the fixed navigation bar.
pub fn scroll_target(section_top: f64, config: &LandingConfig) -> f64 {
    section_top - config.nav_height_px
}
