use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;
use crate::error::{self, DomError};

/// Where to scroll so a section sits just below the fixed navbar.
pub fn section_scroll_top(offset_top: f64, nav_height: f64) -> f64 {
    (offset_top - nav_height).max(0.0)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLLED_THRESHOLD_PX
}

/// Section id for an in-page link, `None` for anything that is not a
/// plain `#fragment`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scrolls to the section behind an in-page link. Links whose
/// section is missing do nothing.
pub fn scroll_to_fragment(href: &str) -> Result<(), DomError> {
    let Some(id) = fragment_target(href) else {
        return Ok(());
    };
    let Some(section) = error::document()?.get_element_by_id(id) else {
        debug!("No section #{} to scroll to", id);
        return Ok(());
    };
    let section: HtmlElement = section
        .dyn_into()
        .map_err(|_| DomError::NotFound(format!("#{}", id)))?;

    let options = ScrollToOptions::new();
    options.set_top(section_scroll_top(f64::from(section.offset_top()), config::NAV_HEIGHT_PX));
    options.set_behavior(ScrollBehavior::Smooth);
    error::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_y() -> f64 {
    error::window()
        .ok()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_for_fixed_navbar() {
        assert_eq!(section_scroll_top(800.0, 70.0), 730.0);
        assert_eq!(section_scroll_top(30.0, 70.0), 0.0);
    }

    #[test]
    fn navbar_turns_solid_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn only_fragments_are_scroll_targets() {
        assert_eq!(fragment_target("#pricing"), Some("pricing"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/pricing"), None);
    }
}
