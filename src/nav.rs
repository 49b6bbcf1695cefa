//! Navigation: mobile menu, smooth in-page scrolling, active link
//! highlighting and the scrolled nav background.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::PageConfig;
use crate::consts;
use crate::dom::Dom;

/// A section's id and vertical extent, in document pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section the reader is in.
///
/// A section is current when `scroll_y` lies in
/// `[top - lookahead, top - lookahead + height)`. Later sections win ties.
#[must_use]
pub fn current_section(sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let start = s.top - lookahead;
            scroll_y >= start && scroll_y < start + s.height
        })
        .map(|s| s.id.as_str())
}

pub fn toggle_menu<D: Dom>(dom: &mut D) {
    if let Some(menu) = dom.query(consts::NAV_MENU_SELECTOR) {
        dom.toggle_class(&menu, consts::ACTIVE_CLASS);
    }
}

pub fn close_menu<D: Dom>(dom: &mut D) {
    if let Some(menu) = dom.query(consts::NAV_MENU_SELECTOR) {
        dom.remove_class(&menu, consts::ACTIVE_CLASS);
    }
}

/// Document click: close the open menu when the click landed outside the nav.
pub fn on_document_click<D: Dom>(dom: &mut D, target: Option<&D::Node>) {
    let inside_nav = target.is_some_and(|t| dom.closest(t, consts::NAV_SELECTOR).is_some());
    if inside_nav {
        return;
    }
    if let Some(menu) = dom.query(consts::NAV_MENU_SELECTOR) {
        if dom.has_class(&menu, consts::ACTIVE_CLASS) {
            dom.remove_class(&menu, consts::ACTIVE_CLASS);
        }
    }
}

/// Nav anchor click: scroll to the section below the sticky header.
pub fn on_anchor_click<D: Dom>(config: &PageConfig, dom: &mut D, anchor: &D::Node) {
    let target = dom
        .attribute(anchor, consts::HREF_ATTR)
        .and_then(|href| dom.query(&href));
    if let Some(target) = target {
        let top = dom.offset_top(&target) - config.nav_offset_px;
        dom.scroll_to(top);
    }
    close_menu(dom);
}

/// Smooth-scroll `selector`'s element to the top of the viewport.
pub fn scroll_into_view<D: Dom>(dom: &mut D, selector: &str) {
    match dom.query(selector) {
        Some(target) => dom.scroll_into_view(&target),
        None => log::debug!("nav: no {selector} to scroll to"),
    }
}

/// Window scroll: highlight the current link and swap the nav background.
pub fn on_scroll<D: Dom>(config: &PageConfig, dom: &mut D) {
    let scroll_y = dom.scroll_y();
    highlight_active_link(config, dom, scroll_y);
    update_background(config, dom, scroll_y);
}

fn highlight_active_link<D: Dom>(config: &PageConfig, dom: &mut D, scroll_y: f64) {
    let sections: Vec<SectionBounds> = dom
        .query_all(consts::SECTION_SELECTOR)
        .iter()
        .filter_map(|node| {
            let id = dom.attribute(node, consts::ID_ATTR).filter(|id| !id.is_empty())?;
            Some(SectionBounds { id, top: dom.offset_top(node), height: dom.client_height(node) })
        })
        .collect();
    let active_href = current_section(&sections, scroll_y, config.section_lookahead_px)
        .map(|id| format!("#{id}"))
        .unwrap_or_default();

    for link in dom.query_all(consts::NAV_ANCHOR_SELECTOR) {
        dom.remove_class(&link, consts::ACTIVE_CLASS);
        if !active_href.is_empty() && dom.attribute(&link, consts::HREF_ATTR).as_deref() == Some(active_href.as_str()) {
            dom.add_class(&link, consts::ACTIVE_CLASS);
        }
    }
}

fn update_background<D: Dom>(config: &PageConfig, dom: &mut D, scroll_y: f64) {
    let Some(nav) = dom.query(consts::NAV_SELECTOR) else {
        return;
    };
    if scroll_y > config.nav_scroll_threshold_px {
        dom.set_style(&nav, "background", "var(--nav-bg-scroll)");
        dom.set_style(&nav, "box-shadow", "0 2px 20px var(--shadow-medium)");
    } else {
        dom.set_style(&nav, "background", "var(--nav-bg)");
        dom.set_style(&nav, "box-shadow", "0 2px 10px var(--shadow-light)");
    }
}
