//! Reveal animations.
//!
//! Elements start hidden via the stylesheet and are moved to their terminal
//! state when they scroll into view. The terminal state depends only on the
//! element's declared animation kind and is computed by [`terminal_style`],
//! which both the visibility watcher and the load-time hero sequencer use.
//! An element is revealed at most once; the `animated` marker class records
//! that it has been.
//!
//! This module also owns the smaller style-only effects: whole-section
//! reveals, skill bar widths, card hover transforms and the body fade-in.

#[cfg(test)]
#[path = "animate_test.rs"]
mod animate_test;

use crate::config::PageConfig;
use crate::consts;
use crate::dom::{Dom, Watcher};
use crate::task::Task;

/// Declared `data-animation` kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimationKind {
    SlideUp,
    SlideLeft,
    FadeIn,
    ScaleIn,
    Bounce,
    /// No kind declared, or one this page does not know.
    #[default]
    Generic,
}

impl AnimationKind {
    #[must_use]
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("slide-up") => Self::SlideUp,
            Some("slide-left") => Self::SlideLeft,
            Some("fade-in") => Self::FadeIn,
            Some("scale-in") => Self::ScaleIn,
            Some("bounce") => Self::Bounce,
            _ => Self::Generic,
        }
    }
}

/// Ordered inline style assignments.
pub type StylePatch = Vec<(&'static str, &'static str)>;

/// Terminal style for `kind`. Every kind ends fully opaque.
#[must_use]
pub fn terminal_style(kind: AnimationKind) -> StylePatch {
    let mut patch = vec![("opacity", "1")];
    match kind {
        AnimationKind::SlideUp | AnimationKind::Generic => patch.push(("transform", "translateY(0)")),
        AnimationKind::SlideLeft => patch.push(("transform", "translateX(0)")),
        AnimationKind::FadeIn => {}
        AnimationKind::ScaleIn => patch.push(("transform", "scale(1)")),
        AnimationKind::Bounce => patch.push(("animation", "bounce 2s infinite")),
    }
    patch
}

/// Declared `data-delay` in milliseconds, if present and numeric.
pub fn declared_delay<D: Dom>(dom: &D, node: &D::Node) -> Option<u32> {
    let raw = dom.attribute(node, consts::DELAY_ATTR)?;
    match raw.trim().parse::<u32>() {
        Ok(ms) => Some(ms),
        Err(_) => {
            log::debug!("animate: ignoring non-numeric delay {raw:?}");
            None
        }
    }
}

fn apply_patch<D: Dom>(dom: &mut D, node: &D::Node, patch: &[(&str, &str)]) {
    for (property, value) in patch {
        dom.set_style(node, property, value);
    }
}

/// Register every animated element with the reveal watcher.
pub fn watch_all<D: Dom>(dom: &mut D) {
    let mut nodes = dom.query_all(consts::ANIMATED_SELECTOR);
    for node in dom.query_all(consts::GENERIC_REVEAL_SELECTOR) {
        if !nodes.contains(&node) {
            nodes.push(node);
        }
    }
    log::debug!("animate: watching {} elements", nodes.len());
    for node in &nodes {
        dom.watch(node, Watcher::Reveal);
    }
}

/// Schedule a reveal of `node` after `delay_ms` unless it already ran.
pub fn schedule_reveal<D: Dom>(dom: &mut D, node: &D::Node, delay_ms: u32) {
    if dom.has_class(node, consts::ANIMATED_CLASS) {
        return;
    }
    dom.set_timeout(delay_ms, Task::Reveal { node: node.clone() });
}

/// Reveal watcher fired for `node`.
pub fn on_visible<D: Dom>(dom: &mut D, node: &D::Node) {
    let delay = declared_delay(dom, node).unwrap_or(0);
    schedule_reveal(dom, node, delay);
}

/// Apply the terminal style and mark the element. A second scheduled reveal
/// of the same element is a no-op.
pub fn reveal<D: Dom>(dom: &mut D, node: &D::Node) {
    if dom.has_class(node, consts::ANIMATED_CLASS) {
        return;
    }
    let kind = AnimationKind::from_attr(dom.attribute(node, consts::ANIMATION_ATTR).as_deref());
    apply_patch(dom, node, &terminal_style(kind));
    dom.add_class(node, consts::ANIMATED_CLASS);
}

/// Load-time hero stagger, run once the start delay has elapsed.
pub fn hero_sequence<D: Dom>(config: &PageConfig, dom: &mut D) {
    let hero = dom.query_all(consts::HERO_ANIMATED_SELECTOR);
    for (index, node) in hero.iter().enumerate() {
        let stagger = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(config.hero_stagger_ms);
        let delay = declared_delay(dom, node).unwrap_or(stagger);
        schedule_reveal(dom, node, delay);
    }

    if let Some(visual) = dom.query(consts::HERO_VISUAL_SELECTOR) {
        let delay = config
            .hero_visual_delay_ms
            .saturating_add(declared_delay(dom, &visual).unwrap_or(0));
        schedule_reveal(dom, &visual, delay);
    }

    if dom.query(consts::SCROLL_INDICATOR_SELECTOR).is_some() {
        dom.set_timeout(config.scroll_indicator_delay_ms, Task::ShowScrollIndicator);
    }
}

pub fn show_scroll_indicator<D: Dom>(dom: &mut D) {
    if let Some(indicator) = dom.query(consts::SCROLL_INDICATOR_SELECTOR) {
        dom.set_style(&indicator, "opacity", "1");
    }
}

/// Hide every section and hand it to the section watcher.
pub fn prepare_sections<D: Dom>(dom: &mut D) {
    for section in dom.query_all(consts::SECTION_SELECTOR) {
        dom.set_style(&section, "opacity", "0");
        dom.set_style(&section, "transform", "translateY(30px)");
        dom.set_style(&section, "transition", "opacity 0.6s ease, transform 0.6s ease");
        dom.watch(&section, Watcher::Section);
    }
}

pub fn reveal_section<D: Dom>(dom: &mut D, section: &D::Node) {
    dom.set_style(section, "opacity", "1");
    dom.set_style(section, "transform", "translateY(0)");
}

/// Widen each skill bar in `container` to its declared percentage.
pub fn fill_skill_bars<D: Dom>(dom: &mut D, container: &D::Node) {
    for bar in dom.query_all_within(container, consts::SKILL_BAR_SELECTOR) {
        let Some(percent) = dom.attribute(&bar, consts::PERCENT_ATTR) else {
            continue;
        };
        dom.set_style(&bar, "width", &format!("{}%", percent.trim()));
    }
}

pub fn card_hover<D: Dom>(dom: &mut D, card: &D::Node, entered: bool) {
    let transform = if entered { "translateY(-10px) scale(1.02)" } else { "translateY(0) scale(1)" };
    dom.set_style(card, "transform", transform);
}

/// Load event: drop the body to transparent and schedule the fade back in.
pub fn begin_body_fade<D: Dom>(config: &PageConfig, dom: &mut D) {
    let Some(body) = dom.body() else {
        return;
    };
    dom.set_style(&body, "opacity", "0");
    dom.set_style(&body, "transition", "opacity 0.5s ease");
    dom.set_timeout(config.body_fade_delay_ms, Task::FadeInBody);
}

pub fn finish_body_fade<D: Dom>(dom: &mut D) {
    if let Some(body) = dom.body() {
        dom.set_style(&body, "opacity", "1");
    }
}
