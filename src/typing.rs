//! Typewriter effect for the hero heading.
//!
//! Runs once per page view, the first time `#home` becomes visible. The text
//! is written one character at a time, the first immediately.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::config::PageConfig;
use crate::consts;
use crate::dom::Dom;
use crate::task::Task;

/// The first `count` characters of `text`.
#[must_use]
pub fn prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// `#home` became visible.
pub fn on_hero_visible<D: Dom>(config: &PageConfig, dom: &mut D, section: &D::Node) {
    let Some(heading) = dom.query_within(section, consts::HERO_NAME_SELECTOR) else {
        return;
    };
    if dom.has_class(&heading, consts::TYPED_CLASS) {
        return;
    }
    dom.add_class(&heading, consts::TYPED_CLASS);
    dom.set_text(&heading, "");
    type_next(config, dom, &heading, 0);
}

/// Write character `typed` and schedule the next one.
pub fn type_next<D: Dom>(config: &PageConfig, dom: &mut D, node: &D::Node, typed: usize) {
    let total = config.typed_text.chars().count();
    if typed >= total {
        return;
    }
    dom.set_text(node, prefix(&config.typed_text, typed + 1));
    if typed + 1 < total {
        dom.set_timeout(config.type_speed_ms, Task::TypeNext { node: node.clone(), typed: typed + 1 });
    }
}
