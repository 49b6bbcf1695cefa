//! Toast notifications.
//!
//! At most one notification is on the page: showing a new one removes the
//! previous element first. Each toast slides in from the right, stays for the
//! configured lifetime, slides back out and is then detached. Timers belonging
//! to a toast that was replaced early still fire against the detached element.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::config::PageConfig;
use crate::consts;
use crate::dom::Dom;
use crate::task::Task;

const HIDDEN_TRANSFORM: &str = "translateX(400px)";
const SHOWN_TRANSFORM: &str = "translateX(0)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "var(--accent-primary)",
            Self::Error => "#e74c3c",
        }
    }
}

/// Inline style for a freshly created, still off-screen toast.
#[must_use]
pub fn css_for(severity: Severity) -> String {
    format!(
        "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
         padding: 15px 20px; border-radius: 8px; box-shadow: 0 4px 15px var(--shadow-medium); \
         z-index: 1001; transform: {HIDDEN_TRANSFORM}; transition: transform 0.3s ease; \
         max-width: 300px; font-weight: 500;",
        severity.background()
    )
}

/// Replace any visible toast with `message`.
pub fn show<D: Dom>(config: &PageConfig, dom: &mut D, message: &str, severity: Severity) -> Option<D::Node> {
    if let Some(existing) = dom.query(consts::NOTIFICATION_SELECTOR) {
        dom.remove(&existing);
    }

    let body = dom.body()?;
    let node = dom.create_element("div")?;
    dom.set_class_name(&node, &format!("notification {}", severity.class_name()));
    dom.set_text(&node, message);
    dom.set_css_text(&node, &css_for(severity));
    dom.append_child(&body, &node);

    dom.set_timeout(config.notification_slide_in_ms, Task::SlideIn { node: node.clone() });
    dom.set_timeout(config.notification_lifetime_ms, Task::SlideOut { node: node.clone() });
    log::debug!("notify: {} {message:?}", severity.class_name());
    Some(node)
}

pub fn slide_in<D: Dom>(dom: &mut D, node: &D::Node) {
    dom.set_style(node, "transform", SHOWN_TRANSFORM);
}

pub fn slide_out<D: Dom>(config: &PageConfig, dom: &mut D, node: &D::Node) {
    dom.set_style(node, "transform", HIDDEN_TRANSFORM);
    dom.set_timeout(config.notification_exit_ms, Task::Dismiss { node: node.clone() });
}

pub fn dismiss<D: Dom>(dom: &mut D, node: &D::Node) {
    if dom.is_attached(node) {
        dom.remove(node);
    }
}
