//! Dark/light theme preference.
//!
//! The preference is persisted as `"dark"` or `"light"` and mirrored onto the
//! `data-theme` attribute of `<html>`, which the stylesheet keys off. The
//! toggle control spins for a moment before the swap lands.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::PageConfig;
use crate::consts;
use crate::dom::Dom;
use crate::store::PreferenceStore;
use crate::task::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored or attribute value. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon shown on the toggle: the sun offers light mode, the moon dark.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-sun",
            Self::Light => "fas fa-moon",
        }
    }
}

/// The persisted preference, defaulting to dark.
pub fn stored<S: PreferenceStore>(config: &PageConfig, store: &S) -> Theme {
    let raw = store.get_or(&config.theme_storage_key, Theme::default().as_str());
    Theme::from_name(&raw).unwrap_or_else(|| {
        log::warn!("theme: ignoring unknown stored theme {raw:?}");
        Theme::default()
    })
}

/// The theme currently on the document root.
pub fn current<D: Dom>(dom: &D) -> Theme {
    dom.root()
        .and_then(|root| dom.attribute(&root, consts::THEME_ATTR))
        .and_then(|name| Theme::from_name(&name))
        .unwrap_or_default()
}

/// Set the root attribute and the toggle icon.
pub fn apply<D: Dom>(dom: &mut D, theme: Theme) {
    if let Some(root) = dom.root() {
        dom.set_attribute(&root, consts::THEME_ATTR, theme.as_str());
    }
    let icon = dom
        .query(consts::THEME_TOGGLE_SELECTOR)
        .and_then(|toggle| dom.query_within(&toggle, consts::THEME_ICON_SELECTOR));
    if let Some(icon) = icon {
        dom.set_class_name(&icon, theme.icon_class());
    }
}

/// Apply the persisted preference at startup.
pub fn init<D: Dom, S: PreferenceStore>(config: &PageConfig, store: &S, dom: &mut D) -> Theme {
    let theme = stored(config, store);
    apply(dom, theme);
    log::info!("theme: starting in {}", theme.as_str());
    theme
}

/// Toggle click: spin the control and schedule the swap.
pub fn begin_toggle<D: Dom>(config: &PageConfig, dom: &mut D) {
    let next = current(dom).toggled();
    if let Some(toggle) = dom.query(consts::THEME_TOGGLE_SELECTOR) {
        dom.set_style(&toggle, "transform", "rotate(360deg)");
    }
    dom.set_timeout(config.theme_swap_delay_ms, Task::CommitTheme { theme: next });
}

/// Land a toggle: apply, persist, and settle the control.
pub fn commit<D: Dom, S: PreferenceStore>(config: &PageConfig, store: &mut S, dom: &mut D, theme: Theme) {
    apply(dom, theme);
    if let Err(err) = store.set(&config.theme_storage_key, theme.as_str()) {
        log::warn!("theme: could not persist {}: {err}", theme.as_str());
    }
    if let Some(toggle) = dom.query(consts::THEME_TOGGLE_SELECTOR) {
        dom.set_style(&toggle, "transform", "rotate(0deg)");
    }
    log::info!("theme: switched to {}", theme.as_str());
}
