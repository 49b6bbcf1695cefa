//! Document capability trait and the events it delivers.
//!
//! DESIGN
//! ======
//! Handlers never touch `web_sys` directly. Everything they need from the
//! page (querying, attributes, classes, inline style, text, layout metrics,
//! scrolling, form controls, timers, visibility watchers and listeners) goes
//! through [`Dom`]. The browser adapter implements it on top of `web-sys`;
//! tests implement it with an in-memory tree and a virtual clock.
//!
//! Mutating calls return nothing. A failure inside the host is the host's to
//! log; the page script has no recovery path for a rejected style write.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::fmt::Debug;

use crate::task::Task;

/// Something a listener can be attached to.
#[derive(Debug, Clone, PartialEq)]
pub enum ListenTarget<N> {
    Window,
    Document,
    Node(N),
}

/// Named event handlers the application registers at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    ThemeToggle,
    MenuToggle,
    NavAnchor,
    ScrollArrow,
    HireButton,
    PortfolioButton,
    CardEnter,
    CardLeave,
    ContactSubmit,
    PlaceholderLink,
    OutsideClick,
    WindowScroll,
    WindowLoad,
}

impl Listener {
    /// DOM event type this listener subscribes to.
    #[must_use]
    pub fn event_type(self) -> &'static str {
        match self {
            Self::CardEnter => "mouseenter",
            Self::CardLeave => "mouseleave",
            Self::ContactSubmit => "submit",
            Self::WindowScroll => "scroll",
            Self::WindowLoad => "load",
            Self::ThemeToggle
            | Self::MenuToggle
            | Self::NavAnchor
            | Self::ScrollArrow
            | Self::HireButton
            | Self::PortfolioButton
            | Self::PlaceholderLink
            | Self::OutsideClick => "click",
        }
    }

    /// Whether the host must cancel the browser's default action.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::NavAnchor | Self::ContactSubmit | Self::PlaceholderLink)
    }
}

/// Visibility watchers, one per observer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Watcher {
    /// Declarative reveal animations.
    Reveal,
    /// Whole-section fade/slide in.
    Section,
    /// Skill progress bars inside `#skills`.
    SkillBars,
    /// Stat counters inside `#about`.
    Stats,
    /// Typing effect inside `#home`.
    Hero,
}

impl Watcher {
    /// Visible fraction that triggers the watcher.
    #[must_use]
    pub fn threshold(self) -> f64 {
        match self {
            Self::Reveal | Self::Section => 0.1,
            Self::SkillBars | Self::Stats => 0.5,
            Self::Hero => 0.3,
        }
    }

    /// Root margin applied to the viewport, CSS shorthand.
    #[must_use]
    pub fn root_margin(self) -> &'static str {
        match self {
            Self::Reveal | Self::Section => "0px 0px -50px 0px",
            Self::SkillBars | Self::Stats => "0px 0px -100px 0px",
            Self::Hero => "0px",
        }
    }
}

/// Everything the host can deliver to [`crate::App::handle`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event<N> {
    /// A registered listener fired. `node` is the element the listener is
    /// attached to; for [`ListenTarget::Document`] listeners it is the event
    /// target instead, and for window listeners it is `None`.
    Fired { listener: Listener, node: Option<N> },
    /// A watched element crossed its watcher's threshold into view.
    Visible { watcher: Watcher, node: N },
    /// A timer scheduled with [`Dom::set_timeout`] elapsed.
    Elapsed(Task<N>),
}

/// Capabilities the page handlers need from the host document.
pub trait Dom {
    /// Handle to an element. Cheap to clone; may outlive the element's
    /// attachment to the document.
    type Node: Clone + PartialEq + Debug;

    // --- Queries ---

    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn query_within(&self, root: &Self::Node, selector: &str) -> Option<Self::Node>;
    fn query_all_within(&self, root: &Self::Node, selector: &str) -> Vec<Self::Node>;
    /// `node` itself or its nearest ancestor matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;
    /// The `<html>` element.
    fn root(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;

    // --- Attributes & classes ---

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);
    fn toggle_class(&mut self, node: &Self::Node, class: &str);
    /// Replace the whole class list.
    fn set_class_name(&mut self, node: &Self::Node, class_name: &str);

    // --- Style & text ---

    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);
    /// Replace the whole inline style declaration.
    fn set_css_text(&mut self, node: &Self::Node, css: &str);
    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&mut self, node: &Self::Node, text: &str);

    // --- Tree ---

    fn create_element(&mut self, tag: &str) -> Option<Self::Node>;
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);
    /// Detach `node` from the document.
    fn remove(&mut self, node: &Self::Node);
    fn is_attached(&self, node: &Self::Node) -> bool;

    // --- Layout & scrolling ---

    /// Whether the window `load` event has already fired.
    fn loaded(&self) -> bool;

    fn offset_top(&self, node: &Self::Node) -> f64;
    fn client_height(&self, node: &Self::Node) -> f64;
    fn scroll_y(&self) -> f64;
    /// Smooth-scroll the window to the vertical offset `top`.
    fn scroll_to(&mut self, top: f64);
    /// Smooth-scroll so `node` is aligned with the top of the viewport.
    fn scroll_into_view(&mut self, node: &Self::Node);

    // --- Forms ---

    /// Form data value for the control named `name` inside `form`.
    fn field_value(&self, form: &Self::Node, name: &str) -> Option<String>;
    fn reset_form(&mut self, form: &Self::Node);
    fn set_disabled(&mut self, node: &Self::Node, disabled: bool);

    // --- Scheduling & wiring ---

    /// Deliver `task` back as [`Event::Elapsed`] after `delay_ms`.
    fn set_timeout(&mut self, delay_ms: u32, task: Task<Self::Node>);
    /// Deliver [`Event::Visible`] whenever `node` scrolls into view.
    fn watch(&mut self, node: &Self::Node, watcher: Watcher);
    /// Deliver [`Event::Fired`] whenever `listener`'s event hits `target`.
    fn listen(&mut self, target: ListenTarget<Self::Node>, listener: Listener);
}
