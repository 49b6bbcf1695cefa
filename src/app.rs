//! Application state and event dispatch.
//!
//! DESIGN
//! ======
//! `App` is built once at startup and owns the page configuration and the
//! preference store. [`App::mount`] wires listeners and watchers through the
//! [`Dom`] trait; afterwards the host feeds every listener firing, visibility
//! change and elapsed timer back through [`App::handle`]. Handlers are
//! independent: none of them coordinates with another, and all deferred work
//! is scheduled as [`Task`] data rather than captured closures.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::animate;
use crate::config::PageConfig;
use crate::consts;
use crate::contact;
use crate::counter;
use crate::dom::{Dom, Event, ListenTarget, Listener, Watcher};
use crate::nav;
use crate::notify;
use crate::store::PreferenceStore;
use crate::task::Task;
use crate::theme;
use crate::typing;

pub struct App<S> {
    config: PageConfig,
    store: S,
}

impl<S: PreferenceStore> App<S> {
    #[must_use]
    pub fn new(config: PageConfig, store: S) -> Self {
        Self { config, store }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply initial state and register every listener and watcher.
    pub fn mount<D: Dom>(&mut self, dom: &mut D) {
        theme::init(&self.config, &self.store, dom);

        animate::watch_all(dom);
        animate::prepare_sections(dom);
        watch_one(dom, consts::SKILLS_SELECTOR, Watcher::SkillBars);
        watch_one(dom, consts::ABOUT_SELECTOR, Watcher::Stats);
        watch_one(dom, consts::HOME_SELECTOR, Watcher::Hero);

        listen_one(dom, consts::THEME_TOGGLE_SELECTOR, Listener::ThemeToggle);
        listen_one(dom, consts::MENU_TOGGLE_SELECTOR, Listener::MenuToggle);
        listen_each(dom, consts::NAV_ANCHOR_SELECTOR, Listener::NavAnchor);
        listen_each(dom, consts::PLACEHOLDER_LINK_SELECTOR, Listener::PlaceholderLink);
        listen_one(dom, consts::SCROLL_ARROW_SELECTOR, Listener::ScrollArrow);
        listen_one(dom, consts::HIRE_BUTTON_SELECTOR, Listener::HireButton);
        listen_one(dom, consts::PORTFOLIO_BUTTON_SELECTOR, Listener::PortfolioButton);
        listen_each(dom, consts::SERVICE_CARD_SELECTOR, Listener::CardEnter);
        listen_each(dom, consts::SERVICE_CARD_SELECTOR, Listener::CardLeave);
        listen_one(dom, consts::CONTACT_FORM_SELECTOR, Listener::ContactSubmit);
        dom.listen(ListenTarget::Document, Listener::OutsideClick);
        dom.listen(ListenTarget::Window, Listener::WindowScroll);
        if dom.loaded() {
            start_load_sequence(&self.config, dom);
        } else {
            dom.listen(ListenTarget::Window, Listener::WindowLoad);
        }

        log::info!("app: mounted");
    }

    /// Route one host event to its handler.
    pub fn handle<D: Dom>(&mut self, dom: &mut D, event: Event<D::Node>) {
        match event {
            Event::Fired { listener, node } => self.on_listener(dom, listener, node),
            Event::Visible { watcher, node } => self.on_visible(dom, watcher, &node),
            Event::Elapsed(task) => self.run(dom, task),
        }
    }

    fn on_listener<D: Dom>(&mut self, dom: &mut D, listener: Listener, node: Option<D::Node>) {
        let config = &self.config;
        match (listener, node) {
            (Listener::ThemeToggle, _) => theme::begin_toggle(config, dom),
            (Listener::MenuToggle, _) => nav::toggle_menu(dom),
            (Listener::NavAnchor, Some(anchor)) => nav::on_anchor_click(config, dom, &anchor),
            (Listener::ScrollArrow, _) => nav::scroll_into_view(dom, consts::ABOUT_SELECTOR),
            (Listener::HireButton, _) => nav::scroll_into_view(dom, consts::CONTACT_SELECTOR),
            (Listener::PortfolioButton, _) => nav::scroll_into_view(dom, consts::SERVICES_SELECTOR),
            (Listener::CardEnter, Some(card)) => animate::card_hover(dom, &card, true),
            (Listener::CardLeave, Some(card)) => animate::card_hover(dom, &card, false),
            (Listener::ContactSubmit, Some(form)) => contact::submit(config, dom, &form),
            (Listener::OutsideClick, target) => nav::on_document_click(dom, target.as_ref()),
            (Listener::WindowScroll, _) => nav::on_scroll(config, dom),
            (Listener::WindowLoad, _) => start_load_sequence(config, dom),
            // Default action already cancelled by the host.
            (Listener::PlaceholderLink, _) => {}
            (listener, None) => log::warn!("app: {listener:?} fired without an element"),
        }
    }

    fn on_visible<D: Dom>(&mut self, dom: &mut D, watcher: Watcher, node: &D::Node) {
        match watcher {
            Watcher::Reveal => animate::on_visible(dom, node),
            Watcher::Section => animate::reveal_section(dom, node),
            Watcher::SkillBars => animate::fill_skill_bars(dom, node),
            Watcher::Stats => counter::start_all(&self.config, dom, node),
            Watcher::Hero => typing::on_hero_visible(&self.config, dom, node),
        }
    }

    fn run<D: Dom>(&mut self, dom: &mut D, task: Task<D::Node>) {
        let config = &self.config;
        match task {
            Task::Reveal { node } => animate::reveal(dom, &node),
            Task::HeroSequence => animate::hero_sequence(config, dom),
            Task::ShowScrollIndicator => animate::show_scroll_indicator(dom),
            Task::FadeInBody => animate::finish_body_fade(dom),
            Task::CommitTheme { theme } => theme::commit(config, &mut self.store, dom, theme),
            Task::CounterTick { node, target, suffix, step } => {
                counter::tick(config, dom, &node, target, suffix, step);
            }
            Task::FinishSubmit { form, button } => contact::finish(config, dom, &form, button.as_ref()),
            Task::SlideIn { node } => notify::slide_in(dom, &node),
            Task::SlideOut { node } => notify::slide_out(config, dom, &node),
            Task::Dismiss { node } => notify::dismiss(dom, &node),
            Task::TypeNext { node, typed } => typing::type_next(config, dom, &node, typed),
        }
    }
}

/// Body fade-in and the delayed hero sequence. Runs once: from the `load`
/// listener, or directly at mount when the page finished loading first.
fn start_load_sequence<D: Dom>(config: &PageConfig, dom: &mut D) {
    animate::begin_body_fade(config, dom);
    dom.set_timeout(config.hero_start_delay_ms, Task::HeroSequence);
}

fn watch_one<D: Dom>(dom: &mut D, selector: &str, watcher: Watcher) {
    if let Some(node) = dom.query(selector) {
        dom.watch(&node, watcher);
    }
}

fn listen_one<D: Dom>(dom: &mut D, selector: &str, listener: Listener) {
    if let Some(node) = dom.query(selector) {
        dom.listen(ListenTarget::Node(node), listener);
    }
}

fn listen_each<D: Dom>(dom: &mut D, selector: &str, listener: Listener) {
    for node in dom.query_all(selector) {
        dom.listen(ListenTarget::Node(node), listener);
    }
}
