//! Test support: a fake document, a harness that drives [`App`] against it,
//! and a fixture resembling the real portfolio page.

mod fake_dom;

pub(crate) use fake_dom::{FakeDom, NodeId};

use crate::app::App;
use crate::config::PageConfig;
use crate::dom::{Event, ListenTarget, Listener, Watcher};
use crate::store::MemoryStore;

/// Upper bound on timers drained by [`Harness::settle`].
const SETTLE_LIMIT: usize = 10_000;

pub(crate) struct Harness {
    pub app: App<MemoryStore>,
    pub dom: FakeDom,
}

impl Harness {
    /// Mount a default-configured app with an empty store.
    pub fn new(dom: FakeDom) -> Self {
        Self::with(dom, PageConfig::default(), MemoryStore::new())
    }

    pub fn with(mut dom: FakeDom, config: PageConfig, store: MemoryStore) -> Self {
        let mut app = App::new(config, store);
        app.mount(&mut dom);
        Self { app, dom }
    }

    pub fn fire(&mut self, listener: Listener, node: Option<NodeId>) {
        self.app.handle(&mut self.dom, Event::Fired { listener, node });
    }

    /// Click `node`: element listeners on it and its ancestors, then the
    /// document-level listeners with `node` as the event target.
    pub fn click(&mut self, node: NodeId) {
        let mut path = vec![node];
        let mut cursor = node;
        while let Some(parent) = self.dom.parent(cursor) {
            path.push(parent);
            cursor = parent;
        }
        for current in path {
            for listener in self.dom.listeners_of(&ListenTarget::Node(current)) {
                if listener.event_type() == "click" {
                    self.fire(listener, Some(current));
                }
            }
        }
        for listener in self.dom.listeners_of(&ListenTarget::Document) {
            if listener.event_type() == "click" {
                self.fire(listener, Some(node));
            }
        }
    }

    pub fn visible(&mut self, node: NodeId) {
        for watcher in self.dom.watchers_of(node) {
            self.app.handle(&mut self.dom, Event::Visible { watcher, node });
        }
    }

    pub fn visible_as(&mut self, watcher: Watcher, node: NodeId) {
        self.app.handle(&mut self.dom, Event::Visible { watcher, node });
    }

    /// Move the clock forward by `ms`, running every timer that comes due,
    /// including ones scheduled along the way.
    pub fn advance(&mut self, ms: u64) {
        let until = self.dom.now() + ms;
        while let Some(task) = self.dom.take_due(until) {
            self.app.handle(&mut self.dom, Event::Elapsed(task));
        }
        self.dom.set_now(until);
    }

    /// Run timers until none are left.
    pub fn settle(&mut self) {
        for _ in 0..SETTLE_LIMIT {
            let Some(task) = self.dom.take_due(u64::MAX) else {
                return;
            };
            self.app.handle(&mut self.dom, Event::Elapsed(task));
        }
        panic!("timers did not settle after {SETTLE_LIMIT} tasks");
    }
}

/// Node handles of the fixture page.
pub(crate) struct Page {
    pub nav: NodeId,
    pub menu: NodeId,
    pub menu_toggle: NodeId,
    pub theme_toggle: NodeId,
    pub theme_icon: NodeId,
    pub nav_home: NodeId,
    pub nav_about: NodeId,
    pub nav_contact: NodeId,
    pub home: NodeId,
    pub hero_name: NodeId,
    pub hero_title: NodeId,
    pub hero_tagline: NodeId,
    pub hero_visual: NodeId,
    pub scroll_indicator: NodeId,
    pub scroll_arrow: NodeId,
    pub hire_btn: NodeId,
    pub portfolio_btn: NodeId,
    pub about: NodeId,
    pub about_title: NodeId,
    pub about_paragraph: NodeId,
    pub stat_projects: NodeId,
    pub stat_rate: NodeId,
    pub skills: NodeId,
    pub skill_category: NodeId,
    pub skill_bar: NodeId,
    pub services: NodeId,
    pub service_card: NodeId,
    pub contact: NodeId,
    pub form: NodeId,
    pub name_field: NodeId,
    pub email_field: NodeId,
    pub message_field: NodeId,
    pub submit_btn: NodeId,
    pub placeholder_link: NodeId,
}

/// Build a document shaped like the portfolio page.
pub(crate) fn portfolio_page() -> (FakeDom, Page) {
    let mut dom = FakeDom::new();
    let body = FakeDom::BODY;

    let nav = dom.add(body, "nav", &[("class", "nav")]);
    let menu_toggle = dom.add(nav, "button", &[("class", "menu-toggle")]);
    let theme_toggle = dom.add(nav, "button", &[("id", "themeToggle")]);
    let theme_icon = dom.add(theme_toggle, "i", &[("class", "fas fa-sun")]);
    let menu = dom.add(nav, "ul", &[("class", "main")]);
    let nav_home = dom.add(menu, "a", &[("href", "#home")]);
    let nav_about = dom.add(menu, "a", &[("href", "#about")]);
    let nav_contact = dom.add(menu, "a", &[("href", "#contact")]);

    let home = dom.add(body, "section", &[("id", "home"), ("class", "section hero")]);
    dom.set_layout(home, 0.0, 800.0);
    let hero_text = dom.add(home, "div", &[("class", "hero-text")]);
    let hero_name = dom.add_text(hero_text, "h1", &[("class", "hero-name"), ("data-animation", "slide-up")], "Prannav R");
    let hero_title = dom.add(hero_text, "h2", &[("data-animation", "fade-in")]);
    let hero_tagline = dom.add(hero_text, "p", &[("data-animation", "slide-left"), ("data-delay", "700")]);
    let hire_btn = dom.add(hero_text, "button", &[("class", "hire-btn")]);
    let portfolio_btn = dom.add(hero_text, "button", &[("class", "portfolio-btn")]);
    let hero_visual = dom.add(home, "div", &[("class", "hero-visual"), ("data-animation", "scale-in")]);
    let scroll_indicator = dom.add(home, "div", &[("class", "scroll-indicator")]);
    let scroll_arrow = dom.add(scroll_indicator, "span", &[("class", "scroll-arrow")]);

    let about = dom.add(body, "section", &[("id", "about"), ("class", "section")]);
    dom.set_layout(about, 800.0, 600.0);
    let about_title = dom.add(about, "h2", &[("class", "section-title")]);
    let about_text = dom.add(about, "div", &[("class", "about-text")]);
    let about_paragraph = dom.add(about_text, "p", &[]);
    let stat_a = dom.add(about, "div", &[("class", "stat")]);
    let stat_projects = dom.add_text(stat_a, "h3", &[], "120+");
    let stat_b = dom.add(about, "div", &[("class", "stat")]);
    let stat_rate = dom.add_text(stat_b, "h3", &[], "95%");

    let skills = dom.add(body, "section", &[("id", "skills"), ("class", "section")]);
    dom.set_layout(skills, 1400.0, 500.0);
    let skill_category = dom.add(skills, "div", &[("class", "skill-category")]);
    let skill_bar = dom.add(skill_category, "div", &[("class", "skill-progress"), ("data-percent", "85")]);

    let services = dom.add(body, "section", &[("id", "services"), ("class", "section")]);
    dom.set_layout(services, 1900.0, 500.0);
    let service_card = dom.add(services, "div", &[("class", "service-card"), ("data-animation", "bounce")]);

    let contact = dom.add(body, "section", &[("id", "contact"), ("class", "section")]);
    dom.set_layout(contact, 2400.0, 700.0);
    let form = dom.add(contact, "form", &[("id", "contactForm")]);
    let name_field = dom.add(form, "input", &[("name", "name"), ("value", "")]);
    let email_field = dom.add(form, "input", &[("name", "email"), ("value", "")]);
    let message_field = dom.add(form, "textarea", &[("name", "message"), ("value", "")]);
    let submit_btn = dom.add_text(form, "button", &[("class", "submit-btn")], "Send Message");

    let footer = dom.add(body, "footer", &[]);
    let placeholder_link = dom.add(footer, "a", &[("href", "#")]);

    let page = Page {
        nav,
        menu,
        menu_toggle,
        theme_toggle,
        theme_icon,
        nav_home,
        nav_about,
        nav_contact,
        home,
        hero_name,
        hero_title,
        hero_tagline,
        hero_visual,
        scroll_indicator,
        scroll_arrow,
        hire_btn,
        portfolio_btn,
        about,
        about_title,
        about_paragraph,
        stat_projects,
        stat_rate,
        skills,
        skill_category,
        skill_bar,
        services,
        service_card,
        contact,
        form,
        name_field,
        email_field,
        message_field,
        submit_btn,
        placeholder_link,
    };
    (dom, page)
}

/// Fill the contact form fields.
pub(crate) fn fill_form(dom: &mut FakeDom, page: &Page, name: &str, email: &str, message: &str) {
    use crate::dom::Dom;
    dom.set_attribute(&page.name_field, "value", name);
    dom.set_attribute(&page.email_field, "value", email);
    dom.set_attribute(&page.message_field, "value", message);
}
