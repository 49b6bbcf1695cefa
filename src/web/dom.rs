//! `web-sys` implementation of [`Dom`].

use std::collections::HashMap;
use std::rc::Weak;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, EventTarget, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

use super::{Runtime, logged};
use crate::dom::{Dom, Event, ListenTarget, Listener, Watcher};
use crate::error::DomError;
use crate::task::Task;

pub struct WebDom {
    window: Window,
    document: Document,
    runtime: Weak<Runtime>,
    observers: HashMap<Watcher, IntersectionObserver>,
}

impl WebDom {
    pub(crate) fn new(window: Window, document: Document, runtime: Weak<Runtime>) -> Self {
        Self { window, document, runtime, observers: HashMap::new() }
    }

    fn html<'a>(op: &'static str, node: &'a Element) -> Option<&'a HtmlElement> {
        let html = node.dyn_ref::<HtmlElement>();
        if html.is_none() {
            log::warn!("web: {}", DomError::WrongElement { op, expected: "HtmlElement" });
        }
        html
    }

    fn elements(list: &web_sys::NodeList) -> Vec<Element> {
        let mut out = Vec::new();
        for node in (0..list.length()).filter_map(|i| list.item(i)) {
            if let Ok(element) = node.dyn_into::<Element>() {
                out.push(element);
            }
        }
        out
    }

    /// The observer for `watcher`, created on first use.
    fn observer(&mut self, watcher: Watcher) -> Option<IntersectionObserver> {
        if let Some(observer) = self.observers.get(&watcher) {
            return Some(observer.clone());
        }

        let runtime = self.runtime.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let Some(runtime) = runtime.upgrade() else {
                    return;
                };
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        runtime.dispatch(Event::Visible { watcher, node: entry.target() });
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(watcher.threshold()));
        init.set_root_margin(watcher.root_margin());
        let observer = logged(
            "IntersectionObserver",
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init),
        )?;
        callback.forget();

        self.observers.insert(watcher, observer.clone());
        Some(observer)
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        logged("querySelector", self.document.query_selector(selector)).flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        logged("querySelectorAll", self.document.query_selector_all(selector))
            .map(|list| Self::elements(&list))
            .unwrap_or_default()
    }

    fn query_within(&self, root: &Element, selector: &str) -> Option<Element> {
        logged("querySelector", root.query_selector(selector)).flatten()
    }

    fn query_all_within(&self, root: &Element, selector: &str) -> Vec<Element> {
        logged("querySelectorAll", root.query_selector_all(selector))
            .map(|list| Self::elements(&list))
            .unwrap_or_default()
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        logged("closest", node.closest(selector)).flatten()
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        logged("setAttribute", node.set_attribute(name, value));
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        logged("classList.add", node.class_list().add_1(class));
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        logged("classList.remove", node.class_list().remove_1(class));
    }

    fn toggle_class(&mut self, node: &Element, class: &str) {
        logged("classList.toggle", node.class_list().toggle(class));
    }

    fn set_class_name(&mut self, node: &Element, class_name: &str) {
        node.set_class_name(class_name);
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        if let Some(html) = Self::html("style", node) {
            logged("style.setProperty", html.style().set_property(property, value));
        }
    }

    fn set_css_text(&mut self, node: &Element, css: &str) {
        if let Some(html) = Self::html("style.cssText", node) {
            html.style().set_css_text(css);
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn create_element(&mut self, tag: &str) -> Option<Element> {
        logged("createElement", self.document.create_element(tag))
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        logged("appendChild", parent.append_child(child));
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn is_attached(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn loaded(&self) -> bool {
        self.document.ready_state() == "complete"
    }

    fn offset_top(&self, node: &Element) -> f64 {
        Self::html("offsetTop", node).map_or(0.0, |html| f64::from(html.offset_top()))
    }

    fn client_height(&self, node: &Element) -> f64 {
        f64::from(node.client_height())
    }

    fn scroll_y(&self) -> f64 {
        logged("scrollY", self.window.scroll_y()).unwrap_or(0.0)
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&mut self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn field_value(&self, form: &Element, name: &str) -> Option<String> {
        let Some(form) = form.dyn_ref::<HtmlFormElement>() else {
            log::warn!("web: {}", DomError::WrongElement { op: "FormData", expected: "HtmlFormElement" });
            return None;
        };
        let data = logged("FormData", FormData::new_with_form(form))?;
        data.get(name).as_string()
    }

    fn reset_form(&mut self, form: &Element) {
        match form.dyn_ref::<HtmlFormElement>() {
            Some(form) => form.reset(),
            None => log::warn!("web: {}", DomError::WrongElement { op: "reset", expected: "HtmlFormElement" }),
        }
    }

    fn set_disabled(&mut self, node: &Element, disabled: bool) {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            logged("setAttribute", node.set_attribute("disabled", ""));
        } else {
            logged("removeAttribute", node.remove_attribute("disabled"));
        }
    }

    fn set_timeout(&mut self, delay_ms: u32, task: Task<Element>) {
        let runtime = self.runtime.clone();
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(runtime) = runtime.upgrade() {
                runtime.dispatch(Event::Elapsed(task));
            }
        });
        timeout.forget();
    }

    fn watch(&mut self, node: &Element, watcher: Watcher) {
        if let Some(observer) = self.observer(watcher) {
            observer.observe(node);
        }
    }

    fn listen(&mut self, target: ListenTarget<Element>, listener: Listener) {
        let event_target: EventTarget = match &target {
            ListenTarget::Window => self.window.clone().into(),
            ListenTarget::Document => self.document.clone().into(),
            ListenTarget::Node(node) => node.clone().into(),
        };

        let runtime = self.runtime.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if listener.prevents_default() {
                event.prevent_default();
            }
            let node = match &target {
                ListenTarget::Window => None,
                ListenTarget::Document => event.target().and_then(|t| t.dyn_ref::<Element>().cloned()),
                ListenTarget::Node(node) => Some(node.clone()),
            };
            if let Some(runtime) = runtime.upgrade() {
                runtime.dispatch(Event::Fired { listener, node });
            }
        });

        if logged(
            "addEventListener",
            event_target.add_event_listener_with_callback(listener.event_type(), callback.as_ref().unchecked_ref()),
        )
        .is_some()
        {
            callback.forget();
        }
    }
}
