//! In-memory [`Dom`] with a virtual clock.
//!
//! Elements live in an arena and are addressed by [`NodeId`]. Timers are
//! recorded with their due time and released by [`FakeDom::take_due`];
//! watchers and listeners are recorded so tests can assert on wiring and the
//! harness can fire them.

use std::collections::BTreeMap;

use super::selector::{ElementView, Selector};
use crate::dom::{Dom, ListenTarget, Listener, Watcher};
use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(pub usize);

#[derive(Debug, Clone, Default)]
struct FakeElement {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    offset_top: f64,
    client_height: f64,
    disabled: bool,
}

impl ElementView for FakeElement {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Pending {
    pub due: u64,
    pub seq: u64,
    pub task: Task<NodeId>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeDom {
    elements: Vec<FakeElement>,
    now: u64,
    seq: u64,
    timers: Vec<Pending>,
    scroll_y: f64,
    loaded: bool,
    pub scrolls: Vec<f64>,
    pub scrolled_into_view: Vec<NodeId>,
    pub watched: Vec<(NodeId, Watcher)>,
    pub listeners: Vec<(ListenTarget<NodeId>, Listener)>,
    pub form_resets: Vec<NodeId>,
}

impl FakeDom {
    pub const ROOT: NodeId = NodeId(0);
    pub const BODY: NodeId = NodeId(1);

    /// An `<html>` root with an empty `<body>`.
    pub fn new() -> Self {
        let mut dom = Self::default();
        dom.elements.push(FakeElement { tag: "html".into(), ..FakeElement::default() });
        dom.elements.push(FakeElement { tag: "body".into(), ..FakeElement::default() });
        dom.attach(Self::ROOT, Self::BODY);
        dom
    }

    // --- Building ---

    /// Append a new `<tag>` with `attrs` under `parent`.
    pub fn add(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = NodeId(self.elements.len());
        self.elements.push(FakeElement {
            tag: tag.to_owned(),
            attrs: attrs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
            ..FakeElement::default()
        });
        self.attach(parent, id);
        id
    }

    /// Append a new element carrying `text`.
    pub fn add_text(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)], text: &str) -> NodeId {
        let id = self.add(parent, tag, attrs);
        self.elements[id.0].text = text.to_owned();
        id
    }

    pub fn set_layout(&mut self, node: NodeId, offset_top: f64, client_height: f64) {
        let el = &mut self.elements[node.0];
        el.offset_top = offset_top;
        el.client_height = client_height;
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// Pretend the window `load` event has already fired.
    pub fn set_loaded(&mut self, loaded: bool) {
        self.loaded = loaded;
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.elements[child.0].parent.take() {
            self.elements[parent.0].children.retain(|c| *c != child);
        }
    }

    // --- Inspection ---

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.elements[node.0].style.get(property).map(String::as_str)
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.elements[node.0].attr(name)
    }

    pub fn text_of(&self, node: NodeId) -> &str {
        &self.elements[node.0].text
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.elements[node.0].disabled
    }

    pub fn class_has(&self, node: NodeId, class: &str) -> bool {
        self.elements[node.0].has_class(class)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.elements[node.0].parent
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn pending(&self) -> &[Pending] {
        &self.timers
    }

    pub fn watchers_of(&self, node: NodeId) -> Vec<Watcher> {
        self.watched.iter().filter(|(n, _)| *n == node).map(|(_, w)| *w).collect()
    }

    pub fn listeners_of(&self, target: &ListenTarget<NodeId>) -> Vec<Listener> {
        self.listeners.iter().filter(|(t, _)| t == target).map(|(_, l)| *l).collect()
    }

    // --- Clock ---

    /// Remove and return the earliest timer due at or before `until`,
    /// moving the clock to its due time.
    pub fn take_due(&mut self, until: u64) -> Option<Task<NodeId>> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let pending = self.timers.remove(index);
        self.now = self.now.max(pending.due);
        Some(pending.task)
    }

    pub fn set_now(&mut self, now: u64) {
        self.now = self.now.max(now);
    }

    // --- Tree walking ---

    fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.elements[node.0].parent;
        while let Some(parent) = cursor {
            out.push(parent);
            cursor = self.elements[parent.0].parent;
        }
        out
    }

    fn descendants(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for child in &self.elements[node.0].children {
            out.push(*child);
            self.descendants(*child, out);
        }
    }

    fn matches(&self, selector: &Selector, node: NodeId) -> bool {
        let ancestors = self.ancestors(node);
        let views: Vec<&FakeElement> = ancestors.iter().map(|a| &self.elements[a.0]).collect();
        selector.matches(&self.elements[node.0], &views)
    }

    fn select_within(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut candidates = Vec::new();
        self.descendants(root, &mut candidates);
        candidates.into_iter().filter(|n| self.matches(&selector, *n)).collect()
    }

    fn class_list(&self, node: NodeId) -> Vec<String> {
        self.elements[node.0]
            .attrs
            .get("class")
            .map(|c| c.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    fn write_class_list(&mut self, node: NodeId, classes: &[String]) {
        self.elements[node.0].attrs.insert("class".into(), classes.join(" "));
    }
}

impl Dom for FakeDom {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.select_within(Self::ROOT, selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select_within(Self::ROOT, selector)
    }

    fn query_within(&self, root: &NodeId, selector: &str) -> Option<NodeId> {
        self.select_within(*root, selector).into_iter().next()
    }

    fn query_all_within(&self, root: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select_within(*root, selector)
    }

    fn closest(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector)?;
        std::iter::once(*node)
            .chain(self.ancestors(*node))
            .find(|n| self.matches(&selector, *n))
    }

    fn root(&self) -> Option<NodeId> {
        Some(Self::ROOT)
    }

    fn body(&self) -> Option<NodeId> {
        Some(Self::BODY)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.elements[node.0].attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.elements[node.0].attrs.insert(name.to_owned(), value.to_owned());
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.class_has(*node, class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        let mut classes = self.class_list(*node);
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
        self.write_class_list(*node, &classes);
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        let mut classes = self.class_list(*node);
        classes.retain(|c| c != class);
        self.write_class_list(*node, &classes);
    }

    fn toggle_class(&mut self, node: &NodeId, class: &str) {
        if self.class_has(*node, class) {
            self.remove_class(node, class);
        } else {
            self.add_class(node, class);
        }
    }

    fn set_class_name(&mut self, node: &NodeId, class_name: &str) {
        self.elements[node.0].attrs.insert("class".into(), class_name.to_owned());
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        self.elements[node.0].style.insert(property.to_owned(), value.to_owned());
    }

    fn set_css_text(&mut self, node: &NodeId, css: &str) {
        let style = &mut self.elements[node.0].style;
        style.clear();
        for declaration in css.split(';') {
            if let Some((property, value)) = declaration.split_once(':') {
                style.insert(property.trim().to_owned(), value.trim().to_owned());
            }
        }
    }

    fn text(&self, node: &NodeId) -> String {
        self.elements[node.0].text.clone()
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        self.elements[node.0].text = text.to_owned();
    }

    fn create_element(&mut self, tag: &str) -> Option<NodeId> {
        let id = NodeId(self.elements.len());
        self.elements.push(FakeElement { tag: tag.to_owned(), ..FakeElement::default() });
        Some(id)
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.attach(*parent, *child);
    }

    fn remove(&mut self, node: &NodeId) {
        self.detach(*node);
    }

    fn is_attached(&self, node: &NodeId) -> bool {
        *node == Self::ROOT || self.ancestors(*node).contains(&Self::ROOT)
    }

    fn loaded(&self) -> bool {
        self.loaded
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.elements[node.0].offset_top
    }

    fn client_height(&self, node: &NodeId) -> f64 {
        self.elements[node.0].client_height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, top: f64) {
        self.scrolls.push(top);
    }

    fn scroll_into_view(&mut self, node: &NodeId) {
        self.scrolled_into_view.push(*node);
    }

    fn field_value(&self, form: &NodeId, name: &str) -> Option<String> {
        self.select_within(*form, &format!("[name=\"{name}\"]"))
            .into_iter()
            .next()
            .map(|field| self.elements[field.0].attrs.get("value").cloned().unwrap_or_default())
    }

    fn reset_form(&mut self, form: &NodeId) {
        for field in self.select_within(*form, "[name]") {
            self.elements[field.0].attrs.insert("value".into(), String::new());
        }
        self.form_resets.push(*form);
    }

    fn set_disabled(&mut self, node: &NodeId, disabled: bool) {
        self.elements[node.0].disabled = disabled;
    }

    fn set_timeout(&mut self, delay_ms: u32, task: Task<NodeId>) {
        self.seq += 1;
        self.timers.push(Pending { due: self.now + u64::from(delay_ms), seq: self.seq, task });
    }

    fn watch(&mut self, node: &NodeId, watcher: Watcher) {
        self.watched.push((*node, watcher));
    }

    fn listen(&mut self, target: ListenTarget<NodeId>, listener: Listener) {
        self.listeners.push((target, listener));
    }
}
