//! Browser host.
//!
//! DESIGN
//! ======
//! The runtime pairs the [`App`] with a [`WebDom`] behind `RefCell`s in one
//! `Rc`, parked in a thread-local for the life of the page. Listener,
//! observer and timer closures hold a `Weak` to it and turn browser callbacks
//! into [`Event`]s. Dispatch is not re-entrant: if a callback arrives while
//! another dispatch holds the borrows, it is dropped with a warning.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `browser` feature. `start` runs when the WASM
//! module is instantiated, after the page's HTML has been parsed.

mod dom;
mod storage;

pub use dom::WebDom;
pub use storage::LocalStore;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

use crate::app::App;
use crate::config::PageConfig;
use crate::dom::Event;
use crate::error::DomError;

thread_local! {
    static RUNTIME: RefCell<Option<Rc<Runtime>>> = const { RefCell::new(None) };
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("portfolio: logger init failed: {err}")));
    }

    match Runtime::boot() {
        Ok(runtime) => RUNTIME.with(|slot| *slot.borrow_mut() = Some(runtime)),
        Err(err) => log::error!("web: startup failed: {err}"),
    }
}

pub(crate) struct Runtime {
    app: RefCell<App<LocalStore>>,
    dom: RefCell<WebDom>,
}

impl Runtime {
    fn boot() -> Result<Rc<Self>, DomError> {
        let window = web_sys::window().ok_or(DomError::Js { op: "window", reason: "no global window".into() })?;
        let document = window
            .document()
            .ok_or(DomError::Js { op: "document", reason: "window has no document".into() })?;
        let store = LocalStore::from_window(&window);

        let runtime = Rc::new_cyclic(|weak: &Weak<Self>| {
            let dom = WebDom::new(window, document, weak.clone());
            let config = PageConfig::load(&dom);
            Self { app: RefCell::new(App::new(config, store)), dom: RefCell::new(dom) }
        });
        runtime.with_borrows("mount", |app, dom| app.mount(dom));
        Ok(runtime)
    }

    /// Deliver one host event to the app.
    pub(crate) fn dispatch(&self, event: Event<Element>) {
        self.with_borrows("dispatch", |app, dom| app.handle(dom, event));
    }

    fn with_borrows(&self, what: &str, f: impl FnOnce(&mut App<LocalStore>, &mut WebDom)) {
        let (Ok(mut app), Ok(mut dom)) = (self.app.try_borrow_mut(), self.dom.try_borrow_mut()) else {
            log::warn!("web: re-entrant {what} dropped");
            return;
        };
        f(&mut app, &mut dom);
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Log a failed browser call and turn it into an `Option`.
pub(crate) fn logged<T>(op: &'static str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("web: {}", DomError::Js { op, reason: describe(&err) });
            None
        }
    }
}
