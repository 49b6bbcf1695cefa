//! # portfolio-page
//!
//! Client-side interactivity for a static portfolio page, compiled to
//! WebAssembly. The crate attaches to already-rendered HTML and reacts to
//! clicks, scrolling, the load event and viewport visibility by mutating
//! element classes and inline styles.
//!
//! All handler logic runs against the [`dom::Dom`] capability trait so it can
//! be driven by a fake document in tests. The `browser` feature adds the
//! `web-sys` implementation and the WASM start function.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Application state and the event dispatcher |
//! | [`dom`] | Document capability trait, events, listeners and watchers |
//! | [`task`] | Deferred work scheduled through the document's timers |
//! | [`animate`] | Reveal animations, hero sequencer, skill bars, card hover |
//! | [`counter`] | Numeric stat counter |
//! | [`contact`] | Simulated contact-form submission and email validation |
//! | [`notify`] | Single-slot toast notification surface |
//! | [`nav`] | Mobile menu, smooth scrolling, active link highlighting |
//! | [`theme`] | Dark/light theme preference |
//! | [`typing`] | Typewriter effect for the hero heading |
//! | [`store`] | Key/value preference store abstraction |
//! | [`config`] | Page configuration with defaults |
//! | [`consts`] | Selectors, class names and default timings |
//! | [`error`] | Error types |

pub mod animate;
pub mod app;
pub mod config;
pub mod consts;
pub mod contact;
pub mod counter;
pub mod dom;
pub mod error;
pub mod nav;
pub mod notify;
pub mod store;
pub mod task;
pub mod theme;
pub mod typing;

#[cfg(feature = "browser")]
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use app::App;
pub use config::PageConfig;
