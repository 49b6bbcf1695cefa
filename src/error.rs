//! Error types.
//!
//! DESIGN
//! ======
//! None of these reach the visitor. Handlers are fire-and-forget: a failed
//! storage write or browser call is logged and the page carries on. The only
//! user-visible failures are the contact-form rejections in [`crate::contact`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Page configuration could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Preference store read or write failed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage rejected {key}: {reason}")]
    Rejected { key: String, reason: String },
}

/// A browser DOM call threw.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("{op} failed: {reason}")]
    Js { op: &'static str, reason: String },
    #[error("{op}: element is not a {expected}")]
    WrongElement { op: &'static str, expected: &'static str },
}
