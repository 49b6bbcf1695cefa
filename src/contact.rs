//! Contact form, simulated.
//!
//! DESIGN
//! ======
//! Nothing leaves the page. A valid submission locks the submit control,
//! waits out a fixed delay standing in for a network round trip, then reports
//! success and resets the form. Validation is deliberately shallow: all three
//! fields present and an email of the shape `x@y.z`.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::PageConfig;
use crate::consts;
use crate::dom::Dom;
use crate::notify::{self, Severity};
use crate::task::Task;

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Loose email shape check: something, `@`, something, `.`, something.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    match &*EMAIL_RE {
        Ok(re) => re.is_match(email),
        Err(err) => {
            log::warn!("contact: email pattern failed to compile: {err}");
            false
        }
    }
}

/// Field values read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingFields,
    InvalidEmail,
}

impl Rejection {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "Please fill in all fields",
            Self::InvalidEmail => "Please enter a valid email address",
        }
    }
}

impl Submission {
    /// Read the named controls of `form`. Missing controls read as empty.
    pub fn read<D: Dom>(dom: &D, form: &D::Node) -> Self {
        let field = |name: &str| dom.field_value(form, name).unwrap_or_default();
        Self {
            name: field(consts::NAME_FIELD),
            email: field(consts::EMAIL_FIELD),
            message: field(consts::MESSAGE_FIELD),
        }
    }

    /// Check presence first, then email shape.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] that applies.
    pub fn validate(&self) -> Result<(), Rejection> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(Rejection::MissingFields);
        }
        if !validate_email(&self.email) {
            return Err(Rejection::InvalidEmail);
        }
        Ok(())
    }
}

/// Submit handler. Rejections surface as an error toast and stop there.
pub fn submit<D: Dom>(config: &PageConfig, dom: &mut D, form: &D::Node) {
    let submission = Submission::read(dom, form);
    if let Err(rejection) = submission.validate() {
        log::debug!("contact: rejected {rejection:?}");
        notify::show(config, dom, rejection.message(), Severity::Error);
        return;
    }

    let button = dom.query_within(form, consts::SUBMIT_BUTTON_SELECTOR);
    if let Some(button) = &button {
        dom.set_text(button, consts::SENDING_LABEL);
        dom.set_disabled(button, true);
    }
    log::debug!("contact: sending message");
    dom.set_timeout(config.submit_delay_ms, Task::FinishSubmit { form: form.clone(), button });
}

/// The simulated round trip is over.
pub fn finish<D: Dom>(config: &PageConfig, dom: &mut D, form: &D::Node, button: Option<&D::Node>) {
    notify::show(config, dom, SUCCESS_MESSAGE, Severity::Success);
    dom.reset_form(form);
    if let Some(button) = button {
        dom.set_text(button, consts::SUBMIT_LABEL);
        dom.set_disabled(button, false);
    }
}
