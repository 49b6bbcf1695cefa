//! Deferred work.
//!
//! Handlers never hold closures across a delay. They schedule a `Task` through
//! [`crate::dom::Dom::set_timeout`] and the host hands it back as
//! [`crate::dom::Event::Elapsed`] when the timer fires. Node handles inside a
//! task may refer to elements that were detached in the meantime; the work
//! then lands on the stale element with no visible effect.

use crate::theme::Theme;

/// A unit of work waiting on a timer.
#[derive(Debug, Clone, PartialEq)]
pub enum Task<N> {
    /// Apply the terminal reveal style to `node`.
    Reveal { node: N },
    /// Stagger the hero elements after page load.
    HeroSequence,
    /// Make the scroll-down indicator visible.
    ShowScrollIndicator,
    /// Fade the body back in after the load-time reset.
    FadeInBody,
    /// Swap the document theme after the toggle's rotate animation.
    CommitTheme { theme: Theme },
    /// Show frame `step` of a stat counter.
    CounterTick { node: N, target: i64, suffix: char, step: u32 },
    /// Complete the simulated contact-form submission.
    FinishSubmit { form: N, button: Option<N> },
    /// Slide a notification into view.
    SlideIn { node: N },
    /// Slide a notification out of view.
    SlideOut { node: N },
    /// Detach a notification that has slid out.
    Dismiss { node: N },
    /// Write the next character of the typing effect.
    TypeNext { node: N, typed: usize },
}
