//! Stat counters.
//!
//! Each `.stat h3` label inside `#about` holds its final figure as text, e.g.
//! `120+` or `95%`. When the section scrolls into view the label counts up
//! from zero in a fixed number of steps, keeping its suffix, and finishes on
//! the exact final text.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::config::PageConfig;
use crate::consts;
use crate::dom::Dom;
use crate::task::Task;

/// Leading integer of `text`: optional whitespace, optional sign, digits.
/// Anything after the digits is ignored. `None` if there are no digits or
/// the value overflows.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    match rest[..digits_len].parse::<i64>() {
        Ok(n) => Some(n * sign),
        Err(_) => None,
    }
}

/// `%` for percentages, `+` for everything else.
#[must_use]
pub fn suffix_for(text: &str) -> char {
    if text.contains('%') { '%' } else { '+' }
}

/// One displayed frame of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub value: i64,
    pub done: bool,
}

/// Frame `step` (1-based) of `steps` counting up to `target`.
///
/// Intermediate values are `floor(target * step / steps)`, so they never
/// decrease. Non-positive targets finish on the first frame.
#[must_use]
pub fn frame(target: i64, step: u32, steps: u32) -> Frame {
    if target <= 0 || step >= steps {
        return Frame { value: target, done: true };
    }
    let scaled = i128::from(target) * i128::from(step) / i128::from(steps);
    Frame { value: i64::try_from(scaled).unwrap_or(target), done: false }
}

/// `#about` became visible: start every label that has not started yet.
pub fn start_all<D: Dom>(config: &PageConfig, dom: &mut D, container: &D::Node) {
    for label in dom.query_all_within(container, consts::STAT_LABEL_SELECTOR) {
        if dom.has_class(&label, consts::COUNTED_CLASS) {
            continue;
        }
        let text = dom.text(&label);
        let Some(target) = parse_leading_int(&text) else {
            log::debug!("counter: skipping non-numeric label {text:?}");
            continue;
        };
        dom.add_class(&label, consts::COUNTED_CLASS);
        dom.set_timeout(
            config.counter_tick_ms,
            Task::CounterTick { node: label, target, suffix: suffix_for(&text), step: 1 },
        );
    }
}

/// Show one frame and re-arm the tick until the counter is done.
pub fn tick<D: Dom>(config: &PageConfig, dom: &mut D, node: &D::Node, target: i64, suffix: char, step: u32) {
    let Frame { value, done } = frame(target, step, config.counter_steps);
    dom.set_text(node, &format!("{value}{suffix}"));
    if !done {
        dom.set_timeout(
            config.counter_tick_ms,
            Task::CounterTick { node: node.clone(), target, suffix, step: step + 1 },
        );
    }
}
