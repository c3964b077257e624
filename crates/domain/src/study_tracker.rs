//! Study tracker — the "hours studied" progress widget embedded in the page.
//!
//! The widget is three fragments of static markup:
//!
//! ```html
//! <span class="study-count">1,234 / 10,000 hrs</span>
//! <div class="tracker-fill" style="width: 12.34%"></div>
//! <div class="tracker-percent">12.34% Complete</div>
//! ```
//!
//! [`update_markup`] adds hours to the counter and rewrites all three.

use std::fmt;

/// Hours goal the progress bar is measured against.
pub const DEFAULT_GOAL: u32 = 10_000;

const COUNT_OPEN: &str = r#"<span class="study-count">"#;
const COUNT_CLOSE: &str = "</span>";
const FILL_OPEN: &str = r#"<div class="tracker-fill" style="width: "#;
const FILL_CLOSE: &str = r#"%"></div>"#;
const PERCENT_OPEN: &str = r#"<div class="tracker-percent">"#;
const PERCENT_CLOSE: &str = "% Complete</div>";

/// Hours studied against a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyHours {
    pub hours: u32,
    pub goal: u32,
}

impl StudyHours {
    #[must_use]
    pub fn percentage(self) -> f64 {
        f64::from(self.hours) / f64::from(self.goal) * 100.0
    }

    /// Percentage with two decimals, as written into the page.
    #[must_use]
    pub fn percentage_text(self) -> String {
        format!("{:.2}", self.percentage())
    }

    /// Counter text, e.g. `1,236 / 10,000 hrs`.
    #[must_use]
    pub fn counter_text(self) -> String {
        format!(
            "{} / {} hrs",
            group_thousands(self.hours),
            group_thousands(self.goal)
        )
    }
}

impl fmt::Display for StudyHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours ({}%)",
            group_thousands(self.hours),
            self.percentage_text()
        )
    }
}

/// Result of one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursUpdate {
    pub previous: StudyHours,
    pub current: StudyHours,
    pub added: u32,
}

/// Errors raised while rewriting the tracker markup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("could not find the study hours counter in the page")]
    CounterNotFound,
    #[error("goal must be greater than zero")]
    ZeroGoal,
    #[error("adding {added} hours to {hours} overflows")]
    Overflow { hours: u32, added: u32 },
}

/// Format with comma thousands separators (`12345` → `12,345`).
#[must_use]
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse counter text such as `1,234 / 10,000 hrs` into the hours value.
#[must_use]
pub fn parse_counter(text: &str) -> Option<u32> {
    let (count, rest) = text.split_once('/')?;
    if !rest.trim_end().ends_with("hrs") {
        return None;
    }
    let count = count.trim();
    if count.is_empty() || !count.chars().all(|c| c.is_ascii_digit() || c == ',') {
        return None;
    }
    count.replace(',', "").parse().ok()
}

/// Add `added` hours to the counter in `html` and refresh the progress bar.
///
/// Every counter, fill and percent fragment is rewritten; the fill and
/// percent fragments are optional. Fragments whose content does not look
/// like tracker values are left untouched.
///
/// # Errors
///
/// Returns [`TrackerError::CounterNotFound`] when no counter is present,
/// [`TrackerError::ZeroGoal`] for a zero goal and
/// [`TrackerError::Overflow`] when the sum does not fit.
pub fn update_markup(
    html: &str,
    added: u32,
    goal: u32,
) -> Result<(String, HoursUpdate), TrackerError> {
    if goal == 0 {
        return Err(TrackerError::ZeroGoal);
    }

    let hours = segments(html, COUNT_OPEN, COUNT_CLOSE)
        .into_iter()
        .find_map(parse_counter)
        .ok_or(TrackerError::CounterNotFound)?;
    let total = hours
        .checked_add(added)
        .ok_or(TrackerError::Overflow { hours, added })?;

    let update = HoursUpdate {
        previous: StudyHours { hours, goal },
        current: StudyHours { hours: total, goal },
        added,
    };
    let counter = update.current.counter_text();
    let percent = update.current.percentage_text();

    let html = replace_segments(html, COUNT_OPEN, COUNT_CLOSE, |inner| {
        parse_counter(inner).map(|_| counter.clone())
    });
    let html = replace_segments(&html, FILL_OPEN, FILL_CLOSE, |inner| {
        is_decimal(inner).then(|| percent.clone())
    });
    let html = replace_segments(&html, PERCENT_OPEN, PERCENT_CLOSE, |inner| {
        is_decimal(inner).then(|| percent.clone())
    });

    Ok((html, update))
}

fn is_decimal(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn segments<'a>(html: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut found = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(open) {
        let body = &rest[start + open.len()..];
        let Some(len) = body.find(close) else {
            break;
        };
        found.push(&body[..len]);
        rest = &body[len + close.len()..];
    }
    found
}

fn replace_segments(
    html: &str,
    open: &str,
    close: &str,
    rewrite: impl Fn(&str) -> Option<String>,
) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find(open) {
        let head = start + open.len();
        let Some(len) = rest[head..].find(close) else {
            break;
        };
        let inner = &rest[head..head + len];
        out.push_str(&rest[..head]);
        match rewrite(inner) {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(inner),
        }
        out.push_str(close);
        rest = &rest[head + len + close.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<section id="about">
  <span class="study-count">1,234 / 10,000 hrs</span>
  <div class="tracker"><div class="tracker-fill" style="width: 12.34%"></div></div>
  <div class="tracker-percent">12.34% Complete</div>
</section>"#;

    #[test]
    fn should_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn should_parse_counter_with_and_without_commas() {
        assert_eq!(parse_counter("1,234 / 10,000 hrs"), Some(1234));
        assert_eq!(parse_counter("87/10,000 hrs"), Some(87));
    }

    #[test]
    fn should_reject_malformed_counter() {
        assert_eq!(parse_counter("lots / 10,000 hrs"), None);
        assert_eq!(parse_counter("12 hours"), None);
        assert_eq!(parse_counter(" / 10,000 hrs"), None);
    }

    #[test]
    fn should_rewrite_counter_fill_and_percent() {
        let (html, update) = update_markup(PAGE, 2, DEFAULT_GOAL).unwrap();
        assert_eq!(update.previous.hours, 1234);
        assert_eq!(update.current.hours, 1236);
        assert!(html.contains(r#"<span class="study-count">1,236 / 10,000 hrs</span>"#));
        assert!(html.contains(r#"<div class="tracker-fill" style="width: 12.36%"></div>"#));
        assert!(html.contains(r#"<div class="tracker-percent">12.36% Complete</div>"#));
        assert!(html.starts_with(r#"<section id="about">"#));
        assert!(html.ends_with("</section>"));
    }

    #[test]
    fn should_update_counter_when_progress_bar_missing() {
        let page = r#"<p><span class="study-count">999 / 10,000 hrs</span></p>"#;
        let (html, _) = update_markup(page, 2, DEFAULT_GOAL).unwrap();
        assert_eq!(html, r#"<p><span class="study-count">1,001 / 10,000 hrs</span></p>"#);
    }

    #[test]
    fn should_fail_when_counter_missing() {
        let result = update_markup("<html></html>", 2, DEFAULT_GOAL);
        assert_eq!(result, Err(TrackerError::CounterNotFound));
    }

    #[test]
    fn should_fail_on_zero_goal() {
        assert_eq!(update_markup(PAGE, 2, 0), Err(TrackerError::ZeroGoal));
    }

    #[test]
    fn should_fail_on_overflow() {
        let page = format!(r#"<span class="study-count">{} / 10,000 hrs</span>"#, u32::MAX);
        assert!(matches!(
            update_markup(&page, 1, DEFAULT_GOAL),
            Err(TrackerError::Overflow { .. })
        ));
    }

    #[test]
    fn should_leave_unrelated_spans_alone() {
        let page = r#"<span class="study-count">soon</span><span class="study-count">10 / 10,000 hrs</span>"#;
        let (html, update) = update_markup(page, 5, DEFAULT_GOAL).unwrap();
        assert_eq!(update.current.hours, 15);
        assert_eq!(
            html,
            r#"<span class="study-count">soon</span><span class="study-count">15 / 10,000 hrs</span>"#
        );
    }

    #[test]
    fn should_display_hours_with_percentage() {
        let hours = StudyHours {
            hours: 2500,
            goal: DEFAULT_GOAL,
        };
        assert_eq!(hours.to_string(), "2,500 hours (25.00%)");
    }
}
