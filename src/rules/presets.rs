//! Ready-made rule lists.
//!
//! [`task`] is what a freshly constructed [`DateSorter`](crate::DateSorter)
//! uses. The others are common alternatives selectable by name.

use super::{orderings, predicates};
use crate::SubsetRule;
use chrono::NaiveDate;

/// Names accepted by [`by_name`].
pub const PRESET_NAMES: &[&str] = &["task", "none", "newest-first"];

/// Dates whose month name contains an `r`, earliest first; then every other
/// date, latest first.
///
/// The second rule tests the negated predicate on its own instead of taking
/// "whatever is left".
pub fn task() -> Vec<SubsetRule> {
    let has_r = predicates::month_name_contains('r');

    vec![
        SubsetRule::named("month-has-r", has_r.clone(), orderings::ascending()),
        SubsetRule::named("month-lacks-r", predicates::not(has_r), orderings::descending()),
    ]
}

/// One rule claiming everything, latest first. The fallback never sees a date.
pub fn newest_first() -> Vec<SubsetRule> {
    vec![SubsetRule::named("newest-first", |_: &NaiveDate| true, orderings::descending())]
}

/// Look up a preset by name. `"none"` is the empty list (fallback only).
pub fn by_name(name: &str) -> Option<Vec<SubsetRule>> {
    match name {
        "task" => Some(task()),
        "none" => Some(Vec::new()),
        "newest-first" => Some(newest_first()),
        _ => None,
    }
}
