//! First-match partitioning.
//!
//! Rules are visited in evaluation order (user rules, then the fallback). Each
//! rule tests only the dates no earlier rule has claimed, takes every one it
//! matches, and stable-sorts them with its own ordering. Duplicate dates are
//! separate elements and are claimed independently.
//!
//! A panicking membership test or comparator unwinds straight through here.

use super::rule_set::RuleSet;
use crate::SubsetRule;
use chrono::NaiveDate;
use std::time::{Duration, Instant};
use tracing::trace;

/// Dates claimed by one rule, already in that rule's order.
#[derive(Debug, Clone)]
pub(crate) struct Subset<'r> {
    pub rule: &'r SubsetRule,
    pub dates: Vec<NaiveDate>,
    /// Time spent claiming and sorting this subset, when timing was requested.
    pub elapsed: Option<Duration>,
}

/// Split `dates` into one sorted subset per active rule, in rule order.
///
/// The result always has `rules.len() + 1` entries; subsets may be empty.
/// With `timed` unset the clock is never read and `elapsed` stays `None`.
pub(crate) fn partition<'r>(dates: &[NaiveDate], rules: &'r RuleSet, timed: bool) -> Vec<Subset<'r>> {
    let mut claimed = vec![false; dates.len()];
    let mut remaining = dates.len();
    let mut subsets = Vec::with_capacity(rules.len() + 1);

    for rule in rules.active() {
        let started = timed.then(Instant::now);
        let mut members = Vec::new();

        for (date, taken) in dates.iter().zip(claimed.iter_mut()) {
            if !*taken && rule.matches(date) {
                *taken = true;
                members.push(*date);
            }
        }
        remaining -= members.len();

        // `sort_by` is stable: equal dates keep their input order.
        members.sort_by(|a, b| rule.compare(a, b));

        trace!(rule = rule.name(), claimed = members.len(), remaining, "claimed subset");
        subsets.push(Subset { rule, dates: members, elapsed: started.map(|t| t.elapsed()) });
    }

    debug_assert_eq!(remaining, 0, "fallback must claim every unclaimed date");
    subsets
}

/// Join subsets in rule order.
pub(crate) fn concatenate(subsets: &[Subset<'_>]) -> Vec<NaiveDate> {
    let total = subsets.iter().map(|s| s.dates.len()).sum();
    let mut out = Vec::with_capacity(total);
    for subset in subsets {
        out.extend_from_slice(&subset.dates);
    }
    out
}
