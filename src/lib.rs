//! Rule-based date sorting.
//!
//! A [`DateSorter`] holds an ordered list of [`SubsetRule`]s. Sorting claims
//! every input date for the first rule whose membership test it passes, sorts
//! each claimed subset with that rule's ordering, and concatenates the subsets
//! in rule order. Dates no user rule claims fall through to an implicit
//! fallback rule that always runs last and sorts ascending.
//!
//! # Example
//! ```
//! use chrono::{Datelike, NaiveDate};
//! use datesort::{DateSorter, SubsetRule};
//!
//! let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
//!
//! let mut sorter = DateSorter::new();
//! sorter.set_rules([SubsetRule::new(|date: &NaiveDate| date.year() < 2007, |a: &NaiveDate, b: &NaiveDate| b.cmp(a))]);
//!
//! let sorted = sorter.sort_dates(&[d(2004, 7, 1), d(2005, 1, 2), d(2007, 1, 1), d(2032, 5, 3)]);
//! assert_eq!(sorted, vec![d(2005, 1, 2), d(2004, 7, 1), d(2007, 1, 1), d(2032, 5, 3)]);
//! ```

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::sync::Arc;

#[macro_use]
mod macros;
mod api;
mod date;
mod engine;
mod error;
pub mod rules;
mod sorter;

pub use api::{
    SortDetails, SortResult, SortResultVerbose, SubsetSummary, parse_dates, sort, sort_verbose_with, sort_with,
};
pub use date::{MONTH_NAMES, MonthSet, month_name, month_name_contains};
pub use engine::{FALLBACK_RULE_NAME, RuleSet, Segment, SortMetrics, SortRun, SubsetMetrics};
pub use error::InputError;
pub use sorter::DateSorter;

// --- Rule values ------------------------------------------------------------

/// Membership test deciding whether a date belongs to a subset.
pub type Membership = Arc<dyn Fn(&NaiveDate) -> bool + Send + Sync>;

/// Total order used to sort the members of one subset.
pub type Comparator = Arc<dyn Fn(&NaiveDate, &NaiveDate) -> Ordering + Send + Sync>;

/// Name given to rules constructed without an explicit label.
pub const UNNAMED_RULE: &str = "custom";

/// One partition of the output: a membership test paired with the ordering
/// applied to the dates it claims.
///
/// Rules are immutable once built. Cloning is cheap; the closures are shared.
#[derive(Clone)]
pub struct SubsetRule {
    name: &'static str,
    membership: Membership,
    ordering: Comparator,
}

impl SubsetRule {
    /// Build an unnamed rule from a membership test and an ordering.
    pub fn new<P, C>(membership: P, ordering: C) -> Self
    where
        P: Fn(&NaiveDate) -> bool + Send + Sync + 'static,
        C: Fn(&NaiveDate, &NaiveDate) -> Ordering + Send + Sync + 'static,
    {
        Self::named(UNNAMED_RULE, membership, ordering)
    }

    /// Build a rule with a label that shows up in traces and reports.
    pub fn named<P, C>(name: &'static str, membership: P, ordering: C) -> Self
    where
        P: Fn(&NaiveDate) -> bool + Send + Sync + 'static,
        C: Fn(&NaiveDate, &NaiveDate) -> Ordering + Send + Sync + 'static,
    {
        Self::from_parts(name, Arc::new(membership), Arc::new(ordering))
    }

    /// Build a rule from already shared closures.
    pub fn from_parts(name: &'static str, membership: Membership, ordering: Comparator) -> Self {
        Self { name, membership, ordering }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `date` belongs to this rule's subset.
    pub fn matches(&self, date: &NaiveDate) -> bool {
        (self.membership)(date)
    }

    /// Compare two members of this rule's subset.
    pub fn compare(&self, a: &NaiveDate, b: &NaiveDate) -> Ordering {
        (self.ordering)(a, b)
    }
}

impl std::fmt::Debug for SubsetRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubsetRule")
            .field("name", &self.name)
            .field("membership", &"<function>")
            .field("ordering", &"<function>")
            .finish()
    }
}
