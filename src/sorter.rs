use crate::SubsetRule;
use crate::engine::{self, RuleSet, SortRun};
use crate::rules::presets;
use chrono::NaiveDate;
use std::time::Instant;
use tracing::debug;

/// Sorts dates by partitioning them with an ordered list of [`SubsetRule`]s.
///
/// Each date goes to the first rule whose membership test accepts it. Each
/// rule's subset is stable-sorted with its ordering and the subsets are
/// concatenated in rule order. An implicit fallback rule, always last,
/// takes the remaining dates in ascending order.
///
/// `sort_dates` never mutates the input or the rules. The rules live in an
/// immutable [`RuleSet`] snapshot, so a sort in progress is unaffected by a
/// later [`set_rules`](Self::set_rules).
#[derive(Debug, Clone)]
pub struct DateSorter {
    rules: RuleSet,
}

impl DateSorter {
    /// A sorter using the default task rules ([`presets::task`]).
    pub fn new() -> Self {
        Self::with_rules(presets::task())
    }

    pub fn with_rules(rules: impl IntoIterator<Item = SubsetRule>) -> Self {
        Self { rules: RuleSet::new(rules) }
    }

    /// Replace the user rules wholesale. The fallback rule stays last.
    ///
    /// Overlapping or non-exhaustive rules are fine; overlap goes to the
    /// earliest rule. An empty list leaves only the fallback.
    pub fn set_rules(&mut self, rules: impl IntoIterator<Item = SubsetRule>) {
        self.rules = RuleSet::new(rules);
        debug!(rules = ?self.rules.active_names(), "replaced subset rules");
    }

    /// The current user rules, without the fallback.
    pub fn rules(&self) -> &[SubsetRule] {
        self.rules.user_rules()
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    /// Sort `dates` into a new vector of the same length.
    pub fn sort_dates(&self, dates: &[NaiveDate]) -> Vec<NaiveDate> {
        let rules = self.rules.clone();
        let subsets = engine::partition(dates, &rules, false);
        let sorted = engine::concatenate(&subsets);
        debug!(input = dates.len(), subsets = subsets.len(), "sorted dates");
        sorted
    }

    /// Like [`sort_dates`](Self::sort_dates), but also reports which rule
    /// produced each output segment and how long each subset took.
    pub fn sort_dates_with_metrics(&self, dates: &[NaiveDate]) -> SortRun {
        let started = Instant::now();
        let rules = self.rules.clone();
        let subsets = engine::partition(dates, &rules, true);
        let sorted = engine::concatenate(&subsets);
        let run = SortRun::from_subsets(sorted, &subsets, started.elapsed());
        debug!(input = dates.len(), total = ?run.metrics.total, "sorted dates with metrics");
        run
    }
}

impl Default for DateSorter {
    fn default() -> Self {
        Self::new()
    }
}
