//! Property tests for the partition / sort / concatenate pipeline.
//!
//! Rules are drawn from a small vocabulary (years, months, cut-offs, month
//! letters) in both orderings, so overlap between rules is common.

use crate::rules::{orderings, predicates};
use crate::{DateSorter, SubsetRule};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Check {
    Year(i32),
    Month(u32),
    Before(NaiveDate),
    Letter(char),
}

impl Check {
    fn holds(&self, date: &NaiveDate) -> bool {
        match *self {
            Check::Year(y) => date.year() == y,
            Check::Month(m) => date.month() == m,
            Check::Before(cutoff) => *date < cutoff,
            Check::Letter(c) => crate::month_name_contains(date, c),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct RuleShape {
    check: Check,
    descending: bool,
}

impl RuleShape {
    fn to_rule(self) -> SubsetRule {
        let member = move |d: &NaiveDate| self.check.holds(d);
        if self.descending {
            SubsetRule::new(member, orderings::descending())
        } else {
            SubsetRule::new(member, orderings::ascending())
        }
    }

    fn in_order(&self, a: &NaiveDate, b: &NaiveDate) -> bool {
        if self.descending { a >= b } else { a <= b }
    }
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // Narrow year range so overlap and duplicates happen often.
    (2000i32..2006, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_check() -> impl Strategy<Value = Check> {
    prop_oneof![
        (2000i32..2006).prop_map(Check::Year),
        (1u32..=12).prop_map(Check::Month),
        arb_date().prop_map(Check::Before),
        prop::sample::select(vec!['r', 'a', 'u', 'j']).prop_map(Check::Letter),
    ]
}

fn arb_shapes() -> impl Strategy<Value = Vec<RuleShape>> {
    prop::collection::vec((arb_check(), any::<bool>()).prop_map(|(check, descending)| RuleShape { check, descending }), 0..5)
}

fn sorter_for(shapes: &[RuleShape]) -> DateSorter {
    DateSorter::with_rules(shapes.iter().map(|s| s.to_rule()))
}

/// Index of the rule that should claim `date`; `shapes.len()` is the fallback.
fn expected_owner(shapes: &[RuleShape], date: &NaiveDate) -> usize {
    shapes.iter().position(|s| s.check.holds(date)).unwrap_or(shapes.len())
}

fn counts(dates: &[NaiveDate]) -> BTreeMap<NaiveDate, usize> {
    let mut out = BTreeMap::new();
    for d in dates {
        *out.entry(*d).or_insert(0) += 1;
    }
    out
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Output is a permutation of the input.
    #[test]
    fn output_is_a_permutation(shapes in arb_shapes(), dates in prop::collection::vec(arb_date(), 0..40)) {
        let sorted = sorter_for(&shapes).sort_dates(&dates);
        prop_assert_eq!(sorted.len(), dates.len());
        prop_assert_eq!(counts(&sorted), counts(&dates));
    }

    /// Each segment holds exactly the dates whose first matching rule is that
    /// segment's rule, in that rule's order.
    #[test]
    fn segments_follow_first_match_and_rule_order(
        shapes in arb_shapes(),
        dates in prop::collection::vec(arb_date(), 0..40),
    ) {
        let run = sorter_for(&shapes).sort_dates_with_metrics(&dates);
        prop_assert_eq!(run.segments.len(), shapes.len() + 1);

        for idx in 0..run.segments.len() {
            let segment = run.segment_dates(idx).unwrap();
            for date in segment {
                prop_assert_eq!(expected_owner(&shapes, date), idx);
            }
            for pair in segment.windows(2) {
                if idx < shapes.len() {
                    prop_assert!(shapes[idx].in_order(&pair[0], &pair[1]));
                } else {
                    prop_assert!(pair[0] <= pair[1], "fallback must be ascending");
                }
            }
            let expected_len = dates.iter().filter(|d| expected_owner(&shapes, d) == idx).count();
            prop_assert_eq!(segment.len(), expected_len);
        }
    }

    /// Sorting is deterministic and does not depend on how often it runs.
    #[test]
    fn repeated_sorts_agree(shapes in arb_shapes(), dates in prop::collection::vec(arb_date(), 0..40)) {
        let sorter = sorter_for(&shapes);
        let first = sorter.sort_dates(&dates);
        let second = sorter.sort_dates(&dates);
        prop_assert_eq!(&first, &second);

        let mut reconfigured = sorter.clone();
        reconfigured.set_rules(shapes.iter().map(|s| s.to_rule()));
        prop_assert_eq!(first, reconfigured.sort_dates(&dates));
    }

    /// Ties under a coarse ordering keep their input order.
    #[test]
    fn ties_keep_input_order(dates in prop::collection::vec(arb_date(), 0..40)) {
        let sorter = DateSorter::with_rules([SubsetRule::new(
            predicates::not(predicates::in_year(2003)),
            |a: &NaiveDate, b: &NaiveDate| a.year().cmp(&b.year()),
        )]);
        let sorted = sorter.sort_dates(&dates);

        let claimed: Vec<NaiveDate> = dates.iter().copied().filter(|d| d.year() != 2003).collect();
        for year in 2000..2006 {
            let from_input: Vec<_> = claimed.iter().filter(|d| d.year() == year).collect();
            let from_output: Vec<_> = sorted.iter().take(claimed.len()).filter(|d| d.year() == year).collect();
            prop_assert_eq!(from_input, from_output);
        }
    }
}
