//! Sort run metrics.
//!
//! [`DateSorter::sort_dates`](crate::DateSorter::sort_dates) returns only the
//! ordered dates. [`DateSorter::sort_dates_with_metrics`](crate::DateSorter::sort_dates_with_metrics)
//! returns a [`SortRun`] that also records which rule produced which slice of
//! the output and how long each subset took.

use super::partition::Subset;
use chrono::NaiveDate;
use std::ops::Range;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct SortMetrics {
    /// Total elapsed time for the sort.
    pub total: Duration,
    /// One entry per evaluated rule, fallback last.
    pub subsets: Vec<SubsetMetrics>,
}

/// Timing and size of one subset.
#[derive(Debug, Clone)]
pub struct SubsetMetrics {
    pub rule: &'static str,
    /// Number of dates the rule claimed.
    pub claimed: usize,
    /// Time spent claiming and sorting.
    pub duration: Duration,
}

/// The slice of the output produced by one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub rule: &'static str,
    /// Index range into [`SortRun::dates`].
    pub range: Range<usize>,
}

/// Sorted output bundled with per-rule segments and timings.
#[derive(Debug, Clone)]
pub struct SortRun {
    /// The ordered dates, identical to what `sort_dates` returns.
    pub dates: Vec<NaiveDate>,
    /// Output segments in rule order, fallback last. Empty subsets produce
    /// empty ranges.
    pub segments: Vec<Segment>,
    pub metrics: SortMetrics,
}

impl SortRun {
    pub(crate) fn from_subsets(dates: Vec<NaiveDate>, subsets: &[Subset<'_>], total: Duration) -> Self {
        let mut segments = Vec::with_capacity(subsets.len());
        let mut metrics = SortMetrics { total, subsets: Vec::with_capacity(subsets.len()) };
        let mut start = 0;

        for subset in subsets {
            let end = start + subset.dates.len();
            segments.push(Segment { rule: subset.rule.name(), range: start..end });
            metrics.subsets.push(SubsetMetrics {
                rule: subset.rule.name(),
                claimed: subset.dates.len(),
                duration: subset.elapsed.unwrap_or_default(),
            });
            start = end;
        }

        SortRun { dates, segments, metrics }
    }

    /// The dates produced by the segment at `index`.
    pub fn segment_dates(&self, index: usize) -> Option<&[NaiveDate]> {
        self.segments.get(index).and_then(|seg| self.dates.get(seg.range.clone()))
    }
}
