//! Subset orderings.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Natural chronological order, earliest first.
pub fn ascending() -> impl Fn(&NaiveDate, &NaiveDate) -> Ordering + Copy + Send + Sync + 'static {
    |a: &NaiveDate, b: &NaiveDate| a.cmp(b)
}

/// Reverse chronological order, latest first.
pub fn descending() -> impl Fn(&NaiveDate, &NaiveDate) -> Ordering + Copy + Send + Sync + 'static {
    reversed(ascending())
}

/// `ordering` with its arguments swapped.
pub fn reversed<C>(ordering: C) -> impl Fn(&NaiveDate, &NaiveDate) -> Ordering + Copy + Send + Sync + 'static
where
    C: Fn(&NaiveDate, &NaiveDate) -> Ordering + Copy + Send + Sync + 'static,
{
    move |a: &NaiveDate, b: &NaiveDate| ordering(b, a)
}
