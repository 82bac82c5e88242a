//! Membership tests.

use crate::date::{self, MonthSet};
use chrono::{Datelike, Month, NaiveDate};

/// Dates whose English month name contains `letter`, ignoring case.
pub fn month_name_contains(letter: char) -> impl Fn(&NaiveDate) -> bool + Clone + Send + Sync + 'static {
    move |d: &NaiveDate| date::month_name_contains(d, letter)
}

/// Dates in calendar year `year`.
pub fn in_year(year: i32) -> impl Fn(&NaiveDate) -> bool + Clone + Send + Sync + 'static {
    move |d: &NaiveDate| d.year() == year
}

/// Dates in `month` of any year.
pub fn in_month(month: Month) -> impl Fn(&NaiveDate) -> bool + Clone + Send + Sync + 'static {
    let number = month.number_from_month();
    move |d: &NaiveDate| d.month() == number
}

/// Dates whose month is in `months`.
pub fn in_months(months: MonthSet) -> impl Fn(&NaiveDate) -> bool + Clone + Send + Sync + 'static {
    move |d: &NaiveDate| months.contains_date(d)
}

/// Dates strictly before `cutoff`.
pub fn before(cutoff: NaiveDate) -> impl Fn(&NaiveDate) -> bool + Clone + Send + Sync + 'static {
    move |d: &NaiveDate| *d < cutoff
}

/// Dates on or after `cutoff`.
pub fn on_or_after(cutoff: NaiveDate) -> impl Fn(&NaiveDate) -> bool + Clone + Send + Sync + 'static {
    move |d: &NaiveDate| *d >= cutoff
}

/// Logical negation of `predicate`, evaluated on each date.
pub fn not<P>(predicate: P) -> impl Fn(&NaiveDate) -> bool + Clone + Send + Sync + 'static
where
    P: Fn(&NaiveDate) -> bool + Clone + Send + Sync + 'static,
{
    move |d: &NaiveDate| !predicate(d)
}
