//! Calendar helpers over [`NaiveDate`].
//!
//! Dates are plain `chrono::NaiveDate` values: whole calendar days with
//! natural chronological ordering and no time zone. This module adds the few
//! month-level views the rules need.

use chrono::{Datelike, NaiveDate};

/// English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of the month `date` falls in.
pub fn month_name(date: &NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Whether the month name of `date` contains `letter`, ignoring case.
pub fn month_name_contains(date: &NaiveDate, letter: char) -> bool {
    name_contains(month_name(date), letter)
}

fn name_contains(name: &str, letter: char) -> bool {
    name.chars().any(|c| c.to_lowercase().eq(letter.to_lowercase()))
}

bitflags::bitflags! {
    /// A set of calendar months.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MonthSet: u16 {
        const JANUARY   = 1 << 0;
        const FEBRUARY  = 1 << 1;
        const MARCH     = 1 << 2;
        const APRIL     = 1 << 3;
        const MAY       = 1 << 4;
        const JUNE      = 1 << 5;
        const JULY      = 1 << 6;
        const AUGUST    = 1 << 7;
        const SEPTEMBER = 1 << 8;
        const OCTOBER   = 1 << 9;
        const NOVEMBER  = 1 << 10;
        const DECEMBER  = 1 << 11;
    }
}

impl MonthSet {
    /// The single month `date` falls in.
    pub fn of(date: &NaiveDate) -> Self {
        Self::from_bits_truncate(1 << date.month0())
    }

    /// The single month numbered `month` (1-12), if valid.
    pub fn from_month(month: u32) -> Option<Self> {
        (1..=12).contains(&month).then(|| Self::from_bits_truncate(1 << (month - 1)))
    }

    /// Every month whose English name contains `letter`, ignoring case.
    pub fn with_letter(letter: char) -> Self {
        MONTH_NAMES
            .iter()
            .enumerate()
            .filter(|(_, name)| name_contains(name, letter))
            .fold(Self::empty(), |set, (idx, _)| set | Self::from_bits_truncate(1 << idx))
    }

    pub fn contains_date(&self, date: &NaiveDate) -> bool {
        self.contains(Self::of(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_name_matches_calendar_month() {
        assert_eq!(month_name(&d(2004, 7, 1)), "July");
        assert_eq!(month_name(&d(2005, 1, 2)), "January");
        assert_eq!(month_name(&d(2032, 12, 31)), "December");
    }

    #[test]
    fn letter_match_ignores_case() {
        assert!(month_name_contains(&d(2005, 1, 2), 'r'));
        assert!(month_name_contains(&d(2005, 1, 2), 'R'));
        assert!(month_name_contains(&d(2005, 1, 2), 'j'));
        assert!(!month_name_contains(&d(2032, 5, 3), 'r'));
    }

    #[test]
    fn months_with_r() {
        let with_r = MonthSet::with_letter('r');
        let expected = MonthSet::JANUARY
            | MonthSet::FEBRUARY
            | MonthSet::MARCH
            | MonthSet::APRIL
            | MonthSet::SEPTEMBER
            | MonthSet::OCTOBER
            | MonthSet::NOVEMBER
            | MonthSet::DECEMBER;
        assert_eq!(with_r, expected);
        assert_eq!(with_r.complement(), MonthSet::MAY | MonthSet::JUNE | MonthSet::JULY | MonthSet::AUGUST);
    }

    #[test]
    fn month_set_agrees_with_name_test() {
        let with_r = MonthSet::with_letter('r');
        for month in 1..=12 {
            let date = d(2020, month, 15);
            assert_eq!(with_r.contains_date(&date), month_name_contains(&date, 'r'), "month {month}");
        }
    }

    #[test]
    fn name_letter_test_is_case_insensitive() {
        assert!(name_contains("October", 'o'));
        assert!(name_contains("October", 'O'));
        assert!(!name_contains("May", 'r'));
        assert_eq!(MonthSet::with_letter('J'), MonthSet::with_letter('j'));
        assert_eq!(MonthSet::with_letter('j'), MonthSet::JANUARY | MonthSet::JUNE | MonthSet::JULY);
    }

    #[test]
    fn from_month_rejects_out_of_range() {
        assert_eq!(MonthSet::from_month(1), Some(MonthSet::JANUARY));
        assert_eq!(MonthSet::from_month(12), Some(MonthSet::DECEMBER));
        assert_eq!(MonthSet::from_month(0), None);
        assert_eq!(MonthSet::from_month(13), None);
    }
}
