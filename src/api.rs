use crate::error::InputError;
use crate::sorter::DateSorter;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_SORTER: Lazy<DateSorter> = Lazy::new(DateSorter::new);

/// Result from [`sort`] and [`sort_with`].
#[derive(Debug, Clone)]
pub struct SortResult {
    /// The ordered dates.
    pub dates: Vec<NaiveDate>,
    /// Total elapsed time spent sorting.
    pub elapsed: Duration,
}

/// One rule's share of the output.
#[derive(Debug, Clone)]
pub struct SubsetSummary {
    pub rule: String,
    pub dates: Vec<NaiveDate>,
    pub elapsed: Duration,
}

/// Additional details returned by [`sort_verbose_with`].
#[derive(Debug, Clone)]
pub struct SortDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Names of the rules in evaluation order, fallback last.
    pub active_rules: Vec<String>,
    /// Subsets in output order, including empty ones.
    pub subsets: Vec<SubsetSummary>,
}

/// Result from [`sort_verbose_with`].
#[derive(Debug, Clone)]
pub struct SortResultVerbose {
    pub dates: Vec<NaiveDate>,
    pub elapsed: Duration,
    pub details: SortDetails,
}

/// Sort `dates` with the default rules.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use datesort::sort;
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
/// let out = sort(&[d(2004, 7, 1), d(2005, 1, 2)]);
/// assert_eq!(out.dates, vec![d(2005, 1, 2), d(2004, 7, 1)]);
/// ```
pub fn sort(dates: &[NaiveDate]) -> SortResult {
    sort_with(dates, &DEFAULT_SORTER)
}

/// Sort `dates` with the rules configured on `sorter`.
pub fn sort_with(dates: &[NaiveDate], sorter: &DateSorter) -> SortResult {
    let run = sorter.sort_dates_with_metrics(dates);
    SortResult { dates: run.dates, elapsed: run.metrics.total }
}

/// Sort `dates` with `sorter` and return per-subset details.
///
/// Useful for checking which rule claimed which date.
pub fn sort_verbose_with(dates: &[NaiveDate], sorter: &DateSorter) -> SortResultVerbose {
    let active_rules = sorter.rule_set().active_names().into_iter().map(str::to_string).collect();
    let run = sorter.sort_dates_with_metrics(dates);

    let subsets = run
        .segments
        .iter()
        .zip(&run.metrics.subsets)
        .map(|(segment, metrics)| SubsetSummary {
            rule: segment.rule.to_string(),
            dates: run.dates[segment.range.clone()].to_vec(),
            elapsed: metrics.duration,
        })
        .collect();

    let details = SortDetails { total: run.metrics.total, active_rules, subsets };
    SortResultVerbose { dates: run.dates, elapsed: run.metrics.total, details }
}

/// Read ISO `YYYY-MM-DD` dates out of `text`.
///
/// Dates may be separated by whitespace, commas or semicolons. Any other token
/// is an error, as is a well-formed token naming a day that does not exist.
pub fn parse_dates(text: &str) -> Result<Vec<NaiveDate>, InputError> {
    regex!(r"[\s,;]+")
        .split(text)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(idx, token)| parse_token(token, idx + 1))
        .collect()
}

fn parse_token(token: &str, position: usize) -> Result<NaiveDate, InputError> {
    if !regex!(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").is_match(token) {
        return Err(InputError::InvalidToken { token: token.to_string(), position });
    }
    NaiveDate::parse_from_str(token, "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate { token: token.to_string(), position })
}
