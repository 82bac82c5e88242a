macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect("static regex pattern is valid"));
        &*RE
    }};
}

/// Build a [`SubsetRule`](crate::SubsetRule) from a membership test and an
/// ordering, optionally with a name.
///
/// ```
/// use chrono::{Datelike, NaiveDate};
/// use datesort::rule;
///
/// let rule = rule! {
///     name: "before-2007",
///     member: |date: &NaiveDate| date.year() < 2007,
///     order: |a: &NaiveDate, b: &NaiveDate| b.cmp(a),
/// };
/// assert_eq!(rule.name(), "before-2007");
/// ```
#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        member: $member:expr,
        order: $order:expr
        $(,)?
    ) => {{ $crate::SubsetRule::named($name, $member, $order) }};
    (
        member: $member:expr,
        order: $order:expr
        $(,)?
    ) => {{ $crate::SubsetRule::new($member, $order) }};
}
