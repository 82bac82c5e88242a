//! Building blocks for subset rules.
//!
//! - [`predicates`]: membership tests (month name letters, years, months, cut-off dates).
//! - [`orderings`]: comparators for sorting a subset.
//! - [`presets`]: ready-made rule lists, including the default task rules.
//!
//! Everything here returns plain closures, so they compose with hand-written
//! ones in [`SubsetRule::new`](crate::SubsetRule::new) and [`rule!`](crate::rule).

#[path = "rules/orderings.rs"]
pub mod orderings;
#[path = "rules/predicates.rs"]
pub mod predicates;
#[path = "rules/presets.rs"]
pub mod presets;
