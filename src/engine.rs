//! Partition / sort / concatenate engine.
//!
//! This module holds the mechanics behind [`DateSorter`](crate::DateSorter).
//! The sorter owns the configuration; the engine only ever sees an immutable
//! [`RuleSet`] snapshot and a borrowed input slice.
//!
//! ## How the parts work together
//!
//! ```text
//! user rules ──┐
//!              │  RuleSet::new                 (rule_set.rs)
//!              └──────────────┬──────────────
//!                             │  user rules in order, then FALLBACK
//!                             v
//! dates ───────── partition (partition.rs)
//!                   - each date claimed by the first matching rule
//!                   - claimed subset stable-sorted by the rule's ordering
//!                             │
//!                             v
//!                   concatenate subsets in rule order
//!                             │
//!                             v
//!                  Vec<NaiveDate> / SortRun (metrics.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `rule_set.rs`: the shared, immutable rule snapshot and the fallback rule.
//! - `partition.rs`: claiming, per-subset sorting, and concatenation.
//! - `metrics.rs`: per-run and per-subset timings and output segments.
//!
//! ## Invariants
//!
//! - The fallback rule is never part of the user list, is evaluated exactly
//!   once per sort, and always last.
//! - Every input element is claimed by exactly one rule, so the output is a
//!   permutation of the input.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events: `debug` per sort, `trace` per subset.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/partition.rs"]
mod partition;
#[cfg(test)]
#[path = "engine/properties.rs"]
mod properties;
#[path = "engine/rule_set.rs"]
mod rule_set;

pub use metrics::{Segment, SortMetrics, SortRun, SubsetMetrics};
pub(crate) use partition::{concatenate, partition};
pub use rule_set::{FALLBACK_RULE_NAME, RuleSet};
