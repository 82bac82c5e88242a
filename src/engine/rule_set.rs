//! Immutable rule snapshots.
//!
//! A [`RuleSet`] is the user-visible, ordered list of subset rules behind an
//! `Arc`. Replacing the rules on a sorter swaps the whole snapshot, so a sort
//! that already cloned the previous snapshot keeps using it unchanged.
//!
//! The fallback rule is not stored in the list. [`RuleSet::active`] appends it
//! while iterating, which keeps it out of reach of callers and guarantees it
//! is evaluated once, last.

use crate::SubsetRule;
use crate::rules::orderings;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Name of the implicit rule that catches every unclaimed date.
pub const FALLBACK_RULE_NAME: &str = "fallback";

static FALLBACK: Lazy<SubsetRule> =
    Lazy::new(|| SubsetRule::named(FALLBACK_RULE_NAME, |_| true, orderings::ascending()));

/// Ordered, shareable list of user subset rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Arc<[SubsetRule]>,
}

impl RuleSet {
    pub fn new(rules: impl IntoIterator<Item = SubsetRule>) -> Self {
        Self { rules: rules.into_iter().collect() }
    }

    /// A rule set with no user rules; everything falls through to the fallback.
    pub fn empty() -> Self {
        Self::new(std::iter::empty::<SubsetRule>())
    }

    /// The user rules, in precedence order. Does not include the fallback.
    pub fn user_rules(&self) -> &[SubsetRule] {
        &self.rules
    }

    /// Number of user rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rule that claims whatever no user rule did.
    pub fn fallback() -> &'static SubsetRule {
        &FALLBACK
    }

    /// Rules in evaluation order: user rules, then the fallback.
    pub fn active(&self) -> impl Iterator<Item = &SubsetRule> {
        self.rules.iter().chain(std::iter::once(Self::fallback()))
    }

    /// Names of the rules in evaluation order.
    pub fn active_names(&self) -> Vec<&'static str> {
        self.active().map(SubsetRule::name).collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<SubsetRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = SubsetRule>>(iter: I) -> Self {
        Self::new(iter)
    }
}
