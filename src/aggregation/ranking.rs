use std::cmp::Ordering;

use crate::policy::PriorityPolicy;
use crate::record::TextProperty;

/// One step of the property comparison chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankRule {
    /// Field name, then source name.
    NaturalOrder,
    /// Low-priority sources go after everything else.
    LowPriorityLast,
    /// Non-truncated sources go before everything else.
    NonTruncatedFirst,
}

/// Rules in precedence order. The low-priority check must run before the
/// non-truncated check: a source listed in both sets is low priority.
pub const DEFAULT_RULES: [RankRule; 3] = [
    RankRule::NaturalOrder,
    RankRule::LowPriorityLast,
    RankRule::NonTruncatedFirst,
];

/// Outcome of a single rule: either the order is settled, or the next rule decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Decided(Ordering),
    Undecided,
}

/// Two-sided membership test shared by the policy rules.
/// Both members settle as equal; one member goes `member_goes`.
fn membership(a: bool, b: bool, member_goes: Ordering) -> Verdict {
    match (a, b) {
        (true, true) => Verdict::Decided(Ordering::Equal),
        (true, false) => Verdict::Decided(member_goes),
        (false, true) => Verdict::Decided(member_goes.reverse()),
        (false, false) => Verdict::Undecided,
    }
}

impl RankRule {
    pub fn apply(&self, a: &TextProperty, b: &TextProperty, policy: &PriorityPolicy) -> Verdict {
        match self {
            RankRule::NaturalOrder => match a.natural_cmp(b) {
                Ordering::Equal => Verdict::Undecided,
                decided => Verdict::Decided(decided),
            },
            RankRule::LowPriorityLast => membership(
                policy.is_low_priority(a.attribution.source_url.as_deref()),
                policy.is_low_priority(b.attribution.source_url.as_deref()),
                Ordering::Greater,
            ),
            RankRule::NonTruncatedFirst => membership(
                policy.is_non_truncated(a.attribution.source_url.as_deref()),
                policy.is_non_truncated(b.attribution.source_url.as_deref()),
                Ordering::Less,
            ),
        }
    }
}

pub struct PropertyRanking<'a> {
    policy: &'a PriorityPolicy,
    rules: &'a [RankRule],
}

impl<'a> PropertyRanking<'a> {
    pub fn new(policy: &'a PriorityPolicy) -> Self {
        Self {
            policy,
            rules: &DEFAULT_RULES,
        }
    }

    pub fn with_rules(policy: &'a PriorityPolicy, rules: &'a [RankRule]) -> Self {
        Self { policy, rules }
    }

    pub fn compare(&self, a: &TextProperty, b: &TextProperty) -> Ordering {
        for rule in self.rules {
            if let Verdict::Decided(ordering) = rule.apply(a, b, self.policy) {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Stable sort; ties keep their merge order.
    pub fn sort(&self, properties: &mut [TextProperty]) {
        properties.sort_by(|a, b| self.compare(a, b));
    }
}
