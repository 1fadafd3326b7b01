use crate::core::models::rule::ScreeningRule;
use crate::core::models::urgency::Urgency;
use serde::Serialize;

/// Recommended rules split by urgency tier, each tier in its input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrgencyBuckets<'a> {
    pub high: Vec<&'a ScreeningRule>,
    pub medium: Vec<&'a ScreeningRule>,
    pub low: Vec<&'a ScreeningRule>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UrgencyCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl UrgencyCounts {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    pub fn get(&self, urgency: Urgency) -> usize {
        match urgency {
            Urgency::High => self.high,
            Urgency::Medium => self.medium,
            Urgency::Low => self.low,
        }
    }
}

impl<'a> UrgencyBuckets<'a> {
    pub fn get(&self, urgency: Urgency) -> &[&'a ScreeningRule] {
        match urgency {
            Urgency::High => &self.high,
            Urgency::Medium => &self.medium,
            Urgency::Low => &self.low,
        }
    }

    pub fn counts(&self) -> UrgencyCounts {
        UrgencyCounts {
            high: self.high.len(),
            medium: self.medium.len(),
            low: self.low.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.counts().total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High, then medium, then low.
    pub fn iter(&self) -> impl Iterator<Item = &'a ScreeningRule> + '_ {
        Urgency::ALL
            .into_iter()
            .flat_map(move |urgency| self.get(urgency).iter().copied())
    }
}

/// Splits `rules` by urgency. Does not filter or reorder within a tier.
pub fn partition<'a>(rules: &[&'a ScreeningRule]) -> UrgencyBuckets<'a> {
    let mut buckets = UrgencyBuckets::default();
    for &rule in rules {
        match rule.urgency {
            Urgency::High => buckets.high.push(rule),
            Urgency::Medium => buckets.medium.push(rule),
            Urgency::Low => buckets.low.push(rule),
        }
    }
    buckets
}
