//! Data models for screening rules and the people they are evaluated for.
//!
//! - [`rule`] - The [`rule::ScreeningRule`] record, one authored catalog entry
//! - [`sex`] - [`sex::Sex`] of the person and [`sex::ApplicableSex`] of a rule
//! - [`urgency`] - The three [`urgency::Urgency`] tiers and their fixed order

pub mod rule;
pub mod sex;
pub mod urgency;
