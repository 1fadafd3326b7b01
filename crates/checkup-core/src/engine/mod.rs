//! # Engine Module
//!
//! The decision logic of the recommendation engine. Every function here is pure:
//! no I/O, no shared mutable state, and work proportional to the catalog size.
//!
//! ## Pipeline
//!
//! - **Age Validation** ([`age`]) - Turns raw age text into a bounded [`age::Age`]
//! - **Eligibility** ([`eligibility`]) - Whether one rule applies to an age and sex
//! - **Recommendation** ([`recommend`]) - Filters the catalog and orders it by urgency
//! - **Partitioning** ([`partition`]) - Splits a recommendation into urgency buckets
//! - **Error Handling** ([`error`]) - The input errors a caller must present to the user
//!
//! Validation is the only fallible step. Once an [`age::Age`] exists, filtering,
//! sorting and partitioning cannot fail.

pub mod age;
pub mod eligibility;
pub mod error;
pub mod partition;
pub mod recommend;
