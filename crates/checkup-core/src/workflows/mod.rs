//! # Workflows Module
//!
//! End-to-end entry points for presentation layers.
//!
//! A workflow takes the raw input a user typed, runs it through the
//! [`crate::engine`] pipeline, and hands back a single value the caller can
//! render. Callers never need to sequence validation, filtering and
//! partitioning themselves.
//!
//! - **Recommendation Workflow** ([`recommend`]) - Raw age and sex in, grouped screenings out

pub mod recommend;
