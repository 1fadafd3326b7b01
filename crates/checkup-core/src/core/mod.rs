//! # Core Module
//!
//! Stateless reference data for the recommendation engine.
//!
//! ## Overview
//!
//! The core module holds everything that is authored rather than computed:
//! the data models describing a screening rule and the catalog that collects
//! those rules in their canonical order. Nothing in here makes a decision;
//! the [`crate::engine`] layer reads this data to produce recommendations.
//!
//! - **Data Models** ([`models`]) - Screening rules, sex, and urgency tiers
//! - **Catalog** ([`catalog`]) - The builtin rule set and loadable custom catalogs
//!
//! The builtin catalog is built once per process and never mutated, so it can be
//! shared by reference across threads without synchronization.

pub mod catalog;
pub mod models;
