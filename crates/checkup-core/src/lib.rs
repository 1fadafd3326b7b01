//! # Checkup Core Library
//!
//! A small engine that recommends periodic health screenings from a person's age and
//! biological sex, grouped by urgency. It is an educational aid: it does not diagnose,
//! does not weigh risk factors beyond age and sex, and keeps no user data.
//!
//! ## Architecture
//!
//! - **[`core`]: Reference Data.** The [`core::models`] that describe a screening rule and
//!   the immutable [`core::catalog::Catalog`] of authored rules.
//!
//! - **[`engine`]: The Logic Core.** Pure functions that validate an age, test a rule's
//!   eligibility, select and order matching rules, and split them by urgency.
//!
//! - **[`workflows`]: The Public API.** Chains the engine steps for a single user query and
//!   returns a [`workflows::recommend::Recommendation`] ready to render.
//!
//! ```
//! use checkup::core::catalog::Catalog;
//! use checkup::core::models::sex::Sex;
//! use checkup::workflows::recommend::{self, UserQuery};
//!
//! let query = UserQuery::new("42", Sex::Female);
//! let recommendation = recommend::run(Catalog::builtin(), &query).unwrap();
//! assert_eq!(recommendation.rules[0].id, "bp");
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
