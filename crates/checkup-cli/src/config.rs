//! Layered configuration: CLI flags over `-S` overrides over the config file over defaults.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
