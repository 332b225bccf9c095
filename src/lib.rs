//! Progressive Income Tax Calculator
//!
//! This crate computes income tax for a salary and tax year by applying
//! marginal-rate banding to the year's ordered tax brackets. It provides the
//! pure calculation functions, bracket providers that resolve a year's table
//! from an upstream HTTP service or from YAML files, and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
