//! Transaction analytics core for the revenue-leakage dashboard.
//!
//! Data flow:
//!   SeedSource → TransactionGenerator → Vec<Transaction>  (or dataset::load_json)
//!   FilterState owns the records + FilterSet
//!   filter::apply → aggregation::* → views::*

pub mod aggregation;
pub mod clock;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod generator;
pub mod rng;
pub mod seed;
pub mod state;
pub mod store;
pub mod transaction;
pub mod types;
pub mod views;
