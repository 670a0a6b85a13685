//! Foodhub Domain Core
//!
//! Catalog data, cart engine, menu view state, and checkout totals.
//! This crate has no browser dependencies (only serde for serialization
//! and log for diagnostics), so everything here runs and tests natively.

pub mod catalog;
pub mod checkout;
pub mod domain;
pub mod menu;
pub mod storage;
