//! Core business logic for Sitebooks.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types and calculations live here.
//!
//! # Modules
//!
//! - `currency` - Conversion arithmetic with Banker's Rounding
//! - `calendar` - Month/week day sequences and month-year labels

pub mod calendar;
pub mod currency;
