//! IPMA weather warnings explorer.
//!
//! Fetches the IPMA warnings feed into a per-session [`domain::table::WarningTable`],
//! filters it by awareness type and level, derives the chart aggregates and
//! keeps an append-only log of field observations.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
