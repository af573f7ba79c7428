//! # Rates Service
//!
//! Orchestration layer for the exchange-rate pipeline: the per-day load
//! loop and the two read views, generic over the repository and source
//! ports. Contains NO infrastructure logic.

mod report;
mod service;


pub use report::{RateTable, average, historical, render_average};
pub use service::RateLoader;
