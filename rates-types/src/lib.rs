//! # Rates Types
//!
//! Domain types and port traits for the exchange-rate history pipeline.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, RateRecord, DateRange)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Load-run outcome types crossing the service boundary
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CurrencyCode, DateRange, RateAverage, RateRecord};
pub use dto::{DayOutcome, LoadReport};
pub use error::{AppError, DomainError, FetchError, RepoError};
pub use ports::{RateRepository, RateSource};
