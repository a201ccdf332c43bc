//! QuoteLab Core — the quote analysis pipeline.
//!
//! This crate contains everything between a raw quote CSV and a drawable
//! series:
//! - Domain types (quotes, time intervals)
//! - CSV ingestion with a per-record parse report
//! - Trailing simple-moving-average analysis over the full history
//! - Inclusive date-range filtering (views, never copies)
//! - Buy/sell signal classification against the trailing average
//!
//! The pipeline runs once per data load: parse → analyze → classify. Range
//! filtering is the only operation that runs again afterwards, and it never
//! recomputes anything — the analyzed sequence is immutable once built.

pub mod analysis;
pub mod data;
pub mod domain;
pub mod signals;
