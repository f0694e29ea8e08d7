//! Field projection over schemaless JSON records.
//!
//! This crate provides the core of the select service:
//! - [`Record`] and [`ProjectedRecord`], ordered JSON object maps
//! - [`Projector`] for applying a fixed field list to records
//! - [`project`] as the one-shot entry point
//! - [`SelectRequest`], the request envelope decoded at the HTTP boundary

pub mod error;
pub mod projector;
pub mod request;

pub use error::{ProjectorError, Result};
pub use projector::{ProjectedRecord, Projector, Record, project};
pub use request::SelectRequest;
