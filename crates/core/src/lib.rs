//! `fundscope-core` — company-record and feature-table building blocks.
//!
//! This crate contains **pure data** primitives (no model or HTTP concerns):
//! the untyped input record, the single-row feature table, the status labels
//! predictions are reported with, and the errors raised while reading them.

pub mod error;
pub mod record;
pub mod status;
pub mod table;

pub use error::{FeatureError, FeatureResult};
pub use record::{RawRecord, CATEGORICAL_FIELDS, NUMERIC_FIELDS};
pub use status::{BinaryStatus, CompanyStatus};
pub use table::{Cell, FeatureTable};
