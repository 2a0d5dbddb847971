//! The two inference paths exposed by the service.

pub mod binary;
pub mod multiclass;

pub use binary::BinaryAdapter;
pub use multiclass::{MulticlassAdapter, MulticlassPrediction};
