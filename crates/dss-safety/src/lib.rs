//! # dss-safety
//!
//! Cross-dataset reconciliation for the data safety catalog.
//!
//! - [`directory`]: the app, datatype, and relation-icon directories
//! - [`reconcile`]: folding export rows into per-app safety records
//! - [`matcher`]: resolving raw CSV headers against the datatype directory
//! - [`builder`]: turning a record into render-ready rows
//! - [`catalog`]: the object that owns all of the above and loads it

pub mod builder;
pub mod catalog;
pub mod directory;
pub mod matcher;
pub mod reconcile;
pub mod record;

pub use catalog::{Catalog, LoadOutcome, LoadReport, SourceStatus};
pub use matcher::{DatatypeMatch, MatchStep, match_datatype_key};
