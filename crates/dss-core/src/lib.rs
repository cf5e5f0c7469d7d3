//! # dss-core
//!
//! Core types for the data safety catalog.
//!
//! This crate provides the foundational types shared across all dss crates:
//! - Directory entities (apps, data types, relation icons) and safety flags
//! - Relation and flag-kind enums
//! - The name normalizer used for every cross-dataset comparison
//! - `Resolution`, the resolved/unresolved result of a directory lookup
//! - Page cursor arithmetic for the app list
//! - Response types consumed by the presentation layer
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod normalize;
pub mod paging;
pub mod resolution;
pub mod responses;

pub use normalize::normalize;
pub use resolution::Resolution;
