//! Domain types shared by the repository and API layers.
//!
//! This crate has no internal dependencies so it can be used by both the
//! API/repository layer and any future CLI or worker tooling.

pub mod error;
pub mod pagination;
pub mod sort;
pub mod types;
