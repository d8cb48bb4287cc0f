//! Row types and DTOs for the database layer.

pub mod movie;
