//! HTTP delivery layer: configuration, router, handlers and the movie
//! service orchestrating the repository and image store.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod service;
pub mod state;
pub mod storage;
