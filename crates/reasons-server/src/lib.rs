//! HTTP/JSON API server for the reasons collection.
//!
//! Provides a small REST API for creating reasons, listing the ones not yet
//! visited, and flipping their visited flag. This crate contains the service
//! logic, API schema types, error handling, configuration and route
//! definitions; persistence lives in `reasons-store`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
