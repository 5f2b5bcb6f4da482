//! Foodhub Core - Shared record types.
//!
//! This crate provides the types used across all Foodhub components:
//! - `server` - HTTP/JSON API over the flat-file record store
//! - `cli` - Command-line tools for initializing, seeding and inspecting data
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no HTTP.
//! Every record serializes to the exact camelCase JSON shape kept on disk, so
//! the data files written by earlier deployments load unchanged.
//!
//! # Modules
//!
//! - [`types`] - Records, collection documents, vendor categories and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
