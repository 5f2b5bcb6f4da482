//! Foodhub server library.
//!
//! This crate provides the HTTP API, the JSON record store and the account,
//! catalog and order services as a library, allowing them to be tested and
//! reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use routes::app;
