//! # Taskman Shared Library
//!
//! This crate contains the persistence model and data-access layer shared by
//! the Taskman API server and its tooling.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool, migrations, and database initialization
//! - `models`: Database models and their CRUD operations
//! - `ops`: Data-access operations mediating between handlers and models

pub mod db;
pub mod models;
pub mod ops;
