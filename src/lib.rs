//! # repo-harvest
//!
//! A small HTTP backend that searches GitHub repositories by keyword, keeps
//! a snapshot of every result in SQLite, and serves the stored snapshots
//! back with pagination.
//!
//! ```text
//!   POST /search ──► GitHub search API ──► bulk insert ──► JSON records
//!   GET /results ──► paged read (newest first) ──────────► JSON records
//! ```
//!
//! The two routes never call each other; they only share the store.
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration; `DATABASE_URL` is mandatory
//! - [`models`] - `Record`, `StoredRecord`, request types and pagination rules
//! - [`github`] - Upstream repository search client
//! - [`db`] - `RecordStore` trait and its SQLite implementation
//! - [`error`] - Handler error type and its JSON rendering
//! - [`api`] - Axum router and handlers
//! - [`state`] - Shared application state injected into handlers

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod github;
pub mod models;
pub mod state;
