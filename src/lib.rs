//! Verse Index
//!
//! Word-level topical tagging of scripture, plus the SQLite-backed service
//! that stores it. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `reference`: word positions (`Gen 1:1.1`), parsing and ordering
//! - `resolver`: which verses and words a range covers, highlight painting
//! - `topics`: per-chapter topic index and visibility projection
//! - `selection`: pointer-driven word selection and tag creation
//! - `view`: chapter view state, loading and stale-response guard
//! - `source`: data access used by the reading core
//! - `db`, `routes`: persistence and HTTP API

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod reference;
pub mod resolver;
pub mod routes;
pub mod selection;
pub mod source;
pub mod state;
pub mod topics;
pub mod view;
