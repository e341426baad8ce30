//! Property listing tracker: loads a listing collection and browses it with
//! search, filters, sorting and pagination.

pub mod compare;
pub mod config;
pub mod detail;
pub mod engine;
pub mod models;
pub mod settings;
pub mod sources;
