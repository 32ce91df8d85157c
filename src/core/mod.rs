//! Core module: domain models, data collaborators, the ranking engine and reports

pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod source;
pub mod store;
