//! Data models for statements and configuration.

pub mod config;
pub mod statement;
