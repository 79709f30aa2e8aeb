//! Test utilities shared across the jira-gate workspace
//!
//! This crate provides common testing infrastructure including:
//! - HOME directory isolation ([`HomeEnvTestGuard`])
//! - Temporary credentials files ([`ConfigFileGuard`])
//!
//! The dead_code lint is disabled for this crate because test utilities may
//! not be used by all tests, and the compiler cannot detect usage across crate
//! boundaries in development dependencies.

#![allow(dead_code)]

pub mod config;
pub mod home;

pub use config::ConfigFileGuard;
pub use home::HomeEnvTestGuard;
