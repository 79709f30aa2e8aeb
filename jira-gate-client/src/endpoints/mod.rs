//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by resource: the authenticated user,
//! issues (fetch, search, create, update), and projects.

pub mod issues;
pub mod myself;
pub mod projects;
pub mod search;
