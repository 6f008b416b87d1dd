//! Web frontend for an assessment recommendation service.
//!
//! Collects a job role, assessment needs and experience level from a form, asks the
//! recommendation service for ranked products, and renders them as HTML.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod render;
pub mod services;
