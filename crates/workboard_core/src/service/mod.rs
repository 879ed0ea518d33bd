//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level CRUD APIs.
//! - Keep the HTTP layer decoupled from storage details.

pub mod record_service;
