//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate classification, rule evaluation and memo persistence.
//! - Keep callers decoupled from storage and classifier details.

pub mod reminder_service;
