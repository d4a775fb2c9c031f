//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the memo persistence contract used by reminder services.
//! - Isolate SQLite query details from reminder decision logic.
//!
//! # Invariants
//! - Repository writes must enforce `Memo::validate()` before persistence.
//! - Repository reads reject malformed rows instead of masking them.

pub mod memo_repo;
