//! Domain model for contract reminders.
//!
//! # Responsibility
//! - Define the contract snapshot consumed by reminder rules.
//! - Define the closed category set and the persisted memo record.
//!
//! # Invariants
//! - Contract snapshots are read-only inputs; nothing in core mutates them.
//! - Memos are identified by a stable `MemoId`.

pub mod category;
pub mod contract;
pub mod memo;
