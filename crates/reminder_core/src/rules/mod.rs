//! Reminder rule engine.
//!
//! # Responsibility
//! - Decide, per contract category, whether a follow-up reminder is needed.
//! - Resolve a reminder template into a concrete due date and time.
//!
//! # Invariants
//! - Rule functions are pure: same snapshot, same template.
//! - `ContractCategory::Other` never yields a template.

pub mod contract_rules;
pub mod schedule;

pub use contract_rules::{
    plan_reminder, reminder_for_borrower_insurance, reminder_for_health_mutual,
    reminder_for_life_insurance, reminder_for_provident, reminder_for_retirement_plan,
    ReminderTemplate,
};
pub use schedule::{format_due_time, ScheduleError, ScheduledReminder};
