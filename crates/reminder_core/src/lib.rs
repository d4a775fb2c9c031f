//! Core domain logic for automatic contract reminders.
//! This crate decides which follow-up memo a new insurance contract needs.

pub mod classify;
pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod rules;
pub mod service;

pub use classify::{CategoryClassifier, ClassifyError, KeywordCategoryClassifier};
pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::ContractCategory;
pub use model::contract::{ContractSnapshot, RenewalStatus, UnknownRenewalStatus};
pub use model::memo::{Memo, MemoId, MemoValidationError};
pub use repo::memo_repo::{MemoRepository, RepoError, RepoResult, SqliteMemoRepository};
pub use rules::{plan_reminder, ReminderTemplate, ScheduleError, ScheduledReminder};
pub use service::reminder_service::{
    created_message, AutomaticReminderService, ReminderError, ReminderOutcome,
    NO_REMINDER_FOR_CATEGORY_MESSAGE, NO_REMINDER_NEEDED_MESSAGE, REMINDER_FAILURE_MESSAGE,
};

/// Minimal health-check API for integration checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
