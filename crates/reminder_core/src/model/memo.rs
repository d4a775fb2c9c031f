//! Memo domain model.
//!
//! # Responsibility
//! - Define the persisted reminder record owned by the memo repository.
//! - Validate memo invariants before they reach storage.
//!
//! # Invariants
//! - `id` is a non-nil UUID and is never reused.
//! - `title`, `user_id` and `organization_id` are non-blank.
//! - `due_time` has minute precision.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a persisted memo.
pub type MemoId = Uuid;

/// Wire format of `due_date`.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format of `due_time`, 24-hour and zero-padded.
pub const DUE_TIME_FORMAT: &str = "%H:%M";

/// Validation errors for memo invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoValidationError {
    NilId,
    EmptyTitle,
    EmptyUserId,
    EmptyOrganizationId,
    /// Seconds or sub-second parts were set on `due_time`.
    SubMinuteDueTime(NaiveTime),
}

impl Display for MemoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "memo id must not be nil"),
            Self::EmptyTitle => write!(f, "memo title must not be empty"),
            Self::EmptyUserId => write!(f, "memo user_id must not be empty"),
            Self::EmptyOrganizationId => write!(f, "memo organization_id must not be empty"),
            Self::SubMinuteDueTime(time) => {
                write!(f, "memo due_time ({time}) must have minute precision")
            }
        }
    }
}

impl Error for MemoValidationError {}

/// Follow-up memo assigned to a user within an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub id: MemoId,
    pub user_id: String,
    pub organization_id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub due_time: NaiveTime,
    pub is_done: bool,
}

impl Memo {
    /// Creates an open memo with a generated stable ID.
    ///
    /// Does not validate; repositories call [`Memo::validate`] on write.
    pub fn new(
        user_id: impl Into<String>,
        organization_id: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
        due_date: NaiveDate,
        due_time: NaiveTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            organization_id: organization_id.into(),
            title: title.into(),
            description,
            due_date,
            due_time,
            is_done: false,
        }
    }

    /// Validates memo invariants.
    pub fn validate(&self) -> Result<(), MemoValidationError> {
        if self.id.is_nil() {
            return Err(MemoValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(MemoValidationError::EmptyTitle);
        }
        if self.user_id.trim().is_empty() {
            return Err(MemoValidationError::EmptyUserId);
        }
        if self.organization_id.trim().is_empty() {
            return Err(MemoValidationError::EmptyOrganizationId);
        }
        if self.due_time.second() != 0 || self.due_time.nanosecond() != 0 {
            return Err(MemoValidationError::SubMinuteDueTime(self.due_time));
        }
        Ok(())
    }

    /// `due_date` as `YYYY-MM-DD`.
    pub fn due_date_iso(&self) -> String {
        self.due_date.format(DUE_DATE_FORMAT).to_string()
    }

    /// `due_time` as `HH:MM`.
    pub fn due_time_hhmm(&self) -> String {
        self.due_time.format(DUE_TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Memo, MemoValidationError};
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    fn sample() -> Memo {
        Memo::new(
            "user-1",
            "org-1",
            "Appeler le client",
            None,
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
            NaiveTime::from_hms_opt(8, 5, 0).unwrap(),
        )
    }

    #[test]
    fn new_memo_is_open_and_valid() {
        let memo = sample();
        assert!(!memo.id.is_nil());
        assert!(!memo.is_done);
        assert_eq!(memo.validate(), Ok(()));
    }

    #[test]
    fn formats_due_date_and_time() {
        let memo = sample();
        assert_eq!(memo.due_date_iso(), "2026-03-09");
        assert_eq!(memo.due_time_hhmm(), "08:05");
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let mut memo = sample();
        memo.title = "  ".to_string();
        assert_eq!(memo.validate(), Err(MemoValidationError::EmptyTitle));

        let mut memo = sample();
        memo.organization_id = String::new();
        assert_eq!(
            memo.validate(),
            Err(MemoValidationError::EmptyOrganizationId)
        );

        let mut memo = sample();
        memo.id = Uuid::nil();
        assert_eq!(memo.validate(), Err(MemoValidationError::NilId));
    }

    #[test]
    fn validate_rejects_seconds_on_due_time() {
        let mut memo = sample();
        memo.due_time = NaiveTime::from_hms_opt(8, 5, 30).unwrap();
        assert!(matches!(
            memo.validate(),
            Err(MemoValidationError::SubMinuteDueTime(_))
        ));
    }
}
