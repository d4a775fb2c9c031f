//! Due date/time resolution for reminder templates.
//!
//! The due date moves by whole calendar days; the due time is always the
//! current local time truncated to the minute, whatever the offset.

use super::contract_rules::ReminderTemplate;
use crate::model::memo::DUE_TIME_FORMAT;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Offset pushes the due date past the supported calendar range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleError {
    pub today: NaiveDate,
    pub days_offset: u32,
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "due date out of range: {} + {} days",
            self.today, self.days_offset
        )
    }
}

impl Error for ScheduleError {}

/// Template resolved against a concrete "now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReminder {
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub due_time: NaiveTime,
    pub days_offset: u32,
}

impl ReminderTemplate {
    /// Resolves the relative offset into an absolute due date/time.
    pub fn schedule_at(&self, now: NaiveDateTime) -> Result<ScheduledReminder, ScheduleError> {
        let today = now.date();
        let due_date = today
            .checked_add_days(Days::new(u64::from(self.days_offset)))
            .ok_or(ScheduleError {
                today,
                days_offset: self.days_offset,
            })?;

        Ok(ScheduledReminder {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date,
            due_time: truncate_to_minute(now.time()),
            days_offset: self.days_offset,
        })
    }
}

/// Formats a time of day as zero-padded 24-hour `HH:MM`.
pub fn format_due_time(time: NaiveTime) -> String {
    time.format(DUE_TIME_FORMAT).to_string()
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::{format_due_time, ReminderTemplate};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn at(date: (i32, u32, u32), time: (u32, u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, time.2)
            .unwrap()
    }

    fn template(days_offset: u32) -> ReminderTemplate {
        ReminderTemplate {
            title: "Rappel".to_string(),
            description: None,
            days_offset,
        }
    }

    #[test]
    fn zero_offset_is_due_today_at_current_minute() {
        let scheduled = template(0).schedule_at(at((2026, 10, 16), (9, 7, 42))).unwrap();
        assert_eq!(scheduled.due_date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(format_due_time(scheduled.due_time), "09:07");
        assert_eq!(scheduled.due_time, NaiveTime::from_hms_opt(9, 7, 0).unwrap());
    }

    #[test]
    fn offset_crosses_month_and_year_boundaries() {
        let scheduled = template(21).schedule_at(at((2026, 12, 20), (23, 59, 59))).unwrap();
        assert_eq!(scheduled.due_date, NaiveDate::from_ymd_opt(2027, 1, 10).unwrap());
        assert_eq!(format_due_time(scheduled.due_time), "23:59");
    }

    #[test]
    fn offset_handles_leap_day() {
        let scheduled = template(21).schedule_at(at((2028, 2, 15), (0, 0, 0))).unwrap();
        assert_eq!(scheduled.due_date, NaiveDate::from_ymd_opt(2028, 3, 7).unwrap());
        assert_eq!(format_due_time(scheduled.due_time), "00:00");
    }

    #[test]
    fn out_of_range_offset_is_an_error() {
        let err = template(21).schedule_at(NaiveDateTime::MAX).unwrap_err();
        assert_eq!(err.days_offset, 21);
    }
}
