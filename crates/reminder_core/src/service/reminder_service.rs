//! Automatic reminder use-case service.
//!
//! # Responsibility
//! - Turn a freshly created contract into zero or one persisted memo.
//! - Convert every collaborator failure into a structured outcome.
//!
//! # Invariants
//! - `create_automatic_reminder` never returns an error and never panics on
//!   collaborator failures.
//! - `reminder_created == true` only after the repository accepted the memo.
//! - `ContractCategory::Other` never reaches the repository.
//! - Log events carry metadata only: no product text, user ids or titles.

use crate::classify::{CategoryClassifier, ClassifyError, KeywordCategoryClassifier};
use crate::clock::{Clock, SystemClock};
use crate::model::category::ContractCategory;
use crate::model::contract::{ContractSnapshot, RenewalStatus};
use crate::model::memo::Memo;
use crate::repo::memo_repo::{MemoRepository, RepoError};
use crate::rules::{plan_reminder, ReminderTemplate, ScheduleError};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub const NO_REMINDER_FOR_CATEGORY_MESSAGE: &str =
    "Aucun rappel automatique pour ce type de contrat";
pub const NO_REMINDER_NEEDED_MESSAGE: &str = "Aucun rappel nécessaire pour cette configuration";
pub const REMINDER_FAILURE_MESSAGE: &str = "Erreur lors de la création du rappel automatique";

/// Failure inside one automatic reminder attempt.
#[derive(Debug)]
pub enum ReminderError {
    Classify(ClassifyError),
    Schedule(ScheduleError),
    Repo(RepoError),
}

impl Display for ReminderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classify(err) => write!(f, "{err}"),
            Self::Schedule(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReminderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Classify(err) => Some(err),
            Self::Schedule(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ClassifyError> for ReminderError {
    fn from(value: ClassifyError) -> Self {
        Self::Classify(value)
    }
}

impl From<ScheduleError> for ReminderError {
    fn from(value: ScheduleError) -> Self {
        Self::Schedule(value)
    }
}

impl From<RepoError> for ReminderError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Result reported to the caller of `create_automatic_reminder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderOutcome {
    pub success: bool,
    pub message: String,
    pub reminder_created: bool,
}

impl ReminderOutcome {
    /// A memo was persisted.
    pub fn created(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            reminder_created: true,
        }
    }

    /// Nothing to persist for this contract.
    pub fn skipped(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            reminder_created: false,
        }
    }

    /// Fixed failure outcome.
    pub fn failure() -> Self {
        Self {
            success: false,
            message: REMINDER_FAILURE_MESSAGE.to_string(),
            reminder_created: false,
        }
    }
}

/// Builds the confirmation message for a persisted reminder.
///
/// Reminders due later than today get a `(prévu dans N jours)` suffix.
pub fn created_message(template: &ReminderTemplate) -> String {
    let mut message = format!("Rappel automatique créé : \"{}\"", template.title);
    if template.days_offset > 0 {
        message.push_str(&format!(" (prévu dans {} jours)", template.days_offset));
    }
    message
}

/// Use-case service deriving automatic reminders from new contracts.
pub struct AutomaticReminderService<C, R, K> {
    classifier: C,
    repo: R,
    clock: K,
}

impl<R: MemoRepository> AutomaticReminderService<KeywordCategoryClassifier, R, SystemClock> {
    /// Wires the keyword classifier and the local system clock.
    pub fn with_defaults(repo: R) -> Self {
        Self::new(KeywordCategoryClassifier::new(), repo, SystemClock)
    }
}

impl<C, R, K> AutomaticReminderService<C, R, K>
where
    C: CategoryClassifier,
    R: MemoRepository,
    K: Clock,
{
    pub fn new(classifier: C, repo: R, clock: K) -> Self {
        Self {
            classifier,
            repo,
            clock,
        }
    }

    /// Creates the automatic reminder for a freshly created contract, if any.
    ///
    /// # Contract
    /// - `Other` category: success, nothing created, repository untouched.
    /// - Rule did not fire: success, nothing created.
    /// - Memo persisted: success, created, message echoes the title.
    /// - Any collaborator failure: the fixed failure outcome, error logged.
    pub fn create_automatic_reminder(
        &self,
        contract: &ContractSnapshot,
        user_id: &str,
        organization_id: &str,
    ) -> ReminderOutcome {
        let started_at = Instant::now();

        match self.try_create(contract, user_id, organization_id) {
            Ok((category, outcome)) => {
                info!(
                    "event=auto_reminder module=service status=ok category={} reminder_created={} duration_ms={}",
                    category,
                    outcome.reminder_created,
                    started_at.elapsed().as_millis()
                );
                outcome
            }
            Err(err) => {
                error!(
                    "event=auto_reminder module=service status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                ReminderOutcome::failure()
            }
        }
    }

    fn try_create(
        &self,
        contract: &ContractSnapshot,
        user_id: &str,
        organization_id: &str,
    ) -> Result<(ContractCategory, ReminderOutcome), ReminderError> {
        let category = self.classifier.classify(&contract.product)?;
        if category == ContractCategory::Other {
            return Ok((
                category,
                ReminderOutcome::skipped(NO_REMINDER_FOR_CATEGORY_MESSAGE),
            ));
        }

        let Some(template) = plan_reminder(category, contract) else {
            if category == ContractCategory::Provident
                && contract.renewal_status == RenewalStatus::Unset
            {
                debug!("event=auto_reminder module=service status=skip category={category} renewal_status=unset");
            }
            return Ok((category, ReminderOutcome::skipped(NO_REMINDER_NEEDED_MESSAGE)));
        };

        let scheduled = template.schedule_at(self.clock.now())?;
        let memo = Memo::new(
            user_id,
            organization_id,
            scheduled.title,
            scheduled.description,
            scheduled.due_date,
            scheduled.due_time,
        );
        self.repo.create_memo(&memo)?;
        debug!(
            "event=auto_reminder module=service status=persisted category={category} memo_id={} days_offset={}",
            memo.id, scheduled.days_offset
        );

        Ok((category, ReminderOutcome::created(created_message(&template))))
    }
}
