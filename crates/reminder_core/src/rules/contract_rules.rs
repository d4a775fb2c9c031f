//! Per-category reminder rules.
//!
//! Each rule reads only the snapshot flags relevant to its insurance line.
//! Titles and descriptions are user-facing French copy.

use crate::model::category::ContractCategory;
use crate::model::contract::ContractSnapshot;

/// Reminder decided by a rule, before due-date resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderTemplate {
    pub title: String,
    pub description: Option<String>,
    /// Days after today; `0` means due today.
    pub days_offset: u32,
}

impl ReminderTemplate {
    fn new(title: &str, description: String, days_offset: u32) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description),
            days_offset,
        }
    }
}

/// Dispatches to the rule of `category`.
///
/// Returns `None` when the rule does not fire, and always for
/// `ContractCategory::Other`.
pub fn plan_reminder(
    category: ContractCategory,
    contract: &ContractSnapshot,
) -> Option<ReminderTemplate> {
    match category {
        ContractCategory::RetirementPlan => reminder_for_retirement_plan(contract),
        ContractCategory::LifeInsurance => reminder_for_life_insurance(contract),
        ContractCategory::HealthMutual => Some(reminder_for_health_mutual(contract)),
        ContractCategory::Provident => reminder_for_provident(contract),
        ContractCategory::BorrowerInsurance => Some(reminder_for_borrower_insurance(contract)),
        ContractCategory::Other => None,
    }
}

/// Transfer request when the client already holds a retirement plan.
pub fn reminder_for_retirement_plan(contract: &ContractSnapshot) -> Option<ReminderTemplate> {
    if !contract.holds_retirement_plan() {
        return None;
    }
    Some(ReminderTemplate::new(
        "Faire demande de transfert + suspension des versements sur l'ancien PER",
        concerned_contract(contract),
        0,
    ))
}

/// Buyback follow-up; both flags must be set.
pub fn reminder_for_life_insurance(contract: &ContractSnapshot) -> Option<ReminderTemplate> {
    if !(contract.holds_life_insurance() && contract.is_buyback_performed()) {
        return None;
    }
    Some(ReminderTemplate::new(
        "Suivi du rachat total ou partiel",
        concerned_contract(contract),
        0,
    ))
}

pub fn reminder_for_health_mutual(contract: &ContractSnapshot) -> ReminderTemplate {
    ReminderTemplate::new(
        "Avez-vous fait la RIA ?",
        format!(
            "RIA (Résiliation Infra-Annuelle) - Contrat : {}",
            contract.product
        ),
        0,
    )
}

/// Fires for renewals and replacements only; `New` and `Unset` yield nothing.
pub fn reminder_for_provident(contract: &ContractSnapshot) -> Option<ReminderTemplate> {
    let status = contract.renewal_status;
    if !status.replaces_previous_contract() {
        return None;
    }
    Some(ReminderTemplate::new(
        "Avez-vous effectué la RIA (résiliation ou non reconduction) ?",
        format!("Contrat en {} : {}", status.as_form_value(), contract.product),
        0,
    ))
}

pub fn reminder_for_borrower_insurance(contract: &ContractSnapshot) -> ReminderTemplate {
    ReminderTemplate::new(
        "Appeler le client pour vérification de l'avenant bancaire",
        concerned_contract(contract),
        21,
    )
}

fn concerned_contract(contract: &ContractSnapshot) -> String {
    format!("Contrat concerné : {}", contract.product)
}
