//! Contract product categories.
//!
//! # Invariants
//! - Every contract resolves to exactly one category.
//! - `Other` is the fallback for unrecognized products.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Closed classification of a contract's insurance line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractCategory {
    /// Retirement savings plan (PER).
    RetirementPlan,
    /// Life insurance and savings contracts.
    LifeInsurance,
    /// Complementary health insurance.
    HealthMutual,
    /// Death/disability cover.
    Provident,
    /// Loan insurance.
    BorrowerInsurance,
    #[default]
    Other,
}

impl ContractCategory {
    /// All categories, in display order.
    pub const ALL: [ContractCategory; 6] = [
        Self::RetirementPlan,
        Self::LifeInsurance,
        Self::HealthMutual,
        Self::Provident,
        Self::BorrowerInsurance,
        Self::Other,
    ];

    /// Stable identifier used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RetirementPlan => "retirement_plan",
            Self::LifeInsurance => "life_insurance",
            Self::HealthMutual => "health_mutual",
            Self::Provident => "provident",
            Self::BorrowerInsurance => "borrower_insurance",
            Self::Other => "other",
        }
    }

    /// Human-readable label for UI presentation.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::RetirementPlan => "Plan Épargne Retraite",
            Self::LifeInsurance => "Assurance Vie / Épargne",
            Self::HealthMutual => "Mutuelle Santé",
            Self::Provident => "Prévoyance",
            Self::BorrowerInsurance => "Assurance Emprunteur",
            Self::Other => "Autre",
        }
    }
}

impl Display for ContractCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
