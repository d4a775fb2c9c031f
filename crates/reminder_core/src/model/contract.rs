//! Contract snapshot captured at contract-creation time.
//!
//! # Responsibility
//! - Carry the product text and the flags consulted by reminder rules.
//! - Map the contract form wire names onto typed fields.
//!
//! # Invariants
//! - Absent boolean flags are read as `false`.
//! - An absent, `null` or empty renewal status is `RenewalStatus::Unset`,
//!   never `New`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Renewal/replacement status selected on the contract form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Option<String>", into = "String")]
pub enum RenewalStatus {
    /// Brand new contract (`nouveau`).
    New,
    /// Renewal of an existing contract (`renouvellement`).
    Renewal,
    /// Replacement of a contract held elsewhere (`remplacement`).
    Replacement,
    /// Field left blank on the form.
    #[default]
    Unset,
}

impl RenewalStatus {
    /// Returns the form value, also used verbatim in reminder descriptions.
    pub fn as_form_value(self) -> &'static str {
        match self {
            Self::New => "nouveau",
            Self::Renewal => "renouvellement",
            Self::Replacement => "remplacement",
            Self::Unset => "",
        }
    }

    /// Parses a form value. Surrounding whitespace is ignored.
    pub fn parse_form_value(value: &str) -> Option<Self> {
        match value.trim() {
            "nouveau" => Some(Self::New),
            "renouvellement" => Some(Self::Renewal),
            "remplacement" => Some(Self::Replacement),
            "" => Some(Self::Unset),
            _ => None,
        }
    }

    /// Whether the contract takes over from a previous one.
    pub fn replaces_previous_contract(self) -> bool {
        matches!(self, Self::Renewal | Self::Replacement)
    }
}

impl Display for RenewalStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_form_value())
    }
}

/// Rejected renewal status form value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRenewalStatus(pub String);

impl Display for UnknownRenewalStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown renewal status `{}`; expected nouveau|renouvellement|remplacement or empty",
            self.0
        )
    }
}

impl Error for UnknownRenewalStatus {}

impl TryFrom<String> for RenewalStatus {
    type Error = UnknownRenewalStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_form_value(&value).ok_or(UnknownRenewalStatus(value))
    }
}

impl TryFrom<Option<String>> for RenewalStatus {
    type Error = UnknownRenewalStatus;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        value.map_or(Ok(Self::Unset), <Self as TryFrom<String>>::try_from)
    }
}

impl From<RenewalStatus> for String {
    fn from(value: RenewalStatus) -> Self {
        value.as_form_value().to_string()
    }
}

/// Read-only view of a freshly created contract.
///
/// Serialized with the contract form field names so payloads coming from the
/// form can be decoded without a translation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSnapshot {
    /// Free-text product name, e.g. `PER Individuel`.
    #[serde(rename = "produit")]
    pub product: String,
    /// Client already holds a retirement savings plan.
    #[serde(rename = "per_existant", default, skip_serializing_if = "Option::is_none")]
    pub has_existing_retirement_plan: Option<bool>,
    /// Client already holds a life insurance contract.
    #[serde(
        rename = "assurance_vie_existante",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub has_existing_life_insurance: Option<bool>,
    /// A buyback was performed on the existing life insurance.
    #[serde(rename = "rachat_effectue", default, skip_serializing_if = "Option::is_none")]
    pub buyback_performed: Option<bool>,
    #[serde(rename = "contrat_renouvellement_remplacement", default)]
    pub renewal_status: RenewalStatus,
}

impl ContractSnapshot {
    /// Creates a snapshot with every flag absent.
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            ..Self::default()
        }
    }

    pub fn with_existing_retirement_plan(mut self, value: bool) -> Self {
        self.has_existing_retirement_plan = Some(value);
        self
    }

    pub fn with_existing_life_insurance(mut self, value: bool) -> Self {
        self.has_existing_life_insurance = Some(value);
        self
    }

    pub fn with_buyback_performed(mut self, value: bool) -> Self {
        self.buyback_performed = Some(value);
        self
    }

    pub fn with_renewal_status(mut self, value: RenewalStatus) -> Self {
        self.renewal_status = value;
        self
    }

    pub fn holds_retirement_plan(&self) -> bool {
        self.has_existing_retirement_plan.unwrap_or(false)
    }

    pub fn holds_life_insurance(&self) -> bool {
        self.has_existing_life_insurance.unwrap_or(false)
    }

    pub fn is_buyback_performed(&self) -> bool {
        self.buyback_performed.unwrap_or(false)
    }
}
