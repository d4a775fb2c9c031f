//! Keyword-based category classifier.
//!
//! # Responsibility
//! - Recognize the five supported insurance lines from product names.
//!
//! # Invariants
//! - Matching is case-insensitive and tolerates missing French accents.
//! - Rules are evaluated in a fixed order; the first match wins.

use super::{CategoryClassifier, ClassifyError};
use crate::model::category::ContractCategory;
use once_cell::sync::Lazy;
use regex::Regex;

// Loan cover is checked first: "prêt" products often mention "décès".
// Retirement comes before life insurance: "Plan Épargne Retraite" contains "épargne".
// Provident comes before health: "Prévoyance Santé" is gated on renewal status.
static CATEGORY_RULES: Lazy<Vec<(ContractCategory, Regex)>> = Lazy::new(|| {
    vec![
        (
            ContractCategory::BorrowerInsurance,
            Regex::new(r"(?i)emprunteur|\bpr[êe]ts?\b").expect("valid borrower regex"),
        ),
        (
            ContractCategory::RetirementPlan,
            Regex::new(r"(?i)\bper(?:in|o|co|cat|p)?\b|retraite|madelin")
                .expect("valid retirement regex"),
        ),
        (
            ContractCategory::Provident,
            Regex::new(r"(?i)pr[ée]voyance|d[ée]c[èe]s|incapacit[ée]|invalidit[ée]|obs[èe]ques")
                .expect("valid provident regex"),
        ),
        (
            ContractCategory::HealthMutual,
            Regex::new(r"(?i)mutuelle|sant[ée]").expect("valid health regex"),
        ),
        (
            ContractCategory::LifeInsurance,
            Regex::new(r"(?i)assurance[\s\-]+vie|[ée]pargne|capitalisation")
                .expect("valid life insurance regex"),
        ),
    ]
});

/// Default classifier matching product names against keyword rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordCategoryClassifier;

impl KeywordCategoryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Infallible classification used by the trait implementation.
    pub fn category_of(&self, product: &str) -> ContractCategory {
        let product = product.trim();
        if product.is_empty() {
            return ContractCategory::Other;
        }

        CATEGORY_RULES
            .iter()
            .find(|(_, pattern)| pattern.is_match(product))
            .map_or(ContractCategory::Other, |(category, _)| *category)
    }
}

impl CategoryClassifier for KeywordCategoryClassifier {
    fn classify(&self, product: &str) -> Result<ContractCategory, ClassifyError> {
        Ok(self.category_of(product))
    }
}

#[cfg(test)]
mod tests {
    use super::KeywordCategoryClassifier;
    use crate::model::category::ContractCategory;

    fn classify(product: &str) -> ContractCategory {
        KeywordCategoryClassifier::new().category_of(product)
    }

    #[test]
    fn recognizes_each_insurance_line() {
        assert_eq!(classify("PER Individuel"), ContractCategory::RetirementPlan);
        assert_eq!(classify("Contrat Madelin"), ContractCategory::RetirementPlan);
        assert_eq!(classify("PERP"), ContractCategory::RetirementPlan);
        assert_eq!(classify("Assurance Vie Multisupport"), ContractCategory::LifeInsurance);
        assert_eq!(classify("Mutuelle Famille"), ContractCategory::HealthMutual);
        assert_eq!(classify("Prévoyance TNS"), ContractCategory::Provident);
        assert_eq!(classify("Emprunteur Pro"), ContractCategory::BorrowerInsurance);
    }

    #[test]
    fn matching_ignores_case_and_accents() {
        assert_eq!(classify("per individuel"), ContractCategory::RetirementPlan);
        assert_eq!(classify("PREVOYANCE"), ContractCategory::Provident);
        assert_eq!(classify("complementaire sante"), ContractCategory::HealthMutual);
        assert_eq!(classify("Contrat epargne"), ContractCategory::LifeInsurance);
    }

    #[test]
    fn first_matching_rule_wins() {
        assert_eq!(classify("Plan Épargne Retraite"), ContractCategory::RetirementPlan);
        assert_eq!(classify("Prévoyance Santé TNS"), ContractCategory::Provident);
        assert_eq!(
            classify("Assurance emprunteur décès"),
            ContractCategory::BorrowerInsurance
        );
    }

    #[test]
    fn per_must_be_a_whole_word() {
        assert_eq!(classify("Super Auto"), ContractCategory::Other);
        assert_eq!(classify("Perte d'exploitation"), ContractCategory::Other);
    }

    #[test]
    fn unknown_or_empty_text_is_other() {
        assert_eq!(classify(""), ContractCategory::Other);
        assert_eq!(classify("   "), ContractCategory::Other);
        assert_eq!(classify("Multirisque Habitation"), ContractCategory::Other);
    }
}
