//! Contract category classification.
//!
//! # Responsibility
//! - Map free-text product names onto `ContractCategory`.
//! - Keep the classifier behind a trait so callers can plug in catalog-backed
//!   implementations.
//!
//! # Invariants
//! - Classification is total: unknown text resolves to `ContractCategory::Other`.
//! - Classifiers never panic on arbitrary input.

use crate::model::category::ContractCategory;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod keyword;

pub use keyword::KeywordCategoryClassifier;

/// Classification failure raised by fallible classifier implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Backing catalog or service could not be reached.
    Unavailable(String),
}

impl Display for ClassifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(details) => write!(f, "category classifier unavailable: {details}"),
        }
    }
}

impl Error for ClassifyError {}

/// Resolves the category of a contract from its product text.
pub trait CategoryClassifier {
    fn classify(&self, product: &str) -> Result<ContractCategory, ClassifyError>;
}

impl<T: CategoryClassifier + ?Sized> CategoryClassifier for &T {
    fn classify(&self, product: &str) -> Result<ContractCategory, ClassifyError> {
        (**self).classify(product)
    }
}
