//! Required-versus-available capability check

use super::{CapabilityCatalog, RequirementList};
use std::collections::HashSet;

/// Outcome of comparing required capabilities against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationVerdict {
    /// Every required capability is available
    Supported,
    /// These required capabilities are absent, each listed once in first-seen order
    Missing(Vec<String>),
}

impl VerificationVerdict {
    /// Whether verification passed
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::Supported)
    }

    /// Missing capability names, empty when supported
    pub fn missing(&self) -> &[String] {
        match self {
            Self::Supported => &[],
            Self::Missing(missing) => missing,
        }
    }
}

/// Check that every required capability appears in the catalog
///
/// Membership uses set semantics: order does not matter, duplicates in
/// `required` are tolerated, and capabilities in `available` that nobody asked
/// for are ignored. The missing list is exactly `required - available`.
pub fn verify(required: &RequirementList, available: &CapabilityCatalog) -> VerificationVerdict {
    let mut seen = HashSet::new();
    let missing: Vec<String> = required
        .iter()
        .filter(|name| !available.contains(name))
        .filter(|name| seen.insert(*name))
        .map(str::to_owned)
        .collect();

    if missing.is_empty() {
        VerificationVerdict::Supported
    } else {
        VerificationVerdict::Missing(missing)
    }
}
