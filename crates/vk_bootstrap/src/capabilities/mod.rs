//! Instance capability negotiation
//!
//! A *capability* is a named Vulkan instance extension. The windowing layer
//! produces a [`RequirementList`], the Vulkan loader produces a
//! [`CapabilityCatalog`], and [`verify`] decides whether the first is covered
//! by the second before any instance is created.

pub mod platform;
pub mod verifier;

pub use verifier::{verify, VerificationVerdict};

use std::collections::HashSet;
use std::fmt;

/// A named optional feature reported by the graphics backend
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capability {
    name: String,
    spec_version: u32,
}

impl Capability {
    /// Create a capability from its extension name and spec version
    pub fn new(name: impl Into<String>, spec_version: u32) -> Self {
        Self {
            name: name.into(),
            spec_version,
        }
    }

    /// Extension name, e.g. `VK_KHR_surface`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extension spec version as reported by the driver
    pub const fn spec_version(&self) -> u32 {
        self.spec_version
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (v{})", self.name, self.spec_version)
    }
}

/// Ordered list of capability names the windowing layer demands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementList {
    names: Vec<String>,
}

impl RequirementList {
    /// Create a requirement list, keeping order and duplicates as given
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Required names in the order the windowing layer reported them
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over required names
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is required
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` appears in the list
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl<S: Into<String>> FromIterator<S> for RequirementList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<RequirementList> for Vec<String> {
    fn from(list: RequirementList) -> Self {
        list.names
    }
}

/// Snapshot of the capabilities the backend currently exposes
#[derive(Debug, Clone, Default)]
pub struct CapabilityCatalog {
    capabilities: Vec<Capability>,
    names: HashSet<String>,
}

impl CapabilityCatalog {
    /// Build a catalog from backend-reported capabilities
    pub fn new(capabilities: Vec<Capability>) -> Self {
        let names = capabilities.iter().map(|c| c.name.clone()).collect();
        Self { capabilities, names }
    }

    /// Build a catalog from bare names, all at spec version 1
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(|name| Capability::new(name, 1)).collect()
    }

    /// Whether a capability with this name is available
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Look up a capability by name
    pub fn get(&self, name: &str) -> Option<&Capability> {
        self.capabilities.iter().find(|c| c.name == name)
    }

    /// All reported capabilities in backend order
    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// Number of reported capabilities
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Whether the backend reported nothing
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

impl FromIterator<Capability> for CapabilityCatalog {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Supplies the capabilities the windowing layer needs for its surface type
///
/// Implementations must not fail: an empty list means nothing special is
/// required. The result is pinned for the duration of one bootstrap attempt.
pub trait RequirementSource {
    /// Capability names required for presenting to this platform's surfaces
    fn required_capabilities(&self) -> RequirementList;
}

impl RequirementSource for RequirementList {
    fn required_capabilities(&self) -> RequirementList {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_membership() {
        let catalog = CapabilityCatalog::new(vec![
            Capability::new("VK_KHR_surface", 25),
            Capability::new("VK_KHR_xcb_surface", 6),
        ]);

        assert!(catalog.contains("VK_KHR_surface"));
        assert!(!catalog.contains("VK_KHR_win32_surface"));
        assert_eq!(catalog.get("VK_KHR_xcb_surface").map(Capability::spec_version), Some(6));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_requirement_list_keeps_order_and_duplicates() {
        let list: RequirementList = ["b", "a", "b"].into_iter().collect();
        assert_eq!(list.names(), ["b", "a", "b"]);
        assert_eq!(list.len(), 3);
        assert!(list.contains("a"));
    }

    #[test]
    fn test_static_list_is_its_own_source() {
        let list = RequirementList::new(["VK_KHR_surface"]);
        assert_eq!(list.required_capabilities(), list);
    }

    #[test]
    fn test_capability_display() {
        assert_eq!(Capability::new("VK_KHR_surface", 25).to_string(), "VK_KHR_surface (v25)");
    }
}
