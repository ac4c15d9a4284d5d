//! Strongly typed identifiers used throughout access decisions.
//!
//! # Purpose
//! Wraps string identifiers to reduce accidental mix-ups between organization
//! and module identifiers.
//!
//! # How it fits
//! These types flow through the catalog, the license source, and the decision
//! engine so that an organization id can never be passed where a module name
//! is expected.
//!
//! # Key invariants
//! - Each wrapper contains a non-empty string (not validated here).
//! - Display and `as_str` must return the original value.
//! - Module names are exact catalog keys; comparison is case-sensitive.
//!
//! # Important configuration
//! - None; validation is the responsibility of callers.
//!
//! # Examples
//! ```rust
//! use resilia_access::{ModuleName, OrgId};
//!
//! let org = OrgId::new("org-acme");
//! let module = ModuleName::new("BCM Plan");
//! assert_eq!(format!("{}:{}", org, module), "org-acme:BCM Plan");
//! ```
//!
//! # Common pitfalls
//! - Constructing these types with empty strings; validate at the API boundary.
//! - Treating `Display` as sanitized output; it is a raw passthrough.
use serde::{Deserialize, Serialize};

/// Organization identifier wrapper.
///
/// # Summary
/// Newtype around an organization string ID.
///
/// # Invariants
/// - The inner string is preserved exactly.
///
/// # Example
/// ```rust
/// use resilia_access::OrgId;
///
/// let org = OrgId::new("org-acme");
/// assert_eq!(org.as_str(), "org-acme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrgId(String);

impl OrgId {
    /// Construct a new organization ID wrapper.
    ///
    /// # Parameters
    /// - `value`: raw organization identifier string.
    ///
    /// # Returns
    /// - A new [`OrgId`].
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the inner organization string.
    ///
    /// # Returns
    /// - The raw organization identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Module name wrapper.
///
/// # Summary
/// Newtype around a module display name, which doubles as the catalog key.
///
/// # Example
/// ```rust
/// use resilia_access::ModuleName;
///
/// let module = ModuleName::new("Risk Analysis");
/// assert_eq!(module.to_string(), "Risk Analysis");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleName(String);

impl ModuleName {
    /// Construct a new module name wrapper.
    ///
    /// # Parameters
    /// - `value`: raw module name string.
    ///
    /// # Returns
    /// - A new [`ModuleName`].
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the inner module name.
    ///
    /// # Returns
    /// - The raw module name value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ModuleName, OrgId};

    #[test]
    fn type_constructors_and_display() {
        let org = OrgId::new("org-acme");
        let module = ModuleName::new("BCM Plan");

        assert_eq!(org.as_str(), "org-acme");
        assert_eq!(org.to_string(), "org-acme");
        assert_eq!(module.as_str(), "BCM Plan");
        assert_eq!(module.to_string(), "BCM Plan");
    }

    #[test]
    fn module_names_compare_exactly() {
        assert_ne!(ModuleName::new("BCM Plan"), ModuleName::new("bcm plan"));
    }
}
