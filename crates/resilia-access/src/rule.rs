//! Access rule primitives.
//!
//! # Purpose
//! Defines the per-module rule variants the decision engine evaluates and the
//! role allow-list type they share.
//!
//! # Key invariants
//! - Rules are deployed configuration: immutable once the catalog is loaded.
//! - Role matching is allow-list membership only. There is no role hierarchy;
//!   a role absent from a module's list is denied no matter how senior it is.
use crate::Role;
use serde::{Deserialize, Serialize};

/// Allow-list of roles attached to a rule.
///
/// # Example
/// ```rust
/// use resilia_access::{Role, RoleSet};
///
/// let set = RoleSet::new(vec![Role::DepartmentHead, Role::Ceo]);
/// assert!(set.contains(Role::Ceo));
/// assert!(!set.contains(Role::ProcessOwner));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    pub fn new(roles: Vec<Role>) -> Self {
        Self(roles)
    }

    /// The deny-all-non-admin set used for unknown modules.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn roles(&self) -> &[Role] {
        &self.0
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Rule kind attached to a catalog module.
///
/// # Summary
/// - `Open`: any authenticated principal may enter.
/// - `ExplicitRoles`: listed roles only; licensing is never consulted.
/// - `Licensed`: listed roles only, and the organization must hold a license
///   for the module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccessRule {
    Open,
    ExplicitRoles { roles: RoleSet },
    Licensed { roles: RoleSet },
}

impl AccessRule {
    pub fn explicit(roles: impl IntoIterator<Item = Role>) -> Self {
        AccessRule::ExplicitRoles {
            roles: roles.into_iter().collect(),
        }
    }

    pub fn licensed(roles: impl IntoIterator<Item = Role>) -> Self {
        AccessRule::Licensed {
            roles: roles.into_iter().collect(),
        }
    }

    /// True when entry requires a license lookup after the role gate passes.
    pub fn requires_license(&self) -> bool {
        matches!(self, AccessRule::Licensed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_set_membership() {
        let set = RoleSet::new(vec![Role::BcmCoordinator, Role::Ceo]);
        assert!(set.contains(Role::BcmCoordinator));
        assert!(!set.contains(Role::SubDepartmentHead));
        assert!(RoleSet::empty().roles().is_empty());
    }

    #[test]
    fn rule_yaml_roundtrip() {
        let rule = AccessRule::licensed([Role::DepartmentHead, Role::Ceo]);
        let yaml = serde_yaml::to_string(&rule).expect("serialize");
        let parsed: AccessRule = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(parsed, rule);
        assert!(parsed.requires_license());
    }

    #[test]
    fn open_rule_parses_from_yaml() {
        let parsed: AccessRule = serde_yaml::from_str("kind: open\n").expect("deserialize");
        assert_eq!(parsed, AccessRule::Open);
        assert!(!parsed.requires_license());
    }
}
