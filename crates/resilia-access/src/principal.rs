//! Principal identity model and helpers.
//!
//! # Purpose
//! Builds the immutable per-session principal (stable ID, organization, roles,
//! admin capability flag) from validated credential claims.
use crate::{AccessError, AccessResult, OrgId, Role};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Security group whose members are treated as system administrators
/// regardless of their role list.
pub const ADMIN_GROUP: &str = "Administrators";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub principal_id: String,
    pub subject: String,
    pub organization: OrgId,
    /// Roles in credential order. The first entry is the primary role; the
    /// rest are retained so the first-role-wins policy stays visible to
    /// callers instead of being silently lossy.
    pub roles: Vec<Role>,
    pub is_system_admin: bool,
}

impl Principal {
    /// The authoritative role for rule matching: the first role in the
    /// credential's role list. Construction guarantees the list is non-empty.
    pub fn primary_role(&self) -> Role {
        self.roles[0]
    }
}

pub fn principal_id(issuer: &str, subject: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(issuer.as_bytes());
    hasher.update(b"|");
    hasher.update(subject.as_bytes());
    hex::encode(hasher.finalize())
}

/// Build a principal from decoded credential claims.
///
/// Role strings must all parse; an unrecognized role denies principal
/// construction rather than being skipped. An empty role list is rejected
/// because every decision requires exactly one primary role.
pub fn from_claims(
    issuer: &str,
    subject: &str,
    organization: OrgId,
    roles: &[String],
    groups: &[String],
) -> AccessResult<Principal> {
    let mut parsed = Vec::with_capacity(roles.len());
    for role in roles {
        let role = role
            .parse::<Role>()
            .map_err(|_| AccessError::InvalidRole(role.clone()))?;
        parsed.push(role);
    }
    if parsed.is_empty() {
        return Err(AccessError::EmptyRoles(subject.to_string()));
    }
    let is_system_admin = groups.iter().any(|group| group == ADMIN_GROUP)
        || parsed.contains(&Role::SystemAdministrator);
    Ok(Principal {
        principal_id: principal_id(issuer, subject),
        subject: subject.to_string(),
        organization,
        roles: parsed,
        is_system_admin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_roles(roles: &[&str]) -> Vec<String> {
        roles.iter().map(|role| role.to_string()).collect()
    }

    #[test]
    fn principal_id_is_stable() {
        let a = principal_id("https://idp.resilia.io", "sub");
        let b = principal_id("https://idp.resilia.io", "sub");
        assert_eq!(a, b);
    }

    #[test]
    fn principal_id_changes_with_inputs() {
        let a = principal_id("https://idp.resilia.io", "sub");
        let b = principal_id("https://idp.resilia.io", "sub2");
        assert_ne!(a, b);
    }

    #[test]
    fn first_role_wins() {
        let principal = from_claims(
            "https://idp.resilia.io",
            "u-1",
            OrgId::new("org-a"),
            &claims_roles(&["department_head", "process_owner"]),
            &[],
        )
        .expect("principal");
        assert_eq!(principal.primary_role(), Role::DepartmentHead);
        assert_eq!(principal.roles.len(), 2);
    }

    #[test]
    fn admin_flag_from_group_membership() {
        let principal = from_claims(
            "https://idp.resilia.io",
            "u-2",
            OrgId::new("org-a"),
            &claims_roles(&["process_owner"]),
            &["Administrators".to_string()],
        )
        .expect("principal");
        assert!(principal.is_system_admin);
        assert_eq!(principal.primary_role(), Role::ProcessOwner);
    }

    #[test]
    fn admin_flag_from_role() {
        let principal = from_claims(
            "https://idp.resilia.io",
            "u-3",
            OrgId::new("org-a"),
            &claims_roles(&["system_administrator"]),
            &[],
        )
        .expect("principal");
        assert!(principal.is_system_admin);
    }

    #[test]
    fn non_admin_without_group_or_role() {
        let principal = from_claims(
            "https://idp.resilia.io",
            "u-4",
            OrgId::new("org-a"),
            &claims_roles(&["ceo"]),
            &["Staff".to_string()],
        )
        .expect("principal");
        assert!(!principal.is_system_admin);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = from_claims(
            "https://idp.resilia.io",
            "u-5",
            OrgId::new("org-a"),
            &claims_roles(&["process_owner", "superuser"]),
            &[],
        )
        .expect_err("unknown role");
        assert!(matches!(err, AccessError::InvalidRole(_)));
    }

    #[test]
    fn empty_role_list_is_rejected() {
        let err = from_claims(
            "https://idp.resilia.io",
            "u-6",
            OrgId::new("org-a"),
            &[],
            &[],
        )
        .expect_err("empty roles");
        assert!(matches!(err, AccessError::EmptyRoles(_)));
    }
}
