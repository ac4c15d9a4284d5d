//! Module access decisions.
//!
//! This module centralizes the rule chain gating every navigable module.
//! Keeping the ordering in one place avoids privilege-escalation drift across
//! surfaces that would otherwise re-derive role and license checks inline.
//!
//! Evaluation order, first match wins:
//! 1. administrative override
//! 2. open module
//! 3. explicit-role module (licensing never consulted)
//! 4. licensed module (role gate, then one license lookup)
//! 5. catalog miss (deny, reported as insufficient role)
//!
//! Every call is stateless and yields a decision; the engine never errors.
//! A failing license lookup denies (fail-closed).
use crate::{AccessRule, LicenseSource, ModuleCatalog, ModuleName, Principal};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    InsufficientRole,
    Unlicensed,
    UnknownModule,
}

impl DenyReason {
    /// Caller-facing reason code. A catalog miss is reported as an
    /// insufficient role so callers cannot probe which names exist.
    pub fn code(self) -> &'static str {
        match self {
            DenyReason::InsufficientRole | DenyReason::UnknownModule => "insufficient_role",
            DenyReason::Unlicensed => "unlicensed",
        }
    }
}

/// Outcome of evaluating one (principal, module) pair.
///
/// Produced fresh per evaluation and never stored. On denial the module name
/// and reason are sufficient for the navigation layer to route to
/// `/module-lock/{module}` without leaking catalog internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    pub module: ModuleName,
    pub allowed: bool,
    pub reason: Option<DenyReason>,
}

impl AccessDecision {
    fn allow(module: ModuleName) -> Self {
        Self {
            module,
            allowed: true,
            reason: None,
        }
    }

    fn deny(module: ModuleName, reason: DenyReason) -> Self {
        Self {
            module,
            allowed: false,
            reason: Some(reason),
        }
    }

    pub fn reason_code(&self) -> Option<&'static str> {
        self.reason.map(DenyReason::code)
    }
}

/// Evaluates the ordered rule chain for one module at a time.
///
/// Holds the immutable catalog and the license source seam. Calls are
/// independent; concurrent evaluations for different principals need no
/// locking.
#[derive(Clone)]
pub struct DecisionEngine {
    catalog: Arc<ModuleCatalog>,
    licenses: Arc<dyn LicenseSource>,
}

impl DecisionEngine {
    pub fn new(catalog: Arc<ModuleCatalog>, licenses: Arc<dyn LicenseSource>) -> Self {
        Self { catalog, licenses }
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }

    /// Produce the access decision for a principal and module name.
    pub async fn decide(&self, principal: &Principal, module: &ModuleName) -> AccessDecision {
        // Administrative override dominates every other rule, including
        // licensing, so administrators can always diagnose and unlock.
        if principal.is_system_admin {
            tracing::debug!(
                principal = %principal.principal_id,
                module = %module,
                "access granted: administrative override"
            );
            return AccessDecision::allow(module.clone());
        }

        let Some(entry) = self.catalog.entry(module) else {
            // Unknown names evaluate as the empty allow-list: new modules
            // stay inaccessible until cataloged.
            tracing::debug!(module = %module, "access denied: module not in catalog");
            return AccessDecision::deny(module.clone(), DenyReason::UnknownModule);
        };

        match &entry.rule {
            AccessRule::Open => AccessDecision::allow(module.clone()),
            AccessRule::ExplicitRoles { roles } => {
                if roles.contains(principal.primary_role()) {
                    AccessDecision::allow(module.clone())
                } else {
                    tracing::debug!(
                        principal = %principal.principal_id,
                        module = %module,
                        role = %principal.primary_role(),
                        "access denied: role not in allow-list"
                    );
                    AccessDecision::deny(module.clone(), DenyReason::InsufficientRole)
                }
            }
            AccessRule::Licensed { roles } => {
                // Role gate runs before the license lookup so unauthorized
                // roles learn nothing about the organization's licensing.
                if !roles.contains(principal.primary_role()) {
                    tracing::debug!(
                        principal = %principal.principal_id,
                        module = %module,
                        role = %principal.primary_role(),
                        "access denied: role not in allow-list"
                    );
                    return AccessDecision::deny(module.clone(), DenyReason::InsufficientRole);
                }
                let licensed = match self
                    .licenses
                    .is_licensed(&principal.organization, module)
                    .await
                {
                    Ok(licensed) => licensed,
                    Err(err) => {
                        tracing::warn!(
                            organization = %principal.organization,
                            module = %module,
                            error = %err,
                            "license lookup failed, denying access"
                        );
                        false
                    }
                };
                if licensed {
                    AccessDecision::allow(module.clone())
                } else {
                    AccessDecision::deny(module.clone(), DenyReason::Unlicensed)
                }
            }
        }
    }
}
