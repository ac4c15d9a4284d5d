//! Resilia authorization and licensing primitives shared by the portal and
//! background services.
//!
//! # Purpose
//! Centralizes the module catalog, role model, and the ordered rule chain
//! that decides whether a principal may enter a functional module.
//!
//! # How it fits
//! The identity layer resolves credentials into a [`Principal`]; the
//! navigation layer asks the [`DecisionEngine`] for one [`AccessDecision`]
//! per module entry and either proceeds or redirects to the lock screen at
//! [`ModuleCatalog::lock_path`].
//!
//! # Key invariants
//! - Rule evaluation is strictly ordered; the administrative override
//!   dominates every other rule, including licensing.
//! - Modules absent from the catalog deny non-admins (default-deny).
//! - A failing license lookup denies access (fail-closed).
//! - Role matching is allow-list membership; there is no role hierarchy.
//!
//! # Important configuration
//! - The catalog is loaded once at process start, from the builtin table or
//!   a YAML override; changing it requires a redeploy.
//!
//! # Examples
//! ```rust
//! use resilia_access::{DecisionEngine, ModuleCatalog, ModuleName, OrgId, StaticLicenses};
//! use std::sync::Arc;
//!
//! # async fn check() {
//! let engine = DecisionEngine::new(
//!     Arc::new(ModuleCatalog::builtin()),
//!     Arc::new(StaticLicenses::new([("org-a", "BCM Plan")])),
//! );
//! let principal = resilia_access::from_claims(
//!     "https://idp.resilia.io",
//!     "u-1",
//!     OrgId::new("org-a"),
//!     &["bcm_coordinator".to_string()],
//!     &[],
//! )
//! .unwrap();
//! let decision = engine.decide(&principal, &ModuleName::new("BCM Plan")).await;
//! assert!(decision.allowed);
//! # }
//! ```
//!
//! # Common pitfalls
//! - Re-deriving role or license checks inline at call sites instead of
//!   asking the engine; the ordering here is the single source of truth.
//! - Treating a license lookup error as anything other than a denial.

mod catalog;
mod decision;
mod errors;
mod license;
mod principal;
mod role;
mod rule;
mod types;

pub use catalog::{
    ModuleCatalog, ModuleEntry, MODULE_ADMIN_PANEL, MODULE_APPROVALS, MODULE_BCM_PLAN,
    MODULE_BIA, MODULE_CONTINUAL_IMPROVEMENT, MODULE_CRISIS_MANAGEMENT, MODULE_GAP_ASSESSMENT,
    MODULE_HOME, MODULE_KPIS_MATURITY, MODULE_POLICY, MODULE_PROCEDURES, MODULE_PROCESS_MAPPING,
    MODULE_RECOVERY_STRATEGY, MODULE_RISK_ANALYSIS, MODULE_TRAINING_TESTING,
};
pub use decision::{AccessDecision, DecisionEngine, DenyReason};
pub use errors::{AccessError, AccessResult};
pub use license::{LicenseError, LicenseResult, LicenseSource, StaticLicenses};
pub use principal::{from_claims, principal_id, Principal, ADMIN_GROUP};
pub use role::Role;
pub use rule::{AccessRule, RoleSet};
pub use types::{ModuleName, OrgId};
