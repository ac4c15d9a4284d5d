//! Static module catalog and its access rules.
//!
//! # Purpose
//! Maps every navigable module of the platform to the rule governing entry.
//! The catalog is configuration-as-data: built once at process start, either
//! from the builtin table or from a YAML override, and never mutated at
//! runtime.
//!
//! # Key invariants
//! - Every navigable module has exactly one catalog entry.
//! - An unknown module name resolves to the empty explicit-role rule, so
//!   lookups never fail and non-admins are denied by default.
//! - Entry order is preserved; it drives navigation rendering downstream.
use crate::{AccessError, AccessResult, AccessRule, ModuleName, Role};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const MODULE_HOME: &str = "Home";
pub const MODULE_ADMIN_PANEL: &str = "Admin Panel";
pub const MODULE_BIA: &str = "Business Impact Analysis";
pub const MODULE_APPROVALS: &str = "Module Approvals";
pub const MODULE_PROCESS_MAPPING: &str = "Process Mapping";
pub const MODULE_RISK_ANALYSIS: &str = "Risk Analysis";
pub const MODULE_RECOVERY_STRATEGY: &str = "Recovery Strategy";
pub const MODULE_BCM_PLAN: &str = "BCM Plan";
pub const MODULE_CRISIS_MANAGEMENT: &str = "Crisis Management";
pub const MODULE_TRAINING_TESTING: &str = "Training & Testing";
pub const MODULE_PROCEDURES: &str = "Procedures";
pub const MODULE_POLICY: &str = "Policy";
pub const MODULE_GAP_ASSESSMENT: &str = "Gap Assessment";
pub const MODULE_KPIS_MATURITY: &str = "KPIs & Maturity";
pub const MODULE_CONTINUAL_IMPROVEMENT: &str = "Continual Improvement";

// Characters beyond CONTROLS that must not appear raw in a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub name: ModuleName,
    pub path: String,
    pub rule: AccessRule,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    modules: Vec<ModuleEntry>,
}

/// Lookup table from module name to its entry, preserving declaration order.
#[derive(Debug, Clone)]
pub struct ModuleCatalog {
    entries: Vec<ModuleEntry>,
    index: HashMap<ModuleName, usize>,
}

impl ModuleCatalog {
    /// Build a catalog from explicit entries.
    ///
    /// # Errors
    /// - [`AccessError::InvalidCatalogEntry`] when a module name appears twice.
    pub fn new(entries: Vec<ModuleEntry>) -> AccessResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.name.clone(), position).is_some() {
                return Err(AccessError::InvalidCatalogEntry(entry.name.to_string()));
            }
        }
        Ok(Self { entries, index })
    }

    /// The deployed catalog for the platform.
    ///
    /// Role lists are allow-lists. `Licensed` modules additionally require an
    /// organization-level license at decision time.
    pub fn builtin() -> Self {
        let all = Role::ALL;
        let management = [
            Role::DepartmentHead,
            Role::BcmCoordinator,
            Role::Ceo,
            Role::SystemAdministrator,
        ];
        let entries = vec![
            entry(MODULE_HOME, "/", AccessRule::Open),
            entry(
                MODULE_ADMIN_PANEL,
                "/admin",
                AccessRule::explicit([Role::SystemAdministrator]),
            ),
            entry(MODULE_BIA, "/bia", AccessRule::explicit(all)),
            entry(MODULE_APPROVALS, "/approvals", AccessRule::explicit(management)),
            entry(
                MODULE_PROCESS_MAPPING,
                "/process-mapping",
                AccessRule::licensed(all),
            ),
            entry(
                MODULE_RISK_ANALYSIS,
                "/risk-analysis",
                AccessRule::licensed(all),
            ),
            entry(
                MODULE_RECOVERY_STRATEGY,
                "/recovery-strategy",
                AccessRule::licensed(all),
            ),
            entry(MODULE_BCM_PLAN, "/bcm-plan", AccessRule::licensed(all)),
            entry(
                MODULE_CRISIS_MANAGEMENT,
                "/crisis-management",
                AccessRule::licensed(management),
            ),
            entry(
                MODULE_TRAINING_TESTING,
                "/training-testing",
                AccessRule::licensed(all),
            ),
            entry(MODULE_PROCEDURES, "/procedures", AccessRule::licensed(all)),
            entry(MODULE_POLICY, "/policy", AccessRule::licensed(management)),
            entry(
                MODULE_GAP_ASSESSMENT,
                "/gap-assessment",
                AccessRule::licensed(management),
            ),
            entry(
                MODULE_KPIS_MATURITY,
                "/kpis-maturity",
                AccessRule::licensed(management),
            ),
            entry(
                MODULE_CONTINUAL_IMPROVEMENT,
                "/continual-improvement",
                AccessRule::licensed(management),
            ),
        ];
        Self::new(entries).expect("builtin catalog has unique module names")
    }

    /// Parse a catalog from a YAML document.
    ///
    /// # Errors
    /// - [`AccessError::Catalog`] for malformed YAML.
    /// - [`AccessError::InvalidCatalogEntry`] for duplicate module names.
    pub fn from_yaml(contents: &str) -> AccessResult<Self> {
        let file: CatalogFile = serde_yaml::from_str(contents)?;
        Self::new(file.modules)
    }

    /// Resolve the rule for a module name.
    ///
    /// Unknown names resolve to the empty explicit-role rule so the decision
    /// engine can always proceed and non-admins fall through to a denial.
    pub fn rule_for(&self, module: &ModuleName) -> AccessRule {
        match self.entry(module) {
            Some(entry) => entry.rule.clone(),
            None => AccessRule::ExplicitRoles {
                roles: crate::RoleSet::empty(),
            },
        }
    }

    pub fn entry(&self, module: &ModuleName) -> Option<&ModuleEntry> {
        self.index.get(module).map(|position| &self.entries[*position])
    }

    pub fn contains(&self, module: &ModuleName) -> bool {
        self.index.contains_key(module)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ModuleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Redirect target for a denied module, with the name percent-encoded so
    /// it survives as a single path segment.
    pub fn lock_path(module: &ModuleName) -> String {
        format!(
            "/module-lock/{}",
            utf8_percent_encode(module.as_str(), PATH_SEGMENT)
        )
    }
}

fn entry(name: &str, path: &str, rule: AccessRule) -> ModuleEntry {
    ModuleEntry {
        name: ModuleName::new(name),
        path: path.to_string(),
        rule,
    }
}
