use resilia_access::{
    from_claims, DecisionEngine, ModuleCatalog, ModuleName, OrgId, Principal, Role,
    StaticLicenses, MODULE_ADMIN_PANEL, MODULE_APPROVALS, MODULE_BCM_PLAN, MODULE_HOME,
};
use std::sync::Arc;

const ORG: &str = "org-acme";

fn principal(role: Role) -> Principal {
    from_claims(
        "https://idp.resilia.io",
        &format!("user-{role}"),
        OrgId::new(ORG),
        &[role.as_str().to_string()],
        &[],
    )
    .expect("principal")
}

fn admin_principal() -> Principal {
    from_claims(
        "https://idp.resilia.io",
        "user-admin",
        OrgId::new(ORG),
        &["system_administrator".to_string()],
        &["Administrators".to_string()],
    )
    .expect("principal")
}

fn engine(licenses: StaticLicenses) -> DecisionEngine {
    DecisionEngine::new(Arc::new(ModuleCatalog::builtin()), Arc::new(licenses))
}

#[tokio::test]
async fn admin_supremacy_over_every_module_and_license_state() {
    let unlicensed = engine(StaticLicenses::default());
    let licensed = engine(StaticLicenses::all_for_org(&OrgId::new(ORG)));
    let admin = admin_principal();

    let catalog = ModuleCatalog::builtin();
    for entry in catalog.entries() {
        let denied_anywhere = !unlicensed.decide(&admin, &entry.name).await.allowed
            || !licensed.decide(&admin, &entry.name).await.allowed;
        assert!(!denied_anywhere, "{} should never deny an admin", entry.name);
    }
}

#[tokio::test]
async fn home_is_open_to_every_role() {
    let engine = engine(StaticLicenses::default());
    for role in Role::ALL {
        let decision = engine
            .decide(&principal(role), &ModuleName::new(MODULE_HOME))
            .await;
        assert!(decision.allowed, "{role} should reach Home");
        assert!(decision.reason.is_none());
    }
}

#[tokio::test]
async fn uncataloged_modules_deny_every_non_admin() {
    let engine = engine(StaticLicenses::all_for_org(&OrgId::new(ORG)));
    for role in Role::ALL {
        let decision = engine
            .decide(&principal(role), &ModuleName::new("Vendor Portal"))
            .await;
        // system_administrator carries the admin capability flag, which
        // overrides before the catalog lookup.
        if role == Role::SystemAdministrator {
            assert!(decision.allowed);
            continue;
        }
        assert!(!decision.allowed, "{role} should be denied");
        assert_eq!(decision.reason_code(), Some("insufficient_role"));
    }
}

#[tokio::test]
async fn unlicensed_module_denies_permitted_role() {
    let engine = engine(StaticLicenses::default());
    let decision = engine
        .decide(
            &principal(Role::BcmCoordinator),
            &ModuleName::new(MODULE_BCM_PLAN),
        )
        .await;
    assert!(!decision.allowed);
    assert_eq!(decision.reason_code(), Some("unlicensed"));
}

#[tokio::test]
async fn role_gate_reports_before_license_state() {
    // Fully licensed organization: a denied role must still read as a role
    // problem, not a licensing one.
    let engine = engine(StaticLicenses::all_for_org(&OrgId::new(ORG)));
    let decision = engine
        .decide(
            &principal(Role::ProcessOwner),
            &ModuleName::new("Crisis Management"),
        )
        .await;
    assert!(!decision.allowed);
    assert_eq!(decision.reason_code(), Some("insufficient_role"));
}

#[tokio::test]
async fn repeated_evaluation_is_idempotent() {
    let engine = engine(StaticLicenses::new([(ORG, MODULE_BCM_PLAN)]));
    let who = principal(Role::BcmCoordinator);
    let module = ModuleName::new(MODULE_BCM_PLAN);

    let first = engine.decide(&who, &module).await;
    for _ in 0..5 {
        assert_eq!(engine.decide(&who, &module).await, first);
    }
}

#[tokio::test]
async fn decision_scenarios_match_expected_outcomes() {
    let licensed = engine(StaticLicenses::new([(ORG, MODULE_BCM_PLAN)]));
    let unlicensed = engine(StaticLicenses::default());

    // system_administrator reaches the admin panel.
    let decision = licensed
        .decide(
            &principal(Role::SystemAdministrator),
            &ModuleName::new(MODULE_ADMIN_PANEL),
        )
        .await;
    assert!(decision.allowed);

    // process_owner does not.
    let decision = licensed
        .decide(
            &principal(Role::ProcessOwner),
            &ModuleName::new(MODULE_ADMIN_PANEL),
        )
        .await;
    assert!(!decision.allowed);
    assert_eq!(decision.reason_code(), Some("insufficient_role"));

    // bcm_coordinator reaches a licensed BCM Plan.
    let decision = licensed
        .decide(
            &principal(Role::BcmCoordinator),
            &ModuleName::new(MODULE_BCM_PLAN),
        )
        .await;
    assert!(decision.allowed);

    // ... and is locked out when the license is missing.
    let decision = unlicensed
        .decide(
            &principal(Role::BcmCoordinator),
            &ModuleName::new(MODULE_BCM_PLAN),
        )
        .await;
    assert!(!decision.allowed);
    assert_eq!(decision.reason_code(), Some("unlicensed"));

    // department_head may approve modules.
    let decision = licensed
        .decide(
            &principal(Role::DepartmentHead),
            &ModuleName::new(MODULE_APPROVALS),
        )
        .await;
    assert!(decision.allowed);

    // sub_department_head may not.
    let decision = licensed
        .decide(
            &principal(Role::SubDepartmentHead),
            &ModuleName::new(MODULE_APPROVALS),
        )
        .await;
    assert!(!decision.allowed);
    assert_eq!(decision.reason_code(), Some("insufficient_role"));
}
