use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    ProcessOwner,
    SubDepartmentHead,
    DepartmentHead,
    BcmCoordinator,
    Ceo,
    SystemAdministrator,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::ProcessOwner => "process_owner",
            Role::SubDepartmentHead => "sub_department_head",
            Role::DepartmentHead => "department_head",
            Role::BcmCoordinator => "bcm_coordinator",
            Role::Ceo => "ceo",
            Role::SystemAdministrator => "system_administrator",
        }
    }

    pub const ALL: [Role; 6] = [
        Role::ProcessOwner,
        Role::SubDepartmentHead,
        Role::DepartmentHead,
        Role::BcmCoordinator,
        Role::Ceo,
        Role::SystemAdministrator,
    ];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "process_owner" => Ok(Role::ProcessOwner),
            "sub_department_head" => Ok(Role::SubDepartmentHead),
            "department_head" => Ok(Role::DepartmentHead),
            "bcm_coordinator" => Ok(Role::BcmCoordinator),
            "ceo" => Ok(Role::Ceo),
            "system_administrator" => Ok(Role::SystemAdministrator),
            _ => Err(()),
        }
    }
}
