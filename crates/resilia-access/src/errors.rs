use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("invalid role: {0}")]
    InvalidRole(String),
    #[error("empty role list for principal {0}")]
    EmptyRoles(String),
    #[error("invalid catalog entry for module {0}")]
    InvalidCatalogEntry(String),
    #[error("catalog parse error: {0}")]
    Catalog(#[from] serde_yaml::Error),
}

pub type AccessResult<T> = Result<T, AccessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_variants() {
        let errors = vec![
            AccessError::InvalidRole("superuser".to_string()),
            AccessError::EmptyRoles("p-123".to_string()),
            AccessError::InvalidCatalogEntry("Ghost Module".to_string()),
        ];

        for error in errors {
            let rendered = error.to_string();
            assert!(!rendered.is_empty());
        }
    }
}
