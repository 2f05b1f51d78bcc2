use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid rule id: {0}")]
    InvalidRuleId(String),

    #[error("Invalid domain pattern: {0}")]
    InvalidDomainPattern(String),

    #[error("Rule not found: {0}")]
    RuleNotFound(String),

    #[error("Duplicate rule id: {0}")]
    DuplicateRuleId(String),

    #[error("Protected rule cannot be disabled")]
    ProtectedRuleCannotBeDisabled,

    #[error("Rule repository error: {0}")]
    RepositoryError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::IoError(e.to_string())
    }
}
