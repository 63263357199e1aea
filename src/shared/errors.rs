use thiserror::Error;

/// Which gate a request came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Entry,
    Exit,
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entry => write!(f, "entry"),
            Self::Exit => write!(f, "exit"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("{0}")]
    MissingField(String),

    #[error("Invalid interchange: {0}")]
    UnknownInterchange(String),

    #[error("Invalid {gate} interchange: {interchange}.")]
    InvalidGateInterchange { gate: Gate, interchange: String },

    #[error("Invalid number plate format. Expected LLL-NNN.")]
    InvalidNumberPlate(String),

    #[error("Invalid date/time: {0}.")]
    InvalidTimestamp(String),

    #[error("Vehicle with number plate {0} is already entered.")]
    DuplicateEntry(String),

    #[error("No entry record found for number plate: {0}.")]
    NoOpenEntry(String),

    #[error("Exit date/time cannot be before entry date/time.")]
    InvalidTimeOrdering,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl From<InfraError> for DomainError {
    fn from(err: InfraError) -> Self {
        DomainError::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_client_facing_text() {
        assert_eq!(
            DomainError::DuplicateEntry("ABC-123".into()).to_string(),
            "Vehicle with number plate ABC-123 is already entered."
        );
        assert_eq!(
            DomainError::NoOpenEntry("ABC-123".into()).to_string(),
            "No entry record found for number plate: ABC-123."
        );
        assert_eq!(
            DomainError::InvalidGateInterchange {
                gate: Gate::Entry,
                interchange: "Nowhere".into()
            }
            .to_string(),
            "Invalid entry interchange: Nowhere."
        );
        assert_eq!(
            DomainError::InvalidGateInterchange {
                gate: Gate::Exit,
                interchange: "Nowhere".into()
            }
            .to_string(),
            "Invalid exit interchange: Nowhere."
        );
        assert_eq!(
            DomainError::UnknownInterchange("Nowhere".into()).to_string(),
            "Invalid interchange: Nowhere"
        );
        assert_eq!(
            DomainError::InvalidNumberPlate("abc".into()).to_string(),
            "Invalid number plate format. Expected LLL-NNN."
        );
    }

    #[test]
    fn infra_failures_become_unexpected() {
        let err: DomainError =
            InfraError::Database(sea_orm::DbErr::Custom("connection reset".into())).into();
        assert_eq!(
            err,
            DomainError::Unexpected("Database error: Custom Error: connection reset".into())
        );

        let err: DomainError = InfraError::Crypto("Failed to hash password: bad cost".into()).into();
        assert_eq!(
            err,
            DomainError::Unexpected("Crypto error: Failed to hash password: bad cost".into())
        );
    }
}
