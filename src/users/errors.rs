use thiserror::Error;

/// Failure of a lookup-style query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Cannot find {entity} by {field}={value}")]
    EntityNotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },
}

impl QueryError {
    pub fn user_by_email(email: impl Into<String>) -> Self {
        Self::EntityNotFound {
            entity: "User",
            field: "email",
            value: email.into(),
        }
    }
}

/// Failure while building the user collection.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("user {id} has an invalid email: {email}")]
    InvalidEmail { id: i64, email: String },
}
