use thiserror::Error;

/// Failure of a GarthHMS operation.
///
/// The `String` payloads are user-facing and written in Spanish; they are
/// rendered verbatim in the JSON envelope. `Database` keeps the driver error
/// for logging and is never shown to users as-is.
#[derive(Error, Debug)]
pub enum HmsError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Error de base de datos: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl HmsError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Replace infrastructure failures with a user-facing message, logging
    /// the original. Business errors pass through untouched.
    pub fn or_internal(self, message: &str) -> Self {
        match self {
            HmsError::Database(err) => {
                tracing::error!(error = ?err, "{message}");
                HmsError::Internal(message.to_string())
            }
            HmsError::Internal(detail) => {
                tracing::error!(detail = %detail, "{message}");
                HmsError::Internal(message.to_string())
            }
            other => other,
        }
    }
}

impl From<validator::ValidationErrors> for HmsError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("El campo '{field}' no es válido"))
                })
            })
            .collect();
        messages.sort();
        messages.dedup();

        if messages.is_empty() {
            HmsError::Validation("Los datos enviados no son válidos".to_string())
        } else {
            HmsError::Validation(messages.join(". "))
        }
    }
}

pub type Result<T> = std::result::Result<T, HmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_errors_become_generic_messages() {
        let err = HmsError::from(sqlx::Error::RowNotFound)
            .or_internal("Error al crear el huésped");
        assert!(matches!(err, HmsError::Internal(ref m) if m == "Error al crear el huésped"));
    }

    #[test]
    fn business_errors_are_preserved() {
        let err = HmsError::conflict("Ya existe").or_internal("Error genérico");
        assert!(matches!(err, HmsError::Conflict(ref m) if m == "Ya existe"));
    }
}
