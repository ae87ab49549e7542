// web_app/model/error.rs - Error type shared by server functions and pages
//
// The server serialises ApiError as JSON and the client decodes it back,
// so a page can tell field violations apart from any other failure.

use serde::{Deserialize, Serialize};

/// A field-level validation failure reported by the server
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the offending payload field (e.g. `first_name`)
    pub property_path: String,
    pub message: String,
}

impl Violation {
    pub fn new(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed with {} violation(s)", .violations.len())]
    Validation { violations: Vec<Violation> },

    #[error("{entity} {id} not found")]
    NotFound { entity: String, id: i32 },

    /// The request is valid but conflicts with stored data
    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(String),

    /// The call never reached the handler (network, encoding, missing pool)
    #[error("request failed: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn single_violation(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            violations: vec![Violation::new(property_path, message)],
        }
    }

    pub fn not_found(entity: &str, id: i32) -> Self {
        ApiError::NotFound {
            entity: entity.to_string(),
            id,
        }
    }

    /// Structured violations, if this error carries any
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            ApiError::Validation { violations } => Some(violations),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl leptos::server_fn::error::FromServerFnError for ApiError {
    type Encoder = leptos::server_fn::codec::JsonEncoding;

    fn from_server_fn_error(value: leptos::server_fn::error::ServerFnErrorErr) -> Self {
        ApiError::Transport(value.to_string())
    }
}

#[cfg(feature = "db-tools")]
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violations_only_on_validation_errors() {
        let err = ApiError::single_violation("email", "must not be blank");
        let violations = err.violations().unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].property_path, "email");

        assert!(ApiError::Conflict("busy".to_string()).violations().is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::not_found("invoice", 7).to_string(), "invoice 7 not found");
        let err = ApiError::Validation {
            violations: vec![Violation::new("a", "x"), Violation::new("b", "y")],
        };
        assert_eq!(err.to_string(), "validation failed with 2 violation(s)");
    }

    #[test]
    fn test_error_survives_json_transport() {
        let err = ApiError::single_violation("amount", "must be positive");
        let json = serde_json::to_string(&err).unwrap();
        let back: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
