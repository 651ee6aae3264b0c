//! Classified API failure type.

use thiserror::Error;

/// Closed classification of everything that can go wrong on an API call.
///
/// The adapter converts every error path into one of these variants; no
/// reqwest error or panic crosses the adapter boundary.
#[derive(Error, Debug)]
pub enum ApiFailure {
    /// 401/403: credentials missing, wrong, or lacking permission.
    #[error("unauthorized (check FORMBRICKS_API_KEY and its permissions)")]
    Unauthorized,

    /// 404: endpoint or referenced entity does not exist.
    #[error("not found")]
    NotFound,

    /// Any other 4xx/5xx status.
    #[error("server returned HTTP {status}")]
    Server { status: u16 },

    /// Connection, DNS, or timeout failure before an HTTP status existed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiFailure {
    /// Classify a non-success HTTP status code.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            401 | 403 => ApiFailure::Unauthorized,
            404 => ApiFailure::NotFound,
            code => ApiFailure::Server { status: code },
        }
    }

    /// Short classification label for reports and logs.
    pub fn classification(&self) -> &'static str {
        match self {
            ApiFailure::Unauthorized => "unauthorized",
            ApiFailure::NotFound => "not-found",
            ApiFailure::Server { .. } => "server-error",
            ApiFailure::Network(_) => "network-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_unauthorized_statuses() {
        assert!(matches!(
            ApiFailure::from_status(StatusCode::UNAUTHORIZED),
            ApiFailure::Unauthorized
        ));
        assert!(matches!(
            ApiFailure::from_status(StatusCode::FORBIDDEN),
            ApiFailure::Unauthorized
        ));
    }

    #[test]
    fn test_not_found_status() {
        assert!(matches!(
            ApiFailure::from_status(StatusCode::NOT_FOUND),
            ApiFailure::NotFound
        ));
    }

    #[test]
    fn test_other_statuses_are_server_errors() {
        assert!(matches!(
            ApiFailure::from_status(StatusCode::BAD_REQUEST),
            ApiFailure::Server { status: 400 }
        ));
        assert!(matches!(
            ApiFailure::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            ApiFailure::Server { status: 500 }
        ));
        assert!(matches!(
            ApiFailure::from_status(StatusCode::BAD_GATEWAY),
            ApiFailure::Server { status: 502 }
        ));
    }

    #[test]
    fn test_classification_labels() {
        assert_eq!(ApiFailure::Unauthorized.classification(), "unauthorized");
        assert_eq!(ApiFailure::NotFound.classification(), "not-found");
        assert_eq!(
            ApiFailure::Server { status: 500 }.classification(),
            "server-error"
        );
    }
}
