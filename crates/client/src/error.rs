//! Error types for companion service calls.
//!
//! Three failure classes, all handled identically at the boundary: log,
//! leave current state untouched, no retry.

/// Errors from a single request to the companion service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: unreachable host, timeout, or non-2xx status.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The response arrived but did not decode to the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Well-formed response with `success: false`.
    #[error("Service reported failure: {0}")]
    Service(String),
}

impl ApiError {
    /// Check if the service itself rejected the request (as opposed to a
    /// transport or decode problem).
    pub fn is_service_failure(&self) -> bool {
        matches!(self, Self::Service(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::RequestFailed("connection refused".to_string());
        assert_eq!(err.to_string(), "Request failed: connection refused");
        assert!(!err.is_service_failure());
        assert!(ApiError::Service("busy".to_string()).is_service_failure());
    }
}
