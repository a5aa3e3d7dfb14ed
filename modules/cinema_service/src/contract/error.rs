//! Contract error types for cinema service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Cinema service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CinemaError {
    /// Malformed or out-of-range input, rejected before any lookup
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// Referenced movie or showtime does not exist
    #[error("{resource} \"{id}\" Not Found")]
    NotFound {
        /// Lookup key kind ("Movie ID", "Movie", "Showtime ID")
        resource: String,
        /// Lookup key value
        id: String,
    },
    /// Uniqueness or overlap violation
    #[error("Conflict: {reason}")]
    Conflict {
        /// Conflict reason
        reason: String,
    },
    /// Request is well-formed but violates a scheduling rule
    #[error("Bad request: {message}")]
    BadRequest {
        /// Rule violation message
        message: String,
    },
    /// Internal error
    #[error("Internal error")]
    Internal,
}

impl CinemaError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn movie_id_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "Movie ID".to_string(),
            id: id.to_string(),
        }
    }

    pub(crate) fn movie_title_not_found(title: &str) -> Self {
        Self::NotFound {
            resource: "Movie".to_string(),
            id: title.to_string(),
        }
    }

    pub(crate) fn showtime_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "Showtime ID".to_string(),
            id: id.to_string(),
        }
    }

    pub(crate) fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    /// Whether this error is a conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Whether this error is a not-found
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = CinemaError::showtime_not_found(42);
        assert_eq!(
            err.to_string(),
            "Showtime ID \"42\" Not Found"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_conflict_display() {
        let err = CinemaError::conflict("Seat number 3 already booked for showtime ID 1");
        assert_eq!(
            err.to_string(),
            "Conflict: Seat number 3 already booked for showtime ID 1"
        );
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_internal_display() {
        assert_eq!(CinemaError::Internal.to_string(), "Internal error");
    }
}
