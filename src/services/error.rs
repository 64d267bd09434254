//! Errors returned by the research services.

use thiserror::Error;

/// Why a service request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
	/// The persona id is not in the catalogue.
	#[error("unknown persona `{0}`")]
	UnknownPersona(String),

	/// The methodology id is not in the catalogue.
	#[error("unknown methodology `{0}`")]
	UnknownMethodology(String),

	/// Feedback is missing its agent or insight.
	#[error("invalid feedback: {0}")]
	InvalidFeedback(&'static str),

	/// Collaboration request failed validation.
	#[error("invalid collaboration request: {0}")]
	InvalidCollaboration(&'static str),
}

/// Result of a service call.
pub type ServiceResult<T> = Result<T, ServiceError>;
