//! Crate-level error types shared across the document, session, and facade layers.

// self
use crate::{_prelude::*, obs::Operation};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Result type returned by every management facade call.
pub type OperationResult<T> = std::result::Result<T, OperationError>;

pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical error exposed by fallible public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A remote management call failed.
	#[error(transparent)]
	Operation(#[from] OperationError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// A serialized document could not be decoded.
	#[error(transparent)]
	Document(#[from] DocumentError),
	/// An identifier failed validation.
	#[error(transparent)]
	Identifier(#[from] crate::auth::IdentifierError),
}

/// Uniform failure raised by the management facade.
///
/// The message is fixed per operation and safe to surface to end users; the
/// original transport or service failure is kept as the [`source`](StdError::source)
/// for diagnostics only.
#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct OperationError {
	/// Operation that failed.
	pub operation: Operation,
	/// Operation-specific, human-readable message.
	pub message: String,
	/// Underlying transport or service failure.
	#[source]
	pub source: BoxError,
}
impl OperationError {
	/// Wraps a service failure for the provided operation.
	pub fn new(
		operation: Operation,
		message: impl Into<String>,
		src: impl 'static + Send + Sync + StdError,
	) -> Self {
		Self { operation, message: message.into(), source: Box::new(src) }
	}
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Backend server URL cannot be parsed.
	#[error("Backend server URL is invalid.")]
	InvalidBackendUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Backend server URL uses a scheme other than HTTP(S).
	#[error("Backend server URL must use http or https: {url}.")]
	UnsupportedScheme {
		/// URL that failed validation.
		url: String,
	},
}

/// Failures raised while decoding serialized documents.
#[derive(Debug, ThisError)]
pub enum DocumentError {
	/// The JSON payload does not describe a document tree.
	#[error("Document JSON is malformed at `{path}`.")]
	Json {
		/// Path to the offending value.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for DocumentError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Json { path, source: e.into_inner() }
	}
}
