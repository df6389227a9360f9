//! Session cookie and backend endpoints fixed for the lifetime of a facade.

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Session and authority context shared by every call issued through one facade.
///
/// The context is immutable once built. Service endpoints are derived from the backend
/// server URL, which is treated as a directory even without a trailing slash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
	cookie: Secret,
	backend: Url,
	idp_mgt_endpoint: Url,
	user_admin_endpoint: Url,
}
impl SessionContext {
	/// Path segment of the identity-provider management service.
	pub const IDP_MGT_SERVICE: &'static str = "IdentityProviderMgtService";
	/// Path segment of the user administration service.
	pub const USER_ADMIN_SERVICE: &'static str = "UserAdmin";

	/// Parses `backend_url` and builds a context for the provided session cookie.
	pub fn new(cookie: impl Into<String>, backend_url: &str) -> Result<Self, ConfigError> {
		let backend =
			Url::parse(backend_url).map_err(|source| ConfigError::InvalidBackendUrl { source })?;

		Self::from_url(cookie, backend)
	}

	/// Builds a context from an already parsed backend URL.
	pub fn from_url(cookie: impl Into<String>, mut backend: Url) -> Result<Self, ConfigError> {
		if !matches!(backend.scheme(), "http" | "https") {
			return Err(ConfigError::UnsupportedScheme { url: backend.to_string() });
		}

		backend.set_query(None);
		backend.set_fragment(None);

		if !backend.path().ends_with('/') {
			let path = format!("{}/", backend.path());

			backend.set_path(&path);
		}

		let idp_mgt_endpoint = join(&backend, Self::IDP_MGT_SERVICE)?;
		let user_admin_endpoint = join(&backend, Self::USER_ADMIN_SERVICE)?;

		Ok(Self { cookie: Secret::new(cookie), backend, idp_mgt_endpoint, user_admin_endpoint })
	}

	/// Session cookie presented to the backend.
	pub fn cookie(&self) -> &Secret {
		&self.cookie
	}

	/// Normalized backend server URL (always ends with `/`).
	pub fn backend_url(&self) -> &Url {
		&self.backend
	}

	/// Endpoint of the identity-provider management service.
	pub fn idp_mgt_endpoint(&self) -> &Url {
		&self.idp_mgt_endpoint
	}

	/// Endpoint of the user administration service.
	pub fn user_admin_endpoint(&self) -> &Url {
		&self.user_admin_endpoint
	}
}

fn join(base: &Url, service: &str) -> Result<Url, ConfigError> {
	base.join(service).map_err(|source| ConfigError::InvalidBackendUrl { source })
}
