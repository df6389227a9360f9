//! OpenID relying-party transfer objects.
//!
//! [`OpenIdDto`] carries a user's OpenID identifier, credentials, and claims between
//! the relying-party UI and its backend. It owns its claims outright: reads hand back
//! copies and writes copy the caller's slice, so no caller ever shares storage with it.

// self
use crate::{
	_prelude::*,
	auth::{ClaimUri, Secret},
};

/// A single claim asserted about the user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Claim {
	/// Claim URI within the local dialect.
	pub uri: ClaimUri,
	/// Claim value.
	pub value: String,
}
impl Claim {
	/// Creates a claim.
	pub fn new(uri: ClaimUri, value: impl Into<String>) -> Self {
		Self { uri, value: value.into() }
	}
}

/// OpenID login data exchanged with the relying-party backend.
#[derive(Clone, Debug, Default)]
pub struct OpenIdDto {
	open_id: Option<String>,
	user_name: Option<String>,
	password: Option<Secret>,
	claims: Vec<Claim>,
}
impl OpenIdDto {
	/// Creates an empty transfer object.
	pub fn new() -> Self {
		Self::default()
	}

	/// OpenID identifier.
	pub fn open_id(&self) -> Option<&str> {
		self.open_id.as_deref()
	}

	/// Sets the OpenID identifier, trimming surrounding whitespace.
	pub fn set_open_id(&mut self, open_id: &str) {
		self.open_id = Some(open_id.trim().to_owned());
	}

	/// User name.
	pub fn user_name(&self) -> Option<&str> {
		self.user_name.as_deref()
	}

	/// Sets the user name, trimming surrounding whitespace.
	pub fn set_user_name(&mut self, user_name: &str) {
		self.user_name = Some(user_name.trim().to_owned());
	}

	/// Password.
	pub fn password(&self) -> Option<&Secret> {
		self.password.as_ref()
	}

	/// Sets the password, trimming surrounding whitespace.
	pub fn set_password(&mut self, password: &str) {
		self.password = Some(Secret::new(password.trim()));
	}

	/// Returns a copy of the claims.
	pub fn claims(&self) -> Vec<Claim> {
		self.claims.clone()
	}

	/// Replaces the claims with a copy of `claims`.
	pub fn set_claims(&mut self, claims: &[Claim]) {
		self.claims = claims.to_vec();
	}
}
