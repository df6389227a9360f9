//! Thread-safe in-memory management backend for local development and tests.

// self
use crate::{
	_prelude::*,
	auth::{ClaimUri, ProviderName, Secret},
	mgt::{IdentityProviderMgtService, SessionContext, UserAdminService, UserRealmInfo},
	provider::{IdentityProvider, ResidentIdentityProvider},
};

type StateLock = Arc<RwLock<State>>;

/// Error type produced by [`MemoryIdpBackend`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum MemoryBackendError {
	/// The session cookie does not match the one the backend expects.
	#[error("Session is not authenticated.")]
	Unauthenticated,
	/// No provider is registered under the name.
	#[error("Identity provider {name} does not exist.")]
	NotFound {
		/// Provider name that was looked up.
		name: String,
	},
	/// A provider is already registered under the name.
	#[error("Identity provider {name} already exists.")]
	AlreadyExists {
		/// Conflicting provider name.
		name: String,
	},
}

#[derive(Debug, Default)]
struct State {
	idps: BTreeMap<ProviderName, IdentityProvider>,
	resident: ResidentIdentityProvider,
	local_claim_uris: Vec<ClaimUri>,
	user_store_domains: Vec<String>,
}

/// In-process backend implementing both management service contracts.
///
/// Clones share the same state. When a session cookie is configured, every call made
/// with a different cookie fails with [`MemoryBackendError::Unauthenticated`].
#[derive(Clone, Debug, Default)]
pub struct MemoryIdpBackend {
	state: StateLock,
	session_cookie: Option<Secret>,
}
impl MemoryIdpBackend {
	/// Requires callers to present `cookie`.
	pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
		self.session_cookie = Some(Secret::new(cookie));

		self
	}

	/// Seeds the resident identity provider.
	pub fn with_resident(self, resident: ResidentIdentityProvider) -> Self {
		self.state.write().resident = resident;

		self
	}

	/// Seeds registered identity providers; later duplicates replace earlier ones.
	pub fn with_idps<I>(self, idps: I) -> Self
	where
		I: IntoIterator<Item = IdentityProvider>,
	{
		{
			let mut state = self.state.write();

			for idp in idps {
				state.idps.insert(idp.name.clone(), idp);
			}
		}

		self
	}

	/// Seeds the local claim dialect.
	pub fn with_local_claim_uris<I>(self, uris: I) -> Self
	where
		I: IntoIterator<Item = ClaimUri>,
	{
		self.state.write().local_claim_uris = uris.into_iter().collect();

		self
	}

	/// Seeds the user-store domain names.
	pub fn with_user_store_domains<I, D>(self, domains: I) -> Self
	where
		I: IntoIterator<Item = D>,
		D: Into<String>,
	{
		self.state.write().user_store_domains = domains.into_iter().map(Into::into).collect();

		self
	}

	fn authorize(&self, session: &SessionContext) -> Result<(), MemoryBackendError> {
		match &self.session_cookie {
			Some(expected) if expected != session.cookie() => Err(MemoryBackendError::Unauthenticated),
			_ => Ok(()),
		}
	}
}
impl IdentityProviderMgtService for MemoryIdpBackend {
	type Error = MemoryBackendError;

	fn get_resident_idp(
		&self,
		session: &SessionContext,
	) -> Result<ResidentIdentityProvider, Self::Error> {
		self.authorize(session)?;

		Ok(self.state.read().resident.clone())
	}

	fn update_resident_idp(
		&self,
		session: &SessionContext,
		resident: &ResidentIdentityProvider,
	) -> Result<(), Self::Error> {
		self.authorize(session)?;

		let mut state = self.state.write();
		let current = &mut state.resident;

		current.home_realm_id = resident.home_realm_id.clone();
		current.open_id_realm = resident.open_id_realm.clone();
		current.idp_entity_id = resident.idp_entity_id.clone();
		current.passive_sts_realm = resident.passive_sts_realm.clone();

		Ok(())
	}

	fn get_all_idps(&self, session: &SessionContext) -> Result<Vec<IdentityProvider>, Self::Error> {
		self.authorize(session)?;

		Ok(self.state.read().idps.values().cloned().collect())
	}

	fn get_idp_by_name(
		&self,
		session: &SessionContext,
		name: &ProviderName,
	) -> Result<Option<IdentityProvider>, Self::Error> {
		self.authorize(session)?;

		Ok(self.state.read().idps.get(name).cloned())
	}

	fn add_idp(&self, session: &SessionContext, idp: &IdentityProvider) -> Result<(), Self::Error> {
		self.authorize(session)?;

		let mut state = self.state.write();

		if state.idps.contains_key(&idp.name) {
			return Err(MemoryBackendError::AlreadyExists { name: idp.name.to_string() });
		}

		state.idps.insert(idp.name.clone(), idp.clone());

		Ok(())
	}

	fn delete_idp(&self, session: &SessionContext, name: &ProviderName) -> Result<(), Self::Error> {
		self.authorize(session)?;

		match self.state.write().idps.remove(name) {
			Some(_) => Ok(()),
			None => Err(MemoryBackendError::NotFound { name: name.to_string() }),
		}
	}

	fn update_idp(
		&self,
		session: &SessionContext,
		old_name: &ProviderName,
		idp: &IdentityProvider,
	) -> Result<(), Self::Error> {
		self.authorize(session)?;

		let mut state = self.state.write();

		if !state.idps.contains_key(old_name) {
			return Err(MemoryBackendError::NotFound { name: old_name.to_string() });
		}
		if &idp.name != old_name && state.idps.contains_key(&idp.name) {
			return Err(MemoryBackendError::AlreadyExists { name: idp.name.to_string() });
		}

		state.idps.remove(old_name);
		state.idps.insert(idp.name.clone(), idp.clone());

		Ok(())
	}

	fn get_all_local_claim_uris(
		&self,
		session: &SessionContext,
	) -> Result<Vec<ClaimUri>, Self::Error> {
		self.authorize(session)?;

		Ok(self.state.read().local_claim_uris.clone())
	}
}
impl UserAdminService for MemoryIdpBackend {
	type Error = MemoryBackendError;

	fn get_user_realm_info(&self, session: &SessionContext) -> Result<UserRealmInfo, Self::Error> {
		self.authorize(session)?;

		Ok(UserRealmInfo { domain_names: self.state.read().user_store_domains.clone() })
	}
}
