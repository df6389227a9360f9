//! Management facade mapping every service failure into [`OperationError`](crate::error::OperationError).

// self
use crate::{
	_prelude::*,
	auth::{ClaimUri, ProviderName},
	error::{OperationError, OperationResult},
	mgt::{IdentityProviderMgtService, SessionContext, UserAdminService},
	obs::{self, CallOutcome, CallSpan, Operation},
	provider::{IdentityProvider, ResidentIdentityProvider},
};

/// Synchronous facade over the identity-provider management and user administration
/// services of one tenant.
///
/// Every call blocks for one remote round trip. Failures are never retried and never
/// partially recovered: the caller receives an [`OperationError`] whose message is
/// fixed per operation and safe to show to end users.
pub struct IdentityProviderMgtClient<S, U>
where
	S: ?Sized + IdentityProviderMgtService,
	U: ?Sized + UserAdminService,
{
	session: SessionContext,
	idp_service: Arc<S>,
	user_admin: Arc<U>,
}
impl<S, U> IdentityProviderMgtClient<S, U>
where
	S: ?Sized + IdentityProviderMgtService,
	U: ?Sized + UserAdminService,
{
	/// Creates a facade bound to `session` for its whole lifetime.
	pub fn new(
		session: SessionContext,
		idp_service: impl Into<Arc<S>>,
		user_admin: impl Into<Arc<U>>,
	) -> Self {
		Self { session, idp_service: idp_service.into(), user_admin: user_admin.into() }
	}

	/// Session context shared by every call.
	pub fn session(&self) -> &SessionContext {
		&self.session
	}

	/// Retrieves the resident identity provider of the tenant.
	pub fn get_resident_idp(&self) -> OperationResult<ResidentIdentityProvider> {
		self.call(
			Operation::GetResidentIdp,
			|| "Error occurred while retrieving resident Identity Provider".into(),
			|session| self.idp_service.get_resident_idp(session),
		)
	}

	/// Updates the resident identity provider.
	///
	/// Only the realm settings (home realm identifier, OpenID realm, IdP entity
	/// identifier, passive STS realm) are sent; server-managed fields are dropped.
	pub fn update_resident_idp(&self, resident: &ResidentIdentityProvider) -> OperationResult<()> {
		let request = resident.to_update_request();

		self.call(
			Operation::UpdateResidentIdp,
			|| "Error occurred while updating resident Identity Provider".into(),
			|session| self.idp_service.update_resident_idp(session, &request),
		)
	}

	/// Retrieves every registered identity provider of the tenant.
	pub fn get_idps(&self) -> OperationResult<Vec<IdentityProvider>> {
		self.call(
			Operation::GetIdps,
			|| "Error occurred while retrieving list of Identity Providers".into(),
			|session| self.idp_service.get_all_idps(session),
		)
	}

	/// Retrieves one identity provider by name; `None` when it is not registered.
	pub fn get_idp_by_name(&self, name: &ProviderName) -> OperationResult<Option<IdentityProvider>> {
		self.call(
			Operation::GetIdpByName,
			|| format!("Error occurred while retrieving information about {name}"),
			|session| self.idp_service.get_idp_by_name(session, name),
		)
	}

	/// Registers a new identity provider.
	pub fn add_idp(&self, idp: &IdentityProvider) -> OperationResult<()> {
		self.call(
			Operation::AddIdp,
			|| format!("Error occurred while adding Identity Provider {}", idp.name),
			|session| self.idp_service.add_idp(session, idp),
		)
	}

	/// Deletes an identity provider by name.
	pub fn delete_idp(&self, name: &ProviderName) -> OperationResult<()> {
		self.call(
			Operation::DeleteIdp,
			|| format!("Error occurred while deleting Identity Provider {name}"),
			|session| self.idp_service.delete_idp(session, name),
		)
	}

	/// Replaces the identity provider registered as `old_name`.
	pub fn update_idp(&self, old_name: &ProviderName, idp: &IdentityProvider) -> OperationResult<()> {
		self.call(
			Operation::UpdateIdp,
			|| format!("Error occurred while updating Identity Provider {old_name}"),
			|session| self.idp_service.update_idp(session, old_name, idp),
		)
	}

	/// Retrieves the claim URIs of the local claim dialect.
	pub fn get_all_local_claim_uris(&self) -> OperationResult<Vec<ClaimUri>> {
		self.call(
			Operation::GetAllLocalClaimUris,
			|| "Error occurred while retrieving all local claim URIs".into(),
			|session| self.idp_service.get_all_local_claim_uris(session),
		)
	}

	/// Retrieves the user-store domain names of the logged-in user's tenant realm.
	pub fn get_user_store_domains(&self) -> OperationResult<Vec<String>> {
		self.call(
			Operation::GetUserStoreDomains,
			|| {
				"Error occurred while retrieving User Store Domain IDs for logged-in user's tenant realm"
					.into()
			},
			|session| self.user_admin.get_user_realm_info(session).map(|info| info.domain_names),
		)
	}

	fn call<T, E>(
		&self,
		operation: Operation,
		message: impl FnOnce() -> String,
		remote: impl FnOnce(&SessionContext) -> Result<T, E>,
	) -> OperationResult<T>
	where
		E: 'static + Send + Sync + StdError,
	{
		let _guard = CallSpan::new(operation).entered();

		obs::record_call_outcome(operation, CallOutcome::Attempt);

		match remote(&self.session) {
			Ok(value) => {
				obs::record_call_outcome(operation, CallOutcome::Success);

				Ok(value)
			},
			Err(e) => {
				obs::record_call_failure(operation, &e);
				obs::record_call_outcome(operation, CallOutcome::Failure);

				Err(OperationError::new(operation, message(), e))
			},
		}
	}
}
impl<S, U> Clone for IdentityProviderMgtClient<S, U>
where
	S: ?Sized + IdentityProviderMgtService,
	U: ?Sized + UserAdminService,
{
	fn clone(&self) -> Self {
		Self {
			session: self.session.clone(),
			idp_service: self.idp_service.clone(),
			user_admin: self.user_admin.clone(),
		}
	}
}
impl<S, U> Debug for IdentityProviderMgtClient<S, U>
where
	S: ?Sized + IdentityProviderMgtService,
	U: ?Sized + UserAdminService,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("IdentityProviderMgtClient")
			.field("idp_mgt_endpoint", &self.session.idp_mgt_endpoint().as_str())
			.field("user_admin_endpoint", &self.session.user_admin_endpoint().as_str())
			.finish()
	}
}
