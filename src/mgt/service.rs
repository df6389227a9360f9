//! Remote service contracts consumed by the management facade.
//!
//! Implementations own the wire transport (SOAP, REST, in-process) and attach the
//! [`SessionContext`] to every request however their protocol expects. They are
//! free to surface any error type; the facade never inspects it beyond logging.

// self
use crate::{
	_prelude::*,
	auth::{ClaimUri, ProviderName},
	mgt::SessionContext,
	provider::{IdentityProvider, ResidentIdentityProvider},
};

/// Identity-provider management service of a tenant.
pub trait IdentityProviderMgtService
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the transport or the remote service.
	type Error: 'static + Send + Sync + StdError;

	/// Fetches the resident identity provider.
	fn get_resident_idp(
		&self,
		session: &SessionContext,
	) -> Result<ResidentIdentityProvider, Self::Error>;

	/// Stores the resident identity provider's realm settings.
	fn update_resident_idp(
		&self,
		session: &SessionContext,
		resident: &ResidentIdentityProvider,
	) -> Result<(), Self::Error>;

	/// Lists every registered identity provider.
	fn get_all_idps(&self, session: &SessionContext) -> Result<Vec<IdentityProvider>, Self::Error>;

	/// Fetches a provider by name; `None` when no such provider is registered.
	fn get_idp_by_name(
		&self,
		session: &SessionContext,
		name: &ProviderName,
	) -> Result<Option<IdentityProvider>, Self::Error>;

	/// Registers a new provider.
	fn add_idp(&self, session: &SessionContext, idp: &IdentityProvider) -> Result<(), Self::Error>;

	/// Deletes a provider by name.
	fn delete_idp(&self, session: &SessionContext, name: &ProviderName) -> Result<(), Self::Error>;

	/// Replaces the provider registered as `old_name` with `idp` (which may be renamed).
	fn update_idp(
		&self,
		session: &SessionContext,
		old_name: &ProviderName,
		idp: &IdentityProvider,
	) -> Result<(), Self::Error>;

	/// Lists the claim URIs of the local claim dialect.
	fn get_all_local_claim_uris(&self, session: &SessionContext)
	-> Result<Vec<ClaimUri>, Self::Error>;
}

/// User administration service of a tenant.
pub trait UserAdminService
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the transport or the remote service.
	type Error: 'static + Send + Sync + StdError;

	/// Fetches user-realm information for the logged-in user's tenant.
	fn get_user_realm_info(&self, session: &SessionContext) -> Result<UserRealmInfo, Self::Error>;
}

/// User-realm information reported by the user administration service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRealmInfo {
	/// Domain names of the user stores attached to the realm.
	#[serde(default)]
	pub domain_names: Vec<String>,
}
