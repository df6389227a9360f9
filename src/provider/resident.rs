//! Resident identity provider settings.

// self
use crate::_prelude::*;

/// The tenant's own identity provider, as advertised to federated partners.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentIdentityProvider {
	/// Home realm identifier.
	#[serde(default)]
	pub home_realm_id: Option<String>,
	/// OpenID realm.
	#[serde(default)]
	pub open_id_realm: Option<String>,
	/// SAML entity identifier of the resident IdP.
	#[serde(default)]
	pub idp_entity_id: Option<String>,
	/// Passive STS realm.
	#[serde(default)]
	pub passive_sts_realm: Option<String>,
	/// Display name reported by the server; never sent on update.
	#[serde(default)]
	pub display_name: Option<String>,
	/// Enabled flag reported by the server; never sent on update.
	#[serde(default)]
	pub enabled: bool,
}
impl ResidentIdentityProvider {
	/// Returns a copy holding only the realm settings the update operation accepts.
	pub fn to_update_request(&self) -> Self {
		Self {
			home_realm_id: self.home_realm_id.clone(),
			open_id_realm: self.open_id_realm.clone(),
			idp_entity_id: self.idp_entity_id.clone(),
			passive_sts_realm: self.passive_sts_realm.clone(),
			..Default::default()
		}
	}
}
