//! Federated identity provider records and their document hydration.

// self
use crate::{
	_prelude::*,
	auth::ProviderName,
	document::{FromNode, GenericNode},
};

/// Federated identity provider registered for a tenant.
///
/// Two providers are the same provider when their names match; the descriptive fields
/// never participate in equality or hashing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentityProvider {
	/// Unique provider name.
	pub name: ProviderName,
	/// Human-friendly name shown in consoles.
	#[serde(default)]
	pub display_name: Option<String>,
	/// Free-form description.
	#[serde(default)]
	pub description: Option<String>,
	/// Alias the provider knows this tenant by.
	#[serde(default)]
	pub alias: Option<String>,
	/// Home realm identifier used for provider discovery.
	#[serde(default)]
	pub home_realm_id: Option<String>,
	/// Role assigned to users provisioned from this provider.
	#[serde(default)]
	pub provisioning_role: Option<String>,
	/// Whether the provider is the tenant's primary provider.
	#[serde(default)]
	pub primary: bool,
	/// Whether the provider is enabled.
	#[serde(default)]
	pub enabled: bool,
	/// Whether the provider acts as a federation hub.
	#[serde(default)]
	pub federation_hub: bool,
}
impl IdentityProvider {
	/// Creates a disabled provider with only its name set.
	pub fn new(name: ProviderName) -> Self {
		Self {
			name,
			display_name: None,
			description: None,
			alias: None,
			home_realm_id: None,
			provisioning_role: None,
			primary: false,
			enabled: false,
			federation_hub: false,
		}
	}

	/// Sets the display name.
	pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
		self.display_name = Some(display_name.into());

		self
	}

	/// Sets the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());

		self
	}

	/// Sets the alias.
	pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
		self.alias = Some(alias.into());

		self
	}

	/// Sets the home realm identifier.
	pub fn with_home_realm_id(mut self, home_realm_id: impl Into<String>) -> Self {
		self.home_realm_id = Some(home_realm_id.into());

		self
	}

	/// Sets the provisioning role.
	pub fn with_provisioning_role(mut self, role: impl Into<String>) -> Self {
		self.provisioning_role = Some(role.into());

		self
	}

	/// Overrides the primary flag.
	pub fn with_primary(mut self, primary: bool) -> Self {
		self.primary = primary;

		self
	}

	/// Overrides the enabled flag.
	pub fn with_enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;

		self
	}

	/// Overrides the federation hub flag.
	pub fn with_federation_hub(mut self, federation_hub: bool) -> Self {
		self.federation_hub = federation_hub;

		self
	}
}
impl PartialEq for IdentityProvider {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}
impl Eq for IdentityProvider {}
impl Hash for IdentityProvider {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state);
	}
}
impl Borrow<str> for IdentityProvider {
	fn borrow(&self) -> &str {
		&self.name
	}
}
impl FromNode for IdentityProvider {
	/// Hydrates a provider from an `IdentityProvider` element.
	///
	/// Yields `None` when `IdentityProviderName` is missing or not a valid
	/// [`ProviderName`].
	fn from_node<N>(node: &N) -> Option<Self>
	where
		N: GenericNode,
	{
		let name = node
			.children()
			.filter(|child| matches!(Field::from_local_name(child.local_name()), Some(Field::Name)))
			.last()?
			.text()
			.map(str::trim)
			.filter(|text| !text.is_empty())?;
		let mut idp = Self::new(ProviderName::new(name).ok()?);

		for child in node.children() {
			let Some(field) = Field::from_local_name(child.local_name()) else {
				continue;
			};
			let value = child.text().map(str::trim).filter(|text| !text.is_empty());

			match field {
				Field::Name => {},
				Field::DisplayName => idp.display_name = value.map(Into::into),
				Field::Description => idp.description = value.map(Into::into),
				Field::Alias => idp.alias = value.map(Into::into),
				Field::HomeRealmId => idp.home_realm_id = value.map(Into::into),
				Field::ProvisioningRole => idp.provisioning_role = value.map(Into::into),
				Field::IsPrimary => idp.primary = parse_flag(value),
				Field::IsEnabled => idp.enabled = parse_flag(value),
				Field::IsFederationHub => idp.federation_hub = parse_flag(value),
			}
		}

		Some(idp)
	}
}

#[derive(Clone, Copy)]
enum Field {
	Name,
	DisplayName,
	Description,
	Alias,
	HomeRealmId,
	ProvisioningRole,
	IsPrimary,
	IsEnabled,
	IsFederationHub,
}
impl Field {
	fn from_local_name(name: &str) -> Option<Self> {
		Some(match name {
			"IdentityProviderName" => Self::Name,
			"DisplayName" => Self::DisplayName,
			"IdentityProviderDescription" => Self::Description,
			"Alias" => Self::Alias,
			"HomeRealmId" => Self::HomeRealmId,
			"ProvisioningRole" => Self::ProvisioningRole,
			"IsPrimary" => Self::IsPrimary,
			"IsEnabled" => Self::IsEnabled,
			"IsFederationHub" => Self::IsFederationHub,
			_ => return None,
		})
	}
}

fn parse_flag(value: Option<&str>) -> bool {
	value.is_some_and(|text| text.eq_ignore_ascii_case("true"))
}
