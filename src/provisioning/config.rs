//! Outbound provisioning configuration and its document-driven builder.

// crates.io
use serde::Deserializer;
// self
use crate::{
	_prelude::*,
	document::{FromNode, GenericNode},
	provider::IdentityProvider,
	provisioning::ProviderSet,
};

/// Sections recognized inside an `OutboundProvisioningConfig` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
	/// `ProvisioningIdentityProviders`: one child per provisioning identity provider.
	ProvisioningIdentityProviders,
	/// `ProvisionByRoleList`: one child per role name.
	ProvisionByRoleList,
}
impl Section {
	/// Maps an element local name to a section, if recognized.
	pub fn from_local_name(name: &str) -> Option<Self> {
		match name {
			"ProvisioningIdentityProviders" => Some(Self::ProvisioningIdentityProviders),
			"ProvisionByRoleList" => Some(Self::ProvisionByRoleList),
			_ => None,
		}
	}

	/// Element local name of the section.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::ProvisioningIdentityProviders => "ProvisioningIdentityProviders",
			Self::ProvisionByRoleList => "ProvisionByRoleList",
		}
	}
}
impl Display for Section {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outbound provisioning configuration of a service provider.
///
/// `providers` is always present (possibly empty). `role_filter` is either absent,
/// meaning users of every role are provisioned, or a non-empty list of role names that
/// scopes provisioning to members of those roles.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "P: Deserialize<'de> + Eq + Hash"))]
pub struct OutboundProvisioningConfig<P = IdentityProvider> {
	#[serde(default = "ProviderSet::new")]
	providers: ProviderSet<P>,
	#[serde(default, deserialize_with = "deserialize_role_filter")]
	role_filter: Option<Vec<String>>,
}
impl<P> OutboundProvisioningConfig<P>
where
	P: Eq + Hash,
{
	/// Creates a configuration with no providers and no role filter.
	pub fn new() -> Self {
		Self { providers: ProviderSet::new(), role_filter: None }
	}

	/// Provisioning identity providers.
	pub fn providers(&self) -> &ProviderSet<P> {
		&self.providers
	}

	/// Replaces the providers, collapsing duplicates.
	pub fn set_providers<I>(&mut self, providers: I)
	where
		I: IntoIterator<Item = P>,
	{
		self.providers = providers.into_iter().collect();
	}

	/// Role names provisioning is restricted to, or `None` when unrestricted.
	pub fn role_filter(&self) -> Option<&[String]> {
		self.role_filter.as_deref()
	}

	/// Replaces the role filter. An empty list clears the filter.
	pub fn set_role_filter(&mut self, roles: Option<Vec<String>>) {
		self.role_filter = roles.filter(|roles| !roles.is_empty());
	}

	/// Returns true if users holding `role` fall inside the role filter.
	pub fn allows_role(&self, role: &str) -> bool {
		match &self.role_filter {
			Some(roles) => roles.iter().any(|r| r == role),
			None => true,
		}
	}

	/// Consumes the configuration, returning its providers and role filter.
	pub fn into_parts(self) -> (ProviderSet<P>, Option<Vec<String>>) {
		(self.providers, self.role_filter)
	}
}
impl<P> OutboundProvisioningConfig<P>
where
	P: FromNode + Eq + Hash,
{
	/// Hydrates a configuration from an `OutboundProvisioningConfig` element.
	///
	/// ```text
	/// <OutboundProvisioningConfig>
	///     <ProvisioningIdentityProviders>...</ProvisioningIdentityProviders>
	///     <ProvisionByRoleList>...</ProvisionByRoleList>
	/// </OutboundProvisioningConfig>
	/// ```
	///
	/// Children are visited in document order and a repeated section replaces what an
	/// earlier one assigned. Providers that fail to hydrate are dropped. Role entries
	/// without text, or with blank text, are dropped; the rest are kept verbatim. A role
	/// section that keeps nothing leaves the role filter absent.
	///
	/// Whitespace-only role entries are dropped even when other entries in the same
	/// section survive, so `["  ", "admin"]` yields `["admin"]`.
	pub fn build<N>(root: &N) -> Self
	where
		N: GenericNode,
	{
		let mut config = Self::new();

		for element in root.children() {
			match Section::from_local_name(element.local_name()) {
				Some(Section::ProvisioningIdentityProviders) =>
					config.set_providers(element.children().filter_map(P::from_node)),
				Some(Section::ProvisionByRoleList) => {
					let roles = element
						.children()
						.filter_map(|role| role.text())
						.filter(|text| !text.trim().is_empty())
						.map(ToOwned::to_owned)
						.collect::<Vec<_>>();

					if !roles.is_empty() {
						config.role_filter = Some(roles);
					}
				},
				// Unrelated sections are tolerated.
				None => {},
			}
		}

		config
	}
}
impl<P> Default for OutboundProvisioningConfig<P>
where
	P: Eq + Hash,
{
	fn default() -> Self {
		Self::new()
	}
}
impl<P> PartialEq for OutboundProvisioningConfig<P>
where
	P: Eq + Hash,
{
	fn eq(&self, other: &Self) -> bool {
		self.providers == other.providers && self.role_filter == other.role_filter
	}
}
impl<P> Eq for OutboundProvisioningConfig<P> where P: Eq + Hash {}

fn deserialize_role_filter<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
	D: Deserializer<'de>,
{
	let roles = <Option<Vec<String>>>::deserialize(deserializer)?;

	Ok(roles.filter(|roles| !roles.is_empty()))
}
