#![cfg(feature = "test")]

// std
use std::thread;
// self
use idp_mgt::{
	_preludet::*,
	document::{Element, FromNode, GenericNode},
	provider::IdentityProvider,
	provisioning::OutboundProvisioningConfig,
};

fn root<I>(sections: I) -> Element
where
	I: IntoIterator<Item = Element>,
{
	Element::new("OutboundProvisioningConfig").with_children(sections)
}

fn providers_section<I>(entries: I) -> Element
where
	I: IntoIterator<Item = Element>,
{
	Element::new("ProvisioningIdentityProviders").with_children(entries)
}

fn roles_section<'a, I>(roles: I) -> Element
where
	I: IntoIterator<Item = &'a str>,
{
	Element::new("ProvisionByRoleList")
		.with_children(roles.into_iter().map(|role| Element::leaf("ProvisionByRole", role)))
}

fn malformed_provider() -> Element {
	Element::new("IdentityProvider").with_child(Element::leaf("DisplayName", "No name"))
}

fn build(document: &Element) -> OutboundProvisioningConfig {
	OutboundProvisioningConfig::build(document)
}

#[test]
fn documents_without_recognized_sections_yield_defaults() {
	let documents = [
		root([]),
		root([Element::leaf("ProvisioningConnectors", "ignored"), Element::new("Extra")]),
		Element::leaf("SomethingElse", "text"),
	];

	for document in &documents {
		let config = build(document);

		assert!(config.providers().is_empty());
		assert_eq!(config.role_filter(), None);
	}
}

#[test]
fn duplicate_and_malformed_providers_collapse() {
	let document = root([providers_section([
		provider_element("Google"),
		malformed_provider(),
		provider_element("Google"),
	])]);
	let config = build(&document);

	assert_eq!(config.providers().len(), 1);
	assert!(config.providers().contains("Google"));
}

#[test]
fn provider_count_is_parsed_minus_duplicates() {
	// N = 6 children, M = 5 parse, D = 2 duplicates.
	let document = root([providers_section([
		provider_element("a"),
		provider_element("b"),
		provider_element("a"),
		malformed_provider(),
		provider_element("c"),
		provider_element("b"),
	])]);

	assert_eq!(build(&document).providers().len(), 3);
}

#[test]
fn empty_providers_section_assigns_an_empty_set() {
	let document = root([providers_section([malformed_provider()])]);
	let config = build(&document);

	assert!(config.providers().is_empty());
	assert_eq!(config, build(&root([])));
}

#[test]
fn blank_role_filter_stays_absent() {
	let whitespace = root([roles_section(["", "   ", "\t\n"])]);
	let textless = root([Element::new("ProvisionByRoleList")
		.with_children([Element::new("ProvisionByRole"), Element::new("ProvisionByRole")])]);
	let empty = root([roles_section([])]);

	for document in [&whitespace, &textless, &empty] {
		assert_eq!(build(document).role_filter(), None);
	}
}

#[test]
fn role_filter_keeps_non_blank_entries_verbatim_in_order() {
	let document = root([roles_section(["", "admin"])]);

	assert_eq!(build(&document).role_filter(), Some(&["admin".to_owned()][..]));

	let document = root([roles_section([" Internal/everyone ", "admin", "", "admin", "ADMIN"])]);
	let expected = [" Internal/everyone ", "admin", "admin", "ADMIN"].map(String::from);

	assert_eq!(build(&document).role_filter(), Some(&expected[..]));
}

#[test]
fn namespaced_sections_are_recognized_by_local_name() {
	let document = Element::new("ns:OutboundProvisioningConfig").with_children([
		Element::new("ns:ProvisioningIdentityProviders").with_child(provider_element("Okta")),
		Element::new("ns:ProvisionByRoleList")
			.with_child(Element::leaf("ns:ProvisionByRole", "admin")),
	]);
	let config = build(&document);

	assert!(config.providers().contains("Okta"));
	assert!(config.allows_role("admin"));
	assert!(!config.allows_role("guest"));
}

#[test]
fn building_twice_yields_equal_values() {
	let document = root([
		providers_section([provider_element("Google"), provider_element("Okta")]),
		roles_section(["admin", "manager"]),
		Element::new("Unknown"),
	]);

	assert_eq!(build(&document), build(&document));
}

#[test]
fn json_documents_hydrate_like_assembled_ones() {
	let json = r#"{
		"name": "OutboundProvisioningConfig",
		"children": [
			{ "name": "ProvisioningIdentityProviders", "children": [
				{ "name": "IdentityProvider", "children": [
					{ "name": "IdentityProviderName", "text": "Google" },
					{ "name": "IsEnabled", "text": "true" }
				]}
			]},
			{ "name": "ProvisionByRoleList", "children": [
				{ "name": "ProvisionByRole", "text": "admin" }
			]}
		]
	}"#;
	let document = Element::from_json_str(json).expect("JSON document should decode.");
	let config = build(&document);
	let google = config.providers().get("Google").expect("Google should be provisioned.");

	assert!(google.enabled);
	assert_eq!(
		config,
		build(&root([providers_section([provider_element("Google")]), roles_section(["admin"])]))
	);
}

#[test]
fn builds_concurrently_from_independent_documents() {
	let handles = (0..4)
		.map(|i| {
			thread::spawn(move || {
				let document = root([providers_section(
					(0..=i).map(|n| provider_element(&format!("idp-{n}"))),
				)]);

				build(&document).providers().len()
			})
		})
		.collect::<Vec<_>>();
	let sizes = handles
		.into_iter()
		.map(|handle| handle.join().expect("Builder thread should not panic."))
		.collect::<Vec<_>>();

	assert_eq!(sizes, vec![1, 2, 3, 4]);
}

/// Provider reference keyed by a bare string, hydrated from the element text.
#[derive(Debug, PartialEq, Eq, Hash)]
struct Target(String);
impl FromNode for Target {
	fn from_node<N>(node: &N) -> Option<Self>
	where
		N: GenericNode,
	{
		node.text().filter(|text| !text.is_empty()).map(|text| Self(text.to_owned()))
	}
}

#[test]
fn builder_accepts_custom_provider_types() {
	let document = root([providers_section([
		Element::leaf("Target", "scim"),
		Element::new("Target"),
		Element::leaf("Target", "scim"),
		Element::leaf("Target", "salesforce"),
	])]);
	let config = OutboundProvisioningConfig::<Target>::build(&document);

	assert_eq!(config.providers().len(), 2);
	assert!(config.providers().contains(&Target("salesforce".into())));

	let (providers, role_filter) = config.into_parts();

	assert_eq!(providers.into_iter().count(), 2);
	assert_eq!(role_filter, None);
}

#[test]
fn providers_survive_serde_round_trip() {
	let config = build(&root([providers_section([provider_element("Google")])]));
	let json = serde_json::to_string(&config).expect("Config should serialize.");
	let restored: OutboundProvisioningConfig =
		serde_json::from_str(&json).expect("Config should deserialize.");

	assert_eq!(restored, config);
	assert!(restored.providers().iter().all(|idp: &IdentityProvider| idp.name.as_ref() == "Google"));
}
