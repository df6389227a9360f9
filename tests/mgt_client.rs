#![cfg(feature = "test")]

// self
use idp_mgt::{
	_preludet::*,
	auth::{ClaimUri, ProviderName},
	error::OperationError,
	mgt::{
		IdentityProviderMgtClient, IdentityProviderMgtService, MemoryBackendError,
		MemoryIdpBackend, SessionContext, UserAdminService, UserRealmInfo,
	},
	obs::Operation,
	provider::{IdentityProvider, ResidentIdentityProvider},
};

#[derive(Debug, ThisError)]
#[error("SOAP fault: service unavailable")]
struct ServiceFault;

/// Service double that fails every call and remembers what it was sent.
#[derive(Default)]
struct FaultyService {
	resident_updates: RwLock<Vec<ResidentIdentityProvider>>,
	cookies: RwLock<Vec<String>>,
}
impl FaultyService {
	fn fail<T>(&self, session: &SessionContext) -> Result<T, ServiceFault> {
		self.cookies.write().push(session.cookie().expose().to_owned());

		Err(ServiceFault)
	}
}
impl IdentityProviderMgtService for FaultyService {
	type Error = ServiceFault;

	fn get_resident_idp(
		&self,
		session: &SessionContext,
	) -> Result<ResidentIdentityProvider, Self::Error> {
		self.fail(session)
	}

	fn update_resident_idp(
		&self,
		session: &SessionContext,
		resident: &ResidentIdentityProvider,
	) -> Result<(), Self::Error> {
		self.resident_updates.write().push(resident.clone());

		self.fail(session)
	}

	fn get_all_idps(&self, session: &SessionContext) -> Result<Vec<IdentityProvider>, Self::Error> {
		self.fail(session)
	}

	fn get_idp_by_name(
		&self,
		session: &SessionContext,
		_name: &ProviderName,
	) -> Result<Option<IdentityProvider>, Self::Error> {
		self.fail(session)
	}

	fn add_idp(&self, session: &SessionContext, _idp: &IdentityProvider) -> Result<(), Self::Error> {
		self.fail(session)
	}

	fn delete_idp(&self, session: &SessionContext, _name: &ProviderName) -> Result<(), Self::Error> {
		self.fail(session)
	}

	fn update_idp(
		&self,
		session: &SessionContext,
		_old_name: &ProviderName,
		_idp: &IdentityProvider,
	) -> Result<(), Self::Error> {
		self.fail(session)
	}

	fn get_all_local_claim_uris(
		&self,
		session: &SessionContext,
	) -> Result<Vec<ClaimUri>, Self::Error> {
		self.fail(session)
	}
}
impl UserAdminService for FaultyService {
	type Error = ServiceFault;

	fn get_user_realm_info(&self, session: &SessionContext) -> Result<UserRealmInfo, Self::Error> {
		self.fail(session)
	}
}

fn faulty_client() -> (IdentityProviderMgtClient<FaultyService, FaultyService>, Arc<FaultyService>) {
	let service = Arc::new(FaultyService::default());
	let client = IdentityProviderMgtClient::new(test_session(), service.clone(), service.clone());

	(client, service)
}

fn assert_operation_error(err: OperationError, operation: Operation, message: &str) {
	assert_eq!(err.operation, operation);
	assert_eq!(err.to_string(), message);

	let source = StdError::source(&err).expect("Operation errors must keep the original cause.");

	assert_eq!(source.to_string(), "SOAP fault: service unavailable");
}

#[test]
fn every_failure_maps_to_its_fixed_message() {
	let (client, service) = faulty_client();
	let google = provider_name("Google");
	let okta = provider("Okta");

	assert_operation_error(
		client.get_resident_idp().expect_err("Resident fetch should fail."),
		Operation::GetResidentIdp,
		"Error occurred while retrieving resident Identity Provider",
	);
	assert_operation_error(
		client
			.update_resident_idp(&ResidentIdentityProvider::default())
			.expect_err("Resident update should fail."),
		Operation::UpdateResidentIdp,
		"Error occurred while updating resident Identity Provider",
	);
	assert_operation_error(
		client.get_idps().expect_err("Listing should fail."),
		Operation::GetIdps,
		"Error occurred while retrieving list of Identity Providers",
	);
	assert_operation_error(
		client.get_idp_by_name(&google).expect_err("Lookup should fail."),
		Operation::GetIdpByName,
		"Error occurred while retrieving information about Google",
	);
	assert_operation_error(
		client.add_idp(&okta).expect_err("Adding should fail."),
		Operation::AddIdp,
		"Error occurred while adding Identity Provider Okta",
	);
	assert_operation_error(
		client.delete_idp(&google).expect_err("Deleting should fail."),
		Operation::DeleteIdp,
		"Error occurred while deleting Identity Provider Google",
	);
	assert_operation_error(
		client.update_idp(&google, &okta).expect_err("Updating should fail."),
		Operation::UpdateIdp,
		"Error occurred while updating Identity Provider Google",
	);
	assert_operation_error(
		client.get_all_local_claim_uris().expect_err("Claim listing should fail."),
		Operation::GetAllLocalClaimUris,
		"Error occurred while retrieving all local claim URIs",
	);
	assert_operation_error(
		client.get_user_store_domains().expect_err("Domain listing should fail."),
		Operation::GetUserStoreDomains,
		"Error occurred while retrieving User Store Domain IDs for logged-in user's tenant realm",
	);

	// One attempt per call, all under the session captured at construction.
	let cookies = service.cookies.read();

	assert_eq!(cookies.len(), 9);
	assert!(cookies.iter().all(|cookie| cookie == TEST_COOKIE));
}

#[test]
fn resident_update_forwards_only_realm_settings() {
	let (client, service) = faulty_client();
	let resident = ResidentIdentityProvider {
		home_realm_id: Some("localhost".into()),
		open_id_realm: Some("openid".into()),
		idp_entity_id: Some("https://localhost:9443/samlsso".into()),
		passive_sts_realm: Some("passive".into()),
		display_name: Some("Resident IdP".into()),
		enabled: true,
	};
	let _ = client.update_resident_idp(&resident);
	let sent = service.resident_updates.read();

	assert_eq!(sent.len(), 1);
	assert_eq!(sent[0].home_realm_id, resident.home_realm_id);
	assert_eq!(sent[0].open_id_realm, resident.open_id_realm);
	assert_eq!(sent[0].idp_entity_id, resident.idp_entity_id);
	assert_eq!(sent[0].passive_sts_realm, resident.passive_sts_realm);
	assert_eq!(sent[0].display_name, None);
	assert!(!sent[0].enabled);
}

#[test]
fn memory_backend_round_trips_through_the_facade() {
	let backend = MemoryIdpBackend::default()
		.with_session_cookie(TEST_COOKIE)
		.with_local_claim_uris([
			ClaimUri::new("http://wso2.org/claims/emailaddress").expect("Claim URI should be valid.")
		])
		.with_user_store_domains(["PRIMARY", "SECONDARY"]);
	let client = build_memory_test_client(backend);

	assert!(client.get_idps().expect("Empty listing should succeed.").is_empty());

	client
		.add_idp(&provider("Google").with_display_name("Google Workspace").with_enabled(true))
		.expect("Adding Google should succeed.");
	client.add_idp(&provider("Okta")).expect("Adding Okta should succeed.");

	let google = client
		.get_idp_by_name(&provider_name("Google"))
		.expect("Lookup should succeed.")
		.expect("Google should be registered.");

	assert_eq!(google.display_name.as_deref(), Some("Google Workspace"));
	assert_eq!(client.get_idp_by_name(&provider_name("Azure")).ok(), Some(None));

	client
		.update_idp(&provider_name("Okta"), &provider("Okta Workforce"))
		.expect("Renaming Okta should succeed.");
	client.delete_idp(&provider_name("Google")).expect("Deleting Google should succeed.");

	let names = client
		.get_idps()
		.expect("Listing should succeed.")
		.into_iter()
		.map(|idp| idp.name.to_string())
		.collect::<Vec<_>>();

	assert_eq!(names, vec!["Okta Workforce".to_owned()]);
	assert_eq!(
		client.get_user_store_domains().expect("Domain listing should succeed."),
		vec!["PRIMARY".to_owned(), "SECONDARY".to_owned()]
	);
	assert_eq!(client.get_all_local_claim_uris().expect("Claim listing should succeed.").len(), 1);

	client
		.update_resident_idp(&ResidentIdentityProvider {
			home_realm_id: Some("localhost".into()),
			..Default::default()
		})
		.expect("Resident update should succeed.");

	assert_eq!(
		client.get_resident_idp().expect("Resident fetch should succeed.").home_realm_id.as_deref(),
		Some("localhost")
	);
}

#[test]
fn backend_rejections_surface_as_operation_errors() {
	let client = build_memory_test_client(MemoryIdpBackend::default().with_idps([provider("Okta")]));
	let err = client.add_idp(&provider("Okta")).expect_err("Duplicate add should fail.");

	assert_eq!(err.to_string(), "Error occurred while adding Identity Provider Okta");

	let cause = err
		.source
		.downcast_ref::<MemoryBackendError>()
		.expect("Cause should be the backend error.");

	assert_eq!(cause, &MemoryBackendError::AlreadyExists { name: "Okta".into() });

	let err = client.delete_idp(&provider_name("Azure")).expect_err("Unknown delete should fail.");

	assert_eq!(err.to_string(), "Error occurred while deleting Identity Provider Azure");
}

#[test]
fn wrong_session_cookie_fails_every_call() {
	let backend = Arc::new(MemoryIdpBackend::default().with_session_cookie("JSESSIONID=other"));
	let client: MemoryTestClient =
		IdentityProviderMgtClient::new(test_session(), backend.clone(), backend);
	let err = client.get_user_store_domains().expect_err("Unauthenticated call should fail.");

	assert_eq!(err.operation, Operation::GetUserStoreDomains);
	assert_eq!(
		StdError::source(&err).map(ToString::to_string).as_deref(),
		Some("Session is not authenticated.")
	);
}

#[test]
fn operation_errors_propagate_into_the_crate_error() {
	fn list(client: &MemoryTestClient) -> Result<usize> {
		Ok(client.get_idps()?.len())
	}

	let client = build_memory_test_client(MemoryIdpBackend::default().with_session_cookie("x"));

	assert!(matches!(list(&client), Err(Error::Operation(_))));
}

#[test]
fn facades_share_one_backend() {
	let client = build_memory_test_client(MemoryIdpBackend::default());
	let clone = client.clone();

	client.add_idp(&provider("Google")).expect("Adding should succeed.");

	assert_eq!(clone.get_idps().expect("Listing should succeed.").len(), 1);
	assert_eq!(clone.session(), client.session());
	assert!(!format!("{client:?}").contains(TEST_COOKIE));
}
