//! Identity-provider management primitives: hydrate outbound provisioning configuration
//! from configuration documents, drive the management services through a uniform-error
//! facade, and carry relying-party claims without sharing mutable state.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod document;
pub mod error;
pub mod mgt;
pub mod obs;
pub mod provider;
pub mod provisioning;
pub mod relying_party;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and fixtures for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::ProviderName,
		document::Element,
		mgt::{IdentityProviderMgtClient, MemoryIdpBackend, SessionContext},
		provider::IdentityProvider,
	};

	/// Facade type alias used by integration tests.
	pub type MemoryTestClient = IdentityProviderMgtClient<MemoryIdpBackend, MemoryIdpBackend>;

	/// Session cookie presented by [`test_session`].
	pub const TEST_COOKIE: &str = "JSESSIONID=integration-test";

	/// Builds a session against a local backend using [`TEST_COOKIE`].
	pub fn test_session() -> SessionContext {
		SessionContext::new(TEST_COOKIE, "https://localhost:9443/services/")
			.expect("Failed to build test session context.")
	}

	/// Constructs a facade whose services are both backed by `backend`.
	pub fn build_memory_test_client(backend: MemoryIdpBackend) -> MemoryTestClient {
		let backend = Arc::new(backend);

		IdentityProviderMgtClient::new(test_session(), backend.clone(), backend)
	}

	/// Parses a provider name fixture.
	pub fn provider_name(name: &str) -> ProviderName {
		ProviderName::new(name).expect("Provider name fixture should be valid.")
	}

	/// Builds a provider fixture with only its name set.
	pub fn provider(name: &str) -> IdentityProvider {
		IdentityProvider::new(provider_name(name))
	}

	/// Builds an `IdentityProvider` document element with the provided name.
	pub fn provider_element(name: &str) -> Element {
		Element::new("IdentityProvider").with_child(Element::leaf("IdentityProviderName", name))
	}
}

mod _prelude {
	pub use std::{
		borrow::Borrow,
		collections::{BTreeMap, HashMap, HashSet},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		hash::{Hash, Hasher},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
