//! Optional observability helpers for management calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to emit spans named `idp_mgt.call` with the `operation` field,
//!   plus an `error` event carrying the original cause whenever a call fails.
//! - Enable `metrics` to increment the `idp_mgt_call_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Remote operations exposed by the management facade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Fetch the tenant's resident identity provider.
	GetResidentIdp,
	/// Update the resident identity provider's realm settings.
	UpdateResidentIdp,
	/// List every registered identity provider.
	GetIdps,
	/// Fetch one identity provider by name.
	GetIdpByName,
	/// Register a new identity provider.
	AddIdp,
	/// Delete an identity provider by name.
	DeleteIdp,
	/// Replace an identity provider, addressed by its previous name.
	UpdateIdp,
	/// List the local claim dialect URIs.
	GetAllLocalClaimUris,
	/// List the user-store domains of the caller's tenant realm.
	GetUserStoreDomains,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::GetResidentIdp => "get_resident_idp",
			Operation::UpdateResidentIdp => "update_resident_idp",
			Operation::GetIdps => "get_idps",
			Operation::GetIdpByName => "get_idp_by_name",
			Operation::AddIdp => "add_idp",
			Operation::DeleteIdp => "delete_idp",
			Operation::UpdateIdp => "update_idp",
			Operation::GetAllLocalClaimUris => "get_all_local_claim_uris",
			Operation::GetUserStoreDomains => "get_user_store_domains",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a facade call.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure returned to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
