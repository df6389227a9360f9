//! Identity-provider models exchanged with the management service and referenced by
//! provisioning configuration.
//!
//! `identity` holds the federated [`IdentityProvider`], whose identity is its
//! [`ProviderName`](crate::auth::ProviderName), and its document hydration routine.
//! `resident` holds the tenant's own [`ResidentIdentityProvider`].

pub mod identity;
pub mod resident;

pub use identity::*;
pub use resident::*;
