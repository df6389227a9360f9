//! Outbound provisioning configuration and its document hydration.
//!
//! [`OutboundProvisioningConfig::build`] walks an `OutboundProvisioningConfig` element,
//! collecting provisioning identity providers into a deduplicating [`ProviderSet`] and
//! role names into an optional role filter. Hydration never fails: unknown sections
//! are skipped and malformed entries are dropped.

pub mod config;
pub mod set;

pub use config::*;
pub use set::*;
