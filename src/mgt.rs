//! Identity-provider management facade.
//!
//! [`IdentityProviderMgtClient`] issues synchronous calls against two remote service
//! seams, [`IdentityProviderMgtService`] and [`UserAdminService`], using the
//! [`SessionContext`] captured at construction. Whatever goes wrong underneath, each
//! call fails with one [`OperationError`](crate::error::OperationError) carrying a
//! fixed, operation-specific message; the original cause is logged and kept as the
//! error source. [`MemoryIdpBackend`] implements both seams in-process.

pub mod client;
pub mod memory;
pub mod service;
pub mod session;

pub use client::*;
pub use memory::*;
pub use service::*;
pub use session::*;
