//! Deduplicating container for provider references.

// std
use std::collections::hash_set::{IntoIter, Iter};
// self
use crate::{_prelude::*, provider::IdentityProvider};

/// Unordered provider collection that collapses duplicates by provider identity.
///
/// When equal providers collide the first one inserted is kept; since equal providers
/// are interchangeable, callers must not rely on which instance survives, nor on
/// iteration order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent, bound(deserialize = "P: Deserialize<'de> + Eq + Hash"))]
pub struct ProviderSet<P = IdentityProvider>(HashSet<P>);
impl<P> ProviderSet<P>
where
	P: Eq + Hash,
{
	/// Creates an empty set.
	pub fn new() -> Self {
		Self(HashSet::new())
	}

	/// Number of distinct providers.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if the set holds no providers.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true if a provider equal to `key` is present.
	///
	/// For [`IdentityProvider`] the key may be a provider name (`&str`).
	pub fn contains<Q>(&self, key: &Q) -> bool
	where
		P: Borrow<Q>,
		Q: ?Sized + Eq + Hash,
	{
		self.0.contains(key)
	}

	/// Looks up the stored provider equal to `key`.
	pub fn get<Q>(&self, key: &Q) -> Option<&P>
	where
		P: Borrow<Q>,
		Q: ?Sized + Eq + Hash,
	{
		self.0.get(key)
	}

	/// Iterator over the providers in unspecified order.
	pub fn iter(&self) -> Iter<'_, P> {
		self.0.iter()
	}
}
impl<P> Default for ProviderSet<P>
where
	P: Eq + Hash,
{
	fn default() -> Self {
		Self::new()
	}
}
impl<P> PartialEq for ProviderSet<P>
where
	P: Eq + Hash,
{
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}
impl<P> Eq for ProviderSet<P> where P: Eq + Hash {}
impl<P> FromIterator<P> for ProviderSet<P>
where
	P: Eq + Hash,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = P>,
	{
		let mut set = HashSet::new();

		for provider in iter {
			// `insert` leaves the resident element untouched on collision.
			set.insert(provider);
		}

		Self(set)
	}
}
impl<P> IntoIterator for ProviderSet<P> {
	type IntoIter = IntoIter<P>;
	type Item = P;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
impl<'a, P> IntoIterator for &'a ProviderSet<P> {
	type IntoIter = Iter<'a, P>;
	type Item = &'a P;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
