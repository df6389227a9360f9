//! Strongly typed identifiers enforced across the management domain.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal, $validate:path) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				$validate($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				$validate($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 254;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (provider, claim).
		kind: &'static str,
	},
	/// The identifier starts or ends with whitespace.
	#[error("{kind} identifier has surrounding whitespace.")]
	SurroundingWhitespace {
		/// Kind of identifier (provider, claim).
		kind: &'static str,
	},
	/// The identifier contains characters that are not allowed for its kind.
	#[error("{kind} identifier contains a forbidden character: {ch:?}.")]
	ForbiddenCharacter {
		/// Kind of identifier (provider, claim).
		kind: &'static str,
		/// First offending character.
		ch: char,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (provider, claim).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! {
	ProviderName,
	"Unique name of an identity provider within a tenant.",
	"Provider",
	validate_display_name
}
def_id! { ClaimUri, "URI identifying a claim dialect entry.", "Claim", validate_token }

/// Provider names are display names: interior spaces are fine, padding and control
/// characters are not.
fn validate_display_name(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	validate_common(kind, view)?;

	if view.starts_with(char::is_whitespace) || view.ends_with(char::is_whitespace) {
		return Err(IdentifierError::SurroundingWhitespace { kind });
	}
	if let Some(ch) = view.chars().find(|ch| ch.is_control()) {
		return Err(IdentifierError::ForbiddenCharacter { kind, ch });
	}

	Ok(())
}

fn validate_token(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	validate_common(kind, view)?;

	if let Some(ch) = view.chars().find(|ch| ch.is_whitespace() || ch.is_control()) {
		return Err(IdentifierError::ForbiddenCharacter { kind, ch });
	}

	Ok(())
}

fn validate_common(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().count() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}
