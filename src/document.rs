//! Read-only hierarchical document abstraction consumed by hydration routines.
//!
//! Hydration only needs three things from a document layer: the children of a node,
//! its local name, and its text content. [`GenericNode`] captures exactly that, so any
//! parser can be adapted without this crate depending on it. [`Element`] is an owned
//! implementation for callers that assemble documents by hand or load them from JSON.

// self
use crate::{_prelude::*, error::DocumentError};

/// Node of a hierarchical configuration document.
pub trait GenericNode {
	/// Immediate child elements in document order.
	fn children(&self) -> impl Iterator<Item = &Self>;

	/// Element name without any namespace prefix.
	fn local_name(&self) -> &str;

	/// Text content, if the node carries any.
	fn text(&self) -> Option<&str>;
}

/// Hydration routine that turns one document node into a typed value.
///
/// Returning `None` signals that the node did not describe a usable value; callers
/// drop such results instead of treating them as errors.
pub trait FromNode
where
	Self: Sized,
{
	/// Hydrates a value from `node`.
	fn from_node<N>(node: &N) -> Option<Self>
	where
		N: GenericNode;
}

/// Owned document element.
///
/// The JSON form is `{"name": "...", "text": "...", "children": [...]}` with `text` and
/// `children` optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
	/// Qualified element name (`prefix:Local` or `Local`).
	pub name: String,
	/// Text content.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	/// Child elements in document order.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<Element>,
}
impl Element {
	/// Creates an empty element with the provided name.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into(), text: None, children: Vec::new() }
	}

	/// Creates a text-only element.
	pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
		Self::new(name).with_text(text)
	}

	/// Sets the text content.
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.text = Some(text.into());

		self
	}

	/// Appends a single child.
	pub fn with_child(mut self, child: Element) -> Self {
		self.children.push(child);

		self
	}

	/// Appends multiple children.
	pub fn with_children<I>(mut self, children: I) -> Self
	where
		I: IntoIterator<Item = Element>,
	{
		self.children.extend(children);

		self
	}

	/// Decodes an element tree from its JSON form.
	pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
		let de = &mut serde_json::Deserializer::from_str(json);

		Ok(serde_path_to_error::deserialize(de)?)
	}
}
impl GenericNode for Element {
	fn children(&self) -> impl Iterator<Item = &Self> {
		self.children.iter()
	}

	fn local_name(&self) -> &str {
		match self.name.rsplit_once(':') {
			Some((_, local)) => local,
			None => &self.name,
		}
	}

	fn text(&self) -> Option<&str> {
		self.text.as_deref()
	}
}
