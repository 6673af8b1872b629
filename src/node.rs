//! The generic document tree handed to the schema.
//!
//! A [`Node`] is produced by an external loader (YAML, JSON, whatever the
//! embedding application reads) and is read-only to this crate. Schemas only
//! ever inspect nodes through the type predicates and borrowing accessors
//! defined here.

use core::fmt;

use indexmap::IndexMap;

/// The map form of a [`Node`]. Keys are the document's own option names.
///
/// Insertion order is preserved so that parse results and error walks are
/// deterministic for a given document.
pub type NodeMap = IndexMap<String, Node>;

/// A loaded configuration document value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A string scalar.
    String(String),
    /// An integer scalar.
    Integer(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A boolean scalar.
    Boolean(bool),
    /// An ordered list of values.
    List(Vec<Node>),
    /// A map of option names to values.
    Map(NodeMap),
}

impl Node {
    /// Returns true if this node is a string scalar.
    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    /// Returns true if this node is an integer scalar.
    pub fn is_integer(&self) -> bool {
        matches!(self, Node::Integer(_))
    }

    /// Returns true if this node is a floating-point scalar.
    pub fn is_float(&self) -> bool {
        matches!(self, Node::Float(_))
    }

    /// Returns true if this node is a boolean scalar.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Node::Boolean(_))
    }

    /// Returns true if this node is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// Returns true if this node is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    /// The string value, if this node is a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Node::String(value) => Some(value),
            _ => None,
        }
    }

    /// The integer value, if this node is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Node::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// The float value, if this node is a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Node::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The boolean value, if this node is a boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Node::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// The elements, if this node is a list.
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this node is a map.
    pub fn as_map(&self) -> Option<&NodeMap> {
        match self {
            Node::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    /// Renders the node in a compact document-literal form, for embedding
    /// offending values in error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::String(value) => write!(f, "{value}"),
            Node::Integer(value) => write!(f, "{value}"),
            Node::Float(value) => write!(f, "{value}"),
            Node::Boolean(value) => write!(f, "{value}"),
            Node::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Node::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Integer(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Float(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Boolean(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::List(items)
    }
}

impl From<NodeMap> for Node {
    fn from(entries: NodeMap) -> Self {
        Node::Map(entries)
    }
}
