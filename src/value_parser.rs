//! Leaf and nested value parsers.
//!
//! A [`ValueParser`] turns one document node into one typed value. The two
//! variants are a closed sum: a [`Leaf`] converts a terminal scalar or list
//! through a validate-then-convert pair, while a [`NestedParser`]
//! implementation composes entry and map parsers over a sub-map. Exhaustive
//! matching on the enum replaces the ask-then-cast idiom, so requesting the
//! wrong variant is not representable.

use core::fmt;

use camino::Utf8PathBuf;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ConfigError;
use crate::help::Help;
use crate::node::{Node, NodeMap};

/// Hint shown when a nested parser receives a non-map node.
const MAP_HINT: &str = "<map>";

/// A terminal value parser: a validator, a converter, and a format hint.
///
/// The converter runs only after the validator accepts the node. Leaves whose
/// conversion re-derives parsing (byte-size, where the numeric part can
/// overflow) may still return `None`; that maps to the same
/// [`ConfigError::UnexpectedValue`] as a validator rejection.
pub struct Leaf<T> {
    validator: fn(&Node) -> bool,
    converter: fn(&Node) -> Option<T>,
    hint: &'static str,
}

impl<T> Clone for Leaf<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Leaf<T> {}

impl<T> Leaf<T> {
    /// Creates a leaf from a validate-then-convert pair and a format hint.
    pub const fn new(
        validator: fn(&Node) -> bool,
        converter: fn(&Node) -> Option<T>,
        hint: &'static str,
    ) -> Self {
        Self {
            validator,
            converter,
            hint,
        }
    }

    /// The human-readable format hint, e.g. `<size>`.
    pub const fn hint(&self) -> &'static str {
        self.hint
    }

    /// Parses a single node, failing with the scoped key and this leaf's
    /// hint when the node does not match.
    pub fn parse(&self, node: &Node, scope: &str) -> Result<T, ConfigError> {
        if !(self.validator)(node) {
            return Err(ConfigError::UnexpectedValue {
                key: scope.to_string(),
                actual: node.clone(),
                expected: self.hint,
            });
        }
        (self.converter)(node).ok_or_else(|| ConfigError::UnexpectedValue {
            key: scope.to_string(),
            actual: node.clone(),
            expected: self.hint,
        })
    }
}

impl<T> fmt::Debug for Leaf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf").field("hint", &self.hint).finish()
    }
}

/// An aggregate value parser over a sub-map: the schema extension point.
///
/// Concrete implementations hold their declared [`Value`](crate::Value),
/// [`EnumValue`](crate::EnumValue) and [`MapParser`](crate::MapParser)
/// sub-schemas as fields and delegate to them in declaration order, so the
/// first sub-entry failure propagates and help entries come out in the order
/// they were declared.
pub trait NestedParser<T>: Send + Sync {
    /// Parses the sub-map at `scope` into the aggregate value.
    fn parse(&self, map: &NodeMap, scope: &str) -> Result<T, ConfigError>;

    /// One help entry per declared sub-schema, in declaration order. Pure
    /// over schema shape; consults no input.
    fn help(&self, scope: &str) -> Vec<Help>;
}

/// A value parser: either a terminal [`Leaf`] or a composite nested schema.
pub enum ValueParser<T> {
    /// A terminal scalar or list value.
    Leaf(Leaf<T>),
    /// A composite value built from sub-entries.
    Nested(Box<dyn NestedParser<T>>),
}

impl<T> ValueParser<T> {
    /// Wraps a nested schema implementation.
    pub fn nested(parser: impl NestedParser<T> + 'static) -> Self {
        ValueParser::Nested(Box::new(parser))
    }

    /// Parses one node at the given scope.
    ///
    /// A nested parser requires the node to be a map; anything else fails
    /// with an unexpected-value error before the schema recurses.
    pub fn parse(&self, node: &Node, scope: &str) -> Result<T, ConfigError> {
        match self {
            ValueParser::Leaf(leaf) => leaf.parse(node, scope),
            ValueParser::Nested(nested) => match node.as_map() {
                Some(map) => nested.parse(map, scope),
                None => Err(ConfigError::UnexpectedValue {
                    key: scope.to_string(),
                    actual: node.clone(),
                    expected: MAP_HINT,
                }),
            },
        }
    }
}

/// A `host:port` pair parsed from a socket address option.
///
/// The host is kept as written: no name resolution happens at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SocketAddress {
    /// The host name or address literal.
    pub host: String,
    /// The port.
    pub port: u16,
}

impl SocketAddress {
    /// Creates an address from a host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for SocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// The prebuilt leaf table.
///
/// Each leaf is a self-contained constant: fn-pointer validator and
/// converter plus a static hint, so the table needs no initialization order
/// and is shared freely across parse and help calls.
pub mod leaf {
    use super::*;

    /// Any string scalar.
    pub const STRING: Leaf<String> = Leaf::new(Node::is_string, convert_string, "<string>");

    /// Any integer scalar.
    pub const INTEGER: Leaf<i64> = Leaf::new(Node::is_integer, convert_integer, "<int>");

    /// Any floating-point scalar.
    pub const FLOAT: Leaf<f64> = Leaf::new(Node::is_float, convert_float, "<float>");

    /// Any boolean scalar.
    pub const BOOLEAN: Leaf<bool> = Leaf::new(Node::is_boolean, convert_boolean, "<boolean>");

    /// A filesystem path. Wrapped as written; existence is not checked.
    pub const PATH: Leaf<Utf8PathBuf> =
        Leaf::new(Node::is_string, convert_path, "<relative or absolute path>");

    /// A byte size such as `500mb`: digits with an optional `kb`/`mb`/`gb`
    /// unit, case-insensitive. No unit means bytes.
    pub const BYTE_SIZE: Leaf<u64> = Leaf::new(is_byte_size, convert_byte_size, "<size>");

    /// A `host:port` socket address with a non-empty host.
    pub const SOCKET_ADDRESS: Leaf<SocketAddress> =
        Leaf::new(is_socket_address, convert_socket_address, "<address:port>");

    /// A list whose every element is a string.
    pub const STRING_LIST: Leaf<Vec<String>> =
        Leaf::new(is_string_list, convert_string_list, "<[string, ...]>");

    fn convert_string(node: &Node) -> Option<String> {
        node.as_string().map(str::to_owned)
    }

    fn convert_integer(node: &Node) -> Option<i64> {
        node.as_integer()
    }

    fn convert_float(node: &Node) -> Option<f64> {
        node.as_float()
    }

    fn convert_boolean(node: &Node) -> Option<bool> {
        node.as_boolean()
    }

    fn convert_path(node: &Node) -> Option<Utf8PathBuf> {
        node.as_string().map(Utf8PathBuf::from)
    }

    fn is_byte_size(node: &Node) -> bool {
        node.as_string().is_some_and(is_byte_size_str)
    }

    fn convert_byte_size(node: &Node) -> Option<u64> {
        node.as_string().and_then(parse_byte_size)
    }

    fn is_socket_address(node: &Node) -> bool {
        node.as_string().is_some_and(|raw| parse_socket_address(raw).is_some())
    }

    fn convert_socket_address(node: &Node) -> Option<SocketAddress> {
        node.as_string().and_then(parse_socket_address)
    }

    fn is_string_list(node: &Node) -> bool {
        node.as_list()
            .is_some_and(|items| items.iter().all(Node::is_string))
    }

    fn convert_string_list(node: &Node) -> Option<Vec<String>> {
        let items = node.as_list()?;
        items
            .iter()
            .map(|item| item.as_string().map(str::to_owned))
            .collect()
    }
}

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

static BYTE_SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([0-9]+)\s*(kb|mb|gb)?$").expect("byte size pattern is valid")
});

fn is_byte_size_str(raw: &str) -> bool {
    BYTE_SIZE_PATTERN.is_match(raw)
}

/// Parses a size string into bytes. The grammar is re-matched here even
/// though the validator already ran: both phases share the
/// validate-then-convert contract every other leaf follows.
fn parse_byte_size(raw: &str) -> Option<u64> {
    let captures = BYTE_SIZE_PATTERN.captures(raw)?;
    let quantity: u64 = captures[1].parse().ok()?;
    let multiplier = match captures.get(2).map(|unit| unit.as_str()) {
        None => 1,
        Some(unit) if unit.eq_ignore_ascii_case("kb") => KB,
        Some(unit) if unit.eq_ignore_ascii_case("mb") => MB,
        Some(unit) if unit.eq_ignore_ascii_case("gb") => GB,
        Some(_) => return None,
    };
    quantity.checked_mul(multiplier)
}

/// Splits `host:port`, requiring a non-empty host and an all-digit port. The
/// split is from the right so IPv6 literals like `[::1]:1729` keep their
/// brackets in the host part. The digit check is stricter than `u16::parse`,
/// which would admit a leading `+` sign no address grammar allows.
fn parse_socket_address(raw: &str) -> Option<SocketAddress> {
    let (host, port) = raw.rsplit_once(':')?;
    if host.is_empty() || port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let port: u16 = port.parse().ok()?;
    Some(SocketAddress::new(host, port))
}
